//! I2C Bus Abstractions
//!
//! Register-oriented helpers over any blocking [`embedded_hal::i2c::I2c`]
//! implementation, plus a byte sink that streams to an I2C peripheral.

use embedded_hal::i2c::I2c;

use crate::config::MAX_REGISTER_BURST;

/// I2C operation result
pub type I2cResult<T, E> = Result<T, E>;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// DS3231 real-time clock (Chronodot) address
    pub const DS3231: Self = Self(crate::config::DS3231_I2C_ADDR);

    /// Matrix Orbital character display default address
    pub const MATRIX_ORBITAL: Self = Self(crate::config::DISPLAY_I2C_ADDR);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Create from an 8-bit (write) address as printed in some datasheets
    #[must_use]
    pub const fn from_8bit(addr: u8) -> Self {
        Self(addr >> 1)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// I2C bus wrapper bound to one device address
pub struct I2cBus<I2C> {
    i2c: I2C,
    addr: I2cAddress,
}

impl<I2C: I2c> I2cBus<I2C> {
    /// Create a new I2C bus wrapper for the device at `addr`
    #[must_use]
    pub fn new(i2c: I2C, addr: I2cAddress) -> Self {
        Self { i2c, addr }
    }

    /// Device address
    #[must_use]
    pub fn address(&self) -> I2cAddress {
        self.addr
    }

    /// Write bytes to the device
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    pub fn write(&mut self, data: &[u8]) -> I2cResult<(), I2C::Error> {
        self.i2c.write(self.addr.addr(), data)
    }

    /// Write a single register
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    pub fn write_reg(&mut self, reg: u8, value: u8) -> I2cResult<(), I2C::Error> {
        trace!("i2c 0x{:02X} write reg 0x{:02X} = 0x{:02X}", self.addr.addr(), reg, value);
        self.i2c.write(self.addr.addr(), &[reg, value])
    }

    /// Read a single register
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    pub fn read_reg(&mut self, reg: u8) -> I2cResult<u8, I2C::Error> {
        let mut buf = [0u8];
        self.i2c.write_read(self.addr.addr(), &[reg], &mut buf)?;
        trace!("i2c 0x{:02X} read reg 0x{:02X} = 0x{:02X}", self.addr.addr(), reg, buf[0]);
        Ok(buf[0])
    }

    /// Write consecutive registers starting at `base_reg`
    ///
    /// Up to [`MAX_REGISTER_BURST`] values go out in one transaction; longer
    /// runs are written one register at a time.
    ///
    /// # Errors
    ///
    /// Returns the bus error of the first transaction that fails.
    pub fn write_regs(&mut self, base_reg: u8, values: &[u8]) -> I2cResult<(), I2C::Error> {
        if values.len() <= MAX_REGISTER_BURST {
            let mut buf = [0u8; MAX_REGISTER_BURST + 1];
            buf[0] = base_reg;
            buf[1..=values.len()].copy_from_slice(values);
            trace!(
                "i2c 0x{:02X} write {} regs from 0x{:02X}",
                self.addr.addr(),
                values.len(),
                base_reg
            );
            self.i2c.write(self.addr.addr(), &buf[..=values.len()])
        } else {
            let mut reg = base_reg;
            for &value in values {
                self.write_reg(reg, value)?;
                reg = reg.wrapping_add(1);
            }
            Ok(())
        }
    }

    /// Read consecutive registers starting at `base_reg` in one transaction
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    pub fn read_regs(&mut self, base_reg: u8, buffer: &mut [u8]) -> I2cResult<(), I2C::Error> {
        self.i2c.write_read(self.addr.addr(), &[base_reg], buffer)?;
        trace!(
            "i2c 0x{:02X} read {} regs from 0x{:02X}",
            self.addr.addr(),
            buffer.len(),
            base_reg
        );
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Byte sink that writes each chunk to an I2C peripheral
///
/// Lets byte-oriented drivers such as
/// [`MatrixOrbital`](crate::drivers::matrix_orbital::MatrixOrbital) run over
/// I2C instead of a UART.
pub struct I2cSink<I2C> {
    bus: I2cBus<I2C>,
}

impl<I2C: I2c> I2cSink<I2C> {
    /// Create a sink for the device at `addr`
    #[must_use]
    pub fn new(i2c: I2C, addr: I2cAddress) -> Self {
        Self {
            bus: I2cBus::new(i2c, addr),
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.bus.release()
    }
}

impl<I2C: I2c> embedded_io::ErrorType for I2cSink<I2C> {
    type Error = crate::Error<I2C::Error>;
}

impl<I2C: I2c> embedded_io::Write for I2cSink<I2C> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.bus.write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
