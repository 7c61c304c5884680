//! DS3231 (Chronodot) Real-Time Clock Driver
//!
//! Reads and writes the BCD time/date registers, reads the die temperature
//! and selects the square-wave output frequency.
//!
//! The driver runs the clock in 24-hour mode only: the 12/24 and AM/PM bits
//! of the hours register are discarded on read and never set on write.
//!
//! The last register image, decoded time/date and temperature are cached in
//! the driver. A partial read only refreshes the fields it covers.

use embedded_hal::i2c::I2c;

use crate::bcd::{bcd2dec, try_dec2bcd};
use crate::error::{Error, Field};
use crate::hal::i2c::{I2cAddress, I2cBus};
use crate::types::{SquareWaveFrequency, Temperature, TimeDateElements, TimeDateRegisterImage};

/// Chronodot operation result
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// DS3231 register addresses
mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const WEEK_DAY: u8 = 0x03;
    pub const CONTROL: u8 = 0x0E;
    pub const TEMP_MSB: u8 = 0x11;
}

/// Bits of each register that carry the value
pub mod mask {
    /// Seconds; bit 7 unused
    pub const SECONDS: u8 = 0b0111_1111;
    /// Minutes
    pub const MINUTES: u8 = 0b1111_1111;
    /// Hours; bit 6 is 12/24 mode, bit 7 unused
    pub const HOURS: u8 = 0b0011_1111;
    /// Day of the week
    pub const WEEK_DAY: u8 = 0b1111_1111;
    /// Day of the month
    pub const DAY: u8 = 0b1111_1111;
    /// Month; bit 7 is the century flag
    pub const MONTH: u8 = 0b0111_1111;
    /// Year
    pub const YEAR: u8 = 0b1111_1111;
    /// Temperature MSB; bit 7 is the sign
    pub const TEMP_INTEGER: u8 = 0b0111_1111;
}

/// Control register (0x0E) bits
pub mod control {
    /// Rate select 1
    pub const RS1: u8 = 1 << 3;
    /// Rate select 2
    pub const RS2: u8 = 1 << 4;
    /// Position of RS1 within the register
    pub const RATE_SELECT_SHIFT: u8 = 3;
    /// Both rate select bits
    pub const RATE_SELECT: u8 = RS1 | RS2;
}

/// Per-field masks in register order, starting at 0x00
const TIME_DATE_MASKS: [u8; 7] = [
    mask::SECONDS,
    mask::MINUTES,
    mask::HOURS,
    mask::WEEK_DAY,
    mask::DAY,
    mask::MONTH,
    mask::YEAR,
];

/// Field names in register order, starting at 0x00
const TIME_DATE_FIELDS: [Field; 7] = [
    Field::Seconds,
    Field::Minutes,
    Field::Hours,
    Field::WeekDay,
    Field::Day,
    Field::Month,
    Field::Year,
];

/// Time registers span 0x00..0x03
const TIME_LEN: usize = 3;

/// Date registers span 0x03..0x07
const DATE_LEN: usize = 4;

/// Full time/date span 0x00..0x07
const TIME_DATE_LEN: usize = TIME_LEN + DATE_LEN;

/// Temperature quarter-degree step in hundredths
const TEMP_STEP_HUNDREDTHS: u8 = 25;

/// DS3231 driver
pub struct Chronodot<I2C> {
    bus: I2cBus<I2C>,
    registers: TimeDateRegisterImage,
    time_date: TimeDateElements,
    temperature: Temperature,
}

impl<I2C: I2c> Chronodot<I2C> {
    /// Create a driver for a DS3231 at its fixed address
    #[must_use]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, I2cAddress::DS3231)
    }

    /// Create a driver for a compatible clock at another address
    #[must_use]
    pub fn with_address(i2c: I2C, addr: I2cAddress) -> Self {
        Self {
            bus: I2cBus::new(i2c, addr),
            registers: TimeDateRegisterImage::default(),
            time_date: TimeDateElements::default(),
            temperature: Temperature::default(),
        }
    }

    /// Decoded time/date from the most recent reads
    #[must_use]
    pub fn time_date(&self) -> TimeDateElements {
        self.time_date
    }

    /// Masked BCD register bytes from the most recent reads
    #[must_use]
    pub fn register_image(&self) -> TimeDateRegisterImage {
        self.registers
    }

    /// Temperature from the most recent [`read_temperature`](Self::read_temperature)
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Read seconds through year
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the bus transaction fails; the cache is
    /// left as it was.
    pub fn read_time_date(&mut self) -> Result<TimeDateElements, I2C::Error> {
        let mut buf = [0u8; TIME_DATE_LEN];
        self.bus.read_regs(reg::SECONDS, &mut buf)?;
        self.store(0, &buf);
        debug!(
            "rtc time/date {}-{}-{} {}:{}:{}",
            self.time_date.year,
            self.time_date.month,
            self.time_date.day,
            self.time_date.hours,
            self.time_date.minutes,
            self.time_date.seconds
        );
        Ok(self.time_date)
    }

    /// Read seconds, minutes and hours; date fields keep their cached values
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the bus transaction fails; the cache is
    /// left as it was.
    pub fn read_time(&mut self) -> Result<TimeDateElements, I2C::Error> {
        let mut buf = [0u8; TIME_LEN];
        self.bus.read_regs(reg::SECONDS, &mut buf)?;
        self.store(0, &buf);
        debug!(
            "rtc time {}:{}:{}",
            self.time_date.hours,
            self.time_date.minutes,
            self.time_date.seconds
        );
        Ok(self.time_date)
    }

    /// Read weekday, day, month and year; time fields keep their cached values
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the bus transaction fails; the cache is
    /// left as it was.
    pub fn read_date(&mut self) -> Result<TimeDateElements, I2C::Error> {
        let mut buf = [0u8; DATE_LEN];
        self.bus.read_regs(reg::WEEK_DAY, &mut buf)?;
        self.store(TIME_LEN, &buf);
        debug!(
            "rtc date {}-{}-{} (weekday {})",
            self.time_date.year,
            self.time_date.month,
            self.time_date.day,
            self.time_date.week_day
        );
        Ok(self.time_date)
    }

    /// Read the die temperature
    ///
    /// The device refreshes these registers every 64 seconds. The sign bit is
    /// ignored, so readings are in 0..128 degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the bus transaction fails; the cache is
    /// left as it was.
    pub fn read_temperature(&mut self) -> Result<Temperature, I2C::Error> {
        let mut buf = [0u8; 2];
        self.bus.read_regs(reg::TEMP_MSB, &mut buf)?;

        let integer = buf[0] & mask::TEMP_INTEGER;
        let hundredths = (buf[1] >> 6) * TEMP_STEP_HUNDREDTHS;
        self.temperature = Temperature::new(integer, hundredths);

        debug!("rtc temperature {}.{:02} C", integer, hundredths);
        Ok(self.temperature)
    }

    /// Read the raw control register
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the bus transaction fails.
    pub fn read_control(&mut self) -> Result<u8, I2C::Error> {
        Ok(self.bus.read_reg(reg::CONTROL)?)
    }

    /// Select the square-wave output frequency
    ///
    /// Read-modify-write of the control register; only RS1/RS2 change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the bus transaction fails.
    pub fn set_sqw(&mut self, frequency: SquareWaveFrequency) -> Result<(), I2C::Error> {
        let current = self.bus.read_reg(reg::CONTROL)?;
        let updated = (current & !control::RATE_SELECT)
            | (frequency.rate_select() << control::RATE_SELECT_SHIFT);
        self.bus.write_reg(reg::CONTROL, updated)?;
        debug!("rtc square wave {} Hz", frequency.as_hz());
        Ok(())
    }

    /// Select the square-wave output frequency by value in Hz
    ///
    /// Anything but 1, 1024, 4096 or 8192 is rejected without bus traffic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFrequency`] for any other value and
    /// [`Error::Transport`] if the bus transaction fails.
    pub fn set_sqw_hz(&mut self, hz: u32) -> Result<(), I2C::Error> {
        let Some(frequency) = SquareWaveFrequency::from_hz(hz) else {
            warn!("rtc square wave {} Hz not supported", hz);
            return Err(Error::UnsupportedFrequency(hz));
        };
        self.set_sqw(frequency)
    }

    /// Write seconds through year in one transaction
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for a field above 99, before any bus
    /// traffic, and [`Error::Transport`] if the write fails.
    pub fn set_time_date(&mut self, elements: TimeDateElements) -> Result<(), I2C::Error> {
        let regs = Self::encode(elements, 0, TIME_DATE_LEN)?;
        self.bus.write_regs(reg::SECONDS, &regs)?;
        debug!("rtc time/date written");
        Ok(())
    }

    /// Write seconds, minutes and hours in one transaction
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for a field above 99, before any bus
    /// traffic, and [`Error::Transport`] if the write fails.
    pub fn set_time(&mut self, elements: TimeDateElements) -> Result<(), I2C::Error> {
        let regs = Self::encode(elements, 0, TIME_LEN)?;
        self.bus.write_regs(reg::SECONDS, &regs[..TIME_LEN])?;
        debug!("rtc time written");
        Ok(())
    }

    /// Write weekday, day, month and year in one transaction
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for a field above 99, before any bus
    /// traffic, and [`Error::Transport`] if the write fails.
    pub fn set_date(&mut self, elements: TimeDateElements) -> Result<(), I2C::Error> {
        let regs = Self::encode(elements, TIME_LEN, DATE_LEN)?;
        self.bus.write_regs(reg::WEEK_DAY, &regs[..DATE_LEN])?;
        debug!("rtc date written");
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.bus.release()
    }

    /// Mask and decode register bytes read from offset `first`
    fn store(&mut self, first: usize, bytes: &[u8]) {
        let mut registers = self.registers.to_registers();
        let mut decoded = self.time_date.to_array();

        for (idx, &byte) in (first..).zip(bytes) {
            registers[idx] = byte & TIME_DATE_MASKS[idx];
            decoded[idx] = bcd2dec(registers[idx]);
        }

        self.registers = TimeDateRegisterImage::from_registers(registers);
        self.time_date = TimeDateElements::from_array(decoded);
    }

    /// BCD-encode `len` fields starting at register offset `first` into the
    /// front of the returned array
    fn encode(
        elements: TimeDateElements,
        first: usize,
        len: usize,
    ) -> Result<[u8; TIME_DATE_LEN], I2C::Error> {
        let fields = elements.to_array();
        let mut regs = [0u8; TIME_DATE_LEN];

        for (slot, idx) in regs.iter_mut().zip(first..first + len) {
            let value = fields[idx];
            let Some(bcd) = try_dec2bcd(value) else {
                let field = TIME_DATE_FIELDS[idx];
                warn!("rtc {} value {} out of range", field, value);
                return Err(Error::OutOfRange { field, value });
            };
            *slot = bcd;
        }

        Ok(regs)
    }
}
