//! I2C Helper Tests
//!
//! Address handling, register helpers and the I2C byte sink.
//! Run with: cargo test --no-default-features --features std --test i2c_tests

use clock_display::config::MAX_REGISTER_BURST;
use clock_display::error::Error;
use clock_display::hal::i2c::{I2cAddress, I2cBus, I2cSink};
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use embedded_io::Write;

/// Bus that accepts everything
struct NullBus;

impl ErrorType for NullBus {
    type Error = ErrorKind;
}

impl I2c for NullBus {
    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// Addresses
// =============================================================================

#[test]
fn test_address_is_seven_bit() {
    assert_eq!(I2cAddress::new(0x68).addr(), 0x68);
    assert_eq!(I2cAddress::new(0xE8).addr(), 0x68);
}

#[test]
fn test_address_from_8bit() {
    assert_eq!(I2cAddress::from_8bit(0x50), I2cAddress::MATRIX_ORBITAL);
    assert_eq!(I2cAddress::from_8bit(0xD0), I2cAddress::DS3231);
}

// =============================================================================
// Register Helpers
// =============================================================================

#[test]
fn test_single_register_access() {
    let expectations = [
        I2cTrans::write_read(0x68, vec![0x0E], vec![0x1C]),
        I2cTrans::write(0x68, vec![0x0E, 0x04]),
    ];
    let mut bus = I2cBus::new(I2cMock::new(&expectations), I2cAddress::DS3231);

    assert_eq!(bus.read_reg(0x0E).unwrap(), 0x1C);
    bus.write_reg(0x0E, 0x04).unwrap();
    bus.release().done();
}

#[test]
fn test_register_bursts() {
    let expectations = [
        I2cTrans::write(0x68, vec![0x03, 1, 2, 3, 4]),
        I2cTrans::write_read(0x68, vec![0x11], vec![0x19, 0x40]),
    ];
    let mut bus = I2cBus::new(I2cMock::new(&expectations), I2cAddress::DS3231);

    bus.write_regs(0x03, &[1, 2, 3, 4]).unwrap();
    let mut buf = [0u8; 2];
    bus.read_regs(0x11, &mut buf).unwrap();

    assert_eq!(buf, [0x19, 0x40]);
    assert_eq!(bus.address(), I2cAddress::DS3231);
    bus.release().done();
}

#[test]
fn test_full_burst_fits() {
    let mut bus = I2cBus::new(NullBus, I2cAddress::DS3231);
    bus.write_regs(0x00, &[0u8; MAX_REGISTER_BURST]).unwrap();
}

#[test]
fn test_long_run_falls_back_to_single_registers() {
    let values: Vec<u8> = (0..=MAX_REGISTER_BURST as u8).collect();
    let expectations: Vec<I2cTrans> = values
        .iter()
        .map(|&v| I2cTrans::write(0x68, vec![0x02 + v, v]))
        .collect();
    let mut bus = I2cBus::new(I2cMock::new(&expectations), I2cAddress::DS3231);

    bus.write_regs(0x02, &values).unwrap();
    bus.release().done();
}

#[test]
fn test_long_run_stops_at_first_error() {
    let expectations = [
        I2cTrans::write(0x68, vec![0x00, 0xAA]),
        I2cTrans::write(0x68, vec![0x01, 0xAA]).with_error(ErrorKind::Other),
    ];
    let mut bus = I2cBus::new(I2cMock::new(&expectations), I2cAddress::DS3231);

    assert_eq!(
        bus.write_regs(0x00, &[0xAA; MAX_REGISTER_BURST + 1]),
        Err(ErrorKind::Other)
    );
    bus.release().done();
}

// =============================================================================
// Byte Sink
// =============================================================================

#[test]
fn test_sink_writes_one_transaction_per_chunk() {
    let expectations = [
        I2cTrans::write(0x28, vec![0xFE, 0x58]),
        I2cTrans::write(0x28, b"ok".to_vec()),
    ];
    let mut sink = I2cSink::new(I2cMock::new(&expectations), I2cAddress::MATRIX_ORBITAL);

    assert_eq!(sink.write(&[0xFE, 0x58]).unwrap(), 2);
    sink.write_all(b"ok").unwrap();
    assert_eq!(sink.write(&[]).unwrap(), 0);
    sink.flush().unwrap();
    sink.release().done();
}

#[test]
fn test_sink_reports_bus_error() {
    let expectations = [I2cTrans::write(0x28, vec![b'x']).with_error(ErrorKind::Other)];
    let mut sink = I2cSink::new(I2cMock::new(&expectations), I2cAddress::MATRIX_ORBITAL);

    assert_eq!(sink.write(b"x"), Err(Error::Transport(ErrorKind::Other)));
    sink.release().done();
}
