//! Types Module Tests
//!
//! Tests for time/date, temperature, square-wave and error types.
//! Run with: cargo test --no-default-features --features std --test types_tests

use clock_display::error::{Error, Field};
use clock_display::types::{
    SquareWaveFrequency, Temperature, TimeDateElements, TimeDateRegisterImage,
};

// =============================================================================
// TimeDateElements Tests
// =============================================================================

#[test]
fn test_time_date_default_is_zero() {
    assert_eq!(TimeDateElements::default().to_array(), [0; 7]);
}

#[test]
fn test_time_date_builders() {
    let td = TimeDateElements::from_time(14, 30, 45).with_date(3, 10, 6, 23);
    assert_eq!(td.to_array(), [45, 30, 14, 3, 10, 6, 23]);
    assert_eq!(TimeDateElements::from_array(td.to_array()), td);
}

#[test]
fn test_time_date_display() {
    let td = TimeDateElements::from_time(9, 5, 7).with_date(1, 2, 3, 4);
    assert_eq!(td.to_string(), "2004-03-02 09:05:07");
}

#[test]
fn test_register_image_order() {
    let image = TimeDateRegisterImage::from_registers([0x45, 0x30, 0x14, 0x03, 0x10, 0x06, 0x23]);
    assert_eq!(image.seconds, 0x45);
    assert_eq!(image.year, 0x23);
    assert_eq!(image.to_registers()[2], 0x14);
}

// =============================================================================
// Temperature Tests
// =============================================================================

#[test]
fn test_temperature_combines_parts() {
    let t = Temperature::new(23, 25);
    assert_eq!(t.centi_celsius(), 2325);
    assert!((t.celsius() - 23.25).abs() < f32::EPSILON);
}

#[test]
fn test_temperature_keeps_bcd_parts() {
    let t = Temperature::new(31, 75);
    assert_eq!(t.integer_bcd(), 0x31);
    assert_eq!(t.hundredths_bcd(), 0x75);
}

#[test]
fn test_temperature_display() {
    assert_eq!(Temperature::new(23, 25).to_string(), "23.25 C");
    assert_eq!(Temperature::new(5, 0).to_string(), "5.00 C");
}

// =============================================================================
// SquareWaveFrequency Tests
// =============================================================================

#[test]
fn test_square_wave_from_hz() {
    for freq in SquareWaveFrequency::ALL {
        assert_eq!(SquareWaveFrequency::from_hz(freq.as_hz()), Some(freq));
    }
    assert_eq!(SquareWaveFrequency::from_hz(32_768), None);
    assert_eq!(SquareWaveFrequency::from_hz(2), None);
}

#[test]
fn test_square_wave_rate_select_bits() {
    assert_eq!(SquareWaveFrequency::Hz1.rate_select(), 0b00);
    assert_eq!(SquareWaveFrequency::Hz1024.rate_select(), 0b01);
    assert_eq!(SquareWaveFrequency::Hz4096.rate_select(), 0b10);
    assert_eq!(SquareWaveFrequency::Hz8192.rate_select(), 0b11);
}

#[test]
fn test_square_wave_default_is_1hz() {
    assert_eq!(SquareWaveFrequency::default(), SquareWaveFrequency::Hz1);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_error_display() {
    let range: Error<()> = Error::OutOfRange {
        field: Field::Month,
        value: 120,
    };
    assert_eq!(range.to_string(), "month value 120 does not fit in two BCD digits");

    let freq: Error<()> = Error::UnsupportedFrequency(50);
    assert_eq!(freq.to_string(), "unsupported square-wave frequency 50 Hz");

    let format: Error<()> = Error::Format;
    assert_eq!(format.to_string(), "text formatting failed");

    let transport: Error<&str> = Error::Transport("nack");
    assert_eq!(transport.to_string(), "transport error: \"nack\"");
    assert_eq!(transport.transport(), Some(&"nack"));
}

#[test]
fn test_error_from_transport() {
    let err: Error<u8> = 7u8.into();
    assert_eq!(err, Error::Transport(7));
    assert_eq!(Error::<u8>::UnsupportedFrequency(3).transport(), None);
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error>(_: &E) {}
    assert_std_error(&Error::<()>::UnsupportedFrequency(1));
}
