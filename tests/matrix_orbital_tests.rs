//! Matrix Orbital Driver Tests
//!
//! Byte-exact command emission and text forwarding.
//! Run with: cargo test --no-default-features --features std --test matrix_orbital_tests

use core::convert::Infallible;
use core::fmt::Write as _;

use clock_display::drivers::matrix_orbital::{cmd, Command, MatrixOrbital, COMMAND_PREFIX};
use clock_display::error::Error;
use clock_display::hal::i2c::{I2cAddress, I2cSink};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

/// Sink that records every write call
#[derive(Default)]
struct RecordingSink {
    bytes: Vec<u8>,
    writes: usize,
    flushes: usize,
}

impl embedded_io::ErrorType for RecordingSink {
    type Error = Infallible;
}

impl embedded_io::Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Sink whose link is down
struct BrokenSink;

impl embedded_io::ErrorType for BrokenSink {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(embedded_io::ErrorKind::BrokenPipe)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(embedded_io::ErrorKind::BrokenPipe)
    }
}

/// Value whose Display impl always fails
struct Unprintable;

impl core::fmt::Display for Unprintable {
    fn fmt(&self, _f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Err(core::fmt::Error)
    }
}

fn display() -> MatrixOrbital<RecordingSink> {
    MatrixOrbital::new(RecordingSink::default(), 4, 20)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_geometry_is_bookkeeping_only() {
    let lcd = display();
    assert_eq!(lcd.rows(), 4);
    assert_eq!(lcd.columns(), 20);

    let sink = lcd.release();
    assert!(sink.bytes.is_empty());
    assert_eq!(sink.writes, 0);
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_clear_is_one_command() {
    let mut lcd = display();
    lcd.clear().unwrap();

    let sink = lcd.release();
    assert_eq!(sink.bytes, [COMMAND_PREFIX, cmd::CLEAR]);
    assert_eq!(sink.writes, 1);
}

#[test]
fn test_cursor_set_sends_column_then_row() {
    let mut lcd = display();
    lcd.cursor_set(5, 2).unwrap();

    let sink = lcd.release();
    assert_eq!(sink.bytes, [COMMAND_PREFIX, cmd::CURSOR_SET, 5, 2]);
    assert_eq!(sink.writes, 1);
}

#[test]
fn test_toggle_commands() {
    let mut lcd = display();
    lcd.auto_scroll_on().unwrap();
    lcd.auto_scroll_off().unwrap();
    lcd.auto_line_wrap_on().unwrap();
    lcd.auto_line_wrap_off().unwrap();
    lcd.block_cursor_on().unwrap();
    lcd.block_cursor_off().unwrap();
    lcd.underline_cursor_on().unwrap();
    lcd.underline_cursor_off().unwrap();

    let sink = lcd.release();
    assert_eq!(
        sink.bytes,
        [
            0xFE, 0x51, 0xFE, 0x52, // auto scroll
            0xFE, 0x43, 0xFE, 0x44, // line wrap
            0xFE, 0x53, 0xFE, 0x54, // block cursor
            0xFE, 0x4A, 0xFE, 0x4B, // underline cursor
        ]
    );
    assert_eq!(sink.writes, 8);
}

#[test]
fn test_motion_commands() {
    let mut lcd = display();
    lcd.cursor_home().unwrap();
    lcd.cursor_left().unwrap();
    lcd.cursor_right().unwrap();
    lcd.new_line().unwrap();
    lcd.backspace().unwrap();

    let sink = lcd.release();
    assert_eq!(
        sink.bytes,
        [0xFE, 0x48, 0xFE, 0x4C, 0xFE, 0x4D, 0x0A, 0x08]
    );
}

#[test]
fn test_parameter_commands() {
    let mut lcd = display();
    lcd.set_contrast(200).unwrap();
    lcd.backlight_on(5).unwrap();
    lcd.backlight_off().unwrap();

    let sink = lcd.release();
    assert_eq!(
        sink.bytes,
        [0xFE, 0x50, 200, 0xFE, 0x42, 5, 0xFE, 0x46]
    );
    assert_eq!(sink.writes, 3);
}

#[test]
fn test_command_encoding_lengths() {
    assert_eq!(Command::Clear.encode().len(), 2);
    assert_eq!(Command::NewLine.encode().len(), 1);
    assert_eq!(Command::SetContrast(0).encode().len(), 3);
    assert_eq!(Command::CursorSet { x: 1, y: 1 }.encode().len(), 4);
    assert_eq!(
        Command::BacklightOn { minutes: 0 }.encode().as_slice(),
        [COMMAND_PREFIX, cmd::BACKLIGHT_ON, 0]
    );
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn test_text_byte_is_forwarded_unmodified() {
    let mut lcd = display();
    lcd.write_byte(b'A').unwrap();

    assert_eq!(lcd.release().bytes, [b'A']);
}

#[test]
fn test_formatted_text() {
    let mut lcd = display();
    write!(lcd, "{:02}:{:02}", 9, 5).unwrap();

    assert_eq!(lcd.release().bytes, b"09:05");
}

#[test]
fn test_text_after_command() {
    let mut lcd = display();
    lcd.cursor_set(1, 2).unwrap();
    write!(lcd, "Hi").unwrap();

    assert_eq!(lcd.release().bytes, [0xFE, 0x47, 1, 2, b'H', b'i']);
}

#[test]
fn test_print_formats_text() {
    let mut lcd = display();
    lcd.print(format_args!("{:02}:{:02}", 9, 5)).unwrap();
    lcd.print(format_args!("{}", char::from(COMMAND_PREFIX))).unwrap();

    // U+00FE is 0xC3 0xBE in UTF-8, neither byte is the prefix
    assert_eq!(lcd.release().bytes, [b'0', b'9', b':', b'0', b'5', 0xC3, 0xBE]);
}

#[test]
fn test_command_prefix_is_dropped_from_text() {
    let mut lcd = display();
    embedded_io::Write::write_all(&mut lcd, &[b'a', COMMAND_PREFIX, b'b']).unwrap();
    lcd.write_byte(COMMAND_PREFIX).unwrap();

    assert_eq!(lcd.release().bytes, b"ab");
}

#[test]
fn test_flush_reaches_sink() {
    let mut lcd = display();
    embedded_io::Write::flush(&mut lcd).unwrap();

    assert_eq!(lcd.release().flushes, 1);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_sink_error_is_reported() {
    let mut lcd = MatrixOrbital::new(BrokenSink, 2, 16);

    assert_eq!(
        lcd.clear(),
        Err(Error::Transport(embedded_io::ErrorKind::BrokenPipe))
    );
    assert!(write!(lcd, "x").is_err());
}

#[test]
fn test_print_reports_sink_error() {
    let mut lcd = MatrixOrbital::new(BrokenSink, 2, 16);

    assert_eq!(
        lcd.print(format_args!("{:02}", 7)),
        Err(Error::Transport(embedded_io::ErrorKind::BrokenPipe))
    );
}

#[test]
fn test_print_reports_format_error() {
    let mut lcd = display();

    assert_eq!(lcd.print(format_args!("a{}", Unprintable)), Err(Error::Format));
    assert_eq!(lcd.release().bytes, b"a");
}

// =============================================================================
// Over I2C
// =============================================================================

#[test]
fn test_display_over_i2c() {
    let addr = I2cAddress::MATRIX_ORBITAL.addr();
    let expectations = [
        I2cTrans::write(addr, vec![0xFE, 0x58]),
        I2cTrans::write(addr, b"12:00".to_vec()),
    ];
    let sink = I2cSink::new(I2cMock::new(&expectations), I2cAddress::MATRIX_ORBITAL);
    let mut lcd = MatrixOrbital::new(sink, 4, 20);

    lcd.clear().unwrap();
    write!(lcd, "12:00").unwrap();

    lcd.release().release().done();
}
