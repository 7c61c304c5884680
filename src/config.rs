//! System configuration and hardware constants
//!
//! Bus addresses, link speeds and display defaults are centralized here.

/// I2C bus frequency for the clock and the display
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// DS3231 (Chronodot) I2C address
pub const DS3231_I2C_ADDR: u8 = 0x68;

/// Matrix Orbital display I2C address (0x50 in the vendor's 8-bit notation)
pub const DISPLAY_I2C_ADDR: u8 = 0x28;

/// Matrix Orbital display UART baud rate (factory default)
pub const DISPLAY_BAUD_RATE: u32 = 19_200;

/// Default display rows
pub const DISPLAY_ROWS: u8 = 4;

/// Default display columns
pub const DISPLAY_COLUMNS: u8 = 20;

/// Default display contrast
pub const DISPLAY_CONTRAST: u8 = 128;

/// Longest register burst written in one I2C transaction
pub const MAX_REGISTER_BURST: usize = 16;

/// Demo clock refresh period in milliseconds
pub const REFRESH_PERIOD_MS: u64 = 1_000;

/// Temperature is refreshed every this many clock refreshes
/// (the DS3231 converts every 64 seconds)
pub const TEMPERATURE_REFRESH_TICKS: u32 = 64;
