//! Shared types used by the drivers
//!
//! Plain value types for time/date, temperature and square-wave settings.
//! They carry no bus handles and can be built and inspected on the host.

use core::fmt;

/// Decimal time and date, as read from or written to the clock
///
/// Field ranges are not validated here; the device defines what is valid.
/// Encoders reject values above 99 since those do not fit in two BCD digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeDateElements {
    /// Seconds (0-59)
    pub seconds: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Hours, 24-hour clock (0-23)
    pub hours: u8,
    /// Day of the week (1-7, meaning is up to the application)
    pub week_day: u8,
    /// Day of the month (1-31)
    pub day: u8,
    /// Month (1-12)
    pub month: u8,
    /// Year within the century (0-99)
    pub year: u8,
}

impl TimeDateElements {
    /// Build from a time of day, leaving the date fields zero
    #[must_use]
    pub const fn from_time(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            seconds,
            minutes,
            hours,
            week_day: 0,
            day: 0,
            month: 0,
            year: 0,
        }
    }

    /// Replace the date fields
    #[must_use]
    pub const fn with_date(self, week_day: u8, day: u8, month: u8, year: u8) -> Self {
        Self {
            week_day,
            day,
            month,
            year,
            ..self
        }
    }

    /// Fields in register order (seconds first, year last)
    #[must_use]
    pub const fn to_array(self) -> [u8; 7] {
        [
            self.seconds,
            self.minutes,
            self.hours,
            self.week_day,
            self.day,
            self.month,
            self.year,
        ]
    }

    /// Build from fields in register order
    #[must_use]
    pub const fn from_array(fields: [u8; 7]) -> Self {
        let [seconds, minutes, hours, week_day, day, month, year] = fields;
        Self {
            seconds,
            minutes,
            hours,
            week_day,
            day,
            month,
            year,
        }
    }
}

impl fmt::Display for TimeDateElements {
    /// `20YY-MM-DD hh:mm:ss`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "20{:02}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimeDateElements {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "20{:02}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hours,
            self.minutes,
            self.seconds
        );
    }
}

/// Raw register encoding of the last time/date transaction
///
/// Each field holds the masked BCD byte exactly as it came off the bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeDateRegisterImage {
    /// Seconds register (0x00), bit 7 cleared
    pub seconds: u8,
    /// Minutes register (0x01)
    pub minutes: u8,
    /// Hours register (0x02), bits 6-7 cleared
    pub hours: u8,
    /// Day register (0x03)
    pub week_day: u8,
    /// Date register (0x04)
    pub day: u8,
    /// Month/century register (0x05), bit 7 cleared
    pub month: u8,
    /// Year register (0x06)
    pub year: u8,
}

impl TimeDateRegisterImage {
    /// Register bytes starting at 0x00
    #[must_use]
    pub const fn to_registers(self) -> [u8; 7] {
        [
            self.seconds,
            self.minutes,
            self.hours,
            self.week_day,
            self.day,
            self.month,
            self.year,
        ]
    }

    /// Build from register bytes starting at 0x00
    #[must_use]
    pub const fn from_registers(regs: [u8; 7]) -> Self {
        let [seconds, minutes, hours, week_day, day, month, year] = regs;
        Self {
            seconds,
            minutes,
            hours,
            week_day,
            day,
            month,
            year,
        }
    }
}

/// Die temperature reading with quarter-degree resolution
///
/// The integer and fractional parts are kept separately so no precision is
/// lost; [`Temperature::celsius`] combines them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Temperature {
    integer: u8,
    hundredths: u8,
    integer_bcd: u8,
    hundredths_bcd: u8,
}

impl Temperature {
    /// Build from the integer degrees and the fraction in hundredths
    #[must_use]
    pub const fn new(integer: u8, hundredths: u8) -> Self {
        Self {
            integer,
            hundredths,
            integer_bcd: crate::bcd::dec2bcd(integer),
            hundredths_bcd: crate::bcd::dec2bcd(hundredths),
        }
    }

    /// Whole degrees Celsius
    #[must_use]
    pub const fn integer(self) -> u8 {
        self.integer
    }

    /// Fractional part in hundredths of a degree (0, 25, 50 or 75)
    #[must_use]
    pub const fn hundredths(self) -> u8 {
        self.hundredths
    }

    /// Integer part re-encoded as BCD
    #[must_use]
    pub const fn integer_bcd(self) -> u8 {
        self.integer_bcd
    }

    /// Fractional part re-encoded as BCD
    #[must_use]
    pub const fn hundredths_bcd(self) -> u8 {
        self.hundredths_bcd
    }

    /// Temperature in hundredths of a degree Celsius
    #[must_use]
    pub const fn centi_celsius(self) -> u16 {
        self.integer as u16 * 100 + self.hundredths as u16
    }

    /// Temperature in degrees Celsius
    #[must_use]
    pub fn celsius(self) -> f32 {
        f32::from(self.integer) + f32::from(self.hundredths) / 100.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02} C", self.integer, self.hundredths)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Temperature {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}.{:02} C", self.integer, self.hundredths);
    }
}

/// Square-wave output frequency
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SquareWaveFrequency {
    /// 1 Hz
    #[default]
    Hz1,
    /// 1.024 kHz
    Hz1024,
    /// 4.096 kHz
    Hz4096,
    /// 8.192 kHz
    Hz8192,
}

impl SquareWaveFrequency {
    /// All selectable frequencies, slowest first
    pub const ALL: [Self; 4] = [Self::Hz1, Self::Hz1024, Self::Hz4096, Self::Hz8192];

    /// Look up a frequency by its value in Hz
    #[must_use]
    pub const fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            1 => Some(Self::Hz1),
            1024 => Some(Self::Hz1024),
            4096 => Some(Self::Hz4096),
            8192 => Some(Self::Hz8192),
            _ => None,
        }
    }

    /// Frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> u32 {
        match self {
            Self::Hz1 => 1,
            Self::Hz1024 => 1024,
            Self::Hz4096 => 4096,
            Self::Hz8192 => 8192,
        }
    }

    /// Rate-select bits (RS2:RS1), right-aligned
    #[must_use]
    pub const fn rate_select(self) -> u8 {
        match self {
            Self::Hz1 => 0b00,
            Self::Hz1024 => 0b01,
            Self::Hz4096 => 0b10,
            Self::Hz8192 => 0b11,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SquareWaveFrequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Hz", self.as_hz());
    }
}
