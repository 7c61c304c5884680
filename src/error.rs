//! Driver error type
//!
//! Every bus-facing operation returns [`Error`], generic over the error type
//! of the underlying transport.

use core::fmt;

/// Time/date field names, used to report which encoder input was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Seconds (0-59)
    Seconds,
    /// Minutes (0-59)
    Minutes,
    /// Hours, 24-hour clock (0-23)
    Hours,
    /// Day of the week (1-7)
    WeekDay,
    /// Day of the month (1-31)
    Day,
    /// Month (1-12)
    Month,
    /// Year within the century (0-99)
    Year,
    /// Temperature integer or fractional part
    Temperature,
}

impl Field {
    /// Human-readable field name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::WeekDay => "weekday",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Field {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Driver error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying bus or sink transaction failed
    Transport(E),
    /// A decimal value does not fit in two BCD digits
    OutOfRange {
        /// Offending field
        field: Field,
        /// Rejected value
        value: u8,
    },
    /// Square-wave frequency other than 1, 1024, 4096 or 8192 Hz
    UnsupportedFrequency(u32),
    /// A value being formatted as display text reported an error
    Format,
}

impl<E> Error<E> {
    /// Returns the transport error, if this is one
    #[must_use]
    pub fn transport(&self) -> Option<&E> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e:?}"),
            Self::OutOfRange { field, value } => {
                write!(f, "{field} value {value} does not fit in two BCD digits")
            }
            Self::UnsupportedFrequency(hz) => write!(f, "unsupported square-wave frequency {hz} Hz"),
            Self::Format => f.write_str("text formatting failed"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Transport(e) => defmt::write!(f, "transport error: {}", e),
            Self::OutOfRange { field, value } => {
                defmt::write!(f, "{} value {} does not fit in two BCD digits", field, value);
            }
            Self::UnsupportedFrequency(hz) => {
                defmt::write!(f, "unsupported square-wave frequency {} Hz", hz);
            }
            Self::Format => defmt::write!(f, "text formatting failed"),
        }
    }
}

/// Lets driver errors flow out of [`embedded_io::Write`] implementations.
impl<E: fmt::Debug> embedded_io::Error for Error<E> {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::Transport(_) => embedded_io::ErrorKind::Other,
            Self::OutOfRange { .. } | Self::UnsupportedFrequency(_) => {
                embedded_io::ErrorKind::InvalidInput
            }
            Self::Format => embedded_io::ErrorKind::InvalidData,
        }
    }
}
