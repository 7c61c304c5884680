//! Clock and Character Display Drivers
//!
//! Drivers for two peripherals commonly wired to small microcontroller
//! clocks:
//!
//! - the DS3231-based Chronodot real-time clock, over I2C;
//! - Matrix Orbital character LCDs, over a UART or I2C.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION / DEMO                        │
//! │            src/main.rs (embassy, STM32G474)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                       DRIVERS                                │
//! │  Chronodot (RTC)         │  MatrixOrbital (character LCD)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / BUS HELPERS                          │
//! │  I2cBus (registers)      │  I2cSink (byte sink over I2C)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │          embedded-hal I2c   │   embedded-io Write            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Injected transports**: drivers own the bus or sink they are given and
//!   hand it back with `release()`
//! - **Type-driven design**: square-wave rates and display commands are enums
//! - **No unsafe code**
//! - **Explicit error handling**: every bus operation returns `Result`

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// MUST be the first module so its macros are visible everywhere below
#[macro_use]
mod fmt;

/// Binary-coded decimal conversion
pub mod bcd;

/// Hardware Abstraction Layer
///
/// Register and byte-sink helpers over the embedded-hal traits.
pub mod hal;

/// Peripheral Drivers
///
/// Chronodot real-time clock and Matrix Orbital display.
pub mod drivers;

/// Driver error type
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use error::Error;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::drivers::chronodot::Chronodot;
    pub use crate::drivers::matrix_orbital::{Command, MatrixOrbital};
    pub use crate::error::{Error, Field};
    pub use crate::hal::i2c::{I2cAddress, I2cBus, I2cSink};
    pub use crate::types::*;
}
