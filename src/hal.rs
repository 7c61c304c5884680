//! Hardware Abstraction Layer
//!
//! Bus helpers shared by the peripheral drivers. They sit on the
//! `embedded-hal`/`embedded-io` traits, so any MCU HAL (or a mock) plugs in.

pub mod i2c;
