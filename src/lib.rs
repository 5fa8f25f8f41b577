//! Driver for the Microchip `MCP23017` 16-bit I2C GPIO expander
//!
//! The chip splits its sixteen pins into two eight-bit ports.  [`RegisterMap`] translates pin
//! numbers (0..=15) and ports ([`Port::A`], [`Port::B`]) into single-byte register accesses and
//! keeps a cached copy of the registers it touches.  Any [`embedded_hal::i2c::I2c`]
//! implementation can be used as the bus.
//!
//! ```no_run
//! # let expectations: [embedded_hal_mock::eh1::i2c::Transaction; 0] = [];
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&expectations);
//! use mcp23017_regmap::{Direction, Port, RegisterMap};
//!
//! let mut mcp = RegisterMap::new(i2c, 0x20).unwrap();
//! mcp.set_port_direction(Port::A, 0x00).unwrap();
//! mcp.write_pin(3, true).unwrap();
//! mcp.set_pin_direction(8, Direction::Input).unwrap();
//! mcp.set_pin_pullup(8, true).unwrap();
//! let level = mcp.read_pin(8).unwrap();
//! # let _ = level;
//! ```
//!
//! To hand out individual pins implementing the `embedded-hal` digital traits, use
//! [`Mcp23017::split()`].
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bits;
mod bus;
mod common;
mod config;
mod error;
mod expander;
#[cfg(test)]
mod fake;
mod mutex;
mod pin;
mod register_map;
mod regs;

pub use common::mode;
pub use common::{Direction, InterruptPolarity, Port, PIN_COUNT};
pub use config::{Config, IoCon, DEFAULT_ADDRESS};
pub use error::{Error, InvalidArgument};
pub use expander::{Mcp23017, Parts};
pub use mutex::PortMutex;
pub use pin::Pin;
pub use register_map::{PortCache, RegisterCache, RegisterMap};
pub use regs::Register;

pub(crate) use bus::I2cExt;
