//! Architecture-agnostic traits implemented by the MCU family crates.

#![no_std]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod identity;
pub mod radio;
