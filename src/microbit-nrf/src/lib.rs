//! nRF52 support: serial number, SoftDevice status, reset and hardware RNG seeding.
//!
//! Everything in here is only built for `context = "nrf"`; on other targets the crate is empty.

#![no_std]
#![cfg(context = "nrf")]

pub mod identity;
pub mod radio;
pub mod reset;

#[cfg(feature = "hwrng")]
pub mod hwrng;

use embassy_nrf::config::Config;
use microbit_debug::log::debug;

pub use embassy_nrf::{peripherals, Peripherals};

/// Initializes the HAL, handing out the peripherals.
pub fn init() -> Peripherals {
    debug!("microbit_nrf::init()");
    embassy_nrf::init(Config::default())
}
