//! Device identity and lifecycle primitives for micro:bit boards.
//!
//! This crate bundles what the rest of the firmware needs to know about, and do with, the device
//! it runs on:
//!
//! * [`serial_number()`] and [`friendly_name()`] identify the device, see [`microbit_identity`].
//! * [`random()`] draws a random number from the registered [`Device`] instance.
//! * [`panic()`] and [`reset()`] transfer control away for good.
//! * [`ble_running()`] tells whether the radio stack is up.
//!
//! The free functions are conveniences: they work from anywhere without threading a device
//! handle through. The one piece of state behind them is the registered device instance, which
//! is set once, by [`MicroBitDevice::take()`] (or [`register()`]), and never replaced.
//!
//! # Cargo features
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

mod device;
mod fatal;
mod instance;
mod radio;
mod reset;

pub use device::MicroBitDevice;
pub use fatal::{panic, set_fatal_hook, FatalHook, RUST_PANIC_STATUS};
pub use instance::{current, register, AlreadyRegistered, Device};
pub use radio::{ble_running, RadioStatusProbe};
pub use reset::{reset, set_reset_hook, ResetHook};

#[doc(inline)]
pub use microbit_identity::{friendly_name, serial_number, FriendlyName, NameEncoder};

/// Draws a random number in `0..max` from the registered device.
///
/// Returns `0` if no device has been registered yet, or if the device cannot produce a number
/// (eg. because its generator has not been seeded). This is a defined fallback value, not an
/// error indication.
pub fn random(max: i32) -> i32 {
    current().map_or(0, |device| device.random(max))
}
