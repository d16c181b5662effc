//! This module dispatches between the MCU family support crates.

#![no_std]

cfg_if::cfg_if! {
    if #[cfg(context = "nrf")] {
        pub use microbit_nrf::*;
    } else if #[cfg(context = "microbit")] {
        compile_error!("this MCU family is not supported");
    } else {
        mod dummy;
        pub use dummy::*;
    }
}
