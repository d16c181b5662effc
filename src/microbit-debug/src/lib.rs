//! Debug output for the device crates.
//!
//! The fatal path ends in [`exit()`], which reports the outcome to an attached debugger (with the
//! `semihosting` feature) and then parks the core. [`print!`] and [`println!`] write to the debug
//! console, and compile to nothing without the `debug-console` feature. The [`log`] macros go
//! through `defmt` when the `defmt` feature is enabled.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

#[cfg(all(feature = "rtt-target", feature = "semihosting"))]
compile_error!(
    r#"feature "rtt-target" and feature "semihosting" cannot be enabled at the same time"#
);

#[cfg(all(
    feature = "debug-console",
    not(any(feature = "rtt-target", feature = "semihosting"))
))]
compile_error!(
    r#"feature "debug-console" enabled but no backend. Select feature "rtt-target" or feature "semihosting"."#
);

/// Outcome reported to the debugger when the firmware stops.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExitCode {
    #[doc(hidden)]
    Success,
    #[doc(hidden)]
    Failure,
}

impl ExitCode {
    /// The firmware stopped on purpose.
    pub const SUCCESS: Self = Self::Success;
    /// The firmware stopped on a fatal error.
    pub const FAILURE: Self = Self::Failure;

    #[allow(dead_code, reason = "not always used due to conditional compilation")]
    fn to_semihosting_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Stops the firmware for good, used after a fatal error or at the end of a test run.
///
/// The core spins from here on; only a reset brings it back. With the `semihosting` feature,
/// `code` is first handed to the attached debugger, which usually ends the session.
pub fn exit(code: ExitCode) -> ! {
    loop {
        #[cfg(all(context = "cortex-m", feature = "semihosting"))]
        cortex_m_semihosting::debug::exit(if code.to_semihosting_code() == 0 {
            cortex_m_semihosting::debug::EXIT_SUCCESS
        } else {
            cortex_m_semihosting::debug::EXIT_FAILURE
        });

        #[cfg(not(all(context = "cortex-m", feature = "semihosting")))]
        let _ = code;

        core::hint::spin_loop();
    }
}

#[cfg(all(feature = "debug-console", feature = "semihosting"))]
mod backend {
    pub use cortex_m_semihosting::{hprint as print, hprintln as println};

    #[doc(hidden)]
    pub fn init() {}
}

#[cfg(all(feature = "debug-console", feature = "rtt-target"))]
mod backend {
    pub use rtt_target::{rprint as print, rprintln as println};

    #[doc(hidden)]
    pub fn init() {
        #[cfg(not(feature = "defmt"))]
        {
            use rtt_target::ChannelMode::NoBlockTrim;

            rtt_target::rtt_init_print!(NoBlockTrim);
        }

        #[cfg(feature = "defmt")]
        {
            use rtt_target::ChannelMode::{NoBlockSkip, NoBlockTrim};
            let channels = rtt_target::rtt_init! {
                up: {
                    0: {
                        size: 1024,
                        mode: NoBlockTrim,
                        name: "Terminal"
                    }
                    1: {
                        size: 1024,
                        mode: NoBlockSkip,
                        // probe-rs autodetects whether defmt is in use based on this channel name
                        name: "defmt"
                    }
                }
            };

            rtt_target::set_print_channel(channels.up.0);
            rtt_target::set_defmt_channel(channels.up.1);
        }
    }
}

#[cfg(not(feature = "debug-console"))]
mod backend {
    #[doc(hidden)]
    pub fn init() {}

    /// Discards its arguments; the debug console is disabled.
    #[macro_export]
    macro_rules! println {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
        }};
    }

    /// Discards its arguments; the debug console is disabled.
    #[macro_export]
    macro_rules! print {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
        }};
    }
}

pub use backend::*;

#[cfg(feature = "defmt")]
pub mod log {
    //! Log macros, forwarded to [`defmt`].

    // The macros expect `defmt` to be in scope at the call site.
    #[doc(hidden)]
    pub use defmt;

    pub use defmt::{Debug2Format, Display2Format};

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __trace {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::trace!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __debug {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::debug!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __info {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::info!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __warn {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::warn!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __error {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::error!($($arg)*);
        }};
    }

    pub use __debug as debug;
    pub use __error as error;
    pub use __info as info;
    pub use __trace as trace;
    pub use __warn as warn;
}

#[cfg(not(feature = "defmt"))]
pub mod log {
    //! Log macros that discard their arguments, as the `defmt` feature is off.

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __stub {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
        }};
    }

    pub use __stub as debug;
    pub use __stub as error;
    pub use __stub as info;
    pub use __stub as trace;
    pub use __stub as warn;
}
