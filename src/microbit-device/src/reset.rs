//! Processor reset.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use microbit_debug::log::info;

/// A function taking over from [`reset()`].
pub type ResetHook = fn() -> !;

static RESET_HOOK: Mutex<CriticalSectionRawMutex, Cell<Option<ResetHook>>> =
    Mutex::new(Cell::new(None));

/// Installs the hook [`reset()`] transfers control to, returning the previous one.
pub fn set_reset_hook(hook: ResetHook) -> Option<ResetHook> {
    RESET_HOOK.lock(|h| h.replace(Some(hook)))
}

/// Performs a hard reset of the device.
///
/// Control goes to the hook installed through [`set_reset_hook()`], or else to a system reset
/// request.
pub fn reset() -> ! {
    info!("resetting");

    let hook = RESET_HOOK
        .lock(Cell::get)
        .unwrap_or(microbit_arch::reset::system_reset);
    hook()
}
