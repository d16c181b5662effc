//! The fatal error path.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use microbit_debug::{log::error, ExitCode};

/// A function taking over the fatal path with the status code passed to [`panic()`].
pub type FatalHook = fn(i32) -> !;

/// Status code [`panic()`] is called with when a Rust panic reaches the panic handler.
pub const RUST_PANIC_STATUS: i32 = 999;

static FATAL_HOOK: Mutex<CriticalSectionRawMutex, Cell<Option<FatalHook>>> =
    Mutex::new(Cell::new(None));

/// Installs the hook [`panic()`] transfers control to, returning the previous one.
///
/// Boards use this to show the status code to the user; tests use it to observe the transfer.
pub fn set_fatal_hook(hook: FatalHook) -> Option<FatalHook> {
    FATAL_HOOK.lock(|h| h.replace(Some(hook)))
}

/// Escalates to the fatal path with `status`.
///
/// Control goes to the hook installed through [`set_fatal_hook()`]. Without one, the debug
/// session is ended with a failure exit code and the core is parked.
pub fn panic(status: i32) -> ! {
    error!("fatal error, status {}", status);

    let hook = FATAL_HOOK.lock(Cell::get).unwrap_or(halt);
    hook(status)
}

fn halt(status: i32) -> ! {
    microbit_debug::println!("panic: status {}", status);
    microbit_debug::exit(ExitCode::FAILURE)
}

#[cfg(all(feature = "panic-handler", not(test)))]
#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    microbit_debug::println!("panic: {}\n", info);
    panic(RUST_PANIC_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Fatal(i32);

    fn unwind(status: i32) -> ! {
        std::panic::panic_any(Fatal(status))
    }

    #[test]
    fn transfers_status_to_hook() {
        set_fatal_hook(unwind);

        for status in [0, 20, RUST_PANIC_STATUS, -1] {
            let payload = std::panic::catch_unwind(|| {
                panic(status);
            })
            .unwrap_err();
            assert_eq!(payload.downcast_ref::<Fatal>(), Some(&Fatal(status)));
        }
    }

    #[test]
    fn returns_previous_hook() {
        set_fatal_hook(unwind);
        let previous = set_fatal_hook(unwind);
        assert!(previous.is_some());
    }
}
