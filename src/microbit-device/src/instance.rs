//! Registration of the device instance used by the free-standing convenience functions.

use once_cell::sync::OnceCell;

use microbit_debug::log::debug;

/// Services a device instance provides to the convenience functions.
pub trait Device: Sync {
    /// Draws a random number in `0..max`.
    ///
    /// Implementations return `0` when no number can be drawn, including for `max <= 0`.
    fn random(&self, max: i32) -> i32;
}

static INSTANCE: OnceCell<&'static dyn Device> = OnceCell::new();

/// Registers `device` as the instance the convenience functions delegate to.
///
/// The registration is non-owning and permanent: it can happen once per boot.
///
/// # Errors
///
/// Returns [`AlreadyRegistered`] if a device has been registered before; the existing
/// registration is kept.
pub fn register(device: &'static dyn Device) -> Result<(), AlreadyRegistered> {
    INSTANCE.set(device).map_err(|_| AlreadyRegistered)?;
    debug!("device instance registered");
    Ok(())
}

/// Returns the registered device instance, if any.
pub fn current() -> Option<&'static dyn Device> {
    INSTANCE.get().copied()
}

/// Error indicating that a device instance has already been registered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlreadyRegistered;

impl core::fmt::Display for AlreadyRegistered {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a device instance has already been registered")
    }
}

impl core::error::Error for AlreadyRegistered {}
