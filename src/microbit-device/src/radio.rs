//! Radio stack status.

use microbit_common::radio::RadioStack;

/// Probes whether the radio stack is running.
///
/// Whether the stack exists at all is decided when the probe is constructed, not on each query:
/// a probe for a disabled stack never reads the hardware.
#[derive(Debug, Copy, Clone)]
pub struct RadioStatusProbe {
    reader: Option<fn() -> bool>,
}

impl RadioStatusProbe {
    /// Creates a probe reading the stack state through `reader` if `radio_enabled` is set, and
    /// always reporting an inactive stack otherwise.
    #[must_use]
    pub const fn new(radio_enabled: bool, reader: fn() -> bool) -> Self {
        Self {
            reader: if radio_enabled { Some(reader) } else { None },
        }
    }

    /// Creates a probe that always reports an inactive stack.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { reader: None }
    }

    /// Creates the probe matching the build configuration.
    ///
    /// With the `ble` feature, this reads the live SoftDevice state; without it, the stack is
    /// compiled out and reported inactive.
    #[must_use]
    pub const fn from_build() -> Self {
        Self::new(
            cfg!(feature = "ble"),
            <microbit_arch::radio::SoftDevice as RadioStack>::is_enabled,
        )
    }

    /// Returns whether the radio stack is currently enabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reader.is_some_and(|read| read())
    }
}

impl Default for RadioStatusProbe {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Determines whether the BLE stack is currently running.
///
/// Always `false` when built without the `ble` feature.
#[must_use]
pub fn ble_running() -> bool {
    RadioStatusProbe::from_build().is_active()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_live_flag_when_enabled() {
        assert!(RadioStatusProbe::new(true, || true).is_active());
        assert!(!RadioStatusProbe::new(true, || false).is_active());
    }

    #[test]
    fn ignores_flag_when_disabled() {
        assert!(!RadioStatusProbe::new(false, || true).is_active());
        assert!(!RadioStatusProbe::disabled().is_active());
    }

    #[cfg(not(feature = "ble"))]
    #[test]
    fn compiled_out_stack_is_inactive() {
        assert!(!RadioStatusProbe::from_build().is_active());
        assert!(!ble_running());
    }
}
