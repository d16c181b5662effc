use microbit_debug::log::debug;
use microbit_random::{RngCore, SharedRng};
use static_cell::StaticCell;

use crate::{instance, AlreadyRegistered, Device, FriendlyName, RadioStatusProbe};

/// The micro:bit device.
///
/// There is one instance per boot, obtained through [`MicroBitDevice::take()`], which also
/// registers it for the crate's convenience functions.
#[derive(Default)]
pub struct MicroBitDevice {
    rng: SharedRng,
    radio: RadioStatusProbe,
}

impl MicroBitDevice {
    /// Creates a device with an unseeded generator and the radio probe of the build
    /// configuration.
    ///
    /// This does not register the device; see [`MicroBitDevice::take()`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_radio(RadioStatusProbe::from_build())
    }

    /// Creates a device using `radio` to answer [`ble_running()`](Self::ble_running).
    #[must_use]
    pub const fn with_radio(radio: RadioStatusProbe) -> Self {
        Self {
            rng: SharedRng::new(),
            radio,
        }
    }

    /// Constructs the device instance of this boot and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyRegistered`] if the instance was taken before, or if a different device
    /// has already been registered through [`register()`](crate::register).
    pub fn take() -> Result<&'static Self, AlreadyRegistered> {
        static DEVICE: StaticCell<MicroBitDevice> = StaticCell::new();

        let device: &'static Self = DEVICE.try_init(Self::new()).ok_or(AlreadyRegistered)?;
        instance::register(device)?;
        debug!("device taken");
        Ok(device)
    }

    /// Seeds the device's random number generator from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns the error of the entropy source if it failed to provide a seed.
    pub fn seed(&self, entropy: impl RngCore) -> Result<(), microbit_random::Error> {
        self.rng.seed(entropy)
    }

    /// Seeds the device's random number generator from the hardware RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the hardware RNG failed to provide entropy.
    #[cfg(all(feature = "hwrng", context = "nrf"))]
    pub fn seed_from_hardware(
        &self,
        peripherals: &mut microbit_arch::Peripherals,
    ) -> Result<(), microbit_random::Error> {
        microbit_arch::hwrng::seed_rng(peripherals, &self.rng)
    }

    /// Returns the serial number of the device.
    #[must_use]
    pub fn serial_number(&self) -> u32 {
        microbit_identity::serial_number()
    }

    /// Returns the friendly name of the device.
    #[must_use]
    pub fn friendly_name(&self) -> FriendlyName {
        microbit_identity::friendly_name()
    }

    /// Returns whether the BLE stack is currently running.
    #[must_use]
    pub fn ble_running(&self) -> bool {
        self.radio.is_active()
    }
}

impl Device for MicroBitDevice {
    fn random(&self, max: i32) -> i32 {
        self.rng.random(max).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use rand_core::SeedableRng;

    use super::*;

    #[test]
    fn unseeded_device_yields_zero() {
        let device = MicroBitDevice::new();
        assert_eq!(device.random(10), 0);
    }

    #[test]
    fn seeded_device_stays_in_range() {
        let device = MicroBitDevice::new();
        device.seed(rand_pcg::Pcg32::seed_from_u64(11)).unwrap();

        for _ in 0..500 {
            assert!((0..10).contains(&device.random(10)));
        }
        assert_eq!(device.random(0), 0);
        assert_eq!(device.random(-3), 0);
    }

    #[test]
    fn radio_probe_is_injected() {
        let device = MicroBitDevice::with_radio(RadioStatusProbe::new(true, || true));
        assert!(device.ble_running());

        let device = MicroBitDevice::with_radio(RadioStatusProbe::disabled());
        assert!(!device.ble_running());
    }
}
