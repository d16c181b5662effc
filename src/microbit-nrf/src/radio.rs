/// The SoftDevice radio stack.
///
/// Without the `ble` feature the SoftDevice is not linked and never reported as enabled.
pub struct SoftDevice;

impl microbit_common::radio::RadioStack for SoftDevice {
    fn is_enabled() -> bool {
        softdevice_enabled()
    }
}

#[cfg(feature = "ble")]
fn softdevice_enabled() -> bool {
    let mut enabled: u8 = 0;
    // SAFETY: SVC call into the SoftDevice writing a single byte through a valid pointer. The
    // call is allowed whether or not the SoftDevice is enabled.
    let _ = unsafe { nrf_softdevice_s113::sd_softdevice_is_enabled(&mut enabled) };
    enabled == 1
}

#[cfg(not(feature = "ble"))]
fn softdevice_enabled() -> bool {
    false
}
