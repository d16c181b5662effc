pub struct SerialNumber;

impl microbit_common::identity::IdentitySource for SerialNumber {
    /// The second word of the DEVICEID from the FICR peripheral.
    ///
    /// Only the upper word is used, which is what previously issued friendly names were derived
    /// from.
    fn read() -> u32 {
        // Embassy does not wrap the FICR register, and all we need from there is a read-only
        // register access, so go through a stolen PAC instance.

        // SAFETY: The register is used for read-only operations on constant values.
        #[cfg(context = "nrf52833")]
        let ficr = unsafe { nrf52833_pac::Peripherals::steal().FICR };
        #[cfg(context = "nrf52840")]
        let ficr = unsafe { nrf52840_pac::Peripherals::steal().FICR };

        ficr.deviceid[1].read().bits()
    }
}
