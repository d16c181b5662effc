/// Performs a hard reset of the MCU.
pub fn system_reset() -> ! {
    cortex_m::peripheral::SCB::sys_reset()
}
