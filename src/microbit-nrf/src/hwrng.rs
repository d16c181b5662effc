embassy_nrf::bind_interrupts!(struct Irqs {
    RNG => embassy_nrf::rng::InterruptHandler<embassy_nrf::peripherals::RNG>;
});

/// Seeds `rng` from the hardware RNG peripheral.
///
/// # Errors
///
/// Returns an error if the peripheral failed to provide entropy.
pub fn seed_rng(
    peripherals: &mut crate::Peripherals,
    rng: &microbit_random::SharedRng,
) -> Result<(), microbit_random::Error> {
    cfg_if::cfg_if! {
        if #[cfg(any(context = "nrf52833", context = "nrf52840"))] {
            // Borrowing the peripheral is enough, it is released again once seeded.
            let hwrng = embassy_nrf::rng::Rng::new(&mut peripherals.RNG, Irqs);

            rng.seed(hwrng)
        } else {
            compile_error!("hardware RNG is only supported on nRF52833 and nRF52840");
        }
    }
}
