//! Provides the seedable random number generator backing the device's `random()`.
//!
//! The generator starts out unseeded. It is seeded once from a source of entropy (on nRF, the
//! hardware RNG peripheral) through [`SharedRng::seed()`], after which [`SharedRng::random()`]
//! draws uniformly distributed values.
//!
//! ---
//!
//! The algorithm is (more or less arbitrarily) [`rand_pcg::Pcg32`], or
//! [`rand_chacha::ChaCha20Rng`] with the `csprng` feature. Neither the algorithm nor the size of
//! the state is guaranteed.
#![no_std]
#![deny(missing_docs)]

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use rand::Rng;
use rand_core::SeedableRng;

pub use rand_core::{Error, RngCore};

/// Type of the RNG when needing the ability to produce cryptographically secure random numbers.
#[cfg(feature = "csprng")]
pub(crate) type SelectedRng = rand_chacha::ChaCha20Rng;

/// Type of the RNG when cryptographically secure random numbers are not needed.
#[cfg(not(feature = "csprng"))]
pub(crate) type SelectedRng = rand_pcg::Pcg32;

/// A random number generator that can be shared between the firmware's execution contexts.
///
/// All accesses happen inside a critical section, so the type can live in a `static`.
pub struct SharedRng {
    // The Mutex<RefCell> can probably be simplified
    inner: Mutex<CriticalSectionRawMutex, RefCell<Option<SelectedRng>>>,
}

impl SharedRng {
    /// Creates an unseeded generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Seeds the generator from `entropy`, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns the error of the entropy source if it failed to provide a seed. The generator
    /// keeps its previous state in that case.
    pub fn seed(&self, entropy: impl RngCore) -> Result<(), Error> {
        let rng = SelectedRng::from_rng(entropy)?;
        self.inner.lock(|r| *r.borrow_mut() = Some(rng));
        Ok(())
    }

    /// Returns whether [`seed()`](Self::seed) has succeeded at least once.
    pub fn is_seeded(&self) -> bool {
        self.inner.lock(|r| r.borrow().is_some())
    }

    /// Draws a value uniformly from `0..max`.
    ///
    /// Returns `None` if the generator has not been seeded yet, or if `max` is not positive.
    pub fn random(&self, max: i32) -> Option<i32> {
        if max <= 0 {
            return None;
        }
        self.with_rng(|rng| rng.gen_range(0..max))
    }

    /// Locks the generator for a single operation.
    ///
    /// ## Deadlocks
    ///
    /// … if the action attempts to lock the same generator.
    fn with_rng<R>(&self, action: impl FnOnce(&mut SelectedRng) -> R) -> Option<R> {
        self.inner.lock(|r| r.borrow_mut().as_mut().map(action))
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entropy(seed: u64) -> rand_pcg::Pcg32 {
        rand_pcg::Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn unseeded_yields_nothing() {
        let rng = SharedRng::new();
        assert!(!rng.is_seeded());
        assert_eq!(rng.random(10), None);
    }

    #[test]
    fn draws_stay_in_range() {
        let rng = SharedRng::new();
        rng.seed(entropy(7)).unwrap();
        assert!(rng.is_seeded());

        for max in [1, 2, 3, 5, 10, 1000, i32::MAX] {
            for _ in 0..200 {
                let value = rng.random(max).unwrap();
                assert!((0..max).contains(&value), "{value} not below {max}");
            }
        }
    }

    #[test]
    fn max_of_one_always_yields_zero() {
        let rng = SharedRng::new();
        rng.seed(entropy(3)).unwrap();
        for _ in 0..50 {
            assert_eq!(rng.random(1), Some(0));
        }
    }

    #[test]
    fn non_positive_bound_yields_nothing() {
        let rng = SharedRng::new();
        rng.seed(entropy(1)).unwrap();
        assert_eq!(rng.random(0), None);
        assert_eq!(rng.random(-5), None);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SharedRng::new();
        let b = SharedRng::new();
        a.seed(entropy(42)).unwrap();
        b.seed(entropy(42)).unwrap();

        for _ in 0..32 {
            assert_eq!(a.random(1 << 20), b.random(1 << 20));
        }
    }

    #[test]
    fn covers_small_ranges() {
        let rng = SharedRng::new();
        rng.seed(entropy(9)).unwrap();

        let mut seen = [false; 6];
        for _ in 0..1000 {
            let value = rng.random(6).unwrap();
            seen[usize::try_from(value).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
