//! Traits for querying radio protocol stacks.

/// Trait describing a radio protocol stack whose state can be queried.
pub trait RadioStack {
    /// Returns whether the stack is currently enabled.
    ///
    /// This reads the live state on every call; nothing is cached.
    fn is_enabled() -> bool;
}

/// A [`RadioStack`] that is never enabled.
///
/// This is used both on architectures without a supported radio stack, and when the stack is
/// not compiled in.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoRadioStack;

impl RadioStack for NoRadioStack {
    fn is_enabled() -> bool {
        false
    }
}
