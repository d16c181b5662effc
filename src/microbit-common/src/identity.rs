//! Tools and traits for describing device identities.
//!
//! See `microbit_identity` for general documentation; that crate also represents the public parts
//! of this API.

/// Trait describing the source of the 32-bit serial number burned into a device.
///
/// # Evolution
///
/// The value is what companion tooling knows the device by, and what the friendly name is
/// derived from. Implementations must therefore keep returning the same value for a given piece
/// of hardware across releases.
///
/// Unlike wider device identifiers, reading the serial number cannot fail on the supported
/// MCUs: it is a single memory mapped register read. Implementations must not cache the value.
pub trait IdentitySource {
    /// Reads the serial number from hardware.
    fn read() -> u32;
}
