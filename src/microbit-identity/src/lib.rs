//! Access to the serial number of the device and the friendly name derived from it.
//!
//! This crate provides [`serial_number()`], which returns the 32-bit serial number burned into
//! the MCU at manufacture, and [`friendly_name()`], which encodes that number into a
//! pronounceable five letter name such as `"zuzuv"`.
//!
//! Concrete properties of the friendly name are:
//!
//! * It is a pure function of the serial number: the same device always has the same name.
//!
//! * It always has five lowercase letters, alternating between consonants and vowels, starting
//!   and ending with a consonant.
//!
//! * It is *not* unique. There are only 3125 names, so many devices share a name. Names are meant
//!   for humans telling a handful of devices apart (eg. when pairing), not for identification.
//!
//! Companion tooling derives the same names independently, so the encoding is a compatibility
//! contract: it is considered a breaking change if the name of any serial number changes.
#![no_std]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

mod name;

use microbit_common::identity::IdentitySource;

pub use name::{
    is_consonant, is_vowel, FriendlyName, NameEncoder, CODEBOOK, CONSONANTS, NAME_CODE_LETTERS,
    NAME_LENGTH, VOWELS,
};

/// Reads the serial number of the device.
///
/// On nRF MCUs, this is the second word of the factory information configuration registers'
/// `DEVICEID`. The register is read on every call.
#[must_use]
pub fn serial_number() -> u32 {
    microbit_arch::identity::SerialNumber::read()
}

/// Derives the friendly name of the device from its serial number.
///
/// See the crate level documentation for the name's properties.
#[must_use]
pub fn friendly_name() -> FriendlyName {
    name_of::<microbit_arch::identity::SerialNumber>()
}

fn name_of<S: IdentitySource>() -> FriendlyName {
    FriendlyName::from_serial(S::read())
}
