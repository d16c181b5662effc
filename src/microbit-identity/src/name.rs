//! Friendly name encoding.

/// Number of letters in a friendly name.
pub const NAME_LENGTH: usize = 5;

/// Number of letters to choose from at each position of a friendly name.
pub const NAME_CODE_LETTERS: usize = 5;

const RADIX: u32 = 5;

/// Letters used at the consonant positions (first, third and fifth).
pub const CONSONANTS: [u8; NAME_CODE_LETTERS] = *b"zvgpt";

/// Letters used at the vowel positions (second and fourth).
pub const VOWELS: [u8; NAME_CODE_LETTERS] = *b"uoiea";

/// Letters indexed by `[digit position][digit value]`.
///
/// Digit position 0 is the least significant one, and ends up as the *last* letter of the name.
pub const CODEBOOK: [[u8; NAME_CODE_LETTERS]; NAME_LENGTH] =
    [CONSONANTS, VOWELS, CONSONANTS, VOWELS, CONSONANTS];

/// Returns whether `letter` is one of the [`CONSONANTS`].
#[must_use]
pub fn is_consonant(letter: u8) -> bool {
    CONSONANTS.contains(&letter)
}

/// Returns whether `letter` is one of the [`VOWELS`].
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// A five letter, NUL terminated friendly name.
///
/// Obtained from a serial number through [`FriendlyName::from_serial()`], or for the running
/// device through [`friendly_name()`](crate::friendly_name).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FriendlyName([u8; NAME_LENGTH + 1]);

impl FriendlyName {
    /// Encodes a serial number into its friendly name.
    ///
    /// This is a total function: every serial number has a name, and distinct serial numbers may
    /// share one.
    #[must_use]
    #[allow(
        clippy::indexing_slicing,
        reason = "positions stay below NAME_LENGTH and digits below RADIX"
    )]
    pub const fn from_serial(serial: u32) -> Self {
        // The trailing byte stays NUL.
        let mut name = [0u8; NAME_LENGTH + 1];

        let mut n = serial;
        let mut d = RADIX;
        let mut ld = 1;

        let mut i = 0;
        while i < NAME_LENGTH {
            let h = (n % d) / ld;
            // Only the digit itself is subtracted, not its weight. Previously issued names depend
            // on this exact recurrence.
            n -= h;
            d *= RADIX;
            ld *= RADIX;

            // Letters are filled in from the right.
            name[NAME_LENGTH - 1 - i] = CODEBOOK[i][h as usize];
            i += 1;
        }

        Self(name)
    }

    /// Returns the name as a string slice, without the terminator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: All letters come from CODEBOOK, which only contains ASCII.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the letters of the name, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.split_at(NAME_LENGTH).0
    }

    /// Returns the letters of the name including the NUL terminator.
    ///
    /// This is the form expected by C APIs and advertising payload builders.
    #[must_use]
    pub const fn as_bytes_with_nul(&self) -> &[u8; NAME_LENGTH + 1] {
        &self.0
    }
}

impl From<u32> for FriendlyName {
    fn from(serial: u32) -> Self {
        Self::from_serial(serial)
    }
}

impl PartialEq<str> for FriendlyName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FriendlyName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl core::fmt::Display for FriendlyName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Debug for FriendlyName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FriendlyName").field(&self.as_str()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FriendlyName {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// Encodes serial numbers into a single name buffer it owns.
///
/// The name returned by [`encode()`](Self::encode) borrows that buffer, and is therefore only
/// valid until the next call to `encode()` on the same encoder. There is exactly one writer to
/// the buffer: the encoder, through `&mut self`.
///
/// Callers that need to keep a name around can copy the [`FriendlyName`] out instead.
#[derive(Debug, Default)]
pub struct NameEncoder {
    name: Option<FriendlyName>,
}

impl NameEncoder {
    /// Creates an encoder that has not encoded anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { name: None }
    }

    /// Encodes `serial`, overwriting the previously encoded name.
    pub fn encode(&mut self, serial: u32) -> &FriendlyName {
        self.name.insert(FriendlyName::from_serial(serial))
    }

    /// Returns the most recently encoded name, if any.
    #[must_use]
    pub fn last(&self) -> Option<&FriendlyName> {
        self.name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    // Spread over the whole 32-bit range; the stride is prime so the low digits vary too.
    fn sample_serials() -> impl Iterator<Item = u32> {
        (0..=u32::MAX).step_by(40_503).chain([u32::MAX, u32::MAX - 1])
    }

    fn encode(serial: u32) -> FriendlyName {
        FriendlyName::from_serial(serial)
    }

    #[test]
    fn known_names() {
        assert_eq!(encode(0), "zuzuz");
        assert_eq!(encode(1), "zuzuv");
        assert_eq!(encode(6), "zuzov");
    }

    #[test]
    fn previously_issued_names() {
        assert_eq!(encode(24), "zuzat");
        assert_eq!(encode(30), "zuvoz");
        assert_eq!(encode(624), "zatat");
        assert_eq!(encode(0x1234_5678), "vazav");
        assert_eq!(encode(0xdead_beef), "zegot");
        assert_eq!(encode(0x8000_0000), "pazap");
        assert_eq!(encode(u32::MAX), "gevaz");
    }

    #[test]
    fn encoding_is_const() {
        const ZERO: FriendlyName = FriendlyName::from_serial(0);
        assert_eq!(ZERO, "zuzuz");
    }

    #[test]
    fn deterministic() {
        for serial in sample_serials() {
            assert_eq!(encode(serial), encode(serial));
        }
    }

    #[test]
    fn fixed_length_and_terminated() {
        for serial in sample_serials() {
            let name = encode(serial);
            assert_eq!(name.as_str().len(), NAME_LENGTH);
            assert_eq!(name.as_bytes_with_nul()[NAME_LENGTH], 0);
            assert!(!name.as_bytes().contains(&0));
        }
    }

    #[test]
    fn alternates_consonants_and_vowels() {
        for serial in sample_serials() {
            let name = encode(serial);
            let letters = name.as_bytes();
            assert!(is_consonant(letters[0]), "{name:?}");
            assert!(is_vowel(letters[1]), "{name:?}");
            assert!(is_consonant(letters[2]), "{name:?}");
            assert!(is_vowel(letters[3]), "{name:?}");
            assert!(is_consonant(letters[4]), "{name:?}");
        }
    }

    #[test]
    fn letter_classes_are_disjoint() {
        for letter in CONSONANTS {
            assert!(!is_vowel(letter));
        }
        for letter in VOWELS {
            assert!(!is_consonant(letter));
        }
        assert!(CODEBOOK.iter().flatten().all(u8::is_ascii_lowercase));
    }

    #[test]
    fn distinct_serials_share_names() {
        assert_eq!(encode(0), encode(3125));
        assert_eq!(encode(6), encode(6 + 3125 * 17));
    }

    #[test]
    fn first_names_use_whole_name_space() {
        let mut names = [[0u8; NAME_LENGTH + 1]; 3125];
        for (serial, slot) in (0u32..).zip(names.iter_mut()) {
            *slot = *encode(serial).as_bytes_with_nul();
        }
        names.sort_unstable();
        assert!(names.windows(2).all(|pair| pair[0] != pair[1]));
    }

    // The digit-subtracting recurrence never borrows into higher digits, so it yields the same
    // names as plain base-5 digits of the serial number.
    #[test]
    fn matches_base5_digits() {
        fn base5(serial: u32) -> [u8; NAME_LENGTH] {
            let mut name = [0; NAME_LENGTH];
            let mut rest = serial;
            for (position, letter) in name.iter_mut().rev().enumerate() {
                *letter = CODEBOOK[position][(rest % RADIX) as usize];
                rest /= RADIX;
            }
            name
        }

        for serial in sample_serials().chain(0..10_000) {
            assert_eq!(encode(serial).as_bytes(), base5(serial), "serial {serial}");
        }
    }

    #[test]
    fn encoder_overwrites_its_buffer() {
        let mut encoder = NameEncoder::new();
        assert!(encoder.last().is_none());

        assert_eq!(*encoder.encode(1), "zuzuv");
        assert_eq!(*encoder.encode(6), "zuzov");
        assert_eq!(encoder.last(), Some(&encode(6)));
    }

    #[test]
    fn formatting() {
        use std::format;

        let name = encode(1);
        assert_eq!(format!("{name}"), "zuzuv");
        assert_eq!(format!("{name:?}"), "FriendlyName(\"zuzuv\")");
        assert_eq!(FriendlyName::from(1), name);
    }
}
