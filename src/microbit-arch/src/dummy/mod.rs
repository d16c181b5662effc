//! Dummy module used to satisfy platform-independent tooling and host tests.

pub mod identity {
    /// Dummy type.
    ///
    /// See the `SerialNumber` type of your MCU family crate instead.
    pub struct SerialNumber;

    impl microbit_common::identity::IdentitySource for SerialNumber {
        fn read() -> u32 {
            unimplemented!();
        }
    }
}

pub mod radio {
    pub type SoftDevice = microbit_common::radio::NoRadioStack;
}

pub mod reset {
    pub fn system_reset() -> ! {
        unimplemented!();
    }
}
