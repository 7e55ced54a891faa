use bitflags::bitflags;

bitflags! {
    /// Features the host can switch on for a date chooser.
    ///
    /// Flags are independent, but the wheel-related ones are not commutative:
    /// when several of them are set, [`resolve`](crate::resolve) picks the
    /// first match in the order `DATE_AND_TIME_SEPARATE`, `TIME_ONLY`,
    /// `DATE_AND_TIME_COMBINED`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
    pub struct Capabilities: u32 {
        /// Offer a "Remove date" button.
        const REMOVE_DATE = 1 << 0;
        /// Offer a "Set to current" button.
        const SET_TO_CURRENT = 1 << 1;
        /// Edit date and time separately, switching between them with a segmented control.
        const DATE_AND_TIME_SEPARATE = 1 << 2;
        /// Edit the time of day only.
        const TIME_ONLY = 1 << 3;
        /// Edit date and time together on a single wheel.
        const DATE_AND_TIME_COMBINED = 1 << 4;
    }
}

impl Capabilities {
    /// The preset used when the host does not choose one: a date wheel with
    /// both the remove and set-to-current actions.
    pub const STANDARD: Self = Self::REMOVE_DATE.union(Self::SET_TO_CURRENT);

    /// Interprets a raw host bitmask, dropping bits that name no capability.
    #[must_use]
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u32> for Capabilities {
    fn from(bits: u32) -> Self {
        Self::from_raw(bits)
    }
}

impl From<Capabilities> for u32 {
    fn from(capabilities: Capabilities) -> Self {
        capabilities.bits()
    }
}
