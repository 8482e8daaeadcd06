use crate::constants::CALL_FLAG_MORE_FRAGMENTS;

/// The `flags` byte leading every call request and call response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CallFlags(pub u8);

impl CallFlags {
    pub const MORE_FRAGMENTS: u8 = CALL_FLAG_MORE_FRAGMENTS;

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether continuation frames carrying the rest of this call follow.
    ///
    /// Reassembly belongs to the transport; the decoder only reports it.
    pub fn is_fragmented(self) -> bool {
        self.0 & Self::MORE_FRAGMENTS != 0
    }
}

impl From<u8> for CallFlags {
    fn from(bits: u8) -> Self {
        CallFlags(bits)
    }
}
