use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Checksum algorithms named by the protocol.
///
/// The decoder only records which one the sender used; verifying the value
/// against the argument bytes is left to the caller.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum ChecksumType {
    None = 0x00,
    Crc32 = 0x01,
    Farmhash = 0x02,
    Crc32C = 0x03,
}

/// Checksum block of a call frame.
///
/// A `kind` of zero never carries a value; any other kind always carries
/// exactly four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    pub kind: u8,
    pub value: Option<u32>,
}

impl Checksum {
    /// The algorithm as a known [`ChecksumType`], or `None` if the sender
    /// used a type this crate does not name.
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        ChecksumType::try_from(self.kind).ok()
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}
