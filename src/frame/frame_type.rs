use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The message type carried in byte 2 of every frame header.
///
/// The full protocol message set is listed so that logs can name what
/// arrived, but only [`FrameType::CallRequest`] and
/// [`FrameType::CallResponse`] have body decoders.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum FrameType {
    /// First message on every connection.
    InitRequest = 0x01,
    InitResponse = 0x02,
    CallRequest = 0x03,
    CallResponse = 0x04,
    CallRequestContinue = 0x13,
    CallResponseContinue = 0x14,
    /// Cancels an outstanding call (no body).
    Cancel = 0xc0,
    /// Claims or cancels a redundant request.
    Claim = 0xc1,
    PingRequest = 0xd0,
    PingResponse = 0xd1,
    /// Protocol level error.
    Error = 0xff,
}

impl FrameType {
    /// Whether this type is one of the call frames the dispatcher decodes.
    pub fn is_call(self) -> bool {
        matches!(self, FrameType::CallRequest | FrameType::CallResponse)
    }
}
