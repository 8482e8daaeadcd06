use crate::{
    constants::{FRAME_HEADER_SIZE, FRAME_ID_RESERVED_SIZE, FRAME_TYPE_RESERVED_SIZE},
    frame::{ByteCursor, FrameDecodeError, FrameType},
};

/// The fixed 16-byte header shared by every frame type.
///
/// ```text
/// size:2  type:1  reserved:1  id:4  reserved:8
/// ```
///
/// The header is purely structural: `frame_type` is kept as the raw byte
/// and only interpreted by the dispatcher in
/// [`FrameCodec`](crate::frame::FrameCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Declared total frame length, header included.
    pub size: u16,

    /// Raw message type byte.
    pub frame_type: u8,

    /// Identifier used by the RPC layer to pair requests with responses.
    pub id: u32,
}

impl FrameHeader {
    /// Decodes the header from the front of `cursor`.
    ///
    /// On success the cursor is positioned at offset 16, the first byte of
    /// the body. Buffers shorter than the header fail with
    /// [`FrameDecodeError::FrameTooShort`] before anything is read.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, FrameDecodeError> {
        if cursor.remaining() < FRAME_HEADER_SIZE {
            return Err(FrameDecodeError::FrameTooShort {
                len: cursor.remaining(),
            });
        }

        let size = cursor.read_u16_be()?;
        let frame_type = cursor.read_u8()?;
        cursor.skip(FRAME_TYPE_RESERVED_SIZE)?;
        let id = cursor.read_u32_be()?;
        cursor.skip(FRAME_ID_RESERVED_SIZE)?;

        Ok(Self {
            size,
            frame_type,
            id,
        })
    }

    /// Convenience wrapper decoding the header at the start of `buf`.
    pub fn from_slice(buf: &[u8]) -> Result<Self, FrameDecodeError> {
        Self::decode(&mut ByteCursor::new(buf))
    }

    /// The header's type byte as a known [`FrameType`], if it is one.
    pub fn known_type(&self) -> Option<FrameType> {
        FrameType::try_from(self.frame_type).ok()
    }
}
