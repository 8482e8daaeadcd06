use crate::{
    constants::{TRACING_FLAG_ENABLED, TRACING_ID_SIZE, TRACING_SIZE},
    frame::{ByteCursor, FrameDecodeError},
};

/// The fixed 25-byte distributed tracing block carried by call frames.
///
/// Identifiers are borrowed straight from the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracing<'a> {
    pub span_id: &'a [u8; TRACING_ID_SIZE],
    pub parent_id: &'a [u8; TRACING_ID_SIZE],
    pub trace_id: &'a [u8; TRACING_ID_SIZE],
    pub flags: u8,
}

impl<'a> Tracing<'a> {
    /// Reads the tracing block at the cursor's current position.
    ///
    /// The caller decides where the block starts by decoding the fields in
    /// front of it first; no absolute offsets are assumed here.
    pub fn decode(cursor: &mut ByteCursor<'a>) -> Result<Self, FrameDecodeError> {
        if cursor.remaining() < TRACING_SIZE {
            return Err(FrameDecodeError::OutOfBounds {
                offset: cursor.position(),
                needed: TRACING_SIZE,
                remaining: cursor.remaining(),
            });
        }

        Ok(Self {
            span_id: cursor.read_array()?,
            parent_id: cursor.read_array()?,
            trace_id: cursor.read_array()?,
            flags: cursor.read_u8()?,
        })
    }

    /// Whether the sender marked this span as traced.
    pub fn is_enabled(&self) -> bool {
        self.flags & TRACING_FLAG_ENABLED != 0
    }

    pub fn span_id_u64(&self) -> u64 {
        u64::from_be_bytes(*self.span_id)
    }

    pub fn parent_id_u64(&self) -> u64 {
        u64::from_be_bytes(*self.parent_id)
    }

    pub fn trace_id_u64(&self) -> u64 {
        u64::from_be_bytes(*self.trace_id)
    }
}
