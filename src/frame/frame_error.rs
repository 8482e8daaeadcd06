use std::fmt;

use crate::constants::FRAME_HEADER_SIZE;

/// Reasons a buffer could not be decoded into a [`Frame`](crate::frame::Frame).
///
/// Every variant is terminal for the decode call that produced it. The
/// decoder never hands back a partially populated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecodeError {
    /// The buffer is shorter than the fixed 16-byte frame header.
    FrameTooShort { len: usize },

    /// The header `type` is not one this decoder has a body decoder for.
    UnknownFrameType(u8),

    /// A read at `offset` needed `needed` bytes but only `remaining` were left.
    OutOfBounds {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The header count promised more key/value pairs than the buffer holds.
    HeaderCountMismatch { declared: u8, decoded: u8 },

    /// The header `size` field disagrees with the length of the buffer.
    SizeMismatch { declared: u16, actual: usize },
}

impl fmt::Display for FrameDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameDecodeError::FrameTooShort { len } => {
                write!(
                    f,
                    "frame too short: {} bytes, header needs {}",
                    len, FRAME_HEADER_SIZE
                )
            }
            FrameDecodeError::UnknownFrameType(frame_type) => {
                write!(f, "unknown frame type: {:#04x}", frame_type)
            }
            FrameDecodeError::OutOfBounds {
                offset,
                needed,
                remaining,
            } => write!(
                f,
                "out of bounds at offset {}: needed {} bytes, {} remaining",
                offset, needed, remaining
            ),
            FrameDecodeError::HeaderCountMismatch { declared, decoded } => write!(
                f,
                "header count mismatch: declared {} pairs, buffer ended after {}",
                declared, decoded
            ),
            FrameDecodeError::SizeMismatch { declared, actual } => write!(
                f,
                "frame size mismatch: header declares {} bytes, buffer holds {}",
                declared, actual
            ),
        }
    }
}

impl std::error::Error for FrameDecodeError {}
