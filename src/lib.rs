//! Zero-copy decoding of TChannel call frames.
//!
//! A transport hands [`decode`] one buffer holding exactly one frame and
//! gets back either a fully populated [`Frame`] or the
//! [`FrameDecodeError`] explaining why the bytes are not a call request or
//! call response. Service names, header keys and values, tracing
//! identifiers and arguments all borrow from the input buffer.
//!
//! ```
//! use tchannel_parser::{FrameDecodeError, decode};
//!
//! let err = decode(&[0u8; 4]).unwrap_err();
//! assert_eq!(err, FrameDecodeError::FrameTooShort { len: 4 });
//! ```

pub mod constants;
pub mod frame;

pub use frame::{DecoderConfig, Frame, FrameBody, FrameCodec, FrameDecodeError, FrameType};

/// Decodes one complete frame with the default configuration.
///
/// Shorthand for [`FrameCodec::decode`].
pub fn decode(buf: &[u8]) -> Result<Frame<'_>, FrameDecodeError> {
    FrameCodec::decode(buf)
}
