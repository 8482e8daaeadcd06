use crate::{
    constants::FRAME_HEADER_SIZE,
    frame::{
        ByteCursor, CallRequestBody, CallResponseBody, Frame, FrameBody, FrameDecodeError,
        FrameHeader, FrameType,
    },
};

/// Runtime options for [`FrameCodec::decode_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Reject frames whose header `size` differs from the buffer length.
    ///
    /// When disabled the mismatch is logged and decoding is confined to
    /// the smaller of the two, or to the whole buffer if the declared size
    /// cannot even cover the header.
    pub strict_size: bool,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_size(mut self, strict_size: bool) -> Self {
        self.strict_size = strict_size;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { strict_size: true }
    }
}

/// Decodes complete frames out of byte buffers.
///
/// The `FrameCodec` reads the fixed header, picks the body decoder for the
/// header's type and assembles a [`Frame`] whose byte strings borrow from
/// the input. Each call is independent: there is no state between calls, so
/// any number of threads may decode (even the same buffer) at once.
///
/// Splitting a byte stream into frame-sized buffers is the transport's job;
/// every buffer handed in is expected to hold exactly one whole frame.
pub struct FrameCodec;

impl FrameCodec {
    /// Decodes `buf` with the default (strict) [`DecoderConfig`].
    ///
    /// # Returns
    ///
    /// - `Ok(Frame)` with every field populated.
    /// - `Err(FrameDecodeError)` naming why the buffer is not a valid call
    ///   frame. No partially decoded frame is ever returned.
    pub fn decode(buf: &[u8]) -> Result<Frame<'_>, FrameDecodeError> {
        Self::decode_with_config(buf, &DecoderConfig::default())
    }

    pub fn decode_with_config<'a>(
        buf: &'a [u8],
        config: &DecoderConfig,
    ) -> Result<Frame<'a>, FrameDecodeError> {
        let result = Self::decode_frame(buf, config);

        match &result {
            Ok(frame) => tracing::trace!(
                id = frame.id,
                frame_type = ?frame.frame_type,
                size = frame.size,
                "decoded frame"
            ),
            Err(err) => tracing::debug!(len = buf.len(), %err, "failed to decode frame"),
        }

        result
    }

    fn decode_frame<'a>(
        buf: &'a [u8],
        config: &DecoderConfig,
    ) -> Result<Frame<'a>, FrameDecodeError> {
        let mut cursor = ByteCursor::new(buf);
        let header = FrameHeader::decode(&mut cursor)?;

        let frame_type = match header.known_type() {
            Some(frame_type) if frame_type.is_call() => frame_type,
            _ => return Err(FrameDecodeError::UnknownFrameType(header.frame_type)),
        };

        cursor.truncate(Self::frame_len(&header, buf.len(), config)?);

        let body = match frame_type {
            FrameType::CallRequest => FrameBody::CallRequest(CallRequestBody::decode(&mut cursor)?),
            FrameType::CallResponse => {
                FrameBody::CallResponse(CallResponseBody::decode(&mut cursor)?)
            }
            other => return Err(FrameDecodeError::UnknownFrameType(other.into())),
        };

        Ok(Frame {
            size: header.size,
            frame_type,
            id: header.id,
            body,
        })
    }

    /// Number of bytes of `buf` that belong to the frame described by `header`.
    fn frame_len(
        header: &FrameHeader,
        buf_len: usize,
        config: &DecoderConfig,
    ) -> Result<usize, FrameDecodeError> {
        let declared = header.size as usize;

        if declared == buf_len {
            return Ok(buf_len);
        }

        if config.strict_size {
            return Err(FrameDecodeError::SizeMismatch {
                declared: header.size,
                actual: buf_len,
            });
        }

        tracing::warn!(
            id = header.id,
            declared,
            actual = buf_len,
            "frame size disagrees with buffer length"
        );

        if declared < FRAME_HEADER_SIZE {
            Ok(buf_len)
        } else {
            Ok(declared.min(buf_len))
        }
    }
}
