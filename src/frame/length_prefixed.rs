//! Readers for the variable-length regions shared by call requests and
//! call responses.
//!
//! ```text
//! service~1
//! nh:1 (hk~1 hv~1){nh}
//! csumtype:1 (csumval:4){0,1}
//! arg1~2 arg2~2 arg3~2
//! ```
//!
//! `~N` is an N-byte big-endian length followed by that many bytes.

use crate::{
    constants::{ARG_LENGTH_FIELD_SIZE, CHECKSUM_VALUE_SIZE, MAX_ARGS},
    frame::{Args, ByteCursor, Checksum, FrameDecodeError, Headers, LengthWidth},
};

/// Reads a 1-byte-length-prefixed byte string. Zero length is valid.
pub fn read_short_string<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8], FrameDecodeError> {
    cursor.read_length_prefixed(LengthWidth::U8)
}

/// Reads the header count followed by that many key/value pairs.
///
/// Running out of buffer where the next key or value length should be
/// fails with [`FrameDecodeError::HeaderCountMismatch`]; a key or value whose
/// declared length overruns the buffer fails with
/// [`FrameDecodeError::OutOfBounds`].
pub fn read_headers<'a>(cursor: &mut ByteCursor<'a>) -> Result<Headers<'a>, FrameDecodeError> {
    let declared = cursor.read_u8()?;
    let mut headers = Headers::with_capacity(declared as usize);

    for decoded in 0..declared {
        let mismatch = FrameDecodeError::HeaderCountMismatch { declared, decoded };

        if cursor.is_empty() {
            return Err(mismatch);
        }
        let key = read_short_string(cursor)?;

        if cursor.is_empty() {
            return Err(mismatch);
        }
        let value = read_short_string(cursor)?;

        headers.push(key, value);
    }

    Ok(headers)
}

/// Reads the checksum type and, for any non-zero type, its 4-byte value.
pub fn read_checksum(cursor: &mut ByteCursor<'_>) -> Result<Checksum, FrameDecodeError> {
    let kind = cursor.read_u8()?;

    let value = match kind {
        0 => None,
        _ => Some(u32::from_be_bytes(
            *cursor.read_array::<CHECKSUM_VALUE_SIZE>()?,
        )),
    };

    Ok(Checksum { kind, value })
}

/// Reads up to three 2-byte-length-prefixed arguments.
///
/// The frame may legitimately end before any argument's length field;
/// that argument and all later ones are then absent. Once a length field
/// has been read, its payload must be fully present.
pub fn read_args<'a>(cursor: &mut ByteCursor<'a>) -> Result<Args<'a>, FrameDecodeError> {
    let mut args = Args::new();

    while args.len() < MAX_ARGS && cursor.remaining() >= ARG_LENGTH_FIELD_SIZE {
        args.push(cursor.read_length_prefixed(LengthWidth::U16)?);
    }

    if !cursor.is_empty() {
        tracing::trace!(
            offset = cursor.position(),
            remaining = cursor.remaining(),
            args = args.len(),
            "ignoring bytes after last argument"
        );
    }

    Ok(args)
}
