use crate::{
    constants::{ARG_LENGTH_FIELD_SIZE, SHORT_LENGTH_FIELD_SIZE},
    frame::FrameDecodeError,
};

/// Width of the big-endian length field in front of a length-prefixed blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthWidth {
    /// 1-byte length (service name, header keys and values).
    U8,

    /// 2-byte big-endian length (call arguments).
    U16,
}

impl LengthWidth {
    /// Number of bytes occupied by the length field itself.
    pub fn size(self) -> usize {
        match self {
            LengthWidth::U8 => SHORT_LENGTH_FIELD_SIZE,
            LengthWidth::U16 => ARG_LENGTH_FIELD_SIZE,
        }
    }
}

/// A bounds-checked read cursor over an immutable byte buffer.
///
/// Every read either advances the position by exactly the number of bytes
/// it consumed or fails with [`FrameDecodeError::OutOfBounds`] and leaves the
/// position where it was. Slices handed out borrow from the underlying
/// buffer for its full lifetime `'a`, so nothing is copied.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Limits the readable region to the first `len` bytes of the buffer.
    ///
    /// Never shrinks below the current position or grows past the buffer.
    pub fn truncate(&mut self, len: usize) {
        let len = len.clamp(self.pos, self.buf.len());
        self.buf = &self.buf[..len];
    }

    /// Returns a bounds-checked slice of exactly `n` bytes and advances past it.
    pub fn read_fixed(&mut self, n: usize) -> Result<&'a [u8], FrameDecodeError> {
        let remaining = self.remaining();

        if n > remaining {
            return Err(FrameDecodeError::OutOfBounds {
                offset: self.pos,
                needed: n,
                remaining,
            });
        }

        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;

        Ok(slice)
    }

    /// Reads exactly `N` bytes into a fixed-size array reference.
    pub fn read_array<const N: usize>(&mut self) -> Result<&'a [u8; N], FrameDecodeError> {
        let offset = self.pos;
        let slice = self.read_fixed(N)?;

        slice
            .try_into()
            .map_err(|_| FrameDecodeError::OutOfBounds {
                offset,
                needed: N,
                remaining: slice.len(),
            })
    }

    /// Advances past `n` bytes without inspecting them.
    pub fn skip(&mut self, n: usize) -> Result<(), FrameDecodeError> {
        self.read_fixed(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, FrameDecodeError> {
        let [byte] = *self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, FrameDecodeError> {
        Ok(u16::from_be_bytes(*self.read_array::<2>()?))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, FrameDecodeError> {
        Ok(u32::from_be_bytes(*self.read_array::<4>()?))
    }

    /// Reads a length field of the given width, then that many bytes.
    ///
    /// Fails without moving the cursor if either the length field or the
    /// declared payload runs past the end of the buffer.
    pub fn read_length_prefixed(
        &mut self,
        width: LengthWidth,
    ) -> Result<&'a [u8], FrameDecodeError> {
        let start = self.pos;

        let len = match width {
            LengthWidth::U8 => self.read_u8()? as usize,
            LengthWidth::U16 => self.read_u16_be()? as usize,
        };

        self.read_fixed(len).inspect_err(|_| self.pos = start)
    }
}
