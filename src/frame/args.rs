use crate::constants::MAX_ARGS;

/// Up to three argument blobs of a call frame, borrowed from the buffer.
///
/// An argument that was present on the wire with a zero length is kept as
/// an empty slice. Arguments the frame ended before reaching are simply not
/// there, so [`Args::len`] can be anything from 0 to 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Args<'a> {
    items: [&'a [u8]; MAX_ARGS],
    len: usize,
}

impl<'a> Args<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument; returns `false` once all three slots are used.
    pub(crate) fn push(&mut self, arg: &'a [u8]) -> bool {
        if self.len == MAX_ARGS {
            return false;
        }

        self.items[self.len] = arg;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        self.as_slice().get(index).copied()
    }

    pub fn as_slice(&self) -> &[&'a [u8]] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.as_slice().iter().copied()
    }

    /// First argument, by convention the method name.
    pub fn arg1(&self) -> Option<&'a [u8]> {
        self.get(0)
    }

    /// Second argument, by convention application headers.
    pub fn arg2(&self) -> Option<&'a [u8]> {
        self.get(1)
    }

    /// Third argument, by convention the request or response body.
    pub fn arg3(&self) -> Option<&'a [u8]> {
        self.get(2)
    }
}
