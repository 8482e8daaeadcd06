use crate::frame::{
    Args, ByteCursor, CallFlags, Checksum, FrameDecodeError, Headers, Tracing,
    length_prefixed::{read_args, read_checksum, read_headers, read_short_string},
};

/// Body of a call request frame (type `0x03`).
///
/// ```text
/// flags:1 ttl:4 tracing:25 service~1 nh:1 (hk~1 hv~1){nh}
/// csumtype:1 (csumval:4){0,1} arg1~2 arg2~2 arg3~2
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequestBody<'a> {
    pub flags: CallFlags,

    /// Time-to-live in milliseconds; a deadline hint for the callee.
    pub ttl: u32,

    pub tracing: Tracing<'a>,

    /// Name of the service being called. May be empty.
    pub service: &'a [u8],

    pub headers: Headers<'a>,
    pub checksum: Checksum,
    pub args: Args<'a>,
}

impl<'a> CallRequestBody<'a> {
    /// Decodes a call request body starting at the cursor's position,
    /// which must be the first byte after the frame header.
    ///
    /// Any failure aborts the whole body; nothing partial is returned.
    pub fn decode(cursor: &mut ByteCursor<'a>) -> Result<Self, FrameDecodeError> {
        let flags = CallFlags(cursor.read_u8()?);
        let ttl = cursor.read_u32_be()?;
        let tracing = Tracing::decode(cursor)?;
        let service = read_short_string(cursor)?;
        let headers = read_headers(cursor)?;
        let checksum = read_checksum(cursor)?;
        let args = read_args(cursor)?;

        Ok(Self {
            flags,
            ttl,
            tracing,
            service,
            headers,
            checksum,
            args,
        })
    }

    /// The service name as UTF-8, if it is valid UTF-8.
    pub fn service_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.service).ok()
    }
}
