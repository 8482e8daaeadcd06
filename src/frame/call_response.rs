use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::frame::{
    Args, ByteCursor, CallFlags, Checksum, FrameDecodeError, Headers, Tracing,
    length_prefixed::{read_args, read_checksum, read_headers},
};

/// Response codes defined by the protocol.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum ResponseCode {
    Ok = 0x00,
    /// Application error; details are in the arguments.
    Error = 0x01,
}

/// Body of a call response frame (type `0x04`).
///
/// Same layout as a request body, with `code` in place of `ttl` and no
/// service name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResponseBody<'a> {
    pub flags: CallFlags,
    pub code: u8,
    pub tracing: Tracing<'a>,
    pub headers: Headers<'a>,
    pub checksum: Checksum,
    pub args: Args<'a>,
}

impl<'a> CallResponseBody<'a> {
    pub fn decode(cursor: &mut ByteCursor<'a>) -> Result<Self, FrameDecodeError> {
        let flags = CallFlags(cursor.read_u8()?);
        let code = cursor.read_u8()?;
        let tracing = Tracing::decode(cursor)?;
        let headers = read_headers(cursor)?;
        let checksum = read_checksum(cursor)?;
        let args = read_args(cursor)?;

        Ok(Self {
            flags,
            code,
            tracing,
            headers,
            checksum,
            args,
        })
    }

    pub fn response_code(&self) -> Option<ResponseCode> {
        ResponseCode::try_from(self.code).ok()
    }

    pub fn is_ok(&self) -> bool {
        self.response_code() == Some(ResponseCode::Ok)
    }
}
