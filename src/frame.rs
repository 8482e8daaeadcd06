mod args;
mod byte_cursor;
mod call_flags;
mod call_request;
mod call_response;
mod checksum;
mod frame_codec;
mod frame_error;
mod frame_header;
mod frame_struct;
mod frame_tracing;
mod frame_type;
mod headers;
pub mod length_prefixed;

pub use args::Args;
pub use byte_cursor::{ByteCursor, LengthWidth};
pub use call_flags::CallFlags;
pub use call_request::CallRequestBody;
pub use call_response::{CallResponseBody, ResponseCode};
pub use checksum::{Checksum, ChecksumType};
pub use frame_codec::{DecoderConfig, FrameCodec};
pub use frame_error::FrameDecodeError;
pub use frame_header::FrameHeader;
pub use frame_struct::{Frame, FrameBody};
pub use frame_tracing::Tracing;
pub use frame_type::FrameType;
pub use headers::Headers;
