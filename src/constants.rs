// Frame header constants
pub const FRAME_HEADER_SIZE: usize = 16;

/// Reserved byte that follows the 1-byte frame type.
pub const FRAME_TYPE_RESERVED_SIZE: usize = 1;

/// Reserved bytes that follow the 4-byte frame id (two 4-byte zones).
pub const FRAME_ID_RESERVED_SIZE: usize = 8;

/// Size in bytes of each tracing identifier (span, parent, trace).
pub const TRACING_ID_SIZE: usize = 8;

/// Total size of the tracing block: three identifiers plus one flags byte.
pub const TRACING_SIZE: usize = 3 * TRACING_ID_SIZE + 1;

/// Size in bytes of a checksum value, present whenever the checksum type
/// is non-zero.
pub const CHECKSUM_VALUE_SIZE: usize = 4;

/// Maximum number of argument blobs a call frame carries.
pub const MAX_ARGS: usize = 3;

/// Width of the length prefix in front of each argument blob.
pub const ARG_LENGTH_FIELD_SIZE: usize = 2;

/// Width of the length prefix in front of the service name and each
/// header key or value.
pub const SHORT_LENGTH_FIELD_SIZE: usize = 1;

/// Call flag signalling that more fragments of this call follow.
pub const CALL_FLAG_MORE_FRAGMENTS: u8 = 0x01;

/// Tracing flag signalling that the span is sampled.
pub const TRACING_FLAG_ENABLED: u8 = 0x01;
