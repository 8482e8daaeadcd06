use crate::frame::{
    Args, CallRequestBody, CallResponseBody, Checksum, FrameType, Headers, Tracing,
};

/// A single decoded frame.
///
/// A frame is one complete protocol message: the fixed header followed by a
/// typed body. Every byte string inside it borrows from the buffer it was
/// decoded from, so the buffer must outlive the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Declared total frame length (header plus body) as transmitted.
    pub size: u16,

    /// The type of frame, always matching the variant of `body`.
    pub frame_type: FrameType,

    /// Identifier the RPC layer uses to pair a response with its request.
    ///
    /// The decoder attaches no meaning to it.
    pub id: u32,

    pub body: FrameBody<'a>,
}

/// Typed body of a [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBody<'a> {
    CallRequest(CallRequestBody<'a>),
    CallResponse(CallResponseBody<'a>),
}

impl<'a> Frame<'a> {
    pub fn as_call_request(&self) -> Option<&CallRequestBody<'a>> {
        match &self.body {
            FrameBody::CallRequest(body) => Some(body),
            FrameBody::CallResponse(_) => None,
        }
    }

    pub fn as_call_response(&self) -> Option<&CallResponseBody<'a>> {
        match &self.body {
            FrameBody::CallResponse(body) => Some(body),
            FrameBody::CallRequest(_) => None,
        }
    }

    pub fn tracing(&self) -> &Tracing<'a> {
        match &self.body {
            FrameBody::CallRequest(body) => &body.tracing,
            FrameBody::CallResponse(body) => &body.tracing,
        }
    }

    pub fn headers(&self) -> &Headers<'a> {
        match &self.body {
            FrameBody::CallRequest(body) => &body.headers,
            FrameBody::CallResponse(body) => &body.headers,
        }
    }

    pub fn checksum(&self) -> &Checksum {
        match &self.body {
            FrameBody::CallRequest(body) => &body.checksum,
            FrameBody::CallResponse(body) => &body.checksum,
        }
    }

    pub fn args(&self) -> &Args<'a> {
        match &self.body {
            FrameBody::CallRequest(body) => &body.args,
            FrameBody::CallResponse(body) => &body.args,
        }
    }
}
