#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honouring `RUST_LOG`, e.g. `RUST_LOG=trace`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A call request as captured off the wire: size 125, id 0xFFFFFFFE,
/// service "moose", three headers, CRC32 checksum and three arguments.
#[rustfmt::skip]
pub const CALL_REQUEST_FIXTURE: [u8; 125] = [
    0x00, 0x7D,             // size 125
    0x03,                   // type: call request
    0x00,                   // reserved
    0xFF, 0xFF, 0xFF, 0xFE, // id
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x00, 0x00, 0x00, // reserved
    0x08,                   // flags
    0x01, 0x02, 0x03, 0x04, // ttl

    // tracing
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,

    // service: "moose"
    0x05, 0x6D, 0x6F, 0x6F, 0x73, 0x65,

    // nh
    0x03,

    // header1: header1string
    0x07, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x31,
    0x0D, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x31,
    0x73, 0x74, 0x72, 0x69, 0x6E, 0x67,

    // header2: header2string
    0x07, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x32,
    0x0D, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x32,
    0x73, 0x74, 0x72, 0x69, 0x6E, 0x67,

    // auth: moose
    0x04, 0x61, 0x75, 0x74, 0x68,
    0x05, 0x6D, 0x6F, 0x6F, 0x73, 0x65,

    // checksum
    0x01, 0xFF, 0xFF, 0xFF, 0xFF,

    // args
    0x00, 0x01, 0xFF,
    0x00, 0x02, 0xFF, 0xFE,
    0x00, 0x03, 0xFF, 0xFE, 0xFD,
];

/// The matching call response: size 116, code 0x09, tracing flags 0x01.
#[rustfmt::skip]
pub const CALL_RESPONSE_FIXTURE: [u8; 116] = [
    0x00, 0x74,             // size 116
    0x04,                   // type: call response
    0x00,                   // reserved
    0xFF, 0xFF, 0xFF, 0xFE, // id
    0x00, 0x00, 0x00, 0x00, // reserved
    0x00, 0x00, 0x00, 0x00, // reserved
    0x08,                   // flags
    0x09,                   // code

    // tracing
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01,

    // nh
    0x03,

    // header1: header1string
    0x07, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x31,
    0x0D, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x31,
    0x73, 0x74, 0x72, 0x69, 0x6E, 0x67,

    // header2: header2string
    0x07, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x32,
    0x0D, 0x68, 0x65, 0x61, 0x64, 0x65, 0x72, 0x32,
    0x73, 0x74, 0x72, 0x69, 0x6E, 0x67,

    // auth: moose
    0x04, 0x61, 0x75, 0x74, 0x68,
    0x05, 0x6D, 0x6F, 0x6F, 0x73, 0x65,

    // checksum
    0x01, 0xFF, 0xFF, 0xFF, 0xFF,

    // args
    0x00, 0x01, 0xFF,
    0x00, 0x02, 0xFF, 0xFE,
    0x00, 0x03, 0xFF, 0xFE, 0xFD,
];

/// Reference encoder for call frames, used to build inputs for the decoder.
#[derive(Debug, Clone)]
pub struct CallFrameBuilder {
    pub frame_type: u8,
    pub id: u32,
    pub flags: u8,
    pub ttl: u32,
    pub code: u8,
    pub tracing: [u8; 25],
    pub service: Vec<u8>,
    pub headers: Vec<(Vec<u8>, Vec<u8>)>,
    pub checksum_type: u8,
    pub checksum_value: u32,
    pub args: Vec<Vec<u8>>,
}

impl CallFrameBuilder {
    pub fn request() -> Self {
        Self {
            frame_type: 0x03,
            id: 1,
            flags: 0,
            ttl: 0,
            code: 0,
            tracing: [0; 25],
            service: Vec::new(),
            headers: Vec::new(),
            checksum_type: 0,
            checksum_value: 0,
            args: Vec::new(),
        }
    }

    pub fn response() -> Self {
        Self {
            frame_type: 0x04,
            ..Self::request()
        }
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn code(mut self, code: u8) -> Self {
        self.code = code;
        self
    }

    pub fn tracing(mut self, tracing: [u8; 25]) -> Self {
        self.tracing = tracing;
        self
    }

    pub fn service(mut self, service: &[u8]) -> Self {
        self.service = service.to_vec();
        self
    }

    pub fn header(mut self, key: &[u8], value: &[u8]) -> Self {
        self.headers.push((key.to_vec(), value.to_vec()));
        self
    }

    pub fn checksum(mut self, checksum_type: u8, checksum_value: u32) -> Self {
        self.checksum_type = checksum_type;
        self.checksum_value = checksum_value;
        self
    }

    pub fn arg(mut self, arg: &[u8]) -> Self {
        self.args.push(arg.to_vec());
        self
    }

    /// Encodes everything after the 16-byte header.
    pub fn body(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.push(self.flags);
        if self.frame_type == 0x03 {
            buf.extend(&self.ttl.to_be_bytes());
        } else {
            buf.push(self.code);
        }
        buf.extend(&self.tracing);

        if self.frame_type == 0x03 {
            buf.push(self.service.len() as u8);
            buf.extend(&self.service);
        }

        buf.push(self.headers.len() as u8);
        for (key, value) in &self.headers {
            buf.push(key.len() as u8);
            buf.extend(key);
            buf.push(value.len() as u8);
            buf.extend(value);
        }

        buf.push(self.checksum_type);
        if self.checksum_type != 0 {
            buf.extend(&self.checksum_value.to_be_bytes());
        }

        for arg in &self.args {
            buf.extend(&(arg.len() as u16).to_be_bytes());
            buf.extend(arg);
        }

        buf
    }

    /// Encodes the whole frame with a correct `size` field.
    pub fn build(&self) -> Vec<u8> {
        let body = self.body();
        self.build_with_size(16 + body.len() as u16, &body)
    }

    /// Encodes the frame around `body` with an arbitrary `size` field.
    pub fn build_with_size(&self, size: u16, body: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + body.len());

        buf.extend(&size.to_be_bytes());
        buf.push(self.frame_type);
        buf.push(0);
        buf.extend(&self.id.to_be_bytes());
        buf.extend(&[0u8; 8]);
        buf.extend(body);

        buf
    }
}

/// Rewrites the `size` field of an encoded frame to match its length.
pub fn fix_size(buf: &mut [u8]) {
    let size = buf.len() as u16;
    buf[..2].copy_from_slice(&size.to_be_bytes());
}

/// A tracing block with distinct span, parent and trace ids.
pub fn sample_tracing(flags: u8) -> [u8; 25] {
    let mut tracing = [0u8; 25];
    for (i, byte) in tracing[..24].iter_mut().enumerate() {
        *byte = i as u8 + 1;
    }
    tracing[24] = flags;
    tracing
}
