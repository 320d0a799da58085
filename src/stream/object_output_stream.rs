use crate::stream::type_descriptor::Serializable;
use crate::stream::{STREAM_MAGIC, STREAM_VERSION};
use bytes::BufMut;

/// Encodes objects into an in-memory, self-describing byte stream. Each
/// record carries the declared type name ahead of the field payload so the
/// decoder can attempt reconstruction later. Encoding never fails, it only
/// reads already-initialized fields.
#[derive(Debug)]
pub struct ObjectOutputStream {
    buffer: Vec<u8>,
}

impl ObjectOutputStream {
    pub fn new() -> Self {
        let mut buffer = Vec::new();
        buffer.put_u32_le(STREAM_MAGIC);
        buffer.put_u16_le(STREAM_VERSION);
        Self { buffer }
    }

    pub fn write_object<T: Serializable>(&mut self, object: &T) {
        let name = T::descriptor().name;
        let payload = object.as_bytes();
        self.buffer.reserve(8 + name.len() + payload.len());
        self.buffer.put_u32_le(name.len() as u32);
        self.buffer.extend(name.as_bytes());
        self.buffer.put_u32_le(payload.len() as u32);
        self.buffer.extend(&payload);
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for ObjectOutputStream {
    fn default() -> Self {
        Self::new()
    }
}
