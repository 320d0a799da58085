use crate::error::SystemError;
use crate::stream::type_descriptor::{validate_ancestor_chain, Serializable};
use crate::stream::{STREAM_HEADER_SIZE, STREAM_MAGIC, STREAM_VERSION};
use std::str::from_utf8;

/// Decodes objects from a byte stream produced by `ObjectOutputStream`. The
/// ancestor chain of the requested type is validated before any field is
/// decoded, so a failed read never produces a partial object.
#[derive(Debug)]
pub struct ObjectInputStream<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ObjectInputStream<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<ObjectInputStream<'a>, SystemError> {
        if bytes.len() < STREAM_HEADER_SIZE {
            return Err(SystemError::InvalidRecord);
        }

        let magic = u32::from_le_bytes(bytes[0..4].try_into()?);
        if magic != STREAM_MAGIC {
            return Err(SystemError::InvalidStreamMagic(magic));
        }

        let version = u16::from_le_bytes(bytes[4..6].try_into()?);
        if version != STREAM_VERSION {
            return Err(SystemError::UnsupportedStreamVersion(version));
        }

        Ok(Self {
            bytes,
            position: STREAM_HEADER_SIZE,
        })
    }

    pub fn read_object<T: Serializable>(&mut self) -> Result<T, SystemError> {
        let descriptor = T::descriptor();
        let name_bytes = self.read_chunk()?;
        let name = from_utf8(name_bytes).map_err(|_| SystemError::InvalidRecord)?;
        if name != descriptor.name {
            return Err(SystemError::UnexpectedClass(
                descriptor.name.to_string(),
                name.to_string(),
            ));
        }

        validate_ancestor_chain(descriptor)?;
        let payload = self.read_chunk()?;
        T::from_bytes(payload)
    }

    fn read_chunk(&mut self) -> Result<&'a [u8], SystemError> {
        if self.bytes.len() < self.position + 4 {
            return Err(SystemError::InvalidRecord);
        }

        let length =
            u32::from_le_bytes(self.bytes[self.position..self.position + 4].try_into()?) as usize;
        let start = self.position + 4;
        if self.bytes.len() < start + length {
            return Err(SystemError::InvalidRecord);
        }

        self.position = start + length;
        Ok(&self.bytes[start..start + length])
    }
}
