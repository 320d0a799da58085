use std::array::TryFromSliceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Cannot deserialize class: {0}; non-serializable ancestor {1} has no zero-argument constructor.")]
    ClassInstantiation(String, String),
    #[error("Invalid stream magic: {0:#010x}.")]
    InvalidStreamMagic(u32),
    #[error("Unsupported stream version: {0}.")]
    UnsupportedStreamVersion(u16),
    #[error("Expected class {0} but stream contains {1}.")]
    UnexpectedClass(String, String),
    #[error("Invalid record")]
    InvalidRecord,
    #[error("Invalid season code: {0}.")]
    InvalidSeasonCode(u8),
    #[error("Try from slice error")]
    TryFromSliceError(#[from] TryFromSliceError),
}

impl SystemError {
    pub fn as_code(&self) -> u32 {
        match self {
            SystemError::ClassInstantiation(_, _) => 1,
            SystemError::InvalidStreamMagic(_) => 2,
            SystemError::UnsupportedStreamVersion(_) => 3,
            SystemError::UnexpectedClass(_, _) => 4,
            SystemError::InvalidRecord => 5,
            SystemError::InvalidSeasonCode(_) => 6,
            SystemError::TryFromSliceError(_) => 7,
        }
    }
}
