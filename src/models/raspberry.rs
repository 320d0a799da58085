use crate::bytes_serializable::BytesSerializable;
use crate::error::SystemError;
use crate::models::fruit::{Fruit, FRUIT_DESCRIPTOR};
use crate::models::season::Season;
use crate::stream::type_descriptor::{Serializable, TypeDescriptor};
use bytes::BufMut;
use std::fmt::{Display, Formatter};
use std::str::from_utf8;

pub static RASPBERRY_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Raspberry",
    serializable: true,
    has_no_arg_constructor: false,
    ancestor: Some(&FRUIT_DESCRIPTOR),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raspberry {
    fruit: Fruit,
    variety: String,
}

impl Raspberry {
    pub fn new(ripe: Season, variety: &str) -> Self {
        Self {
            fruit: Fruit::new(ripe),
            variety: variety.to_string(),
        }
    }

    pub fn ripe(&self) -> Season {
        self.fruit.ripe()
    }

    pub fn variety(&self) -> &str {
        &self.variety
    }
}

impl Display for Raspberry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Raspberry {{ ripe: {}, variety: {} }}",
            self.ripe(),
            self.variety
        )
    }
}

impl BytesSerializable for Raspberry {
    fn as_bytes(&self) -> Vec<u8> {
        let variety_len = self.variety.len();
        let mut bytes = Vec::with_capacity(5 + variety_len);
        bytes.put_u8(self.fruit.ripe().as_code());
        bytes.put_u32_le(variety_len as u32);
        bytes.extend(self.variety.as_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Raspberry, SystemError> {
        if bytes.len() < 5 {
            return Err(SystemError::InvalidRecord);
        }

        let ripe = Season::from_code(bytes[0])?;
        let variety_len = u32::from_le_bytes(bytes[1..5].try_into()?) as usize;
        if bytes.len() != 5 + variety_len {
            return Err(SystemError::InvalidRecord);
        }

        let variety =
            from_utf8(&bytes[5..5 + variety_len]).map_err(|_| SystemError::InvalidRecord)?;
        let raspberry = Raspberry {
            fruit: Fruit::new(ripe),
            variety: variety.to_string(),
        };
        Ok(raspberry)
    }
}

impl Serializable for Raspberry {
    fn descriptor() -> &'static TypeDescriptor {
        &RASPBERRY_DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_field_payload() {
        let raspberry = Raspberry::new(Season::Fall, "Fall Gold");
        let bytes = raspberry.as_bytes();
        let decoded_raspberry = Raspberry::from_bytes(&bytes).unwrap();
        assert_eq!(raspberry.ripe(), decoded_raspberry.ripe());
        assert_eq!(raspberry.variety(), decoded_raspberry.variety());
    }

    #[test]
    fn should_reject_truncated_payload() {
        let raspberry = Raspberry::new(Season::Summer, "Tulameen");
        let bytes = raspberry.as_bytes();
        let error = Raspberry::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(error, SystemError::InvalidRecord));
    }
}
