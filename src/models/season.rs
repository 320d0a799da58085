use crate::error::SystemError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn as_code(&self) -> u8 {
        match self {
            Season::Winter => 1,
            Season::Spring => 2,
            Season::Summer => 3,
            Season::Fall => 4,
        }
    }

    pub fn from_code(code: u8) -> Result<Season, SystemError> {
        match code {
            1 => Ok(Season::Winter),
            2 => Ok(Season::Spring),
            3 => Ok(Season::Summer),
            4 => Ok(Season::Fall),
            _ => Err(SystemError::InvalidSeasonCode(code)),
        }
    }

    pub fn all() -> [Season; 4] {
        [Season::Winter, Season::Spring, Season::Summer, Season::Fall]
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Winter => write!(f, "winter"),
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
        }
    }
}
