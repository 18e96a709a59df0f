use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of residential colleges a user can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidentialCollege {
    #[serde(rename = "College A")]
    A,
    #[serde(rename = "College B")]
    B,
    #[serde(rename = "College C")]
    C,
    #[serde(rename = "College D")]
    D,
    #[serde(rename = "College E")]
    E,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown residential college: {0:?}")]
pub struct UnknownCollege(pub String);

impl ResidentialCollege {
    pub const ALL: [ResidentialCollege; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "College A",
            Self::B => "College B",
            Self::C => "College C",
            Self::D => "College D",
            Self::E => "College E",
        }
    }
}

impl fmt::Display for ResidentialCollege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the college names.
impl FromStr for ResidentialCollege {
    type Err = UnknownCollege;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rc| rc.as_str() == s)
            .ok_or_else(|| UnknownCollege(s.to_string()))
    }
}
