//! Voice - Known voices offered by the call server

use serde::{Deserialize, Serialize};

/// Voice the remote agent speaks with.
///
/// `CallRequest` carries the voice as free text; this catalogue only backs
/// selection and defaults on the client side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    #[default]
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
}

impl Voice {
    pub const ALL: [Voice; 5] = [Voice::Alloy, Voice::Echo, Voice::Fable, Voice::Onyx, Voice::Nova];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Onyx => "onyx",
            Voice::Nova => "nova",
        }
    }

    /// Short description shown in voice listings
    pub fn description(&self) -> &'static str {
        match self {
            Voice::Alloy => "Neutral",
            Voice::Echo | Voice::Onyx => "Male",
            Voice::Fable | Voice::Nova => "Female",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Voice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alloy" => Ok(Voice::Alloy),
            "echo" => Ok(Voice::Echo),
            "fable" => Ok(Voice::Fable),
            "onyx" => Ok(Voice::Onyx),
            "nova" => Ok(Voice::Nova),
            _ => Err(format!("Unknown voice: {}", s)),
        }
    }
}
