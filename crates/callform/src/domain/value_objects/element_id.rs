//! ElementId - Stable identifiers of the page elements the form uses

/// Page element handles, looked up by their stable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    CallForm,
    StatusDisplay,
    PhoneNumber,
    Voice,
    Prompt,
}

impl ElementId {
    /// Elements that must exist before submit behaviour can be attached
    pub const REQUIRED: [ElementId; 2] = [ElementId::CallForm, ElementId::StatusDisplay];

    /// Input controls read at submit time
    pub const FIELDS: [ElementId; 3] = [ElementId::PhoneNumber, ElementId::Voice, ElementId::Prompt];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::CallForm => "callForm",
            ElementId::StatusDisplay => "statusDisplay",
            ElementId::PhoneNumber => "phoneNumber",
            ElementId::Voice => "voice",
            ElementId::Prompt => "prompt",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElementId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "callForm" => Ok(ElementId::CallForm),
            "statusDisplay" => Ok(ElementId::StatusDisplay),
            "phoneNumber" => Ok(ElementId::PhoneNumber),
            "voice" => Ok(ElementId::Voice),
            "prompt" => Ok(ElementId::Prompt),
            _ => Err(format!("Unknown element id: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_page_markup() {
        assert_eq!(ElementId::CallForm.to_string(), "callForm");
        assert_eq!(ElementId::StatusDisplay.to_string(), "statusDisplay");
        assert_eq!("phoneNumber".parse::<ElementId>(), Ok(ElementId::PhoneNumber));
        assert!("PhoneNumber".parse::<ElementId>().is_err());
    }
}
