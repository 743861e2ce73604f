use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight assessment dimensions. Declaration order is the canonical
/// order used for weighting, display, and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    TB,
    LS,
    TI,
    GO,
    AI,
    DM,
    CC,
    CR,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::TB,
        Dimension::LS,
        Dimension::TI,
        Dimension::GO,
        Dimension::AI,
        Dimension::DM,
        Dimension::CC,
        Dimension::CR,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Dimension::TB => "TB",
            Dimension::LS => "LS",
            Dimension::TI => "TI",
            Dimension::GO => "GO",
            Dimension::AI => "AI",
            Dimension::DM => "DM",
            Dimension::CC => "CC",
            Dimension::CR => "CR",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::TB => "Tech Base",
            Dimension::LS => "Learning Strategy",
            Dimension::TI => "Time Investment",
            Dimension::GO => "Goal Orientation",
            Dimension::AI => "AI Awareness",
            Dimension::DM => "Data Mindset",
            Dimension::CC => "Content Creation",
            Dimension::CR => "Critical Reasoning",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_matches_codes() {
        let codes: Vec<&str> = Dimension::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["TB", "LS", "TI", "GO", "AI", "DM", "CC", "CR"]);
    }

    #[test]
    fn serializes_as_bare_code() {
        let json = serde_json::to_string(&Dimension::TB).expect("dimension should serialize");
        assert_eq!(json, "\"TB\"");
    }
}
