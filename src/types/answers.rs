use crate::error::{QuizError, Result};
use crate::types::dimension::Dimension;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One branch-question choice. Branch questions are binary and nudge
/// dimension scores instead of being rated on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchChoice {
    A,
    B,
}

/// A respondent's raw answers: per dimension either a full triple of
/// 1-5 ratings or nothing, two branch answers, and an optional weekly
/// hours figure that overrides the TI score.
///
/// Unknown keys are rejected so a typoed dimension code fails loudly at
/// the boundary instead of silently dropping answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSet {
    #[serde(rename = "TB", default, skip_serializing_if = "Option::is_none")]
    pub tb: Option<[u8; 3]>,
    #[serde(rename = "LS", default, skip_serializing_if = "Option::is_none")]
    pub ls: Option<[u8; 3]>,
    #[serde(rename = "TI", default, skip_serializing_if = "Option::is_none")]
    pub ti: Option<[u8; 3]>,
    #[serde(rename = "GO", default, skip_serializing_if = "Option::is_none")]
    pub go: Option<[u8; 3]>,
    #[serde(rename = "AI", default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<[u8; 3]>,
    #[serde(rename = "DM", default, skip_serializing_if = "Option::is_none")]
    pub dm: Option<[u8; 3]>,
    #[serde(rename = "CC", default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<[u8; 3]>,
    #[serde(rename = "CR", default, skip_serializing_if = "Option::is_none")]
    pub cr: Option<[u8; 3]>,

    #[serde(rename = "B1", default, skip_serializing_if = "Option::is_none")]
    pub b1: Option<BranchChoice>,
    #[serde(rename = "B2", default, skip_serializing_if = "Option::is_none")]
    pub b2: Option<BranchChoice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<f32>,
}

impl AnswerSet {
    pub fn ratings(&self, dimension: Dimension) -> Option<[u8; 3]> {
        match dimension {
            Dimension::TB => self.tb,
            Dimension::LS => self.ls,
            Dimension::TI => self.ti,
            Dimension::GO => self.go,
            Dimension::AI => self.ai,
            Dimension::DM => self.dm,
            Dimension::CC => self.cc,
            Dimension::CR => self.cr,
        }
    }

    pub fn set_ratings(&mut self, dimension: Dimension, ratings: [u8; 3]) {
        let slot = match dimension {
            Dimension::TB => &mut self.tb,
            Dimension::LS => &mut self.ls,
            Dimension::TI => &mut self.ti,
            Dimension::GO => &mut self.go,
            Dimension::AI => &mut self.ai,
            Dimension::DM => &mut self.dm,
            Dimension::CC => &mut self.cc,
            Dimension::CR => &mut self.cr,
        };
        *slot = Some(ratings);
    }

    /// Rejects ratings outside 1-5 and negative hours. Completeness is
    /// not validated here; an incomplete set is legal input for scoring.
    pub fn validate(&self) -> Result<()> {
        for dimension in Dimension::ALL {
            if let Some(ratings) = self.ratings(dimension) {
                for (idx, &value) in ratings.iter().enumerate() {
                    if !(1..=5).contains(&value) {
                        return Err(QuizError::RatingOutOfRange {
                            dimension: dimension.code(),
                            ordinal: idx + 1,
                            value,
                        });
                    }
                }
            }
        }
        if let Some(hours) = self.hours_per_week {
            if hours < 0.0 {
                return Err(QuizError::NegativeHours(hours));
            }
        }
        Ok(())
    }

    /// Item codes still unanswered, in questionnaire order.
    pub fn missing_items(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for dimension in Dimension::ALL {
            if self.ratings(dimension).is_none() {
                missing.push(dimension.code());
            }
        }
        if self.b1.is_none() {
            missing.push("B1");
        }
        if self.b2.is_none() {
            missing.push("B2");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_items().is_empty()
    }
}

pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    if !path.exists() {
        return Err(QuizError::AnswersNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let answers: AnswerSet = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| QuizError::AnswersParse(format!("{}: {}", path.display(), e)))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| QuizError::AnswersParse(format!("{}: {}", path.display(), e)))?,
        _ => return Err(QuizError::UnsupportedFormat(path.display().to_string())),
    };
    answers.validate()?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn complete_set() -> AnswerSet {
        let mut answers = AnswerSet::default();
        for dimension in Dimension::ALL {
            answers.set_ratings(dimension, [3, 4, 2]);
        }
        answers.b1 = Some(BranchChoice::A);
        answers.b2 = Some(BranchChoice::B);
        answers
    }

    #[test]
    fn json_round_trip_preserves_answers() {
        let mut answers = complete_set();
        answers.hours_per_week = Some(6.5);

        let json = serde_json::to_string(&answers).expect("answers should serialize");
        let restored: AnswerSet = serde_json::from_str(&json).expect("answers should deserialize");
        assert_eq!(answers, restored);
    }

    #[test]
    fn toml_round_trip_preserves_answers() {
        let answers = complete_set();
        let toml_text = toml::to_string(&answers).expect("answers should serialize");
        let restored: AnswerSet = toml::from_str(&toml_text).expect("answers should deserialize");
        assert_eq!(answers, restored);
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let mut answers = AnswerSet::default();
        answers.set_ratings(Dimension::GO, [3, 6, 2]);
        assert!(matches!(
            answers.validate(),
            Err(QuizError::RatingOutOfRange {
                dimension: "GO",
                ordinal: 2,
                value: 6
            })
        ));

        answers.set_ratings(Dimension::GO, [0, 3, 3]);
        assert!(answers.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_hours() {
        let answers = AnswerSet {
            hours_per_week: Some(-1.0),
            ..AnswerSet::default()
        };
        assert!(matches!(
            answers.validate(),
            Err(QuizError::NegativeHours(_))
        ));
    }

    #[test]
    fn unknown_dimension_code_is_rejected() {
        let result: std::result::Result<AnswerSet, _> =
            serde_json::from_str(r#"{"XX": [3, 3, 3]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_items_lists_unanswered_in_order() {
        let mut answers = AnswerSet::default();
        answers.set_ratings(Dimension::TB, [1, 2, 3]);
        answers.b2 = Some(BranchChoice::A);

        let missing = answers.missing_items();
        assert_eq!(missing, ["LS", "TI", "GO", "AI", "DM", "CC", "CR", "B1"]);
        assert!(!answers.is_complete());
        assert!(complete_set().is_complete());
    }

    #[test]
    fn load_answers_accepts_toml_and_json_files() {
        let dir = TempDir::new().expect("temp dir should be created");

        let toml_path = dir.path().join("answers.toml");
        fs::write(&toml_path, "TB = [3, 3, 3]\nB1 = \"A\"\n").expect("toml should write");
        let from_toml = load_answers(&toml_path).expect("toml answers should load");
        assert_eq!(from_toml.tb, Some([3, 3, 3]));
        assert_eq!(from_toml.b1, Some(BranchChoice::A));

        let json_path = dir.path().join("answers.json");
        fs::write(&json_path, r#"{"TB": [3, 3, 3], "B1": "A"}"#).expect("json should write");
        assert_eq!(load_answers(&json_path).expect("json answers should load"), from_toml);
    }

    #[test]
    fn load_answers_rejects_unknown_extension_and_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let yaml_path = dir.path().join("answers.yaml");
        fs::write(&yaml_path, "TB: [3, 3, 3]").expect("file should write");

        assert!(matches!(
            load_answers(&yaml_path),
            Err(QuizError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            load_answers(&dir.path().join("absent.json")),
            Err(QuizError::AnswersNotFound(_))
        ));
    }
}
