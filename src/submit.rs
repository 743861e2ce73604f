use crate::error::Result;
use crate::types::answers::AnswerSet;
use crate::types::result::{Assessment, DimensionScores, RouteDecision};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

pub const RAW_DATA_DIR: &str = "raw";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub app_version: String,
    pub platform: String,
}

impl ClientInfo {
    pub fn current() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            platform: std::env::consts::OS.to_string(),
        }
    }
}

/// One collected assessment, ready for downstream aggregation. The
/// answers, dimension scores, and result are carried verbatim from the
/// scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub timestamp: String,
    pub anonymous_id: String,
    pub answers: AnswerSet,
    pub dimension_scores: DimensionScores,
    pub result: RouteDecision,
    pub client: ClientInfo,
}

impl SubmissionRecord {
    pub fn new(answers: &AnswerSet, assessment: &Assessment) -> Self {
        let timestamp = Utc::now().to_rfc3339();
        let anonymous_id = anonymous_id(answers, &timestamp);
        Self {
            timestamp,
            anonymous_id,
            answers: answers.clone(),
            dimension_scores: assessment.dimension_scores,
            result: assessment.result.clone(),
            client: ClientInfo::current(),
        }
    }
}

/// No personal data is collected; the identifier only lets repeated
/// submissions of the same answer set be distinguished in aggregates.
fn anonymous_id(answers: &AnswerSet, timestamp: &str) -> String {
    let serialized = serde_json::to_string(answers).unwrap_or_default();
    let digest = Sha256::digest(format!("{timestamp}:{serialized}").as_bytes());
    format!("{digest:x}")[..16].to_string()
}

/// Outbound queue between the scoring flow and persistence. The scoring
/// side publishes and moves on; delivery happens later in `drain`, and
/// a failed write is logged, never surfaced back into the result.
pub struct Outbox {
    tx: Sender<SubmissionRecord>,
    rx: Receiver<SubmissionRecord>,
}

impl Outbox {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub fn publish(&self, record: SubmissionRecord) {
        // Send cannot fail while the outbox owns both ends.
        let _ = self.tx.send(record);
    }

    /// Writes every queued record under `<data_dir>/raw` and returns
    /// the paths written. Individual failures are logged and skipped.
    pub fn drain(&self, data_dir: &Path) -> Vec<PathBuf> {
        let mut written = Vec::new();
        while let Ok(record) = self.rx.try_recv() {
            match write_record(data_dir, &record) {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "submission stored");
                    written.push(path);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "submission could not be stored; dropping");
                }
            }
        }
        written
    }
}

impl Default for Outbox {
    fn default() -> Self {
        Self::new()
    }
}

fn write_record(data_dir: &Path, record: &SubmissionRecord) -> Result<PathBuf> {
    let dir = data_dir.join(RAW_DATA_DIR);
    fs::create_dir_all(&dir)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let out_path = dir.join(format!("test_{stamp}_{}.json", record.anonymous_id));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&out_path, json)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::types::answers::BranchChoice;
    use crate::types::dimension::Dimension;
    use tempfile::TempDir;

    fn sample_record() -> SubmissionRecord {
        let mut answers = AnswerSet::default();
        for dimension in Dimension::ALL {
            answers.set_ratings(dimension, [3; 3]);
        }
        answers.b1 = Some(BranchChoice::A);
        answers.b2 = Some(BranchChoice::B);
        SubmissionRecord::new(&answers, &scoring::assess(&answers))
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("record should serialize");
        assert!(json.contains("\"anonymousId\""));
        assert!(json.contains("\"dimensionScores\""));

        let restored: SubmissionRecord =
            serde_json::from_str(&json).expect("record should deserialize");
        assert_eq!(restored, record);
    }

    #[test]
    fn anonymous_id_is_short_stable_hex() {
        let record = sample_record();
        assert_eq!(record.anonymous_id.len(), 16);
        assert!(record.anonymous_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn drain_writes_queued_records_under_raw() {
        let dir = TempDir::new().expect("temp dir should be created");
        let outbox = Outbox::new();
        outbox.publish(sample_record());
        outbox.publish(sample_record());

        let written = outbox.drain(dir.path());
        assert_eq!(written.len(), 2);
        for path in &written {
            assert!(path.starts_with(dir.path().join(RAW_DATA_DIR)));
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .expect("file name should be utf-8");
            assert!(name.starts_with("test_"));
            assert!(name.ends_with(".json"));
        }

        // Queue is empty afterwards.
        assert!(outbox.drain(dir.path()).is_empty());
    }
}
