use crate::error::{QuizError, Result};
use crate::submit::{SubmissionRecord, RAW_DATA_DIR};
use crate::types::dimension::Dimension;
use crate::types::result::Score;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Serialize)]
pub struct DimensionStat {
    pub dimension: &'static str,
    pub average: Score,
    pub min: Score,
    pub max: Score,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub generated_at: String,
    pub total_tests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_test: Option<String>,
    pub daily_counts: BTreeMap<String, u32>,
    pub route_distribution: BTreeMap<String, u32>,
    pub dimension_stats: Vec<DimensionStat>,
}

/// Aggregates collected submissions, optionally restricted to the last
/// `days` days. Unreadable files are logged and skipped so one corrupt
/// record cannot poison the whole report.
pub fn collect(data_dir: &Path, days: Option<u32>) -> Result<SummaryStats> {
    let records = load_records(data_dir)?;
    let cutoff = days.map(|days| Utc::now() - Duration::days(i64::from(days)));

    let recent: Vec<&SubmissionRecord> = records
        .iter()
        .filter(|record| match (cutoff, parse_timestamp(&record.timestamp)) {
            (Some(cutoff), Some(time)) => time >= cutoff,
            (Some(_), None) => false,
            (None, _) => true,
        })
        .collect();

    let mut daily_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut route_distribution: BTreeMap<String, u32> = BTreeMap::new();
    let mut per_dimension: Vec<Vec<Score>> = vec![Vec::new(); Dimension::ALL.len()];

    for record in &recent {
        let day = record.timestamp.chars().take(10).collect::<String>();
        *daily_counts.entry(day).or_insert(0) += 1;
        *route_distribution
            .entry(record.result.main_route.code().to_string())
            .or_insert(0) += 1;
        for (idx, dimension) in Dimension::ALL.into_iter().enumerate() {
            if let Some(score) = record.dimension_scores.get(dimension) {
                per_dimension[idx].push(score);
            }
        }
    }

    let dimension_stats = Dimension::ALL
        .into_iter()
        .zip(per_dimension)
        .filter(|(_, scores)| !scores.is_empty())
        .map(|(dimension, scores)| {
            let count = scores.len() as u32;
            let sum: Score = scores.iter().sum();
            DimensionStat {
                dimension: dimension.code(),
                average: (sum / count as Score * 100.0).round() / 100.0,
                min: scores.iter().copied().fold(Score::INFINITY, Score::min),
                max: scores.iter().copied().fold(Score::NEG_INFINITY, Score::max),
                count,
            }
        })
        .collect();

    let mut timestamps: Vec<&str> = recent.iter().map(|r| r.timestamp.as_str()).collect();
    timestamps.sort_unstable();

    Ok(SummaryStats {
        generated_at: Utc::now().to_rfc3339(),
        total_tests: recent.len() as u32,
        first_test: timestamps.first().map(|s| s.to_string()),
        last_test: timestamps.last().map(|s| s.to_string()),
        daily_counts,
        route_distribution,
        dimension_stats,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub examined: u32,
    pub removed: Vec<PathBuf>,
    pub bytes_freed: u64,
    pub dry_run: bool,
}

/// Retention pass: deletes submissions older than `keep_days`. With
/// `dry_run` the candidates are reported but left in place.
pub fn cleanup(data_dir: &Path, keep_days: u32, dry_run: bool) -> Result<CleanupReport> {
    let cutoff = Utc::now() - Duration::days(i64::from(keep_days));
    let mut report = CleanupReport {
        examined: 0,
        removed: Vec::new(),
        bytes_freed: 0,
        dry_run,
    };

    for path in submission_files(data_dir)? {
        report.examined += 1;
        let Some(record) = read_record(&path) else {
            continue;
        };
        let Some(time) = parse_timestamp(&record.timestamp) else {
            tracing::warn!(path = %path.display(), "unparseable timestamp; keeping file");
            continue;
        };
        if time >= cutoff {
            continue;
        }

        let size = std::fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
        if !dry_run {
            std::fs::remove_file(&path)?;
        }
        report.bytes_freed += size;
        report.removed.push(path);
    }

    Ok(report)
}

fn submission_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.exists() {
        return Err(QuizError::DataDirNotFound(data_dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(data_dir.join(RAW_DATA_DIR))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with("test_") && name.ends_with(".json"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn load_records(data_dir: &Path) -> Result<Vec<SubmissionRecord>> {
    Ok(submission_files(data_dir)?
        .iter()
        .filter_map(|path| read_record(path))
        .collect())
}

fn read_record(path: &Path) -> Option<SubmissionRecord> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable submission");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping malformed submission");
            None
        }
    }
}

pub fn render_summary(stats: &SummaryStats) -> String {
    let mut output = String::new();
    output.push_str("# Submission Summary\n\n");
    output.push_str(&format!("Total tests: {}\n", stats.total_tests));
    if let (Some(first), Some(last)) = (&stats.first_test, &stats.last_test) {
        output.push_str(&format!("Period: {first} .. {last}\n"));
    }
    output.push('\n');

    output.push_str("## Route Distribution\n\n");
    if stats.route_distribution.is_empty() {
        output.push_str("- none\n");
    }
    for (route, count) in &stats.route_distribution {
        output.push_str(&format!("- {route}: {count}\n"));
    }
    output.push('\n');

    output.push_str("## Dimension Averages\n\n");
    if stats.dimension_stats.is_empty() {
        output.push_str("- none\n");
    }
    for stat in &stats.dimension_stats {
        output.push_str(&format!(
            "- {}: avg {:.2} (min {:.1}, max {:.1}, n={})\n",
            stat.dimension, stat.average, stat.min, stat.max, stat.count
        ));
    }
    output.push('\n');

    output.push_str("## Daily Counts\n\n");
    if stats.daily_counts.is_empty() {
        output.push_str("- none\n");
    }
    for (day, count) in &stats.daily_counts {
        output.push_str(&format!("- {day}: {count}\n"));
    }

    output
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|time| time.with_timezone(&Utc))
}
