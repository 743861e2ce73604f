mod cli;
mod error;
mod explain;
mod questions;
mod report;
mod scoring;
mod stats;
mod submit;
mod types;

use crate::error::{QuizError, Result};
use crate::types::answers::{self, AnswerSet, BranchChoice};
use crate::types::dimension::Dimension;
use crate::types::result::SavedResult;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Init(cmd) => {
            if cmd.path.exists() && !cmd.force {
                return Err(QuizError::FileExists(cmd.path.display().to_string()));
            }

            let mut template = AnswerSet::default();
            for dimension in Dimension::ALL {
                template.set_ratings(dimension, [3, 3, 3]);
            }
            template.b1 = Some(BranchChoice::A);
            template.b2 = Some(BranchChoice::A);

            let body = toml::to_string(&template)?;
            let content = format!(
                "# AI learning self-assessment answers.\n\
                 # Replace each rating with your own 1-5 agreement score\n\
                 # (1 = strongly disagree, 5 = strongly agree), pick \"A\" or \"B\"\n\
                 # for B1/B2, and optionally set hours_per_week.\n\n{body}"
            );
            std::fs::write(&cmd.path, content)?;
            println!("template written to {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let answers = answers::load_answers(&cmd.answers)?;
            let missing = answers.missing_items();
            if missing.is_empty() {
                println!("check: all questions answered");
                Ok(exit_code::SUCCESS)
            } else {
                println!("check: {} item(s) unanswered", missing.len());
                for item in missing {
                    println!("- {item}");
                }
                Ok(exit_code::INCOMPLETE)
            }
        }
        cli::Commands::Score(cmd) => {
            let answers = answers::load_answers(&cmd.answers)?;
            if !answers.is_complete() {
                eprintln!(
                    "cannot finalize: unanswered items: {}",
                    answers.missing_items().join(", ")
                );
                return Ok(exit_code::INCOMPLETE);
            }

            let assessment = scoring::assess(&answers);
            let rendered = report::render(&assessment, report_format(&cmd.format))?;
            println!("{rendered}");

            if let Some(out) = cmd.out {
                let saved = SavedResult {
                    dimension_scores: assessment.dimension_scores,
                    final_result: assessment.result.clone(),
                    timestamp: Utc::now().to_rfc3339(),
                };
                std::fs::write(&out, serde_json::to_string_pretty(&saved)?)?;
                tracing::info!(path = %out.display(), "result saved");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Questions(cmd) => {
            let rendered = match cmd.format {
                cli::DataFormat::Json => render_questions_json()?,
                cli::DataFormat::Md => render_questions_md(),
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            let answers = answers::load_answers(&cmd.answers)?;
            if !answers.is_complete() {
                eprintln!(
                    "cannot submit: unanswered items: {}",
                    answers.missing_items().join(", ")
                );
                return Ok(exit_code::INCOMPLETE);
            }

            let assessment = scoring::assess(&answers);
            let outbox = submit::Outbox::new();
            outbox.publish(submit::SubmissionRecord::new(&answers, &assessment));

            let rendered = report::render(&assessment, report_format(&cmd.format))?;
            println!("{rendered}");

            // Delivery is best-effort and happens after the result is
            // already printed; a failed write never changes the outcome.
            let written = outbox.drain(&cmd.data_dir);
            match written.first() {
                Some(path) => eprintln!("submission stored: {}", path.display()),
                None => eprintln!("submission could not be stored; result unaffected"),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Stats(cmd) => {
            let summary = stats::collect(&cmd.data_dir, cmd.days)?;
            match cmd.format {
                cli::DataFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                cli::DataFormat::Md => println!("{}", stats::render_summary(&summary)),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Cleanup(cmd) => {
            let report = stats::cleanup(&cmd.data_dir, cmd.keep_days, cmd.dry_run)?;
            let verb = if report.dry_run { "would remove" } else { "removed" };
            println!(
                "cleanup: examined {}, {} {} file(s), {} bytes",
                report.examined,
                verb,
                report.removed.len(),
                report.bytes_freed
            );
            for path in &report.removed {
                println!("- {}", path.display());
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn report_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    }
}

fn render_questions_md() -> String {
    let mut output = String::new();
    output.push_str("# Question Bank\n\n");
    output.push_str("Rate each statement from 1 (strongly disagree) to 5 (strongly agree).\n\n");
    for block in &questions::QUESTION_BANK {
        output.push_str(&format!("## {} ({})\n\n", block.name, block.dimension));
        for question in &block.questions {
            output.push_str(&format!("- {}: {}\n", question.id, question.text));
        }
        output.push('\n');
        for branch in &questions::BRANCH_QUESTIONS {
            if branch.after == block.dimension {
                output.push_str(&format!("### Branch {}\n\n{}\n\n", branch.id, branch.text));
                for option in &branch.options {
                    output.push_str(&format!("- {:?}: {}\n", option.value, option.text));
                }
                output.push('\n');
            }
        }
    }
    output
}

fn render_questions_json() -> Result<String> {
    let bank = serde_json::json!({
        "dimensions": questions::QUESTION_BANK,
        "branches": questions::BRANCH_QUESTIONS,
    });
    Ok(serde_json::to_string_pretty(&bank)?)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
