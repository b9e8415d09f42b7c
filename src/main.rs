//! Disaster Tweet Analyzer - CLI Entry Point

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde_json::json;

use disaster_core::{constants, record_text, AnalyzeError, AnalyzerContext};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} core v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let args: Vec<String> = std::env::args().collect();
    let model_dir = PathBuf::from(constants::get_model_dir());
    let context = AnalyzerContext::load(&model_dir);

    let status = context.status();
    match status.inference_path {
        "onnx" => log::info!("Advanced ONNX model active"),
        "linear" => log::info!("Advanced model not found - using baseline linear model"),
        _ => log::error!("Required artifacts missing in {:?} - classification disabled", model_dir),
    }

    match args.get(1).map(String::as_str) {
        Some("analyze") => {
            let Some(text) = args.get(2) else {
                eprintln!("usage: disaster-analyze analyze <text> [--verbose]");
                return ExitCode::FAILURE;
            };
            let verbose = args.get(3).map(String::as_str) == Some("--verbose");
            analyze_one(&context, text, verbose)
        }
        Some("batch") => {
            let Some(path) = args.get(2) else {
                eprintln!("usage: disaster-analyze batch <file.jsonl>");
                return ExitCode::FAILURE;
            };
            analyze_batch(&context, Path::new(path))
        }
        Some("status") => {
            println!("{}", serde_json::to_string_pretty(&status).unwrap_or_default());
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("usage: disaster-analyze <analyze <text> | batch <file.jsonl> | status>");
            eprintln!("  DISASTER_MODEL_DIR overrides the artifact directory (default: {})", constants::DEFAULT_MODEL_DIR);
            ExitCode::FAILURE
        }
    }
}

fn analyze_one(context: &AnalyzerContext, text: &str, verbose: bool) -> ExitCode {
    match context.classify(text) {
        Ok(assessment) => {
            let mut response = json!({"status": "success", "prediction": assessment});
            if verbose {
                // every category that hit, with its trigger phrases, not
                // just the first-match winner
                let matches: Vec<serde_json::Value> =
                    disaster_core::logic::keywords::matched_categories(text)
                        .into_iter()
                        .map(|(category, phrases)| json!({"category": category, "phrases": phrases}))
                        .collect();
                response["matched_categories"] = json!(matches);
            }
            println!("{}", response);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// One JSON-lines record per input row, kept in input order. A bad row is
/// reported in place and never aborts the rest of the file.
fn analyze_batch(context: &AnalyzerContext, path: &Path) -> ExitCode {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cannot open {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("read error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let record: serde_json::Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                failures += 1;
                println!(
                    "{}",
                    json!({"status": "error", "kind": "bad_record", "message": e.to_string()})
                );
                continue;
            }
        };

        let Some(text) = record_text(&record) else {
            failures += 1;
            println!(
                "{}",
                json!({"status": "error", "kind": "bad_record", "message": "record has no tweet or text field"})
            );
            continue;
        };

        match context.classify(text) {
            Ok(assessment) => println!("{}", success_line(&assessment)),
            Err(e) => {
                failures += 1;
                println!("{}", error_line(&e));
            }
        }
    }

    if failures > 0 {
        log::warn!("Batch finished with {} failed rows", failures);
    }
    ExitCode::SUCCESS
}

fn success_line(assessment: &disaster_core::TweetAssessment) -> String {
    json!({"status": "success", "prediction": assessment}).to_string()
}

fn error_line(error: &AnalyzeError) -> String {
    json!({"status": "error", "kind": error.kind(), "message": error.to_string()}).to_string()
}
