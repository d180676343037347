//! Startup helpers for the binary: logging and option assembly.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, LevelFilter};

use crate::cli::Args;
use crate::config::{load_options, HighlighterOptions};
use crate::paths::{data_file, PathConfig};

/// Text shown when nothing else provides one
pub const DEFAULT_TEXT: &str = "Highlight me";

/// Map `-v` count to a level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
pub fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger on the console or, with `--log`, into a file.
///
/// Console logging respects RUST_LOG if set.
pub fn init_logger(args: &Args, paths: &PathConfig) -> Result<()> {
    let level = log_level(args.verbosity);

    if let Some(log_path_opt) = &args.log_file {
        let log_path: PathBuf = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| data_file("sweepmark.log", paths));

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(level)
            .filter_module("egui", LevelFilter::Info) // Suppress egui DEBUG spam
            .filter_module("eframe", LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), level);
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
        )
        .filter_module("egui", LevelFilter::Info) // Suppress egui DEBUG spam
        .filter_module("eframe", LevelFilter::Info)
        .format_timestamp_millis()
        .init();
    }

    Ok(())
}

/// Options file (if any) overlaid with command-line flags.
pub fn startup_options(args: &Args) -> Result<HighlighterOptions> {
    let mut options = match &args.options_file {
        Some(path) => load_options(path)?,
        None => HighlighterOptions::default(),
    };
    options.merge(args.options());
    if options.text.is_empty() {
        options.text = DEFAULT_TEXT.to_string();
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }

    #[test]
    fn test_startup_options_cli_over_file() {
        let path = std::env::temp_dir().join("sweepmark_test_startup.json");
        std::fs::write(&path, r#"{"text":"From file","duration":3.0,"show_icon":false}"#).unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let args = Args::parse_from(["sweepmark", "-o", &path_arg, "--duration", "0.75"]);
        let cfg = startup_options(&args).unwrap().resolve();
        assert_eq!(cfg.text, "From file");
        assert_eq!(cfg.duration, 0.75);
        assert!(!cfg.show_icon);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_startup_options_default_text() {
        let args = Args::parse_from(["sweepmark"]);
        assert_eq!(startup_options(&args).unwrap().text, DEFAULT_TEXT);
    }

    #[test]
    fn test_startup_options_bad_file() {
        let args = Args::parse_from(["sweepmark", "-o", "/nonexistent/opts.json"]);
        assert!(startup_options(&args).is_err());
    }
}
