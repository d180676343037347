use clap::Parser;
use std::path::PathBuf;

use crate::config::HighlighterOptions;

// Build version with toolkit info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     eframe/egui 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Animated text highlighter demo
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Text to highlight (overrides the options file)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Load highlighter options from JSON file
    #[arg(short = 'o', long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,

    /// Highlight color (CSS hex, e.g. #6ca0dc)
    #[arg(long = "color", value_name = "HEX")]
    pub color: Option<String>,

    /// Font size (e.g. 30px, 24, 2rem)
    #[arg(long = "font-size", value_name = "SIZE")]
    pub font_size: Option<String>,

    /// Extra class name attached to the container
    #[arg(long = "class-name", value_name = "NAME")]
    pub class_name: Option<String>,

    /// Hide the marker icon
    #[arg(long = "no-icon")]
    pub no_icon: bool,

    /// Highlight bar opacity (0.0-1.0)
    #[arg(long = "opacity", value_name = "A")]
    pub highlight_opacity: Option<f32>,

    /// Sweep duration in seconds
    #[arg(short = 'd', long = "duration", value_name = "SECS", allow_negative_numbers = true)]
    pub duration: Option<f32>,

    /// Delay before the sweep starts, in seconds
    #[arg(long = "delay", value_name = "SECS", allow_negative_numbers = true)]
    pub delay: Option<f32>,

    /// Replay the sweep when the pointer enters the text
    #[arg(short = 'r', long = "replay-on-hover")]
    pub replay_on_hover: bool,

    /// Enable debug logging to file (default: sweepmark.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Options given on the command line; unset flags stay `None`.
    pub fn options(&self) -> HighlighterOptions {
        HighlighterOptions {
            text: self.text.clone().unwrap_or_default(),
            color: self.color.clone(),
            font_size: self.font_size.clone(),
            class_name: self.class_name.clone(),
            show_icon: self.no_icon.then_some(false),
            highlight_opacity: self.highlight_opacity,
            duration: self.duration,
            delay: self.delay,
            replay_on_hover: self.replay_on_hover.then_some(true),
        }
    }

    /// Any highlighter option given on the command line
    pub fn has_options(&self) -> bool {
        self.options() != HighlighterOptions::default() || self.options_file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_stay_unset() {
        let args = Args::parse_from(["sweepmark", "Hello"]);
        let opts = args.options();
        assert_eq!(opts.text, "Hello");
        assert_eq!(opts.show_icon, None);
        assert_eq!(opts.replay_on_hover, None);
        assert_eq!(opts.resolve().duration, 1.5);
    }

    #[test]
    fn test_flags_map_to_options() {
        let args = Args::parse_from([
            "sweepmark", "Hi", "--no-icon", "-r", "--duration", "0.5", "--delay", "1", "--color", "#ff0000",
        ]);
        let cfg = args.options().resolve();
        assert!(!cfg.show_icon);
        assert!(cfg.replay_on_hover);
        assert_eq!(cfg.duration, 0.5);
        assert_eq!(cfg.delay, 1.0);
        assert_eq!(cfg.color, "#ff0000");
    }

    #[test]
    fn test_negative_times_pass_through() {
        let args = Args::parse_from(["sweepmark", "--duration", "-1", "--delay", "-0.5"]);
        let cfg = args.options().resolve();
        assert_eq!(cfg.duration, -1.0);
        assert_eq!(cfg.delay, -0.5);
    }

    #[test]
    fn test_verbosity_and_log() {
        let args = Args::parse_from(["sweepmark", "-vv", "--log"]);
        assert_eq!(args.verbosity, 2);
        assert_eq!(args.log_file, Some(None));
        assert!(!args.has_options());
    }
}
