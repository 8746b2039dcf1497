//! CLI entry point for lineup

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use lineup::{
    DEFAULT_OUTPUT_SUFFIX, FileProcessor, ProcessorConfig, RunReport, Walker, print_report,
    print_report_json,
};
use log::LevelFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "lineup")]
#[command(about = "Write an uppercased, line-numbered copy of every file in a directory tree")]
#[command(version)]
struct Args {
    /// Directory to process
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Suffix appended to each file name to form its output name
    #[arg(long = "suffix", default_value = DEFAULT_OUTPUT_SUFFIX, value_parser = parse_suffix)]
    suffix: String,

    /// Print the run summary as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not print the run summary
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Exit with status 2 if any file failed
    #[arg(long = "strict")]
    strict: bool,
}

/// Reject suffixes that would overwrite the input or escape its directory.
fn parse_suffix(s: &str) -> Result<String, String> {
    let config = ProcessorConfig {
        suffix: s.to_string(),
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config.suffix)
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .format_timestamp(None)
        .init();

    if !args.path.is_dir() {
        eprintln!(
            "lineup: cannot access '{}': Not a directory",
            args.path.display()
        );
        process::exit(1);
    }

    let processor = FileProcessor::new(ProcessorConfig {
        suffix: args.suffix.clone(),
    })
    .unwrap_or_else(|e| {
        eprintln!("lineup: invalid --suffix: {}", e);
        process::exit(1);
    });
    let walker = Walker::new(processor);
    let mut report = RunReport::new();
    log::info!("processing {}", args.path.display());
    walker.explore(&args.path, &mut report);

    if !args.quiet {
        let result = if args.json {
            print_report_json(&report)
        } else {
            print_report(&report, should_use_color(args.color))
        };
        if let Err(e) = result {
            eprintln!("lineup: error writing output: {}", e);
            process::exit(1);
        }
    }

    if args.strict && !report.is_clean() {
        process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffix() {
        assert_eq!(parse_suffix(".out"), Ok(".out".to_string()));
        assert_eq!(parse_suffix("_upper"), Ok("_upper".to_string()));
        assert!(parse_suffix("").is_err());
        assert!(parse_suffix("/x").is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["lineup"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.suffix, ".out");
        assert_eq!(args.verbose, 0);
        assert!(!args.strict);
    }

    #[test]
    fn test_args_verbose_count() {
        let args = Args::try_parse_from(["lineup", "-vv", "dir"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.path, PathBuf::from("dir"));
    }

    #[test]
    fn test_args_reject_empty_suffix() {
        assert!(Args::try_parse_from(["lineup", "--suffix", ""]).is_err());
    }
}
