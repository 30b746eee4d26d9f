use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::solver::ExpressionSolver;
use crate::utils::validate_tiles;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Digitle - solve a numbers-game round from the command line
#[derive(Parser, Debug)]
#[command(name = "digitle")]
#[command(about = "Find the expression over the given tiles that lands closest to the target")]
#[command(version)]
pub struct CliArgs {
    /// The target value
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// The starting number tiles
    #[arg(required = true, num_args = 1..)]
    pub tiles: Vec<i64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub tiles: Vec<i64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_tiles(&args.tiles).context("Invalid tiles")?;

    Ok(CliConfig {
        target: args.target,
        tiles: args.tiles,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new();

    info!(
        "Searching for {} using tiles {:?}",
        config.target, config.tiles
    );

    let report = solver.solve_with(config.target, &config.tiles, |discovery| {
        println!("{} {}", discovery.expression, discovery.error);
    })?;

    println!("{} expressions tested", report.tested);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["digitle", "21", "1", "2", "3"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, 21);
            assert_eq!(args.tiles, vec![1, 2, 3]);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_reject_non_integer() {
        assert!(CliArgs::try_parse_from(["digitle", "21", "six"]).is_err());
        assert!(CliArgs::try_parse_from(["digitle", "twenty", "6"]).is_err());
    }

    #[test]
    fn test_cli_args_require_tiles() {
        assert!(CliArgs::try_parse_from(["digitle", "21"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
