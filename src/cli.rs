//! Command-line options for the terminal runner.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use ascii_tetris::core::{LineClearMode, Rules, RulesError};
use ascii_tetris::types::{SPEED_FLOOR, START_SPEED, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "ascii-tetris")]
#[command(about = "Falling-block puzzle on a 12x18 terminal field")]
pub struct Cli {
    /// RNG seed; defaults to the clock
    #[arg(long)]
    pub seed: Option<u32>,

    /// Milliseconds per engine tick
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..))]
    pub tick_ms: u32,

    /// Ticks between gravity steps at the start
    #[arg(long, default_value_t = START_SPEED)]
    pub start_speed: u32,

    /// Fastest gravity the speed ramp may reach, in ticks
    #[arg(long, default_value_t = SPEED_FLOOR)]
    pub speed_floor: u32,

    /// Remove completed rows and award a multi-line bonus
    #[arg(long)]
    pub collapse_lines: bool,

    /// Log file base name; files are <base>0.log .. <base>N.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Size at which the active log file is rolled over
    #[arg(long, default_value_t = 64 * 1024, value_parser = clap::value_parser!(u64).range(1..))]
    pub log_max_bytes: u64,

    /// Number of log files kept
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub log_files: u32,

    /// Disable the log file
    #[arg(long)]
    pub no_log: bool,
}

impl Cli {
    pub fn rules(&self) -> Result<Rules, RulesError> {
        let line_clear = if self.collapse_lines {
            LineClearMode::Collapse
        } else {
            LineClearMode::MarkOnly
        };
        let rules = Rules {
            start_speed: self.start_speed,
            speed_floor: self.speed_floor,
            line_clear,
            ..Rules::default()
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Log base path, defaulting to the program name in the working directory
    pub fn log_base(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        std::env::args_os()
            .next()
            .map(PathBuf::from)
            .and_then(|p| p.file_name().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("ascii-tetris"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let cli = Cli::try_parse_from(["ascii-tetris"]).unwrap();
        assert_eq!(cli.tick_ms, 50);
        assert_eq!(cli.log_max_bytes, 64 * 1024);
        assert_eq!(cli.log_files, 4);
        assert_eq!(cli.rules().unwrap(), Rules::default());
    }

    #[test]
    fn collapse_flag_selects_collapse_mode() {
        let cli = Cli::try_parse_from(["ascii-tetris", "--collapse-lines", "--seed", "7"]).unwrap();
        assert_eq!(cli.rules().unwrap().line_clear, LineClearMode::Collapse);
        assert_eq!(cli.seed(), 7);
    }

    #[test]
    fn invalid_speeds_are_rejected() {
        let cli = Cli::try_parse_from(["ascii-tetris", "--speed-floor", "25"]).unwrap();
        assert!(cli.rules().is_err());
        assert!(Cli::try_parse_from(["ascii-tetris", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn explicit_log_base_is_used() {
        let cli = Cli::try_parse_from(["ascii-tetris", "--log-file", "/tmp/game"]).unwrap();
        assert_eq!(cli.log_base(), PathBuf::from("/tmp/game"));
    }
}
