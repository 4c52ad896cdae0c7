use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "asteroid-shooter")]
#[command(about = "Shoot down falling asteroids across three rounds in the terminal")]
pub struct Config {
    /// Run headless into an in-memory screen buffer with scripted input
    #[arg(long)]
    pub debug: bool,

    /// Screen buffer width in debug mode
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Screen buffer height in debug mode
    #[arg(long, default_value_t = 24)]
    pub height: u16,

    /// Stop after this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Seed for asteroid spawning (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path
    #[arg(long, default_value = "asteroid-shooter.log")]
    pub log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["asteroid-shooter"]);
        assert!(!config.debug);
        assert_eq!((config.width, config.height), (80, 24));
        assert_eq!(config.max_frames, None);
        assert_eq!(config.log_file, PathBuf::from("asteroid-shooter.log"));
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn debug_run_flags() {
        let config = Config::parse_from([
            "asteroid-shooter",
            "--debug",
            "--width",
            "100",
            "--height",
            "30",
            "--max-frames",
            "250",
            "--seed",
            "42",
            "--log-level",
            "debug",
        ]);
        assert!(config.debug);
        assert_eq!((config.width, config.height), (100, 30));
        assert_eq!(config.max_frames, Some(250));
        assert_eq!(config.seed(), 42);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = Config::parse_from(["asteroid-shooter", "--log-level", "loud"]);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
