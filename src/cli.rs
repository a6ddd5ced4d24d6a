use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "health-tracker", about = "Health Behavior Change Tracker", version)]
pub struct Cli {
    /// JSON config file (defaults to ./health-tracker.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["health-tracker", "--config", "tracker.json", "-v"]);
        assert_eq!(cli.config, Some(PathBuf::from("tracker.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::parse_from(["health-tracker"]);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }
}
