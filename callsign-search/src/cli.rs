use clap::Parser;
use std::path::PathBuf;

/// Ham Radio Call Sign Search Utility - ARRL
#[derive(Debug, Parser)]
#[command(name = "callsign-search")]
#[command(version)]
#[command(about = "Ham Radio Call Sign Search Utility - ARRL", long_about = None)]
pub struct Cli {
    /// Ham radio call sign string
    pub callsign: String,

    /// Print pretty format
    #[arg(long)]
    pub pretty: bool,

    /// TOML configuration file
    #[arg(long, env = "CALLSIGN_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["callsign-search", "W1AW"]).unwrap();
        assert_eq!(cli.callsign, "W1AW");
        assert!(!cli.pretty);
    }

    #[test]
    fn test_parse_pretty_and_config() {
        let cli = Cli::try_parse_from([
            "callsign-search",
            "--pretty",
            "--config",
            "search.toml",
            "K1ABC",
        ])
        .unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.config, Some(PathBuf::from("search.toml")));
        assert_eq!(cli.callsign, "K1ABC");
    }

    #[test]
    fn test_callsign_required() {
        assert!(Cli::try_parse_from(["callsign-search", "--pretty"]).is_err());
    }
}
