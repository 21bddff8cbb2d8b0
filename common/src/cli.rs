use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

pub const LOG_ENV: &str = "CONCIERGE_LOG";

pub fn cli() -> Command {
    Command::new("concierge")
        .version("0.1.0")
        .about("Dispatches amenity requests through a chain of handlers")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML file describing the handlers and the requests to send")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("entry")
                .short('e')
                .long("entry")
                .value_name("INDEX")
                .help("Zero-based position of the handler used as the sub-chain entry point")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("log_level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .env(LOG_ENV)
                .help("off, error, warn, info, debug or trace")
                .default_value("off"),
        )
        .arg(
            Arg::new("log_file")
                .long("log-file")
                .value_name("FILE")
                .help("Append log records to this file instead of stderr")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("requests")
                .value_name("REQUEST")
                .help("Requests to dispatch instead of the configured ones")
                .required(false)
                .num_args(1..),
        )
}

/// Values pulled out of the parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub entry: Option<usize>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub requests: Vec<String>,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            entry: matches.get_one::<usize>("entry").copied(),
            log_level: matches
                .get_one::<String>("log_level")
                .cloned()
                .unwrap_or_else(|| "off".to_owned()),
            log_file: matches.get_one::<PathBuf>("log_file").cloned(),
            requests: matches
                .get_many::<String>("requests")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        let matches = cli().try_get_matches_from(args).unwrap();
        Options::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["concierge"]);
        assert_eq!(options.config, None);
        assert_eq!(options.entry, None);
        assert_eq!(options.log_file, None);
        assert!(options.requests.is_empty());
    }

    #[test]
    fn test_all_flags() {
        let options = parse(&[
            "concierge",
            "--config",
            "amenities.toml",
            "-e",
            "2",
            "--log-level",
            "debug",
            "--log-file",
            "concierge.log",
            "Pool",
            "Sauna",
        ]);
        assert_eq!(options.config, Some(PathBuf::from("amenities.toml")));
        assert_eq!(options.entry, Some(2));
        assert_eq!(options.log_level, "debug");
        assert_eq!(options.log_file, Some(PathBuf::from("concierge.log")));
        assert_eq!(options.requests, vec!["Pool", "Sauna"]);
    }

    #[test]
    fn test_entry_must_be_number() {
        assert!(cli()
            .try_get_matches_from(["concierge", "--entry", "second"])
            .is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        cli().debug_assert();
    }
}
