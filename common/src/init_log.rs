use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::LogError;

pub fn parse_level(level: &str) -> Result<LevelFilter, LogError> {
    LevelFilter::from_str(level).map_err(|_| LogError::Level(level.to_owned()))
}

/// Installs the global logger. Records go to `file` when given, to stderr
/// otherwise; stdout stays reserved for the demo output.
pub fn init_log(level: &str, file: Option<&Path>) -> Result<(), LogError> {
    let level = parse_level(level)?;
    if level == LevelFilter::Off {
        return Ok(());
    }

    let config = simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|builder| builder)
        .set_max_level(level)
        .build();

    let logger: Box<dyn SharedLogger> = match file {
        Some(path) => {
            let file = std::fs::File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::File {
                    path: path.to_path_buf(),
                    source,
                })?;
            WriteLogger::new(level, config, file)
        }
        None => TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto),
    };

    CombinedLogger::init(vec![logger])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_parse_level_unknown() {
        let err = parse_level("loud").unwrap_err();
        assert_eq!(err.to_string(), "unknown log level `loud`");
    }

    #[test]
    fn test_init_off_is_noop() {
        assert!(init_log("off", None).is_ok());
    }
}
