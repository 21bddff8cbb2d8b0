use std::fs;
use std::path::Path;

use log::debug;
use toml::Value;

use crate::ConfigError;

/// One `[[handlers]]` entry: the handler's name and the request it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub label: String,
    pub tag: String,
}

/// Chain definition read from a TOML file.
///
/// ```toml
/// requests = ["Gymnasium", "Pool", "Buffet"]
/// entry = 1
///
/// [[handlers]]
/// label = "Amenities1"
/// tag = "Gymnasium"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub handlers: Vec<HandlerConfig>,
    pub requests: Option<Vec<String>>,
    pub entry: Option<usize>,
}

impl ChainConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded config from {}", path.display());
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Value = content.parse::<Value>()?;

        let handlers = config
            .get("handlers")
            .ok_or(ConfigError::Missing("handlers"))?
            .as_array()
            .ok_or_else(|| invalid("handlers", "array of tables"))?;

        if handlers.is_empty() {
            return Err(ConfigError::Empty("handlers"));
        }

        let handlers = handlers
            .iter()
            .enumerate()
            .map(|(i, handler)| {
                Ok(HandlerConfig {
                    label: string_field(handler, i, "label")?,
                    tag: string_field(handler, i, "tag")?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let requests = match config.get("requests") {
            None => None,
            Some(value) => {
                let items = value
                    .as_array()
                    .ok_or_else(|| invalid("requests", "array of strings"))?;
                let requests = items
                    .iter()
                    .map(|item| {
                        item.as_str()
                            .map(str::to_owned)
                            .ok_or_else(|| invalid("requests", "array of strings"))
                    })
                    .collect::<Result<Vec<_>, ConfigError>>()?;
                Some(requests)
            }
        };

        let entry = match config.get("entry") {
            None => None,
            Some(value) => {
                let entry = value
                    .as_integer()
                    .and_then(|entry| usize::try_from(entry).ok())
                    .ok_or_else(|| invalid("entry", "non-negative integer"))?;
                if entry >= handlers.len() {
                    return Err(ConfigError::EntryOutOfRange {
                        entry,
                        len: handlers.len(),
                    });
                }
                Some(entry)
            }
        };

        Ok(Self {
            handlers,
            requests,
            entry,
        })
    }
}

fn invalid(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidType {
        key: key.to_owned(),
        expected,
    }
}

fn string_field(handler: &Value, index: usize, name: &str) -> Result<String, ConfigError> {
    handler
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| invalid(&format!("handlers[{index}].{name}"), "string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMENITIES: &str = r#"
        requests = ["Gymnasium", "Sauna"]
        entry = 1

        [[handlers]]
        label = "Amenities1"
        tag = "Gymnasium"

        [[handlers]]
        label = "Amenities2"
        tag = "Pool"
    "#;

    #[test]
    fn test_parse_full() {
        let config = ChainConfig::parse(AMENITIES).unwrap();
        assert_eq!(
            config.handlers,
            vec![
                HandlerConfig {
                    label: "Amenities1".to_string(),
                    tag: "Gymnasium".to_string(),
                },
                HandlerConfig {
                    label: "Amenities2".to_string(),
                    tag: "Pool".to_string(),
                },
            ]
        );
        assert_eq!(
            config.requests,
            Some(vec!["Gymnasium".to_string(), "Sauna".to_string()])
        );
        assert_eq!(config.entry, Some(1));
    }

    #[test]
    fn test_parse_handlers_only() {
        let config = ChainConfig::parse(
            r#"
            [[handlers]]
            label = "Front desk"
            tag = "Towel"
            "#,
        )
        .unwrap();
        assert_eq!(config.handlers.len(), 1);
        assert_eq!(config.requests, None);
        assert_eq!(config.entry, None);
    }

    #[test]
    fn test_missing_handlers() {
        let err = ChainConfig::parse("requests = [\"Pool\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("handlers")));
    }

    #[test]
    fn test_empty_handlers() {
        let err = ChainConfig::parse("handlers = []").unwrap_err();
        assert!(matches!(err, ConfigError::Empty("handlers")));
    }

    #[test]
    fn test_handler_without_tag() {
        let err = ChainConfig::parse(
            r#"
            [[handlers]]
            label = "Amenities1"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "`handlers[0].tag` must be a string");
    }

    #[test]
    fn test_requests_wrong_type() {
        let err = ChainConfig::parse(
            r#"
            requests = [1, 2]

            [[handlers]]
            label = "Amenities1"
            tag = "Gymnasium"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidType { .. }));
    }

    #[test]
    fn test_entry_out_of_range() {
        let err = ChainConfig::parse(
            r#"
            entry = 1

            [[handlers]]
            label = "Amenities1"
            tag = "Gymnasium"
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EntryOutOfRange { entry: 1, len: 1 }
        ));
    }

    #[test]
    fn test_negative_entry() {
        let err = ChainConfig::parse(
            r#"
            entry = -1

            [[handlers]]
            label = "Amenities1"
            tag = "Gymnasium"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "`entry` must be a non-negative integer");
    }

    #[test]
    fn test_invalid_toml() {
        let err = ChainConfig::parse("handlers = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChainConfig::load(Path::new("/nonexistent/concierge.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_shipped_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/amenities.toml");
        let config = ChainConfig::load(&path).unwrap();

        let tags: Vec<&str> = config.handlers.iter().map(|h| h.tag.as_str()).collect();
        assert_eq!(tags, vec!["Gymnasium", "Pool", "Buffet"]);
        assert_eq!(config.handlers[0].label, "Amenities1");
        assert_eq!(
            config.requests,
            Some(vec![
                "Gymnasium".to_string(),
                "Pool".to_string(),
                "Buffet".to_string(),
                "Sauna".to_string(),
            ])
        );
        assert_eq!(config.entry, Some(1));
    }
}
