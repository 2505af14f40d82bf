use crate::error::QaError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QaConfig {
    pub scanner: Option<ScannerConfig>,
    pub conversion: Option<ConversionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_scanner_name")]
    pub name: String,
    #[serde(default = "default_version_command")]
    pub version_command: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            name: default_scanner_name(),
            version_command: default_version_command(),
        }
    }
}

fn default_scanner_name() -> String {
    "dscanner".to_string()
}

fn default_version_command() -> Vec<String> {
    ["dub", "run", "dscanner", "--", "--version"]
        .iter()
        .map(|part| part.to_string())
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    #[serde(default = "default_conversion_tool")]
    pub tool_name: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            tool_name: default_conversion_tool(),
        }
    }
}

fn default_conversion_tool() -> String {
    "sonar2sarif".to_string()
}

impl QaConfig {
    pub fn scanner(&self) -> ScannerConfig {
        self.scanner.clone().unwrap_or_default()
    }

    pub fn conversion(&self) -> ConversionConfig {
        self.conversion.clone().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), QaError> {
        if let Some(scanner) = &self.scanner {
            if scanner.name.trim().is_empty() {
                return Err(QaError::ConfigParse(
                    "scanner.name cannot be empty".to_string(),
                ));
            }
            match scanner.version_command.first() {
                Some(program) if !program.trim().is_empty() => {}
                _ => {
                    return Err(QaError::ConfigParse(
                        "scanner.version_command must name a program".to_string(),
                    ))
                }
            }
        }

        if let Some(conversion) = &self.conversion {
            if conversion.tool_name.trim().is_empty() {
                return Err(QaError::ConfigParse(
                    "conversion.tool_name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_dscanner_defaults() {
        let cfg: QaConfig = toml::from_str("").expect("empty config should parse");
        let scanner = cfg.scanner();
        assert_eq!(scanner.name, "dscanner");
        assert_eq!(
            scanner.version_command,
            vec!["dub", "run", "dscanner", "--", "--version"]
        );
        assert_eq!(cfg.conversion().tool_name, "sonar2sarif");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[scanner]
name = "clippy"
version_command = ["cargo", "clippy", "--version"]

[conversion]
tool_name = "clippy2sarif"
"#;
        let cfg: QaConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.scanner().name, "clippy");
        assert_eq!(cfg.scanner().version_command[0], "cargo");
        assert_eq!(cfg.conversion().tool_name, "clippy2sarif");
    }

    #[test]
    fn partial_scanner_table_keeps_other_defaults() {
        let cfg: QaConfig = toml::from_str(
            r#"
[scanner]
version_command = ["echo", "v1.0.0"]
"#,
        )
        .expect("partial config should parse");
        assert_eq!(cfg.scanner().name, "dscanner");
    }

    #[test]
    fn validate_rejects_empty_version_command() {
        let cfg: QaConfig = toml::from_str(
            r#"
[scanner]
version_command = []
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_conversion_tool_name() {
        let cfg: QaConfig = toml::from_str(
            r#"
[conversion]
tool_name = "  "
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
