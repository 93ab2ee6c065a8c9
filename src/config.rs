//! Fixed migration settings for slf4j-migrate
//!
//! There is no configuration file: every run uses `MigrationConfig::default()`.
//! Keeping the constants in one value lets the library be driven from tests
//! and from other tools without touching the regexes themselves.

use anyhow::Result;

/// Settings that drive discovery, insertion and call rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    /// File name suffix of the sources to migrate
    pub extension: String,

    /// Directories whose relative path contains any of these are never walked into
    pub excluded_dir_markers: Vec<String>,

    /// A file is only touched when it contains one of these substrings
    pub relevance_markers: Vec<String>,

    /// Presence of this substring means the imports are already there
    pub import_marker: String,

    /// Import statements inserted after the last existing import
    pub import_lines: Vec<String>,

    /// Name of the logger field, also the receiver of the rewritten calls
    pub logger_field: String,

    /// The one annotation allowed in front of `public class`
    pub class_annotation: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            extension: ".java".to_string(),
            excluded_dir_markers: vec!["target".to_string(), ".git".to_string()],
            relevance_markers: vec!["System.out".to_string(), "System.err".to_string()],
            import_marker: "import org.slf4j.Logger".to_string(),
            import_lines: vec![
                "import org.slf4j.Logger;".to_string(),
                "import org.slf4j.LoggerFactory;".to_string(),
            ],
            logger_field: "log".to_string(),
            class_annotation: "@Configuration".to_string(),
        }
    }
}

impl MigrationConfig {
    /// The block spliced in after the last import: each line on its own row
    pub fn import_block(&self) -> String {
        self.import_lines
            .iter()
            .map(|line| format!("\n{}", line))
            .collect()
    }

    /// The logger field declaration for `class_name`, with its leading blank line
    pub fn logger_declaration(&self, class_name: &str) -> String {
        format!(
            "\n\n    private static final Logger {} = LoggerFactory.getLogger({}.class);",
            self.logger_field, class_name
        )
    }
}

/// Validate configuration values
pub fn validate_config(config: &MigrationConfig) -> Result<()> {
    if config.extension.is_empty() {
        anyhow::bail!("Invalid extension: must not be empty");
    }

    if config.relevance_markers.iter().any(|m| m.is_empty()) {
        anyhow::bail!("Invalid relevance marker: empty markers would match every file");
    }

    if config.excluded_dir_markers.iter().any(|m| m.is_empty()) {
        anyhow::bail!("Invalid excluded directory marker: empty markers would prune the whole tree");
    }

    if config.import_marker.is_empty() {
        anyhow::bail!("Invalid import marker: must not be empty");
    }

    let is_identifier = |s: &str| {
        let mut chars = s.chars();
        matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_')
    };
    if !is_identifier(&config.logger_field) {
        anyhow::bail!("Invalid logger field: '{}' is not a Java identifier", config.logger_field);
    }

    if !config.class_annotation.starts_with('@') {
        anyhow::bail!("Invalid class annotation: '{}' (must start with '@')", config.class_annotation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MigrationConfig::default();
        assert_eq!(config.extension, ".java");
        assert_eq!(config.excluded_dir_markers, vec!["target", ".git"]);
        assert_eq!(config.relevance_markers, vec!["System.out", "System.err"]);
        assert_eq!(config.import_marker, "import org.slf4j.Logger");
        assert_eq!(config.logger_field, "log");
        assert_eq!(config.class_annotation, "@Configuration");
    }

    #[test]
    fn test_validate_config_valid() {
        let config = MigrationConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_marker() {
        let mut config = MigrationConfig::default();
        config.relevance_markers.push(String::new());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_bad_logger_field() {
        let mut config = MigrationConfig::default();
        config.logger_field = "1log".to_string();
        assert!(validate_config(&config).is_err());

        config.logger_field = "my log".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_import_block() {
        let config = MigrationConfig::default();
        assert_eq!(
            config.import_block(),
            "\nimport org.slf4j.Logger;\nimport org.slf4j.LoggerFactory;"
        );
    }

    #[test]
    fn test_logger_declaration() {
        let config = MigrationConfig::default();
        assert_eq!(
            config.logger_declaration("OrderService"),
            "\n\n    private static final Logger log = LoggerFactory.getLogger(OrderService.class);"
        );
    }
}
