//! In-memory migration of a single Java source text
//!
//! The migrator never touches the filesystem. It takes the full file content
//! and runs the pipeline: relevance check, import insertion, logger field
//! insertion, call rewriting. Callers decide what to do with the result.

use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;

use crate::config::{validate_config, MigrationConfig};
use crate::rewrite_rules::{build_rules, rewrite_calls, RewriteRule};

/// A structural edit made to the file besides call rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationStep {
    AddedImports,
    AddedLogger { class_name: String },
}

/// Something the migration could not do that leaves the output suspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationWarning {
    /// Imports were needed but there is no import statement to anchor them
    NoImportAnchor,
    /// A logger field was needed but no `public class` was found
    NoPublicClass,
    /// The class was found but its opening brace is not in a recognised form
    ClassBraceNotFound { class_name: String },
    /// Console calls that none of the rewrite rules matched
    UnrewrittenCalls { count: usize },
}

impl fmt::Display for MigrationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationWarning::NoImportAnchor => {
                write!(f, "No import statement found - SLF4J imports not added")
            }
            MigrationWarning::NoPublicClass => {
                write!(f, "No public class found - logger declaration not added")
            }
            MigrationWarning::ClassBraceNotFound { class_name } => write!(
                f,
                "Could not locate the opening brace of class {} - logger declaration not added",
                class_name
            ),
            MigrationWarning::UnrewrittenCalls { count } => write!(
                f,
                "{} System.out/err occurrence{} left unchanged",
                count,
                if *count == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Result of migrating one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
    /// No console output marker in the file
    NotRelevant,
    /// The file was relevant; `content` may or may not differ from the input
    Transformed(MigrationOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub content: String,
    pub steps: Vec<MigrationStep>,
    pub rewritten_calls: usize,
    pub warnings: Vec<MigrationWarning>,
}

pub struct Migrator {
    config: MigrationConfig,
    import_re: Regex,
    logger_decl_re: Regex,
    class_name_re: Regex,
    rules: Vec<RewriteRule>,
}

impl Migrator {
    pub fn new(config: MigrationConfig) -> Result<Self> {
        validate_config(&config)?;

        let import_re = Regex::new(r"import\s+[\w.]+;").context("Invalid import pattern")?;
        let logger_decl_pattern = format!(
            r"private\s+static\s+final\s+Logger\s+{}\s*=",
            regex::escape(&config.logger_field)
        );
        let logger_decl_re = Regex::new(&logger_decl_pattern)
            .with_context(|| format!("Invalid logger declaration pattern: {}", logger_decl_pattern))?;
        let class_name_re =
            Regex::new(r"public\s+class\s+(\w+)").context("Invalid class name pattern")?;
        let rules = build_rules(&config.logger_field)?;

        Ok(Self {
            config,
            import_re,
            logger_decl_re,
            class_name_re,
            rules,
        })
    }

    /// True iff the content contains any of the console output markers
    pub fn is_relevant(&self, content: &str) -> bool {
        self.config
            .relevance_markers
            .iter()
            .any(|marker| content.contains(marker.as_str()))
    }

    pub fn has_slf4j_import(&self, content: &str) -> bool {
        content.contains(self.config.import_marker.as_str())
    }

    pub fn has_logger_declaration(&self, content: &str) -> bool {
        self.logger_decl_re.is_match(content)
    }

    /// Name of the first `public class` in the content
    pub fn class_name<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.class_name_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Insert the SLF4J imports right after the last import statement.
    ///
    /// Returns `None` when the file has no import statement at all.
    pub fn add_imports(&self, content: &str) -> Option<String> {
        let last = self.import_re.find_iter(content).last()?;
        let insert_pos = last.end();

        let mut result = String::with_capacity(content.len() + 64);
        result.push_str(&content[..insert_pos]);
        result.push_str(&self.config.import_block());
        result.push_str(&content[insert_pos..]);
        Some(result)
    }

    /// Insert the logger field right after the opening brace of `class_name`.
    ///
    /// Only `public class Name {`, optionally preceded by the configured
    /// annotation, is recognised. Returns `Ok(None)` when it is not found.
    pub fn add_logger_declaration(&self, content: &str, class_name: &str) -> Result<Option<String>> {
        let pattern = format!(
            r"({}\s+)?public\s+class\s+{}\s*\{{",
            regex::escape(&self.config.class_annotation),
            regex::escape(class_name)
        );
        let class_re = Regex::new(&pattern)
            .with_context(|| format!("Invalid class declaration pattern: {}", pattern))?;

        let Some(m) = class_re.find(content) else {
            return Ok(None);
        };
        let insert_pos = m.end();

        let declaration = self.config.logger_declaration(class_name);
        let mut result = String::with_capacity(content.len() + declaration.len());
        result.push_str(&content[..insert_pos]);
        result.push_str(&declaration);
        result.push_str(&content[insert_pos..]);
        Ok(Some(result))
    }

    fn count_console_calls(&self, content: &str) -> usize {
        self.config
            .relevance_markers
            .iter()
            .map(|marker| content.matches(marker.as_str()).count())
            .sum()
    }

    /// Run the whole pipeline over one file's content
    pub fn migrate(&self, content: &str) -> Result<Migration> {
        if !self.is_relevant(content) {
            return Ok(Migration::NotRelevant);
        }

        let mut current = content.to_string();
        let mut steps = Vec::new();
        let mut warnings = Vec::new();

        if !self.has_slf4j_import(&current) {
            match self.add_imports(&current) {
                Some(updated) => {
                    tracing::debug!("added SLF4J imports");
                    current = updated;
                    steps.push(MigrationStep::AddedImports);
                }
                None => warnings.push(MigrationWarning::NoImportAnchor),
            }
        }

        if !self.has_logger_declaration(&current) {
            match self.class_name(&current).map(str::to_string) {
                Some(class_name) => match self.add_logger_declaration(&current, &class_name)? {
                    Some(updated) => {
                        tracing::debug!(class = %class_name, "added logger declaration");
                        current = updated;
                        steps.push(MigrationStep::AddedLogger { class_name });
                    }
                    None => warnings.push(MigrationWarning::ClassBraceNotFound { class_name }),
                },
                None => warnings.push(MigrationWarning::NoPublicClass),
            }
        }

        let (rewritten, rewritten_calls) = rewrite_calls(&self.rules, &current);

        let remaining = self.count_console_calls(&rewritten);
        if remaining > 0 {
            warnings.push(MigrationWarning::UnrewrittenCalls { count: remaining });
        }

        Ok(Migration::Transformed(MigrationOutcome {
            content: rewritten,
            steps,
            rewritten_calls,
            warnings,
        }))
    }
}
