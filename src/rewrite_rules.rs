//! The console-call rewrite rules
//!
//! Each console stream gets three rules, applied globally and in a fixed order:
//! a bare string literal, a `"label: " + value` concatenation, and any
//! expression without a double quote. The negated character classes that
//! guard the patterns are approximations, so constructs that overlap
//! (a literal with more than one concatenation, nested parentheses) may be
//! rewritten oddly or not at all.

use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;

/// The console stream a rule targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    /// `System.out`
    Out,
    /// `System.err`
    Err,
}

impl OutputStream {
    /// Name of the stream field on `System`
    pub fn field(self) -> &'static str {
        match self {
            OutputStream::Out => "out",
            OutputStream::Err => "err",
        }
    }

    /// SLF4J level every call on this stream maps to
    pub fn severity(self) -> &'static str {
        match self {
            OutputStream::Out => "info",
            OutputStream::Err => "error",
        }
    }
}

/// Shape of the `println` argument a rule recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallForm {
    /// `println("text")`
    Literal,
    /// `println("label: " + value)`
    LabelledValue,
    /// `println(expression)`, no double quote anywhere in the argument
    Expression,
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub stream: OutputStream,
    pub form: CallForm,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(stream: OutputStream, form: CallForm, logger_field: &str) -> Result<Self> {
        let call = format!(r"System\.{}\.println", stream.field());
        let level = stream.severity();

        let (pattern, replacement) = match form {
            CallForm::Literal => (
                format!(r#"{}\("([^"]+)"\);"#, call),
                format!(r#"{}.{}("${{1}}");"#, logger_field, level),
            ),
            CallForm::LabelledValue => (
                format!(r#"{}\("([^"]+):\s*"\s*\+\s*([^)]+)\);"#, call),
                format!(r#"{}.{}("${{1}}: {{}}", ${{2}});"#, logger_field, level),
            ),
            CallForm::Expression => (
                format!(r#"{}\(([^"]+)\);"#, call),
                format!(r#"{}.{}("{{}}",${{1}});"#, logger_field, level),
            ),
        };

        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid rewrite pattern: {}", pattern))?;

        Ok(Self {
            stream,
            form,
            pattern,
            replacement,
        })
    }

    /// Replace every match in `content`, returning the new text and the match count
    pub fn apply<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        let count = self.pattern.find_iter(content).count();
        if count == 0 {
            return (Cow::Borrowed(content), 0);
        }
        (self.pattern.replace_all(content, self.replacement.as_str()), count)
    }
}

/// All six rules in application order: stdout first, then stderr
pub fn build_rules(logger_field: &str) -> Result<Vec<RewriteRule>> {
    let mut rules = Vec::with_capacity(6);
    for stream in [OutputStream::Out, OutputStream::Err] {
        for form in [CallForm::Literal, CallForm::LabelledValue, CallForm::Expression] {
            rules.push(RewriteRule::new(stream, form, logger_field)?);
        }
    }
    Ok(rules)
}

/// Run every rule over `content` in order, returning the result and total rewrites
pub fn rewrite_calls(rules: &[RewriteRule], content: &str) -> (String, usize) {
    let mut result = content.to_string();
    let mut total = 0;

    for rule in rules {
        let (rewritten, count) = rule.apply(&result);
        if count > 0 {
            tracing::debug!(stream = ?rule.stream, form = ?rule.form, count, "rewrote calls");
            total += count;
            result = rewritten.into_owned();
        }
    }

    (result, total)
}
