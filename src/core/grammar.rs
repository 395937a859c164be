//! Conventional commit message grammar.
//!
//! This module validates commit headers of the form
//! `[revert: ]type[(scope)][!]: description` and produces a
//! [`ParsedCommitMessage`] only for messages that satisfy every rule.
//!
//! # Public API
//! - [`MessageGrammar`]: Validator configured with the allowed types and description limit
//! - [`ValidationResult`]: Every error found in one pass, plus the parsed message when valid
//! - [`ParsedCommitMessage`]: The structured header of a valid message
//! - [`MessageError`]: One grammar violation
//! - [`compose_header`]: Build a header from its parts (guided prompt)
//!
//! # Validation passes
//! - **Length**: the whole message must not exceed [`MAX_HEADER_LENGTH`] characters.
//!   This is reported but does not stop the message from being parsed.
//! - **Structure**: the first line must match the header shape. When it doesn't,
//!   specific sub-errors are reported (missing colon, missing description, bad type token).
//! - **Fields**: type, scope and description rules, all reported together.
//!
//! An empty or whitespace-only message yields a single [`MessageError::Empty`].

use crate::core::config::{WorkflowConfiguration, DEFAULT_MAX_DESCRIPTION_LENGTH};
use crate::core::commit_type::default_type_tags;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

pub const MAX_HEADER_LENGTH: usize = 72;
pub const REVERT_PREFIX: &str = "revert: ";
const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<revert>revert: )?(?P<type>[A-Za-z]+)(?:\((?P<scope>[^()]*)\))?(?P<bang>!)?: (?P<description>.+)$",
        )
        .expect("header regex is valid")
    })
}

fn type_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+(\([^()]*\))?!?$").expect("type regex is valid"))
}

fn scope_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("scope regex is valid"))
}

/// A single grammar violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Commit message cannot be empty")]
    Empty,

    #[error("Commit message header should not exceed {max} characters (got {actual})")]
    HeaderTooLong { max: usize, actual: usize },

    // Structural errors
    #[error("Missing colon separator between type/scope and description")]
    MissingColon,

    #[error("Missing description after colon")]
    MissingDescription,

    #[error("Missing space after colon")]
    MissingSpaceAfterColon,

    #[error("Missing type before colon")]
    MissingType,

    #[error("Invalid type format '{found}'. Expected a type such as 'feat', optionally followed by (scope) and '!'")]
    InvalidTypeFormat { found: String },

    #[error("Invalid format. Expected: type(scope): description")]
    InvalidFormat,

    // Field errors
    #[error("Invalid commit type '{found}'. Valid types: {}", .allowed.join(", "))]
    UnknownType { found: String, allowed: Vec<String> },

    #[error("Scope '{scope}' should only contain lowercase letters, numbers, and hyphens")]
    InvalidScope { scope: String },

    #[error("Description should not exceed {max} characters (got {actual})")]
    DescriptionTooLong { max: usize, actual: usize },

    #[error("Description should start with a lowercase letter")]
    DescriptionNotLowercase,

    #[error("Description should only contain lowercase letters, numbers, spaces, hyphens, and underscores")]
    DescriptionInvalidCharacters,

    #[error("Description should not end with a period")]
    DescriptionEndsWithPeriod,
}

impl MessageError {
    /// True for errors raised because the header does not have the expected shape
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MessageError::MissingColon
                | MessageError::MissingDescription
                | MessageError::MissingSpaceAfterColon
                | MessageError::MissingType
                | MessageError::InvalidTypeFormat { .. }
                | MessageError::InvalidFormat
        )
    }
}

/// The structured header of a message that satisfies the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommitMessage {
    pub revert: bool,
    pub commit_type: String,
    pub scope: Option<String>,
    pub description: String,
    pub is_breaking: bool,
}

impl fmt::Display for ParsedCommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.revert {
            f.write_str(REVERT_PREFIX)?;
        }
        f.write_str(&compose_header(
            &self.commit_type,
            self.scope.as_deref(),
            self.is_breaking,
            &self.description,
        ))
    }
}

/// Outcome of validating one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<MessageError>,
    pub parsed: Option<ParsedCommitMessage>,
    pub is_breaking: bool,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages as displayed to the user
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Header fields captured by the structural match, before field validation
struct HeaderFields<'a> {
    revert: bool,
    commit_type: &'a str,
    scope: Option<&'a str>,
    description: &'a str,
}

/// Commit message validator
#[derive(Debug, Clone, PartialEq)]
pub struct MessageGrammar {
    allowed_types: Vec<String>,
    max_description_length: usize,
}

impl Default for MessageGrammar {
    fn default() -> Self {
        Self {
            allowed_types: default_type_tags(),
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl MessageGrammar {
    pub fn new(config: &WorkflowConfiguration) -> Self {
        Self {
            allowed_types: config.allowed_types.clone(),
            max_description_length: config.max_description_length,
        }
    }

    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }

    pub fn max_description_length(&self) -> usize {
        self.max_description_length
    }

    /// Validate `raw`, collecting every applicable error
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let is_breaking = detect_breaking(raw);

        if raw.trim().is_empty() {
            return ValidationResult {
                errors: vec![MessageError::Empty],
                parsed: None,
                is_breaking,
            };
        }

        let mut errors = Vec::new();

        let length = raw.chars().count();
        if length > MAX_HEADER_LENGTH {
            errors.push(MessageError::HeaderTooLong {
                max: MAX_HEADER_LENGTH,
                actual: length,
            });
        }

        let header = header_line(raw);
        let parsed = match match_header(header) {
            None => {
                errors.extend(structural_errors(header));
                None
            }
            Some(fields) => {
                let field_errors = self.field_errors(&fields);
                let parsed = field_errors.is_empty().then(|| ParsedCommitMessage {
                    revert: fields.revert,
                    commit_type: fields.commit_type.to_string(),
                    scope: fields.scope.map(str::to_string),
                    description: fields.description.to_string(),
                    is_breaking,
                });
                errors.extend(field_errors);
                parsed
            }
        };

        ValidationResult {
            errors,
            parsed,
            is_breaking,
        }
    }

    /// Parse `raw` into its header fields; `None` unless every grammar rule holds
    pub fn parse(&self, raw: &str) -> Option<ParsedCommitMessage> {
        self.validate(raw).parsed
    }

    fn field_errors(&self, fields: &HeaderFields<'_>) -> Vec<MessageError> {
        let mut errors = Vec::new();

        if !self.allowed_types.iter().any(|t| t == fields.commit_type) {
            errors.push(MessageError::UnknownType {
                found: fields.commit_type.to_string(),
                allowed: self.allowed_types.clone(),
            });
        }

        if let Some(scope) = fields.scope {
            if !scope_regex().is_match(scope) {
                errors.push(MessageError::InvalidScope {
                    scope: scope.to_string(),
                });
            }
        }

        let description = fields.description;
        let length = description.chars().count();
        if length > self.max_description_length {
            errors.push(MessageError::DescriptionTooLong {
                max: self.max_description_length,
                actual: length,
            });
        }

        if !description.starts_with(|c: char| c.is_ascii_lowercase()) {
            errors.push(MessageError::DescriptionNotLowercase);
        }

        if !description.chars().all(is_description_char) {
            errors.push(MessageError::DescriptionInvalidCharacters);
        }

        if description.ends_with('.') {
            errors.push(MessageError::DescriptionEndsWithPeriod);
        }

        errors
    }

    /// Multi-line help text describing the expected format
    pub fn format_help(&self) -> String {
        let mut help = String::from("Format: type(scope): description\n\nExamples:\n");
        for example in EXAMPLES {
            help.push_str("  ");
            help.push_str(example);
            help.push('\n');
        }
        help.push_str("\nRules:\n");
        help.push_str(&format!(
            "- Type must be one of: {}\n",
            self.allowed_types.join(", ")
        ));
        help.push_str("- Scope is optional: lowercase letters, numbers and hyphens\n");
        help.push_str(&format!(
            "- Description starts lowercase, has no period, max {} chars\n",
            self.max_description_length
        ));
        help.push_str("- Add '!' before the colon to mark a breaking change");
        help
    }
}

pub const EXAMPLES: [&str; 7] = [
    "feat: add user authentication",
    "fix(auth): resolve login redirect issue",
    "docs: update api documentation",
    "refactor(utils): simplify validation logic",
    "test: add unit tests for auth module",
    "chore: update dependencies",
    "perf!: drop the legacy cache layer",
];

/// Build a header from its parts, without validating them
pub fn compose_header(
    commit_type: &str,
    scope: Option<&str>,
    breaking: bool,
    description: &str,
) -> String {
    let mut header = String::from(commit_type);
    if let Some(scope) = scope {
        header.push('(');
        header.push_str(scope);
        header.push(')');
    }
    if breaking {
        header.push('!');
    }
    header.push_str(": ");
    header.push_str(description);
    header
}

/// True if the message carries a breaking change marker, whether or not it is valid
pub fn detect_breaking(raw: &str) -> bool {
    if BREAKING_MARKERS.iter().any(|marker| raw.contains(marker)) {
        return true;
    }

    let header = header_line(raw);
    header
        .find(':')
        .is_some_and(|colon| header[..colon].ends_with('!'))
}

fn header_line(raw: &str) -> &str {
    raw.lines().next().unwrap_or("")
}

fn is_description_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '-' | '_')
}

fn match_header(header: &str) -> Option<HeaderFields<'_>> {
    let caps = header_regex().captures(header)?;
    Some(HeaderFields {
        revert: caps.name("revert").is_some(),
        commit_type: caps.name("type")?.as_str(),
        scope: caps.name("scope").map(|m| m.as_str()),
        description: caps.name("description")?.as_str(),
    })
}

fn structural_errors(header: &str) -> Vec<MessageError> {
    let body = header
        .strip_prefix(REVERT_PREFIX)
        .filter(|rest| rest.contains(':'))
        .unwrap_or(header);

    let Some(colon) = body.find(':') else {
        return vec![MessageError::MissingColon];
    };
    let (type_part, rest) = (&body[..colon], &body[colon + 1..]);

    let mut errors = Vec::new();

    if type_part.trim().is_empty() {
        errors.push(MessageError::MissingType);
    } else if !type_token_regex().is_match(type_part) {
        errors.push(MessageError::InvalidTypeFormat {
            found: type_part.to_string(),
        });
    }

    if rest.trim().is_empty() {
        errors.push(MessageError::MissingDescription);
    } else if !rest.starts_with(' ') {
        errors.push(MessageError::MissingSpaceAfterColon);
    }

    if errors.is_empty() {
        errors.push(MessageError::InvalidFormat);
    }

    errors
}
