//! Formatting error types

use thiserror::Error;

/// Errors that can occur while interpolating a message template.
///
/// Emission never writes a partial line when it fails: templates are
/// rendered before the sink is touched, and configuration state is
/// never modified by an emission call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Placeholder count does not match the number of arguments
    #[error("template has {placeholders} placeholder(s) but {args} argument(s) were given")]
    ArgumentCount { placeholders: usize, args: usize },

    /// A brace without a partner; braces must appear as `{}`, `{{` or `}}`
    #[error("unmatched brace in template at byte {position}")]
    UnmatchedBrace { position: usize },

    /// An argument's `Display` implementation returned an error
    #[error("argument {index} failed to format")]
    ArgumentFailed { index: usize },
}
