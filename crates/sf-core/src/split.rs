//! Naive SQL statement splitting
//!
//! Splits a migration script on `;` so that each fragment can be submitted to
//! a remote execute-SQL endpoint one at a time. This is a textual split: it
//! does not understand string literals, dollar-quoted bodies, or procedural
//! blocks, so a semicolon inside one of those will incorrectly break the
//! statement in two. The splitter is isolated behind [`split_statements`] so
//! it can be swapped for a real tokenizer without touching the applier.

/// Maximum number of characters of a statement shown in failure reports.
const PREVIEW_CHARS: usize = 100;

/// A single trimmed, executable SQL statement.
///
/// Guaranteed non-empty and not a pure line comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement(String);

impl Statement {
    /// The statement text, trimmed of surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 100 characters of the statement, for failure reports.
    ///
    /// Appends an ellipsis when the statement was truncated.
    pub fn preview(&self) -> String {
        if self.0.chars().count() <= PREVIEW_CHARS {
            return self.0.clone();
        }
        let mut preview: String = self.0.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split a raw SQL script into an ordered sequence of statements.
///
/// Fragments are trimmed; empty fragments and fragments starting with a
/// `--` line comment are dropped. Relative order is preserved because later
/// statements (indexes, constraints) may depend on earlier ones. Never
/// fails; an all-comment or empty script yields an empty Vec.
pub fn split_statements(raw_sql: &str) -> Vec<Statement> {
    raw_sql
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty() && !fragment.starts_with("--"))
        .map(|fragment| Statement(fragment.to_string()))
        .collect()
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
