//! Error types for the MLB Stats API client

use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, MlbError>;

#[derive(Error, Debug)]
pub enum MlbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Bad JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Invalid stat group: {group}")]
    InvalidStatGroup { group: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}

impl MlbError {
    /// True for network, HTTP status and malformed-body failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            MlbError::Http(_) | MlbError::Status { .. } | MlbError::Json(_)
        )
    }
}

/// What went wrong with a single field during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeErrorKind {
    Missing,
    Invalid(String),
}

impl fmt::Display for ShapeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeErrorKind::Missing => write!(f, "missing mandatory field"),
            ShapeErrorKind::Invalid(_) => write!(f, "invalid value"),
        }
    }
}

/// A payload did not match the field contract of the type it was decoded into.
///
/// `field` is a dotted path: the failing key, prefixed by the names of the
/// enclosing fields it was reached through (`details.call.code`).
/// `type_name` is the innermost type whose contract was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.kind, .field, .type_name, .stat_type))]
pub struct ShapeError {
    pub type_name: &'static str,
    pub field: String,
    pub kind: ShapeErrorKind,
    pub stat_type: Option<String>,
}

fn describe(
    kind: &ShapeErrorKind,
    field: &str,
    type_name: &str,
    stat_type: &Option<String>,
) -> String {
    let mut out = kind.to_string();
    if !field.is_empty() {
        out.push_str(&format!(" `{field}`"));
    }
    out.push_str(&format!(" in {type_name}"));
    if let ShapeErrorKind::Invalid(reason) = kind {
        out.push_str(&format!(": {reason}"));
    }
    if let Some(tag) = stat_type {
        out.push_str(&format!(" (stat type `{tag}`)"));
    }
    out
}

impl ShapeError {
    pub fn missing(type_name: &'static str, field: impl Into<String>) -> Self {
        Self {
            type_name,
            field: field.into(),
            kind: ShapeErrorKind::Missing,
            stat_type: None,
        }
    }

    pub fn invalid(
        type_name: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            type_name,
            field: field.into(),
            kind: ShapeErrorKind::Invalid(reason.into()),
            stat_type: None,
        }
    }

    /// Prefix the field path with the enclosing field it was decoded through.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }

    pub fn with_stat_type(mut self, stat_type: impl Into<String>) -> Self {
        self.stat_type = Some(stat_type.into());
        self
    }

    /// The failing key itself, without the enclosing path.
    pub fn leaf_field(&self) -> &str {
        self.field.rsplit('.').next().unwrap_or(&self.field)
    }

    pub fn is_missing(&self) -> bool {
        self.kind == ShapeErrorKind::Missing
    }
}
