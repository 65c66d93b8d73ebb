use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::claim::ClaimSide;

/// Result type alias using ClaimDiffError
pub type Result<T> = std::result::Result<T, ClaimDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the loader and CLI can surface.
/// The diff engine itself is total and never produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// Claim bytes are not UTF-8 JSON, or a section has the wrong shape
    InvalidClaim,
    /// The `claim` root object is absent
    MissingField,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidClaim => "ERR_INVALID_CLAIM",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context a user
/// needs to fix the input (which file, which side of the comparison).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    side: Option<ClaimSide>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            side: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add claim file path context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add comparison side context
    pub fn with_side(mut self, side: ClaimSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the claim file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the comparison side, if any
    pub fn side(&self) -> Option<ClaimSide> {
        self.side
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for loading claim documents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClaimDiffError {
    /// Claim file could not be read
    #[error("Failed reading claim file {}: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    /// Claim file is not a well-formed claim document
    #[error("Failed to decode claim file {}: {reason}", path.display())]
    InvalidClaim { path: PathBuf, reason: String },

    /// A required section of the claim document is absent
    #[error("Claim file {} has no `{section}` section", path.display())]
    MissingSection { path: PathBuf, section: String },

    /// Serialization of a diff result failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ClaimDiffError {
    /// Attach a file path to a decode error raised before the path was known.
    pub(crate) fn at_path(self, at: &Path) -> Self {
        match self {
            ClaimDiffError::InvalidClaim { reason, .. } => ClaimDiffError::InvalidClaim {
                path: at.to_path_buf(),
                reason,
            },
            ClaimDiffError::MissingSection { section, .. } => ClaimDiffError::MissingSection {
                path: at.to_path_buf(),
                section,
            },
            ClaimDiffError::ReadFailed { reason, .. } => ClaimDiffError::ReadFailed {
                path: at.to_path_buf(),
                reason,
            },
            other => other,
        }
    }
}

/// Conversion from ClaimDiffError to the structured ExError
impl From<ClaimDiffError> for ExError {
    fn from(err: ClaimDiffError) -> Self {
        match err {
            ClaimDiffError::ReadFailed { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("load_claim")
                .with_path(path)
                .with_message(format!("failed reading claim file: {}", reason)),

            ClaimDiffError::InvalidClaim { path, reason } => {
                ExError::new(ExErrorKind::InvalidClaim)
                    .with_op("load_claim")
                    .with_path(path)
                    .with_message(format!("failed to decode claim file: {}", reason))
            }

            ClaimDiffError::MissingSection { path, section } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_op("load_claim")
                    .with_path(path)
                    .with_message(format!("required section `{}` is absent", section))
            }

            ClaimDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ClaimDiffError
impl From<serde_json::Error> for ClaimDiffError {
    fn from(err: serde_json::Error) -> Self {
        ClaimDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
