//! Error and warning types for wang-annot.
//!
//! Provides [`WangError`] for failures that abort a tag decode,
//! [`DecodeWarning`] for non-fatal oddities reported while decoding, and
//! [`DecodeSummary`] describing a successful decode.

use std::fmt;

/// Fatal error for a tag decode.
///
/// Any of these means no mark of the tag should be considered applied.
#[derive(Debug, Clone, PartialEq)]
pub enum WangError {
    /// The byte stream ended before a structure was complete.
    Truncated {
        /// What was being read (e.g., "block header").
        context: String,
        needed: usize,
        available: usize,
    },
    /// A block's declared size does not match its layout.
    SizeMismatch {
        context: String,
        expected: usize,
        declared: usize,
    },
    /// A field holds a value the layout does not allow.
    InvalidValue(String),
    /// A top-level block carries an unknown type code.
    InvalidBlockType(i32),
    /// The tag uses the 16-bit layout.
    UnsupportedVariant,
    /// A mark was decoded but could not be translated.
    MarkRejected {
        /// Zero-based position of the mark in the tag.
        index: usize,
        reason: String,
    },
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_marks").
        limit_name: String,
        limit_value: usize,
        actual_value: usize,
    },
}

impl fmt::Display for WangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WangError::Truncated {
                context,
                needed,
                available,
            } => write!(
                f,
                "truncated {context}: need {needed} bytes, {available} available"
            ),
            WangError::SizeMismatch {
                context,
                expected,
                declared,
            } => write!(
                f,
                "size mismatch in {context}: expected {expected} bytes, declared {declared}"
            ),
            WangError::InvalidValue(msg) => write!(f, "invalid value: {msg}"),
            WangError::InvalidBlockType(code) => write!(f, "invalid block type {code}"),
            WangError::UnsupportedVariant => {
                write!(f, "16-bit annotation layout is not supported")
            }
            WangError::MarkRejected { index, reason } => {
                write!(f, "mark #{index} rejected: {reason}")
            }
            WangError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
        }
    }
}

impl std::error::Error for WangError {}

/// Machine-readable warning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeWarningCode {
    /// A named block with an unrecognized name was skipped.
    UnknownNamedBlock,
    /// The 16-bit layout flag was ignored and the tag decoded as 32-bit.
    UnsupportedVariant,
    /// A rotation record's scale is not 1000.
    UnexpectedRotationScale,
    /// A text orientation is not a multiple of 90 degrees.
    UnusualOrientation,
}

impl DecodeWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeWarningCode::UnknownNamedBlock => "UNKNOWN_NAMED_BLOCK",
            DecodeWarningCode::UnsupportedVariant => "UNSUPPORTED_VARIANT",
            DecodeWarningCode::UnexpectedRotationScale => "UNEXPECTED_ROTATION_SCALE",
            DecodeWarningCode::UnusualOrientation => "UNUSUAL_ORIENTATION",
        }
    }
}

impl fmt::Display for DecodeWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while decoding.
///
/// Warnings never change whether a decode succeeds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeWarning {
    pub code: DecodeWarningCode,
    pub description: String,
    /// Zero-based mark position, or `None` for header and default blocks.
    pub mark_index: Option<usize>,
    /// Name of the named block involved, if any.
    pub block_name: Option<String>,
}

impl DecodeWarning {
    pub fn new(code: DecodeWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            mark_index: None,
            block_name: None,
        }
    }

    /// Attach the mark position (builder pattern).
    pub fn for_mark(mut self, index: Option<usize>) -> Self {
        self.mark_index = index;
        self
    }

    /// Attach the named block (builder pattern).
    pub fn in_block(mut self, name: impl Into<String>) -> Self {
        self.block_name = Some(name.into());
        self
    }
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(index) = self.mark_index {
            write!(f, " (mark #{index})")?;
        }
        if let Some(ref name) = self.block_name {
            write!(f, " [block {name}]")?;
        }
        Ok(())
    }
}

/// Outcome of a successful decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Number of marks translated and handed to the sink.
    pub marks: usize,
    /// Number of top-level blocks walked.
    pub blocks: usize,
    /// Number of warnings reported to the sink.
    pub warnings: usize,
}
