//! Error types for the decoding and translation layers.
//!
//! Uses [`thiserror`] for error derivation. [`DecodeError`] covers every
//! failure of the block walk and converts into [`WangError`] at the crate
//! boundary; [`TranslateError`] explains why a decoded mark was rejected.

use thiserror::Error;
use wang_annot_core::{MarkType, WangError};

/// Why a complete mark could not be turned into a sink call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The mark kind has no translation.
    #[error("{0} marks are not supported")]
    Unsupported(MarkType),

    /// A named block the mark kind depends on was never seen.
    #[error("{mark_type} mark is missing its {block} block")]
    MissingBlock {
        mark_type: MarkType,
        block: &'static str,
    },

    /// The point list has the wrong number of points.
    #[error("{mark_type} mark needs {expected} points, found {found}")]
    PointCount {
        mark_type: MarkType,
        expected: usize,
        found: usize,
    },
}

/// Error raised while walking the annotation block stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than a structure needs.
    #[error("truncated {context}: need {needed} bytes, {available} available")]
    Truncated {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// A declared size disagrees with the structure layout.
    #[error("size mismatch in {context}: expected {expected} bytes, declared {declared}")]
    SizeMismatch {
        context: &'static str,
        expected: usize,
        declared: usize,
    },

    /// A field holds a value the layout does not allow.
    #[error("invalid {context}: {value}")]
    InvalidValue { context: &'static str, value: i64 },

    /// A top-level block has an unknown type code.
    #[error("invalid block type {0}")]
    InvalidBlockType(i32),

    /// An `OiAnoDat` block appeared for a mark that cannot carry one.
    #[error("OiAnoDat block is not applicable to {}", describe_kind(.0))]
    AnoDatNotApplicable(Option<MarkType>),

    /// The header announces the 16-bit layout.
    #[error("16-bit annotation layout is not supported")]
    UnsupportedVariant,

    /// A decoded mark was rejected by the translator.
    #[error("mark #{index} rejected: {source}")]
    MarkRejected {
        index: usize,
        #[source]
        source: TranslateError,
    },

    /// A configured resource limit was exceeded.
    #[error("resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})")]
    ResourceLimitExceeded {
        limit_name: &'static str,
        limit_value: usize,
        actual_value: usize,
    },
}

fn describe_kind(kind: &Option<MarkType>) -> String {
    match kind {
        Some(mark_type) => format!("{mark_type} marks"),
        None => "blocks outside a mark".to_string(),
    }
}

impl From<DecodeError> for WangError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Truncated {
                context,
                needed,
                available,
            } => WangError::Truncated {
                context: context.to_string(),
                needed,
                available,
            },
            DecodeError::SizeMismatch {
                context,
                expected,
                declared,
            } => WangError::SizeMismatch {
                context: context.to_string(),
                expected,
                declared,
            },
            err @ (DecodeError::InvalidValue { .. } | DecodeError::AnoDatNotApplicable(_)) => {
                WangError::InvalidValue(err.to_string())
            }
            DecodeError::InvalidBlockType(code) => WangError::InvalidBlockType(code),
            DecodeError::UnsupportedVariant => WangError::UnsupportedVariant,
            DecodeError::MarkRejected { index, source } => WangError::MarkRejected {
                index,
                reason: source.to_string(),
            },
            DecodeError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => WangError::ResourceLimitExceeded {
                limit_name: limit_name.to_string(),
                limit_value,
                actual_value,
            },
        }
    }
}
