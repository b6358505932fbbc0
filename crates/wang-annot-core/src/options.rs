//! Decode configuration.

/// Integer layout announced by the tag header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatVariant {
    /// Nonzero format word: 32-bit little-endian integers.
    Intel32,
    /// Zero format word: the legacy 16-bit layout.
    Legacy16,
}

impl FormatVariant {
    /// Classify the header's format-variant word.
    pub fn from_word(word: u32) -> Self {
        if word != 0 {
            FormatVariant::Intel32
        } else {
            FormatVariant::Legacy16
        }
    }
}

/// What to do with a tag announcing the 16-bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantPolicy {
    /// Fail the decode before reading any block.
    #[default]
    Reject,
    /// Warn and decode the blocks with the 32-bit layout anyway.
    AssumeIntel32,
}

/// Options controlling decode behavior and resource limits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Handling of the 16-bit layout flag (default: Reject).
    pub variant_policy: VariantPolicy,
    /// Maximum tag size in bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// Maximum number of marks per tag (default: None = no limit).
    pub max_marks: Option<usize>,
    /// Whether to report warnings to the sink (default: true).
    pub collect_warnings: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            variant_policy: VariantPolicy::Reject,
            max_input_bytes: None,
            max_marks: None,
            collect_warnings: true,
        }
    }
}

impl DecodeOptions {
    /// Options that tolerate tags written with the 16-bit flag set.
    pub fn lenient() -> Self {
        Self {
            variant_policy: VariantPolicy::AssumeIntel32,
            ..Self::default()
        }
    }
}
