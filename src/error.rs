use thiserror::Error;

/// Errors surfaced by the pattern library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The flyweight cache was asked for a variant it has no implementation for.
    #[error(
        "unsupported variant {0} (expected 0..={})",
        crate::flyweight::Variant::MAX_INDEX
    )]
    UnsupportedVariant(u8),

    /// A demo setting could not be parsed.
    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: &'static str, value: String },
}
