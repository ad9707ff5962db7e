use thiserror::Error;

/// Fehler aus der Konfigurationsvalidierung.
/// Abgelehnt wird vor dem Lauf, nie mitten in der Pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field that must be positive was zero
    #[error("Config field must be positive: {0}")]
    ZeroField(&'static str),

    /// A field outside its valid range
    #[error("Config field out of range: {field} = {value} ({hint})")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value, formatted
        value: String,
        /// What the valid range is
        hint: &'static str,
    },
}
