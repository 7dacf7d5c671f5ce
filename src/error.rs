//! Validation errors for caller-supplied geometry and configuration.

/// Rejected input value.
///
/// The store itself never fails; this only comes out of the checked
/// constructors ([`Margins::try_new`](crate::Margins::try_new),
/// [`SizeF::try_new`](crate::SizeF::try_new)) and
/// [`SettingsDefaults::validated`](crate::SettingsDefaults::validated).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// A length was NaN or infinite.
    #[error("{what} must be finite, got {value}")]
    NonFinite {
        /// Which field was rejected.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A physical size component was below zero.
    #[error("{what} must not be negative, got {value}")]
    NegativeSize {
        /// Which field was rejected.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
}

pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<f64, SettingsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SettingsError::NonFinite { what, value })
    }
}
