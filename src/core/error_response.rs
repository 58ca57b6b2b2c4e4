//! # Error response
//!
//! The module contains types that represent MEX error entries so they can be
//! surfaced in [`WaError::MissingData`].
//!
//! [`WaError::MissingData`]: crate::core::WaError::MissingData

use serde::Deserialize;
use serde_json::Value;

/// Additional error information reported by the resolver.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MexErrorExtensions {
    /// Numeric error code.
    pub error_code: Option<i64>,
}

/// Single entry of the MEX `errors` array.
///
/// # Example
/// ```json
/// {
///     "message": "Newsletter not found",
///     "extensions": { "error_code": 404 }
/// }
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MexError {
    /// A message explaining what went wrong.
    pub message: String,

    /// Additional information about failure reasons.
    pub extensions: Option<MexErrorExtensions>,
}

/// Envelope with errors which comes instead of (or together with) `data`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MexErrorBody {
    /// Reported errors.
    #[serde(default)]
    pub errors: Vec<MexError>,
}

impl MexErrorBody {
    /// Decode value of the `errors` field.
    ///
    /// Returns `None` when it is not an array of well-formed error entries.
    pub fn from_errors(errors: Value) -> Option<Self> {
        serde_json::from_value(errors)
            .ok()
            .map(|errors| Self { errors })
    }

    /// Human readable description of the first reported error.
    pub fn description(&self) -> Option<String> {
        self.errors.first().map(|error| {
            match error.extensions.as_ref().and_then(|ext| ext.error_code) {
                Some(code) => format!("{} (code {code})", error.message),
                None => error.message.clone(),
            }
        })
    }
}
