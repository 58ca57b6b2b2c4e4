//! # Error types
//!
//! This module contains the error types for the [`wa_newsletter`] crate.
//!
//! [`wa_newsletter`]: ../index.html

use snafu::Snafu;

/// Newsletter client error type
///
/// This type is used to represent errors that can occur while talking to the
/// MEX endpoint. It is used as the error type for the [`Result`] type.
///
/// # Examples
/// ```
/// use wa_newsletter::core::WaError;
///
/// fn foo() -> Result<(), WaError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   WaError::Transport { .. } => println!("Transport error"),
///   WaError::MissingData { .. } => println!("Server didn't return data"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum WaError {
    /// this error is returned when the transport layer fails
    #[snafu(display("Transport error: {details}"))]
    Transport {
        /// Error details.
        details: String,
    },

    /// this error is returned when the serialization of the request fails
    #[snafu(display("Serialization error: {details}"))]
    Serialization {
        /// Error details.
        details: String,
    },

    /// this error is returned when the deserialization of the response fails
    #[snafu(display("Deserialization error: {details}"))]
    Deserialization {
        /// Error details.
        details: String,
    },

    /// this error is returned when the reply node has no expected child
    #[snafu(display("Reply is missing '{tag}' node"))]
    MissingNode {
        /// Tag of the child node which has been expected.
        tag: String,
    },

    /// this error is returned when node content can't be read as string
    #[snafu(display("Invalid node content: {details}"))]
    InvalidNodeContent {
        /// Error details.
        details: String,
    },

    /// this error is returned when MEX reply has no `data` field
    #[snafu(display("Error while {operation}: {details}"))]
    MissingData {
        /// Human readable name of the operation which failed.
        operation: String,

        /// Server provided error message or raw reply payload.
        details: String,
    },

    /// this error is returned when request builder is missing required
    /// fields or has invalid values
    #[snafu(display("Request build error: {details}"))]
    RequestBuild {
        /// Error details.
        details: String,
    },

    /// this error is returned when the initialization of client fails
    #[snafu(display("Client initialization error: {details}"))]
    ClientInitialization {
        /// Error details.
        details: String,
    },
}

impl WaError {
    /// Create request build error from builder failure.
    pub(crate) fn request_build<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::RequestBuild {
            details: details.into(),
        }
    }

    /// Create transport error.
    pub fn transport<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::Transport {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn display_operation_for_missing_data() {
        let error = WaError::MissingData {
            operation: "fetch newsletter info".into(),
            details: "{}".into(),
        };

        assert_eq!(error.to_string(), "Error while fetch newsletter info: {}");
    }

    #[test]
    fn display_tag_for_missing_node() {
        let error = WaError::MissingNode {
            tag: "result".into(),
        };

        assert_eq!(error.to_string(), "Reply is missing 'result' node");
    }
}
