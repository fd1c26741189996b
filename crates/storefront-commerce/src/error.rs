//! Commerce error types.

use crate::checkout::CaptureState;
use std::fmt;
use thiserror::Error;

/// A field the customer must fill in before confirming a delivery address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// Human-readable address text.
    Address,
    /// Contact phone number.
    Phone,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Address => "address",
            RequiredField::Phone => "phone",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the delivery address capture flow.
///
/// Cart and order total operations cannot fail and have no error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Confirmation attempted with required fields left blank.
    #[error("Please fill in all required fields: missing {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    /// The flow already reached a terminal state.
    #[error("Address capture already {0}")]
    Finished(CaptureState),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = CaptureError::MissingFields(vec![RequiredField::Address, RequiredField::Phone]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: missing address, phone"
        );
    }

    #[test]
    fn test_finished_message() {
        let err = CaptureError::Finished(CaptureState::Cancelled);
        assert_eq!(err.to_string(), "Address capture already cancelled");
    }
}
