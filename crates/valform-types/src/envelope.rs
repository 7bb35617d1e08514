use serde::{Deserialize, Serialize};

/// Uniform result shape returned by every formatter and validator.
///
/// A failed envelope never carries data; a successful one always does.
/// The constructors are the only way to build one, so the pairing holds
/// everywhere by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Payload of a successful number-formatting call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedNumber {
    pub number: String,
}

/// One composition rule outcome in a password report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub title: String,
    pub valid: bool,
}

/// Payload of a successful password validation: the individual rule
/// outcomes plus the tiered strength label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
    pub checks: Vec<RuleCheck>,
    pub strength: String,
}
