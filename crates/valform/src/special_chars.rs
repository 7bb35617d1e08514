use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use valform_types::{Domain, Envelope, Error, SpecialCharsOptions};

use crate::store::{self, ConfigStore};

/// Removes special characters from a string, keeping alphanumerics,
/// spaces, and any configured exceptions.
#[derive(Debug, Clone, Default)]
pub struct SpecialCharsModifier {
    options: SpecialCharsOptions,
}

impl SpecialCharsModifier {
    pub fn new(options: SpecialCharsOptions) -> Self {
        Self { options }
    }

    /// Build a modifier from the current `specialCharsModifier` configuration.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.options(Domain::SpecialCharsModifier))
    }

    /// Strip any serializable input. Everything except a JSON string is
    /// rejected.
    pub fn strip<T: Serialize>(&self, input: T) -> Envelope<String> {
        let Ok(Value::String(text)) = serde_json::to_value(&input) else {
            debug!("rejected non-string input");
            return Error::NotString.into();
        };

        let kept: String = text
            .chars()
            .filter(|&c| c.is_alphanumeric() || c == ' ' || self.options.exceptions.contains(c))
            .collect();

        Envelope::ok("String successfully modified", kept)
    }
}

/// Strip `input` using the process-wide `specialCharsModifier`
/// configuration, re-read on every call.
pub fn strip_special_chars<T: Serialize>(input: T) -> Envelope<String> {
    SpecialCharsModifier::from_store(store::global()).strip(input)
}
