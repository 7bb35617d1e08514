use valform_types::{
    Domain, Envelope, PasswordOptions, PasswordReport, RuleCheck, StrengthTier,
    default_strength_tiers,
};

use crate::store::{self, ConfigStore};

/// Checks password composition minimums and grades overall strength.
///
/// Every configured minimum produces an independent pass/fail entry; the
/// strength label comes from the highest-ranked bracket whose diversity
/// and length floors the password clears.
#[derive(Debug, Clone, Default)]
pub struct PasswordValidator {
    options: PasswordOptions,
}

impl PasswordValidator {
    pub fn new(options: PasswordOptions) -> Self {
        Self { options }
    }

    /// Build a validator from the current `password` configuration.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.options(Domain::Password))
    }

    pub fn validate(&self, password: &str) -> Envelope<PasswordReport> {
        let report = PasswordReport {
            checks: self.composition_checks(password),
            strength: self.strength_label(password),
        };
        Envelope::ok("Password validated", report)
    }

    fn composition_checks(&self, password: &str) -> Vec<RuleCheck> {
        let length = password.chars().count() as u32;
        let mut checks = Vec::new();

        if let Some(min) = configured(self.options.character_len) {
            checks.push(check("Char", length >= min));
        }
        if let Some(min) = configured(self.options.upper_case) {
            let count = password.chars().filter(char::is_ascii_uppercase).count() as u32;
            checks.push(check("UpperCase", count >= min));
        }
        if let Some(min) = configured(self.options.lower_case) {
            let count = password.chars().filter(char::is_ascii_lowercase).count() as u32;
            checks.push(check("LowerCase", count >= min));
        }
        if let Some(min) = configured(self.options.num) {
            let count = password.chars().filter(char::is_ascii_digit).count() as u32;
            checks.push(check("Number", count >= min));
        }
        if let Some(symbols) = self.symbol_set() {
            let present = password.chars().any(|c| symbols.contains(c));
            checks.push(check("NonAlphaNumeric", present));
        }

        checks
    }

    fn strength_label(&self, password: &str) -> String {
        let length = password.chars().count() as u32;
        let mut diversity = 0u32;
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            diversity += 1;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            diversity += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            diversity += 1;
        }
        if let Some(symbols) = self.symbol_set() {
            if password.chars().any(|c| symbols.contains(c)) {
                diversity += 1;
            }
        }

        let tiers = self
            .options
            .strength_options
            .clone()
            .unwrap_or_else(default_strength_tiers);

        // The first bracket is the floor regardless of its own minimums;
        // among the rest the highest id that qualifies wins.
        let mut best: Option<&StrengthTier> = None;
        for (index, tier) in tiers.iter().enumerate() {
            let qualifies =
                index == 0 || (diversity >= tier.min_diversity && length >= tier.min_length);
            if qualifies && best.is_none_or(|b| tier.id > b.id) {
                best = Some(tier);
            }
        }
        best.map(|tier| tier.value.clone()).unwrap_or_default()
    }

    fn symbol_set(&self) -> Option<&str> {
        self.options.symbol.as_deref().filter(|s| !s.is_empty())
    }
}

/// Validate `password` using the process-wide `password` configuration,
/// re-read on every call.
pub fn validate_password(password: &str) -> Envelope<PasswordReport> {
    PasswordValidator::from_store(store::global()).validate(password)
}

/// A minimum of zero disables its check entirely.
fn configured(minimum: Option<u32>) -> Option<u32> {
    minimum.filter(|&m| m > 0)
}

fn check(title: &str, valid: bool) -> RuleCheck {
    RuleCheck {
        title: title.to_string(),
        valid,
    }
}
