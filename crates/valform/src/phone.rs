use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use valform_types::{Domain, Envelope, Error, PhoneOptions, Result};

use crate::store::{self, ConfigStore};

const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Digits plus the separators commonly found in dialable numbers.
static PHONE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9()\s-]+$").unwrap());

/// Regroups a phone number's digits per a dash-separated size pattern
/// ("3-4-4"), optionally dropping the leading country-code group.
#[derive(Debug, Clone, Default)]
pub struct PhoneFormatter {
    options: PhoneOptions,
}

impl PhoneFormatter {
    pub fn new(options: PhoneOptions) -> Self {
        Self { options }
    }

    /// Build a formatter from the current `phones` configuration.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.options(Domain::Phones))
    }

    pub fn format(&self, input: &str) -> Envelope<String> {
        match self.regroup(input) {
            Ok(number) => Envelope::ok("Phone number successfully formatted", number),
            Err(err) => {
                debug!(%err, "phone number rejected");
                err.into()
            }
        }
    }

    fn regroup(&self, input: &str) -> Result<String> {
        if !PHONE_INPUT.is_match(input) {
            return Err(Error::InvalidPhoneInput);
        }

        let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
        let group_sizes = parse_group_sizes(&self.options.format);

        if group_sizes.iter().sum::<usize>() != digits.len() {
            return Err(Error::PhoneFormatMismatch);
        }
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(Error::PhoneLengthOutOfRange {
                min: MIN_DIGITS,
                max: MAX_DIGITS,
            });
        }

        let mut groups = Vec::with_capacity(group_sizes.len());
        let mut cursor = 0;
        for size in group_sizes {
            groups.push(digits[cursor..cursor + size].iter().collect::<String>());
            cursor += size;
        }
        // A national-format number sheds its country-code group.
        if !self.options.is_international && !groups.is_empty() {
            groups.remove(0);
        }

        Ok(groups.join("-"))
    }
}

/// Format `input` using the process-wide `phones` configuration, re-read
/// on every call.
pub fn format_phone(input: &str) -> Envelope<String> {
    PhoneFormatter::from_store(store::global()).format(input)
}

/// Group sizes from a "3-4-4" pattern. Unparsable segments contribute
/// nothing, which surfaces downstream as a format mismatch.
fn parse_group_sizes(format: &str) -> Vec<usize> {
    format
        .split('-')
        .filter_map(|part| part.parse::<usize>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_sizes() {
        assert_eq!(parse_group_sizes("3-4-4"), vec![3, 4, 4]);
        assert_eq!(parse_group_sizes("3-8"), vec![3, 8]);
        assert_eq!(parse_group_sizes(""), Vec::<usize>::new());
        assert_eq!(parse_group_sizes("3-x-4"), vec![3, 4]);
    }

    #[test]
    fn test_separators_in_input_are_tolerated() {
        let formatter = PhoneFormatter::new(PhoneOptions {
            format: "3-4-4".into(),
            is_international: true,
        });
        let envelope = formatter.format("(123) 456-78765");
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap(), "123-4567-8765");
    }

    #[test]
    fn test_unset_format_never_matches() {
        let formatter = PhoneFormatter::new(PhoneOptions::default());
        let envelope = formatter.format("12345678");
        assert!(!envelope.success);
        assert_eq!(
            envelope.message,
            "Format does not match no. of digits in phone number"
        );
    }
}
