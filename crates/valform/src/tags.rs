use tracing::debug;

use valform_types::{Domain, Envelope, Error, Result, TagOptions};

use crate::store::{self, ConfigStore};

/// Splits a string on whichever candidate separator occurs most often.
///
/// Candidates come from the configuration; with none configured, every
/// special character present in the input competes. Ties break toward the
/// earlier candidate, and an input containing no candidate at all comes
/// back whole as a single tag.
#[derive(Debug, Clone, Default)]
pub struct TagSplitter {
    options: TagOptions,
}

impl TagSplitter {
    pub fn new(options: TagOptions) -> Self {
        Self { options }
    }

    /// Build a splitter from the current `tags` configuration.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.options(Domain::Tags))
    }

    pub fn split(&self, input: &str) -> Envelope<Vec<String>> {
        match self.partition(input) {
            Ok(tags) => Envelope::ok("Tags array created successfully", tags),
            Err(err) => {
                debug!(%err, "separator configuration rejected");
                err.into()
            }
        }
    }

    fn partition(&self, input: &str) -> Result<Vec<String>> {
        let candidates = if self.options.separators.is_empty() {
            special_chars_in(input)
        } else {
            configured_candidates(&self.options.separators)?
        };

        // Strictly-greater comparison keeps the earlier candidate on ties.
        let mut winner: Option<(char, usize)> = None;
        for &sep in &candidates {
            let count = input.matches(sep).count();
            if count > 0 && winner.is_none_or(|(_, best)| count > best) {
                winner = Some((sep, count));
            }
        }

        Ok(match winner {
            Some((sep, _)) => input.split(sep).map(str::to_string).collect(),
            None => vec![input.to_string()],
        })
    }
}

/// Split `input` using the process-wide `tags` configuration, re-read on
/// every call.
pub fn split_tags(input: &str) -> Envelope<Vec<String>> {
    TagSplitter::from_store(store::global()).split(input)
}

/// Validate the configured separators: one character each, special only.
fn configured_candidates(separators: &[String]) -> Result<Vec<char>> {
    let mut candidates = Vec::with_capacity(separators.len());
    for separator in separators {
        let mut chars = separator.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(Error::SeparatorNotSingleChar);
        };
        if c.is_alphanumeric() {
            return Err(Error::SeparatorNotSpecial);
        }
        candidates.push(c);
    }
    Ok(candidates)
}

/// Default candidate set: special characters in first-appearance order.
fn special_chars_in(input: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for c in input.chars() {
        if !c.is_alphanumeric() && !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}
