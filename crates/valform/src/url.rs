use ::url::Url;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use valform_types::{Domain, Envelope, Error, Result, UrlOptions};

use crate::store::{self, ConfigStore};

/// Optional http/https scheme, dotted domain or IPv4 address, optional
/// port, path, query and fragment. Whole-string, case-insensitive.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .unwrap()
});

/// Syntactic URL validation with optional canonicalization: host plus
/// path, host alone, or origin, depending on the configured flags.
#[derive(Debug, Clone, Default)]
pub struct UrlValidator {
    options: UrlOptions,
}

impl UrlValidator {
    pub fn new(options: UrlOptions) -> Self {
        Self { options }
    }

    /// Build a validator from the current `URLValidator` configuration.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.options(Domain::UrlValidator))
    }

    pub fn validate(&self, input: &str) -> Envelope<String> {
        match self.canonicalize(input) {
            Ok(output) => Envelope::ok("Successfully modified URL", output),
            Err(err) => {
                debug!(%err, "url rejected");
                err.into()
            }
        }
    }

    fn canonicalize(&self, input: &str) -> Result<String> {
        if !URL_PATTERN.is_match(input) {
            return Err(Error::InvalidUrl);
        }
        let UrlOptions {
            domain_only,
            path_included,
        } = self.options;

        // The default flag pair leaves a valid URL untouched.
        if !domain_only && path_included {
            return Ok(input.to_string());
        }

        let parsed = parse_absolute(input)?;
        let host = parsed.host_str().ok_or(Error::InvalidUrl)?;

        Ok(if domain_only && path_included {
            let query = parsed.query().map(|q| format!("?{q}")).unwrap_or_default();
            format!("{host}{}{query}", parsed.path())
        } else if domain_only {
            host.to_string()
        } else {
            parsed.origin().ascii_serialization()
        })
    }
}

/// Canonicalize `input` using the process-wide `URLValidator`
/// configuration, re-read on every call.
pub fn validate_url(input: &str) -> Envelope<String> {
    UrlValidator::from_store(store::global()).validate(input)
}

/// Plain syntactic validity check, independent of canonicalization flags.
pub fn is_url_valid(input: &str) -> Envelope<bool> {
    if URL_PATTERN.is_match(input) {
        Envelope::ok("URL is valid", true)
    } else {
        Error::InvalidUrl.into()
    }
}

/// The validity pattern accepts scheme-less URLs; parsing assumes https
/// for those so host and path can still be decomposed.
fn parse_absolute(input: &str) -> Result<Url> {
    let lower = input.to_ascii_lowercase();
    let attempt = if lower.starts_with("http://") || lower.starts_with("https://") {
        Url::parse(input)
    } else {
        Url::parse(&format!("https://{input}"))
    };
    attempt.map_err(|_| Error::InvalidUrl)
}
