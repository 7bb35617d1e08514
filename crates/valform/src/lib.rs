//! valform: configurable validation and normalization for scalar values.
//!
//! # Overview
//!
//! The toolkit is a set of independent formatters and validators — numbers,
//! phone strings, tag strings, free-form strings, URLs, and passwords —
//! each reading its own named configuration domain from a process-wide
//! store on every call. Behavior can therefore be reconfigured at runtime
//! without re-instantiating anything. Every function returns the same
//! envelope shape: `success`, a human-readable `message`, and `data`
//! present exactly when the call succeeded.
//!
//! # Quickstart
//!
//! ```
//! use valform::{Domain, NumberFormatOptions, format_number, set_config};
//!
//! set_config(
//!     Domain::NumberFormatter,
//!     &NumberFormatOptions {
//!         overall_digit_limit: Some(2),
//!         decimal_digit_limit: Some(2),
//!     },
//! );
//!
//! let envelope = format_number(234);
//! assert_eq!(envelope.data.unwrap().number, "0.2K");
//! ```
//!
//! Callers that want isolation instead of process-wide state can hold a
//! formatter directly; it owns its options and touches no shared state:
//!
//! ```
//! use valform::{NumberFormatOptions, number::NumberFormatter};
//!
//! let formatter = NumberFormatter::new(NumberFormatOptions {
//!     overall_digit_limit: Some(3),
//!     decimal_digit_limit: Some(2),
//! });
//! assert_eq!(formatter.format(234234).data.unwrap().number, "234K");
//! ```

pub mod number;
pub mod password;
pub mod phone;
pub mod special_chars;
pub mod store;
pub mod tags;
pub mod url;

// Re-export the shared type vocabulary
pub use valform_types::{
    Domain, Envelope, Error, FormattedNumber, NumberFormatOptions, PasswordOptions,
    PasswordReport, PhoneOptions, RuleCheck, SpecialCharsOptions, StrengthTier, TagOptions,
    UrlOptions, default_strength_tiers,
};

// Public facade
pub use number::{NumberFormatter, format_number};
pub use password::{PasswordValidator, validate_password};
pub use phone::{PhoneFormatter, format_phone};
pub use special_chars::{SpecialCharsModifier, strip_special_chars};
pub use store::{ConfigStore, global, set_config};
pub use tags::{TagSplitter, split_tags};
pub use self::url::{UrlValidator, is_url_valid, validate_url};
