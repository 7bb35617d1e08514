use thiserror::Error;

use crate::envelope::Envelope;

/// Result type for valform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a formatter or validator can reject its input.
///
/// The display strings double as the user-facing envelope messages, so
/// changing one changes the public contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Input must be a numeric value")]
    NotNumeric,

    #[error("Input should be a string")]
    NotString,

    #[error("Phone number input is invalid")]
    InvalidPhoneInput,

    #[error("Format does not match no. of digits in phone number")]
    PhoneFormatMismatch,

    #[error("Phone number length can contain only {min}-{max} digits")]
    PhoneLengthOutOfRange { min: usize, max: usize },

    #[error("Separators may only include one character each.")]
    SeparatorNotSingleChar,

    #[error("Separators may only include special characters.")]
    SeparatorNotSpecial,

    #[error("URL is invalid")]
    InvalidUrl,
}

impl<T> From<Error> for Envelope<T> {
    fn from(err: Error) -> Self {
        Envelope::fail(err.to_string())
    }
}
