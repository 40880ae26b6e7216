use alloc::string::{String, ToString};
use core::fmt;

/// Leading text of the [`Error::UnsupportedKeyType`] message.
///
/// The message travels through the encoder as a plain string, so the `json`
/// facade recognises it by this prefix.
pub(crate) const UNSUPPORTED_KEY_TYPE: &str = "unsupported key type `";

/// Trailing text of the [`Error::UnsupportedKeyType`] message.
const UNSUPPORTED_KEY_TYPE_SUFFIX: &str = "`, map keys must serialize as strings";

/// Errors raised while encoding or decoding an ordered container.
///
/// Lookups never produce an error: a missing key is reported through `Option`
/// or `bool` by the container methods themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A map was serialized whose key type does not encode as a string.
    UnsupportedKeyType {
        /// Name of the offending key type, as reported by [`core::any::type_name`].
        type_name: String,
    },

    /// The input text was not a well-formed object or array of the declared
    /// key and value types.
    MalformedInput {
        /// What the decoder rejected.
        message: String,
        /// One-based line of the failure, or 0 when unknown.
        line: usize,
        /// One-based column of the failure, or 0 when unknown.
        column: usize,
    },

    /// A value's own `Serialize` implementation failed.
    Encode {
        /// The failure reported by the value.
        message: String,
    },
}

impl Error {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn unsupported_key_type(type_name: &str) -> Self {
        Error::UnsupportedKeyType {
            type_name: type_name.to_string(),
        }
    }

    /// Recovers an error from the message it was flattened into by an encoder.
    ///
    /// Only a message that is exactly the rendering of
    /// [`Error::UnsupportedKeyType`] is mapped back to it. A value whose own
    /// `Serialize` error reproduces that text word for word is misreported,
    /// anything else becomes [`Error::Encode`].
    #[cfg_attr(not(feature = "json"), allow(dead_code))]
    pub(crate) fn from_encode_message(message: String) -> Self {
        match message
            .strip_prefix(UNSUPPORTED_KEY_TYPE)
            .and_then(|rest| rest.strip_suffix(UNSUPPORTED_KEY_TYPE_SUFFIX))
            .filter(|type_name| !type_name.is_empty() && !type_name.contains('`'))
        {
            Some(type_name) => Error::unsupported_key_type(type_name),
            None => Error::Encode { message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedKeyType { type_name } => {
                write!(f, "{UNSUPPORTED_KEY_TYPE}{type_name}{UNSUPPORTED_KEY_TYPE_SUFFIX}")
            }
            Error::MalformedInput { message, .. } => write!(f, "malformed input: {message}"),
            Error::Encode { message } => write!(f, "failed to encode value: {message}"),
        }
    }
}

impl core::error::Error for Error {}
