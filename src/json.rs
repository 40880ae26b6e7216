//! JSON encoding and decoding with errors mapped onto [`Error`].
//!
//! These are thin wrappers over `serde_json`. They work for any serde type, so
//! ordered containers nested inside other structures are covered too.
//!
//! ```
//! use insertion_order::{json, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! map.insert("a", "aa");
//! map.insert("b", "bb");
//! map.insert("c", "cc");
//! assert_eq!(json::to_string(&map)?, r#"{"a":"aa","b":"bb","c":"cc"}"#);
//!
//! let map: OrderedMap<String, String> = json::from_str(r#"{"c":"cc","b":"bb","a":"aa"}"#)?;
//! assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["c", "b", "a"]);
//! # Ok::<(), insertion_order::Error>(())
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Serializes `value` as a JSON string.
///
/// # Errors
///
/// Returns [`Error::UnsupportedKeyType`] if an [`OrderedMap`](crate::OrderedMap)
/// with non-string keys is encountered, and [`Error::Encode`] if any other
/// value fails to serialize.
pub fn to_string<T>(value: &T) -> Result<String, Error>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(encode_error)
}

/// Serializes `value` as JSON bytes.
///
/// # Errors
///
/// Same as [`to_string`].
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: ?Sized + Serialize,
{
    serde_json::to_vec(value).map_err(encode_error)
}

/// Deserializes a `T` from JSON text.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the text is not valid JSON, or does not
/// match the shape and types of `T`.
pub fn from_str<'a, T>(s: &'a str) -> Result<T, Error>
where
    T: Deserialize<'a>,
{
    serde_json::from_str(s).map_err(decode_error)
}

/// Deserializes a `T` from JSON bytes.
///
/// # Errors
///
/// Same as [`from_str`].
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T, Error>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(v).map_err(decode_error)
}

/// Deserializes JSON text into an existing value.
///
/// `place` is only overwritten once the whole input decoded successfully; on
/// error it is left exactly as it was.
///
/// # Errors
///
/// Same as [`from_str`].
///
/// # Examples
///
/// ```
/// use insertion_order::{json, Error, OrderedSet};
///
/// let mut set = OrderedSet::from(["a", "b", "c"].map(String::from));
/// assert!(matches!(json::from_str_in_place("--...{", &mut set), Err(Error::MalformedInput { .. })));
/// assert_eq!(set.len(), 3);
///
/// json::from_str_in_place(r#"["d", "c", "a"]"#, &mut set)?;
/// assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), ["d", "c", "a"]);
/// # Ok::<(), Error>(())
/// ```
pub fn from_str_in_place<'a, T>(s: &'a str, place: &mut T) -> Result<(), Error>
where
    T: Deserialize<'a>,
{
    *place = from_str(s)?;
    Ok(())
}

fn encode_error(error: serde_json::Error) -> Error {
    Error::from_encode_message(error.to_string())
}

fn decode_error(error: serde_json::Error) -> Error {
    log::trace!("rejecting malformed json: {error}");
    Error::MalformedInput {
        message: error.to_string(),
        line: error.line(),
        column: error.column(),
    }
}
