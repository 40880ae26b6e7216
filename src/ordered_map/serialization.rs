use alloc::borrow::{Cow, ToOwned};
use alloc::string::String;
use core::any;
use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use serde::de::value::CowStrDeserializer;
use serde::de::{self, DeserializeSeed, Deserializer, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;
use serde::ser::{self, Impossible, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::OrderedMap;
use crate::Error;

/// Upper bound on the capacity reserved from an untrusted length hint.
const MAX_PREALLOCATION: usize = 4096;

/// Serializes the map as an object whose members appear in insertion order.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedKeyType`] if a key does not serialize as a
/// string.
///
/// The check inspects each key as it is written, not the key type, so an
/// empty map serializes as `{}` whatever `K` is.
impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            if key.serialize(StringKeyCheck).is_err() {
                let type_name = any::type_name::<K>();
                log::debug!("rejecting ordered map key of type `{type_name}`");
                return Err(ser::Error::custom(Error::unsupported_key_type(type_name)));
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Deserializes an object, keeping its members in the order they appear.
///
/// Keys are read as strings and `K` is built from that string, so only key
/// types that deserialize from a string are accepted. A repeated member keeps
/// the position of its first occurrence and the value of its last.
///
/// In human-readable formats `null` yields an empty map.
impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let visitor = OrderedMapVisitor { marker: PhantomData };
        if deserializer.is_human_readable() {
            deserializer.deserialize_option(visitor)
        } else {
            deserializer.deserialize_map(visitor)
        }
    }
}

struct OrderedMapVisitor<K, V> {
    marker: PhantomData<fn() -> OrderedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with string keys")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedMap::new())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedMap::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0).min(MAX_PREALLOCATION));
        while let Some(key) = access.next_key_seed(StringKey { marker: PhantomData })? {
            let value = access.next_value()?;
            map.insert(key, value);
        }
        log::trace!("deserialized ordered map with {} entries", map.len());
        Ok(map)
    }
}

/// Reads a map key as a string, then builds `K` from that string.
struct StringKey<K> {
    marker: PhantomData<fn() -> K>,
}

impl<'de, K> DeserializeSeed<'de> for StringKey<K>
where
    K: Deserialize<'de>,
{
    type Value = K;

    fn deserialize<D>(self, deserializer: D) -> Result<K, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = deserializer.deserialize_str(KeyTextVisitor)?;
        K::deserialize(KeyDeserializer {
            key,
            marker: PhantomData,
        })
    }
}

/// Captures key text, borrowing from the input when the format allows it.
struct KeyTextVisitor;

impl<'de> Visitor<'de> for KeyTextVisitor {
    type Value = Cow<'de, str>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string key")
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Cow::Borrowed(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Cow::Owned(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Cow::Owned(v))
    }
}

/// Hands a map key that was read as a string to `K`.
///
/// Borrowed text stays borrowed, so `&str` keys work whenever the input holds
/// the key unescaped. Newtype structs around a string and unit enum variants
/// are supported, in line with what [`StringKeyCheck`] lets through on the way
/// out.
struct KeyDeserializer<'de, E> {
    key: Cow<'de, str>,
    marker: PhantomData<E>,
}

impl<'de, E> Deserializer<'de> for KeyDeserializer<'de, E>
where
    E: de::Error,
{
    type Error = E;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        match self.key {
            Cow::Borrowed(key) => visitor.visit_borrowed_str(key),
            Cow::Owned(key) => visitor.visit_string(key),
        }
    }

    fn deserialize_newtype_struct<V>(self, _: &'static str, visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(self, name: &'static str, variants: &'static [&'static str], visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        let key: CowStrDeserializer<'de, E> = self.key.into_deserializer();
        key.deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

/// Raised by [`StringKeyCheck`] for anything that is not a string.
#[derive(Debug)]
struct NotAString;

impl fmt::Display for NotAString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map key does not serialize as a string")
    }
}

impl ser::StdError for NotAString {}

impl ser::Error for NotAString {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        NotAString
    }
}

/// A serializer that accepts exactly the values an object key can hold.
///
/// Strings, chars and unit enum variants pass, newtype structs are looked
/// through, everything else fails.
struct StringKeyCheck;

macro_rules! reject {
    ($($method:ident($($arg:ty),*);)*) => {
        $(
            fn $method(self $(, _: $arg)*) -> Result<(), NotAString> {
                Err(NotAString)
            }
        )*
    };
}

impl Serializer for StringKeyCheck {
    type Ok = ();
    type Error = NotAString;

    type SerializeSeq = Impossible<(), NotAString>;
    type SerializeTuple = Impossible<(), NotAString>;
    type SerializeTupleStruct = Impossible<(), NotAString>;
    type SerializeTupleVariant = Impossible<(), NotAString>;
    type SerializeMap = Impossible<(), NotAString>;
    type SerializeStruct = Impossible<(), NotAString>;
    type SerializeStructVariant = Impossible<(), NotAString>;

    reject! {
        serialize_bool(bool);
        serialize_i8(i8);
        serialize_i16(i16);
        serialize_i32(i32);
        serialize_i64(i64);
        serialize_i128(i128);
        serialize_u8(u8);
        serialize_u16(u16);
        serialize_u32(u32);
        serialize_u64(u64);
        serialize_u128(u128);
        serialize_f32(f32);
        serialize_f64(f64);
        serialize_bytes(&[u8]);
        serialize_none();
        serialize_unit();
        serialize_unit_struct(&'static str);
    }

    fn serialize_char(self, _: char) -> Result<(), NotAString> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<(), NotAString> {
        Ok(())
    }

    fn collect_str<T>(self, _: &T) -> Result<(), NotAString>
    where
        T: ?Sized + fmt::Display,
    {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Result<(), NotAString> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _: &'static str, value: &T) -> Result<(), NotAString>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_some<T>(self, _: &T) -> Result<(), NotAString>
    where
        T: ?Sized + Serialize,
    {
        Err(NotAString)
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<(), NotAString>
    where
        T: ?Sized + Serialize,
    {
        Err(NotAString)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, NotAString> {
        Err(NotAString)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, NotAString> {
        Err(NotAString)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeTupleStruct, NotAString> {
        Err(NotAString)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, NotAString> {
        Err(NotAString)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, NotAString> {
        Err(NotAString)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct, NotAString> {
        Err(NotAString)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, NotAString> {
        Err(NotAString)
    }
}
