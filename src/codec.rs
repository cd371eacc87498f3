//! JSON entry points and the ordered trial behind tagless unions.
//!
//! Unions that carry a discriminant field (`type`, `status`, `source`) dispatch on it through
//! serde's internally tagged representation. Unions without one are decoded with [`Trial`]:
//! every candidate is attempted against the whole raw value in declared order, and the first
//! one that decodes wins.

use std::any::type_name;

use serde::{
    Serializer,
    de::{self, DeserializeOwned},
    ser,
};

use crate::prelude::*;

/// Decode a raw JSON value, typically the `result` of a Bot API response.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    let type_name = type_name::<T>();
    serde_json::from_value(value)
        .inspect(|_| trace!(type_name, "Decoded"))
        .map_err(|source| decode_error(type_name, source))
}

/// Decode a JSON text.
pub fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    let type_name = type_name::<T>();
    serde_json::from_str(json)
        .inspect(|_| trace!(type_name, "Decoded"))
        .map_err(|source| decode_error(type_name, source))
}

/// Decode a raw response body.
pub fn decode_slice<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let type_name = type_name::<T>();
    serde_json::from_slice(body)
        .inspect(|_| trace!(type_name, "Decoded"))
        .map_err(|source| decode_error(type_name, source))
}

/// Encode a value into its wire representation.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|source| Error::Encode { type_name: type_name::<T>(), source })
}

fn decode_error(type_name: &'static str, source: serde_json::Error) -> Error {
    debug!(type_name, error = %source, "Failed to decode");
    Error::Decode { type_name, source }
}

/// Ordered trial decoding of a union.
///
/// Candidates are attempted in the order of [`Trial::or`] calls. Once a candidate matches,
/// the remaining ones are skipped. Failures of individual candidates are discarded.
#[must_use]
pub struct Trial<'v, T> {
    union: &'static str,
    value: &'v Value,
    matched: Option<T>,
}

impl<'v, T> Trial<'v, T> {
    pub const fn new(union: &'static str, value: &'v Value) -> Self {
        Self { union, value, matched: None }
    }

    /// Attempt the candidate `C`, wrapping it into the union on success.
    pub fn or<C: DeserializeOwned>(mut self, variant: impl FnOnce(C) -> T) -> Self {
        if self.matched.is_none() {
            match C::deserialize(self.value) {
                Ok(candidate) => self.matched = Some(variant(candidate)),
                Err(error) => {
                    trace!(union = self.union, candidate = type_name::<C>(), %error, "Rejected");
                }
            }
        }
        self
    }

    /// Commit to the matched candidate, or fail naming the union.
    pub fn finish<E: de::Error>(self) -> Result<T, E> {
        self.matched.ok_or_else(|| no_variant_matched(self.union))
    }
}

pub fn no_variant_matched<E: de::Error>(union: &str) -> E {
    E::custom(format_args!("no variant of {union} matched"))
}

/// Read the discriminant field of a raw object.
pub fn discriminant<'v, E: de::Error>(value: &'v Value, field: &'static str) -> Result<&'v str, E> {
    value.get(field).and_then(Value::as_str).ok_or_else(|| E::missing_field(field))
}

/// Serialize `inner` as an object with the discriminant `field` set to `tag`.
pub fn serialize_tagged<S, T>(
    serializer: S,
    field: &'static str,
    tag: &'static str,
    inner: &T,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match serde_json::to_value(inner).map_err(ser::Error::custom)? {
        Value::Object(mut object) => {
            object.insert(field.to_owned(), Value::from(tag));
            object.serialize(serializer)
        }
        _ => Err(ser::Error::custom(format_args!("`{tag}` must serialize into an object"))),
    }
}

/// Implement [`Deserialize`] for a newtype-variant enum by ordered trial of its variants.
macro_rules! deserialize_first_match {
    ($union:ident { $($variant:ident),+ $(,)? }) => {
        impl<'de> ::serde::Deserialize<'de> for $union {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value =
                    <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::Trial::new(stringify!($union), &value)
                    $(.or(Self::$variant))+
                    .finish()
            }
        }
    };
}

pub(crate) use deserialize_first_match;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Flat {
        x: i32,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Deep {
        x: i32,
        z: i32,
    }

    #[derive(Debug, PartialEq)]
    enum Shape {
        Flat(Flat),
        Deep(Deep),
    }

    deserialize_first_match!(Shape { Flat, Deep });

    #[test]
    fn test_first_match_wins_ok() -> Result {
        // Valid for both candidates.
        // language=json
        let shape: Shape = decode_str(r#"{"x": 1, "z": 2}"#)?;
        assert_eq!(shape, Shape::Flat(Flat { x: 1 }));
        Ok(())
    }

    #[test]
    fn test_later_candidate_ok() -> Result {
        #[derive(Debug, PartialEq)]
        enum Reversed {
            Deep(Deep),
            Flat(Flat),
        }
        deserialize_first_match!(Reversed { Deep, Flat });

        // language=json
        let shape: Reversed = decode_str(r#"{"x": 1, "z": 2}"#)?;
        assert_eq!(shape, Reversed::Deep(Deep { x: 1, z: 2 }));

        // language=json
        let shape: Reversed = decode_str(r#"{"x": 1}"#)?;
        assert_eq!(shape, Reversed::Flat(Flat { x: 1 }));
        Ok(())
    }

    #[test]
    fn test_exhausted_trial_fails() {
        // language=json
        let error = decode_str::<Shape>(r#"{"y": 1}"#).unwrap_err();
        assert!(matches!(error, Error::Decode { .. }));
        assert!(error.to_string().contains("no variant of Shape matched"), "{error}");
    }

    #[test]
    fn test_discriminant_missing_fails() {
        let value = serde_json::json!({"status": 1});
        let error = discriminant::<serde_json::Error>(&value, "status").unwrap_err();
        assert!(error.to_string().contains("missing field `status`"), "{error}");
    }

    #[test]
    fn test_serialize_tagged_ok() -> Result {
        #[derive(Serialize)]
        struct Inner {
            x: i32,
        }

        struct Tagged(Inner);

        impl Serialize for Tagged {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_tagged(serializer, "type", "inner", &self.0)
            }
        }

        assert_eq!(encode(&Tagged(Inner { x: 1 }))?, serde_json::json!({"type": "inner", "x": 1}));
        Ok(())
    }
}
