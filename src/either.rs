use serde::{Deserializer, de::DeserializeOwned};

use crate::{codec::Trial, prelude::*};

/// Exactly one of two values.
///
/// There is no wrapper on the wire: `Either::Left(a)` encodes exactly as `a` would.
/// Decoding tries `L` first, then `R`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(left) => Either::Right(left),
            Self::Right(right) => Either::Left(right),
        }
    }

    /// Collapse into a single value.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
        }
    }
}

impl<T> Either<T, T> {
    pub fn into_inner(self) -> T {
        self.either(|inner| inner, |inner| inner)
    }
}

impl<'de, L, R> Deserialize<'de> for Either<L, R>
where
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Trial::new("Either", &value).or(Self::Left).or(Self::Right).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode_str, encode},
        objects::Message,
    };

    #[test]
    fn test_encode_without_wrapper_ok() -> Result {
        let either = Either::<i64, String>::Left(42);
        assert_eq!(serde_json::to_string(&either).unwrap(), serde_json::to_string(&42).unwrap());
        assert_eq!(either.into_left(), Some(42));

        let either = Either::<i64, String>::Right("@channel".to_owned());
        assert_eq!(encode(&either)?, encode("@channel")?);
        Ok(())
    }

    #[test]
    fn test_decode_message_or_true_ok() -> Result {
        let either: Either<Message, bool> = decode_str("true")?;
        assert_eq!(either, Either::Right(true));

        // language=json
        let either: Either<Message, bool> = decode_str(
            r#"{"message_id": 7, "date": 1700000000, "chat": {"id": 1, "type": "private"}}"#,
        )?;
        assert_eq!(either.left().map(|message| message.id), Some(7));
        Ok(())
    }

    #[test]
    fn test_left_wins_when_both_match_ok() -> Result {
        let either: Either<i64, f64> = decode_str("5")?;
        assert_eq!(either, Either::Left(5));

        let either: Either<i64, f64> = decode_str("5.5")?;
        assert_eq!(either, Either::Right(5.5));
        Ok(())
    }

    #[test]
    fn test_neither_side_fails() {
        let error = decode_str::<Either<i64, bool>>(r#""text""#).unwrap_err();
        assert!(error.to_string().contains("no variant of Either matched"), "{error}");
    }

    #[test]
    fn test_into_inner_ok() {
        assert_eq!(Either::<u8, u8>::Right(3).flip().into_inner(), 3);
    }
}
