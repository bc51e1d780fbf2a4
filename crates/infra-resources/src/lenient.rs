//! Lenient scalar decoding
//!
//! Secrets are rendered into JSON string positions, so a templated port or
//! timeout arrives as `"5433"` rather than `5433`. Fields marked with
//! `#[serde(deserialize_with = "infra_resources::lenient::deserialize")]`
//! accept either form. An empty string decodes to the zero value.

use serde::Deserialize;
use serde::de::{self, Deserializer};

/// Scalars that may also be written as strings.
pub trait Lenient: Sized + Default {
    fn parse_text(text: &str) -> Option<Self>;
}

macro_rules! lenient_integers {
    ($($ty:ty),*) => {
        $(
            impl Lenient for $ty {
                fn parse_text(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

lenient_integers!(u16, u32, u64, i32, i64, usize);

impl Lenient for bool {
    fn parse_text(text: &str) -> Option<Self> {
        match text {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
            _ => None,
        }
    }
}

/// Decode a `T` from its native JSON form or from a string.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient + Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Native(T),
        Text(String),
    }

    match Repr::<T>::deserialize(deserializer)? {
        Repr::Native(value) => Ok(value),
        Repr::Text(text) if text.trim().is_empty() => Ok(T::default()),
        Repr::Text(text) => T::parse_text(text.trim()).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid value {text:?}, expected {}",
                std::any::type_name::<T>()
            ))
        }),
    }
}
