//! Boundary representation of an outcome.
//!
//! An outcome serializes as `{"isSuccess": .., "errors": [..], "value": ..}`
//! with `value` present only on success. Deserialization rebuilds the
//! outcome through [`Outcome::from_parts`], so a payload claiming success
//! with errors, or failure without them, is rejected.
use alloc::vec::Vec;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::outcome::{Outcome, State};
use crate::types::Error;

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.state {
            State::Success(value) => {
                let mut state = serializer.serialize_struct("Outcome", 3)?;
                state.serialize_field("isSuccess", &true)?;
                state.serialize_field("errors", &[] as &[Error])?;
                state.serialize_field("value", value)?;
                state.end()
            },
            State::Failure(errors) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("isSuccess", &false)?;
                state.serialize_field("errors", errors.as_slice())?;
                state.end()
            },
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
struct OutcomeRepr<T> {
    is_success: bool,
    #[serde(default)]
    errors: Vec<Error>,
    #[serde(default = "absent", deserialize_with = "present")]
    value: Option<T>,
}

fn absent<T>() -> Option<T> {
    None
}

// A present `value` field is always `Some`, even when it holds `null` for `()`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OutcomeRepr::<T>::deserialize(deserializer)?;
        let value = match (repr.is_success, repr.value) {
            (true, None) => return Err(de::Error::missing_field("value")),
            (false, Some(_)) => {
                return Err(de::Error::custom("a failed outcome cannot carry a value"))
            },
            (_, value) => value,
        };
        Outcome::from_parts(value, repr.errors).map_err(de::Error::custom)
    }
}
