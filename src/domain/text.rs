//! Shared rule for bounded, trimmed text values.
use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::outcome::{success, Outcome};
use crate::types::Error;

/// Trims `raw`, then checks emptiness and length independently.
///
/// Both rules always run; a value object built on this reports every
/// violation at once.
pub(crate) fn bounded(raw: &str, max: usize, empty: Error, too_long: Error) -> Outcome<String> {
    let trimmed = raw.trim();
    crate::combine![
        success(trimmed).ensure(|value| !value.is_empty(), empty),
        success(trimmed).ensure(|value| value.chars().count() <= max, too_long),
    ]
    .then_map(|| trimmed.to_owned())
}
