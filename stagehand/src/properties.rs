use std::{fmt::Display, str::FromStr};

use crate::{Error, Result};

/// Reads raw property values by key.
///
/// Implemented for any `Fn(&str) -> Option<String>`, so a `HashMap` lookup
/// or `std::env::var` can feed the `from_lookup` constructors.
pub trait PropertySource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> PropertySource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Process environment as a [`PropertySource`].
pub(crate) fn environment(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Raw value of `key`, treating blank values as unset.
pub(crate) fn raw(source: &impl PropertySource, key: &str) -> Option<String> {
    source
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parsed value of `key`, `None` when unset.
pub(crate) fn parsed<T>(source: &impl PropertySource, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    raw(source, key)
        .map(|value| {
            value.parse::<T>().map_err(|err| {
                tracing::debug!(key, %value, error = %err, "Invalid property value");
                Error::invalid_property(key, value.clone())
            })
        })
        .transpose()
}

/// Comma-separated list value of `key`, `None` when unset.
pub(crate) fn list(source: &impl PropertySource, key: &str) -> Option<Vec<String>> {
    raw(source, key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> impl PropertySource {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn blank_values_are_unset() {
        let src = source(&[("A", "  ")]);
        assert_eq!(raw(&src, "A"), None);
        assert_eq!(parsed::<u64>(&src, "A").unwrap(), None);
    }

    #[test]
    fn parse_failure_names_the_key() {
        let src = source(&[("TIMEOUT", "soon")]);
        let err = parsed::<u64>(&src, "TIMEOUT").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidProperty { key, value } if key == "TIMEOUT" && value == "soon"
        ));
    }

    #[test]
    fn lists_split_on_commas() {
        let src = source(&[("H", "a, b,,c")]);
        assert_eq!(list(&src, "H").unwrap(), vec!["a", "b", "c"]);
    }
}
