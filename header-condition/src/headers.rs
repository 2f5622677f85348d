//! Read-only views over request headers.
//!
//! [`HeaderSource`] is the seam between the condition and whatever header
//! representation the host keeps. Name lookup semantics belong to the
//! implementation:
//!
//! | Source | Name lookup |
//! |--------|-------------|
//! | [`RequestHeaders`] | case-sensitive |
//! | `HashMap<String, Vec<String>>` | case-sensitive |
//! | [`http::HeaderMap`] | case-insensitive |

use std::collections::HashMap;

use http::HeaderMap;
use indexmap::IndexMap;

/// Anything that can list the values of a request header by name.
pub trait HeaderSource {
    /// Values recorded for `name`, in insertion order. Empty when absent.
    fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str>;
}

impl<T> HeaderSource for &T
where
    T: HeaderSource + ?Sized,
{
    fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        (**self).header_values(name)
    }
}

/// Values that are not visible ASCII are skipped, as they cannot be compared
/// as strings.
impl HeaderSource for HeaderMap {
    fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.get_all(name)
            .into_iter()
            .filter_map(|value| value.to_str().ok())
    }
}

impl<S> HeaderSource for HashMap<String, Vec<String>, S>
where
    S: std::hash::BuildHasher,
{
    fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.get(name).into_iter().flatten().map(String::as_str)
    }
}

/// Ordered multi-valued header map with case-sensitive names.
///
/// A header may repeat; each [`append`](Self::append) adds a value to the
/// sequence for that name.
///
/// ```
/// use header_condition::{HeaderSource, RequestHeaders};
///
/// let headers = RequestHeaders::from([("X-Env", "dev"), ("X-Env", "prod")]);
/// let values: Vec<_> = headers.header_values("X-Env").collect();
///
/// assert_eq!(values, ["dev", "prod"]);
/// assert_eq!(headers.header_values("x-env").count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    inner: IndexMap<String, Vec<String>>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` after any values already present for `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Replaces all values for `name`, returning the previous ones.
    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.inner
            .insert(name.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl HeaderSource for RequestHeaders {
    fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.inner.get(name).into_iter().flatten().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}

impl<K, V> Extend<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Converts an `http` header map, keeping only values readable as strings.
/// Names come out lowercase, as `http` stores them.
impl From<&HeaderMap> for RequestHeaders {
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
            .collect()
    }
}
