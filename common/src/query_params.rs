//! Ordered query parameters and the primitive codecs built on top of them.
//!
//! Every `parse_*` returns `None` when the parameter is missing or malformed,
//! every `serialize_*` leaves the parameters untouched for "nothing to say"
//! values, so that the rendered URL only carries what the user configured.
//!
//! String arrays are joined with `,` without escaping: an element that itself
//! contains a comma is split into two elements when parsed back.

use std::fmt::Display;

use url::form_urlencoded;

use crate::date_range::DateRange;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `a=1&b=2` (a leading `?` is tolerated), decoding percent escapes.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_url(url: &url::Url) -> Self {
        Self::parse(url.query().unwrap_or(""))
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn extend(&mut self, other: QueryParams) {
        self.pairs.extend(other.pairs);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns a copy where every key gets the `$id` suffix.
    pub fn with_suffix(&self, id: u32) -> QueryParams {
        let pairs = self
            .pairs
            .iter()
            .map(|(key, value)| (format!("{key}${id}"), value.clone()))
            .collect();
        Self { pairs }
    }
}

impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        write!(f, "{encoded}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let pairs = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { pairs }
    }
}

pub fn parse_string(params: &QueryParams, name: &str) -> Option<String> {
    params
        .get(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn serialize_string(params: &mut QueryParams, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        params.append(name, value);
    }
}

pub fn parse_string_array(params: &QueryParams, name: &str) -> Option<Vec<String>> {
    let value = params.get(name).filter(|value| !value.is_empty())?;
    Some(value.split(',').map(str::to_string).collect())
}

pub fn serialize_string_array(params: &mut QueryParams, name: &str, values: &[String]) {
    if !values.is_empty() {
        params.append(name, values.join(","));
    }
}

pub fn parse_integer(params: &QueryParams, name: &str) -> Option<i64> {
    params.get(name)?.parse::<i64>().ok()
}

pub fn serialize_integer(params: &mut QueryParams, name: &str, value: Option<i64>) {
    if let Some(value) = value {
        params.append(name, value.to_string());
    }
}

pub fn parse_date_range(params: &QueryParams, name: &str) -> Option<DateRange> {
    let value = params.get(name)?;
    match value.parse::<DateRange>() {
        Ok(range) => Some(range),
        Err(err) => {
            tracing::debug!("ignoring date range parameter {name}: {err}");
            None
        }
    }
}

pub fn serialize_date_range(
    params: &mut QueryParams,
    name: &str,
    value: &DateRange,
    default: &DateRange,
) {
    if value != default {
        params.append(name, value.to_string());
    }
}
