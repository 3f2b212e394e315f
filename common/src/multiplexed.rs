//! Fans several independent filters into one query string using `name$id` keys.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    id_map::{Id, MAX_ID},
    organism::OrganismConfig,
    query_params::QueryParams,
    variant_filter::{VariantFieldKind, VariantFilter},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiplexError {
    #[error("Key without an id suffix: {0}")]
    UnsuffixedKey(String),

    #[error("Key with an invalid id suffix: {0}")]
    InvalidId(String),

    #[error("Entry {0} mixes advanced and structured variant fields")]
    MixedVariantFields(Id),
}

/// Query parameters split into the unsuffixed part and one bucket per id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demultiplexed {
    pub shared: QueryParams,
    pub buckets: BTreeMap<Id, QueryParams>,
}

/// Splits `name$12` into `("name", 12)`. `None` when there is no `$`.
pub fn split_key(key: &str) -> Option<Result<(&str, Id), MultiplexError>> {
    let (name, suffix) = key.rsplit_once('$')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Err(MultiplexError::InvalidId(key.to_string())));
    }
    Some(
        suffix
            .parse::<Id>()
            .ok()
            .filter(|id| *id <= MAX_ID)
            .map(|id| (name, id))
            .ok_or_else(|| MultiplexError::InvalidId(key.to_string())),
    )
}

/// Groups suffixed keys into buckets; each bucket keeps its keys without the suffix.
///
/// A bucket that has seen a non-empty advanced query key and a non-empty
/// structured variant key fails the whole parse.
pub fn demultiplex(
    params: &QueryParams,
    config: &OrganismConfig,
    allow_unsuffixed: bool,
) -> Result<Demultiplexed, MultiplexError> {
    let mut result = Demultiplexed::default();
    let mut committed: BTreeMap<Id, VariantFieldKind> = BTreeMap::new();

    for (key, value) in params.iter() {
        let (name, id) = match split_key(key) {
            Some(split) => split?,
            None if allow_unsuffixed => {
                result.shared.append(key, value);
                continue;
            }
            None => return Err(MultiplexError::UnsuffixedKey(key.to_string())),
        };

        if !value.is_empty() {
            if let Some(kind) = VariantFilter::field_kind(name, config) {
                match committed.get(&id) {
                    Some(previous) if *previous != kind => {
                        return Err(MultiplexError::MixedVariantFields(id));
                    }
                    _ => {
                        committed.insert(id, kind);
                    }
                }
            }
        }
        result.buckets.entry(id).or_default().append(name, value);
    }
    Ok(result)
}

/// Makes sure an entry leaves at least one key in the URL, so it is still
/// there after parsing. The marker is the lineage key with an empty value.
pub fn ensure_present(params: &mut QueryParams, config: &OrganismConfig) {
    if params.is_empty() {
        params.append(config.lineage_field, "");
    }
}

/// Appends every entry's parameters with its `$id` suffix, in the given order.
pub fn multiplex(
    target: &mut QueryParams,
    entries: impl IntoIterator<Item = (Id, QueryParams)>,
    config: &OrganismConfig,
) {
    for (id, mut params) in entries {
        ensure_present(&mut params, config);
        target.extend(params.with_suffix(id));
    }
}
