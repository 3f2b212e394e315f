//! Curated variant collections from the external catalog, and their conversion
//! into variant filters.

use serde::{Deserialize, Serialize};

use crate::{
    error::CodecError,
    variant_filter::{MutationQuery, SimpleVariantQuery, VariantFilter},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub variants: Vec<CollectionVariant>,
}

/// `query` is a JSON document stored verbatim by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionVariant {
    pub name: String,
    pub query: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CollectionVariant {
    pub fn variant_filter(&self) -> Result<VariantFilter, CodecError> {
        resolve_collection_query(&self.query)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum MutationList {
    List(Vec<String>),
    Joined(String),
}

impl MutationList {
    fn into_vec(self) -> Vec<String> {
        match self {
            MutationList::List(values) => values,
            MutationList::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogQuery {
    variant_query: Option<String>,
    pango_lineage: Option<String>,
    nextclade_pango_lineage: Option<String>,
    nuc_mutations: Option<MutationList>,
    aa_mutations: Option<MutationList>,
    nuc_insertions: Option<MutationList>,
    aa_insertions: Option<MutationList>,
}

fn list(values: Option<MutationList>) -> Vec<String> {
    values.map(MutationList::into_vec).unwrap_or_default()
}

/// A non-empty `variantQuery` makes an advanced query; otherwise the lineage is
/// `nextcladePangoLineage`, falling back to `pangoLineage`.
pub fn resolve_collection_query(raw_query: &str) -> Result<VariantFilter, CodecError> {
    let query: CatalogQuery = serde_json::from_str(raw_query)?;
    if let Some(variant_query) = query.variant_query.filter(|variant_query| !variant_query.is_empty()) {
        return Ok(VariantFilter::advanced(&variant_query));
    }
    Ok(VariantFilter::Simple(SimpleVariantQuery {
        lineage: query.nextclade_pango_lineage.or(query.pango_lineage),
        mutations: MutationQuery {
            nucleotide_mutations: list(query.nuc_mutations),
            amino_acid_mutations: list(query.aa_mutations),
            nucleotide_insertions: list(query.nuc_insertions),
            amino_acid_insertions: list(query.aa_insertions),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pango_lineage_becomes_the_lineage() {
        assert_eq!(
            resolve_collection_query(r#"{"pangoLineage":"BA.5"}"#).unwrap(),
            VariantFilter::Simple(SimpleVariantQuery {
                lineage: Some("BA.5".to_string()),
                mutations: MutationQuery::default(),
            })
        );
    }

    #[test]
    fn variant_query_becomes_advanced() {
        assert_eq!(
            resolve_collection_query(r#"{"variantQuery":"nucMutations:A23T"}"#).unwrap(),
            VariantFilter::advanced("nucMutations:A23T")
        );
    }

    #[test]
    fn variant_query_wins_over_other_fields() {
        assert_eq!(
            resolve_collection_query(r#"{"variantQuery":"XBB*","pangoLineage":"BA.5"}"#).unwrap(),
            VariantFilter::advanced("XBB*")
        );
    }

    #[test]
    fn empty_variant_query_falls_back_to_lineage() {
        assert_eq!(
            resolve_collection_query(r#"{"variantQuery":"","pangoLineage":"BA.5"}"#).unwrap(),
            VariantFilter::lineage("BA.5")
        );
        assert_eq!(resolve_collection_query(r#"{"variantQuery":""}"#).unwrap(), VariantFilter::default());
    }

    #[test]
    fn nextclade_lineage_is_preferred() {
        let filter =
            resolve_collection_query(r#"{"pangoLineage":"BA.5","nextcladePangoLineage":"BA.5.2"}"#).unwrap();
        assert_eq!(filter, VariantFilter::lineage("BA.5.2"));
    }

    #[test]
    fn mutation_lists_accept_arrays_and_joined_strings() {
        let filter = resolve_collection_query(
            r#"{"nucMutations":["A23T","C241T"],"aaMutations":"S:E484K, S:N501Y","nucInsertions":[],"aaInsertions":["ins_S:214:EPE"]}"#,
        )
        .unwrap();
        assert_eq!(
            filter,
            VariantFilter::Simple(SimpleVariantQuery {
                lineage: None,
                mutations: MutationQuery {
                    nucleotide_mutations: vec!["A23T".to_string(), "C241T".to_string()],
                    amino_acid_mutations: vec!["S:E484K".to_string(), "S:N501Y".to_string()],
                    nucleotide_insertions: vec![],
                    amino_acid_insertions: vec!["ins_S:214:EPE".to_string()],
                },
            })
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            resolve_collection_query("{pangoLineage: BA.5"),
            Err(CodecError::MalformedCollectionQuery(_))
        ));
        assert!(matches!(
            resolve_collection_query("42"),
            Err(CodecError::MalformedCollectionQuery(_))
        ));
    }

    #[test]
    fn catalog_payload_deserializes() {
        let collections: Vec<Collection> = serde_json::from_str(
            r#"[{"id":1,"title":"Variants under monitoring","variants":[{"name":"KP.3","query":"{\"pangoLineage\":\"KP.3*\"}"}]}]"#,
        )
        .unwrap();
        assert_eq!(collections[0].description, None);
        assert_eq!(
            collections[0].variants[0].variant_filter().unwrap(),
            VariantFilter::lineage("KP.3*")
        );
    }
}
