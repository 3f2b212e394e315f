//! Variant filters: either an advanced free-text query or structured lineage/mutation fields.

use serde::{Deserialize, Serialize};

use crate::{
    lapis_filter::LapisFilter,
    organism::OrganismConfig,
    query_params::{
        QueryParams, parse_string, parse_string_array, serialize_string, serialize_string_array,
    },
};

pub const NUCLEOTIDE_MUTATIONS: &str = "nucleotideMutations";
pub const AMINO_ACID_MUTATIONS: &str = "aminoAcidMutations";
pub const NUCLEOTIDE_INSERTIONS: &str = "nucleotideInsertions";
pub const AMINO_ACID_INSERTIONS: &str = "aminoAcidInsertions";

pub const MUTATION_FIELDS: [&str; 4] = [
    NUCLEOTIDE_MUTATIONS,
    AMINO_ACID_MUTATIONS,
    NUCLEOTIDE_INSERTIONS,
    AMINO_ACID_INSERTIONS,
];

/// Mutation and insertion codes such as `A23T` or `S:E484K`. Empty lists mean "absent".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutationQuery {
    pub nucleotide_mutations: Vec<String>,
    pub amino_acid_mutations: Vec<String>,
    pub nucleotide_insertions: Vec<String>,
    pub amino_acid_insertions: Vec<String>,
}

impl MutationQuery {
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, values)| values.is_empty())
    }

    fn fields(&self) -> [(&'static str, &Vec<String>); 4] {
        [
            (NUCLEOTIDE_MUTATIONS, &self.nucleotide_mutations),
            (AMINO_ACID_MUTATIONS, &self.amino_acid_mutations),
            (NUCLEOTIDE_INSERTIONS, &self.nucleotide_insertions),
            (AMINO_ACID_INSERTIONS, &self.amino_acid_insertions),
        ]
    }

    pub fn parse(params: &QueryParams) -> Self {
        let list = |name: &str| parse_string_array(params, name).unwrap_or_default();
        Self {
            nucleotide_mutations: list(NUCLEOTIDE_MUTATIONS),
            amino_acid_mutations: list(AMINO_ACID_MUTATIONS),
            nucleotide_insertions: list(NUCLEOTIDE_INSERTIONS),
            amino_acid_insertions: list(AMINO_ACID_INSERTIONS),
        }
    }

    pub fn render(&self, params: &mut QueryParams) {
        for (name, values) in self.fields() {
            serialize_string_array(params, name, values);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedVariantQuery {
    pub variant_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleVariantQuery {
    pub lineage: Option<String>,
    pub mutations: MutationQuery,
}

impl SimpleVariantQuery {
    pub fn lineage(lineage: &str) -> Self {
        Self {
            lineage: Some(lineage.to_string()),
            mutations: MutationQuery::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lineage.is_none() && self.mutations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantFilter {
    Advanced(AdvancedVariantQuery),
    Simple(SimpleVariantQuery),
}

impl Default for VariantFilter {
    fn default() -> Self {
        VariantFilter::Simple(SimpleVariantQuery::default())
    }
}

/// Whether a URL key belongs to the advanced or the structured member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFieldKind {
    Advanced,
    Simple,
}

impl VariantFilter {
    pub fn advanced(query: &str) -> Self {
        VariantFilter::Advanced(AdvancedVariantQuery {
            variant_query: query.to_string(),
        })
    }

    pub fn lineage(lineage: &str) -> Self {
        VariantFilter::Simple(SimpleVariantQuery::lineage(lineage))
    }

    /// Builds a filter from editor inputs.
    ///
    /// Panics if both members carry data.
    pub fn from_parts(advanced: Option<String>, simple: SimpleVariantQuery) -> Self {
        let advanced = advanced.filter(|query| !query.is_empty());
        assert!(
            advanced.is_none() || simple.is_empty(),
            "variant filter mixes an advanced query with lineage/mutation fields"
        );
        match advanced {
            Some(variant_query) => VariantFilter::Advanced(AdvancedVariantQuery { variant_query }),
            None => VariantFilter::Simple(simple),
        }
    }

    pub fn default_for(config: &OrganismConfig) -> Self {
        match config.default_lineage {
            Some(lineage) => VariantFilter::lineage(lineage),
            None => VariantFilter::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            VariantFilter::Advanced(advanced) => advanced.variant_query.is_empty(),
            VariantFilter::Simple(simple) => simple.is_empty(),
        }
    }

    pub fn field_kind(name: &str, config: &OrganismConfig) -> Option<VariantFieldKind> {
        if name == config.advanced_query_field {
            Some(VariantFieldKind::Advanced)
        } else if name == config.lineage_field || MUTATION_FIELDS.contains(&name) {
            Some(VariantFieldKind::Simple)
        } else {
            None
        }
    }

    /// The advanced query wins over structured fields, which are then ignored.
    pub fn parse(params: &QueryParams, config: &OrganismConfig) -> Self {
        if let Some(variant_query) = parse_string(params, config.advanced_query_field) {
            return VariantFilter::Advanced(AdvancedVariantQuery { variant_query });
        }
        VariantFilter::Simple(SimpleVariantQuery {
            lineage: parse_string(params, config.lineage_field),
            mutations: MutationQuery::parse(params),
        })
    }

    pub fn render(&self, params: &mut QueryParams, config: &OrganismConfig) {
        match self {
            VariantFilter::Advanced(advanced) => {
                serialize_string(params, config.advanced_query_field, Some(advanced.variant_query.as_str()));
            }
            VariantFilter::Simple(simple) => {
                serialize_string(params, config.lineage_field, simple.lineage.as_deref());
                simple.mutations.render(params);
            }
        }
    }

    pub fn to_lapis_filter(&self, config: &OrganismConfig) -> LapisFilter {
        let mut filter = LapisFilter::new();
        match self {
            VariantFilter::Advanced(advanced) => {
                filter.insert_text(config.advanced_query_field, &advanced.variant_query);
            }
            VariantFilter::Simple(simple) => {
                if let Some(lineage) = &simple.lineage {
                    filter.insert_text(config.lineage_field, lineage);
                }
                for (name, values) in simple.mutations.fields() {
                    filter.insert_list(name, values);
                }
            }
        }
        filter
    }

    /// Short human readable description, used for column headers.
    pub fn display_name(&self) -> String {
        match self {
            VariantFilter::Advanced(advanced) => advanced.variant_query.clone(),
            VariantFilter::Simple(simple) => {
                let mut parts = simple.lineage.iter().cloned().collect::<Vec<_>>();
                for (_, values) in simple.mutations.fields() {
                    parts.extend(values.iter().cloned());
                }
                if parts.is_empty() {
                    "All variants".to_string()
                } else {
                    parts.join(" + ")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organism::Organism;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn advanced_query_shadows_structured_fields() {
        let config = Organism::Covid.config();
        let params = QueryParams::parse("variantQuery=BA.5*&nextcladePangoLineage=JN.1&nucleotideMutations=A23T");
        assert_eq!(VariantFilter::parse(&params, &config), VariantFilter::advanced("BA.5*"));
    }

    #[test]
    fn empty_advanced_query_falls_back_to_structured_fields() {
        let config = Organism::Covid.config();
        let params = QueryParams::parse("variantQuery=&nextcladePangoLineage=JN.1");
        assert_eq!(VariantFilter::parse(&params, &config), VariantFilter::lineage("JN.1"));
    }

    #[test]
    fn parses_structured_fields() {
        let config = Organism::Covid.config();
        let params = QueryParams::parse(
            "nextcladePangoLineage=XBB&nucleotideMutations=A23T,C241T&aminoAcidInsertions=ins_S:214:EPE",
        );
        let expected = VariantFilter::Simple(SimpleVariantQuery {
            lineage: Some("XBB".to_string()),
            mutations: MutationQuery {
                nucleotide_mutations: strings(&["A23T", "C241T"]),
                amino_acid_insertions: strings(&["ins_S:214:EPE"]),
                ..MutationQuery::default()
            },
        });
        assert_eq!(VariantFilter::parse(&params, &config), expected);
    }

    #[test]
    fn no_fields_yields_empty_simple_query() {
        let config = Organism::Mpox.config();
        let filter = VariantFilter::parse(&QueryParams::new(), &config);
        assert_eq!(filter, VariantFilter::Simple(SimpleVariantQuery::default()));
        assert!(filter.is_empty());
    }

    #[test]
    fn advanced_renders_only_the_advanced_key() {
        let config = Organism::H5n1.config();
        let mut params = QueryParams::new();
        VariantFilter::advanced("clade=2.3.4.4b & HA:T199I").render(&mut params, &config);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("advancedQuery"), Some("clade=2.3.4.4b & HA:T199I"));
    }

    #[test]
    fn simple_renders_populated_fields_only() {
        let config = Organism::Covid.config();
        let filter = VariantFilter::Simple(SimpleVariantQuery {
            lineage: Some("JN.1*".to_string()),
            mutations: MutationQuery {
                amino_acid_mutations: strings(&["S:F456L"]),
                ..MutationQuery::default()
            },
        });
        let mut params = QueryParams::new();
        filter.render(&mut params, &config);
        assert_eq!(params.get("nextcladePangoLineage"), Some("JN.1*"));
        assert_eq!(params.get("aminoAcidMutations"), Some("S:F456L"));
        assert_eq!(params.len(), 2);
        assert!(!params.contains("variantQuery"));
    }

    #[test]
    fn from_parts_picks_populated_member() {
        assert_eq!(
            VariantFilter::from_parts(Some("A23T".to_string()), SimpleVariantQuery::default()),
            VariantFilter::advanced("A23T")
        );
        assert_eq!(
            VariantFilter::from_parts(Some(String::new()), SimpleVariantQuery::lineage("BA.2")),
            VariantFilter::lineage("BA.2")
        );
    }

    #[test]
    #[should_panic(expected = "mixes an advanced query")]
    fn from_parts_rejects_mixed_members() {
        VariantFilter::from_parts(Some("A23T".to_string()), SimpleVariantQuery::lineage("BA.2"));
    }

    #[test]
    fn field_kinds() {
        let config = Organism::Covid.config();
        assert_eq!(VariantFilter::field_kind("variantQuery", &config), Some(VariantFieldKind::Advanced));
        assert_eq!(VariantFilter::field_kind("nextcladePangoLineage", &config), Some(VariantFieldKind::Simple));
        assert_eq!(VariantFilter::field_kind("nucleotideInsertions", &config), Some(VariantFieldKind::Simple));
        assert_eq!(VariantFilter::field_kind("country", &config), None);
    }

    #[test]
    fn lapis_filter_of_simple_query() {
        let config = Organism::Covid.config();
        let filter = VariantFilter::Simple(SimpleVariantQuery {
            lineage: Some("BA.5".to_string()),
            mutations: MutationQuery {
                nucleotide_mutations: strings(&["A23T"]),
                ..MutationQuery::default()
            },
        });
        assert_eq!(
            serde_json::to_value(filter.to_lapis_filter(&config)).unwrap(),
            serde_json::json!({"nextcladePangoLineage": "BA.5", "nucleotideMutations": ["A23T"]})
        );
    }
}
