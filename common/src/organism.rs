//! Organisms served by the dashboards and their per-organism constants.

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::{DateRange, NamedDateRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Organism {
    Covid,
    H5n1,
    Mpox,
    WestNile,
    RsvA,
    RsvB,
}

/// Field names and defaults that differ between the sequence databases of each organism.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganismConfig {
    pub organism: Organism,
    pub label: &'static str,
    pub location_fields: &'static [&'static str],
    pub lineage_field: &'static str,
    pub advanced_query_field: &'static str,
    pub date_field: &'static str,
    pub earliest_date: NaiveDate,
    pub default_date_range: DateRange,
    pub default_lineage: Option<&'static str>,
    /// Lineages preselected on the comparison views.
    pub comparison_lineages: &'static [&'static str],
    pub supports_collections: bool,
}

const COVID_LOCATION_FIELDS: &[&str] = &["region", "country", "division"];
const LOCULUS_LOCATION_FIELDS: &[&str] = &["geo_loc_country", "geo_loc_admin_1"];

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid organism date constant")
}

impl Organism {
    pub const ALL: [Organism; 6] = [
        Organism::Covid,
        Organism::H5n1,
        Organism::Mpox,
        Organism::WestNile,
        Organism::RsvA,
        Organism::RsvB,
    ];

    /// Path segment used in URLs, e.g. `/covid/single-variant`.
    pub fn slug(&self) -> &'static str {
        match self {
            Organism::Covid => "covid",
            Organism::H5n1 => "h5n1",
            Organism::Mpox => "mpox",
            Organism::WestNile => "west-nile",
            Organism::RsvA => "rsv-a",
            Organism::RsvB => "rsv-b",
        }
    }

    pub fn config(&self) -> OrganismConfig {
        match self {
            Organism::Covid => OrganismConfig {
                organism: *self,
                label: "SARS-CoV-2",
                location_fields: COVID_LOCATION_FIELDS,
                lineage_field: "nextcladePangoLineage",
                advanced_query_field: "variantQuery",
                date_field: "date",
                earliest_date: ymd(2020, 1, 6),
                default_date_range: DateRange::Named(NamedDateRange::Last6Months),
                default_lineage: Some("JN.1*"),
                comparison_lineages: &["KP.2*", "KP.3*", "XEC*"],
                supports_collections: true,
            },
            Organism::H5n1 => OrganismConfig {
                organism: *self,
                label: "Influenza A/H5N1",
                location_fields: LOCULUS_LOCATION_FIELDS,
                lineage_field: "clade",
                advanced_query_field: "advancedQuery",
                date_field: "sampleCollectionDate",
                earliest_date: ymd(1905, 1, 1),
                default_date_range: DateRange::Named(NamedDateRange::AllTimes),
                default_lineage: Some("2.3.4.4b"),
                comparison_lineages: &["2.3.4.4b", "2.3.2.1c"],
                supports_collections: false,
            },
            Organism::Mpox => OrganismConfig {
                organism: *self,
                label: "Mpox",
                location_fields: LOCULUS_LOCATION_FIELDS,
                lineage_field: "lineage",
                advanced_query_field: "advancedQuery",
                date_field: "sampleCollectionDate",
                earliest_date: ymd(1960, 1, 1),
                default_date_range: DateRange::Named(NamedDateRange::AllTimes),
                default_lineage: None,
                comparison_lineages: &[],
                supports_collections: false,
            },
            Organism::WestNile => OrganismConfig {
                organism: *self,
                label: "West Nile Virus",
                location_fields: LOCULUS_LOCATION_FIELDS,
                lineage_field: "lineage",
                advanced_query_field: "advancedQuery",
                date_field: "sampleCollectionDate",
                earliest_date: ymd(1930, 1, 1),
                default_date_range: DateRange::Named(NamedDateRange::AllTimes),
                default_lineage: None,
                comparison_lineages: &[],
                supports_collections: false,
            },
            Organism::RsvA => OrganismConfig {
                organism: *self,
                label: "RSV-A",
                location_fields: LOCULUS_LOCATION_FIELDS,
                lineage_field: "lineage",
                advanced_query_field: "advancedQuery",
                date_field: "sampleCollectionDate",
                earliest_date: ymd(1956, 1, 1),
                default_date_range: DateRange::Named(NamedDateRange::AllTimes),
                default_lineage: None,
                comparison_lineages: &[],
                supports_collections: false,
            },
            Organism::RsvB => OrganismConfig {
                organism: *self,
                label: "RSV-B",
                location_fields: LOCULUS_LOCATION_FIELDS,
                lineage_field: "lineage",
                advanced_query_field: "advancedQuery",
                date_field: "sampleCollectionDate",
                earliest_date: ymd(1956, 1, 1),
                default_date_range: DateRange::Named(NamedDateRange::AllTimes),
                default_lineage: None,
                comparison_lineages: &[],
                supports_collections: false,
            },
        }
    }
}

impl Display for Organism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Organism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organism::ALL
            .into_iter()
            .find(|organism| organism.slug() == s)
            .ok_or_else(|| format!("Unknown organism: {s}"))
    }
}
