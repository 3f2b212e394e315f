//! One route codec per (organism, view) pair.
//!
//! A route owns the pathname, the default state and the parse/render pair of
//! its page state. Defaults are rebuilt on every call so that an old bookmark
//! without a field picks up whatever the current default is.

use std::{fmt::Debug, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    id_map::Id,
    lapis_filter::LapisFilter,
    multiplexed::ensure_present,
    organism::{Organism, OrganismConfig},
    query_params::QueryParams,
};

pub mod compare_side_by_side;
pub mod compare_to_baseline;
pub mod compare_variants;
pub mod sequencing_efforts;
pub mod single_variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum View {
    SingleVariant,
    CompareSideBySide,
    SequencingEfforts,
    CompareVariants,
    CompareToBaseline,
}

impl View {
    pub const ALL: [View; 5] = [
        View::SingleVariant,
        View::CompareSideBySide,
        View::SequencingEfforts,
        View::CompareVariants,
        View::CompareToBaseline,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            View::SingleVariant => "single-variant",
            View::CompareSideBySide => "compare-side-by-side",
            View::SequencingEfforts => "sequencing-efforts",
            View::CompareVariants => "compare-variants",
            View::CompareToBaseline => "compare-to-baseline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::SingleVariant => "Single variant",
            View::CompareSideBySide => "Compare side-by-side",
            View::SequencingEfforts => "Sequencing efforts",
            View::CompareVariants => "Compare variants",
            View::CompareToBaseline => "Compare to baseline",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.slug() == s)
            .ok_or_else(|| format!("Unknown view: {s}"))
    }
}

/// Numerator and denominator for one displayed entry (a column, a variant, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonFilter {
    pub id: Option<Id>,
    pub label: String,
    pub numerator: LapisFilter,
    pub denominator: LapisFilter,
}

/// Query API answer for one [`ComparisonFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCount {
    pub id: Option<Id>,
    pub label: String,
    pub count: u64,
    pub total: u64,
}

impl ComparisonCount {
    /// `None` when the denominator matched nothing.
    pub fn proportion(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.count as f64 / self.total as f64)
    }
}

pub trait RouteCodec {
    type State: Clone + PartialEq + Debug;

    fn organism(&self) -> Organism;

    fn view(&self) -> View;

    fn default_state(&self) -> Self::State;

    /// Parses a non-empty query. `None` means the URL violates a structural rule.
    fn parse_params(&self, params: &QueryParams) -> Option<Self::State>;

    fn render_params(&self, state: &Self::State) -> QueryParams;

    /// Filters for the query API, one per displayed entry.
    fn lapis_filters(&self, state: &Self::State) -> Vec<ComparisonFilter>;

    fn config(&self) -> OrganismConfig {
        self.organism().config()
    }

    fn pathname(&self) -> String {
        format!("/{}/{}", self.organism().slug(), self.view().slug())
    }

    /// A query without any parameter is the landing page: the default state.
    fn parse_query(&self, params: &QueryParams) -> Option<Self::State> {
        if params.is_empty() {
            return Some(self.default_state());
        }
        self.parse_params(params)
    }

    /// The default state renders to an empty query; any other state renders
    /// at least one key so that it is not mistaken for the landing page.
    fn render_query(&self, state: &Self::State) -> QueryParams {
        if *state == self.default_state() {
            return QueryParams::new();
        }
        let mut params = self.render_params(state);
        ensure_present(&mut params, &self.config());
        params
    }

    fn to_url(&self, state: &Self::State) -> String {
        format!("{}?{}", self.pathname(), self.render_query(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn view_slugs_parse_back() {
        for view in View::ALL {
            assert_eq!(view.slug().parse::<View>(), Ok(view));
        }
        assert!("single_variant".parse::<View>().is_err());
    }

    #[test]
    fn proportion_of_empty_total_is_undefined() {
        let count = ComparisonCount { id: None, label: "All variants".to_string(), count: 0, total: 0 };
        assert_eq!(count.proportion(), None);
        let count = ComparisonCount { count: 25, total: 100, ..count };
        assert_eq!(count.proportion(), Some(0.25));
    }
}
