//! Flat key/value filter objects sent to the sequence query API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date_range::{ConcreteDateRange, DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LapisFilterValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LapisFilter(BTreeMap<String, LapisFilterValue>);

impl LapisFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&LapisFilterValue> {
        self.0.get(field)
    }

    pub fn insert_text(&mut self, field: &str, value: &str) {
        self.0
            .insert(field.to_string(), LapisFilterValue::Text(value.to_string()));
    }

    /// Empty lists are left out.
    pub fn insert_list(&mut self, field: &str, values: &[String]) {
        if !values.is_empty() {
            self.0
                .insert(field.to_string(), LapisFilterValue::List(values.to_vec()));
        }
    }

    /// Writes `{field}From` and `{field}To`.
    pub fn insert_date_range(&mut self, field: &str, range: &ConcreteDateRange) {
        self.insert_text(&format!("{field}From"), &range.from.format(DATE_FORMAT).to_string());
        self.insert_text(&format!("{field}To"), &range.to.format(DATE_FORMAT).to_string());
    }

    /// Union of both filters; on a key collision `other` wins.
    pub fn merged(&self, other: &LapisFilter) -> LapisFilter {
        let mut fields = self.0.clone();
        fields.extend(other.0.clone());
        Self(fields)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LapisFilterValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_flat_object() {
        let mut filter = LapisFilter::new();
        filter.insert_text("country", "Switzerland");
        filter.insert_list("nucleotideMutations", &["A23T".to_string()]);
        filter.insert_list("aminoAcidMutations", &[]);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            serde_json::json!({"country": "Switzerland", "nucleotideMutations": ["A23T"]})
        );
    }

    #[test]
    fn merged_leaves_inputs_untouched() {
        let mut base = LapisFilter::new();
        base.insert_text("country", "Switzerland");
        let mut variant = LapisFilter::new();
        variant.insert_text("nextcladePangoLineage", "BA.5");

        let merged = base.merged(&variant);
        assert_eq!(merged.len(), 2);
        assert_eq!(base.len(), 1);
        assert_eq!(variant.len(), 1);
    }

    #[test]
    fn deserializes_both_value_shapes() {
        let filter: LapisFilter =
            serde_json::from_str(r#"{"country":"USA","aminoAcidMutations":["S:E484K"]}"#).unwrap();
        assert_eq!(filter.get("country"), Some(&LapisFilterValue::Text("USA".to_string())));
        assert_eq!(
            filter.get("aminoAcidMutations"),
            Some(&LapisFilterValue::List(vec!["S:E484K".to_string()]))
        );
    }
}
