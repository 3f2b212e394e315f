//! Query-string segment of the dashboard route.

use std::fmt::Display;

use common::query_params::QueryParams;

/// Raw query parameters; the route codec turns them into a page state.
///
/// The router builds it from the text after `?` and writes it back through
/// `Display`, so a parsed and re-rendered query keeps the canonical form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageQuery(pub QueryParams);

impl From<QueryParams> for PageQuery {
    fn from(value: QueryParams) -> Self {
        PageQuery(value)
    }
}

impl From<&str> for PageQuery {
    fn from(query: &str) -> Self {
        PageQuery(QueryParams::parse(query))
    }
}

impl Display for PageQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_text_survives_the_router() {
        let query = PageQuery::from("?country=Switzerland&lineage%241=B.1");
        assert_eq!(query.0.get("lineage$1"), Some("B.1"));
        assert_eq!(query.to_string(), "country=Switzerland&lineage%241=B.1");
    }

    #[test]
    fn empty_query_is_the_landing_page() {
        assert_eq!(PageQuery::from(""), PageQuery::default());
    }
}
