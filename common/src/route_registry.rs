//! Dispatches URLs to route codecs by pathname, and page states back to URLs.

use std::{collections::BTreeMap, sync::LazyLock};

use url::Url;

use crate::{
    error::CodecError,
    organism::Organism,
    page_state::PageState,
    query_params::QueryParams,
    views::{
        ComparisonFilter, RouteCodec, View, compare_side_by_side::CompareSideBySideRoute,
        compare_to_baseline::CompareToBaselineRoute, compare_variants::CompareVariantsRoute,
        sequencing_efforts::SequencingEffortsRoute, single_variant::SingleVariantRoute,
    },
};

/// Base used to resolve path-only URLs such as `/covid/single-variant?date=allTimes`.
const RELATIVE_URL_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDefinition {
    SingleVariant(SingleVariantRoute),
    CompareSideBySide(CompareSideBySideRoute),
    SequencingEfforts(SequencingEffortsRoute),
    CompareVariants(CompareVariantsRoute),
    CompareToBaseline(CompareToBaselineRoute),
}

impl RouteDefinition {
    pub fn new(organism: Organism, view: View) -> Self {
        match view {
            View::SingleVariant => Self::SingleVariant(SingleVariantRoute::new(organism)),
            View::CompareSideBySide => Self::CompareSideBySide(CompareSideBySideRoute::new(organism)),
            View::SequencingEfforts => Self::SequencingEfforts(SequencingEffortsRoute::new(organism)),
            View::CompareVariants => Self::CompareVariants(CompareVariantsRoute::new(organism)),
            View::CompareToBaseline => Self::CompareToBaseline(CompareToBaselineRoute::new(organism)),
        }
    }

    pub fn for_state(state: &PageState) -> Self {
        Self::new(state.organism(), state.view())
    }

    pub fn organism(&self) -> Organism {
        match self {
            Self::SingleVariant(route) => route.organism(),
            Self::CompareSideBySide(route) => route.organism(),
            Self::SequencingEfforts(route) => route.organism(),
            Self::CompareVariants(route) => route.organism(),
            Self::CompareToBaseline(route) => route.organism(),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::SingleVariant(_) => View::SingleVariant,
            Self::CompareSideBySide(_) => View::CompareSideBySide,
            Self::SequencingEfforts(_) => View::SequencingEfforts,
            Self::CompareVariants(_) => View::CompareVariants,
            Self::CompareToBaseline(_) => View::CompareToBaseline,
        }
    }

    pub fn pathname(&self) -> String {
        match self {
            Self::SingleVariant(route) => route.pathname(),
            Self::CompareSideBySide(route) => route.pathname(),
            Self::SequencingEfforts(route) => route.pathname(),
            Self::CompareVariants(route) => route.pathname(),
            Self::CompareToBaseline(route) => route.pathname(),
        }
    }

    pub fn default_state(&self) -> PageState {
        let organism = self.organism();
        match self {
            Self::SingleVariant(route) => PageState::SingleVariant(organism, route.default_state()),
            Self::CompareSideBySide(route) => PageState::CompareSideBySide(organism, route.default_state()),
            Self::SequencingEfforts(route) => PageState::SequencingEfforts(organism, route.default_state()),
            Self::CompareVariants(route) => PageState::CompareVariants(organism, route.default_state()),
            Self::CompareToBaseline(route) => PageState::CompareToBaseline(organism, route.default_state()),
        }
    }

    pub fn parse_query(&self, params: &QueryParams) -> Option<PageState> {
        let organism = self.organism();
        let state = match self {
            Self::SingleVariant(route) => PageState::SingleVariant(organism, route.parse_query(params)?),
            Self::CompareSideBySide(route) => PageState::CompareSideBySide(organism, route.parse_query(params)?),
            Self::SequencingEfforts(route) => PageState::SequencingEfforts(organism, route.parse_query(params)?),
            Self::CompareVariants(route) => PageState::CompareVariants(organism, route.parse_query(params)?),
            Self::CompareToBaseline(route) => PageState::CompareToBaseline(organism, route.parse_query(params)?),
        };
        Some(state)
    }

    /// `None` when the state belongs to another route.
    pub fn render_query(&self, state: &PageState) -> Option<QueryParams> {
        if state.organism() != self.organism() {
            return None;
        }
        match (self, state) {
            (Self::SingleVariant(route), PageState::SingleVariant(_, state)) => Some(route.render_query(state)),
            (Self::CompareSideBySide(route), PageState::CompareSideBySide(_, state)) => Some(route.render_query(state)),
            (Self::SequencingEfforts(route), PageState::SequencingEfforts(_, state)) => Some(route.render_query(state)),
            (Self::CompareVariants(route), PageState::CompareVariants(_, state)) => Some(route.render_query(state)),
            (Self::CompareToBaseline(route), PageState::CompareToBaseline(_, state)) => Some(route.render_query(state)),
            _ => None,
        }
    }

    pub fn lapis_filters(&self, state: &PageState) -> Option<Vec<ComparisonFilter>> {
        if state.organism() != self.organism() {
            return None;
        }
        match (self, state) {
            (Self::SingleVariant(route), PageState::SingleVariant(_, state)) => Some(route.lapis_filters(state)),
            (Self::CompareSideBySide(route), PageState::CompareSideBySide(_, state)) => Some(route.lapis_filters(state)),
            (Self::SequencingEfforts(route), PageState::SequencingEfforts(_, state)) => Some(route.lapis_filters(state)),
            (Self::CompareVariants(route), PageState::CompareVariants(_, state)) => Some(route.lapis_filters(state)),
            (Self::CompareToBaseline(route), PageState::CompareToBaseline(_, state)) => Some(route.lapis_filters(state)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteDefinition>,
    by_pathname: BTreeMap<String, usize>,
}

static REGISTRY: LazyLock<RouteRegistry> = LazyLock::new(RouteRegistry::standard);

/// Registry with every organism and view, built on first use.
pub fn registry() -> &'static RouteRegistry {
    &REGISTRY
}

impl RouteRegistry {
    pub fn try_new(routes: Vec<RouteDefinition>) -> Result<Self, CodecError> {
        let mut by_pathname = BTreeMap::new();
        for (index, route) in routes.iter().enumerate() {
            let pathname = route.pathname();
            if by_pathname.insert(pathname.clone(), index).is_some() {
                return Err(CodecError::DuplicatePathname(pathname));
            }
        }
        Ok(Self { routes, by_pathname })
    }

    /// Panics if two routes share a pathname.
    pub fn standard() -> Self {
        let routes = Organism::ALL
            .into_iter()
            .flat_map(|organism| View::ALL.into_iter().map(move |view| RouteDefinition::new(organism, view)))
            .collect();
        match Self::try_new(routes) {
            Ok(registry) => registry,
            Err(err) => panic!("route registry is inconsistent: {err}"),
        }
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn route_for_pathname(&self, pathname: &str) -> Option<&RouteDefinition> {
        self.by_pathname
            .get(pathname)
            .and_then(|index| self.routes.get(*index))
    }

    pub fn route(&self, organism: Organism, view: View) -> Option<&RouteDefinition> {
        self.routes
            .iter()
            .find(|route| route.organism() == organism && route.view() == view)
    }

    /// Exact pathname match; `None` for unknown pathnames and invalid queries.
    pub fn parse(&self, pathname: &str, params: &QueryParams) -> Option<PageState> {
        let route = self.route_for_pathname(pathname)?;
        let state = route.parse_query(params);
        if state.is_none() {
            tracing::debug!("unparseable query for {pathname}: {params}");
        }
        state
    }

    pub fn parse_url(&self, url: &Url) -> Option<PageState> {
        self.parse(url.path(), &QueryParams::from_url(url))
    }

    /// Accepts absolute URLs and path-only URLs.
    pub fn parse_url_str(&self, url: &str) -> Option<PageState> {
        match resolve_url(url) {
            Ok(url) => self.parse_url(&url),
            Err(err) => {
                tracing::debug!("not a URL: {url}: {err}");
                None
            }
        }
    }

    pub fn to_url(&self, state: &PageState) -> String {
        let route = RouteDefinition::for_state(state);
        let query = route.render_query(state).unwrap_or_default();
        format!("{}?{}", route.pathname(), query)
    }

    pub fn default_state(&self, organism: Organism, view: View) -> PageState {
        RouteDefinition::new(organism, view).default_state()
    }

    pub fn lapis_filters(&self, state: &PageState) -> Vec<ComparisonFilter> {
        RouteDefinition::for_state(state)
            .lapis_filters(state)
            .unwrap_or_default()
    }
}

pub fn resolve_url(url: &str) -> Result<Url, CodecError> {
    match Url::parse(url) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Url::parse(RELATIVE_URL_BASE)?.join(url)?),
        Err(err) => Err(err.into()),
    }
}
