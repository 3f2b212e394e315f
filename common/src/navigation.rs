//! Reading and writing the browser location behind an injectable port.

use crate::{page_state::PageState, route_registry::RouteRegistry};

/// Host side of navigation: the browser history, a router, or a test double.
pub trait NavigationPort {
    fn current_url(&self) -> String;

    fn push_url(&mut self, url: &str);
}

pub struct Navigation<'a, P: NavigationPort> {
    registry: &'a RouteRegistry,
    port: P,
}

impl<'a, P: NavigationPort> Navigation<'a, P> {
    pub fn new(registry: &'a RouteRegistry, port: P) -> Self {
        Self { registry, port }
    }

    /// Pushes the canonical URL of `state` and returns it.
    pub fn navigate_to(&mut self, state: &PageState) -> String {
        let url = self.registry.to_url(state);
        self.port.push_url(&url);
        url
    }

    pub fn current_page_state(&self) -> Option<PageState> {
        self.registry.parse_url_str(&self.port.current_url())
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

/// In-memory history, for tests and hosts without a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNavigation {
    history: Vec<String>,
}

impl MemoryNavigation {
    pub fn starting_at(url: &str) -> Self {
        Self {
            history: vec![url.to_string()],
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl NavigationPort for MemoryNavigation {
    fn current_url(&self) -> String {
        self.history.last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push_url(&mut self, url: &str) {
        self.history.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        route_registry::registry, variant_filter::VariantFilter,
        views::single_variant::SingleVariantState,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_navigate_reload_restores_the_state() {
        let registry = registry();
        let mut navigation = Navigation::new(registry, MemoryNavigation::starting_at("/covid/single-variant"));

        let Some(PageState::SingleVariant(organism, state)) = navigation.current_page_state() else {
            panic!("expected the covid single variant page");
        };
        let edited = PageState::SingleVariant(
            organism,
            SingleVariantState {
                variant_filter: VariantFilter::advanced("S:F456L"),
                ..state
            },
        );

        let url = navigation.navigate_to(&edited);
        assert_eq!(url, "/covid/single-variant?variantQuery=S%3AF456L");
        assert_eq!(navigation.port().history().len(), 2);
        assert_eq!(navigation.current_page_state(), Some(edited));
    }

    #[test]
    fn unknown_location_has_no_state() {
        let navigation = Navigation::new(registry(), MemoryNavigation::starting_at("/about"));
        assert_eq!(navigation.current_page_state(), None);
    }

    #[test]
    fn empty_history_points_to_root() {
        let navigation = Navigation::new(registry(), MemoryNavigation::default());
        assert_eq!(navigation.port().current_url(), "/");
        assert!(navigation.current_page_state().is_none());
    }
}
