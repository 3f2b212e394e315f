//! Navigation port backed by the Dioxus router.

use common::navigation::NavigationPort;
use dioxus::prelude::*;

use crate::routes::Route;

pub struct RouterNavigation {
    navigator: Navigator,
    current: String,
}

impl RouterNavigation {
    pub fn new(current: &Route) -> Self {
        Self {
            navigator: navigator(),
            current: current.to_string(),
        }
    }
}

impl NavigationPort for RouterNavigation {
    fn current_url(&self) -> String {
        self.current.clone()
    }

    fn push_url(&mut self, url: &str) {
        match url.parse::<Route>() {
            Ok(route) => {
                dioxus::logger::tracing::info!("Navigating to {}", url);
                self.navigator.push(route);
                self.current = url.to_string();
            }
            Err(e) => dioxus::logger::tracing::error!("Cannot route to {}: {}", url, e),
        }
    }
}
