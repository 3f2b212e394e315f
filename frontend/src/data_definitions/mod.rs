pub mod page_query;
pub mod router_navigation;
