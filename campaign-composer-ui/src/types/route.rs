//! Route context and registration filters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Global navigation bar; buttons here are page-independent
pub const LOCATION_NAVBAR: &str = "navbar";
/// Page-level toolbar
pub const LOCATION_TOOLBAR: &str = "toolbar";
/// Action row on a detail/view page
pub const LOCATION_PAGE_ACTIONS: &str = "page_actions";
/// Per-row dropdown in list views
pub const LOCATION_LIST_ACTIONS: &str = "list_actions";
/// Bulk-selection dropdown in list views
pub const LOCATION_BULK_ACTIONS: &str = "bulk_actions";

/// Symbolic name and parameter bindings of the current page
///
/// Captured once per request and immutable afterwards. Params use a
/// `BTreeMap` so iteration (and therefore key derivation) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteContext {
    /// Route name (e.g. `contact.index`)
    pub name: String,

    /// Route parameter bindings
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl RouteContext {
    /// Create a route context
    #[must_use]
    pub fn new(name: impl Into<String>, params: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Capture the route context from a request snapshot
    ///
    /// Ajax requests can carry a route override describing the page the
    /// request was fired from; when present it wins over the plain request
    /// route so buttons scope to the page the user is looking at.
    #[must_use]
    pub fn from_request(snapshot: RequestSnapshot) -> Self {
        match snapshot {
            RequestSnapshot {
                is_ajax: true,
                ajax_route_override: Some(ajax_route),
                ..
            } => ajax_route,
            RequestSnapshot {
                route_name,
                route_params,
                ..
            } => Self {
                name: route_name.unwrap_or_default(),
                params: route_params,
            },
        }
    }

    /// Look up one parameter value
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// One-shot snapshot of the routing metadata of the current request
///
/// The framework request object itself never crosses into this crate; the
/// platform layer extracts these values once and hands them over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSnapshot {
    /// Route name of the request, if resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    /// Route parameter bindings of the request
    #[serde(default)]
    pub route_params: BTreeMap<String, String>,

    /// Whether the request arrived over XHR
    #[serde(default)]
    pub is_ajax: bool,

    /// Originating-page route carried by ajax requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ajax_route_override: Option<RouteContext>,
}

/// Location predicate for conditional button registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationFilter {
    /// Matches exactly one location
    Is(String),
    /// Matches any of the listed locations
    AnyOf(Vec<String>),
}

impl LocationFilter {
    /// Filter matching a single location
    #[must_use]
    pub fn is(location: impl Into<String>) -> Self {
        Self::Is(location.into())
    }

    /// Filter matching any of the given locations
    #[must_use]
    pub fn any_of<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(locations.into_iter().map(Into::into).collect())
    }

    /// Whether the filter accepts the given location
    #[must_use]
    pub fn matches(&self, location: &str) -> bool {
        match self {
            Self::Is(wanted) => wanted == location,
            Self::AnyOf(wanted) => wanted.iter().any(|l| l == location),
        }
    }
}

/// Route predicate for conditional button registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteFilter {
    /// Matches on route name alone
    ByName(String),
    /// Matches on route name plus a subset of parameter bindings
    ByNameAndParams(String, BTreeMap<String, String>),
}

impl RouteFilter {
    /// Filter matching a route name
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    /// Filter matching a route name and parameter values
    #[must_use]
    pub fn by_name_and_params<I, K, V>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::ByNameAndParams(
            name.into(),
            params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Route name the filter targets
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ByName(name) | Self::ByNameAndParams(name, _) => name,
        }
    }

    /// Whether the filter accepts the given route context
    ///
    /// Every param the filter names must match the context's value exactly;
    /// extra params on the context side are ignored.
    #[must_use]
    pub fn matches(&self, route: &RouteContext) -> bool {
        match self {
            Self::ByName(name) => name == &route.name,
            Self::ByNameAndParams(name, params) => {
                name == &route.name
                    && params
                        .iter()
                        .all(|(key, value)| route.param(key) == Some(value.as_str()))
            }
        }
    }
}
