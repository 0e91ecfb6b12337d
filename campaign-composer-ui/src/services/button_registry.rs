//! Contextual button registry
//!
//! Collects button descriptors contributed by plugins for one rendered
//! page, deduplicated by a key derived from descriptor content and the
//! route context. Request-scoped: constructed, mutated and read within a
//! single request.

use std::collections::BTreeMap;

use crate::traits::{FallbackKeySource, UuidKeySource};
use crate::types::{ButtonDescriptor, LocationFilter, RouteContext, RouteFilter, LOCATION_NAVBAR};

/// Derive the registry key identifying a button
///
/// Pure over its inputs apart from the fallback source, which is consulted
/// only when the descriptor carries no identity content at all. Identity is
/// `btnText`, else the confirm dialog's text/template/icon, then `iconClass`.
/// Outside the navbar the route name and params are appended so the same
/// button registered on different pages stays distinct; navbar buttons are
/// page-independent.
pub fn derive_key(
    button: &ButtonDescriptor,
    location: &str,
    route: &RouteContext,
    key_source: &mut dyn FallbackKeySource,
) -> String {
    fn non_empty(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|v| !v.is_empty())
    }

    let mut key = String::new();
    if let Some(text) = non_empty(button.btn_text.as_ref()) {
        key.push_str(text);
    } else if let Some(confirm) = &button.confirm {
        for part in [&confirm.btn_text, &confirm.template, &confirm.icon_class] {
            if let Some(part) = non_empty(part.as_ref()) {
                key.push_str(part);
            }
        }
    }

    if let Some(icon) = non_empty(button.icon_class.as_ref()) {
        key.push_str(icon);
    }

    // Ensure anonymous buttons are not overwritten unintentionally
    if key.is_empty() {
        key = key_source.next_key();
        log::warn!("button without identity content assigned fallback key '{key}'");
    }

    if location != LOCATION_NAVBAR {
        key.push_str(&route.name);
        for (param_key, param_value) in &route.params {
            key.push_str(param_key);
            key.push_str(param_value);
        }
    }

    key
}

/// Registry of contextual buttons for one location on one page
///
/// Plugins register buttons through [`add_button`](Self::add_button) /
/// [`add_buttons`](Self::add_buttons), optionally filtered by target
/// location and route; the renderer reads the final set once via
/// [`buttons`](Self::buttons).
pub struct ContextualButtonRegistry {
    /// Button location requested
    location: String,
    route: RouteContext,
    buttons: BTreeMap<String, ButtonDescriptor>,
    /// Entity for list/view actions
    item: Option<serde_json::Value>,
    key_source: Box<dyn FallbackKeySource>,
}

impl ContextualButtonRegistry {
    /// Create a registry with the default random fallback key source
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        route: RouteContext,
        initial_buttons: Vec<ButtonDescriptor>,
        item: Option<serde_json::Value>,
    ) -> Self {
        Self::with_key_source(location, route, initial_buttons, item, Box::new(UuidKeySource))
    }

    /// Create a registry with an explicit fallback key source
    #[must_use]
    pub fn with_key_source(
        location: impl Into<String>,
        route: RouteContext,
        initial_buttons: Vec<ButtonDescriptor>,
        item: Option<serde_json::Value>,
        key_source: Box<dyn FallbackKeySource>,
    ) -> Self {
        let mut registry = Self {
            location: location.into(),
            route,
            buttons: BTreeMap::new(),
            item,
            key_source,
        };
        for button in initial_buttons {
            registry.insert(button);
        }
        registry
    }

    /// Add a single button, subject to the optional filters
    ///
    /// No-op unless both filters pass. On pass the button is stored at its
    /// derived key, overwriting any existing entry (re-adding an identical
    /// descriptor is idempotent).
    pub fn add_button(
        &mut self,
        button: ButtonDescriptor,
        location_filter: Option<&LocationFilter>,
        route_filter: Option<&RouteFilter>,
    ) -> &mut Self {
        if !self.matches_location(location_filter) || !self.matches_route(route_filter) {
            log::debug!(
                "button registration skipped at location '{}', route '{}'",
                self.location,
                self.route.name
            );
            return self;
        }

        self.insert(button);
        self
    }

    /// Add a batch of buttons, subject to the optional filters
    ///
    /// The filters are evaluated once for the whole batch; the registry
    /// context is fixed after construction, so a per-button check would
    /// decide identically anyway.
    pub fn add_buttons(
        &mut self,
        buttons: Vec<ButtonDescriptor>,
        location_filter: Option<&LocationFilter>,
        route_filter: Option<&RouteFilter>,
    ) -> &mut Self {
        if !self.matches_location(location_filter) || !self.matches_route(route_filter) {
            log::debug!(
                "batch of {} buttons skipped at location '{}', route '{}'",
                buttons.len(),
                self.location,
                self.route.name
            );
            return self;
        }

        for button in buttons {
            self.insert(button);
        }
        self
    }

    /// Remove the entry matching the descriptor's derived key, if present
    pub fn remove_button(&mut self, button: &ButtonDescriptor) {
        let key = derive_key(button, &self.location, &self.route, self.key_source.as_mut());
        if self.buttons.remove(&key).is_some() {
            log::debug!("button '{key}' removed from location '{}'", self.location);
        }
    }

    /// Whether the optional location filter accepts this registry
    #[must_use]
    pub fn matches_location(&self, filter: Option<&LocationFilter>) -> bool {
        filter.is_none_or(|f| f.matches(&self.location))
    }

    /// Whether the optional route filter accepts this registry's route
    #[must_use]
    pub fn matches_route(&self, filter: Option<&RouteFilter>) -> bool {
        filter.is_none_or(|f| f.matches(&self.route))
    }

    /// Current full button set, keyed by derived key
    #[must_use]
    pub fn buttons(&self) -> &BTreeMap<String, ButtonDescriptor> {
        &self.buttons
    }

    /// Buttons in render order: highest priority first
    #[must_use]
    pub fn buttons_by_priority(&self) -> Vec<&ButtonDescriptor> {
        let mut ordered: Vec<&ButtonDescriptor> = self.buttons.values().collect();
        ordered.sort_by_key(|b| std::cmp::Reverse(b.priority));
        ordered
    }

    /// Location this registry renders into
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Route name for the current view
    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.route.name
    }

    /// Route name and parameter bindings for the current view
    #[must_use]
    pub fn route(&self) -> (&str, &BTreeMap<String, String>) {
        (&self.route.name, &self.route.params)
    }

    /// Bound entity for list/view contexts, if any
    #[must_use]
    pub fn item(&self) -> Option<&serde_json::Value> {
        self.item.as_ref()
    }

    fn insert(&mut self, button: ButtonDescriptor) {
        let key = derive_key(&button, &self.location, &self.route, self.key_source.as_mut());
        log::debug!("button '{key}' registered at location '{}'", self.location);
        self.buttons.insert(key, button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SequenceKeySource;
    use crate::types::{ConfirmDescriptor, LOCATION_LIST_ACTIONS};

    fn contact_index_route() -> RouteContext {
        RouteContext::new(
            "contact.index",
            BTreeMap::from([("page".to_string(), "2".to_string())]),
        )
    }

    fn list_registry() -> ContextualButtonRegistry {
        ContextualButtonRegistry::with_key_source(
            "list",
            contact_index_route(),
            Vec::new(),
            None,
            Box::new(SequenceKeySource::new()),
        )
    }

    fn delete_button() -> ButtonDescriptor {
        ButtonDescriptor::new().with_text("Delete")
    }

    // ===== Key derivation =====

    #[test]
    fn key_is_deterministic_for_named_buttons() {
        let mut source = SequenceKeySource::new();
        let route = contact_index_route();
        let button = delete_button().with_icon("fa fa-trash");

        let first = derive_key(&button, "list", &route, &mut source);
        let second = derive_key(&button, "list", &route, &mut source);
        assert_eq!(first, second);
    }

    #[test]
    fn key_matches_worked_example() {
        let mut source = SequenceKeySource::new();
        let key = derive_key(&delete_button(), "list", &contact_index_route(), &mut source);
        assert_eq!(key, "Deletecontact.indexpage2");
    }

    #[test]
    fn navbar_key_is_route_independent() {
        let mut source = SequenceKeySource::new();
        let button = delete_button().with_icon("fa fa-trash");

        let navbar_a = derive_key(&button, LOCATION_NAVBAR, &contact_index_route(), &mut source);
        let navbar_b = derive_key(
            &button,
            LOCATION_NAVBAR,
            &RouteContext::new("contact.edit", BTreeMap::new()),
            &mut source,
        );
        assert_eq!(navbar_a, navbar_b);

        let sidebar_a = derive_key(&button, "sidebar", &contact_index_route(), &mut source);
        let sidebar_b = derive_key(
            &button,
            "sidebar",
            &RouteContext::new("contact.edit", BTreeMap::new()),
            &mut source,
        );
        assert_ne!(sidebar_a, sidebar_b);
    }

    #[test]
    fn confirm_content_substitutes_for_missing_text() {
        let mut source = SequenceKeySource::new();
        let button = ButtonDescriptor::new().with_confirm(ConfirmDescriptor {
            btn_text: Some("Really delete".to_string()),
            template: Some("confirm-dialog".to_string()),
            icon_class: Some("fa fa-warning".to_string()),
        });
        let key = derive_key(&button, LOCATION_NAVBAR, &contact_index_route(), &mut source);
        assert_eq!(key, "Really deleteconfirm-dialogfa fa-warning");
    }

    #[test]
    fn anonymous_buttons_get_unique_fallback_keys() {
        let mut registry = list_registry();
        registry.add_button(ButtonDescriptor::new(), None, None);
        registry.add_button(ButtonDescriptor::new(), None, None);
        assert_eq!(registry.buttons().len(), 2);
    }

    // ===== Registration =====

    #[test]
    fn re_adding_identical_button_is_idempotent() {
        let mut registry = list_registry();
        registry.add_button(delete_button(), None, None);
        registry.add_button(delete_button(), None, None);
        assert_eq!(registry.buttons().len(), 1);
    }

    #[test]
    fn re_adding_overwrites_existing_entry() {
        let mut registry = list_registry();
        registry.add_button(delete_button().with_priority(1), None, None);
        registry.add_button(delete_button().with_priority(9), None, None);

        let button = registry.buttons().values().next().unwrap();
        assert_eq!(button.priority, 9);
    }

    #[test]
    fn initial_buttons_are_keyed_like_added_ones() {
        let registry = ContextualButtonRegistry::with_key_source(
            "list",
            contact_index_route(),
            vec![delete_button()],
            None,
            Box::new(SequenceKeySource::new()),
        );
        assert!(registry.buttons().contains_key("Deletecontact.indexpage2"));
    }

    #[test]
    fn location_filter_gates_registration() {
        let mut registry = list_registry();
        registry.add_button(
            delete_button(),
            Some(&LocationFilter::is("sidebar")),
            None,
        );
        assert!(registry.buttons().is_empty());

        registry.add_button(delete_button(), Some(&LocationFilter::is("list")), None);
        assert_eq!(registry.buttons().len(), 1);
    }

    #[test]
    fn location_filter_accepts_set_membership() {
        let mut registry = list_registry();
        registry.add_button(
            delete_button(),
            Some(&LocationFilter::any_of(["sidebar", "list"])),
            None,
        );
        assert_eq!(registry.buttons().len(), 1);
    }

    #[test]
    fn route_filter_gates_registration() {
        let mut registry = list_registry();

        registry.add_button(
            delete_button(),
            None,
            Some(&RouteFilter::by_name("contact.index")),
        );
        assert!(registry.buttons().contains_key("Deletecontact.indexpage2"));

        registry.add_button(
            ButtonDescriptor::new().with_text("Export"),
            None,
            Some(&RouteFilter::by_name("contact.edit")),
        );
        assert_eq!(registry.buttons().len(), 1);
    }

    #[test]
    fn route_filter_checks_param_values() {
        let mut registry = list_registry();

        registry.add_button(
            delete_button(),
            None,
            Some(&RouteFilter::by_name_and_params("contact.index", [("page", "3")])),
        );
        assert!(registry.buttons().is_empty());

        registry.add_button(
            delete_button(),
            None,
            Some(&RouteFilter::by_name_and_params("contact.index", [("page", "2")])),
        );
        assert_eq!(registry.buttons().len(), 1);
    }

    #[test]
    fn batch_add_applies_filter_once_for_all() {
        let mut registry = list_registry();
        let batch = vec![
            delete_button(),
            ButtonDescriptor::new().with_text("Export"),
        ];

        registry.add_buttons(batch.clone(), Some(&LocationFilter::is("sidebar")), None);
        assert!(registry.buttons().is_empty());

        registry.add_buttons(batch, Some(&LocationFilter::is("list")), None);
        assert_eq!(registry.buttons().len(), 2);
    }

    #[test]
    fn remove_button_deletes_matching_entry() {
        let mut registry = list_registry();
        registry.add_button(delete_button(), None, None);
        registry.remove_button(&delete_button());
        assert!(registry.buttons().is_empty());
    }

    #[test]
    fn remove_unknown_button_is_noop() {
        let mut registry = list_registry();
        registry.add_button(delete_button(), None, None);
        registry.remove_button(&ButtonDescriptor::new().with_text("Export"));
        assert_eq!(registry.buttons().len(), 1);
    }

    // ===== Accessors =====

    #[test]
    fn priority_ordering_is_descending() {
        let mut registry = list_registry();
        registry.add_button(delete_button().with_priority(1), None, None);
        registry.add_button(
            ButtonDescriptor::new().with_text("Export").with_priority(10),
            None,
            None,
        );
        registry.add_button(ButtonDescriptor::new().with_text("Merge"), None, None);

        let ordered: Vec<&str> = registry
            .buttons_by_priority()
            .iter()
            .map(|b| b.btn_text.as_deref().unwrap())
            .collect();
        assert_eq!(ordered, vec!["Export", "Delete", "Merge"]);
    }

    #[test]
    fn route_accessors_expose_context() {
        let registry = list_registry();
        assert_eq!(registry.route_name(), "contact.index");

        let (name, params) = registry.route();
        assert_eq!(name, "contact.index");
        assert_eq!(params.get("page").map(String::as_str), Some("2"));
        assert_eq!(registry.location(), "list");
    }

    #[test]
    fn item_is_exposed_for_view_contexts() {
        let registry = ContextualButtonRegistry::new(
            LOCATION_LIST_ACTIONS,
            contact_index_route(),
            Vec::new(),
            Some(serde_json::json!({"id": 5, "name": "Jane"})),
        );
        assert_eq!(registry.item().unwrap()["id"], 5);
    }
}
