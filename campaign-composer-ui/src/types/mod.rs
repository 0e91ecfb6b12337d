//! Request-scoped UI value types

mod button;
mod form;
mod route;

pub use button::{ButtonDescriptor, ConfirmDescriptor};
pub use form::{Constraint, FieldDescriptor, FormFieldSpec, WidgetType};
pub use route::{
    LocationFilter, RequestSnapshot, RouteContext, RouteFilter, LOCATION_BULK_ACTIONS,
    LOCATION_LIST_ACTIONS, LOCATION_NAVBAR, LOCATION_PAGE_ACTIONS, LOCATION_TOOLBAR,
};
