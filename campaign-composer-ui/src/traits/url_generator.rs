//! URL generation seam
//!
//! The routing table belongs to the host framework; this crate only asks it
//! to turn a route name and params into a URL string.

use url::Url;

use crate::error::{UiError, UiResult};

/// Routing collaborator turning route names into URLs
pub trait UrlGenerator {
    /// Generate a URL for the named route with the given query params
    fn generate(&self, route: &str, params: &[(&str, &str)]) -> UiResult<String>;
}

impl<F> UrlGenerator for F
where
    F: Fn(&str, &[(&str, &str)]) -> UiResult<String>,
{
    fn generate(&self, route: &str, params: &[(&str, &str)]) -> UiResult<String> {
        self(route, params)
    }
}

/// Query-string URL generator: `<base>/<route>?<params>`
///
/// Standalone implementation for hosts without a routing table (previews,
/// tests, CLI tooling). Route names are used verbatim as a single path
/// segment.
#[derive(Debug, Clone)]
pub struct QueryUrlGenerator {
    base: Url,
}

impl QueryUrlGenerator {
    /// Create a generator from an absolute base URL
    pub fn new(base: &str) -> UiResult<Self> {
        let base = Url::parse(base)
            .map_err(|e| UiError::InvalidArgument(format!("invalid base URL '{base}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(UiError::InvalidArgument(format!(
                "base URL '{base}' cannot carry path segments"
            )));
        }
        Ok(Self { base })
    }
}

impl UrlGenerator for QueryUrlGenerator {
    fn generate(&self, route: &str, params: &[(&str, &str)]) -> UiResult<String> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| UiError::UrlGeneration {
                route: route.to_string(),
                message: "base URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .push(route);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url.to_string())
    }
}
