//! Shared query parameter types for API handlers.
//!
//! Every list endpoint takes the same `?page=&limit=&search=&orderBy=&order=`
//! parameters; this module centralizes their parsing and validation.

use petshop_core::pagination::{clamp_limit, clamp_page, offset_for};
use serde::Deserialize;

use crate::error::AppError;

/// Generic list parameters (`?page=&limit=&search=&orderBy=&order=`).
///
/// Page is 1-based. `orderBy` must name a column from the entity's
/// whitelist; `order` is `asc` (default) or `desc`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    /// Clamped `(page, limit, offset)` triple.
    pub fn pagination(&self) -> (i64, i64, i64) {
        let page = clamp_page(self.page);
        let limit = clamp_limit(self.limit);
        (page, limit, offset_for(page, limit))
    }

    /// The search filter, if a non-empty one was given.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Resolve `(orderBy, descending)` against the entity's column
    /// whitelist. Unknown columns and order directions are a 400 rather
    /// than silently ignored.
    pub fn ordering(
        &self,
        allowed: &'static [&'static str],
        default: &'static str,
    ) -> Result<(&'static str, bool), AppError> {
        let column = match self.order_by.as_deref() {
            None => default,
            Some(requested) => allowed
                .iter()
                .find(|c| **c == requested)
                .copied()
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Invalid orderBy column '{requested}'; allowed: {}",
                        allowed.join(", ")
                    ))
                })?,
        };

        let descending = match self.order.as_deref() {
            None => false,
            Some(o) if o.eq_ignore_ascii_case("asc") => false,
            Some(o) if o.eq_ignore_ascii_case("desc") => true,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid order '{other}'; expected 'asc' or 'desc'"
                )))
            }
        };

        Ok((column, descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(order_by: Option<&str>, order: Option<&str>) -> ListParams {
        ListParams {
            page: None,
            limit: None,
            search: None,
            order_by: order_by.map(String::from),
            order: order.map(String::from),
        }
    }

    const ALLOWED: &[&str] = &["id", "nome", "created_at"];

    #[test]
    fn ordering_defaults_when_absent() {
        let (col, desc) = params(None, None).ordering(ALLOWED, "id").unwrap();
        assert_eq!(col, "id");
        assert!(!desc);
    }

    #[test]
    fn ordering_accepts_whitelisted_column_and_direction() {
        let (col, desc) = params(Some("nome"), Some("DESC"))
            .ordering(ALLOWED, "id")
            .unwrap();
        assert_eq!(col, "nome");
        assert!(desc);
    }

    #[test]
    fn ordering_rejects_unknown_column() {
        let result = params(Some("senha_hash"), None).ordering(ALLOWED, "id");
        assert!(result.is_err(), "non-whitelisted column must be rejected");
    }

    #[test]
    fn ordering_rejects_unknown_direction() {
        let result = params(Some("nome"), Some("sideways")).ordering(ALLOWED, "id");
        assert!(result.is_err());
    }

    #[test]
    fn empty_search_is_none() {
        let mut p = params(None, None);
        p.search = Some(String::new());
        assert_eq!(p.search(), None);
    }
}
