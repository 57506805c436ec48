//! Typed, validated request parameters.
//!
//! Each endpoint that takes query parameters has a struct here carrying the
//! parsed values with defaults applied. `parse` converts the raw strings and
//! runs the `validator` rules; on failure it returns
//! [`CoreError::InvalidParams`] listing every bad field.

use validator::Validate;

use crate::error::CoreError;
use crate::search::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use crate::validation::ParamErrors;

// Parse failures reuse the range messages of the `#[validate]` attributes.
const PAGE_MSG: &str = "page must be >= 1";
const LIMIT_MSG: &str = "limit 1–100";
const CUSTOMER_ID_MSG: &str = "customer_id must be an integer >= 1";

/// Parameters of `GET /films/search`.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct FilmSearch {
    /// Search text, trimmed.
    #[validate(length(min = 1, max = 100, message = "q is required (1–100 chars)"))]
    pub q: String,
    #[validate(range(min = 1, message = "page must be >= 1"))]
    pub page: i64,
    #[validate(range(min = 1, max = MAX_LIMIT, message = "limit 1–100"))]
    pub limit: i64,
}

impl FilmSearch {
    const FIELDS: [&'static str; 3] = ["q", "page", "limit"];

    pub fn parse(
        q: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, CoreError> {
        let mut errors = ParamErrors::default();
        let parsed_page = errors.int("page", page, PAGE_MSG);
        let parsed_limit = errors.int("limit", limit, LIMIT_MSG);

        let params = Self {
            q: q.map(str::trim).unwrap_or_default().to_string(),
            page: parsed_page.unwrap_or(DEFAULT_PAGE),
            limit: parsed_limit.unwrap_or(DEFAULT_LIMIT),
        };

        // A missing `q` has no raw value but still fails the length rule.
        errors.check(&params, &[("q", q), ("page", page), ("limit", limit)]);
        errors.finish(params, &Self::FIELDS)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Parameters of `GET /customers`.
///
/// Every filter is optional; an absent filter imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CustomerFilter {
    #[validate(range(min = 1, message = "customer_id must be an integer >= 1"))]
    pub customer_id: Option<i64>,
    /// Substring of the first name, trimmed.
    #[validate(length(min = 1, max = 45, message = "first_name must be 1–45 chars"))]
    pub first_name: Option<String>,
    /// Substring of the last name, trimmed.
    #[validate(length(min = 1, max = 45, message = "last_name must be 1–45 chars"))]
    pub last_name: Option<String>,
    #[validate(range(min = 1, message = "page must be >= 1"))]
    pub page: i64,
    #[validate(range(min = 1, max = MAX_LIMIT, message = "limit 1–100"))]
    pub limit: i64,
}

/// Raw `/customers` query values, borrowed from the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCustomerQuery<'a> {
    pub page: Option<&'a str>,
    pub limit: Option<&'a str>,
    pub customer_id: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

impl CustomerFilter {
    const FIELDS: [&'static str; 5] = ["page", "limit", "customer_id", "first_name", "last_name"];

    pub fn parse(raw: RawCustomerQuery<'_>) -> Result<Self, CoreError> {
        let mut errors = ParamErrors::default();
        let page = errors.int("page", raw.page, PAGE_MSG);
        let limit = errors.int("limit", raw.limit, LIMIT_MSG);
        let customer_id = errors.int("customer_id", raw.customer_id, CUSTOMER_ID_MSG);

        let params = Self {
            customer_id,
            first_name: raw.first_name.map(|s| s.trim().to_string()),
            last_name: raw.last_name.map(|s| s.trim().to_string()),
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };

        errors.check(
            &params,
            &[
                ("page", raw.page),
                ("limit", raw.limit),
                ("customer_id", raw.customer_id),
                ("first_name", raw.first_name),
                ("last_name", raw.last_name),
            ],
        );
        errors.finish(params, &Self::FIELDS)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::validation::FieldError;

    const Q_MSG: &str = "q is required (1–100 chars)";
    const FIRST_NAME_MSG: &str = "first_name must be 1–45 chars";
    const LAST_NAME_MSG: &str = "last_name must be 1–45 chars";

    fn errors_of(err: CoreError) -> Vec<FieldError> {
        match err {
            CoreError::InvalidParams(list) => list,
            other => panic!("expected InvalidParams, got {other:?}"),
        }
    }

    // -- FilmSearch ----------------------------------------------------------

    #[test]
    fn film_search_applies_defaults() {
        let params = FilmSearch::parse(Some("academy"), None, None).unwrap();
        assert_eq!(params.q, "academy");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
        assert_eq!(params.pagination().offset(), 0);
    }

    #[test]
    fn film_search_trims_query() {
        let params = FilmSearch::parse(Some("  dinosaur  "), Some("2"), Some("10")).unwrap();
        assert_eq!(params.q, "dinosaur");
        assert_eq!(params.pagination().offset(), 10);
    }

    #[test]
    fn film_search_requires_q() {
        let list = errors_of(FilmSearch::parse(None, None, None).unwrap_err());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].path, "q");
        assert_eq!(list[0].msg, Q_MSG);
        assert_eq!(list[0].value, None);
    }

    #[test]
    fn film_search_rejects_blank_q() {
        let list = errors_of(FilmSearch::parse(Some("   "), None, None).unwrap_err());
        assert_eq!(list[0].path, "q");
        assert_eq!(list[0].value.as_deref(), Some("   "));
    }

    #[test]
    fn film_search_length_counts_characters_not_bytes() {
        let hundred = "é".repeat(100);
        assert!(FilmSearch::parse(Some(&hundred), None, None).is_ok());

        let too_long = "a".repeat(101);
        let list = errors_of(FilmSearch::parse(Some(&too_long), None, None).unwrap_err());
        assert_eq!(list[0].path, "q");
    }

    #[test]
    fn film_search_page_and_limit_bounds() {
        let list = errors_of(FilmSearch::parse(Some("a"), Some("0"), Some("101")).unwrap_err());
        let paths: Vec<_> = list.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["page", "limit"]);
        assert_eq!(list[0].msg, PAGE_MSG);
        assert_eq!(list[1].msg, LIMIT_MSG);

        assert!(FilmSearch::parse(Some("a"), Some("1"), Some("100")).is_ok());
        assert!(FilmSearch::parse(Some("a"), Some("1"), Some("0")).is_err());
    }

    #[test]
    fn limit_upper_bound_is_max_limit() {
        let max = MAX_LIMIT.to_string();
        let over = (MAX_LIMIT + 1).to_string();

        assert!(FilmSearch::parse(Some("a"), None, Some(&max)).is_ok());
        assert!(FilmSearch::parse(Some("a"), None, Some(&over)).is_err());

        fn with_limit(limit: &str) -> RawCustomerQuery<'_> {
            RawCustomerQuery {
                limit: Some(limit),
                ..Default::default()
            }
        }
        assert_eq!(CustomerFilter::parse(with_limit(&max)).unwrap().limit, MAX_LIMIT);
        let list = errors_of(CustomerFilter::parse(with_limit(&over)).unwrap_err());
        assert_eq!(list[0].path, "limit");
    }

    #[test]
    fn film_search_reports_every_bad_field_in_order() {
        let list = errors_of(FilmSearch::parse(None, Some("abc"), Some("-1")).unwrap_err());
        let paths: Vec<_> = list.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["q", "page", "limit"]);
        assert_eq!(list[1].value.as_deref(), Some("abc"));
    }

    // -- CustomerFilter ------------------------------------------------------

    #[test]
    fn customer_filter_defaults_to_no_constraints() {
        let filter = CustomerFilter::parse(RawCustomerQuery::default()).unwrap();
        assert_eq!(filter.customer_id, None);
        assert_eq!(filter.first_name, None);
        assert_eq!(filter.last_name, None);
        assert_eq!(filter.pagination(), Pagination::default());
    }

    #[test]
    fn customer_filter_parses_all_fields() {
        let filter = CustomerFilter::parse(RawCustomerQuery {
            page: Some("3"),
            limit: Some("5"),
            customer_id: Some("42"),
            first_name: Some(" mar "),
            last_name: Some("smith"),
        })
        .unwrap();
        assert_eq!(filter.customer_id, Some(42));
        assert_eq!(filter.first_name.as_deref(), Some("mar"));
        assert_eq!(filter.last_name.as_deref(), Some("smith"));
        assert_eq!(filter.pagination().offset(), 10);
    }

    #[test]
    fn customer_filter_rejects_non_integer_id() {
        let err = CustomerFilter::parse(RawCustomerQuery {
            customer_id: Some("abc"),
            ..Default::default()
        })
        .unwrap_err();
        assert_matches!(&err, CoreError::InvalidParams(list) if list.len() == 1);
        let list = errors_of(err);
        assert_eq!(list[0].path, "customer_id");
        assert_eq!(list[0].msg, CUSTOMER_ID_MSG);
    }

    #[test]
    fn customer_filter_rejects_zero_id() {
        let list = errors_of(
            CustomerFilter::parse(RawCustomerQuery {
                customer_id: Some("0"),
                ..Default::default()
            })
            .unwrap_err(),
        );
        assert_eq!(list[0].path, "customer_id");
    }

    #[test]
    fn customer_filter_rejects_blank_and_long_names() {
        let long = "x".repeat(46);
        let list = errors_of(
            CustomerFilter::parse(RawCustomerQuery {
                first_name: Some("  "),
                last_name: Some(&long),
                ..Default::default()
            })
            .unwrap_err(),
        );
        let paths: Vec<_> = list.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["first_name", "last_name"]);
        assert_eq!(list[0].msg, FIRST_NAME_MSG);
        assert_eq!(list[1].msg, LAST_NAME_MSG);
    }
}
