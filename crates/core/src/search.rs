//! Pagination constants and substring-search helpers.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when `page` is omitted.
pub const DEFAULT_PAGE: i64 = 1;

/// Rows per page when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Number of rows returned by the "top" rankings.
pub const TOP_N: i64 = 5;

/// A validated `page` / `limit` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Rows to skip: `(page - 1) * limit`, saturating for absurd page numbers
    /// so the query simply returns nothing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).max(0).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

// ---------------------------------------------------------------------------
// LIKE patterns
// ---------------------------------------------------------------------------

/// Build a `LIKE` pattern matching `term` anywhere in the column.
///
/// `%`, `_` and the escape character `\` are escaped so the user's text is
/// matched literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
