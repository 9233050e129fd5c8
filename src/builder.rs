// Clause Builder

use crate::types::*;
use crate::utils::{validate_range, StringValidator};
use std::fmt;

/// Largest page the server will hand back in one call
pub const MAX_ROWS_PER_PAGE: u32 = 2000;

const FIELD_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]*$";

/// Comparison used in a `query=(...)` clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOp {
    Is,
    StartsWith,
}

impl QueryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOp::Is => "is",
            QueryOp::StartsWith => "startswith",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// A fluent builder for the query, sort and paging clauses appended to
/// collection URLs.
///
/// ```
/// use cupi_rs::{Clauses, QueryOp, SortOrder};
///
/// let clauses = Clauses::new()
///     .query("alias", QueryOp::StartsWith, "ab")?
///     .sort("alias", SortOrder::Ascending)?
///     .page(2, 50)?;
///
/// assert_eq!(
///     clauses.to_strings(),
///     vec!["query=(alias startswith ab)", "sort=(alias asc)", "pageNumber=2", "rowsPerPage=50"]
/// );
/// # Ok::<(), cupi_rs::CupiError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses {
    query: Option<String>,
    sort: Option<String>,
    page_number: Option<u32>,
    rows_per_page: Option<u32>,
    extra: Vec<String>,
}

impl Clauses {
    pub fn new() -> Self {
        Self::default()
    }

    /// No clauses at all; the server's default first page
    pub fn none() -> Self {
        Self::default()
    }

    // Field names are bare identifiers; anything else would break the clause syntax
    fn field_name(field: impl Into<String>, param_name: &str) -> CupiResult<String> {
        let field = StringValidator::not_empty(field, param_name)?;
        StringValidator::matches_pattern(field.trim(), FIELD_NAME_PATTERN, param_name)
    }

    /// Filter on a field, e.g. `query=(alias startswith ab)`
    pub fn query(mut self, field: impl Into<String>, op: QueryOp, value: impl Into<String>) -> CupiResult<Self> {
        let field = Self::field_name(field, "query field")?;
        let value = StringValidator::not_empty(value, "query value")?;
        self.query = Some(format!(
            "query=({} {} {})",
            field.trim(),
            op.as_str(),
            encode_query_value(value.trim())
        ));
        Ok(self)
    }

    /// Order the result set, e.g. `sort=(alias asc)`
    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> CupiResult<Self> {
        let field = Self::field_name(field, "sort field")?;
        self.sort = Some(format!("sort=({} {})", field.trim(), order.as_str()));
        Ok(self)
    }

    /// Request one page; page numbers start at 1
    pub fn page(mut self, page_number: u32, rows_per_page: u32) -> CupiResult<Self> {
        let page_number = validate_range(page_number, 1, u32::MAX, "page_number")?;
        let rows_per_page = validate_range(rows_per_page, 1, MAX_ROWS_PER_PAGE, "rows_per_page")?;
        self.page_number = Some(page_number);
        self.rows_per_page = Some(rows_per_page);
        Ok(self)
    }

    /// Append a clause verbatim, e.g. `userobjectid=...`
    pub fn raw(mut self, clause: impl Into<String>) -> CupiResult<Self> {
        let clause = StringValidator::not_empty(clause, "clause")?;
        self.extra.push(clause.trim().to_string());
        Ok(self)
    }

    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    pub fn rows_per_page(&self) -> Option<u32> {
        self.rows_per_page
    }

    pub fn is_empty(&self) -> bool {
        self.to_strings().is_empty()
    }

    /// Same clauses pointed at another page
    pub(crate) fn with_page(&self, page_number: u32, rows_per_page: u32) -> CupiResult<Self> {
        self.clone().page(page_number, rows_per_page)
    }

    /// Render each clause in the order the server documents them
    pub fn to_strings(&self) -> Vec<String> {
        let mut clauses = Vec::new();
        if let Some(query) = &self.query {
            clauses.push(query.clone());
        }
        if let Some(sort) = &self.sort {
            clauses.push(sort.clone());
        }
        if let Some(page_number) = self.page_number {
            clauses.push(format!("pageNumber={}", page_number));
        }
        if let Some(rows) = self.rows_per_page {
            clauses.push(format!("rowsPerPage={}", rows));
        }
        clauses.extend(self.extra.iter().cloned());
        clauses
    }

    /// Append these clauses to a URI
    pub fn apply(&self, uri: &str) -> String {
        add_clauses_to_uri(uri, &self.to_strings())
    }
}

impl fmt::Display for Clauses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strings().join("&"))
    }
}

/// Percent-encode a query value so `&`, `#` and friends stay inside the clause.
/// Spaces become `%20`, matching how the rest of the clause is encoded.
fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Append clauses to a URI, starting with `?` or `&` depending on whether it
/// already carries a query string. Blank clauses are skipped.
pub fn add_clauses_to_uri<S: AsRef<str>>(uri: &str, clauses: &[S]) -> String {
    let mut result = uri.to_string();
    for clause in clauses {
        let clause = clause.as_ref().trim();
        if clause.is_empty() {
            continue;
        }
        result.push(if result.contains('?') { '&' } else { '?' });
        result.push_str(clause);
    }
    result
}
