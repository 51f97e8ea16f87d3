//! Pure filter/sort/paginate over a collection snapshot.
//!
//! The engine never touches the store: it takes a value-copy of the
//! records, applies the role filter, an optional stable sort and a
//! clamped pagination window, and reports the pre-pagination match count.

use crate::models::{Role, User};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Sortable fields. Anything else is ignored at parse time, so the
/// engine only ever sees a valid field or no sort at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    CreatedAt,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::CreatedAt => write!(f, "createdAt"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Options for one query pass. `limit`/`offset` stay raw (signed,
/// optional) here; clamping happens inside the engine.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub role: Option<Role>,
    pub sort: Option<Sort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One page of results plus the pre-pagination match count.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub items: Vec<User>,
    pub total: usize,
}

/// Clamp a requested limit into `[1, MAX_LIMIT]`, defaulting to
/// `DEFAULT_LIMIT` when absent.
pub fn clamp_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(v) => v.clamp(1, MAX_LIMIT as i64) as usize,
        None => DEFAULT_LIMIT,
    }
}

/// Clamp a requested offset to zero or above, defaulting to 0.
pub fn clamp_offset(offset: Option<i64>) -> usize {
    offset.map_or(0, |v| v.max(0) as usize)
}

/// Run the query: filter, stable sort, paginate.
///
/// Descending order reverses the comparison result inside the stable
/// sort rather than reversing the sorted slice, so ties keep their
/// original relative order in both directions. An offset past the end of
/// the filtered set yields an empty page, not an error.
pub fn run(records: Vec<User>, options: &QueryOptions) -> QueryResult {
    let mut matches: Vec<User> = records
        .into_iter()
        .filter(|u| options.role.is_none_or(|role| u.role == role))
        .collect();

    if let Some(sort) = options.sort {
        matches.sort_by(|a, b| {
            let ord = match sort.field {
                SortField::Name => a.name.cmp(&b.name),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    let total = matches.len();
    let items = matches
        .into_iter()
        .skip(clamp_offset(options.offset))
        .take(clamp_limit(options.limit))
        .collect();

    QueryResult { items, total }
}
