//! Predicate filtering over in-memory record lists
//!
//! All four domain lists share the same filtering model: zero or more
//! categorical exact-match constraints combined with one case-insensitive
//! substring search over the record's designated text fields, all joined
//! conjunctively. The per-domain filter structs in `services` compose their
//! constraints out of the helpers here.

/// Implemented by records that can be matched by the free-text search box
pub trait Searchable {
    /// The text fields scanned by the search query, in no particular order
    fn search_fields(&self) -> Vec<&str>;
}

/// Apply a predicate to a record list, preserving the original order
///
/// This is a stable filter: the output is the ordered subsequence of records
/// satisfying the predicate, never a re-sort. An empty input yields an empty
/// output; a predicate that accepts everything yields the full list.
pub fn apply<'a, R>(records: &'a [R], mut predicate: impl FnMut(&R) -> bool) -> Vec<&'a R> {
    records.iter().filter(|r| predicate(r)).collect()
}

/// Match a categorical constraint against a field's canonical name
///
/// `None` represents the "All"/"All Categories" wildcard and matches every
/// record. A selected value is compared exactly (case-sensitive); a value
/// outside the domain vocabulary therefore matches no record at all rather
/// than being an error.
pub fn selection_matches(selected: Option<&str>, value: &str) -> bool {
    match selected {
        None => true,
        Some(sel) => sel == value,
    }
}

/// Match a free-text query against a record's designated text fields
///
/// The query and fields are case-folded; the record matches when any field
/// contains the query as a substring. An empty query matches everything.
pub fn query_matches(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Match a free-text query against a `Searchable` record
pub fn search_matches<R: Searchable>(record: &R, query: &str) -> bool {
    query_matches(query, &record.search_fields())
}
