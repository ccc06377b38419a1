//! Request input validation

use crate::error::PageError;

/// Parse a 1-based artist id and check it against the catalog size
///
/// Missing, non-numeric, zero, negative and out-of-range ids are all
/// `BadRequest`.
pub fn artist_id(raw: Option<&str>, catalog_len: usize) -> Result<usize, PageError> {
    let raw = raw.ok_or_else(|| PageError::BadRequest("missing artist id".to_string()))?;

    let id: i64 = raw
        .parse()
        .map_err(|_| PageError::BadRequest(format!("artist id is not a number: {:?}", raw)))?;

    if id < 1 || id as u64 > catalog_len as u64 {
        return Err(PageError::BadRequest(format!(
            "artist id {} out of range 1..={}",
            id, catalog_len
        )));
    }

    Ok(id as usize)
}

/// Require a present, non-empty search query
pub fn search_query(raw: Option<String>) -> Result<String, PageError> {
    match raw {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(PageError::BadRequest("missing search query".to_string())),
    }
}
