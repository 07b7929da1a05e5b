//! Reference designator classification.

use crate::emissions::matcher::MatchError;

/// Extract the categorical prefix of a reference designator: the maximal
/// leading run of uppercase letters ("R101" -> "R", "U3" -> "U").
///
/// A designator with no such run ("101", "r101") cannot be categorized and
/// is a fatal error in designator-matching mode.
pub fn designator_category(designator: &str) -> Result<&str, MatchError> {
    let end = designator
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(designator.len());
    if end == 0 {
        return Err(MatchError::UnclassifiableDesignator(designator.to_string()));
    }
    Ok(&designator[..end])
}
