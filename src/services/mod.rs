pub mod catalog_service;
pub mod favorite_service;
pub mod user_service;

use crate::error::ApiError;

/// Applique la politique "collection vide": 404 si `not_found` est actif,
/// sinon la liste vide est renvoyée telle quelle
pub fn ensure_not_empty<T>(
    rows: Vec<T>,
    not_found: bool,
    error: impl FnOnce() -> ApiError,
) -> Result<Vec<T>, ApiError> {
    if rows.is_empty() && not_found {
        return Err(error());
    }
    Ok(rows)
}
