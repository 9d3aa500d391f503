//! Product CRUD handlers.
//!
//! Every handler validates its input before touching the data layer and
//! terminates in exactly one response write. JSON body rejections are
//! mapped to the uniform `{"error": ...}` shape rather than axum's default
//! rejection bodies.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::db::ProductRepository;
use crate::error::ApiError;
use crate::models::product::{DeletedProduct, Product, ProductId, ProductInput};
use crate::state::AppState;

/// Largest page size served by `list_products`.
const MAX_PAGE_SIZE: i64 = 10;

/// Pagination parameters for the product listing.
///
/// Kept as raw strings so unparsable values degrade to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    start: Option<String>,
    count: Option<String>,
}

/// `GET /product/{id}` - fetch a single product.
///
/// # Errors
///
/// `400` for a non-integer id, `404` when no row matches, `500` on any
/// other store failure.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    let product = ProductRepository::new(state.pool()).get(id).await?;
    Ok(Json(product))
}

/// `GET /products?start=N&count=M` - paginated listing ordered by name.
///
/// `count` is clamped to `[1, 10]` (anything outside resets to 10) and
/// `start` to `>= 0`. An empty table yields `[]`.
///
/// # Errors
///
/// `500` on a store failure; the handler short-circuits rather than
/// emitting a body after the error.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let (start, count) = page_window(&params);
    let products = ProductRepository::new(state.pool())
        .list(start, count)
        .await?;
    Ok(Json(products))
}

/// `POST /product` - create a product; the store assigns the id.
///
/// # Errors
///
/// `400` when the body fails to decode, `500` on a store failure.
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(input) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let product = ProductRepository::new(state.pool()).create(&input).await?;
    Ok(Json(product))
}

/// `PUT /product/{id}` - update name and price for the row matching id.
///
/// The path id is authoritative; an `id` field in the body is ignored.
/// Responds with the row as stored after the update.
///
/// # Errors
///
/// `400` for a non-integer id or undecodable body, `404` when no row
/// matches, `500` on any other store failure.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    let Json(input) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let product = ProductRepository::new(state.pool())
        .update(id, &input)
        .await?;
    Ok(Json(product))
}

/// `DELETE /product/{id}` - delete the row matching id.
///
/// Responds with `{"id": <id>}`, the id that was requested for deletion.
///
/// # Errors
///
/// `400` for a non-integer id, `404` when no row matched, `500` on any
/// other store failure.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedProduct>, ApiError> {
    let id = parse_product_id(&id)?;
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("product not found".to_string()));
    }
    Ok(Json(DeletedProduct { id }))
}

/// Parse the `{id}` path segment, rejecting non-integers at the handler
/// boundary before any data-layer call.
fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<i32>()
        .map(ProductId::new)
        .map_err(|_| ApiError::BadRequest("invalid product id".to_string()))
}

/// Normalize pagination parameters to a valid `(offset, limit)` window.
fn page_window(params: &ListParams) -> (i64, i64) {
    let mut start = int_or_zero(params.start.as_deref());
    let mut count = int_or_zero(params.count.as_deref());

    if !(1..=MAX_PAGE_SIZE).contains(&count) {
        count = MAX_PAGE_SIZE;
    }
    if start < 0 {
        start = 0;
    }

    (start, count)
}

/// Missing or unparsable integers default to 0.
fn int_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn params(start: Option<&str>, count: Option<&str>) -> ListParams {
        ListParams {
            start: start.map(String::from),
            count: count.map(String::from),
        }
    }

    #[test]
    fn test_page_window_defaults() {
        assert_eq!(page_window(&ListParams::default()), (0, 10));
    }

    #[test]
    fn test_count_zero_resets_to_max() {
        assert_eq!(page_window(&params(None, Some("0"))), (0, 10));
    }

    #[test]
    fn test_count_negative_resets_to_max() {
        assert_eq!(page_window(&params(None, Some("-4"))), (0, 10));
    }

    #[test]
    fn test_count_above_max_resets_to_max() {
        assert_eq!(page_window(&params(None, Some("999"))), (0, 10));
    }

    #[test]
    fn test_count_in_range_kept() {
        assert_eq!(page_window(&params(None, Some("1"))), (0, 1));
        assert_eq!(page_window(&params(None, Some("5"))), (0, 5));
        assert_eq!(page_window(&params(None, Some("10"))), (0, 10));
    }

    #[test]
    fn test_count_unparsable_resets_to_max() {
        // Unparsable defaults to 0, which the clamp then resets to 10.
        assert_eq!(page_window(&params(None, Some("ten"))), (0, 10));
        assert_eq!(page_window(&params(None, Some(""))), (0, 10));
    }

    #[test]
    fn test_start_negative_clamped_to_zero() {
        assert_eq!(page_window(&params(Some("-3"), Some("5"))), (0, 5));
    }

    #[test]
    fn test_start_unparsable_defaults_to_zero() {
        assert_eq!(page_window(&params(Some("first"), Some("5"))), (0, 5));
    }

    #[test]
    fn test_start_positive_kept() {
        assert_eq!(page_window(&params(Some("20"), Some("10"))), (20, 10));
    }

    #[test]
    fn test_parse_product_id_valid() {
        assert_eq!(parse_product_id("42").unwrap(), ProductId::new(42));
    }

    #[test]
    fn test_parse_product_id_rejects_non_integers() {
        for raw in ["abc", "12abc", "1.5", "", " 1"] {
            let err = parse_product_id(raw).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "accepted {raw:?}");
            assert_eq!(err.to_string(), "invalid product id");
        }
    }
}
