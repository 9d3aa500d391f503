//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health        - Liveness check
//! GET    /health/ready  - Readiness check (verifies database)
//!
//! # Products
//! GET    /products      - Paginated listing (?start=N&count=M)
//! POST   /product       - Create a product
//! GET    /product/{id}  - Fetch a product
//! PUT    /product/{id}  - Update a product
//! DELETE /product/{id}  - Delete a product
//! ```

pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/product", post(products::create_product))
        .route(
            "/product/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
