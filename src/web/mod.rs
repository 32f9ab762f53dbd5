pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use routes::{cluster, public_url, recommendations};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/recommendations",
            get(recommendations::recommendations_handler),
        )
        .route(
            "/same-cluster-users/:user_id",
            get(cluster::same_cluster_users_handler),
        )
        .route("/get-public-url", get(public_url::public_url_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
