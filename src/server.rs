use crate::data::{AllocationInput, AllocationOutput};
use crate::solver;
use crate::summary::RosterSummary;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use log::info;
use serde_json::{Value, json};

async fn allocate_handler(
    Json(input): Json<AllocationInput>,
) -> Result<Json<AllocationOutput>, (StatusCode, Json<Value>)> {
    match solver::allocate(&input) {
        Ok(output) => Ok(Json(output)),
        Err(e) => Err((StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))),
    }
}

async fn summary_handler(Json(input): Json<AllocationInput>) -> Json<RosterSummary> {
    Json(RosterSummary::from_input(&input))
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/allocation/compute", post(allocate_handler))
        .route("/v1/allocation/summary", post(summary_handler))
}

pub async fn run_server(addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router()).await
}
