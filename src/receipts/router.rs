//! HTTP endpoints for receipt processing and point lookup.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;

use super::service::ReceiptService;
use super::store::ReceiptStore;
use super::{Receipt, ReceiptId};

#[derive(Debug, Serialize)]
struct ProcessReceiptResponse {
    id: ReceiptId,
}

#[derive(Debug, Serialize)]
struct PointsResponse {
    points: u32,
}

/// Router builder exposing the process and points endpoints.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ReceiptStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:id/points", get(points_handler::<S>))
        .with_state(service)
}

async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Json(receipt): Json<Receipt>,
) -> Result<Json<ProcessReceiptResponse>, AppError>
where
    S: ReceiptStore + 'static,
{
    let id = service.process(receipt)?;
    Ok(Json(ProcessReceiptResponse { id }))
}

async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError>
where
    S: ReceiptStore + 'static,
{
    let points = service.points(&ReceiptId(id))?;
    Ok(Json(PointsResponse { points }))
}
