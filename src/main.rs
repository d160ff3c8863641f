//! HTTP service exposing the DIGIPIN codec.
//!
//! Two POST routes wrap the pure encode/decode pair and a liveness probe
//! reports that the process is up. The codec itself is stateless, so the
//! handlers share nothing but the crate's static grid tables.

use anyhow::Result;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use digipin_rs::DigiPin;

#[derive(Parser, Debug)]
#[command(name = "digipin-server")]
#[command(about = "DIGIPIN encode/decode API server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, router()).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/digipin/encode", post(encode_handler))
        .route("/api/digipin/decode", post(decode_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
struct EncodeRequest {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
struct EncodeResponse {
    digipin: String,
}

#[derive(Debug, Deserialize)]
struct DecodeRequest {
    digipin: Option<String>,
}

#[derive(Debug, Serialize)]
struct DecodeResponse {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
}

/// POST /api/digipin/encode
async fn encode_handler(
    Json(request): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
        return Err(bad_request("latitude and longitude are required"));
    };

    let pin = DigiPin::from_lat_lon(latitude, longitude)
        .map_err(|error| bad_request(error.to_string()))?;

    Ok(Json(EncodeResponse { digipin: pin.code }))
}

/// POST /api/digipin/decode
async fn decode_handler(
    Json(request): Json<DecodeRequest>,
) -> Result<Json<DecodeResponse>, ApiError> {
    let Some(digipin) = request.digipin else {
        return Err(bad_request("digipin is required"));
    };

    let pin = DigiPin::from_code(&digipin).map_err(|error| bad_request(error.to_string()))?;

    Ok(Json(DecodeResponse {
        latitude: pin.latitude(),
        longitude: pin.longitude(),
    }))
}

/// Liveness probe, no codec involvement.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
