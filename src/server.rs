use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{info, warn};

use crate::aggregator::Aggregator;
use crate::clients::{
    entities::TrackInfo,
    errors::{Error, Result},
};

impl Error {
    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::UpstreamUnavailable(_)
            | Error::MalformedUpstreamResponse(_)
            | Error::ConfigurationError(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Plain-text body carrying the error text
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!("Request failed with {status}: {self}");
        (status, self.to_string()).into_response()
    }
}

/// Router serving `GET /track/{region}`.
pub fn router(aggregator: Arc<Aggregator>) -> Router {
    Router::new()
        .route("/track/{region}", get(get_top_track_info))
        .with_state(aggregator)
}

async fn get_top_track_info(
    State(aggregator): State<Arc<Aggregator>>,
    Path(region): Path<String>,
) -> Result<Json<TrackInfo>> {
    aggregator.get_top_track_info(&region).await.map(Json)
}

/// Bind `0.0.0.0:{port}` and serve until the process is stopped.
pub async fn serve(aggregator: Aggregator, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server started at port {port}");
    axum::serve(listener, router(Arc::new(aggregator))).await?;
    Ok(())
}
