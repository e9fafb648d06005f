use crate::web::api::{
    area_handler, contains_handler, distance_handler, get_settings, heatmap_handler,
    interior_handler, layout_handler, markers_handler, region_handler,
};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use field_layout::layout::LayoutSettings;
use std::net::{IpAddr, SocketAddr, TcpListener};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(settings: Arc<LayoutSettings>) -> Router {
    Router::new()
        .route("/api/settings", get(get_settings))
        .route("/api/distance", post(distance_handler))
        .route("/api/area", post(area_handler))
        .route("/api/contains", post(contains_handler))
        .route("/api/markers", post(markers_handler))
        .route("/api/interior", post(interior_handler))
        .route("/api/region", post(region_handler))
        .route("/api/heatmap", post(heatmap_handler))
        .route("/api/layout", post(layout_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(settings)
}

pub async fn run_server(host: IpAddr, port: u16, settings: LayoutSettings) -> Result<()> {
    let mut current_port = port;
    let listener = loop {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr) {
            Ok(listener) => {
                // Tokio requires non-blocking std listeners
                listener.set_nonblocking(true)?;
                info!("Successfully bound to {}", addr);
                break listener;
            }
            Err(e) => {
                warn!("Failed to bind to {}: {}. Trying next port...", addr, e);
                current_port = current_port.wrapping_add(1);
                if current_port == 0 {
                    return Err(anyhow::anyhow!("No available ports found"));
                }
            }
        }
    };

    let app = router(Arc::new(settings));

    let tokio_listener = tokio::net::TcpListener::from_std(listener)?;
    info!(
        "Field layout server started on http://{:?}",
        tokio_listener.local_addr()?
    );

    axum::serve(tokio_listener, app).await?;

    Ok(())
}
