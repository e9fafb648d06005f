mod cli;
mod web;

use anyhow::Result;
use cli::{Args, Command};
use field_layout::field_context::{load_coordinates_csv, load_request, write_report};
use field_layout::layout::{build_layout, LayoutRequest, LayoutSettings};
use tracing::{info, warn};
use web::server::run_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse_args();

    match &args.command {
        Command::Compute {
            request,
            boundary_csv,
            line_csv,
            output,
        } => {
            let mut layout_request = match request {
                Some(path) => load_request(path)?,
                None => LayoutRequest::default(),
            };
            if let Some(path) = boundary_csv {
                layout_request.boundary = load_coordinates_csv(path)?;
            }
            if let Some(path) = line_csv {
                layout_request.line = load_coordinates_csv(path)?;
            }
            // Flags set the base; settings inside the request file override them
            let settings = args.apply_to(&LayoutSettings::default());

            info!(
                "Computing layout: {} boundary points, {} line points, {} readings",
                layout_request.boundary.len(),
                layout_request.line.len(),
                layout_request.readings.len()
            );

            let report = build_layout(&layout_request, &settings);
            if report.boundary_incomplete() {
                warn!("Boundary has fewer than three points; area and interior points are empty");
            }
            info!(
                "Area {:.2} acres, {} line markers, {} interior points",
                report.area.acres,
                report.line_markers.len(),
                report.interior_markers.len()
            );

            match output {
                Some(path) => {
                    write_report(path, &report)?;
                    info!("Report written to {:?}", path);
                }
                None => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Serve { host, port } => {
            let settings = args.apply_to(&LayoutSettings::default());
            run_server(*host, *port, settings).await?;
        }
    }

    Ok(())
}
