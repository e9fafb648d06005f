use clap::{Parser, Subcommand};
use field_layout::geometry::{AreaMethod, InteriorPolicy};
use field_layout::layout::LayoutSettings;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Spacing between line markers in meters
    #[arg(long, global = true, env = "FIELD_LAYOUT_INTERVAL_M")]
    pub interval: Option<f64>,

    /// Degrees of padding added to the map region spans
    #[arg(long, global = true, env = "FIELD_LAYOUT_PADDING")]
    pub padding: Option<f64>,

    /// Area method: tangent-plane or spherical
    #[arg(long, global = true, env = "FIELD_LAYOUT_AREA_METHOD")]
    pub area_method: Option<AreaMethod>,

    /// Interior point policy: centroid-midpoints or edge-midpoints
    #[arg(long, global = true, env = "FIELD_LAYOUT_INTERIOR_POLICY")]
    pub interior_policy: Option<InteriorPolicy>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a layout report from a request file
    Compute {
        /// Layout request JSON
        #[arg(short, long, value_name = "FILE")]
        request: Option<PathBuf>,

        /// Boundary as latitude,longitude CSV (replaces the request boundary)
        #[arg(long, value_name = "FILE")]
        boundary_csv: Option<PathBuf>,

        /// Traced line as latitude,longitude CSV (replaces the request line)
        #[arg(long, value_name = "FILE")]
        line_csv: Option<PathBuf>,

        /// Where to write the report; stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Serve the layout engine over HTTP
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1", env = "FIELD_LAYOUT_HOST")]
        host: IpAddr,

        /// Port to bind to
        #[arg(long, default_value_t = 12207, env = "FIELD_LAYOUT_PORT")]
        port: u16,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Overlay the flags that were given on top of `base`
    pub fn apply_to(&self, base: &LayoutSettings) -> LayoutSettings {
        let mut settings = base.clone();
        if let Some(interval) = self.interval {
            settings.marker_interval_m = interval;
        }
        if let Some(padding) = self.padding {
            settings.region_padding = padding;
        }
        if let Some(method) = self.area_method {
            settings.area_method = method;
        }
        if let Some(policy) = self.interior_policy {
            settings.interior_policy = policy;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let args = Args::parse_from([
            "field-layout",
            "compute",
            "--interval",
            "20",
            "--area-method",
            "spherical",
        ]);
        let settings = args.apply_to(&LayoutSettings::default());
        assert_eq!(settings.marker_interval_m, 20.0);
        assert_eq!(settings.area_method, AreaMethod::Spherical);
        assert_eq!(settings.region_padding, 0.1);
        assert_eq!(settings.interior_policy, InteriorPolicy::CentroidMidpoints);
    }

    #[test]
    fn test_serve_defaults() {
        let args = Args::parse_from(["field-layout", "serve"]);
        match args.command {
            Command::Serve { port, .. } => assert_eq!(port, 12207),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
