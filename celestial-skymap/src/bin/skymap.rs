//! skymap: draw the stars visible from one place at one moment.
//!
//! ```text
//! skymap --catalog input/hygdata_v3.csv --datetime 2018-10-05T21:00:00Z -o stars.svg
//! ```

use anyhow::{Context, Result};
use celestial_catalog::HygCatalog;
use celestial_skymap::app::{generate, GenerateRequest};
use celestial_skymap::{OutputFormat, SkyMapConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "skymap")]
#[command(about = "Render the stars above an observer's horizon as a polar SVG disc")]
#[command(version)]
struct Cli {
    /// HYG v3 catalog CSV (optionally .gz)
    #[arg(long)]
    catalog: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "stars.svg")]
    output: PathBuf,

    /// Output format; guessed from the output extension when omitted
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML configuration file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Julian Day of the observation
    #[arg(long, conflicts_with = "datetime")]
    julian_day: Option<f64>,

    /// UTC time of the observation, YYYY-MM-DDTHH:MM:SS[Z]
    #[arg(long)]
    datetime: Option<String>,

    /// Faintest apparent magnitude drawn
    #[arg(long, allow_hyphen_values = true)]
    magnitude_cutoff: Option<f64>,

    /// Disc radius in SVG units
    #[arg(long)]
    radius: Option<f64>,

    /// Circle radius per magnitude below the cutoff
    #[arg(long)]
    scale_factor: Option<f64>,

    /// Offset of name labels from their star
    #[arg(long)]
    name_offset: Option<f64>,

    /// Label stars with their constellation
    #[arg(long)]
    constellations: bool,

    /// Spread the catalog over all cores
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<SkyMapConfig> {
        let mut config = match &self.config {
            Some(path) => SkyMapConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => SkyMapConfig::default(),
        };

        if let Some(latitude) = self.latitude {
            config.observer.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            config.observer.longitude = longitude;
        }
        // A time given on the command line replaces whichever form the file used.
        if let Some(jd) = self.julian_day {
            config.observer.julian_day = Some(jd);
            config.observer.datetime = None;
        }
        if let Some(datetime) = &self.datetime {
            config.observer.datetime = Some(datetime.clone());
            config.observer.julian_day = None;
        }
        if let Some(cutoff) = self.magnitude_cutoff {
            config.magnitude_cutoff = cutoff;
        }
        if let Some(radius) = self.radius {
            config.disc_radius = radius;
        }
        if let Some(scale) = self.scale_factor {
            config.scale_factor = scale;
        }
        if let Some(offset) = self.name_offset {
            config.name_offset = offset;
        }
        if self.constellations {
            config.show_constellations = true;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve_config()?;
    let request = GenerateRequest {
        format: cli
            .format
            .unwrap_or_else(|| OutputFormat::from_path(&cli.output)),
        output: cli.output.clone(),
        parallel: cli.parallel,
        config,
    };

    let catalog = HygCatalog::new(&cli.catalog);
    let map = generate(&request, &catalog)
        .with_context(|| format!("rendering sky map to {}", request.output.display()))?;

    tracing::info!(
        rendered = map.summary.rendered,
        output = %request.output.display(),
        "Done"
    );
    Ok(())
}
