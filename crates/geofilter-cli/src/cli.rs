use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// geofilter - Geodetic bounding-box and distance queries over point documents
#[derive(Parser, Debug)]
#[command(name = "geofilter")]
#[command(about = "Geodetic bounding-box and distance queries over point documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find documents inside a bounding box
    Bbox(BboxArgs),

    /// Find documents within a distance of a point
    Distance(DistanceArgs),

    /// Show configuration values and where they come from
    Config,
}

/// Options shared by every query command
#[derive(Parser, Debug)]
pub struct QueryOptions {
    /// Documents file: JSON array of documents, or a GeoJSON FeatureCollection (.geojson)
    pub path: PathBuf,

    /// Validation mode for the query shape (strict, coerce, ignore_malformed)
    #[arg(long)]
    pub mode: Option<String>,

    /// Validation mode for document locations (strict, coerce, ignore_malformed)
    #[arg(long)]
    pub candidate_mode: Option<String>,

    /// Term filter on a document field, e.g. --where userid=880 (repeatable, ANDed)
    #[arg(long = "where", value_name = "FIELD=VALUE")]
    pub terms: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct BboxArgs {
    #[command(flatten)]
    pub query: QueryOptions,

    /// Top latitude
    #[arg(long, allow_negative_numbers = true)]
    pub top: f64,

    /// Left longitude
    #[arg(long, allow_negative_numbers = true)]
    pub left: f64,

    /// Bottom latitude
    #[arg(long, allow_negative_numbers = true)]
    pub bottom: f64,

    /// Right longitude
    #[arg(long, allow_negative_numbers = true)]
    pub right: f64,
}

#[derive(Parser, Debug)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub query: QueryOptions,

    /// Center latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Center longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Radius, e.g. "25km", "500mi" or a bare number in the default unit
    #[arg(long)]
    pub distance: String,

    /// Unit for a radius given without one (overrides configuration)
    #[arg(long)]
    pub unit: Option<String>,
}
