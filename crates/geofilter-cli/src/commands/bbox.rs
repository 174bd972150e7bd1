use crate::cli::BboxArgs;
use crate::commands::query;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use geofilter_core::config::{CliConfigOverrides, LayeredConfig};
use geofilter_geo::BoundingBox;

pub fn execute(args: BboxArgs, mut config: LayeredConfig, output: &OutputWriter) -> Result<()> {
    query::apply_mode_overrides(&args.query, CliConfigOverrides::default(), &mut config)?;

    let mode = config.validation_mode.value;
    let bbox = BoundingBox::new(args.top, args.left, args.bottom, args.right, mode)
        .context("Invalid bounding box")?;

    output.section("Bounding Box Query");
    output.kv("Corners", bbox);
    output.kv("Validation Mode", mode);
    if bbox.crosses_antimeridian() {
        output.kv("Crosses Antimeridian", "yes");
    }

    query::run(&args.query, bbox.into(), &config, output)
}
