use crate::cli::DistanceArgs;
use crate::commands::query;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use geofilter_core::config::{parse_distance_unit, CliConfigOverrides, LayeredConfig};
use geofilter_geo::normalize::normalize;
use geofilter_geo::DistanceQuery;

pub fn execute(args: DistanceArgs, mut config: LayeredConfig, output: &OutputWriter) -> Result<()> {
    let overrides = CliConfigOverrides {
        distance_unit: args.unit.as_deref().map(parse_distance_unit).transpose()?,
        ..Default::default()
    };
    query::apply_mode_overrides(&args.query, overrides, &mut config)?;

    let mode = config.validation_mode.value;
    let center = normalize(args.lat, args.lon, mode).context("Invalid distance center")?;
    let (value, unit) = config
        .units
        .parse(&args.distance, config.distance_unit.value.symbol())
        .context("Invalid distance")?;
    let unit_name = unit.name.clone();
    let distance_query = DistanceQuery::with_unit_name(center, value, &unit_name, &config.units)
        .context("Invalid distance")?;

    output.section("Distance Query");
    output.kv("Center", distance_query.center());
    output.kv(
        "Radius",
        format!("{}{}", distance_query.original_value(), distance_query.original_unit()),
    );
    output.kv("Radius (m)", distance_query.radius_meters());
    output.kv("Validation Mode", mode);

    query::run(&args.query, distance_query.into(), &config, output)
}
