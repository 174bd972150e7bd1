use crate::output::OutputWriter;
use crate::output_types::{ConfigRow, ConfigValue, InspectConfigOutput};
use anyhow::Result;
use geofilter_core::config::LayeredConfig;

/// Inspect configuration
pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let inspection_map = config.to_inspection_map();
    let entry = |key: &str| {
        inspection_map
            .get(key)
            .map(|(value, source)| ConfigValue { value: value.clone(), source: format!("{:?}", source) })
            .unwrap_or(ConfigValue { value: String::new(), source: "Default".to_string() })
    };

    if output.is_json() {
        return output.result(InspectConfigOutput {
            validation_mode: entry("validation_mode"),
            candidate_mode: entry("candidate_mode"),
            distance_unit: entry("distance_unit"),
            units: config.units.names().map(str::to_string).collect(),
        });
    }

    output.section("Configuration Values");

    let mut rows: Vec<ConfigRow> = inspection_map
        .iter()
        .map(|(key, (value, source))| ConfigRow {
            key: key.clone(),
            value: value.clone(),
            source: format!("{:?}", source),
        })
        .collect();

    // Sort by key for consistent output
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    output.table(rows);

    output.section("Distance Units");
    output.info(config.units.names().collect::<Vec<_>>().join(", "));

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}
