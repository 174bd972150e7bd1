//! Shared scan over documents for the query commands

use crate::cli::QueryOptions;
use crate::dataset::{load_documents, Document};
use crate::output::OutputWriter;
use crate::output_types::{HitItem, HitRow, QueryOutput};
use anyhow::{bail, Result};
use geofilter_core::config::{parse_validation_mode, CliConfigOverrides, LayeredConfig};
use geofilter_geo::{GeoFilter, GeoShape};

/// Term filter parsed from `--where field=value`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub field: String,
    pub value: String,
}

impl Term {
    pub fn parse(input: &str) -> Result<Self> {
        match input.split_once('=') {
            Some((field, value)) if !field.trim().is_empty() => {
                Ok(Self { field: field.trim().to_string(), value: value.trim().to_string() })
            }
            _ => bail!("Invalid term filter '{}': expected FIELD=VALUE", input),
        }
    }

    fn matches(&self, doc: &Document) -> bool {
        doc.term_matches(&self.field, &self.value)
    }
}

/// Apply the validation-mode flags shared by every query command
pub fn apply_mode_overrides(
    options: &QueryOptions,
    mut overrides: CliConfigOverrides,
    config: &mut LayeredConfig,
) -> Result<()> {
    if let Some(mode) = &options.mode {
        overrides.validation_mode = Some(parse_validation_mode(mode)?);
    }
    if let Some(mode) = &options.candidate_mode {
        overrides.candidate_mode = Some(parse_validation_mode(mode)?);
    }
    config.update_from_cli(overrides);
    Ok(())
}

/// Scan the documents with the geo filter ANDed with every term filter
pub fn run(
    options: &QueryOptions,
    shape: GeoShape,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let terms = options.terms.iter().map(|t| Term::parse(t)).collect::<Result<Vec<_>>>()?;
    let documents = load_documents(&options.path)?;
    let filter = GeoFilter::new(shape).with_candidate_mode(config.candidate_mode.value);

    let mut malformed = 0;
    let mut hits = Vec::new();
    for doc in &documents {
        if !terms.iter().all(|term| term.matches(doc)) {
            continue;
        }
        let Some(point) = filter.normalize_candidate(doc.lat, doc.lon) else {
            malformed += 1;
            continue;
        };
        if !filter.matches(&point) {
            continue;
        }
        let distance = match filter.shape() {
            GeoShape::Distance(query) => Some(query.distance_to(&point)),
            GeoShape::BoundingBox(_) => None,
        };
        hits.push(HitItem {
            id: doc.id.clone(),
            name: doc.name().map(str::to_string),
            lat: point.lat(),
            lon: point.lon(),
            distance,
        });
    }

    tracing::info!(
        scanned = documents.len(),
        malformed,
        hits = hits.len(),
        shape = filter.shape().kind(),
        "Query finished"
    );

    if output.is_json() {
        let total_hits = hits.len();
        return output.result(QueryOutput {
            shape: filter.shape().clone(),
            candidate_mode: filter.candidate_mode().to_string(),
            terms: options.terms.clone(),
            scanned: documents.len(),
            malformed,
            total_hits,
            hits,
        });
    }

    output.section("Results");
    output.table(hits.iter().map(HitRow::from).collect());
    output.info(format!("{} of {} documents matched", hits.len(), documents.len()));
    if malformed > 0 {
        output.warning(format!(
            "{} documents with malformed locations were excluded ({} candidate mode)",
            malformed,
            filter.candidate_mode()
        ));
    }

    Ok(())
}
