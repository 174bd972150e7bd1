//! Loading candidate documents for the harness.
//!
//! Two layouts are read:
//! - a JSON array of objects with `id`, `location` and any other fields, where
//!   `location` is a WKT `POINT(lon lat)`, a `{"lat", "lon"}` object or a
//!   `[lon, lat]` array;
//! - a GeoJSON FeatureCollection of Point features (`.geojson`).
//!
//! Locations are kept raw so that each query can apply its own candidate mode.

use anyhow::{anyhow, bail, Context, Result};
use geojson::GeoJson;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Exact-value term match against a top-level field
    pub fn term_matches(&self, field: &str, expected: &str) -> bool {
        if field == "id" {
            return self.id == expected;
        }
        let Some(value) = self.fields.get(field) else {
            return false;
        };

        match value {
            Value::String(s) => s == expected,
            Value::Number(n) => {
                n.to_string() == expected
                    || matches!((n.as_f64(), expected.parse::<f64>()), (Some(a), Ok(b)) if a == b)
            }
            Value::Bool(b) => expected.parse::<bool>().is_ok_and(|e| e == *b),
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    id: Value,
    location: RawLocation,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLocation {
    Wkt(String),
    LatLon { lat: f64, lon: f64 },
    LonLat([f64; 2]),
}

impl RawLocation {
    /// Returns `(lat, lon)`
    fn coordinates(&self) -> Result<(f64, f64)> {
        match self {
            RawLocation::Wkt(text) => parse_wkt_point(text),
            RawLocation::LatLon { lat, lon } => Ok((*lat, *lon)),
            RawLocation::LonLat([lon, lat]) => Ok((*lat, *lon)),
        }
    }
}

/// Parse `POINT(lon lat)` into `(lat, lon)`
pub fn parse_wkt_point(text: &str) -> Result<(f64, f64)> {
    let parsed = wkt::Wkt::<f64>::from_str(text)
        .map_err(|e| anyhow!("Invalid WKT location '{}': {}", text, e))?;
    let point = geo::Point::<f64>::try_from(parsed)
        .map_err(|e| anyhow!("Location '{}' is not a point: {}", text, e))?;
    Ok((point.y(), point.x()))
}

fn id_to_string(id: &Value) -> Result<String> {
    match id {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => bail!("Document id must be a string or number, got {}", other),
    }
}

/// Load documents from `path`, choosing the layout by extension
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read documents from {}", path.display()))?;

    let is_geojson = path.extension().and_then(|e| e.to_str()) == Some("geojson");
    let documents = if is_geojson {
        parse_geojson(&content)?
    } else {
        parse_json(&content)?
    };

    tracing::debug!(path = %path.display(), count = documents.len(), "Loaded documents");
    Ok(documents)
}

pub fn parse_json(content: &str) -> Result<Vec<Document>> {
    let raw: Vec<RawDocument> =
        serde_json::from_str(content).context("Failed to parse documents JSON")?;

    raw.into_iter()
        .enumerate()
        .map(|(i, doc)| {
            let id = id_to_string(&doc.id).with_context(|| format!("Document #{}", i))?;
            let (lat, lon) = doc
                .location
                .coordinates()
                .with_context(|| format!("Document {}", id))?;
            Ok(Document { id, lat, lon, fields: doc.fields })
        })
        .collect()
}

pub fn parse_geojson(content: &str) -> Result<Vec<Document>> {
    let geojson = GeoJson::from_str(content).context("Failed to parse GeoJSON")?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        _ => bail!("Expected a GeoJSON FeatureCollection"),
    };

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| {
            let fields = feature.properties.unwrap_or_default();
            let id = match feature.id {
                Some(geojson::feature::Id::String(s)) => s,
                Some(geojson::feature::Id::Number(n)) => n.to_string(),
                None => match fields.get("id") {
                    Some(value) => id_to_string(value)?,
                    None => i.to_string(),
                },
            };
            let (lat, lon) = match feature.geometry.map(|g| g.value) {
                Some(geojson::Value::Point(coords)) if coords.len() >= 2 => (coords[1], coords[0]),
                _ => bail!("Feature {} must have a Point geometry", id),
            };
            Ok(Document { id, lat, lon, fields })
        })
        .collect()
}
