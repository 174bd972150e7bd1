use geofilter_geo::GeoShape;
use serde::Serialize;
use tabled::Tabled;

/// Output for the bbox and distance commands
#[derive(Debug, Serialize)]
pub struct QueryOutput {
    pub shape: GeoShape,
    pub candidate_mode: String,
    pub terms: Vec<String>,
    pub scanned: usize,
    pub malformed: usize,
    pub total_hits: usize,
    pub hits: Vec<HitItem>,
}

#[derive(Debug, Serialize)]
pub struct HitItem {
    pub id: String,
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Meters from the query center, for distance queries
    pub distance: Option<f64>,
}

#[derive(Tabled)]
pub struct HitRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
}

impl From<&HitItem> for HitRow {
    fn from(hit: &HitItem) -> Self {
        Self {
            id: hit.id.clone(),
            name: hit.name.clone().unwrap_or_default(),
            location: format!("{}, {}", hit.lat, hit.lon),
            distance: hit.distance.map(|d| format!("{:.1} m", d)).unwrap_or_default(),
        }
    }
}

/// Output for the config command
#[derive(Debug, Serialize)]
pub struct InspectConfigOutput {
    pub validation_mode: ConfigValue<String>,
    pub candidate_mode: ConfigValue<String>,
    pub distance_unit: ConfigValue<String>,
    pub units: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: String,
}

#[derive(Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
