//! Distance units and the unit table used to canonicalize radii to meters.

use crate::error::{GeoFilterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Built-in distance units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Millimeters,
    Centimeters,
    #[default]
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 9] = [
        DistanceUnit::Millimeters,
        DistanceUnit::Centimeters,
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Inches,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::Miles,
        DistanceUnit::NauticalMiles,
    ];

    /// Exact number of meters in one unit
    pub const fn meters_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Millimeters => 0.001,
            DistanceUnit::Centimeters => 0.01,
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Inches => 0.0254,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Yards => 0.9144,
            DistanceUnit::Miles => 1609.344,
            DistanceUnit::NauticalMiles => 1852.0,
        }
    }

    /// Convert a distance value to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }

    /// Convert a distance value from meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Short name, e.g. `km`
    pub const fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Inches => "in",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Yards => "yd",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }

    /// Every name the unit is recognized by, symbol first
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            DistanceUnit::Millimeters => &["mm", "millimeters", "millimeter"],
            DistanceUnit::Centimeters => &["cm", "centimeters", "centimeter"],
            DistanceUnit::Meters => &["m", "meters", "meter"],
            DistanceUnit::Kilometers => &["km", "kilometers", "kilometer"],
            DistanceUnit::Inches => &["in", "inch", "inches"],
            DistanceUnit::Feet => &["ft", "feet", "foot"],
            DistanceUnit::Yards => &["yd", "yards", "yard"],
            DistanceUnit::Miles => &["mi", "miles", "mile"],
            DistanceUnit::NauticalMiles => {
                &["nmi", "nm", "nauticalmiles", "nautical_miles", "nautical-miles"]
            }
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoFilterError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        DistanceUnit::ALL
            .into_iter()
            .find(|unit| unit.aliases().contains(&needle.as_str()))
            .ok_or_else(|| GeoFilterError::UnknownDistanceUnit { unit: s.to_string() })
    }
}

/// Distance with unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    /// Create a new distance
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Create distance in meters
    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    /// Create distance in kilometers
    pub fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    /// Create distance in miles
    pub fn miles(value: f64) -> Self {
        Self::new(value, DistanceUnit::Miles)
    }

    /// Convert to meters
    pub fn to_meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }

    /// Parse strings like `25km`, `500 miles` or `1800mi`.
    /// A bare number is read in `default_unit`.
    pub fn parse(input: &str, default_unit: DistanceUnit) -> Result<Self> {
        let (value, unit) = split_distance(input)?;
        let unit = match unit {
            Some(name) => name.parse()?,
            None => default_unit,
        };
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Split `"25 km"` into `(25.0, Some("km"))`
fn split_distance(input: &str) -> Result<(f64, Option<&str>)> {
    let trimmed = input.trim();
    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split_at);
    let value = number.trim().parse::<f64>().map_err(|e| GeoFilterError::ConfigInvalid {
        key: "distance".to_string(),
        reason: format!("Invalid distance '{}': {}", input, e),
    })?;
    let unit = unit.trim();
    Ok((value, (!unit.is_empty()).then_some(unit)))
}

/// A unit resolved through a [`UnitTable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    /// Canonical name reported back to callers
    pub name: String,
    pub meters_per_unit: f64,
}

/// Lookup table from unit names to meters-per-unit.
///
/// The default table knows every [`DistanceUnit`] under all of its aliases.
/// Names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    entries: BTreeMap<String, UnitEntry>,
}

impl Default for UnitTable {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        for unit in DistanceUnit::ALL {
            let entry = UnitEntry {
                name: unit.symbol().to_string(),
                meters_per_unit: unit.meters_per_unit(),
            };
            for alias in unit.aliases() {
                entries.insert(alias.to_string(), entry.clone());
            }
        }
        Self { entries }
    }
}

impl UnitTable {
    /// Table without any units
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Register or replace a unit
    pub fn insert(&mut self, name: &str, meters_per_unit: f64) -> Result<()> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Err(GeoFilterError::ConfigInvalid {
                key: "units".to_string(),
                reason: "Unit name must not be empty".to_string(),
            });
        }
        if !meters_per_unit.is_finite() || meters_per_unit <= 0.0 {
            return Err(GeoFilterError::ConfigInvalid {
                key: format!("units.{}", key),
                reason: format!("Meters per unit must be positive, got {}", meters_per_unit),
            });
        }
        self.entries.insert(key.clone(), UnitEntry { name: key, meters_per_unit });
        Ok(())
    }

    /// Builder-style [`UnitTable::insert`]
    pub fn with_unit(mut self, name: &str, meters_per_unit: f64) -> Result<Self> {
        self.insert(name, meters_per_unit)?;
        Ok(self)
    }

    pub fn resolve(&self, name: &str) -> Result<&UnitEntry> {
        self.entries
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| GeoFilterError::UnknownDistanceUnit { unit: name.to_string() })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// All recognized names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse `"<number>[unit]"` into a value and its resolved unit,
    /// falling back to `default_unit` when no unit is written.
    pub fn parse(&self, input: &str, default_unit: &str) -> Result<(f64, &UnitEntry)> {
        let (value, unit) = split_distance(input)?;
        let entry = self.resolve(unit.unwrap_or(default_unit))?;
        Ok((value, entry))
    }
}
