// Dealer region coordinates for the geo scatter chart
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

const BUILTIN_REGIONS: [(&str, f64, f64); 7] = [
    ("Middletown", 41.5623, -72.6506),
    ("Aurora", 39.7294, -104.8319),
    ("Greenville", 34.8526, -82.3940),
    ("Scottsdale", 33.4949, -111.9217),
    ("Pasco", 46.2305, -119.0922),
    ("Austin", 30.2672, -97.7431),
    ("Janesville", 42.6828, -89.0187),
];

#[derive(Debug, Clone)]
pub struct RegionTable {
    coordinates: HashMap<String, Coordinate>,
}

impl RegionTable {
    /// Built-in table with configured entries merged over it.
    pub fn with_overrides(overrides: &HashMap<String, Coordinate>) -> Self {
        let mut table = Self::default();
        for (region, coordinate) in overrides {
            table.coordinates.insert(region.clone(), *coordinate);
        }
        table
    }

    pub fn lookup(&self, region: &str) -> Option<Coordinate> {
        self.coordinates.get(region).copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        let coordinates = BUILTIN_REGIONS
            .iter()
            .map(|(name, lat, lon)| (name.to_string(), Coordinate::new(*lat, *lon)))
            .collect();
        Self { coordinates }
    }
}
