// Display widget domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub id: String,
    pub title: String,
    pub value: String,
    pub delta: String,
}

impl MetricCard {
    pub fn new(id: &str, title: &str, value: String, delta: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value,
            delta: delta.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataPoint {
    Xy { x: f64, y: f64 },
    Slice { label: String, value: f64 },
    Category { category: String, value: f64 },
    Geo {
        label: String,
        latitude: f64,
        longitude: f64,
        size: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<DataPoint>,
}

impl SeriesData {
    pub fn new(id: &str, name: &str, color: Option<&str>, points: Vec<DataPoint>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Pie,
    GeoScatter,
    GroupedBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(id: &str, title: &str, kind: ChartKind, series: Vec<SeriesData>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            x_label: None,
            y_label: None,
            series,
        }
    }

    pub fn with_axes(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: String,
}
