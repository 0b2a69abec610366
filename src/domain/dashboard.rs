// Dashboard domain model
use super::filter::FilterSelection;
use super::widgets::{ChartData, DetailTable, MetricCard};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    #[serde(alias = "Overview")]
    Overview,
    #[serde(alias = "Details")]
    Details,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Overview, DisplayMode::Details];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Overview => "Overview",
            DisplayMode::Details => "Details",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub mode: DisplayMode,
    pub selection: FilterSelection,
    pub metrics: Vec<MetricCard>,
    pub charts: Vec<ChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<DetailTable>,
}

impl Dashboard {
    pub fn new(mode: DisplayMode, selection: FilterSelection, metrics: Vec<MetricCard>) -> Self {
        Self {
            title: format!("CAR SALES DASHBOARD | {}", mode.label().to_uppercase()),
            mode,
            selection,
            metrics,
            charts: Vec::new(),
            table: None,
        }
    }
}
