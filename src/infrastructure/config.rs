use crate::domain::region::Coordinate;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub regions: Vec<RegionSetting>,
}

/// Extra or corrected dealer region coordinate. Kept as a list because region
/// names carry case that configuration keys would not preserve.
#[derive(Debug, Deserialize, Clone)]
pub struct RegionSetting {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DashboardConfig {
    pub fn region_overrides(&self) -> HashMap<String, Coordinate> {
        self.regions
            .iter()
            .map(|r| (r.name.clone(), Coordinate::new(r.latitude, r.longitude)))
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("dataset.path", "Car Sales.csv")?)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` environment overrides
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
