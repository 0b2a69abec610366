// HTTP request handlers
use crate::application::sales_repository::LoadError;
use crate::domain::dashboard::DisplayMode;
use crate::domain::filter::{CategoryFilter, DateRange, FilterSelection};
use crate::infrastructure::http_response::{accepts_brotli, error_response, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Response, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub mode: DisplayMode,
    pub body_style: Option<String>,
    pub dealer_name: Option<String>,
    pub transmission: Option<String>,
    pub engine: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DashboardQuery {
    pub fn into_selection(self) -> (DisplayMode, FilterSelection) {
        let defaults = DateRange::default();
        let selection = FilterSelection {
            body_style: CategoryFilter::from_param(self.body_style),
            dealer_name: CategoryFilter::from_param(self.dealer_name),
            transmission: CategoryFilter::from_param(self.transmission),
            engine: CategoryFilter::from_param(self.engine),
            date_range: DateRange::new(
                self.start_date.unwrap_or(defaults.start),
                self.end_date.unwrap_or(defaults.end),
            ),
        };
        (self.mode, selection)
    }
}

#[derive(Debug, Serialize)]
struct ReloadSummary {
    records: usize,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

async fn load_failure(err: LoadError, compress: bool) -> Response<Body> {
    tracing::error!("Sales dataset unavailable: {}", err);
    error_response(StatusCode::SERVICE_UNAVAILABLE, err.to_string(), compress).await
}

async fn ok_json<T: Serialize>(data: &T, compress: bool) -> Response<Body> {
    match json_response(StatusCode::OK, data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Filtered and aggregated dashboard for one selection
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let (mode, selection) = query.into_selection();

    match state.dashboard_service.get_dashboard(mode, selection).await {
        Ok(dashboard) => ok_json(&dashboard, compress).await,
        Err(e) => load_failure(e, compress).await,
    }
}

/// Options for the mode and filter selectors
pub async fn get_filter_options(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    match state.dashboard_service.get_filter_options().await {
        Ok(options) => ok_json(&options, compress).await,
        Err(e) => load_failure(e, compress).await,
    }
}

/// Drop the cached dataset and load it again
pub async fn reload_dataset(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    match state.dashboard_service.reload_dataset().await {
        Ok(records) => {
            tracing::info!("Sales dataset reloaded with {} records", records);
            ok_json(&ReloadSummary { records }, compress).await
        }
        Err(e) => load_failure(e, compress).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let (mode, selection) = DashboardQuery::default().into_selection();

        assert_eq!(mode, DisplayMode::Overview);
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn test_query_carries_values() {
        let query = DashboardQuery {
            mode: DisplayMode::Details,
            body_style: Some("All".to_string()),
            engine: Some("Overhead Camshaft".to_string()),
            start_date: NaiveDate::from_ymd_opt(2022, 3, 1),
            ..Default::default()
        };
        let (mode, selection) = query.into_selection();

        assert_eq!(mode, DisplayMode::Details);
        assert_eq!(selection.body_style, CategoryFilter::All);
        assert_eq!(selection.engine, CategoryFilter::Exact("Overhead Camshaft".to_string()));
        assert_eq!(selection.date_range.start, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(selection.date_range.end, DateRange::default().end);
    }
}
