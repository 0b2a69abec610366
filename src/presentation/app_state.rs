// Application state for HTTP handlers
use crate::application::dashboard_service::SalesDashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: SalesDashboardService,
}
