// Dashboard service - Use case for building sales dashboards
use crate::application::dataset_cache::DatasetCache;
use crate::application::presenter;
use crate::application::sales_repository::LoadError;
use crate::domain::aggregate;
use crate::domain::dashboard::{Dashboard, DisplayMode};
use crate::domain::filter::{self, ALL, DateRange, FilterSelection};
use crate::domain::region::RegionTable;
use crate::domain::sale::{SaleRecord, SalesField};
use serde::Serialize;
use std::sync::Arc;

/// Choices offered by the dashboard's selectors.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub modes: Vec<DisplayMode>,
    pub body_styles: Vec<String>,
    pub dealer_names: Vec<String>,
    pub transmissions: Vec<String>,
    pub engines: Vec<String>,
    pub default_date_range: DateRange,
}

#[derive(Clone)]
pub struct SalesDashboardService {
    dataset: DatasetCache,
    regions: Arc<RegionTable>,
}

impl SalesDashboardService {
    pub fn new(dataset: DatasetCache, regions: RegionTable) -> Self {
        Self {
            dataset,
            regions: Arc::new(regions),
        }
    }

    pub async fn get_dashboard(
        &self,
        mode: DisplayMode,
        selection: FilterSelection,
    ) -> Result<Dashboard, LoadError> {
        let records = self.dataset.records().await?;
        let filtered = filter::apply(&records, &selection);

        tracing::debug!(
            "Building {} dashboard: {} of {} records match {:?}",
            mode.label(),
            filtered.len(),
            records.len(),
            selection
        );

        Ok(self.build_dashboard(mode, selection, &filtered))
    }

    pub async fn get_filter_options(&self) -> Result<FilterOptions, LoadError> {
        let records = self.dataset.records().await?;
        let options = |field: SalesField| {
            let mut values = vec![ALL.to_string()];
            values.extend(aggregate::distinct_values(records.iter(), field));
            values
        };

        Ok(FilterOptions {
            modes: DisplayMode::ALL.to_vec(),
            body_styles: options(SalesField::BodyStyle),
            dealer_names: options(SalesField::DealerName),
            transmissions: options(SalesField::Transmission),
            engines: options(SalesField::Engine),
            default_date_range: DateRange::default(),
        })
    }

    /// Drop the cached dataset and load it again, returning the record count
    pub async fn reload_dataset(&self) -> Result<usize, LoadError> {
        self.dataset.invalidate().await;
        Ok(self.dataset.records().await?.len())
    }

    fn build_dashboard(
        &self,
        mode: DisplayMode,
        selection: FilterSelection,
        filtered: &[&SaleRecord],
    ) -> Dashboard {
        let kpis = aggregate::kpis(filtered);
        let mtd_cars_sold = aggregate::mtd_cars_sold(kpis.cars_sold);
        let mut dashboard =
            Dashboard::new(mode, selection, presenter::metric_cards(&kpis, mtd_cars_sold));

        match mode {
            DisplayMode::Overview => {
                dashboard.charts = vec![
                    presenter::weekly_trend_chart(&aggregate::weekly_sales(filtered)),
                    presenter::share_pie_chart(
                        "body_style_sales",
                        "Total Sales by Body Style",
                        &aggregate::grouped_sum(filtered, SalesField::BodyStyle),
                    ),
                    presenter::share_pie_chart(
                        "color_sales",
                        "Total Sales by Color",
                        &aggregate::grouped_sum(filtered, SalesField::Color),
                    ),
                    presenter::region_map_chart(&aggregate::geo_points(filtered, &self.regions)),
                    presenter::company_bar_chart(&aggregate::company_sales(filtered)),
                ];
            }
            DisplayMode::Details => {
                dashboard.table = Some(presenter::detail_table(filtered, kpis.total_sales));
            }
        }

        dashboard
    }
}
