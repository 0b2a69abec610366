// Presenter - Maps aggregates onto display widgets, formatting only
use crate::domain::aggregate::{CompanySales, GeoPoint, Kpis, WeeklySales};
use crate::domain::sale::SaleRecord;
use crate::domain::widgets::{ChartData, ChartKind, DataPoint, DetailTable, MetricCard, SeriesData};
use std::collections::BTreeMap;

// Period-over-period deltas shown next to the KPI cards. No comparison data
// exists in the dataset, so these stay fixed.
const TOTAL_SALES_DELTA: &str = "23.59%";
const AVG_PRICE_DELTA: &str = "-0.79%";
const CARS_SOLD_DELTA: &str = "24.57%";
const MTD_CARS_SOLD_DELTA: &str = "1.92%";

const DETAIL_COLUMNS: [&str; 9] = [
    "Car_id",
    "Date",
    "Customer Name",
    "Dealer_Name",
    "Company",
    "Color",
    "Model",
    "Price ($)",
    "Total Sales",
];

/// Formats a number with comma thousands separators and a fixed number of decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_currency(value: f64, decimals: usize) -> String {
    format!("${}", format_number(value, decimals))
}

pub fn metric_cards(kpis: &Kpis, mtd_cars_sold: usize) -> Vec<MetricCard> {
    vec![
        MetricCard::new(
            "total_sales",
            "YTD Total Sales",
            format_currency(kpis.total_sales, 1),
            TOTAL_SALES_DELTA,
        ),
        MetricCard::new(
            "avg_price",
            "YTD Avg Price",
            format_currency(kpis.avg_price, 0),
            AVG_PRICE_DELTA,
        ),
        MetricCard::new(
            "cars_sold",
            "YTD Cars Sold",
            kpis.cars_sold.to_string(),
            CARS_SOLD_DELTA,
        ),
        MetricCard::new(
            "mtd_cars_sold",
            "MTD Cars Sold",
            mtd_cars_sold.to_string(),
            MTD_CARS_SOLD_DELTA,
        ),
    ]
}

pub fn weekly_trend_chart(weekly: &[WeeklySales]) -> ChartData {
    let points = weekly
        .iter()
        .map(|w| DataPoint::Xy {
            x: w.week as f64,
            y: w.sales,
        })
        .collect();

    ChartData::new(
        "weekly_sales",
        "YTD Sales Weekly Trend",
        ChartKind::Line,
        vec![SeriesData::new("sales", "Price ($)", None, points)],
    )
    .with_axes("Week", "Price ($)")
}

pub fn share_pie_chart(id: &str, title: &str, sums: &BTreeMap<String, f64>) -> ChartData {
    let points = sums
        .iter()
        .map(|(label, value)| DataPoint::Slice {
            label: label.clone(),
            value: *value,
        })
        .collect();

    ChartData::new(id, title, ChartKind::Pie, vec![SeriesData::new("sales", "Price ($)", None, points)])
}

pub fn region_map_chart(points: &[GeoPoint]) -> ChartData {
    let points = points
        .iter()
        .map(|p| DataPoint::Geo {
            label: p.region.clone(),
            latitude: p.latitude,
            longitude: p.longitude,
            size: p.size,
        })
        .collect();

    ChartData::new(
        "region_map",
        "YTD Cars Sold by Dealer Region",
        ChartKind::GeoScatter,
        vec![SeriesData::new("sales", "Price ($)", Some("fuchsia"), points)],
    )
}

pub fn company_bar_chart(companies: &[CompanySales]) -> ChartData {
    let sales = companies
        .iter()
        .map(|c| DataPoint::Category {
            category: c.company.clone(),
            value: c.total_sales,
        })
        .collect();
    let counts = companies
        .iter()
        .map(|c| DataPoint::Category {
            category: c.company.clone(),
            value: c.cars_sold as f64,
        })
        .collect();

    ChartData::new(
        "company_sales",
        "Company-Wise Sales Trend",
        ChartKind::GroupedBar,
        vec![
            SeriesData::new("total_sales", "YTD Total Sales", Some("blue"), sales),
            SeriesData::new("cars_sold", "YTD Cars Sold", Some("orange"), counts),
        ],
    )
}

pub fn detail_table(records: &[&SaleRecord], total_sales: f64) -> DetailTable {
    let rows = records
        .iter()
        .map(|r| {
            let price = format_currency(r.price, 0);
            vec![
                r.car_id.clone(),
                r.date.format("%Y-%m-%d").to_string(),
                r.customer_name.clone(),
                r.dealer_name.clone(),
                r.company.clone(),
                r.color.clone(),
                r.model.clone(),
                price.clone(),
                price,
            ]
        })
        .collect();

    DetailTable {
        columns: DETAIL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
        summary: format!("Total Sales: {}", format_currency(total_sales, 0)),
    }
}
