// Aggregations over a filtered set of sale records
use super::region::RegionTable;
use super::sale::{SaleRecord, SalesField};
use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Fixed divisor for the month-to-date cars sold figure.
const MTD_DIVISOR: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub total_sales: f64,
    pub avg_price: f64,
    pub cars_sold: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklySales {
    pub week: u32,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySales {
    pub company: String,
    pub total_sales: f64,
    pub cars_sold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub size: f64,
}

pub fn kpis(records: &[&SaleRecord]) -> Kpis {
    // fold from +0.0; f64's Sum starts at -0.0 and would render "$-0.0"
    let total_sales = records.iter().fold(0.0, |acc, r| acc + r.price);
    let cars_sold = records.len();
    let avg_price = if cars_sold == 0 {
        0.0
    } else {
        total_sales / cars_sold as f64
    };

    Kpis {
        total_sales,
        avg_price,
        cars_sold,
    }
}

pub fn mtd_cars_sold(cars_sold: usize) -> usize {
    cars_sold / MTD_DIVISOR
}

/// Sales summed per ISO week number, ascending. The key is the bare week
/// number, so early-January dates belonging to the previous ISO year fall
/// into week 52 or 53.
pub fn weekly_sales(records: &[&SaleRecord]) -> Vec<WeeklySales> {
    let mut by_week: BTreeMap<u32, f64> = BTreeMap::new();
    for record in records {
        *by_week.entry(record.date.iso_week().week()).or_insert(0.0) += record.price;
    }

    by_week
        .into_iter()
        .map(|(week, sales)| WeeklySales { week, sales })
        .collect()
}

pub fn grouped_sum(records: &[&SaleRecord], field: SalesField) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *sums.entry(field.value(record).to_string()).or_insert(0.0) += record.price;
    }
    sums
}

pub fn grouped_count(records: &[&SaleRecord], field: SalesField) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(field.value(record).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Per-company sales total and count, ascending by company name.
pub fn company_sales(records: &[&SaleRecord]) -> Vec<CompanySales> {
    let counts = grouped_count(records, SalesField::Company);

    grouped_sum(records, SalesField::Company)
        .into_iter()
        .map(|(company, total_sales)| {
            let cars_sold = counts.get(&company).copied().unwrap_or_default();
            CompanySales {
                company,
                total_sales,
                cars_sold,
            }
        })
        .collect()
}

/// One point per record whose dealer region has a known coordinate.
pub fn geo_points(records: &[&SaleRecord], regions: &RegionTable) -> Vec<GeoPoint> {
    records
        .iter()
        .filter_map(|record| {
            regions.lookup(&record.dealer_region).map(|coordinate| GeoPoint {
                region: record.dealer_region.clone(),
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                size: record.price,
            })
        })
        .collect()
}

pub fn distinct_values<'a, I>(records: I, field: SalesField) -> Vec<String>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    records
        .into_iter()
        .map(|r| field.value(r))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
