// Filter selection and the filtering pass over sale records
use super::sale::{SaleRecord, SalesField};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

pub const ALL: &str = "All";

/// A categorical constraint: either no constraint or an exact, case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Absent values and the literal "All" both mean no constraint.
    pub fn from_param(value: Option<String>) -> Self {
        match value {
            Some(v) if v != ALL => CategoryFilter::Exact(v),
            _ => CategoryFilter::All,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(expected) => expected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Exact(v) => v,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Inclusive date range. A range whose start is after its end matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2022, 12, 31).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterSelection {
    pub body_style: CategoryFilter,
    pub dealer_name: CategoryFilter,
    pub transmission: CategoryFilter,
    pub engine: CategoryFilter,
    pub date_range: DateRange,
}

impl FilterSelection {
    fn categorical(&self) -> [(SalesField, &CategoryFilter); 4] {
        [
            (SalesField::BodyStyle, &self.body_style),
            (SalesField::DealerName, &self.dealer_name),
            (SalesField::Transmission, &self.transmission),
            (SalesField::Engine, &self.engine),
        ]
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.categorical()
            .iter()
            .all(|(field, filter)| filter.matches(field.value(record)))
            && self.date_range.contains(record.date)
    }
}

/// Keep the records matching every active constraint, in their original order.
pub fn apply<'a>(records: &'a [SaleRecord], selection: &FilterSelection) -> Vec<&'a SaleRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}
