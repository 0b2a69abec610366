// Sale record domain model
use chrono::NaiveDate;

/// Date format used by the `Date` column of the sales dataset.
pub const SALE_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub car_id: String,
    pub date: NaiveDate,
    pub customer_name: String,
    pub dealer_name: String,
    pub company: String,
    pub color: String,
    pub model: String,
    pub body_style: String,
    pub transmission: String,
    pub engine: String,
    pub dealer_region: String,
    pub price: f64,
}

impl SaleRecord {
    pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(raw, SALE_DATE_FORMAT)
    }
}

/// Categorical columns of a sale record, used for grouping and selector options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesField {
    CustomerName,
    DealerName,
    Company,
    Color,
    Model,
    BodyStyle,
    Transmission,
    Engine,
    DealerRegion,
}

impl SalesField {
    pub fn value<'a>(&self, record: &'a SaleRecord) -> &'a str {
        match self {
            SalesField::CustomerName => &record.customer_name,
            SalesField::DealerName => &record.dealer_name,
            SalesField::Company => &record.company,
            SalesField::Color => &record.color,
            SalesField::Model => &record.model,
            SalesField::BodyStyle => &record.body_style,
            SalesField::Transmission => &record.transmission,
            SalesField::Engine => &record.engine,
            SalesField::DealerRegion => &record.dealer_region,
        }
    }
}
