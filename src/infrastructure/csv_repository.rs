// CSV file repository implementation
use crate::application::sales_repository::{LoadError, SalesRepository, SourceIdentity};
use crate::domain::sale::SaleRecord;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

const REQUIRED_COLUMNS: [&str; 12] = [
    "Car_id",
    "Date",
    "Customer Name",
    "Dealer_Name",
    "Company",
    "Color",
    "Model",
    "Body Style",
    "Transmission",
    "Engine",
    "Dealer_Region",
    "Price ($)",
];

#[derive(Debug, Deserialize)]
struct CsvSaleRow {
    #[serde(rename = "Car_id")]
    car_id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Customer Name")]
    customer_name: String,
    #[serde(rename = "Dealer_Name")]
    dealer_name: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Color")]
    color: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Body Style")]
    body_style: String,
    #[serde(rename = "Transmission")]
    transmission: String,
    #[serde(rename = "Engine")]
    engine: String,
    #[serde(rename = "Dealer_Region")]
    dealer_region: String,
    #[serde(rename = "Price ($)")]
    price: String,
}

impl CsvSaleRow {
    fn into_record(self, line: u64) -> Result<SaleRecord, LoadError> {
        let date = SaleRecord::parse_date(&self.date).map_err(|_| LoadError::InvalidDate {
            line,
            car_id: self.car_id.clone(),
            value: self.date.clone(),
        })?;

        let price = match self.price.parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => {
                return Err(LoadError::InvalidPrice {
                    line,
                    car_id: self.car_id,
                    value: self.price,
                });
            }
        };

        Ok(SaleRecord {
            car_id: self.car_id,
            date,
            customer_name: self.customer_name,
            dealer_name: self.dealer_name,
            company: self.company,
            color: self.color,
            model: self.model,
            body_style: self.body_style,
            transmission: self.transmission,
            engine: self.engine,
            dealer_region: self.dealer_region,
            price,
        })
    }
}

/// Parse a whole Latin-1 encoded sales CSV. Any bad row fails the entire load.
pub fn parse_sales(bytes: &[u8]) -> Result<Vec<SaleRecord>, LoadError> {
    // true ISO-8859-1: every byte maps to the code point of the same value
    let text = encoding_rs::mem::decode_latin1(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| LoadError::MalformedRow { line: 1, source })?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let mut records = Vec::new();
    let mut seen_ids = HashSet::new();
    for result in reader.records() {
        let row = result.map_err(|source| LoadError::MalformedRow {
            line: source.position().map(|p| p.line()).unwrap_or_default(),
            source,
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let parsed: CsvSaleRow = row
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::MalformedRow { line, source })?;
        let record = parsed.into_record(line)?;

        if !seen_ids.insert(record.car_id.clone()) {
            return Err(LoadError::DuplicateCarId {
                line,
                car_id: record.car_id,
            });
        }
        records.push(record);
    }

    Ok(records)
}

#[derive(Debug, Clone)]
pub struct CsvSalesRepository {
    path: PathBuf,
}

impl CsvSalesRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> LoadError {
        LoadError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl SalesRepository for CsvSalesRepository {
    async fn source_identity(&self) -> Result<SourceIdentity, LoadError> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        Ok(SourceIdentity {
            location: self.path.display().to_string(),
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }

    async fn load(&self) -> Result<Vec<SaleRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        let records = parse_sales(&bytes);
        if let Err(e) = &records {
            tracing::error!("Rejected sales dataset {}: {}", self.path.display(), e);
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const HEADER: &str = "Car_id,Date,Customer Name,Gender,Annual Income,Dealer_Name,Company,Model,Engine,Transmission,Color,Price ($),Dealer_No ,Body Style,Phone,Dealer_Region";

    fn csv_with(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.into_bytes()
    }

    const ROW_1: &str = "C_CND_000001,1/2/2022,Geraldine,Male,13500,Buddy Storebeck's Diesel Service Inc,Ford,Expedition,Double Overhead Camshaft,Auto,Black,26000,06457-3834,SUV,8264678,Middletown";
    const ROW_2: &str = "C_CND_000002,12/31/2022,Gia,Male,1480000,C & M Motors Inc,Dodge,Durango,Overhead Camshaft,Manual,Black,19000,60504-7114,SUV,6848189,Aurora";

    #[test]
    fn test_parse_sales_rows() {
        let records = parse_sales(&csv_with(&[ROW_1, ROW_2])).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].car_id, "C_CND_000001");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
        assert_eq!(records[0].dealer_name, "Buddy Storebeck's Diesel Service Inc");
        assert_eq!(records[0].engine, "Double Overhead Camshaft");
        assert_eq!(records[0].price, 26000.0);
        assert_eq!(records[1].transmission, "Manual");
        assert_eq!(records[1].dealer_region, "Aurora");
    }

    #[test]
    fn test_latin1_bytes_are_decoded() {
        let mut bytes = csv_with(&[]);
        bytes.extend_from_slice(b"\nC_CND_000003,3/4/2022,Ren\xe9e,Female,750000,Capitol KIA,Audi,A6,Overhead Camshaft,Auto,Red,31000,38701-8047,Sedan,7298798,Pasco");

        let records = parse_sales(&bytes).unwrap();
        assert_eq!(records[0].customer_name, "Renée");
    }

    #[test]
    fn test_c1_bytes_decode_as_latin1_not_windows_1252() {
        let mut bytes = csv_with(&[]);
        bytes.extend_from_slice(b"\nC_CND_000004,3/4/2022,Ann\x92s,Female,750000,Capitol KIA,Audi,A6,Overhead Camshaft,Auto,Red,31000,38701-8047,Sedan,7298798,Pasco");

        let records = parse_sales(&bytes).unwrap();
        assert_eq!(records[0].customer_name, "Ann\u{92}s");
    }

    #[test]
    fn test_field_whitespace_is_kept() {
        let padded = ROW_1.replace(",SUV,", ",SUV ,").replace(",Ford,", ", Ford,");
        let records = parse_sales(&csv_with(&[padded.as_str()])).unwrap();

        assert_eq!(records[0].body_style, "SUV ");
        assert_eq!(records[0].company, " Ford");
    }

    #[test]
    fn test_bad_date_fails_whole_load() {
        let bad = ROW_2.replace("12/31/2022", "2022-12-31");
        let err = parse_sales(&csv_with(&[ROW_1, bad.as_str()])).unwrap_err();

        match err {
            LoadError::InvalidDate { line, car_id, value } => {
                assert_eq!(line, 3);
                assert_eq!(car_id, "C_CND_000002");
                assert_eq!(value, "2022-12-31");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let text = "Car_id,Date,Customer Name\nC1,1/2/2022,Geraldine";
        let err = parse_sales(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Dealer_Name"));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let bad = ROW_1.replace(",26000,", ",-5,");
        let err = parse_sales(&csv_with(&[bad.as_str()])).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPrice { .. }));
    }

    #[test]
    fn test_duplicate_car_id_is_rejected() {
        let err = parse_sales(&csv_with(&[ROW_1, ROW_1])).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateCarId { line: 3, .. }));
    }

    #[tokio::test]
    async fn test_repository_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&csv_with(&[ROW_1, ROW_2])).unwrap();
        file.flush().unwrap();

        let repository = CsvSalesRepository::new(file.path());
        let identity = repository.source_identity().await.unwrap();
        let records = repository.load().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(identity.len, csv_with(&[ROW_1, ROW_2]).len() as u64);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = CsvSalesRepository::new(dir.path().join("Car Sales.csv"));

        assert!(matches!(repository.source_identity().await, Err(LoadError::Io { .. })));
        assert!(matches!(repository.load().await, Err(LoadError::Io { .. })));
    }
}
