// Domain layer - Sale records, filtering, aggregation and display widgets
pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod region;
pub mod sale;
pub mod widgets;
