// Application layer - Use cases over the sales dataset
pub mod dashboard_service;
pub mod dataset_cache;
pub mod presenter;
pub mod sales_repository;
