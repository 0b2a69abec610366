// Dataset cache - Loads the sales records once per source identity
use crate::application::sales_repository::{LoadError, SalesRepository, SourceIdentity};
use crate::domain::sale::SaleRecord;
use std::sync::Arc;
use tokio::sync::RwLock;

struct CachedDataset {
    identity: SourceIdentity,
    records: Arc<Vec<SaleRecord>>,
}

#[derive(Clone)]
pub struct DatasetCache {
    repository: Arc<dyn SalesRepository>,
    cached: Arc<RwLock<Option<CachedDataset>>>,
}

impl DatasetCache {
    pub fn new(repository: Arc<dyn SalesRepository>) -> Self {
        Self {
            repository,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached records when the source is unchanged, otherwise a fresh load.
    pub async fn records(&self) -> Result<Arc<Vec<SaleRecord>>, LoadError> {
        let identity = self.repository.source_identity().await?;

        {
            let cached = self.cached.read().await;
            if let Some(dataset) = cached.as_ref() {
                if dataset.identity == identity {
                    return Ok(dataset.records.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;
        // another request may have reloaded while we waited for the lock
        if let Some(dataset) = cached.as_ref() {
            if dataset.identity == identity {
                return Ok(dataset.records.clone());
            }
        }

        tracing::info!("Loading sales dataset from {}", identity.location);
        *cached = None;
        let records = Arc::new(self.repository.load().await?);
        tracing::info!("Loaded {} sales records from {}", records.len(), identity.location);

        *cached = Some(CachedDataset {
            identity,
            records: records.clone(),
        });
        Ok(records)
    }

    pub async fn invalidate(&self) {
        let mut cached = self.cached.write().await;
        if cached.take().is_some() {
            tracing::info!("Sales dataset cache invalidated");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory repository counting how often it was loaded.
    pub struct StaticRepository {
        pub records: Mutex<Result<Vec<SaleRecord>, String>>,
        pub version: AtomicUsize,
        pub loads: AtomicUsize,
    }

    impl StaticRepository {
        pub fn new(records: Vec<SaleRecord>) -> Self {
            Self {
                records: Mutex::new(Ok(records)),
                version: AtomicUsize::new(0),
                loads: AtomicUsize::new(0),
            }
        }

        pub fn failing(message: &str) -> Self {
            let repository = Self::new(Vec::new());
            *repository.records.lock().unwrap() = Err(message.to_string());
            repository
        }
    }

    #[async_trait]
    impl SalesRepository for StaticRepository {
        async fn source_identity(&self) -> Result<SourceIdentity, LoadError> {
            Ok(SourceIdentity {
                location: "memory".to_string(),
                modified: None,
                len: self.version.load(Ordering::SeqCst) as u64,
            })
        }

        async fn load(&self) -> Result<Vec<SaleRecord>, LoadError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.records.lock().unwrap().clone().map_err(|message| LoadError::Io {
                path: "memory".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StaticRepository;
    use super::*;
    use crate::domain::sale::fixtures::record;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_records_are_loaded_once() {
        let repository = Arc::new(StaticRepository::new(vec![record("C1", (2022, 2, 1), 100.0)]));
        let cache = DatasetCache::new(repository.clone());

        let first = cache.records().await.unwrap();
        let second = cache.records().await.unwrap();

        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(repository.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_changed_source_reloads() {
        let repository = Arc::new(StaticRepository::new(vec![record("C1", (2022, 2, 1), 100.0)]));
        let cache = DatasetCache::new(repository.clone());

        cache.records().await.unwrap();
        repository.version.fetch_add(1, Ordering::SeqCst);
        cache.records().await.unwrap();

        assert_eq!(repository.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let repository = Arc::new(StaticRepository::new(vec![]));
        let cache = DatasetCache::new(repository.clone());

        cache.records().await.unwrap();
        cache.invalidate().await;
        cache.records().await.unwrap();

        assert_eq!(repository.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let repository = Arc::new(StaticRepository::failing("gone"));
        let cache = DatasetCache::new(repository.clone());

        assert!(cache.records().await.is_err());
        assert!(cache.records().await.is_err());
        assert_eq!(repository.loads.load(Ordering::SeqCst), 2);
    }
}
