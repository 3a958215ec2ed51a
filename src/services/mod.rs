//! Business logic services

pub mod records;

use std::sync::Arc;

use crate::repository::RecordStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub records: records::RecordService,
}

impl Services {
    /// Create all services on top of the given record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            records: records::RecordService::new(store),
        }
    }
}
