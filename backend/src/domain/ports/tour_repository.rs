//! Port abstraction for tour lookups.
use async_trait::async_trait;

use crate::domain::{Tour, TourId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tour repository adapters.
    pub enum TourRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "tour repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "tour repository query failed: {message}",
    }
}

/// Read access to tours.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourRepository: Send + Sync {
    /// Fetch a tour by identifier, `None` when absent.
    async fn find_by_id(&self, id: TourId) -> Result<Option<Tour>, TourRepositoryError>;
}

/// Fixture implementation that knows no tours.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTourRepository;

#[async_trait]
impl TourRepository for FixtureTourRepository {
    async fn find_by_id(&self, _id: TourId) -> Result<Option<Tour>, TourRepositoryError> {
        Ok(None)
    }
}
