//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use tour_ratings::outbound::persistence::{DbPool, DieselTourRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/ratings")).await?;
//! let tours = DieselTourRepository::new(pool);
//! # let _ = tours;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_tour_rating_repository;
mod diesel_tour_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_tour_rating_repository::DieselTourRatingRepository;
pub use diesel_tour_repository::DieselTourRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
