//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::{tour_ratings, tours};

/// Row struct for reading from the tours table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tours)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TourRow {
    pub id: i32,
    pub title: String,
}

/// Row struct for reading from the tour_ratings table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = tour_ratings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TourRatingRow {
    pub tour_id: i32,
    pub customer_id: i32,
    pub score: i32,
    pub comment: Option<String>,
}

/// Insertable struct for writing a rating.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tour_ratings)]
pub(crate) struct NewTourRatingRow<'a> {
    pub tour_id: i32,
    pub customer_id: i32,
    pub score: i32,
    pub comment: Option<&'a str>,
}
