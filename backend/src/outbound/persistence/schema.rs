//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Tours that can be rated. Seeded by operators, never written here.
    tours (id) {
        id -> Int4,
        title -> Varchar,
    }
}

diesel::table! {
    /// One rating per customer and tour.
    ///
    /// The composite primary key `(tour_id, customer_id)` backs the upsert
    /// used by `DieselTourRatingRepository::save`.
    tour_ratings (tour_id, customer_id) {
        tour_id -> Int4,
        customer_id -> Int4,
        /// Constrained to 1..=5 by a CHECK constraint.
        score -> Int4,
        /// At most 255 characters.
        comment -> Nullable<Varchar>,
    }
}

diesel::joinable!(tour_ratings -> tours (tour_id));

diesel::allow_tables_to_appear_in_same_query!(tours, tour_ratings);
