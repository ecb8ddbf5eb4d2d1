//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Sample records served by `GET /feature1/{id}`.
    feature1_sample (id) {
        /// Serial primary key.
        id -> Int4,
        column1 -> Nullable<Text>,
        column2 -> Nullable<Text>,
        /// Set once on insert by the database.
        created_at -> Timestamptz,
        /// Refreshed by the `set_updated_at` trigger on every update.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Sample records served by `GET /feature2/{id}`.
    feature2_sample (id) {
        id -> Int4,
        column1 -> Nullable<Text>,
        column2 -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Users seeded by the test harness.
    users (id) {
        id -> Int4,
        name -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(feature1_sample, feature2_sample, users);
