//! Diesel schema for workflow persistence.

diesel::table! {
    /// Durable reminder workflow runs.
    reminder_runs (id) {
        /// Run identifier.
        id -> Uuid,
        /// Current step of the run.
        #[max_length = 50]
        step -> Varchar,
        /// Wake time while the run is suspended.
        wake_at -> Nullable<Timestamptz>,
        /// Triggering event payload.
        payload -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last transition timestamp.
        updated_at -> Timestamptz,
    }
}
