//! Diesel row models for workflow persistence.

use super::schema::reminder_runs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for reminder run records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reminder_runs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReminderRunRow {
    /// Run identifier.
    pub id: uuid::Uuid,
    /// Current step string.
    pub step: String,
    /// Wake time while suspended.
    pub wake_at: Option<DateTime<Utc>>,
    /// Triggering event JSON payload.
    pub payload: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last transition timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for reminder run records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reminder_runs)]
pub struct NewReminderRunRow {
    /// Run identifier.
    pub id: uuid::Uuid,
    /// Current step string.
    pub step: String,
    /// Wake time while suspended.
    pub wake_at: Option<DateTime<Utc>>,
    /// Triggering event JSON payload.
    pub payload: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last transition timestamp.
    pub updated_at: DateTime<Utc>,
}
