//! Database model for persisted application records.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for app store key-value records.
///
/// Each domain record is serialized to a single JSON string and stored under
/// a well-known key. Writes replace the whole value.
#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::app_store)]
#[serde(rename_all = "camelCase")]
pub struct AppRecordDB {
    pub record_key: String,
    pub record_value: String,
}
