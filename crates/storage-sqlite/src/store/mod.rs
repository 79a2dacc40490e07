//! Shared record access for the `app_store` key-value table.

mod model;

pub use model::AppRecordDB;

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use drinkminder_core::errors::Result;

/// Reads the raw value stored under `key`, if any.
pub fn fetch_record(pool: &DbPool, key: &str) -> Result<Option<String>> {
    use crate::schema::app_store::dsl::*;

    let mut conn = get_connection(pool)?;
    app_store
        .filter(record_key.eq(key))
        .select(record_value)
        .first::<String>(&mut conn)
        .optional()
        .into_core()
}

/// Replaces the value stored under `key`. Meant to run on the writer actor's
/// dedicated connection.
pub fn replace_record(
    conn: &mut SqliteConnection,
    key: &str,
    value: String,
) -> std::result::Result<(), StorageError> {
    use crate::schema::app_store::dsl::*;

    diesel::replace_into(app_store)
        .values(AppRecordDB {
            record_key: key.to_string(),
            record_value: value,
        })
        .execute(conn)?;
    Ok(())
}
