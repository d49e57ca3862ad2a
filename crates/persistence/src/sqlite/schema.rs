// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Initializes the database schema.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    // Enable foreign key enforcement
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reservations (
            reservation_id TEXT PRIMARY KEY NOT NULL,
            hotel_id TEXT NOT NULL,
            room_type_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            check_in TEXT NOT NULL,
            check_out TEXT NOT NULL,
            status TEXT NOT NULL
                CHECK(status IN ('draft', 'held', 'confirmed', 'rejected', 'cancelled')),
            reservation_json TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reservations_user
            ON reservations(user_id);

        CREATE INDEX IF NOT EXISTS idx_reservations_hotel
            ON reservations(hotel_id, check_in);
        ",
    )?;

    Ok(())
}
