// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::{Connection, OptionalExtension, params};
use staybook::{ReservationStore, StoreError};
use staybook_domain::{Reservation, ReservationId};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::sqlite::schema::initialize_schema;

/// `SQLite`-backed reservation store.
///
/// The full reservation state is stored as a JSON document; the
/// indexed columns are derived from it on every save and never read
/// back into domain values.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens a store backed by the database file at `path`, creating
    /// the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path)
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        initialize_schema(&conn)?;
        info!("Opened reservation store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory store, used for tests and development.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be initialized.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Saves a reservation, replacing any record with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, reservation: &Reservation) -> Result<(), PersistenceError> {
        let reservation_json: String = serde_json::to_string(reservation)?;
        let conn = self.lock_conn();

        conn.execute(
            "INSERT OR REPLACE INTO reservations
                (reservation_id, hotel_id, room_type_id, user_id,
                 check_in, check_out, status, reservation_json, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                reservation.reservation_id.value(),
                reservation.hotel_id.value(),
                reservation.room_type_id.value(),
                reservation.user_id.value(),
                reservation.stay.check_in().to_string(),
                reservation.stay.check_out().to_string(),
                reservation.status.as_str(),
                reservation_json,
                reservation.created_at.unix_timestamp(),
            ],
        )?;
        debug!(
            reservation_id = %reservation.reservation_id,
            status = %reservation.status,
            "Saved reservation"
        );
        Ok(())
    }

    /// Loads a reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored JSON does not
    /// deserialize.
    pub fn load(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Reservation>, PersistenceError> {
        let conn = self.lock_conn();
        let reservation_json: Option<String> = conn
            .query_row(
                "SELECT reservation_json FROM reservations WHERE reservation_id = ?1",
                params![reservation_id.value()],
                |row| row.get(0),
            )
            .optional()?;

        match reservation_json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Loads all reservations belonging to a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or any stored JSON does not
    /// deserialize.
    pub fn load_for_user(&self, user_id: &str) -> Result<Vec<Reservation>, PersistenceError> {
        let conn = self.lock_conn();
        let mut stmt = conn.prepare(
            "SELECT reservation_json FROM reservations
             WHERE user_id = ?1
             ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| row.get::<_, String>(0))?;

        let mut reservations: Vec<Reservation> = Vec::new();
        for json in rows {
            reservations.push(serde_json::from_str(&json?)?);
        }
        Ok(reservations)
    }
}

impl ReservationStore for SqliteStore {
    fn save_reservation(&self, reservation: &Reservation) -> Result<(), StoreError> {
        self.save(reservation)
            .map_err(|e| StoreError::new(&e.to_string()))
    }

    fn load_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Reservation>, StoreError> {
        self.load(reservation_id)
            .map_err(|e| StoreError::new(&e.to_string()))
    }
}
