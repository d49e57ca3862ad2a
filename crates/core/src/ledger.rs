// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date unit accounting for room types.
//!
//! The ledger tracks, for every (room type, calendar date), how many
//! units are held. Dates with no record are fully available. All
//! mutations for one room type run under that room type's lock, so a
//! reserve is all-or-nothing: either every night of the stay is held
//! or nothing changes.

use staybook_domain::{HoldToken, RoomType, RoomTypeId, StayRange};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use time::Date;
use tracing::debug;

/// Errors reported by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The room type was never registered with the ledger.
    UnknownRoomType(RoomTypeId),
    /// A night of the requested stay lacks enough free units.
    NoCapacity {
        /// The room type that ran out of units.
        room_type_id: RoomTypeId,
        /// The first conflicting date, in stay order.
        date: Date,
    },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoomType(room_type_id) => {
                write!(f, "Unknown room type: {room_type_id}")
            }
            Self::NoCapacity { room_type_id, date } => {
                write!(f, "No capacity for room type {room_type_id} on {date}")
            }
        }
    }
}

impl std::error::Error for LedgerError {}

/// Held-unit counts for one room type, guarded by the room type lock.
#[derive(Debug, Default)]
struct DateTable {
    /// Units held per date; absent dates are fully available.
    held: BTreeMap<Date, u32>,
    /// Token numbers with an outstanding hold, for idempotent release.
    active_tokens: HashSet<u64>,
}

/// Capacity ceiling and held counts for one room type.
#[derive(Debug)]
struct RoomInventory {
    /// Fixed number of physical units; the per-date ceiling.
    total_units: u32,
    table: Mutex<DateTable>,
}

impl RoomInventory {
    fn lock_table(&self) -> MutexGuard<'_, DateTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory authority over unit availability.
///
/// Room types must be registered before they can be reserved against.
/// Holds are granted as [`HoldToken`]s; releasing a token twice is a
/// no-op, so compensation paths may release without bookkeeping.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    rooms: RwLock<HashMap<RoomTypeId, Arc<RoomInventory>>>,
    next_token_id: AtomicU64,
}

impl InventoryLedger {
    /// Creates an empty ledger with no registered room types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a room type with its fixed unit count.
    ///
    /// Registering an already-known room type is a no-op; existing
    /// holds are never disturbed.
    pub fn register_room_type(&self, room_type: &RoomType) {
        let mut rooms = self
            .rooms
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        rooms
            .entry(room_type.room_type_id.clone())
            .or_insert_with(|| {
                debug!(
                    room_type_id = %room_type.room_type_id,
                    total_units = room_type.total_units,
                    "Registered room type"
                );
                Arc::new(RoomInventory {
                    total_units: room_type.total_units,
                    table: Mutex::new(DateTable::default()),
                })
            });
    }

    /// Returns whether the room type has been registered.
    #[must_use]
    pub fn is_registered(&self, room_type_id: &RoomTypeId) -> bool {
        self.rooms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(room_type_id)
    }

    fn room(&self, room_type_id: &RoomTypeId) -> Result<Arc<RoomInventory>, LedgerError> {
        self.rooms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(room_type_id)
            .cloned()
            .ok_or_else(|| LedgerError::UnknownRoomType(room_type_id.clone()))
    }

    /// Reports whether `room_count` units are free on every night of
    /// the stay. Read-only; a later reserve may still fail.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UnknownRoomType` if the room type was
    /// never registered.
    pub fn check_availability(
        &self,
        room_type_id: &RoomTypeId,
        stay: &StayRange,
        room_count: u32,
    ) -> Result<bool, LedgerError> {
        let room = self.room(room_type_id)?;
        let table = room.lock_table();
        Ok(stay.dates().all(|date| {
            let held = table.held.get(&date).copied().unwrap_or(0);
            room.total_units.saturating_sub(held) >= room_count
        }))
    }

    /// Atomically holds `room_count` units for every night of the stay.
    ///
    /// The whole range is checked under the room type's lock before any
    /// count is touched, so a failed reserve leaves the ledger exactly
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UnknownRoomType` if the room type was
    /// never registered, or `LedgerError::NoCapacity` naming the first
    /// conflicting date.
    pub fn reserve(
        &self,
        room_type_id: &RoomTypeId,
        stay: &StayRange,
        room_count: u32,
    ) -> Result<HoldToken, LedgerError> {
        let room = self.room(room_type_id)?;
        let mut table = room.lock_table();

        for date in stay.dates() {
            let held = table.held.get(&date).copied().unwrap_or(0);
            if room.total_units.saturating_sub(held) < room_count {
                return Err(LedgerError::NoCapacity {
                    room_type_id: room_type_id.clone(),
                    date,
                });
            }
        }

        for date in stay.dates() {
            *table.held.entry(date).or_insert(0) += room_count;
        }

        let token_id = self.next_token_id.fetch_add(1, Ordering::Relaxed) + 1;
        table.active_tokens.insert(token_id);
        debug!(
            %room_type_id,
            %stay,
            room_count,
            token_id,
            "Granted inventory hold"
        );
        Ok(HoldToken::new(token_id, room_type_id.clone(), *stay, room_count))
    }

    /// Returns the token's held units on every night it covers.
    ///
    /// Releasing is idempotent: a token that was already released, or
    /// never granted by this ledger, is ignored.
    pub fn release(&self, token: &HoldToken) {
        let Ok(room) = self.room(token.room_type_id()) else {
            return;
        };
        let mut table = room.lock_table();
        if !table.active_tokens.remove(&token.token_id()) {
            return;
        }

        for date in token.stay().dates() {
            if let Some(held) = table.held.get_mut(&date) {
                *held = held.saturating_sub(token.room_count());
            }
        }
        table.held.retain(|_, held| *held > 0);
        debug!(
            room_type_id = %token.room_type_id(),
            token_id = token.token_id(),
            "Released inventory hold"
        );
    }

    /// Returns the units currently held for the room type on a date.
    ///
    /// Unknown room types and untouched dates both report zero.
    #[must_use]
    pub fn units_held(&self, room_type_id: &RoomTypeId, date: Date) -> u32 {
        self.room(room_type_id).map_or(0, |room| {
            room.lock_table().held.get(&date).copied().unwrap_or(0)
        })
    }
}
