// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifies a hotel in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotelId {
    /// The identifier value.
    value: String,
}

impl HotelId {
    /// Creates a new `HotelId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for HotelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a bookable room category within a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomTypeId {
    /// The identifier value.
    value: String,
}

impl RoomTypeId {
    /// Creates a new `RoomTypeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RoomTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a single booking attempt's reservation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId {
    /// The identifier value.
    value: String,
}

impl ReservationId {
    /// Creates a new `ReservationId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies the user owning a reservation or review.
///
/// The identity provider is external; the core only requires the
/// identifier to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    /// The identifier value.
    value: String,
}

impl UserId {
    /// Creates a new `UserId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A bookable room category within a hotel.
///
/// The unit count is fixed per hotel; the Inventory Ledger treats it
/// as the capacity ceiling for every calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    /// The room type identifier.
    pub room_type_id: RoomTypeId,
    /// Back-reference to the owning hotel (non-owning).
    pub hotel_id: HotelId,
    /// Display name (e.g., "Deluxe King").
    pub name: String,
    /// Total number of physical units of this room type.
    pub total_units: u32,
    /// Maximum guests a single unit sleeps.
    pub capacity_per_unit: u32,
}

impl RoomType {
    /// Creates a new `RoomType`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomCapacity` if `capacity_per_unit`
    /// is zero.
    pub fn new(
        room_type_id: RoomTypeId,
        hotel_id: HotelId,
        name: String,
        total_units: u32,
        capacity_per_unit: u32,
    ) -> Result<Self, DomainError> {
        if capacity_per_unit == 0 {
            return Err(DomainError::InvalidRoomCapacity {
                room_type: room_type_id.value().to_owned(),
            });
        }
        Ok(Self {
            room_type_id,
            hotel_id,
            name,
            total_units,
            capacity_per_unit,
        })
    }
}

/// Immutable hotel reference data.
///
/// Owned by the external catalog provider; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// The hotel identifier.
    pub hotel_id: HotelId,
    /// The hotel name.
    pub name: String,
    /// Human-readable location (e.g., "New York, USA").
    pub location: String,
    /// Street address.
    pub address: String,
    /// Marketing description.
    pub description: String,
    /// Nightly base price in minor currency units.
    pub base_price: i64,
    /// Star rating (1-5).
    pub stars: u8,
    /// Amenities offered by the hotel.
    pub amenities: Vec<String>,
    /// The bookable room categories this hotel offers.
    pub room_types: Vec<RoomType>,
}

impl Hotel {
    /// Creates a new `Hotel`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `stars` is not between 1 and 5
    /// - `base_price` is not positive
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hotel_id: HotelId,
        name: String,
        location: String,
        address: String,
        description: String,
        base_price: i64,
        stars: u8,
        amenities: Vec<String>,
        room_types: Vec<RoomType>,
    ) -> Result<Self, DomainError> {
        if !(1..=5).contains(&stars) {
            return Err(DomainError::InvalidStarRating(stars));
        }
        if base_price <= 0 {
            return Err(DomainError::InvalidBasePrice(base_price));
        }
        Ok(Self {
            hotel_id,
            name,
            location,
            address,
            description,
            base_price,
            stars,
            amenities,
            room_types,
        })
    }

    /// Looks up one of this hotel's room types by identifier.
    #[must_use]
    pub fn room_type(&self, room_type_id: &RoomTypeId) -> Option<&RoomType> {
        self.room_types
            .iter()
            .find(|rt| &rt.room_type_id == room_type_id)
    }
}
