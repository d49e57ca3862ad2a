// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in hotel reference data.
//!
//! Hotel inventory is owned by an upstream system in production; this
//! catalog carries a fixed fleet of eight properties so the engine is
//! fully usable out of the box.

use staybook::CatalogProvider;
use staybook_domain::{DomainError, Hotel, HotelId, RoomType, RoomTypeId};

/// In-memory catalog over a fixed set of hotels.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    hotels: Vec<Hotel>,
}

impl StaticCatalog {
    /// Builds the catalog with its built-in fleet.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in hotel violates the domain
    /// rules, which indicates a defect in the seed data.
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self {
            hotels: seed_hotels()?,
        })
    }

    /// Returns every hotel in the catalog.
    #[must_use]
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }
}

impl CatalogProvider for StaticCatalog {
    fn hotel(&self, hotel_id: &HotelId) -> Option<Hotel> {
        self.hotels
            .iter()
            .find(|hotel| &hotel.hotel_id == hotel_id)
            .cloned()
    }

    fn room_type(&self, room_type_id: &RoomTypeId) -> Option<RoomType> {
        self.hotels
            .iter()
            .find_map(|hotel| hotel.room_type(room_type_id).cloned())
    }
}

#[allow(clippy::too_many_lines)]
fn seed_hotels() -> Result<Vec<Hotel>, DomainError> {
    Ok(vec![
        build_hotel(
            "hotel-1",
            "Grand Plaza Hotel",
            "New York, USA",
            "768 5th Avenue, New York, NY 10019",
            "Luxury hotel in the heart of Manhattan with stunning city views.",
            299,
            5,
            &["Free WiFi", "Pool", "Spa", "Gym", "Restaurant"],
            &[("standard", "Standard Queen", 12, 2), ("suite", "Plaza Suite", 4, 4)],
        )?,
        build_hotel(
            "hotel-2",
            "Beach Paradise Resort",
            "Miami, USA",
            "4525 Collins Avenue, Miami Beach, FL 33140",
            "Beachfront resort with private beach access and water sports.",
            399,
            4,
            &["Free WiFi", "Private Beach", "Pool", "Bar", "Water Sports"],
            &[("standard", "Ocean View King", 20, 2), ("villa", "Beach Villa", 6, 6)],
        )?,
        build_hotel(
            "hotel-3",
            "Mountain View Lodge",
            "Aspen, USA",
            "315 East Dean Street, Aspen, CO 81611",
            "Cozy lodge with breathtaking mountain views and ski access.",
            199,
            4,
            &["Free WiFi", "Fireplace", "Ski Storage", "Hot Tub"],
            &[("standard", "Alpine Double", 10, 2), ("cabin", "Family Cabin", 5, 5)],
        )?,
        build_hotel(
            "hotel-4",
            "Urban Boutique Hotel",
            "San Francisco, USA",
            "501 Geary Street, San Francisco, CA 94102",
            "Stylish boutique hotel in downtown with modern amenities.",
            249,
            4,
            &["Free WiFi", "Rooftop Bar", "Gym", "Concierge"],
            &[("standard", "Boutique Queen", 8, 2), ("loft", "Urban Loft", 3, 3)],
        )?,
        build_hotel(
            "hotel-5",
            "Luxury Palace Hotel",
            "Las Vegas, USA",
            "3600 Las Vegas Boulevard, Las Vegas, NV 89109",
            "Opulent hotel with casino, shows, and world-class dining.",
            599,
            5,
            &["Free WiFi", "Casino", "Pool", "Spa", "Fine Dining", "Shows"],
            &[("standard", "Palace King", 30, 2), ("penthouse", "Penthouse Suite", 2, 6)],
        )?,
        build_hotel(
            "hotel-6",
            "Seaside Inn",
            "San Diego, USA",
            "910 Coast Boulevard, La Jolla, CA 92037",
            "Charming inn steps away from the beach with ocean views.",
            179,
            3,
            &["Free WiFi", "Beach Access", "Free Parking"],
            &[("standard", "Coastal Double", 14, 2)],
        )?,
        build_hotel(
            "hotel-7",
            "City Center Suites",
            "Chicago, USA",
            "20 East Chestnut Street, Chicago, IL 60611",
            "Spacious suites in downtown Chicago near major attractions.",
            229,
            4,
            &["Free WiFi", "Kitchen", "Gym", "Business Center"],
            &[("standard", "Junior Suite", 16, 3), ("executive", "Executive Suite", 6, 4)],
        )?,
        build_hotel(
            "hotel-8",
            "Garden Retreat Hotel",
            "Portland, USA",
            "422 SW Broadway, Portland, OR 97205",
            "Peaceful retreat surrounded by beautiful gardens.",
            169,
            3,
            &["Free WiFi", "Garden", "Free Breakfast", "Bike Rental"],
            &[("standard", "Garden Queen", 10, 2)],
        )?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn build_hotel(
    hotel_id: &str,
    name: &str,
    location: &str,
    address: &str,
    description: &str,
    base_price: i64,
    stars: u8,
    amenities: &[&str],
    rooms: &[(&str, &str, u32, u32)],
) -> Result<Hotel, DomainError> {
    let room_types: Vec<RoomType> = rooms
        .iter()
        .map(|(suffix, room_name, total_units, capacity_per_unit)| {
            RoomType::new(
                RoomTypeId::new(&format!("{hotel_id}-{suffix}")),
                HotelId::new(hotel_id),
                (*room_name).to_owned(),
                *total_units,
                *capacity_per_unit,
            )
        })
        .collect::<Result<_, _>>()?;

    Hotel::new(
        HotelId::new(hotel_id),
        name.to_owned(),
        location.to_owned(),
        address.to_owned(),
        description.to_owned(),
        base_price,
        stars,
        amenities.iter().map(|a| (*a).to_owned()).collect(),
        room_types,
    )
}
