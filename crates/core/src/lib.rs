// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod coordinator;
mod error;
mod ledger;
mod reviews;

#[cfg(test)]
mod tests;

pub use coordinator::{BookingCoordinator, BookingRequest, CatalogProvider, ReservationStore};
pub use error::{BookingError, CancelError, StoreError};
pub use ledger::{InventoryLedger, LedgerError};
pub use reviews::ReviewAggregator;
