// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// A half-open stay interval `[check_in, check_out)`.
///
/// The check-out date is exclusive: a guest checking out on a date does
/// not occupy a unit that night. Construction is the single checkpoint
/// for range validity, so every `StayRange` in the system covers at
/// least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRange {
    /// First occupied night.
    check_in: Date,
    /// Exclusive end of the stay.
    check_out: Date,
}

impl StayRange {
    /// Creates a new `StayRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_out` is not
    /// strictly after `check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the exclusive check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of nights covered by this range.
    ///
    /// Always at least 1 by construction.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }

    /// Iterates every occupied date in `[check_in, check_out)`.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        let mut current: Option<Date> = Some(self.check_in);
        let check_out: Date = self.check_out;
        std::iter::from_fn(move || {
            let date: Date = current?;
            if date >= check_out {
                return None;
            }
            current = date.next_day();
            Some(date)
        })
    }

    /// Returns whether the given date falls inside this stay.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Returns whether two stays share at least one occupied night.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl std::fmt::Display for StayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}
