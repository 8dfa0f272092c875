//! # Watering Status
//!
//! [`watering_status`] classifies a plant against an instant:
//!
//! - never watered: no countdown, only the frequency is known
//! - needs water: the due instant has been reached
//! - counting down: time left until the due instant, broken into
//!   days/hours/minutes/seconds
//!
//! It is a pure function of the plant record and `now`; the caller owns the
//! clock.

use crate::model::{Plant, SECONDS_PER_DAY};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WateringStatus {
    NeverWatered {
        frequency_days: u32,
    },
    NeedsWater {
        last_watered_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    },
    CountingDown {
        next_water_at: DateTime<Utc>,
        remaining: Remaining,
    },
}

impl WateringStatus {
    pub fn needs_water(&self) -> bool {
        matches!(self, WateringStatus::NeedsWater { .. })
    }
}

/// Time left until the next watering, truncated to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Remaining {
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total % SECONDS_PER_DAY) / 3600) as u8,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + i64::from(self.hours) * 3600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

pub fn watering_status(plant: &Plant, now: DateTime<Utc>) -> WateringStatus {
    let (Some(last), Some(due)) = (plant.last_watered, plant.next_water_at()) else {
        return WateringStatus::NeverWatered {
            frequency_days: plant.watering_frequency,
        };
    };

    if now >= due {
        return WateringStatus::NeedsWater {
            last_watered_at: last,
            due_at: due,
        };
    }

    // num_seconds truncates toward zero, which is floor for a positive span
    let left = (due - now).num_seconds();
    WateringStatus::CountingDown {
        next_water_at: due,
        remaining: Remaining::from_seconds(left),
    }
}
