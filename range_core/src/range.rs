/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of e-range.
 *
 * e-range is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * e-range is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with e-range. If not, see <https://www.gnu.org/licenses/>.
 */


use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::input::RangeInput;

/// Average consumption of a reference rider in Wh/km
pub const CONSUMPTION_WH_PER_KM: f64 = 7.0;
/// Rider + cargo weight the consumption figure was taken at
pub const REFERENCE_WEIGHT_KG: f64 = 80.0;
/// Only half of the naive range is reported
pub const SAFETY_FACTOR: f64 = 0.5;
/// Applied on top of everything else for non-flat tours
pub const NON_FLAT_FACTOR: f64 = 0.7;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainProfile {
    Flat,
    Hilly
}

impl TerrainProfile {
    pub fn from_flat(is_flat: bool) -> TerrainProfile {
        match is_flat {
            true => TerrainProfile::Flat,
            false => TerrainProfile::Hilly
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, TerrainProfile::Flat)
    }

    pub fn range_factor(&self) -> f64 {
        match self {
            TerrainProfile::Flat => 1.0,
            TerrainProfile::Hilly => NON_FLAT_FACTOR
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TerrainProfile::Flat => "flat",
            TerrainProfile::Hilly => "hilly"
        }
    }
}

/// Estimated riding range in km.
///
/// `range = capacity / consumption * (reference weight / weight) * 0.5`, reduced
/// by a further 30% when the tour isn't flat. A weight that is not strictly
/// positive gives a range of 0 rather than dividing by zero, and a negative or
/// non-finite capacity counts as an empty battery.
pub fn estimate_range(weight_kg: f64, capacity_wh: f64, flat_terrain: bool) -> f64 {
    if !utils::numeric::is_positive_finite(weight_kg) {
        return 0.0;
    }
    let capacity_wh = if capacity_wh.is_finite() { capacity_wh.max(0.0) } else { 0.0 };
    let weight_ratio = REFERENCE_WEIGHT_KG / weight_kg;
    let range = capacity_wh / CONSUMPTION_WH_PER_KM * weight_ratio * SAFETY_FACTOR;
    range * TerrainProfile::from_flat(flat_terrain).range_factor()
}

/// The outcome of a single calculation along with what it was calculated from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeEstimate {
    distance_km: f64,
    input: RangeInput
}

impl RangeEstimate {
    pub fn calculate(input: RangeInput) -> RangeEstimate {
        let distance_km = estimate_range(input.weight_kg(), input.capacity_wh(), input.is_flat());
        tracing::debug!("Estimated {:.3} km for {}", distance_km, input);
        RangeEstimate { distance_km, input }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn input(&self) -> &RangeInput {
        &self.input
    }

    /// True when the estimate is 0 only because no usable weight was given
    pub fn is_missing_weight(&self) -> bool {
        !utils::numeric::is_positive_finite(self.input.weight_kg())
    }
}

impl Display for RangeEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Your calculated range is: {:.3} km.", self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crate::input::RangeInput;
    use crate::range::{estimate_range, RangeEstimate, TerrainProfile};

    #[test]
    fn reference_rider_range() {
        assert_relative_eq!(estimate_range(80.0, 640.0, true), 640.0 / 7.0 / 2.0);
        assert_relative_eq!(estimate_range(80.0, 640.0, true), 45.714285714, epsilon = 1e-6);
    }

    #[test]
    fn hilly_is_seventy_percent_of_flat() {
        for weight in [45.0, 70.0, 80.0, 95.5, 130.0] {
            for capacity in [0.0, 300.0, 500.0, 625.0, 750.0, 1000.0] {
                assert_relative_eq!(estimate_range(weight, capacity, false),
                                    estimate_range(weight, capacity, true) * 0.7,
                                    max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn range_grows_with_capacity() {
        for flat in [true, false] {
            let mut last = estimate_range(75.0, 0.0, flat);
            for capacity in (0..=2000).step_by(25) {
                let current = estimate_range(75.0, capacity as f64, flat);
                assert!(current >= last);
                last = current;
            }
        }
    }

    #[test]
    fn range_shrinks_with_weight() {
        for flat in [true, false] {
            let mut last = estimate_range(1.0, 625.0, flat);
            for weight in 1..=200 {
                let current = estimate_range(weight as f64, 625.0, flat);
                assert!(current <= last);
                last = current;
            }
        }
    }

    #[test]
    fn zero_or_negative_weight_gives_no_range() {
        assert_eq!(estimate_range(0.0, 640.0, true), 0.0);
        assert_eq!(estimate_range(-10.0, 640.0, false), 0.0);
        assert_eq!(estimate_range(f64::NAN, 640.0, true), 0.0);
        assert_eq!(estimate_range(f64::INFINITY, 640.0, true), 0.0);
    }

    #[test]
    fn unusable_capacity_counts_as_empty() {
        assert_eq!(estimate_range(80.0, -500.0, true), 0.0);
        assert_eq!(estimate_range(80.0, f64::NAN, true), 0.0);
        assert_eq!(estimate_range(80.0, 0.0, true), 0.0);
    }

    #[test]
    fn estimate_keeps_its_input() {
        let input = RangeInput::from_fields("80", "640 Wh", false);
        let estimate = RangeEstimate::calculate(input);
        assert_relative_eq!(estimate.distance_km(), 640.0 / 7.0 / 2.0 * 0.7);
        assert_eq!(estimate.input().terrain(), TerrainProfile::Hilly);
        assert!(!estimate.is_missing_weight());
        assert_eq!(estimate.to_string(), "Your calculated range is: 32.000 km.");
    }

    #[test]
    fn missing_weight_is_flagged() {
        let estimate = RangeEstimate::calculate(RangeInput::from_fields("", "640", true));
        assert_eq!(estimate.distance_km(), 0.0);
        assert!(estimate.is_missing_weight());
    }
}
