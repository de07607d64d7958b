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
use utils::numeric::{is_positive_finite, parse_decimal_or_zero};
use utils::units::strip_watt_hour_suffix;
use crate::error::{RangeError, Result};
use crate::range::TerrainProfile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeInput {
    weight_kg: f64,
    capacity_wh: f64,
    terrain: TerrainProfile
}

impl RangeInput {
    /// Builds an input that is guaranteed to give a meaningful estimate
    pub fn try_new(weight_kg: f64, capacity_wh: f64, flat_terrain: bool) -> Result<RangeInput> {
        if !is_positive_finite(weight_kg) {
            return Err(RangeError::InvalidWeight(weight_kg));
        }
        if !capacity_wh.is_finite() || capacity_wh < 0.0 {
            return Err(RangeError::InvalidCapacity(capacity_wh));
        }
        Ok(RangeInput { weight_kg, capacity_wh, terrain: TerrainProfile::from_flat(flat_terrain) })
    }

    /// Builds an input from raw form values. Anything that doesn't parse as a number becomes 0,
    /// the capacity may carry a trailing "Wh".
    pub fn from_fields(weight_text: &str, capacity_text: &str, flat_terrain: bool) -> RangeInput {
        RangeInput {
            weight_kg: parse_decimal_or_zero(weight_text),
            capacity_wh: parse_decimal_or_zero(strip_watt_hour_suffix(capacity_text)),
            terrain: TerrainProfile::from_flat(flat_terrain)
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn capacity_wh(&self) -> f64 {
        self.capacity_wh
    }

    pub fn terrain(&self) -> TerrainProfile {
        self.terrain
    }

    pub fn is_flat(&self) -> bool {
        self.terrain.is_flat()
    }
}

impl Display for RangeInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg, {} Wh, {} tour", self.weight_kg, self.capacity_wh, self.terrain.as_str())
    }
}
