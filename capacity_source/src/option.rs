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
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utils::units::{format_watt_hours, strip_watt_hour_suffix};

/// Offered on the calculator form before anything has been fetched
pub const PRESET_CAPACITIES_WH: [u32; 4] = [600, 620, 640, 660];
/// Used whenever fetching capacities from the web fails
pub const FALLBACK_CAPACITIES_WH: [u32; 3] = [500, 625, 750];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityOption {
    watt_hours: u32
}

impl CapacityOption {
    pub fn new(watt_hours: u32) -> CapacityOption {
        CapacityOption { watt_hours }
    }

    pub fn watt_hours(&self) -> u32 {
        self.watt_hours
    }

    pub fn label(&self) -> String {
        format_watt_hours(self.watt_hours)
    }

    pub fn presets() -> Vec<CapacityOption> {
        Self::from_values(&PRESET_CAPACITIES_WH)
    }

    pub fn fallback() -> Vec<CapacityOption> {
        Self::from_values(&FALLBACK_CAPACITIES_WH)
    }

    fn from_values(values: &[u32]) -> Vec<CapacityOption> {
        values.iter().copied().map(CapacityOption::new).collect()
    }
}

impl Display for CapacityOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CapacityOption {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CapacityOption::new(strip_watt_hour_suffix(s).parse::<u32>()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::option::CapacityOption;

    #[test]
    fn labels() {
        assert_eq!(CapacityOption::new(625).label(), "625 Wh");
        assert_eq!(CapacityOption::new(625).to_string(), "625 Wh");
    }

    #[test]
    fn parse_label() {
        assert_eq!("640 Wh".parse::<CapacityOption>().unwrap(), CapacityOption::new(640));
        assert_eq!("640".parse::<CapacityOption>().unwrap(), CapacityOption::new(640));
        assert!("lots Wh".parse::<CapacityOption>().is_err());
        assert!("-5 Wh".parse::<CapacityOption>().is_err());
    }

    #[test]
    fn built_in_lists_are_ordered() {
        let presets: Vec<u32> = CapacityOption::presets().iter().map(|c| c.watt_hours()).collect();
        assert_eq!(presets, vec![600, 620, 640, 660]);
        let fallback: Vec<u32> = CapacityOption::fallback().iter().map(|c| c.watt_hours()).collect();
        assert_eq!(fallback, vec![500, 625, 750]);
    }
}
