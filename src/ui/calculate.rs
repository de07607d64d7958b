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


use tracing::{info, warn};
use capacity_source::{CapacityOption, CapacityOrigin, CapacityResolution};
use range_core::RangeInput;
use super::Screen;
use crate::ui::data::ApplicationData;

#[derive(Debug, Clone, PartialEq)]
pub enum CalculateMessage {
    WeightChanged(String),
    CapacitySelected(usize),
    CapacityEntered(u32),
    FlatTourToggled(bool),
    FetchCapacitiesPressed,
    CalculatePressed
}

/// The calculator form
pub struct CalculateScreen {
    weight: String,
    capacities: Vec<CapacityOption>,
    selected_capacity: Option<usize>,
    flat_tour: bool,
    fetch_in_progress: bool,
    capacity_origin: Option<CapacityOrigin>
}

impl CalculateScreen {
    pub(crate) fn new(app_data: &ApplicationData) -> Self {
        CalculateScreen {
            weight: app_data.remembered_weight().to_string(),
            capacities: CapacityOption::presets(),
            selected_capacity: Some(0),
            flat_tour: true,
            fetch_in_progress: false,
            capacity_origin: None
        }
    }

    /// Handles the form edits. Calculating and fetching are driven by [`UIMain`](super::UIMain)
    pub fn update(&mut self, message: CalculateMessage) {
        match message {
            CalculateMessage::WeightChanged(weight) => self.weight = weight,
            CalculateMessage::CapacitySelected(idx) => {
                if idx < self.capacities.len() {
                    self.selected_capacity = Some(idx);
                } else {
                    warn!("Ignoring selection of capacity {}. Only {} available", idx, self.capacities.len());
                }
            }
            CalculateMessage::CapacityEntered(watt_hours) => self.select_or_insert(CapacityOption::new(watt_hours)),
            CalculateMessage::FlatTourToggled(is_flat) => self.flat_tour = is_flat,
            CalculateMessage::FetchCapacitiesPressed | CalculateMessage::CalculatePressed => {}
        }
    }

    /// Replace the capacity list as a whole. The current selection is kept if the same
    /// capacity is still on offer, otherwise the first entry is selected
    pub fn apply_capacities(&mut self, resolution: CapacityResolution) {
        let previous = self.selected_capacity();
        self.capacity_origin = Some(resolution.origin().clone());
        self.capacities = resolution.into_options();
        self.selected_capacity = match previous {
            Some(capacity) => self.capacities.iter().position(|c| *c == capacity).or(Some(0)),
            None => Some(0)
        };
        if self.capacities.is_empty() {
            self.selected_capacity = None;
        }
        self.fetch_in_progress = false;
        info!("Capacity list now has {} entries", self.capacities.len());
    }

    fn select_or_insert(&mut self, capacity: CapacityOption) {
        let idx = match self.capacities.binary_search(&capacity) {
            Ok(idx) => idx,
            Err(idx) => {
                self.capacities.insert(idx, capacity);
                idx
            }
        };
        self.selected_capacity = Some(idx);
    }

    pub fn range_input(&self) -> RangeInput {
        let capacity_label = match self.selected_capacity() {
            Some(capacity) => capacity.label(),
            None => String::from("0")
        };
        RangeInput::from_fields(&self.weight, &capacity_label, self.flat_tour)
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn capacities(&self) -> &[CapacityOption] {
        &self.capacities
    }

    pub fn selected_capacity(&self) -> Option<CapacityOption> {
        self.selected_capacity.and_then(|idx| self.capacities.get(idx).copied())
    }

    pub fn is_flat_tour(&self) -> bool {
        self.flat_tour
    }

    /// Where the current capacity list came from. `None` until capacities have been fetched
    pub fn capacity_origin(&self) -> Option<&CapacityOrigin> {
        self.capacity_origin.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_progress
    }

    pub(crate) fn set_fetching(&mut self) {
        self.fetch_in_progress = true;
    }
}

impl Screen for CalculateScreen {
    fn title(&self) -> String {
        String::from("Calculate")
    }

    fn content(&self, _app_data: &ApplicationData) -> String {
        let selected = match self.selected_capacity() {
            Some(capacity) => capacity.label(),
            None => String::from("Select Capacity")
        };
        let options = self.capacities.iter().enumerate()
            .map(|(idx, capacity)| {
                let marker = if Some(idx) == self.selected_capacity { "*" } else { " " };
                format!("  {}{}) {}", marker, idx + 1, capacity.label())
            })
            .collect::<Vec<String>>()
            .join("\n");
        let mut out = format!("Your weight [kg]: {}\nBattery capacity [Wh]: {}\n{}\nFlat tour profile: {}",
                              self.weight,
                              selected,
                              options,
                              if self.flat_tour { "on" } else { "off" });
        if self.fetch_in_progress {
            out.push_str("\nFetching capacities from web...");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use capacity_source::{CapacityOption, CapacityOrigin, CapacityResolution};
    use crate::ui::calculate::{CalculateMessage, CalculateScreen};

    fn screen() -> CalculateScreen {
        CalculateScreen {
            weight: String::from("80"),
            capacities: CapacityOption::presets(),
            selected_capacity: Some(0),
            flat_tour: true,
            fetch_in_progress: false,
            capacity_origin: None
        }
    }

    #[test]
    fn form_builds_range_input() {
        let mut screen = screen();
        screen.update(CalculateMessage::CapacitySelected(2));
        screen.update(CalculateMessage::FlatTourToggled(false));
        let input = screen.range_input();
        assert_eq!(input.weight_kg(), 80.0);
        assert_eq!(input.capacity_wh(), 640.0);
        assert!(!input.is_flat());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut screen = screen();
        screen.update(CalculateMessage::CapacitySelected(1));
        screen.update(CalculateMessage::CapacitySelected(9));
        assert_eq!(screen.selected_capacity(), Some(CapacityOption::new(620)));
    }

    #[test]
    fn entered_capacity_is_inserted_in_order() {
        let mut screen = screen();
        screen.update(CalculateMessage::CapacityEntered(630));
        let values: Vec<u32> = screen.capacities().iter().map(CapacityOption::watt_hours).collect();
        assert_eq!(values, vec![600, 620, 630, 640, 660]);
        assert_eq!(screen.selected_capacity(), Some(CapacityOption::new(630)));

        screen.update(CalculateMessage::CapacityEntered(660));
        assert_eq!(screen.capacities().len(), 5);
        assert_eq!(screen.selected_capacity(), Some(CapacityOption::new(660)));
    }

    #[test]
    fn new_capacities_keep_matching_selection() {
        let mut screen = screen();
        screen.update(CalculateMessage::CapacityEntered(625));
        screen.set_fetching();
        screen.apply_capacities(CapacityResolution::fallback(String::from("offline")));
        assert!(!screen.is_fetching());
        assert_eq!(screen.capacity_origin(), Some(&CapacityOrigin::Fallback(String::from("offline"))));
        assert_eq!(screen.selected_capacity(), Some(CapacityOption::new(625)));

        screen.update(CalculateMessage::CapacitySelected(0));
        screen.apply_capacities(CapacityResolution::fetched(vec![CapacityOption::new(400)], "test"));
        assert_eq!(screen.selected_capacity(), Some(CapacityOption::new(400)));
    }

    #[test]
    fn unparsable_weight_is_zero() {
        let mut screen = screen();
        screen.update(CalculateMessage::WeightChanged(String::from("a lot")));
        assert_eq!(screen.range_input().weight_kg(), 0.0);
    }
}
