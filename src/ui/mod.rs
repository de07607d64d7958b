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


mod calculate;
mod commands;
mod data;
mod info;
mod result;
mod runtime;
mod stations;

use tracing::{error, info, warn, span, Level};
use capacity_source::CapacityResolution;
use range_core::RangeEstimate;
use utils::numeric::is_positive_finite;

pub use calculate::{CalculateMessage, CalculateScreen};
pub use commands::{parse_command, Command, CommandError, HELP_TEXT};
pub use data::ApplicationData;
pub use info::InfoScreen;
pub use result::ResultScreen;
pub use runtime::{describe_map_query, launch, settle};
pub use stations::{MapQuery, StationsMessage, StationsScreen};

const APP_NAME: &str = "E-Range";

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Info,
    Map,
    Result(RangeEstimate)
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Info => "info",
            Route::Map => "map",
            Route::Result(_) => "result"
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Back,
    Calculate(CalculateMessage),
    CapacitiesResolved(CapacityResolution),
    Stations(StationsMessage)
}

/// Work requested by an update that has to happen outside of the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchCapacities,
    OpenMap(MapQuery),
    Notify(String)
}

/// Application state. All changes go through [`UIMain::update`] which returns the
/// effects the caller is expected to carry out.
pub struct UIMain {
    app_data: ApplicationData,
    history: Vec<Route>,
    calculate_screen: CalculateScreen,
    stations_screen: StationsScreen,
    info_screen: InfoScreen
}

impl UIMain {
    pub fn new(app_data: ApplicationData) -> Self {
        let calculate_screen = CalculateScreen::new(&app_data);
        info!("Created calculate screen");
        let stations_screen = StationsScreen::new(&app_data);
        info!("Created stations screen");
        UIMain {
            app_data,
            history: vec![Route::Home],
            calculate_screen,
            stations_screen,
            info_screen: InfoScreen
        }
    }

    pub fn title(&self) -> String {
        String::from(APP_NAME)
    }

    pub fn route(&self) -> &Route {
        self.history.last().unwrap_or(&Route::Home)
    }

    pub fn app_data(&self) -> &ApplicationData {
        &self.app_data
    }

    pub fn calculate_screen(&self) -> &CalculateScreen {
        &self.calculate_screen
    }

    pub fn stations_screen(&self) -> &StationsScreen {
        &self.stations_screen
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Navigate(route) => {
                self.navigate(route);
                Vec::new()
            }
            Message::Back => {
                if self.history.len() > 1 {
                    self.history.pop();
                }
                Vec::new()
            }
            Message::Calculate(CalculateMessage::CalculatePressed) => self.calculate(),
            Message::Calculate(CalculateMessage::FetchCapacitiesPressed) => {
                if self.calculate_screen.is_fetching() {
                    info!("Capacity fetch already in progress");
                    return Vec::new();
                }
                self.calculate_screen.set_fetching();
                vec![Effect::FetchCapacities]
            }
            Message::Calculate(message) => {
                self.calculate_screen.update(message);
                Vec::new()
            }
            Message::CapacitiesResolved(resolution) => {
                if resolution.is_fallback() {
                    warn!("Capacity fetch failed. {:?}", resolution.origin());
                }
                let notification = resolution.notification();
                self.calculate_screen.apply_capacities(resolution);
                vec![Effect::Notify(notification)]
            }
            Message::Stations(StationsMessage::SeekPressed) => self.seek(),
            Message::Stations(message) => {
                self.stations_screen.update(message);
                Vec::new()
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == Route::Home {
            self.history.truncate(1);
            return;
        }
        if *self.route() != route {
            self.history.push(route);
        }
    }

    fn calculate(&mut self) -> Vec<Effect> {
        let span = span!(Level::INFO, "Calculating range");
        let _enter = span.enter();

        let mut effects = Vec::new();
        let input = self.calculate_screen.range_input();
        if is_positive_finite(input.weight_kg()) {
            if let Err(e) = self.app_data.remember_weight(input.weight_kg()) {
                error!("Failed to save weight. {}", e.to_string());
                effects.push(Effect::Notify(format!("Could not remember weight. {}", e)));
            }
        }
        let estimate = RangeEstimate::calculate(input);
        info!("{}", estimate);
        self.navigate(Route::Result(estimate));
        effects
    }

    fn seek(&mut self) -> Vec<Effect> {
        let query = self.stations_screen.query();
        if query.location().is_empty() {
            return vec![Effect::Notify(String::from("Please enter a location"))];
        }
        let mut effects = Vec::new();
        if let Err(e) = self.app_data.remember_location(query.location()) {
            error!("Failed to save location. {}", e.to_string());
            effects.push(Effect::Notify(format!("Could not remember location. {}", e)));
        }
        info!("Searching for '{}'", query);
        effects.push(Effect::OpenMap(query));
        effects
    }

    pub fn view(&self) -> String {
        match self.route() {
            Route::Home => self.calculate_screen.view(&self.app_data),
            Route::Info => self.info_screen.view(&self.app_data),
            Route::Map => self.stations_screen.view(&self.app_data),
            Route::Result(estimate) => ResultScreen::new(Some(*estimate)).view(&self.app_data)
        }
    }
}

trait Screen {
    fn title(&self) -> String;

    fn view(&self, app_data: &ApplicationData) -> String {
        format!("=== {} | {} ===\n{}", APP_NAME, self.title(), self.content(app_data))
    }

    fn content(&self, app_data: &ApplicationData) -> String;
}
