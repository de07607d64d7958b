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
use super::Screen;
use crate::ui::data::ApplicationData;

const SEARCH_PREFIX: &str = "ebike ladestation in";
const WEB_MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, PartialEq)]
pub enum StationsMessage {
    LocationChanged(String),
    SeekPressed
}

/// A charging station search handed over to whatever map application is available
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MapQuery {
    location: String
}

impl MapQuery {
    pub fn new(location: &str) -> MapQuery {
        MapQuery { location: location.trim().to_string() }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn search_text(&self) -> String {
        format!("{} {}", SEARCH_PREFIX, self.location)
    }

    /// `geo:` URI understood by mobile map applications
    pub fn geo_uri(&self) -> String {
        format!("geo:0,0?q={}", urlencoding::encode(&self.search_text()))
    }

    pub fn web_url(&self) -> String {
        format!("{}{}", WEB_MAPS_SEARCH_URL, urlencoding::encode(&self.search_text()))
    }
}

impl Display for MapQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.search_text())
    }
}

pub struct StationsScreen {
    location: String
}

impl StationsScreen {
    pub(crate) fn new(app_data: &ApplicationData) -> Self {
        StationsScreen { location: app_data.remembered_location() }
    }

    pub fn update(&mut self, message: StationsMessage) {
        match message {
            StationsMessage::LocationChanged(location) => self.location = location,
            StationsMessage::SeekPressed => {}
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn query(&self) -> MapQuery {
        MapQuery::new(&self.location)
    }
}

impl Screen for StationsScreen {
    fn title(&self) -> String {
        String::from("Charging stations")
    }

    fn content(&self, _app_data: &ApplicationData) -> String {
        format!("Your location: {}", self.location)
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::stations::MapQuery;

    #[test]
    fn search_text() {
        assert_eq!(MapQuery::new(" Osnabrück ").search_text(), "ebike ladestation in Osnabrück");
    }

    #[test]
    fn uris_are_encoded() {
        let query = MapQuery::new("Bad Iburg");
        assert_eq!(query.geo_uri(), "geo:0,0?q=ebike%20ladestation%20in%20Bad%20Iburg");
        assert_eq!(query.web_url(),
                   "https://www.google.com/maps/search/?api=1&query=ebike%20ladestation%20in%20Bad%20Iburg");
        assert_eq!(MapQuery::new("Münster").geo_uri(), "geo:0,0?q=ebike%20ladestation%20in%20M%C3%BCnster");
    }
}
