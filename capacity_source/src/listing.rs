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


use itertools::Itertools;
use regex::Regex;
use scraper::{Html, Selector};
use crate::error::{CapacityError, Result};
use crate::option::CapacityOption;

/// Where the capacity figures live on the battery guide page
pub const LISTING_SELECTOR: &str = "ul.text-list li strong";
pub const CAPACITY_PATTERN: &str = r"([0-9]+)[ \x{a0}]?Wh\b";

#[derive(Debug)]
pub struct ListingParser {
    selector: Selector,
    pattern: Regex
}

impl ListingParser {
    pub fn new() -> Result<ListingParser> {
        ListingParser::with_selector(LISTING_SELECTOR)
    }

    pub fn with_selector(selector: &str) -> Result<ListingParser> {
        let selector = Selector::parse(selector).map_err(|e| {
            CapacityError::InvalidPattern(selector.to_string(), e.to_string())
        })?;
        let pattern = Regex::new(CAPACITY_PATTERN).map_err(|e| {
            CapacityError::InvalidPattern(CAPACITY_PATTERN.to_string(), e.to_string())
        })?;
        Ok(ListingParser { selector, pattern })
    }

    /// Every "<n> Wh" figure found in the selected elements of `html`, ascending and without
    /// duplicates
    pub fn parse(&self, html: &str) -> Vec<CapacityOption> {
        let document = Html::parse_document(html);
        document.select(&self.selector)
            .flat_map(|element| {
                let text = element.text().collect::<String>();
                self.capacities_in(&text)
            })
            .sorted()
            .dedup()
            .map(CapacityOption::new)
            .collect()
    }

    pub fn capacities_in(&self, text: &str) -> Vec<u32> {
        self.pattern.captures_iter(text)
            .filter_map(|capture| capture.get(1))
            .filter_map(|number| number.as_str().parse::<u32>().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::listing::ListingParser;
    use crate::option::CapacityOption;

    const GUIDE_PAGE: &str = r#"
<html><body>
  <h2>Akku</h2>
  <ul class="text-list">
    <li><strong>Bosch PowerTube 750 Wh</strong> fuer lange Touren</li>
    <li><strong>Shimano 504 Wh oder 630 Wh</strong></li>
    <li><strong>Bosch PowerPack 500 Wh</strong></li>
    <li>Ohne Angabe: <em>400 Wh</em></li>
    <li><strong>Bosch PowerTube 500 Wh</strong></li>
  </ul>
  <ul class="other-list">
    <li><strong>Yamaha 1000 Wh</strong></li>
  </ul>
</body></html>
"#;

    #[test]
    fn parses_listing() {
        let parser = ListingParser::new().unwrap();
        let found: Vec<u32> = parser.parse(GUIDE_PAGE).iter().map(CapacityOption::watt_hours).collect();
        assert_eq!(found, vec![500, 504, 630, 750]);
    }

    #[test]
    fn page_without_listing() {
        let parser = ListingParser::new().unwrap();
        assert!(parser.parse("<html><body><p>Nothing to see</p></body></html>").is_empty());
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn numeric_rather_than_text_order() {
        let parser = ListingParser::new().unwrap();
        let page = r#"<ul class="text-list"><li><strong>1250 Wh</strong></li><li><strong>625 Wh</strong></li></ul>"#;
        let found: Vec<u32> = parser.parse(page).iter().map(CapacityOption::watt_hours).collect();
        assert_eq!(found, vec![625, 1250]);
    }

    #[test]
    fn capacities_in_text() {
        let parser = ListingParser::new().unwrap();
        assert_eq!(parser.capacities_in("Akku mit 625 Wh und 750Wh"), vec![625, 750]);
        assert_eq!(parser.capacities_in("36 V, 17 Ah"), Vec::<u32>::new());
        assert_eq!(parser.capacities_in("500 Whr"), Vec::<u32>::new());
        assert_eq!(parser.capacities_in("99999999999 Wh"), Vec::<u32>::new());
    }

    #[test]
    fn number_and_unit_share_a_line() {
        let parser = ListingParser::new().unwrap();
        assert_eq!(parser.capacities_in("Akku 545\u{a0}Wh"), vec![545]);
        assert_eq!(parser.capacities_in("Modell 2024\nWh-Angabe folgt"), Vec::<u32>::new());
        assert_eq!(parser.capacities_in("400\tWh"), Vec::<u32>::new());
    }

    #[test]
    fn invalid_selector() {
        assert!(ListingParser::with_selector("ul[[").is_err());
    }
}
