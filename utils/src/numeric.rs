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


/// Parse a user entered decimal, treating anything unparsable as 0.
///
/// Surrounding whitespace is ignored and a comma is accepted as the decimal
/// separator so that "72,5" and "72.5" read the same. Non-finite values
/// ("inf", "NaN") are also mapped to 0.
pub fn parse_decimal_or_zero(val: &str) -> f64 {
    parse_decimal(val).unwrap_or(0.0)
}

pub fn parse_decimal(val: &str) -> Option<f64> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalised = trimmed.replace(',', ".");
    match normalised.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None
    }
}

pub fn is_positive_finite(val: f64) -> bool {
    val.is_finite() && val > 0.0
}
