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


//! Battery capacity options for the range calculator.
//!
//! Capacities are scraped from a public e-bike battery guide when possible and fall back
//! to a fixed list otherwise. [`resolve_capacities`] never fails and never returns an
//! empty list.

pub mod error;
pub mod listing;
pub mod option;
pub mod source;

pub use error::{CapacityError, Result};
pub use listing::ListingParser;
pub use option::{CapacityOption, FALLBACK_CAPACITIES_WH, PRESET_CAPACITIES_WH};
pub use source::{page_source_for, resolve_capacities, CapacityOrigin, CapacityResolution, HttpPageSource, PageSource, UnavailablePage};
pub use source::{DEFAULT_CAPACITY_URL, DEFAULT_USER_AGENT};
