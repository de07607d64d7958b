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


use std::result;

pub type Result<T> = result::Result<T, RangeError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("weight must be greater than 0 kg. got `{0}`")]
    InvalidWeight(f64),
    #[error("battery capacity must not be negative. got `{0}`")]
    InvalidCapacity(f64),
}
