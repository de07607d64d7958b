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

pub type Result<T> = result::Result<T, CapacityError>;

#[derive(thiserror::Error, Debug)]
pub enum CapacityError {
    #[error("request failed. {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid listing pattern `{0}`. {1}")]
    InvalidPattern(String, String),
    #[error("no capacities found in `{0}`")]
    NoCapacitiesFound(String),
    #[error("page source error. {0}")]
    Source(String),
}
