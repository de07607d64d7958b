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


use std::sync::Arc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::BufReader;
use tracing::info;
use capacity_source::{CapacityOption, CapacityOrigin, PageSource};
use e_range::ui::{describe_map_query, launch, settle, CalculateMessage, Effect, Message, Route, StationsMessage, UIMain};
use e_range::Result;
use range_core::RangeInput;
use utils::units::km_to_miles;

#[derive(Parser, Debug)]
#[command(name = "e-range", version, about = "Estimate how far your e-bike will take you")]
pub struct Cli {
    /// Page to fetch battery capacities from
    #[arg(long, global = true)]
    pub capacity_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the range for a weight and battery capacity
    Calculate {
        /// Rider weight in kg. Defaults to the last weight used
        #[arg(short, long)]
        weight: Option<String>,
        /// Battery capacity in Wh. Defaults to the first capacity on offer
        #[arg(short, long)]
        capacity: Option<u32>,
        /// Tour isn't flat
        #[arg(long)]
        hilly: bool,
        /// Fetch capacities from the web before calculating
        #[arg(long)]
        fetch: bool,
        /// Reject a weight or capacity that can't give a meaningful range
        #[arg(long)]
        strict: bool,
        /// Also show the range in miles
        #[arg(long)]
        miles: bool,
        #[arg(long)]
        json: bool,
    },
    /// List battery capacities fetched from the web
    Capacities {
        #[arg(long)]
        json: bool,
    },
    /// Search for charging stations near a location
    Stations {
        /// Defaults to the last location searched
        #[arg(short, long)]
        location: Option<String>,
    },
    /// About this app
    Info,
    /// Interactive mode (default)
    Interactive,
}

#[derive(Serialize)]
struct CapacityReport<'a> {
    capacities: &'a [CapacityOption],
    source: Option<&'a str>,
    fallback_reason: Option<&'a str>,
}

pub async fn run(command: Commands, mut ui: UIMain, source: Arc<dyn PageSource>) -> Result<()> {
    info!("Running {:?}", command);
    match command {
        Commands::Calculate { weight, capacity, hilly, fetch, strict, miles, json } => {
            let mut messages = vec![Message::Navigate(Route::Home)];
            if fetch {
                messages.push(Message::Calculate(CalculateMessage::FetchCapacitiesPressed));
            }
            if let Some(weight) = weight {
                messages.push(Message::Calculate(CalculateMessage::WeightChanged(weight)));
            }
            if let Some(watt_hours) = capacity {
                messages.push(Message::Calculate(CalculateMessage::CapacityEntered(watt_hours)));
            }
            messages.push(Message::Calculate(CalculateMessage::FlatTourToggled(!hilly)));
            for message in messages {
                apply(&mut ui, message, source.as_ref()).await;
            }
            if strict {
                let input = ui.calculate_screen().range_input();
                RangeInput::try_new(input.weight_kg(), input.capacity_wh(), input.is_flat())?;
            }
            apply(&mut ui, Message::Calculate(CalculateMessage::CalculatePressed), source.as_ref()).await;
            if let Route::Result(estimate) = ui.route() {
                if json {
                    println!("{}", serde_json::to_string_pretty(estimate)?);
                } else {
                    println!("{}", ui.view());
                    if miles {
                        println!("That is about {:.3} miles.", km_to_miles(estimate.distance_km()));
                    }
                }
            }
        }
        Commands::Capacities { json } => {
            apply(&mut ui, Message::Calculate(CalculateMessage::FetchCapacitiesPressed), source.as_ref()).await;
            let screen = ui.calculate_screen();
            if json {
                let (source, fallback_reason) = match screen.capacity_origin() {
                    Some(CapacityOrigin::Fetched(location)) => (Some(location.as_str()), None),
                    Some(CapacityOrigin::Fallback(reason)) => (None, Some(reason.as_str())),
                    None => (None, None)
                };
                let report = CapacityReport { capacities: screen.capacities(), source, fallback_reason };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for capacity in screen.capacities() {
                    println!("{}", capacity);
                }
            }
        }
        Commands::Stations { location } => {
            apply(&mut ui, Message::Navigate(Route::Map), source.as_ref()).await;
            if let Some(location) = location {
                apply(&mut ui, Message::Stations(StationsMessage::LocationChanged(location)), source.as_ref()).await;
            }
            apply(&mut ui, Message::Stations(StationsMessage::SeekPressed), source.as_ref()).await;
        }
        Commands::Info => {
            apply(&mut ui, Message::Navigate(Route::Info), source.as_ref()).await;
            println!("{}", ui.view());
        }
        Commands::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            launch(ui, source, input, &mut tokio::io::stdout()).await?;
        }
    }
    Ok(())
}

/// One shot commands present effects as they come. Notifications go to stderr so that
/// stdout only carries the requested output
async fn apply(ui: &mut UIMain, message: Message, source: &dyn PageSource) {
    let effects = ui.update(message);
    for effect in settle(ui, effects, source).await {
        match effect {
            Effect::OpenMap(query) => println!("{}", describe_map_query(&query)),
            Effect::Notify(text) => eprintln!("{}", text),
            Effect::FetchCapacities => {}
        }
    }
}
