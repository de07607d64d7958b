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


mod cli;

use clap::Parser;
use tracing_subscriber;
use tracing_appender;
use tracing::{info};

use capacity_source::page_source_for;
use e_range::data::{get_log_dir, LOG_FILENAME};
use e_range::ui::{ApplicationData, UIMain};
use e_range::AppError;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let file_appender = tracing_appender::rolling::never(get_log_dir(), LOG_FILENAME);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
        }
    }

    let args = Cli::parse();
    let mut app_data = ApplicationData::new();
    if let Some(url) = args.capacity_url {
        info!("Capacity url overridden with {}", url);
        app_data.settings_mut().set_capacity_url(&url);
    }
    let settings = app_data.settings();
    let source = page_source_for(settings.capacity_url(),
                                 settings.user_agent(),
                                 settings.fetch_timeout());

    info!("Launching UI");
    cli::run(args.command.unwrap_or(Commands::Interactive), UIMain::new(app_data), source).await
}
