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


use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{info, warn};
use capacity_source::{resolve_capacities, PageSource};
use crate::ui::{parse_command, Command, Effect, MapQuery, Message, UIMain, HELP_TEXT};

/// Carry out `effects` to completion. Capacity fetches are awaited and fed back into `ui`,
/// everything else is returned in the order it was produced for the caller to present.
pub async fn settle(ui: &mut UIMain, effects: Vec<Effect>, source: &dyn PageSource) -> Vec<Effect> {
    let mut pending: VecDeque<Effect> = effects.into();
    let mut remaining = Vec::new();
    while let Some(effect) = pending.pop_front() {
        match effect {
            Effect::FetchCapacities => {
                let resolution = resolve_capacities(source).await;
                pending.extend(ui.update(Message::CapacitiesResolved(resolution)));
            }
            other => remaining.push(other)
        }
    }
    remaining
}

/// Run the interactive front end reading commands from `input` and writing screens to `output`.
///
/// Capacity fetches run as background tasks and come back through a channel, so input keeps
/// being handled while they are in flight. Runs until the user quits, or until `input` is
/// exhausted and no fetch is outstanding. Returns the final state.
pub async fn launch<R, W>(mut ui: UIMain, source: Arc<dyn PageSource>, input: R, output: &mut W) -> io::Result<UIMain>
    where R: AsyncBufRead + Unpin,
          W: AsyncWrite + Unpin
{
    info!("Launching interactive UI");
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut lines = input.lines();
    let mut input_open = true;
    write_line(output, &format!("{}\n\n{}", ui.view(), HELP_TEXT)).await?;
    while input_open || ui.calculate_screen().is_fetching() {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let line = match line? {
                    Some(line) => line,
                    None => {
                        info!("Input closed");
                        input_open = false;
                        continue;
                    }
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => write_line(output, HELP_TEXT).await?,
                    Ok(Command::Show) => write_line(output, &ui.view()).await?,
                    Ok(Command::Dispatch(message)) => dispatch(&mut ui, message, &tx, &source, output).await?,
                    Err(e) => write_line(output, &e.to_string()).await?
                }
            }
            Some(message) = rx.recv() => dispatch(&mut ui, message, &tx, &source, output).await?
        }
    }
    info!("Interactive UI closed");
    Ok(ui)
}

async fn dispatch<W>(ui: &mut UIMain,
                     message: Message,
                     tx: &UnboundedSender<Message>,
                     source: &Arc<dyn PageSource>,
                     output: &mut W) -> io::Result<()>
    where W: AsyncWrite + Unpin
{
    for effect in ui.update(message) {
        match effect {
            Effect::FetchCapacities => spawn_fetch(tx.clone(), Arc::clone(source)),
            Effect::OpenMap(query) => write_line(output, &describe_map_query(&query)).await?,
            Effect::Notify(text) => write_line(output, &format!(">> {}", text)).await?
        }
    }
    write_line(output, &ui.view()).await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

fn spawn_fetch(tx: UnboundedSender<Message>, source: Arc<dyn PageSource>) {
    tokio::spawn(async move {
        let resolution = resolve_capacities(source.as_ref()).await;
        if tx.send(Message::CapacitiesResolved(resolution)).is_err() {
            warn!("UI closed before capacities were resolved");
        }
    });
}

pub fn describe_map_query(query: &MapQuery) -> String {
    format!("Searching for \"{}\"\n  {}\n  {}", query, query.geo_uri(), query.web_url())
}
