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
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, warn};
use crate::error::{CapacityError, Result};
use crate::listing::ListingParser;
use crate::option::CapacityOption;

pub const DEFAULT_CAPACITY_URL: &str = "https://www.fahrrad-xxl.de/beratung/e-bike/akku/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4606.81 Safari/537.36";

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Human readable description of where pages come from. Used in logs and notifications
    fn location(&self) -> &str;

    async fn fetch_page(&self) -> Result<String>;
}

pub struct HttpPageSource {
    client: Client,
    url: String,
    user_agent: String
}

impl HttpPageSource {
    pub fn new(url: &str, user_agent: &str, timeout: Duration) -> Result<HttpPageSource> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(HttpPageSource { client, url: url.to_string(), user_agent: user_agent.to_string() })
    }

    /// As [`HttpPageSource::new`] but a `user_agent` that can't be sent as a header is swapped
    /// for [`DEFAULT_USER_AGENT`]
    pub fn with_fallback_agent(url: &str, user_agent: &str, timeout: Duration) -> Result<HttpPageSource> {
        match HttpPageSource::new(url, user_agent, timeout) {
            Ok(source) => Ok(source),
            Err(e) => {
                warn!("Can't use user agent '{}'. Using default. {}", user_agent.escape_debug(), e.to_string());
                HttpPageSource::new(url, DEFAULT_USER_AGENT, timeout)
            }
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_page(&self) -> Result<String> {
        info!("Fetching battery capacities from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // error pages are still searched for capacities
            warn!("{} returned {}", self.url, status);
        }
        Ok(response.text().await?)
    }
}

/// A page that can't be fetched at all. Capacities resolved from it are always the fallback
pub struct UnavailablePage {
    location: String,
    reason: String
}

impl UnavailablePage {
    pub fn new(location: &str, reason: String) -> UnavailablePage {
        UnavailablePage { location: location.to_string(), reason }
    }
}

#[async_trait]
impl PageSource for UnavailablePage {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_page(&self) -> Result<String> {
        Err(CapacityError::Source(self.reason.clone()))
    }
}

/// The page source for `url`. Never fails; if no HTTP client can be built the returned source
/// is an [`UnavailablePage`]
pub fn page_source_for(url: &str, user_agent: &str, timeout: Duration) -> Arc<dyn PageSource> {
    match HttpPageSource::with_fallback_agent(url, user_agent, timeout) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            error!("Failed to create http client. {}", e.to_string());
            Arc::new(UnavailablePage::new(url, format!("no http client. {}", e)))
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CapacityOrigin {
    Fetched(String),
    Fallback(String)
}

/// A usable list of capacities and where it came from
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CapacityResolution {
    options: Vec<CapacityOption>,
    origin: CapacityOrigin
}

impl CapacityResolution {
    pub fn fetched(options: Vec<CapacityOption>, location: &str) -> CapacityResolution {
        CapacityResolution { options, origin: CapacityOrigin::Fetched(location.to_string()) }
    }

    pub fn fallback(reason: String) -> CapacityResolution {
        CapacityResolution { options: CapacityOption::fallback(), origin: CapacityOrigin::Fallback(reason) }
    }

    pub fn options(&self) -> &[CapacityOption] {
        &self.options
    }

    pub fn into_options(self) -> Vec<CapacityOption> {
        self.options
    }

    pub fn origin(&self) -> &CapacityOrigin {
        &self.origin
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, CapacityOrigin::Fallback(_))
    }

    /// Short message suitable for a transient notification
    pub fn notification(&self) -> String {
        match &self.origin {
            CapacityOrigin::Fetched(_) => String::from("Capacities updated from web!"),
            CapacityOrigin::Fallback(_) => String::from("Could not fetch data. Using default capacities.")
        }
    }
}

/// Resolve the capacities on offer using `source`, falling back to
/// [`FALLBACK_CAPACITIES_WH`](crate::option::FALLBACK_CAPACITIES_WH) if the page can't be
/// fetched or contains no capacities. Only a single attempt is made.
pub async fn resolve_capacities<S: PageSource + ?Sized>(source: &S) -> CapacityResolution {
    match fetch_capacities(source).await {
        Ok(options) => {
            info!("Found {} capacities at {}", options.len(), source.location());
            CapacityResolution::fetched(options, source.location())
        }
        Err(e) => {
            warn!("Using default capacities. {}", e.to_string());
            CapacityResolution::fallback(e.to_string())
        }
    }
}

async fn fetch_capacities<S: PageSource + ?Sized>(source: &S) -> Result<Vec<CapacityOption>> {
    let page = source.fetch_page().await?;
    let parser = ListingParser::new()?;
    let options = parser.parse(&page);
    if options.is_empty() {
        return Err(CapacityError::NoCapacitiesFound(source.location().to_string()));
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::error::{CapacityError, Result};
    use crate::option::CapacityOption;
    use crate::source::{page_source_for, resolve_capacities, CapacityOrigin, HttpPageSource, PageSource, UnavailablePage, DEFAULT_USER_AGENT};

    struct StaticPage(&'static str);

    #[async_trait]
    impl PageSource for StaticPage {
        fn location(&self) -> &str {
            "static page"
        }

        async fn fetch_page(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Offline;

    #[async_trait]
    impl PageSource for Offline {
        fn location(&self) -> &str {
            "offline"
        }

        async fn fetch_page(&self) -> Result<String> {
            Err(CapacityError::Source(String::from("network unreachable")))
        }
    }

    fn watt_hours(options: &[CapacityOption]) -> Vec<u32> {
        options.iter().map(CapacityOption::watt_hours).collect()
    }

    #[tokio::test]
    async fn fetched_capacities_are_sorted_and_unique() {
        let page = StaticPage(r#"<ul class="text-list">
            <li><strong>750 Wh</strong></li>
            <li><strong>500 Wh</strong></li>
            <li><strong>625 Wh, 500 Wh</strong></li>
        </ul>"#);
        let resolution = resolve_capacities(&page).await;
        assert!(!resolution.is_fallback());
        assert_eq!(resolution.origin(), &CapacityOrigin::Fetched(String::from("static page")));
        assert_eq!(watt_hours(resolution.options()), vec![500, 625, 750]);
        assert_eq!(resolution.notification(), "Capacities updated from web!");
    }

    #[tokio::test]
    async fn failed_fetch_falls_back() {
        let resolution = resolve_capacities(&Offline).await;
        assert!(resolution.is_fallback());
        assert_eq!(watt_hours(resolution.options()), vec![500, 625, 750]);
        match resolution.origin() {
            CapacityOrigin::Fallback(reason) => assert!(reason.contains("network unreachable")),
            CapacityOrigin::Fetched(_) => panic!("expected fallback")
        }
    }

    #[tokio::test]
    async fn page_without_capacities_falls_back() {
        let resolution = resolve_capacities(&StaticPage("<html><body>Wartungsarbeiten</body></html>")).await;
        assert!(resolution.is_fallback());
        assert_eq!(watt_hours(&resolution.into_options()), vec![500, 625, 750]);
    }

    #[tokio::test]
    async fn unreachable_host_falls_back() {
        let source = HttpPageSource::new("http://127.0.0.1:9/akku/", DEFAULT_USER_AGENT, Duration::from_secs(2)).unwrap();
        let resolution = resolve_capacities(&source).await;
        assert!(resolution.is_fallback());
        assert_eq!(watt_hours(resolution.options()), vec![500, 625, 750]);
    }

    #[tokio::test]
    async fn unusable_user_agent_is_replaced() {
        assert!(HttpPageSource::new("http://127.0.0.1:9/akku/", "bad\nagent", Duration::from_secs(1)).is_err());
        let source = HttpPageSource::with_fallback_agent("http://127.0.0.1:9/akku/", "bad\nagent", Duration::from_secs(1)).unwrap();
        assert_eq!(source.user_agent(), DEFAULT_USER_AGENT);
        let source = HttpPageSource::with_fallback_agent("http://127.0.0.1:9/akku/", "e-range test", Duration::from_secs(1)).unwrap();
        assert_eq!(source.user_agent(), "e-range test");
    }

    #[tokio::test]
    async fn bad_user_agent_still_resolves() {
        let source = page_source_for("http://127.0.0.1:9/akku/", "bad\nagent", Duration::from_secs(2));
        assert_eq!(source.location(), "http://127.0.0.1:9/akku/");
        let resolution = resolve_capacities(source.as_ref()).await;
        assert!(resolution.is_fallback());
        assert_eq!(watt_hours(resolution.options()), vec![500, 625, 750]);
    }

    #[tokio::test]
    async fn unavailable_page_falls_back_with_reason() {
        let page = UnavailablePage::new("http://example.invalid/", String::from("no http client. builder error"));
        let resolution = resolve_capacities(&page).await;
        assert_eq!(resolution.origin(), &CapacityOrigin::Fallback(String::from("page source error. no http client. builder error")));
        assert_eq!(resolution.notification(), "Could not fetch data. Using default capacities.");
    }

    #[tokio::test]
    async fn works_through_trait_objects() {
        let sources: Vec<Box<dyn PageSource>> = vec![Box::new(Offline), Box::new(StaticPage(""))];
        for source in sources {
            let resolution = resolve_capacities(source.as_ref()).await;
            assert!(!resolution.options().is_empty());
        }
    }
}
