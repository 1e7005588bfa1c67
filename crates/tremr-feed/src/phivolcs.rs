//! PHIVOLCS latest-earthquake page scraper
//!
//! The agency no longer publishes a JSON API, so the feed reads the HTML
//! table on the landing page. Columns, in order:
//!
//! | 0 | 1 | 2 | 3 | 4 | 5 |
//! |---|---|---|---|---|---|
//! | date - time | latitude | longitude | depth | magnitude | location |

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tremr_core::RawEvent;

use crate::error::FeedError;
use crate::source::{FeedOutcome, FeedSource};

/// Tables with fewer rows are navigation or legend tables
pub const MIN_TABLE_ROWS: usize = 10;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MIN_COLUMNS: usize = 6;
const DEFAULT_TIME: &str = "00:00:00";

/// Scrapes the agency's latest-events table over HTTP
pub struct PhivolcsFeed {
    url: String,
    client: reqwest::Client,
}

impl PhivolcsFeed {
    pub fn new(url: impl Into<String>, accept_invalid_certs: bool) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .user_agent(concat!("tremr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_page(&self) -> Result<String, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl FeedSource for PhivolcsFeed {
    fn name(&self) -> &str {
        "phivolcs"
    }

    async fn fetch(&self) -> FeedOutcome {
        tracing::info!(url = %self.url, "fetching earthquake page");

        let html = match self.fetch_page().await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "error scraping earthquake page");
                return FeedOutcome::no_data(e.reason());
            }
        };

        match parse_event_table(&html) {
            Ok(events) if events.is_empty() => {
                tracing::warn!("no earthquake data found on page");
                FeedOutcome::no_data("No earthquake data available")
            }
            Ok(events) => {
                tracing::info!(count = events.len(), "scraped earthquakes");
                FeedOutcome::Batch(events)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to parse earthquake page");
                FeedOutcome::no_data(e.reason())
            }
        }
    }
}

/// Extract raw events from every table on the page that looks like the
/// earthquake table. Rows with too few cells are skipped.
pub fn parse_event_table(html: &str) -> Result<Vec<RawEvent>, FeedError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let header_sel = selector("th, td")?;
    let cell_sel = selector("td")?;

    let mut events = Vec::new();

    for table in document.select(&table_sel) {
        let rows: Vec<ElementRef> = table.select(&row_sel).collect();
        if rows.len() < MIN_TABLE_ROWS {
            continue;
        }

        let headers: Vec<String> = rows[0].select(&header_sel).map(cell_text).collect();
        if !looks_like_event_header(&headers) {
            continue;
        }

        for row in &rows[1..] {
            let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
            if cells.len() < MIN_COLUMNS {
                tracing::debug!(cells = cells.len(), "skipping short row");
                continue;
            }
            events.push(row_to_event(&cells));
        }
    }

    Ok(events)
}

fn selector(css: &str) -> Result<Selector, FeedError> {
    Selector::parse(css).map_err(|e| FeedError::Layout(format!("bad selector {css}: {e}")))
}

fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

fn looks_like_event_header(headers: &[String]) -> bool {
    headers.len() >= MIN_COLUMNS
        && (headers[0].contains("Date") || headers.iter().any(|h| h.contains("Latitude")))
}

fn row_to_event(cells: &[String]) -> RawEvent {
    // "29 October 2025 - 08:26 AM"
    let (date, time) = match cells[0].split_once(" - ") {
        Some((date, time)) => (date.trim().to_string(), time.trim().to_string()),
        None => (String::new(), DEFAULT_TIME.to_string()),
    };

    RawEvent {
        date: Some(date),
        time: Some(time),
        latitude: Some(cells[1].clone()),
        longitude: Some(cells[2].clone()),
        depth: Some(format!("{} kilometers", cells[3])),
        magnitude: Some(cells[4].clone()),
        location: Some(cells[5].clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_html(rows: usize) -> String {
        let mut html = String::from(
            "<table><tr><th>Date - Time (Philippine Time)</th><th>Latitude (ºN)</th>\
             <th>Longitude (ºE)</th><th>Depth (km)</th><th>Mag</th><th>Location</th></tr>",
        );
        for i in 0..rows {
            html.push_str(&format!(
                "<tr><td><a href=\"#\">{} October 2025 - 08:26 AM</a></td><td>14.6{}</td>\
                 <td>120.98</td><td>010</td><td>4.{}</td><td>  Makati City  </td></tr>",
                i + 1,
                i,
                i
            ));
        }
        html.push_str("</table>");
        html
    }

    #[test]
    fn test_parses_event_rows() {
        let html = format!("<html><body>{}</body></html>", table_html(12));
        let events = parse_event_table(&html).unwrap();
        assert_eq!(events.len(), 12);

        let first = &events[0];
        assert_eq!(first.date.as_deref(), Some("1 October 2025"));
        assert_eq!(first.time.as_deref(), Some("08:26 AM"));
        assert_eq!(first.latitude.as_deref(), Some("14.60"));
        assert_eq!(first.longitude.as_deref(), Some("120.98"));
        assert_eq!(first.depth.as_deref(), Some("010 kilometers"));
        assert_eq!(first.magnitude.as_deref(), Some("4.0"));
        assert_eq!(first.location.as_deref(), Some("Makati City"));
    }

    #[test]
    fn test_skips_small_tables() {
        let html = format!("<html><body>{}</body></html>", table_html(3));
        assert!(parse_event_table(&html).unwrap().is_empty());
    }

    #[test]
    fn test_skips_tables_without_event_header() {
        let mut html = String::from("<table><tr><td>Menu</td></tr>");
        for _ in 0..12 {
            html.push_str("<tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>f</td></tr>");
        }
        html.push_str("</table>");
        assert!(parse_event_table(&html).unwrap().is_empty());
    }

    #[test]
    fn test_datetime_without_separator() {
        let cells: Vec<String> = ["29 October 2025", "14.60", "120.98", "010", "4.5", "Makati"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let event = row_to_event(&cells);
        assert_eq!(event.date.as_deref(), Some(""));
        assert_eq!(event.time.as_deref(), Some(DEFAULT_TIME));
    }
}
