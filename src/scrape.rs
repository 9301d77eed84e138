// src/scrape.rs
//
// Entry points from raw page HTML to in-memory results. Callers decide where the
// HTML comes from and where the output goes (see `file`).

use log::{info, warn};

use crate::{
    config::options::{ExportFormat, PageKind},
    core::html::parse_document,
    csv,
    error::Result,
    specs::{network_table, networks::{self, ResultSet}},
};

/// Headers + rows, ready for delimited export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Downloads listing: one record per table row, in page order.
pub fn collect_downloads(html: &str) -> Result<ResultSet> {
    let doc = parse_document(html);
    let records = networks::scrape_all(&doc)?;
    if records.is_empty() {
        warn!("No rows matched the networks table; is this the networks page?");
    }
    Ok(records)
}

/// Full table, keeping only rows that point at a usable download.
pub fn collect_table(html: &str) -> Result<DataSet> {
    let doc = parse_document(html);
    let records = network_table::scrape_table(&doc)?;

    let total = records.len();
    let rows: Vec<Vec<String>> = records
        .into_iter()
        .filter(|r| r.is_usable())
        .map(|r| r.into_row())
        .collect();
    info!("Kept {} of {} table rows", rows.len(), total);

    Ok(DataSet { headers: network_table::headers(), rows })
}

/// Scrape `html` for `page` and render the text that gets written out.
pub fn scrape_to_string(html: &str, page: PageKind, format: ExportFormat) -> Result<String> {
    match page {
        PageKind::Downloads => Ok(networks::render(&collect_downloads(html)?)),
        PageKind::Table => {
            let ds = collect_table(html)?;
            Ok(csv::rows_to_string(&ds.headers, &ds.rows, format.delim()))
        }
    }
}
