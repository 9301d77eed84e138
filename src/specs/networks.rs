// src/specs/networks.rs

use log::debug;
use scraper::{ElementRef, Html};

use crate::config::consts::{
    GRAPH_ORDER_HEADER, TABLE_ROWS_SELECTOR, VERTEX_COUNT_CELL, VERTEX_COUNT_PREFIX_LEN,
    ZIP_URL_HEADER,
};
use crate::core::html::{last_element_child, nth_element_child, selector};
use crate::error::{Result, RowError, ScrapeError};

/// One line of the downloads listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub download_url: String,
    /// Kept as text, exactly as embedded in the page.
    pub vertex_count: String,
}

pub type ResultSet = Vec<ExtractedRecord>;

/// Extract one record per `#myTable>tbody tr`, in document order.
/// The first malformed row aborts the run.
pub fn scrape_all(document: &Html) -> Result<ResultSet> {
    let rows = selector(TABLE_ROWS_SELECTOR)?;

    let mut out = Vec::new();
    for (i, row) in document.select(&rows).enumerate() {
        let record = extract_record(row).map_err(|e| ScrapeError::row(i, e))?;
        out.push(record);
    }

    debug!("extracted {} download records", out.len());
    Ok(out)
}

fn extract_record(row: ElementRef<'_>) -> std::result::Result<ExtractedRecord, RowError> {
    Ok(ExtractedRecord {
        download_url: extract_download_url(row)?,
        vertex_count: extract_vertex_count(row)?,
    })
}

/// Vertex count embedded in the class attribute of the row's 3rd cell.
pub fn extract_vertex_count(row: ElementRef<'_>) -> std::result::Result<String, RowError> {
    let cell = nth_element_child(row, VERTEX_COUNT_CELL)
        .ok_or(RowError::Malformed("missing vertex count cell"))?;
    let class = cell
        .value()
        .attr("class")
        .ok_or(RowError::MissingAttribute("class"))?;

    Ok(vertex_count_from_class(class).to_string())
}

/// Drop the fixed prefix, then cut at the first `}`; without a `}` the rest
/// of the string is the value. If the window still opens a `{`, the count is
/// what follows the last one.
pub fn vertex_count_from_class(class: &str) -> &str {
    let rest = match class.char_indices().nth(VERTEX_COUNT_PREFIX_LEN) {
        Some((at, _)) => &class[at..],
        None => "",
    };
    let value = match rest.find('}') {
        Some(end) => &rest[..end],
        None => rest,
    };
    match value.rfind('{') {
        Some(open) => &value[open + 1..],
        None => value,
    }
}

/// `href` of the row's last element child's last element child, verbatim.
pub fn extract_download_url(row: ElementRef<'_>) -> std::result::Result<String, RowError> {
    let last = last_element_child(row).ok_or(RowError::Malformed("row has no cells"))?;
    let anchor = last_element_child(last)
        .ok_or(RowError::Malformed("last cell has no child element"))?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or(RowError::MissingAttribute("href"))?;

    Ok(href.to_string())
}

/// Header, blank line, then `url\tcount` per record. No trailing newline.
pub fn render(records: &[ExtractedRecord]) -> String {
    let mut out = format!("{ZIP_URL_HEADER}\t{GRAPH_ORDER_HEADER}\n\n");
    let lines: Vec<String> = records
        .iter()
        .map(|r| format!("{}\t{}", r.download_url, r.vertex_count))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}
