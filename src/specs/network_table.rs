// src/specs/network_table.rs
//
// Full rows of the networks table. Each <td> is classified by its attributes:
//   align            → name (has the gray "btn" link) or type; value is the cell text
//   alt="<label>"    → a statistic column; value is the cell's sort value
//   class="{sortValue: N}" (no alt) → zip size
//   anything else    → download link (first <a> href)

use log::{debug, trace};
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{
    BROKEN_DOWNLOADS, LINK_SELECTOR, NAME_BUTTON_CLASS, NO_VALUE, PAGE_LINK_SUFFIX, SORT_VALUE_TOKEN,
    TABLE_BODY_SELECTOR,
};
use crate::core::html::{children_named, selector, text_of};
use crate::core::sanitize::{cell_text, sort_value};
use crate::error::{Result, RowError, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Type,
    Nodes,
    Edges,
    MaxDegree,
    AvgDegree,
    Assortativity,
    TotalTriangles,
    AvgTriangles,
    MaxTriangles,
    AvgClusteringCoef,
    FracClosedTriangles,
    MaxKCore,
    MaxCliqueSizeLb,
    ZipSize,
    DownloadUrl,
}

use Column::*;

impl Column {
    pub const ALL: [Column; 16] = [
        Name, Type, Nodes, Edges, MaxDegree, AvgDegree, Assortativity, TotalTriangles,
        AvgTriangles, MaxTriangles, AvgClusteringCoef, FracClosedTriangles, MaxKCore,
        MaxCliqueSizeLb, ZipSize, DownloadUrl,
    ];

    /// Header key used in exports.
    pub fn key(self) -> &'static str {
        match self {
            Name => "name",
            Type => "type",
            Nodes => "nodes",
            Edges => "edges",
            MaxDegree => "max_degree",
            AvgDegree => "avg_degree",
            Assortativity => "assortativity",
            TotalTriangles => "total_triangles",
            AvgTriangles => "avg_triangles",
            MaxTriangles => "max_triangles",
            AvgClusteringCoef => "avg_clustering_coef",
            FracClosedTriangles => "frac_closed_triangles",
            MaxKCore => "max_k_core",
            MaxCliqueSizeLb => "max_clique_size_lb",
            ZipSize => "zip_size",
            DownloadUrl => "download_url",
        }
    }

    /// Column for a cell's `alt` label. The clique column sometimes has an empty label.
    pub fn from_alt(label: &str) -> Option<Column> {
        Some(match label {
            "Nodes" => Nodes,
            "Edges" => Edges,
            "Maximum degree" => MaxDegree,
            "Average degree" => AvgDegree,
            "Assortativity" => Assortativity,
            "Total triangles" => TotalTriangles,
            "Average triangles" => AvgTriangles,
            "Maximum triangles" => MaxTriangles,
            "Avg. clustering coef." => AvgClusteringCoef,
            "Frac. closed triangles" => FracClosedTriangles,
            "Maximum k-core" => MaxKCore,
            "Max. clique (lb)" | "" => MaxCliqueSizeLb,
            _ => return None,
        })
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One table row; columns the row doesn't provide stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkRecord {
    cells: [String; 16],
}

impl NetworkRecord {
    pub fn get(&self, col: Column) -> &str {
        &self.cells[col.index()]
    }

    pub fn set(&mut self, col: Column, value: impl Into<String>) {
        self.cells[col.index()] = value.into();
    }

    pub fn download_url(&self) -> &str {
        self.get(DownloadUrl)
    }

    /// Links back to the site and known-broken archives are not downloads.
    pub fn is_usable(&self) -> bool {
        let url = self.download_url();
        !url.ends_with(PAGE_LINK_SUFFIX) && !BROKEN_DOWNLOADS.contains(&url)
    }

    /// Values in `Column::ALL` order.
    pub fn into_row(self) -> Vec<String> {
        self.cells.into()
    }
}

pub fn headers() -> Vec<String> {
    Column::ALL.iter().map(|c| s!(c.key())).collect()
}

/// Every row of the table body, unfiltered, in document order.
pub fn scrape_table(document: &Html) -> Result<Vec<NetworkRecord>> {
    let body_sel = selector(TABLE_BODY_SELECTOR)?;
    let links = selector(LINK_SELECTOR)?;

    let tbody = document
        .select(&body_sel)
        .next()
        .ok_or(ScrapeError::TableNotFound(TABLE_BODY_SELECTOR))?;

    let mut out = Vec::new();
    for (i, tr) in children_named(tbody, "tr").enumerate() {
        let record = read_row(tr, &links).map_err(|e| ScrapeError::row(i, e))?;
        trace!("row {i}: {:?}", record.get(Name));
        out.push(record);
    }

    debug!("extracted {} table rows", out.len());
    Ok(out)
}

fn read_row(
    tr: ElementRef<'_>,
    links: &Selector,
) -> std::result::Result<NetworkRecord, RowError> {
    let mut record = NetworkRecord::default();
    for td in children_named(tr, "td") {
        let (col, value) = read_cell(td, links)?;
        record.set(col, value);
    }
    Ok(record)
}

fn read_cell(
    td: ElementRef<'_>,
    links: &Selector,
) -> std::result::Result<(Column, String), RowError> {
    let el = td.value();

    if el.attr("align").is_some() {
        let col = if has_name_button(td, links) { Name } else { Type };
        return Ok((col, cell_text(&text_of(td))));
    }

    if let Some(label) = el.attr("alt") {
        let col = Column::from_alt(label)
            .ok_or_else(|| RowError::UnknownColumn(s!(label)))?;
        return Ok((col, cell_value(td)?));
    }

    let is_sort_cell = el
        .attr("class")
        .and_then(|c| c.split_ascii_whitespace().next())
        .is_some_and(|first| first == SORT_VALUE_TOKEN);
    if is_sort_cell {
        return Ok((ZipSize, cell_value(td)?));
    }

    let link = td
        .select(links)
        .next()
        .ok_or(RowError::Malformed("download cell has no link"))?;
    let href = link
        .value()
        .attr("href")
        .ok_or(RowError::MissingAttribute("href"))?;
    Ok((DownloadUrl, s!(href)))
}

/// The graph name links to its page with exactly this class string; other
/// buttons that merely share these classes don't count.
fn has_name_button(td: ElementRef<'_>, links: &Selector) -> bool {
    td.select(links)
        .any(|a| a.value().attr("class") == Some(NAME_BUTTON_CLASS))
}

/// `-` placeholders are kept; otherwise the value comes from the `{sortValue: N}` class.
fn cell_value(td: ElementRef<'_>) -> std::result::Result<String, RowError> {
    let text = cell_text(&text_of(td));
    if text == NO_VALUE {
        return Ok(text);
    }
    td.value()
        .attr("class")
        .and_then(sort_value)
        .ok_or(RowError::MissingAttribute("class"))
}
