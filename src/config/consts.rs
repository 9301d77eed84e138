// src/config/consts.rs

// Source page (informational only; the page is never fetched here)
pub const SOURCE_PAGE: &str = "https://networkrepository.com/networks.php";

// Table layout
pub const TABLE_ROWS_SELECTOR: &str = "#myTable>tbody tr";
pub const TABLE_BODY_SELECTOR: &str = "table#myTable>tbody";
pub const LINK_SELECTOR: &str = "a";
pub const NAME_BUTTON_CLASS: &str = "btn btn_gray_sm btn-xs";
pub const VERTEX_COUNT_CELL: usize = 2;

/// Length of the `{sortValue: ` class prefix that precedes the vertex count,
/// e.g. `class="{sortValue: 1234}"`. Tied to the page's current markup.
pub const VERTEX_COUNT_PREFIX_LEN: usize = 12;
pub const SORT_VALUE_TOKEN: &str = "{sortValue:";
pub const NO_VALUE: &str = "-";

// Downloads listing
pub const ZIP_URL_HEADER: &str = "zip_url";
pub const GRAPH_ORDER_HEADER: &str = "graph_order";

// Table export filter
pub const BROKEN_DOWNLOADS: &[&str] = &["https://nrvis.com/./download/data/bio/bio-MUTAG_g1.zip"];
pub const PAGE_LINK_SUFFIX: &str = ".php";
