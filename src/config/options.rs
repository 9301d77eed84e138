// src/config/options.rs
use std::path::{ Path, PathBuf };

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub page: PageKind,
    pub input: InputSource,
    pub export: ExportOptions,
}

/// What to pull out of the networks table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    /// `zip_url` + `graph_order` listing.
    #[default]
    Downloads,
    /// Every known column, filtered to usable downloads.
    Table,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, like most text tools.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => InputSource::Stdin,
            Some(p) if p.as_os_str() == "-" => InputSource::Stdin,
            Some(p) => InputSource::File(p.to_path_buf()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Tsv,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// `None` writes to stdout.
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_missing_input_mean_stdin() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("networks.html"))),
            InputSource::File(PathBuf::from("networks.html"))
        );
    }

    #[test]
    fn defaults_are_downloads_listing_as_tsv_on_stdout() {
        let opts = Options::default();
        assert_eq!(opts.page, PageKind::Downloads);
        assert_eq!(opts.export.format.delim(), '\t');
        assert_eq!(opts.export.format.ext(), "tsv");
        assert!(opts.export.out.is_none());
    }
}
