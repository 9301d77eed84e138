// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use log::info;

use crate::config::consts::SOURCE_PAGE;
use crate::config::options::{ExportFormat, ExportOptions, InputSource, Options, PageKind};
use crate::{file, scrape};

#[derive(Parser, Debug)]
#[command(name = "netrepo_scrape", version)]
#[command(about = "Extract download links and graph sizes from a saved networks.php page")]
#[command(after_help = concat!(
    "Save the page first (e.g. from a browser), then:\n",
    "  netrepo_scrape networks.html > graphs.tsv\n",
    "  netrepo_scrape --table -o out/network_repository_table.tsv networks.html",
))]
pub struct Args {
    /// Saved HTML page; omit or use `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Export every table column instead of the zip_url/graph_order listing
    #[arg(long)]
    pub table: bool,

    /// Delimiter for --table output
    #[arg(long, value_enum, default_value_t = FormatArg::Tsv)]
    pub format: FormatArg,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Tsv,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

impl Args {
    pub fn into_options(self) -> Options {
        Options {
            page: if self.table { PageKind::Table } else { PageKind::Downloads },
            input: InputSource::from_arg(self.input.as_deref()),
            export: ExportOptions { format: self.format.into(), out: self.out },
        }
    }
}

pub fn run(opts: &Options) -> Result<()> {
    let html = file::read_input(&opts.input)
        .wrap_err_with(|| format!("reading {:?}", opts.input))?;
    info!("Read {} bytes of {SOURCE_PAGE} markup", html.len());

    let text = scrape::scrape_to_string(&html, opts.page, opts.export.format)
        .wrap_err("scraping the networks table")?;

    if opts.page == PageKind::Table {
        info!("Writing table as {}", opts.export.format.ext());
    }
    file::write_output(opts.export.out.as_deref(), &text).wrap_err("writing output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_downloads_from_stdin() {
        let opts = Args::parse_from(["netrepo_scrape"]).into_options();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn table_csv_to_file() {
        let opts = Args::parse_from([
            "netrepo_scrape", "--table", "--format", "csv", "-o", "out/t.csv", "page.html",
        ])
        .into_options();
        assert_eq!(opts.page, PageKind::Table);
        assert_eq!(opts.input, InputSource::File(PathBuf::from("page.html")));
        assert_eq!(opts.export.format, ExportFormat::Csv);
        assert_eq!(opts.export.out, Some(PathBuf::from("out/t.csv")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["netrepo_scrape", "--format", "json"]).is_err());
    }

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("netrepo_scrape_cli_{}", name));
        let _ = std::fs::remove_dir_all(&p);
        std::fs::create_dir_all(&p).unwrap();
        p
    }

    const PAGE: &str = r#"<html><body><table id="myTable"><tbody>
<tr><td align="left"><a class="btn btn_gray_sm btn-xs" href="a.php">a,b</a></td><td align="left">misc</td><td alt="Nodes" class="{sortValue: 77}">77</td><td><a href="https://example.com/a.zip">zip</a></td></tr>
</tbody></table></body></html>"#;

    #[test]
    fn run_writes_table_csv_to_nested_path() {
        let dir = tmp_dir("table");
        let input = dir.join("networks.html");
        std::fs::write(&input, PAGE).unwrap();
        let out = dir.join("out").join("table.csv");

        let opts = Args::parse_from([
            "netrepo_scrape",
            "--table",
            "--format",
            "csv",
            "-o",
            out.to_str().unwrap(),
            input.to_str().unwrap(),
        ])
        .into_options();
        run(&opts).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let mut lines = written.lines();
        assert!(lines.next().unwrap().starts_with("name,type,nodes,edges,"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("\"a,b\",misc,77,"));
        assert!(row.ends_with(",https://example.com/a.zip"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn run_writes_downloads_listing() {
        let dir = tmp_dir("listing");
        let input = dir.join("networks.html");
        std::fs::write(&input, PAGE).unwrap();
        let out = dir.join("graphs.tsv");

        let opts = Options {
            input: InputSource::File(input),
            export: ExportOptions { out: Some(out.clone()), ..ExportOptions::default() },
            ..Options::default()
        };
        run(&opts).unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "zip_url\tgraph_order\n\nhttps://example.com/a.zip\t77\n"
        );
    }

    #[test]
    fn run_reports_unreadable_input() {
        let dir = tmp_dir("missing");
        let opts = Options {
            input: InputSource::File(dir.join("nope.html")),
            export: ExportOptions { out: Some(dir.join("never.tsv")), ..ExportOptions::default() },
            ..Options::default()
        };

        let err = run(&opts).unwrap_err();
        assert!(format!("{err}").contains("reading"));
        assert!(!dir.join("never.tsv").exists());
    }

    #[test]
    fn run_reports_scrape_failure() {
        let dir = tmp_dir("malformed");
        let input = dir.join("networks.html");
        std::fs::write(&input, "<table id=myTable><tbody><tr><td>x</td></tr></tbody></table>").unwrap();
        let opts = Options {
            input: InputSource::File(input),
            export: ExportOptions { out: Some(dir.join("never.tsv")), ..ExportOptions::default() },
            ..Options::default()
        };

        let err = run(&opts).unwrap_err();
        assert!(format!("{err}").contains("scraping"));
        assert!(err.chain().any(|cause| cause.to_string().starts_with("row 0:")));
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
