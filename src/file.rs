// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use log::info;

use crate::config::options::InputSource;

/// Read the saved page from a file or stdin.
pub fn read_input(input: &InputSource) -> io::Result<String> {
    match input {
        InputSource::File(path) => fs::read_to_string(path),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `text` plus a final newline to `out`, or to stdout when `out` is `None`.
pub fn write_output(out: Option<&Path>, text: &str) -> io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let mut w = BufWriter::new(File::create(path)?);
            write_text(&mut w, text)?;
            w.flush()?;
            info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            write_text(&mut w, text)?;
            w.flush()
        }
    }
}

/// `text` ends with a newline afterwards, without doubling one that is already there.
pub fn write_text<W: Write>(mut w: W, text: &str) -> io::Result<()> {
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Create the directory (and parents) if missing; error if it exists but is not a directory.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        if dir.is_dir() {
            return Ok(());
        }
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        ));
    }
    fs::create_dir_all(dir)
}
