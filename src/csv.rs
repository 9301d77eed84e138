// src/csv.rs
//
// Delimited text for the table export. Everything is built in memory; the
// caller decides where it goes (see `file`).

/// Quote only when the field would otherwise split the row; inner quotes are doubled.
fn push_field(out: &mut String, field: &str, sep: char) {
    if field.contains([sep, '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Append one row, `\n`-terminated.
pub fn push_row(out: &mut String, row: &[String], sep: char) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        push_field(out, cell, sep);
    }
    out.push('\n');
}

/// Header row (skipped when empty) followed by every row.
pub fn rows_to_string(headers: &[String], rows: &[Vec<String>], sep: char) -> String {
    let mut out = String::new();
    if !headers.is_empty() {
        push_row(&mut out, headers, sep);
    }
    for r in rows {
        push_row(&mut out, r, sep);
    }
    out
}
