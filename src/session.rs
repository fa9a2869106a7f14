//! Interactive session - print the listing, read a selection
//!
//! The console protocol is line-based: a numbered, score-sorted listing with
//! blank-line separators, then a prompt repeated until the user enters a
//! valid zero-based index. Both ends are generic over [`BufRead`]/[`Write`]
//! so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use crate::record::ResultRecord;

/// Display form of a score: `Display`, cut to at most 6 characters.
fn short_score(mse: f64) -> String {
    let mut text = mse.to_string();
    text.truncate(6);
    text
}

/// Print the numbered listing for `records` to `out`.
///
/// One line per record: `index : score path epoch`, surrounded by blank
/// lines, with a `Results:` header.
///
/// # Errors
///
/// Propagates write failures.
pub fn print_listing<W: Write>(out: &mut W, records: &[&ResultRecord]) -> io::Result<()> {
    writeln!(out, "Results:")?;
    writeln!(out)?;

    for (index, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{} : {} {} {}",
            index,
            short_score(record.mse()),
            record.source_path().display(),
            record.epoch()
        )?;
    }

    writeln!(out)?;
    Ok(())
}

/// Prompt on `out` and read lines from `input` until a valid index arrives.
///
/// A non-integer or out-of-range entry prints `Invalid choice` and prompts
/// again. End-of-input yields `Ok(None)`: no selection, session over.
///
/// # Errors
///
/// Propagates read and write failures; bad selections are not errors.
pub fn pick_record<'a, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    records: &[&'a ResultRecord],
) -> io::Result<Option<&'a ResultRecord>> {
    loop {
        write!(out, "Select a result: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(index) if index < records.len() => return Ok(Some(records[index])),
            _ => writeln!(out, "Invalid choice")?,
        }
    }
}
