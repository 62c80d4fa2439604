//! Rendering of search results with match highlighting.
//!
//! Consumes only the read-only [`OutputInfo`]/[`Occurrence`] values the
//! engine produced: the path line (path spans in green), then one indented
//! `Line N:` per occurrence with its match spans in red.

use crate::query::types::{OutputInfo, Span};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print every result to stdout, or `nothing found` when the sequence is
/// empty. Returns how many results were printed.
pub fn print_results<I>(results: I, color: bool) -> io::Result<usize>
where
    I: IntoIterator<Item = OutputInfo>,
{
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let mut count = 0;
    for info in results {
        write_output_info(&mut stdout, &info)?;
        count += 1;
    }

    if count == 0 {
        writeln!(stdout, "nothing found")?;
    }
    Ok(count)
}

/// Write one result: path header plus its occurrences.
pub fn write_output_info<W: WriteColor>(out: &mut W, info: &OutputInfo) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "Path: ")?;
    out.reset()?;
    write_highlighted(out, &info.path, &info.path_spans, Color::Green)?;
    writeln!(out)?;

    for (line_number, occ) in &info.occurrences {
        write!(out, "\t")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
        write!(out, "Line {line_number}")?;
        out.reset()?;
        write!(out, ": ")?;
        write_highlighted(out, &occ.line, &occ.spans, Color::Red)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write `text` with each span colored and bold.
fn write_highlighted<W: WriteColor>(
    out: &mut W,
    text: &str,
    spans: &[Span],
    color: Color,
) -> io::Result<()> {
    let mut cursor = 0;
    for &(start, end) in spans {
        let start = start.min(text.len());
        let end = end.min(text.len());
        write!(out, "{}", &text[cursor..start])?;
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}", &text[start..end])?;
        out.reset()?;
        cursor = end;
    }
    write!(out, "{}", &text[cursor..])
}
