use std::io::{self, Write};

use serde::Serialize;

use crate::app::RunSummary;

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn print_summary(self, summary: &RunSummary) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self {
            OutputMode::Text => writeln!(stdout, "{}", summary_line(summary)),
            OutputMode::Json => print_json(&mut stdout, summary),
        }
    }
}

pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Wrote {} unique OUIs to {} (from {} valid source rows).",
        summary.entries, summary.output, summary.source_rows
    )
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
