use std::fs::{self, File};
use std::io::Write;

use camino::Utf8Path;
use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::domain::OuiEntry;
use crate::error::OuiError;

pub const HEADER: [&str; 2] = ["assignment", "org"];

pub fn write_output(path: &Utf8Path, entries: &[OuiEntry]) -> Result<(), OuiError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        fs::create_dir_all(parent.as_std_path())
            .map_err(|err| OuiError::Filesystem(format!("create {parent}: {err}")))?;
    }
    let file = File::create(path.as_std_path())
        .map_err(|err| OuiError::Filesystem(format!("create {path}: {err}")))?;
    write_entries(file, entries)?;
    info!(path = %path, entries = entries.len(), "wrote compact OUI table");
    Ok(())
}

/// Same bytes `write_output` puts on disk.
pub fn render_csv(entries: &[OuiEntry]) -> Result<Vec<u8>, OuiError> {
    let mut buffer = Vec::new();
    write_entries(&mut buffer, entries)?;
    Ok(buffer)
}

fn write_entries<W: Write>(sink: W, entries: &[OuiEntry]) -> Result<(), OuiError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);
    writer
        .write_record(HEADER)
        .map_err(|err| OuiError::Filesystem(err.to_string()))?;
    for entry in entries {
        writer
            .write_record([entry.assignment.as_str(), entry.org.as_str()])
            .map_err(|err| OuiError::Filesystem(err.to_string()))?;
    }
    writer
        .flush()
        .map_err(|err| OuiError::Filesystem(err.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Assignment;

    #[test]
    fn render_quotes_only_when_needed() {
        let entries = vec![
            OuiEntry::new("3C22FB".parse::<Assignment>().unwrap(), "Apple, Inc."),
            OuiEntry::new("DCA632".parse::<Assignment>().unwrap(), "Raspberry Pi Trading Ltd"),
        ];
        let rendered = String::from_utf8(render_csv(&entries).unwrap()).unwrap();
        assert_eq!(
            rendered,
            "assignment,org\n3C22FB,\"Apple, Inc.\"\nDCA632,Raspberry Pi Trading Ltd\n"
        );
    }

    #[test]
    fn render_empty_table_is_header_only() {
        let rendered = render_csv(&[]).unwrap();
        assert_eq!(rendered, b"assignment,org\n");
    }
}
