//! The line-sequence boundary to external storage.
//!
//! The engine never touches a filesystem path: callers hand it something to
//! read lines from and something to write lines to. File handling, path
//! resolution, and atomicity concerns stay with the caller.

use std::io::{BufRead, Write};

use chrono::Local;

use crate::error::Result;
use crate::model::ConfigContent;
use crate::reader::{ReadOutcome, read_lines};
use crate::style::Style;

/// Read a configuration from a line source.
///
/// I/O faults abort the read; malformed content does not (it accumulates as
/// warnings in the outcome).
pub fn read<R: BufRead>(reader: R) -> Result<ReadOutcome> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(read_lines(lines))
}

/// Render a configuration to a line sink under the given style.
pub fn write<W: Write>(mut writer: W, content: &ConfigContent, style: &Style) -> Result<()> {
    for line in content.to_output(style) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Render a configuration, substituting the header's file-name placeholder
/// with `file_name` and its file-date placeholder with today's date.
pub fn write_named<W: Write>(
    writer: W,
    content: &ConfigContent,
    style: &Style,
    file_name: &str,
) -> Result<()> {
    match &content.header {
        Some(header) => {
            let date = Local::now().format("%Y-%m-%d").to_string();
            let mut substituted = content.clone();
            substituted.header = Some(header.substituted(file_name, &date));
            write(writer, &substituted, style)
        }
        None => write(writer, content, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigHeader, ConfigValue};
    use crate::style::{DATE_TOKEN, FILE_TOKEN};
    use std::fs::File;
    use std::io::BufReader;

    fn sample_content() -> ConfigContent {
        let mut content = ConfigContent::new();
        let server = content.section_mut("server");
        server.append(ConfigValue::new("host", "example.com"));
        server.append(ConfigValue::new("port", "8080"));
        content
    }

    #[test]
    fn write_then_read_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.ini");

        let content = sample_content();
        write(File::create(&path).unwrap(), &content, &Style::Mixed).unwrap();

        let outcome = read(BufReader::new(File::open(&path).unwrap())).unwrap();
        assert!(outcome.warnings.is_empty());
        let server = outcome.content.find("server").expect("section survives");
        assert_eq!(server.find("host").unwrap().value, "example.com");
        assert_eq!(server.find("port").unwrap().value, "8080");
    }

    #[test]
    fn write_emits_trailing_newline_per_line() {
        let mut buffer = Vec::new();
        write(&mut buffer, &sample_content(), &Style::Mixed).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn write_named_substitutes_header_placeholders() {
        let mut content = sample_content();
        content.header = Some(ConfigHeader::from_lines(vec![
            format!("# File: {FILE_TOKEN}"),
            format!("# Date: {DATE_TOKEN}"),
        ]));

        let mut buffer = Vec::new();
        write_named(&mut buffer, &content, &Style::Mixed, "app.ini").unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# File: app.ini"));
        assert!(!text.contains(FILE_TOKEN));
        assert!(!text.contains(DATE_TOKEN));
        // The original tree is untouched.
        assert!(content.header.unwrap().lines().any(|l| l.contains(FILE_TOKEN)));
    }
}
