// propfile/src/parser.rs

//! Line-oriented parsing of whole properties documents.

use crate::entry::Entry;
use crate::error::Result;
use log::trace;
use std::io::BufRead;

/// Parse a properties document held in memory.
///
/// Entries come back in file order. Blank and malformed lines are skipped.
pub fn parse_str(content: &str) -> Vec<Entry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| classify(index, line))
        .collect()
}

/// Parse a properties document from any buffered reader, line by line.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = classify(index, &line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

fn classify(index: usize, line: &str) -> Option<Entry> {
    let entry = Entry::parse_line(line);
    if entry.is_none() {
        trace!("Dropping line {}: {:?}", index + 1, line);
    }
    entry
}

/// Render entries the way they are saved: one line per entry, each ending in `\n`.
///
/// Fails on the first entry that would not parse back as the same entry.
pub fn render(entries: &[Entry]) -> Result<String> {
    let mut output = String::new();
    for entry in entries {
        entry.validate()?;
        output.push_str(&entry.to_string());
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_preserves_order() {
        let entries = parse_str("# hello\nfoo=bar\n# second\nbaz=qux\n");
        assert_eq!(
            entries,
            vec![
                Entry::comment("hello"),
                Entry::key_value("foo", "bar"),
                Entry::comment("second"),
                Entry::key_value("baz", "qux"),
            ]
        );
    }

    #[test]
    fn test_malformed_line_dropped() {
        let entries = parse_str("justtext\nfoo=bar\n");
        assert_eq!(entries, vec![Entry::key_value("foo", "bar")]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let entries = parse_str("\n\na=1\n\n\nb=2\n\n");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_missing_final_newline() {
        let entries = parse_str("a=1\nb=2");
        assert_eq!(entries[1], Entry::key_value("b", "2"));
    }

    #[test]
    fn test_parse_reader_matches_parse_str() -> Result<()> {
        let content = "# c\r\nx=1\r\n\r\n=bad\r\ny=2\r\n";
        let from_reader = parse_reader(Cursor::new(content))?;
        assert_eq!(from_reader, parse_str(content));
        assert_eq!(from_reader.len(), 3);
        Ok(())
    }

    #[test]
    fn test_render() -> Result<()> {
        let entries = vec![Entry::comment("hello"), Entry::key_value("foo", "bar")];
        assert_eq!(render(&entries)?, "# hello\nfoo=bar\n");
        assert_eq!(render(&[])?, "");
        Ok(())
    }

    #[test]
    fn test_render_normalizes_comment_spacing() -> Result<()> {
        let entries = parse_str("#tight\nk=v\n");
        assert_eq!(render(&entries)?, "# tight\nk=v\n");
        Ok(())
    }

    #[test]
    fn test_render_rejects_multiline_comment() {
        let entries = vec![Entry::key_value("a", "1"), Entry::comment("x\ny=z")];
        assert!(matches!(
            render(&entries),
            Err(crate::error::PropertiesError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_render_rejects_unparseable_pairs() {
        assert!(render(&[Entry::key_value("a=b", "c")]).is_err());
        assert!(render(&[Entry::key_value("k", "line1\nline2")]).is_err());
        assert!(render(&[Entry::key_value("#k", "v")]).is_err());
    }
}
