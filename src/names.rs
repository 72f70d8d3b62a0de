//! Parsing and validation of the newline-separated name blocks.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PlateError, Result};

/// Which of the two input boxes a block of names came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Fixed position entries, typically controls
    Controls,
    /// Entries that may be randomized
    Samples,
}

impl NameKind {
    /// Instructional text shown in an untouched input box
    pub fn placeholder(&self) -> &'static str {
        match self {
            NameKind::Controls => "Non randomized samples\n(Typically controls)\n\n\nDon't use dash use underscore...\n\nAll other special characters won't work!",
            NameKind::Samples => "Samples\n(Can be randomized)\n\n\nDon't use dash use underscore...\n\nAll other special characters won't work!",
        }
    }

    /// Leading phrase that identifies the placeholder, even if the user
    /// edited the rest of it
    fn placeholder_lead(&self) -> &'static str {
        match self {
            NameKind::Controls => "Non randomized samples\n(Typically controls)",
            NameKind::Samples => "Samples\n(Can be randomized)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NameKind::Controls => "controls",
            NameKind::Samples => "samples",
        }
    }
}

/// True if `name` is a single valid sample name
pub fn is_valid_name(name: &str) -> bool {
    lazy_static! {
        static ref RE_NAME: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
    }
    RE_NAME.is_match(name)
}

/// Split a block of names into individual names.
///
/// Placeholder text counts as an empty block. Blank lines carry no name and are
/// skipped. Any character other than letters, digits, underscore and newline
/// rejects the whole block.
pub fn parse_name_block(text: &str, kind: NameKind) -> Result<Vec<String>> {
    if text.starts_with(kind.placeholder_lead()) {
        debug!("Ignoring placeholder text in {}", kind.label());
        return Ok(Vec::new());
    }

    for (line_idx, line) in text.split('\n').enumerate() {
        if let Some((col_idx, c)) = line
            .chars()
            .enumerate()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(PlateError::InvalidCharacter {
                block: kind.label(),
                character: c,
                line: line_idx + 1,
                column: col_idx + 1,
            });
        }
    }

    Ok(text
        .split('\n')
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines() -> Result<()> {
        assert_eq!(parse_name_block("a_1\nb_2", NameKind::Samples)?, vec!["a_1", "b_2"]);
        assert_eq!(parse_name_block("CTRL1", NameKind::Controls)?, vec!["CTRL1"]);
        Ok(())
    }

    #[test]
    fn empty_block_has_no_names() -> Result<()> {
        assert!(parse_name_block("", NameKind::Samples)?.is_empty());
        assert!(parse_name_block("\n\n", NameKind::Controls)?.is_empty());
        Ok(())
    }

    #[test]
    fn skips_blank_lines() -> Result<()> {
        assert_eq!(parse_name_block("a\n\nb\n", NameKind::Samples)?, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn rejects_dashes_and_spaces() {
        assert_eq!(
            parse_name_block("a-1", NameKind::Samples),
            Err(PlateError::InvalidCharacter { block: "samples", character: '-', line: 1, column: 2 })
        );
        assert_eq!(
            parse_name_block("ok\nnot ok", NameKind::Controls),
            Err(PlateError::InvalidCharacter { block: "controls", character: ' ', line: 2, column: 4 })
        );
        assert!(parse_name_block("a\r\nb", NameKind::Samples).is_err());
        assert!(parse_name_block("pr\u{e4}p", NameKind::Samples).is_err());
    }

    #[test]
    fn placeholder_is_empty() -> Result<()> {
        assert!(parse_name_block(NameKind::Controls.placeholder(), NameKind::Controls)?.is_empty());
        assert!(parse_name_block(NameKind::Samples.placeholder(), NameKind::Samples)?.is_empty());
        Ok(())
    }

    #[test]
    fn placeholder_belongs_to_its_box() {
        // the sample placeholder pasted into the controls box is ordinary (invalid) text
        assert!(parse_name_block(NameKind::Samples.placeholder(), NameKind::Controls).is_err());
    }

    #[test]
    fn names_starting_like_placeholder_are_kept() -> Result<()> {
        assert_eq!(parse_name_block("Samples_01\nSamples_02", NameKind::Samples)?.len(), 2);
        Ok(())
    }

    #[test]
    fn single_names() {
        assert!(is_valid_name("CTRL_1"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("CTRL 1"));
        assert!(!is_valid_name("a\nb"));
    }
}
