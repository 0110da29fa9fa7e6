use std::fmt::{self, Write};

use super::{Source, is_bidi};

pub(super) const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

const ACCESSOR: &str = r#"    use std::borrow::Cow;
    use std::fmt;

    /// Error returned by [`read_asset`].
    #[derive(Debug)]
    pub enum AssetError {
        /// The file was not embedded.
        NotExist,
        /// Reading the file from disk failed.
        Io(std::io::Error),
    }

    impl fmt::Display for AssetError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::NotExist => f.write_str("file doesn't exist."),
                Self::Io(err) => write!(f, "{err}"),
            }
        }
    }

    impl std::error::Error for AssetError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::NotExist => None,
                Self::Io(err) => Some(err),
            }
        }
    }

    pub fn read_asset(file: &str, use_local: bool) -> Result<Cow<'static, [u8]>, AssetError> {
        if use_local {
            return std::fs::read(file).map(Cow::Owned).map_err(AssetError::Io);
        }
        FILES
            .iter()
            .find(|(name, _)| *name == file)
            .map(|(_, contents)| Cow::Borrowed(*contents))
            .ok_or(AssetError::NotExist)
    }
"#;

pub(super) fn render(out: &mut impl Write, source: &Source<'_>) -> fmt::Result {
    writeln!(out, "\npub mod {} {{", source.package)?;
    out.write_str(ACCESSOR)?;

    out.write_str("\n    static FILES: &[(&str, &[u8])] = &[\n")?;
    for file in source.entries() {
        writeln!(out, "        ({}, {}),", Str(&file.name), Literal(&file.contents))?;
    }
    out.write_str("    ];\n}\n")
}

// Raw strings cannot be delimited by more hashes than this.
const MAX_HASHES: usize = 255;

/// Rust expression of type `&'static [u8]` for arbitrary bytes.
///
/// A raw string when the bytes are plain text, a byte string otherwise.
pub(super) struct Literal<'a>(pub &'a [u8]);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.0) {
            Ok(text) if raw_safe(text) && hashes(text) <= MAX_HASHES => {
                let hashes = "#".repeat(hashes(text));
                write!(f, "r{hashes}\"{text}\"{hashes}.as_bytes()")
            }
            _ => {
                f.write_str("b\"")?;
                for &byte in self.0 {
                    write!(f, "{}", std::ascii::escape_default(byte))?;
                }
                f.write_char('"')
            }
        }
    }
}

// Bare '\r' is rejected inside raw strings, bidi controls in any literal.
fn raw_safe(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, '\n' | '\t') || !(c.is_control() || is_bidi(c)))
}

/// Rust string literal for a lookup key.
pub(super) struct Str<'a>(pub &'a str);

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            if is_bidi(c) {
                write!(f, "{}", c.escape_unicode())?;
            } else {
                write!(f, "{}", c.escape_debug())?;
            }
        }
        f.write_char('"')
    }
}

/// Number of hashes needed so no `"#..#` in `text` closes the literal early.
pub(super) fn hashes(text: &str) -> usize {
    text.split('"')
        .skip(1)
        .map(|rest| rest.bytes().take_while(|&b| b == b'#').count() + 1)
        .max()
        .unwrap_or(0)
}
