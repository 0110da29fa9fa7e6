use std::fmt::{self, Write};

use super::Source;

pub(super) const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

const ACCESSOR: &str = r#"import (
	"errors"
	"os"
)

// ErrAssetNotExist is returned by ReadAsset when file was not embedded.
var ErrAssetNotExist = errors.New("file doesn't exist.")

func ReadAsset(file string, useLocal bool) ([]byte, error) {
	if useLocal {
		return os.ReadFile(file)
	}
	if f, ok := files[file]; ok {
		return []byte(f), nil
	}
	return nil, ErrAssetNotExist
}
"#;

pub(super) fn render(out: &mut impl Write, source: &Source<'_>) -> fmt::Result {
    write!(out, "\npackage {}\n\n", source.package)?;
    out.write_str(ACCESSOR)?;

    out.write_str("\nvar files = map[string]string{\n")?;
    for file in source.entries() {
        writeln!(
            out,
            "\t{}: {},",
            Quoted(file.name.as_bytes()),
            Literal(&file.contents)
        )?;
    }
    out.write_str("}\n")
}

/// Go string literal for arbitrary bytes.
///
/// Raw (backquoted) when the bytes survive it unchanged, interpreted otherwise.
pub(super) struct Literal<'a>(pub &'a [u8]);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.0) {
            Ok(text) if raw_safe(text) => write!(f, "`{text}`"),
            _ => fmt::Display::fmt(&Quoted(self.0), f),
        }
    }
}

// The compiler drops '\r' from raw strings and rejects NUL and BOM anywhere.
fn raw_safe(text: &str) -> bool {
    text.chars().all(|c| match c {
        '`' | '\u{feff}' => false,
        '\n' | '\t' => true,
        c => !c.is_control(),
    })
}

/// Interpreted (double-quoted) Go string literal.
///
/// Bytes outside valid UTF-8 become `\xHH`, which Go decodes as that exact byte.
pub(super) struct Quoted<'a>(pub &'a [u8]);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for chunk in self.0.utf8_chunks() {
            for c in chunk.valid().chars() {
                match c {
                    '"' => f.write_str("\\\"")?,
                    '\\' => f.write_str("\\\\")?,
                    '\x07' => f.write_str("\\a")?,
                    '\x08' => f.write_str("\\b")?,
                    '\x0c' => f.write_str("\\f")?,
                    '\n' => f.write_str("\\n")?,
                    '\r' => f.write_str("\\r")?,
                    '\t' => f.write_str("\\t")?,
                    '\x0b' => f.write_str("\\v")?,
                    c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
                    c if c.is_control() || c == '\u{feff}' => write!(f, "\\u{:04x}", c as u32)?,
                    c => f.write_char(c)?,
                }
            }
            for byte in chunk.invalid() {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        f.write_char('"')
    }
}
