mod go;
mod rust;

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::{self, Write},
    sync::LazyLock,
};

use regex::Regex;

use crate::{Error, LoadedFile, Result};

/// Language of the generated source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Target {
    /// Go package exposing `ReadAsset` over a `map[string]string`.
    #[default]
    Go,
    /// Rust module exposing `read_asset` over a static table.
    Rust,
}

static GO_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").expect("identifier pattern"));
static RUST_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{XID_Start}|_)\p{XID_Continue}*$").expect("identifier pattern")
});

impl Target {
    /// Checks that `package` can be declared as a package (Go) or module (Rust).
    pub fn validate_package(self, package: &str) -> Result<()> {
        let valid = match self {
            Self::Go => GO_IDENT.is_match(package) && package != "_",
            Self::Rust => RUST_IDENT.is_match(package) && package != "_",
        } && !self.keywords().contains(&package);

        if valid {
            Ok(())
        } else {
            Err(Error::PackageName(package.to_owned(), self))
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Go => go::KEYWORDS,
            Self::Rust => rust::KEYWORDS,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Go => "go",
            Self::Rust => "rust",
        })
    }
}

/// A validated request to render loaded files as source text.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    invocation: &'a str,
    package: &'a str,
    target: Target,
    entries: Vec<&'a LoadedFile>,
}

impl<'a> Source<'a> {
    /// `invocation` is the command line echoed in the header comment.
    ///
    /// Files sharing a name collapse into one entry holding the contents of
    /// the last one, placed where the name first appeared.
    pub fn new(
        invocation: &'a str,
        package: &'a str,
        target: Target,
        files: &'a [LoadedFile],
    ) -> Result<Self> {
        target.validate_package(package)?;

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<&LoadedFile> = Vec::with_capacity(files.len());
        for file in files {
            match index.entry(file.name.as_str()) {
                Entry::Occupied(slot) => entries[*slot.get()] = file,
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push(file);
                }
            }
        }

        Ok(Self {
            invocation,
            package,
            target,
            entries,
        })
    }

    /// The files that will be embedded, in output order.
    pub fn entries(&self) -> impl Iterator<Item = &'a LoadedFile> + '_ {
        self.entries.iter().copied()
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    pub fn render_into(&self, out: &mut impl Write) -> Result<()> {
        header(out, self.invocation)?;
        match self.target {
            Target::Go => go::render(out, self)?,
            Target::Rust => rust::render(out, self)?,
        }
        Ok(())
    }
}

fn header(out: &mut impl Write, invocation: &str) -> fmt::Result {
    writeln!(
        out,
        "// Code generated by \"inline {}\" -- DO NOT EDIT --",
        Comment(invocation)
    )
}

/// Comment text that cannot break out of a `//` line.
struct Comment<'a>(&'a str);

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if c.is_control() || is_bidi(c) {
                write!(f, "{}", c.escape_default())?;
            } else {
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

/// Code points that reorder the text around them when displayed.
pub(crate) fn is_bidi(c: char) -> bool {
    matches!(c, '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}
