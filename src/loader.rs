use std::{io, path::Path};

/// A file read from disk, keyed by the path it was requested under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// The path exactly as it was given, used as the lookup key.
    pub name: String,
    /// Raw contents of the file.
    pub contents: Vec<u8>,
}

impl LoadedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Reads a single file.
pub fn read(path: &str) -> io::Result<LoadedFile> {
    std::fs::read(Path::new(path)).map(|contents| LoadedFile::new(path, contents))
}

/// Reads every path in order.
///
/// Files that cannot be read are reported with a warning and left out;
/// the remaining files keep their relative order.
pub fn load<I, S>(paths: I) -> Vec<LoadedFile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| {
            let path = path.as_ref();
            read(path)
                .inspect(|file| log::debug!("loaded {} ({} bytes)", path, file.contents.len()))
                .map_err(|err| log::warn!("{}: {}. Skipping.", path, err))
                .ok()
        })
        .collect()
}
