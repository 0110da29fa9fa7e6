//! Embeds files into generated source code as a lookup table.

pub mod emit;
mod error;
pub mod loader;

pub use emit::{Source, Target};
pub use error::{Error, Result};
pub use loader::LoadedFile;

/// Loads `paths` and renders them into source text for `target`.
///
/// Unreadable files are skipped with a warning. The package name is checked
/// before anything is read.
pub fn generate<I, S>(invocation: &str, package: &str, target: Target, paths: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    target.validate_package(package)?;
    let files = loader::load(paths);
    Source::new(invocation, package, target, &files)?.render()
}
