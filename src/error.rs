use thiserror::Error;

use crate::emit::Target;

#[derive(Error, Debug)]
pub enum Error {
    #[error("'{0}' is not a valid {1} package name")]
    PackageName(String, Target),
    #[error("failed to expand autogenerated code: {0}")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
