mod render;
mod statement;
mod util;
mod value;

pub use statement::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
