mod install;
mod list;

pub use install::*;
pub use list::*;
