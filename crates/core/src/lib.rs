mod assembler;
mod descriptor;
mod env;
mod error;
mod helpers;
mod layout;
mod proxy;
mod variant;
mod writer;

pub use assembler::*;
pub use descriptor::*;
pub use env::*;
pub use error::*;
pub use helpers::*;
pub use layout::*;
pub use proxy::*;
pub use starbase_styles::color;
pub use variant::*;
pub use writer::*;
