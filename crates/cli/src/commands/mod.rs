pub mod generate;
pub mod inspect;
pub mod project;
pub mod util;

pub use generate::*;
pub use inspect::*;
pub use project::*;
pub use util::*;
