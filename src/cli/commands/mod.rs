pub mod info;
pub mod run;
pub mod verify;

pub use info::*;
pub use run::*;
pub use verify::*;
