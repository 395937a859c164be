pub mod commit;
pub mod config;
pub mod status;
pub mod validate;

pub use commit::*;
pub use config::*;
pub use status::*;
pub use validate::*;
