pub mod models;
pub mod requests;
pub mod validate;

pub use models::*;
pub use requests::*;
pub use validate::*;
