pub mod user;
pub mod event;
pub mod insights;
pub mod lenient;

pub use user::*;
pub use event::*;
pub use insights::*;
