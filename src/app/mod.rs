pub mod request;
pub mod session;

pub use request::{Request, Response};
pub use session::Session;
