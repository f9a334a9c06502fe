pub mod middleware;
pub mod session;

pub use middleware::{security_headers_middleware, session_middleware, SessionContext};
pub use session::SessionSigner;
