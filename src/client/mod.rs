//! Client-side session, transport seam, and resource accessors.

mod accessors;
mod session;
mod transport;

pub use session::{ApiResult, Error, Session};
pub use transport::{ClientConfig, HttpTransport, MockTransport, Transport, TransportError};
