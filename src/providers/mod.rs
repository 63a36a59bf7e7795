pub mod gemini;
mod gemini_types;
pub mod http_client;
mod scrub;
pub mod traits;

pub use gemini::GeminiResponder;
pub use http_client::backstop_client;
pub use traits::{RemoteAttempt, RemoteResponder};
