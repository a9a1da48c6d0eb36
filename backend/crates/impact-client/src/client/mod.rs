pub(crate) mod api_error_body;
pub(crate) mod client;
pub(crate) mod error;

pub use api_error_body::ApiErrorBody;
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
