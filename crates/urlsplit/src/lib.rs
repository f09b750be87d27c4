pub mod error;
pub mod logging;
pub mod url_model;

pub use error::ParseError;
pub use url_model::{parse, parse_host_and_path, parse_scheme, Url};
