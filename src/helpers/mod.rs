//! Helper functions shared by the index builder and the client

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
