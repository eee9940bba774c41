//! HTTP request domain types

mod body;
mod cookie;
mod header;
mod method;
mod query;
mod spec;

pub use body::{Body, Part};
pub use cookie::{CookiePair, fold_cookies};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryString};
pub use spec::Request;
