//! Quiver Domain - Core request model
//!
//! This crate defines the request description and target registry for the
//! Quiver snippet generator. All types here are pure Rust with no I/O
//! dependencies.

pub mod error;
pub mod request;
pub mod target;

pub use error::{RequestError, RequestResult};
pub use request::{
    Body, CookiePair, Header, Headers, HttpMethod, Part, QueryParam, QueryString, Request,
    fold_cookies,
};
pub use target::Target;
