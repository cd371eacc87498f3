//! Telegram [Bot API][1] types, request builders and the JSON codec that glues them together.
//!
//! The crate does no I/O. Build a method, turn it into a [`Request`], send its body with
//! whatever HTTP client you like, then feed the response body back through
//! [`Method::parse_response`], or just its `result` value through [`Method::decode_response`].
//!
//! [1]: https://core.telegram.org/bots/api

pub mod bot;
pub mod codec;
pub mod either;
pub mod error;
pub mod methods;
pub mod objects;
mod prelude;
pub mod response;

pub use crate::{
    bot::Bot,
    either::Either,
    error::Error,
    methods::{Method, Request},
    prelude::Result,
    response::Response,
};
