//! Core traits for transport behavior.

mod requester;

pub use requester::{Requester, Response, check_response, decode, decode_optional};
