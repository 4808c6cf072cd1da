//! Gateway calls and the helpers around them.
//!
//! `gateway` builds the request documents for each supported call and runs
//! them through a `Transport`; `forms` holds the transport-free helpers.

pub mod forms;
pub mod gateway;
