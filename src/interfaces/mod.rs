//! Adapters between the object model and external representations.

pub mod xml;
