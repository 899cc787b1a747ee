//! Application layer: use cases that combine the domain with ports.

pub mod handlers;
