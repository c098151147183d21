//! Inbound adapters that translate external requests into port calls while
//! keeping framework details at the edge.
//!
//! HTTP is the only transport; see [`http`].

pub mod http;
