//! Primitive types and functions for the rendezvous tracker HTTP protocol.
//!
//! Peers talk to the tracker with JSON over HTTP. There are two requests:
//!
//! - `POST /peers`: announce. The body is a peer record and the response
//!   contains the whole swarm of that peer.
//! - `GET /peers`: list. The response contains every swarm.
//!
//! Peer records on the wire never contain the time the tracker last saw the
//! peer.
pub mod v1;
