//! TCP transport for the game service.
//!
//! The server accepts connections on a [`std::net::TcpListener`] and serves
//! each one on its own thread. Requests and responses are exchanged as
//! line-delimited JSON (see [`wire`]).

pub mod client;
pub mod server;
pub mod wire;

pub use client::Client;
pub use server::{
    DEFAULT_ACCEPT_TIMEOUT, DEFAULT_IO_TIMEOUT, DEFAULT_MAX_REQUESTS, Server, dispatch,
};
pub use wire::{ErrorCode, Request, Response};
