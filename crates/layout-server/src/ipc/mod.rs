//! MRPC transport: service, socket server and client.

mod client;
pub(crate) mod rpc;
mod server;
mod service;

pub use client::Connection;
pub(crate) use server::IPCServer;
