//! Model Context Protocol (MCP) server implementation.
//!
//! Read-only viewer over a manifest written by `vuepact scan`, exposed to AI
//! assistants as MCP tools.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{VuePactMcpServer, run_server};
