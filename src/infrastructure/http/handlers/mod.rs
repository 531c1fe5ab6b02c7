//! HTTP Handlers

mod library;
mod ping;
mod remote;

pub use library::*;
pub use ping::*;
pub use remote::*;
