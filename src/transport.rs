//! Network transport to the generative endpoint.
//!
//! The endpoint is treated as a black box that turns a prompt into text;
//! everything above this module works with typed readings and never sees
//! HTTP. Implementation details live in `src/transport/`.

mod http;

pub use http::HttpTransport;
