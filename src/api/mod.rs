// Doodstream API client module
//
// - auth:      API key (query parameter `key`)
// - client:    one method per remote endpoint
// - transport: single GET/POST + authentication error detection
// - query:     query string construction
// - options:   optional parameters per endpoint
// - types:     common response envelope

pub mod auth;
pub mod client;
pub mod error;
pub mod options;
mod query;
pub mod transport;
pub mod types;
