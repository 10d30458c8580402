//! Lorem command handling
//!
//! Layout:
//!   token       logos lexer for the part of a command after the `lorem` prefix
//!   kinds       selector words (`p`, `list`, `ol`, ...) and what they map to
//!   request     the parsed request, the defaults table and count clamping
//!   parser      tolerant command parser
//!   vocabulary  the fixed word list
//!   generator   text synthesis from a request
//!   settings    process-wide knobs supplied by the host
//!   cursor      locating a token inside an editor line
//!   api         composition of the above

pub mod api;
pub mod cursor;
pub mod generator;
pub mod kinds;
pub mod parser;
pub mod request;
pub mod settings;
pub mod token;
pub mod vocabulary;
