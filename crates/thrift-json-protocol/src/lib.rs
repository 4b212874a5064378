//! Schema-driven Thrift protocol adapter that speaks human-readable JSON.
//!
//! A code-generated Thrift processor drives a protocol through a fixed
//! sequence of typed read calls (`read_message_begin`, `read_struct_begin`,
//! `read_field_begin`, `read_i32`, …). This crate implements that interface
//! over JSON documents instead of Thrift's binary encodings: the request
//! body plus an IDL-reflection metadata document are linearized up front
//! into the exact token stream the processor will drain, so every read call
//! after [`read_message_begin`](protocol::InputProtocol::read_message_begin)
//! is a non-blocking pop. The write side needs no metadata — it renders the
//! processor's disciplined call order directly as JSON.
//!
//! Request and reply envelopes:
//!
//! ```json
//! { "method": "login", "arguments": { "email": "...", "password": "..." } }
//! { "method": "login", "result": { "success": { ... } } }
//! { "method": "login", "result": { "err": { "errorCode": 401 } } }
//! { "method": "login", "exception": { "message": "...", "type": 1 } }
//! ```

mod constants;
mod error;
pub mod json;
mod metadata;
pub mod protocol;
mod token;

pub use constants::{
    MessageType, ProtocolExceptionKind, WireType, UNKNOWN_APPLICATION_EXCEPTION,
};
pub use error::ProtocolError;
pub use metadata::Metadata;
pub use protocol::{
    FieldIdentifier, InputProtocol, JsonInputProtocol, JsonOutputProtocol, JsonProtocolFactory,
    ListIdentifier, MapIdentifier, MessageIdentifier, OutputProtocol,
};
