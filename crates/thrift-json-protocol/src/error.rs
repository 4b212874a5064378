//! Protocol adapter error types.

use std::io;

use crate::constants::ProtocolExceptionKind;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The request bytes do not parse as JSON, or parse to a non-object
    /// root (top-level array, scalar).
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
    /// The envelope carries none of `arguments`, `result` or `exception`.
    #[error("message has none of \"arguments\", \"result\" or \"exception\"")]
    InvalidMessageType,
    /// The metadata document does not describe the named method.
    #[error("{service}::{method} not found")]
    MethodNotFound { service: String, method: String },
    /// An IDL type identifier outside the known set.
    #[error("unknown type identifier: {0}")]
    InvalidTypeId(String),
    /// A JSON value whose kind does not match the declared IDL type.
    #[error("type mismatch: expected {expected}")]
    TypeMismatch { expected: &'static str },
    /// A struct body key with no matching field descriptor.
    #[error("unexpected field \"{0}\"")]
    UnexpectedField(String),
    /// A REPLY body whose sole non-`success` key is not a declared
    /// exception of the method.
    #[error("unable to parse result")]
    InvalidResult,
    /// The underlying transport failed (other than a clean end-of-stream).
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
    /// The reflection document lacks a key the traversal relies on. This is
    /// an inconsistency between the IDL metadata and the adapter, not a
    /// request error.
    #[error("metadata is missing {0}")]
    MetadataShape(String),
    /// A reader call that does not match the next token in the buffer, or
    /// arrives after the buffer is drained.
    #[error("read call out of sequence: expected {expected} token")]
    OutOfSequence { expected: &'static str },
    /// Recursive [`skip`](crate::protocol::InputProtocol::skip) exceeded its
    /// depth budget.
    #[error("skip depth limit exceeded")]
    DepthLimit,
}

impl ProtocolError {
    /// The protocol-exception classification a Thrift runtime expects for
    /// this error.
    pub fn kind(&self) -> ProtocolExceptionKind {
        match self {
            Self::InvalidMessageType => ProtocolExceptionKind::InvalidMessageType,
            Self::MethodNotFound { .. } | Self::Transport(_) => ProtocolExceptionKind::Unknown,
            Self::DepthLimit => ProtocolExceptionKind::DepthLimit,
            Self::InvalidJson(_)
            | Self::InvalidTypeId(_)
            | Self::TypeMismatch { .. }
            | Self::UnexpectedField(_)
            | Self::InvalidResult
            | Self::MetadataShape(_)
            | Self::OutOfSequence { .. } => ProtocolExceptionKind::InvalidData,
        }
    }
}
