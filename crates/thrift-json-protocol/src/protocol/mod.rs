//! The protocol surface a code-generated Thrift processor drives.
//!
//! The read and write directions are separate traits and separate types:
//! [`JsonInputProtocol`] linearizes an incoming JSON document into the
//! token stream the processor's read calls expect, and
//! [`JsonOutputProtocol`] renders the processor's write calls as JSON.
//! [`JsonProtocolFactory`] shares one immutable [`Metadata`] across every
//! per-connection instance it manufactures.

mod linearize;
mod read;
mod write;

pub use read::JsonInputProtocol;
pub use write::JsonOutputProtocol;

use std::io;
use std::sync::Arc;

use crate::constants::{MessageType, WireType, MAX_SKIP_DEPTH};
use crate::error::ProtocolError;
use crate::metadata::Metadata;

/// Result of `read_message_begin` / input to `write_message_begin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageIdentifier {
    pub name: String,
    pub message_type: MessageType,
    pub sequence_number: i32,
}

/// Field-begin triple. The STOP sentinel is `("", Stop, -1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentifier {
    pub name: String,
    pub field_type: WireType,
    pub id: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapIdentifier {
    pub key_type: WireType,
    pub value_type: WireType,
    pub size: usize,
}

/// Shared by lists and sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIdentifier {
    pub element_type: WireType,
    pub size: usize,
}

/// Read half of the Thrift protocol interface.
///
/// The processor calls these in the order dictated by the generated code
/// for the method being decoded; the implementation must answer in exactly
/// that order.
pub trait InputProtocol {
    fn read_message_begin(&mut self) -> Result<MessageIdentifier, ProtocolError>;
    fn read_message_end(&mut self) -> Result<(), ProtocolError>;
    fn read_struct_begin(&mut self) -> Result<String, ProtocolError>;
    fn read_struct_end(&mut self) -> Result<(), ProtocolError>;
    fn read_field_begin(&mut self) -> Result<FieldIdentifier, ProtocolError>;
    fn read_field_end(&mut self) -> Result<(), ProtocolError>;
    fn read_map_begin(&mut self) -> Result<MapIdentifier, ProtocolError>;
    fn read_map_end(&mut self) -> Result<(), ProtocolError>;
    fn read_list_begin(&mut self) -> Result<ListIdentifier, ProtocolError>;
    fn read_list_end(&mut self) -> Result<(), ProtocolError>;
    fn read_set_begin(&mut self) -> Result<ListIdentifier, ProtocolError>;
    fn read_set_end(&mut self) -> Result<(), ProtocolError>;
    fn read_bool(&mut self) -> Result<bool, ProtocolError>;
    fn read_byte(&mut self) -> Result<i8, ProtocolError>;
    fn read_i16(&mut self) -> Result<i16, ProtocolError>;
    fn read_i32(&mut self) -> Result<i32, ProtocolError>;
    fn read_i64(&mut self) -> Result<i64, ProtocolError>;
    fn read_double(&mut self) -> Result<f64, ProtocolError>;
    fn read_string(&mut self) -> Result<String, ProtocolError>;
    fn read_binary(&mut self) -> Result<Vec<u8>, ProtocolError>;

    /// Discards one value of the given type, recursing into containers up
    /// to a fixed depth budget.
    fn skip(&mut self, field_type: WireType) -> Result<(), ProtocolError> {
        skip_depth(self, field_type, MAX_SKIP_DEPTH)
    }
}

fn skip_depth<P: InputProtocol + ?Sized>(
    protocol: &mut P,
    field_type: WireType,
    depth: u32,
) -> Result<(), ProtocolError> {
    if depth == 0 {
        return Err(ProtocolError::DepthLimit);
    }
    match field_type {
        WireType::Bool => protocol.read_bool().map(|_| ()),
        WireType::Byte => protocol.read_byte().map(|_| ()),
        WireType::I16 => protocol.read_i16().map(|_| ()),
        WireType::I32 => protocol.read_i32().map(|_| ()),
        WireType::I64 => protocol.read_i64().map(|_| ()),
        WireType::Double => protocol.read_double().map(|_| ()),
        WireType::String => protocol.read_string().map(|_| ()),
        WireType::Struct => {
            protocol.read_struct_begin()?;
            loop {
                let field = protocol.read_field_begin()?;
                if field.field_type == WireType::Stop {
                    break;
                }
                skip_depth(protocol, field.field_type, depth - 1)?;
                protocol.read_field_end()?;
            }
            protocol.read_struct_end()
        }
        WireType::Map => {
            let map = protocol.read_map_begin()?;
            for _ in 0..map.size {
                skip_depth(protocol, map.key_type, depth - 1)?;
                skip_depth(protocol, map.value_type, depth - 1)?;
            }
            protocol.read_map_end()
        }
        WireType::List => {
            let list = protocol.read_list_begin()?;
            for _ in 0..list.size {
                skip_depth(protocol, list.element_type, depth - 1)?;
            }
            protocol.read_list_end()
        }
        WireType::Set => {
            let set = protocol.read_set_begin()?;
            for _ in 0..set.size {
                skip_depth(protocol, set.element_type, depth - 1)?;
            }
            protocol.read_set_end()
        }
        WireType::Stop | WireType::Void => {
            Err(ProtocolError::InvalidTypeId(format!("{field_type:?}")))
        }
    }
}

/// Write half of the Thrift protocol interface.
pub trait OutputProtocol {
    fn write_message_begin(&mut self, identifier: &MessageIdentifier)
        -> Result<(), ProtocolError>;
    fn write_message_end(&mut self) -> Result<(), ProtocolError>;
    fn write_struct_begin(&mut self, name: &str) -> Result<(), ProtocolError>;
    fn write_struct_end(&mut self) -> Result<(), ProtocolError>;
    fn write_field_begin(&mut self, identifier: &FieldIdentifier) -> Result<(), ProtocolError>;
    fn write_field_end(&mut self) -> Result<(), ProtocolError>;
    fn write_field_stop(&mut self) -> Result<(), ProtocolError>;
    fn write_map_begin(&mut self, identifier: &MapIdentifier) -> Result<(), ProtocolError>;
    fn write_map_end(&mut self) -> Result<(), ProtocolError>;
    fn write_list_begin(&mut self, identifier: &ListIdentifier) -> Result<(), ProtocolError>;
    fn write_list_end(&mut self) -> Result<(), ProtocolError>;
    fn write_set_begin(&mut self, identifier: &ListIdentifier) -> Result<(), ProtocolError>;
    fn write_set_end(&mut self) -> Result<(), ProtocolError>;
    fn write_bool(&mut self, value: bool) -> Result<(), ProtocolError>;
    fn write_byte(&mut self, value: i8) -> Result<(), ProtocolError>;
    fn write_i16(&mut self, value: i16) -> Result<(), ProtocolError>;
    fn write_i32(&mut self, value: i32) -> Result<(), ProtocolError>;
    fn write_i64(&mut self, value: i64) -> Result<(), ProtocolError>;
    fn write_double(&mut self, value: f64) -> Result<(), ProtocolError>;
    fn write_string(&mut self, value: &str) -> Result<(), ProtocolError>;
    fn write_binary(&mut self, value: &[u8]) -> Result<(), ProtocolError>;
    fn flush(&mut self) -> Result<(), ProtocolError>;
}

/// Manufactures per-connection protocol instances over a shared metadata
/// document. Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct JsonProtocolFactory {
    metadata: Arc<Metadata>,
    service: String,
}

impl JsonProtocolFactory {
    pub fn new(metadata: Metadata, service: impl Into<String>) -> Self {
        Self {
            metadata: Arc::new(metadata),
            service: service.into(),
        }
    }

    pub fn input_protocol<R: io::Read>(&self, transport: R) -> JsonInputProtocol<R> {
        JsonInputProtocol::new(transport, Arc::clone(&self.metadata), self.service.clone())
    }

    pub fn output_protocol<W: io::Write>(&self, transport: W) -> JsonOutputProtocol<W> {
        JsonOutputProtocol::new(transport)
    }
}
