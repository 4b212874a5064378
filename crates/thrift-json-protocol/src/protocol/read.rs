//! Read-side protocol façade.
//!
//! `read_message_begin` does all the work: it drains the transport, parses
//! the JSON document and linearizes it against the metadata. Every other
//! reader just pops the next token, so no call after message-begin touches
//! I/O or can block.

use std::io;
use std::sync::Arc;

use log::debug;

use crate::error::ProtocolError;
use crate::json;
use crate::metadata::Metadata;
use crate::protocol::linearize::linearize;
use crate::protocol::{
    FieldIdentifier, InputProtocol, ListIdentifier, MapIdentifier, MessageIdentifier,
};
use crate::token::TokenQueue;

/// One instance decodes one message. Single-threaded; create per
/// transport message via [`JsonProtocolFactory`](crate::JsonProtocolFactory)
/// and discard (or [`reset`](Self::reset)) when drained.
pub struct JsonInputProtocol<R: io::Read> {
    transport: R,
    metadata: Arc<Metadata>,
    service: String,
    tokens: TokenQueue,
    deferred: Option<ProtocolError>,
}

impl<R: io::Read> JsonInputProtocol<R> {
    pub fn new(transport: R, metadata: Arc<Metadata>, service: String) -> Self {
        Self {
            transport,
            metadata,
            service,
            tokens: TokenQueue::new(),
            deferred: None,
        }
    }

    /// Clears leftover tokens and any deferred error so the instance can
    /// decode another message from the same transport.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.deferred = None;
    }

    pub fn get_ref(&self) -> &R {
        &self.transport
    }

    pub fn into_inner(self) -> R {
        self.transport
    }
}

impl<R: io::Read> InputProtocol for JsonInputProtocol<R> {
    fn read_message_begin(&mut self) -> Result<MessageIdentifier, ProtocolError> {
        let mut body = Vec::new();
        self.transport.read_to_end(&mut body)?;
        let request = json::parse_document(&body)?;

        let outcome = linearize(&self.metadata, &self.service, &request, &mut self.tokens)?;
        if let Some(err) = &outcome.deferred {
            debug!(
                "deferring linearizer error for {}: {err}",
                outcome.identifier.name
            );
        }
        self.deferred = outcome.deferred;
        Ok(outcome.identifier)
    }

    fn read_message_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    /// Surfaces the deferred linearizer error, if any. Nested and
    /// subsequent struct-begins return the empty name.
    fn read_struct_begin(&mut self) -> Result<String, ProtocolError> {
        match self.deferred.take() {
            Some(err) => Err(err),
            None => Ok(String::new()),
        }
    }

    fn read_struct_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_field_begin(&mut self) -> Result<FieldIdentifier, ProtocolError> {
        let (name, field_type, id) = self.tokens.pop_field_begin()?;
        Ok(FieldIdentifier { name, field_type, id })
    }

    fn read_field_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_map_begin(&mut self) -> Result<MapIdentifier, ProtocolError> {
        let (key_type, value_type, size) = self.tokens.pop_map_begin()?;
        Ok(MapIdentifier { key_type, value_type, size })
    }

    fn read_map_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_list_begin(&mut self) -> Result<ListIdentifier, ProtocolError> {
        let (element_type, size) = self.tokens.pop_list_begin()?;
        Ok(ListIdentifier { element_type, size })
    }

    fn read_list_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_set_begin(&mut self) -> Result<ListIdentifier, ProtocolError> {
        let (element_type, size) = self.tokens.pop_list_begin()?;
        Ok(ListIdentifier { element_type, size })
    }

    fn read_set_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_bool(&mut self) -> Result<bool, ProtocolError> {
        self.tokens.pop_bool()
    }

    fn read_byte(&mut self) -> Result<i8, ProtocolError> {
        self.tokens.pop_byte()
    }

    fn read_i16(&mut self) -> Result<i16, ProtocolError> {
        self.tokens.pop_i16()
    }

    fn read_i32(&mut self) -> Result<i32, ProtocolError> {
        self.tokens.pop_i32()
    }

    fn read_i64(&mut self) -> Result<i64, ProtocolError> {
        self.tokens.pop_i64()
    }

    fn read_double(&mut self) -> Result<f64, ProtocolError> {
        self.tokens.pop_double()
    }

    fn read_string(&mut self) -> Result<String, ProtocolError> {
        self.tokens.pop_str()
    }

    /// String bytes reinterpreted verbatim; the symmetric writer applies no
    /// base64 step either.
    fn read_binary(&mut self) -> Result<Vec<u8>, ProtocolError> {
        Ok(self.read_string()?.into_bytes())
    }
}
