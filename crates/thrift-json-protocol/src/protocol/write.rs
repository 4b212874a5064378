//! Write-side protocol façade.
//!
//! Pure pass-through to the context-stack emitter: the envelope comes from
//! `write_message_begin`, field names become object keys, and wire types
//! and ids vanish — JSON does not encode them. No metadata is consulted.

use std::io;

use crate::constants::{MessageType, ARGUMENTS_KEY, EXCEPTION_KEY, METHOD_KEY, RESULT_KEY};
use crate::error::ProtocolError;
use crate::json::emit::JsonEmitter;
use crate::protocol::{
    FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, OutputProtocol,
};

/// One instance encodes one message; output accumulates in the emitter
/// until [`flush`](OutputProtocol::flush) hands it to the transport.
pub struct JsonOutputProtocol<W: io::Write> {
    transport: W,
    emitter: JsonEmitter,
}

impl<W: io::Write> JsonOutputProtocol<W> {
    pub fn new(transport: W) -> Self {
        Self {
            transport,
            emitter: JsonEmitter::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.transport
    }

    pub fn into_inner(self) -> W {
        self.transport
    }
}

impl<W: io::Write> OutputProtocol for JsonOutputProtocol<W> {
    /// Opens the envelope: `{"method": <name>, "<kind>":` with the body to
    /// follow from the processor's struct writes.
    fn write_message_begin(
        &mut self,
        identifier: &MessageIdentifier,
    ) -> Result<(), ProtocolError> {
        self.emitter.begin_object();
        self.emitter.write_str(METHOD_KEY);
        self.emitter.write_str(&identifier.name);
        let envelope = match identifier.message_type {
            MessageType::Call | MessageType::Oneway => ARGUMENTS_KEY,
            MessageType::Reply => RESULT_KEY,
            MessageType::Exception => EXCEPTION_KEY,
        };
        self.emitter.write_str(envelope);
        Ok(())
    }

    fn write_message_end(&mut self) -> Result<(), ProtocolError> {
        self.emitter.end_object();
        Ok(())
    }

    fn write_struct_begin(&mut self, _name: &str) -> Result<(), ProtocolError> {
        self.emitter.begin_object();
        Ok(())
    }

    fn write_struct_end(&mut self) -> Result<(), ProtocolError> {
        self.emitter.end_object();
        Ok(())
    }

    fn write_field_begin(&mut self, identifier: &FieldIdentifier) -> Result<(), ProtocolError> {
        self.emitter.write_str(&identifier.name);
        Ok(())
    }

    fn write_field_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_field_stop(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_map_begin(&mut self, _identifier: &MapIdentifier) -> Result<(), ProtocolError> {
        self.emitter.begin_object();
        Ok(())
    }

    fn write_map_end(&mut self) -> Result<(), ProtocolError> {
        self.emitter.end_object();
        Ok(())
    }

    fn write_list_begin(&mut self, _identifier: &ListIdentifier) -> Result<(), ProtocolError> {
        self.emitter.begin_array();
        Ok(())
    }

    fn write_list_end(&mut self) -> Result<(), ProtocolError> {
        self.emitter.end_array();
        Ok(())
    }

    fn write_set_begin(&mut self, _identifier: &ListIdentifier) -> Result<(), ProtocolError> {
        self.emitter.begin_array();
        Ok(())
    }

    fn write_set_end(&mut self) -> Result<(), ProtocolError> {
        self.emitter.end_array();
        Ok(())
    }

    fn write_bool(&mut self, value: bool) -> Result<(), ProtocolError> {
        self.emitter.write_bool(value);
        Ok(())
    }

    fn write_byte(&mut self, value: i8) -> Result<(), ProtocolError> {
        self.emitter.write_i64(value as i64);
        Ok(())
    }

    fn write_i16(&mut self, value: i16) -> Result<(), ProtocolError> {
        self.emitter.write_i64(value as i64);
        Ok(())
    }

    fn write_i32(&mut self, value: i32) -> Result<(), ProtocolError> {
        self.emitter.write_i64(value as i64);
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> Result<(), ProtocolError> {
        self.emitter.write_i64(value);
        Ok(())
    }

    fn write_double(&mut self, value: f64) -> Result<(), ProtocolError> {
        self.emitter.write_f64(value);
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<(), ProtocolError> {
        self.emitter.write_str(value);
        Ok(())
    }

    fn write_binary(&mut self, value: &[u8]) -> Result<(), ProtocolError> {
        self.emitter.write_raw_bytes(value);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ProtocolError> {
        let bytes = self.emitter.flush();
        self.transport.write_all(&bytes)?;
        self.transport.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WireType;

    fn call(name: &str) -> MessageIdentifier {
        MessageIdentifier {
            name: name.to_string(),
            message_type: MessageType::Call,
            sequence_number: 0,
        }
    }

    fn fid(name: &str, field_type: WireType, id: i16) -> FieldIdentifier {
        FieldIdentifier {
            name: name.to_string(),
            field_type,
            id,
        }
    }

    #[test]
    fn message_envelope_carries_method_and_kind() {
        let mut out = Vec::new();
        {
            let mut p = JsonOutputProtocol::new(&mut out);
            p.write_message_begin(&call("login")).unwrap();
            p.write_struct_begin("login_args").unwrap();
            p.write_field_begin(&fid("email", WireType::String, 1)).unwrap();
            p.write_string("a@b.co").unwrap();
            p.write_field_end().unwrap();
            p.write_field_stop().unwrap();
            p.write_struct_end().unwrap();
            p.write_message_end().unwrap();
            p.flush().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"method":"login","arguments":{"email":"a@b.co"}}"#
        );
    }

    #[test]
    fn reply_and_exception_envelopes() {
        for (message_type, key) in [
            (MessageType::Reply, "result"),
            (MessageType::Exception, "exception"),
            (MessageType::Oneway, "arguments"),
        ] {
            let mut out = Vec::new();
            let mut p = JsonOutputProtocol::new(&mut out);
            p.write_message_begin(&MessageIdentifier {
                name: "m".into(),
                message_type,
                sequence_number: 1,
            })
            .unwrap();
            p.write_struct_begin("").unwrap();
            p.write_struct_end().unwrap();
            p.write_message_end().unwrap();
            p.flush().unwrap();
            assert_eq!(
                String::from_utf8(out).unwrap(),
                format!(r#"{{"method":"m","{key}":{{}}}}"#)
            );
        }
    }

    #[test]
    fn containers_and_scalars_nest() {
        let mut out = Vec::new();
        let mut p = JsonOutputProtocol::new(&mut out);
        p.write_message_begin(&call("report")).unwrap();
        p.write_struct_begin("args").unwrap();
        p.write_field_begin(&fid("ids", WireType::List, 1)).unwrap();
        p.write_list_begin(&ListIdentifier {
            element_type: WireType::I64,
            size: 2,
        })
        .unwrap();
        p.write_i64(10).unwrap();
        p.write_i64(-3).unwrap();
        p.write_list_end().unwrap();
        p.write_field_end().unwrap();
        p.write_field_begin(&fid("scores", WireType::Map, 2)).unwrap();
        p.write_map_begin(&MapIdentifier {
            key_type: WireType::I32,
            value_type: WireType::Double,
            size: 1,
        })
        .unwrap();
        p.write_i32(7).unwrap();
        p.write_double(0.5).unwrap();
        p.write_map_end().unwrap();
        p.write_field_end().unwrap();
        p.write_field_stop().unwrap();
        p.write_struct_end().unwrap();
        p.write_message_end().unwrap();
        p.flush().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"method":"report","arguments":{"ids":[10,-3],"scores":{"7":0.5}}}"#
        );
    }

    #[test]
    fn wire_types_and_ids_are_discarded() {
        let mut out = Vec::new();
        let mut p = JsonOutputProtocol::new(&mut out);
        p.write_message_begin(&call("m")).unwrap();
        p.write_struct_begin("s").unwrap();
        // Deliberately wrong type/id metadata; only the name survives.
        p.write_field_begin(&fid("n", WireType::Struct, 99)).unwrap();
        p.write_bool(true).unwrap();
        p.write_field_stop().unwrap();
        p.write_struct_end().unwrap();
        p.write_message_end().unwrap();
        p.flush().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"method":"m","arguments":{"n":true}}"#
        );
    }
}
