//! Metadata-driven linearizer.
//!
//! Walks the request JSON guided by the IDL reflection and appends typed
//! tokens in the exact order the generated processor's read calls will
//! drain them. One extra or missing token corrupts every later read, so
//! each branch here mirrors a read sequence the generated code performs.

use log::trace;
use serde_json::Value;

use crate::constants::{
    MessageType, WireType, ARGUMENTS_KEY, ELEM_TYPE_ID_KEY, ELEM_TYPE_KEY, EXCEPTIONS_KEY,
    EXCEPTION_KEY, KEY_KEY, KEY_TYPE_ID_KEY, MESSAGE_KEY, METHOD_KEY, NAME_KEY, ONEWAY_KEY,
    RESULT_KEY, RETURN_TYPE_ID_KEY, RETURN_TYPE_KEY, SUCCESS_KEY, TYPE_ID_KEY, TYPE_KEY,
    UNKNOWN_APPLICATION_EXCEPTION, VALUE_TYPE_ID_KEY, VALUE_TYPE_KEY,
};
use crate::error::ProtocolError;
use crate::json;
use crate::metadata::Metadata;
use crate::protocol::MessageIdentifier;
use crate::token::{Token, TokenQueue};

#[derive(Debug)]
pub(crate) struct LinearizeOutcome {
    pub(crate) identifier: MessageIdentifier,
    /// Body-parse failure held for the next `read_struct_begin`.
    pub(crate) deferred: Option<ProtocolError>,
}

enum Envelope<'a> {
    Call(&'a Value),
    Reply(&'a Value),
    Exception(&'a Value),
}

/// Parses the whole request body into `tokens`.
///
/// Errors returned directly (invalid envelope, undeclared REPLY exception)
/// surface from `read_message_begin`; errors found while walking a body are
/// deferred so the processor receives them from `read_struct_begin`, its
/// entry point into struct reading. An unresolvable method is not an error
/// for CALL and REPLY envelopes: the STOP sentinel is pushed and the
/// processor reports "unknown function" itself.
pub(crate) fn linearize(
    metadata: &Metadata,
    service: &str,
    request: &Value,
    tokens: &mut TokenQueue,
) -> Result<LinearizeOutcome, ProtocolError> {
    let name = json::get_str_or(request, METHOD_KEY, "").to_string();
    let method_info = metadata.method_info(service, &name);

    let envelope = if let Some(v) = request.get(ARGUMENTS_KEY) {
        Envelope::Call(v)
    } else if let Some(v) = request.get(RESULT_KEY) {
        Envelope::Reply(v)
    } else if let Some(v) = request.get(EXCEPTION_KEY) {
        Envelope::Exception(v)
    } else {
        return Err(ProtocolError::InvalidMessageType);
    };

    let oneway = method_info
        .as_ref()
        .map(|info| info.get(ONEWAY_KEY).and_then(Value::as_bool) == Some(true))
        .unwrap_or(false);
    let (message_type, sequence_number) = match envelope {
        Envelope::Call(_) if oneway => (MessageType::Oneway, 0),
        Envelope::Call(_) => (MessageType::Call, 0),
        Envelope::Reply(_) => (MessageType::Reply, 1),
        Envelope::Exception(_) => (MessageType::Exception, 1),
    };

    let mut linearizer = Linearizer { metadata, tokens };
    let deferred = match envelope {
        Envelope::Call(arguments) => match &method_info {
            Err(_) => {
                linearizer.tokens.push(Token::stop());
                None
            }
            Ok(info) => linearizer.parse_call(info, arguments).err(),
        },
        Envelope::Reply(result) => match &method_info {
            Err(_) => {
                linearizer.tokens.push(Token::stop());
                None
            }
            Ok(info) => linearizer.parse_reply(info, result)?,
        },
        Envelope::Exception(exception) => {
            linearizer.parse_exception(exception);
            None
        }
    };

    trace!(
        "linearized {service}::{name} as {message_type:?}: {} tokens",
        linearizer.tokens.len()
    );
    Ok(LinearizeOutcome {
        identifier: MessageIdentifier {
            name,
            message_type,
            sequence_number,
        },
        deferred,
    })
}

struct Linearizer<'a> {
    metadata: &'a Metadata,
    tokens: &'a mut TokenQueue,
}

impl Linearizer<'_> {
    /// CALL body: the method's synthetic arguments struct.
    fn parse_call(&mut self, info: &Value, arguments: &Value) -> Result<(), ProtocolError> {
        let fields = method_field_list(info, ARGUMENTS_KEY)?;
        self.parse_struct(fields, arguments)
    }

    /// REPLY body: empty (void), `success`, or the name of a declared
    /// exception. The outer error surfaces immediately; the inner one is
    /// deferred.
    fn parse_reply(
        &mut self,
        info: &Value,
        result: &Value,
    ) -> Result<Option<ProtocolError>, ProtocolError> {
        let Some(object) = result.as_object() else {
            return Ok(Some(ProtocolError::TypeMismatch {
                expected: "JSON object",
            }));
        };

        if let Some(success) = object.get(SUCCESS_KEY) {
            let deferred =
                match WireType::from_type_id(json::get_str_or(info, RETURN_TYPE_ID_KEY, "")) {
                    Err(e) => Some(e),
                    Ok(return_type) => {
                        self.tokens.push(Token::FieldBegin {
                            name: String::new(),
                            field_type: return_type,
                            id: 0,
                        });
                        let deferred = self
                            .parse(info, success, RETURN_TYPE_ID_KEY, RETURN_TYPE_KEY)
                            .err();
                        self.tokens.push(Token::stop());
                        deferred
                    }
                };
            return Ok(deferred);
        }

        if object.is_empty() {
            // Void return.
            self.tokens.push(Token::stop());
            return Ok(None);
        }

        // A thrown declared exception; only the first key is honored.
        let Some((err_name, err_value)) = object.iter().next() else {
            return Ok(None);
        };
        let exceptions = info
            .get(EXCEPTIONS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let Some(err_info) = json::find_by_field(exceptions, NAME_KEY, err_name) else {
            return Err(ProtocolError::InvalidResult);
        };
        self.tokens.push(Token::FieldBegin {
            name: err_name.clone(),
            field_type: WireType::Struct,
            id: json::get_i16_or(err_info, KEY_KEY, 1),
        });
        let deferred = self.parse(err_info, err_value, TYPE_ID_KEY, TYPE_KEY).err();
        self.tokens.push(Token::stop());
        Ok(deferred)
    }

    /// EXCEPTION body: by Thrift convention a two-field struct, string
    /// `message` then i32 `type`. Absent keys fall back to defaults, so
    /// this path cannot fail.
    fn parse_exception(&mut self, exception: &Value) {
        self.tokens.push(Token::FieldBegin {
            name: String::new(),
            field_type: WireType::String,
            id: 1,
        });
        self.tokens.push(Token::Str(
            json::get_str_or(exception, MESSAGE_KEY, "").to_string(),
        ));
        self.tokens.push(Token::FieldBegin {
            name: String::new(),
            field_type: WireType::I32,
            id: 2,
        });
        self.tokens.push(Token::I32(json::get_i32_or(
            exception,
            TYPE_KEY,
            UNKNOWN_APPLICATION_EXCEPTION,
        )));
        self.tokens.push(Token::stop());
    }

    /// Appends the token form of one value whose declared type sits at
    /// `field_info[type_id_key]` (composite descriptor at
    /// `field_info[type_key]`). The key pair varies with the context:
    /// `typeId`/`type` for struct fields, `returnTypeId`/`returnType` for
    /// results, the key/value/elem pairs inside containers.
    fn parse(
        &mut self,
        field_info: &Value,
        value: &Value,
        type_id_key: &str,
        type_key: &str,
    ) -> Result<(), ProtocolError> {
        let type_id = json::get_str_or(field_info, type_id_key, "");
        match type_id {
            "bool" => {
                let v = value.as_bool().ok_or(mismatch("bool"))?;
                self.tokens.push(Token::Bool(v));
                Ok(())
            }
            "i8" => {
                let n = json::number_to_i64(value).ok_or(mismatch("byte"))?;
                self.tokens.push(Token::Byte(n as i8));
                Ok(())
            }
            "i16" => {
                let n = json::number_to_i64(value).ok_or(mismatch("i16"))?;
                self.tokens.push(Token::I16(n as i16));
                Ok(())
            }
            "i32" => {
                let n = json::number_to_i64(value).ok_or(mismatch("i32"))?;
                self.tokens.push(Token::I32(n as i32));
                Ok(())
            }
            "i64" => {
                let n = json::number_to_i64(value).ok_or(mismatch("i64"))?;
                self.tokens.push(Token::I64(n));
                Ok(())
            }
            "double" => {
                let v = value.as_f64().ok_or(mismatch("double"))?;
                self.tokens.push(Token::Double(v));
                Ok(())
            }
            "string" => {
                let v = value.as_str().ok_or(mismatch("string"))?;
                self.tokens.push(Token::Str(v.to_string()));
                Ok(())
            }
            "struct" | "union" | "exception" => {
                let desc = composite_descriptor(field_info, type_key)?;
                let fields = self.metadata.struct_fields(desc)?;
                self.parse_struct(fields, value)
            }
            "map" => {
                let desc = composite_descriptor(field_info, type_key)?;
                self.parse_map(desc, value)
            }
            "set" | "list" => {
                let desc = composite_descriptor(field_info, type_key)?;
                self.parse_list(desc, value)
            }
            other => Err(ProtocolError::InvalidTypeId(other.to_string())),
        }
    }

    /// Struct body: each present key must name a declared field. Fields are
    /// emitted in the order the document provides them; the triple is
    /// self-describing, so the processor accepts any order.
    fn parse_struct(&mut self, fields: &[Value], value: &Value) -> Result<(), ProtocolError> {
        let Some(object) = value.as_object() else {
            return Err(mismatch("JSON object"));
        };
        for (key, entry) in object {
            let Some(field_info) = json::find_by_field(fields, NAME_KEY, key) else {
                return Err(ProtocolError::UnexpectedField(key.clone()));
            };
            let field_type =
                WireType::from_type_id(json::get_str_or(field_info, TYPE_ID_KEY, ""))?;
            self.tokens.push(Token::FieldBegin {
                name: key.clone(),
                field_type,
                id: json::get_i16_or(field_info, KEY_KEY, 0),
            });
            self.parse(field_info, entry, TYPE_ID_KEY, TYPE_KEY)?;
        }
        self.tokens.push(Token::stop());
        Ok(())
    }

    fn parse_map(&mut self, map_info: &Value, value: &Value) -> Result<(), ProtocolError> {
        let Some(object) = value.as_object() else {
            return Err(mismatch("map (JSON object)"));
        };
        let key_type = WireType::from_type_id(json::get_str_or(map_info, KEY_TYPE_ID_KEY, ""))?;
        let value_type =
            WireType::from_type_id(json::get_str_or(map_info, VALUE_TYPE_ID_KEY, ""))?;
        self.tokens.push(Token::MapBegin {
            key_type,
            value_type,
            size: object.len(),
        });
        for (key, entry) in object {
            self.parse_map_key(map_info, key)?;
            self.parse(map_info, entry, VALUE_TYPE_ID_KEY, VALUE_TYPE_KEY)?;
        }
        Ok(())
    }

    /// JSON object keys are strings whatever the declared IDL key type;
    /// scalar key types are coerced from the string form.
    fn parse_map_key(&mut self, map_info: &Value, key: &str) -> Result<(), ProtocolError> {
        let type_id = json::get_str_or(map_info, KEY_TYPE_ID_KEY, "");
        match type_id {
            "string" => {
                self.tokens.push(Token::Str(key.to_string()));
                Ok(())
            }
            "bool" => match key {
                "true" => {
                    self.tokens.push(Token::Bool(true));
                    Ok(())
                }
                "false" => {
                    self.tokens.push(Token::Bool(false));
                    Ok(())
                }
                _ => Err(mismatch("bool map key")),
            },
            "i8" => {
                let n = integer_key(key).ok_or(mismatch("byte map key"))?;
                self.tokens.push(Token::Byte(n as i8));
                Ok(())
            }
            "i16" => {
                let n = integer_key(key).ok_or(mismatch("i16 map key"))?;
                self.tokens.push(Token::I16(n as i16));
                Ok(())
            }
            "i32" => {
                let n = integer_key(key).ok_or(mismatch("i32 map key"))?;
                self.tokens.push(Token::I32(n as i32));
                Ok(())
            }
            "i64" => {
                let n = integer_key(key).ok_or(mismatch("i64 map key"))?;
                self.tokens.push(Token::I64(n));
                Ok(())
            }
            "double" => {
                let v: f64 = key.parse().map_err(|_| mismatch("double map key"))?;
                self.tokens.push(Token::Double(v));
                Ok(())
            }
            "struct" | "union" | "exception" | "map" | "set" | "list" => {
                Err(mismatch("scalar map key"))
            }
            other => Err(ProtocolError::InvalidTypeId(other.to_string())),
        }
    }

    fn parse_list(&mut self, list_info: &Value, value: &Value) -> Result<(), ProtocolError> {
        let Some(array) = value.as_array() else {
            return Err(mismatch("JSON array"));
        };
        let element_type =
            WireType::from_type_id(json::get_str_or(list_info, ELEM_TYPE_ID_KEY, ""))?;
        self.tokens.push(Token::ListBegin {
            element_type,
            size: array.len(),
        });
        for elem in array {
            self.parse(list_info, elem, ELEM_TYPE_ID_KEY, ELEM_TYPE_KEY)?;
        }
        Ok(())
    }
}

/// Integer map keys arrive as their decimal string form; a float form is
/// accepted and truncated like any other JSON number.
fn integer_key(key: &str) -> Option<i64> {
    key.parse::<i64>()
        .ok()
        .or_else(|| key.parse::<f64>().ok().map(|f| f as i64))
}

fn mismatch(expected: &'static str) -> ProtocolError {
    ProtocolError::TypeMismatch { expected }
}

fn composite_descriptor<'a>(
    field_info: &'a Value,
    type_key: &str,
) -> Result<&'a Value, ProtocolError> {
    field_info
        .get(type_key)
        .ok_or_else(|| ProtocolError::MetadataShape(format!("\"{type_key}\" descriptor")))
}

fn method_field_list<'a>(info: &'a Value, key: &str) -> Result<&'a [Value], ProtocolError> {
    info.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ProtocolError::MetadataShape(format!("\"{key}\" of the method descriptor")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn metadata() -> Metadata {
        Metadata::new(json!([
            {
                "name": "demo",
                "services": [
                    {
                        "name": "demo.Ledger",
                        "functions": [
                            {
                                "name": "record",
                                "oneway": false,
                                "returnTypeId": "void",
                                "arguments": [
                                    {"name": "x", "typeId": "i32", "key": 1},
                                    {"name": "y", "typeId": "string", "key": 2},
                                    {
                                        "name": "nested",
                                        "typeId": "struct",
                                        "key": 3,
                                        "type": {"typeId": "struct", "class": "demo.B"}
                                    }
                                ],
                                "exceptions": []
                            },
                            {
                                "name": "tally",
                                "oneway": false,
                                "returnTypeId": "i64",
                                "arguments": [
                                    {
                                        "name": "counts",
                                        "typeId": "map",
                                        "key": 1,
                                        "type": {
                                            "typeId": "map",
                                            "keyTypeId": "string",
                                            "valueTypeId": "i32"
                                        }
                                    }
                                ],
                                "exceptions": []
                            },
                            {
                                "name": "notify",
                                "oneway": true,
                                "returnTypeId": "void",
                                "arguments": [
                                    {"name": "text", "typeId": "string", "key": 1}
                                ],
                                "exceptions": []
                            },
                            {
                                "name": "login",
                                "oneway": false,
                                "returnTypeId": "string",
                                "arguments": [
                                    {"name": "email", "typeId": "string", "key": 1}
                                ],
                                "exceptions": [
                                    {
                                        "name": "err",
                                        "typeId": "exception",
                                        "key": 1,
                                        "type": {"typeId": "exception", "class": "demo.AuthError"}
                                    }
                                ]
                            }
                        ]
                    }
                ],
                "structs": [
                    {
                        "name": "B",
                        "fields": [{"name": "b", "typeId": "bool", "key": 1}]
                    },
                    {
                        "name": "AuthError",
                        "fields": [
                            {"name": "errorCode", "typeId": "i32", "key": 1},
                            {"name": "message", "typeId": "string", "key": 2}
                        ]
                    }
                ]
            }
        ]))
    }

    fn run(request: serde_json::Value) -> (Result<LinearizeOutcome, ProtocolError>, Vec<Token>) {
        let meta = metadata();
        let mut tokens = TokenQueue::new();
        let outcome = linearize(&meta, "Ledger", &request, &mut tokens);
        let mut drained = Vec::new();
        while let Ok(t) = pop_any(&mut tokens) {
            drained.push(t);
        }
        (outcome, drained)
    }

    // Drains tokens regardless of variant, for order assertions.
    fn pop_any(q: &mut TokenQueue) -> Result<Token, ()> {
        if let Ok((name, field_type, id)) = q.pop_field_begin() {
            return Ok(Token::FieldBegin { name, field_type, id });
        }
        if let Ok(v) = q.pop_bool() {
            return Ok(Token::Bool(v));
        }
        if let Ok(v) = q.pop_byte() {
            return Ok(Token::Byte(v));
        }
        if let Ok(v) = q.pop_i16() {
            return Ok(Token::I16(v));
        }
        if let Ok(v) = q.pop_i32() {
            return Ok(Token::I32(v));
        }
        if let Ok(v) = q.pop_i64() {
            return Ok(Token::I64(v));
        }
        if let Ok(v) = q.pop_double() {
            return Ok(Token::Double(v));
        }
        if let Ok(v) = q.pop_str() {
            return Ok(Token::Str(v));
        }
        if let Ok((key_type, value_type, size)) = q.pop_map_begin() {
            return Ok(Token::MapBegin { key_type, value_type, size });
        }
        if let Ok((element_type, size)) = q.pop_list_begin() {
            return Ok(Token::ListBegin { element_type, size });
        }
        Err(())
    }

    fn field(name: &str, field_type: WireType, id: i16) -> Token {
        Token::FieldBegin {
            name: name.into(),
            field_type,
            id,
        }
    }

    #[test]
    fn nested_struct_token_order() {
        let (outcome, tokens) = run(json!({
            "method": "record",
            "arguments": {"x": 7, "y": "hi", "nested": {"b": true}}
        }));
        let outcome = outcome.unwrap();
        assert_eq!(outcome.identifier.message_type, MessageType::Call);
        assert_eq!(outcome.identifier.sequence_number, 0);
        assert!(outcome.deferred.is_none());
        assert_eq!(
            tokens,
            vec![
                field("x", WireType::I32, 1),
                Token::I32(7),
                field("y", WireType::String, 2),
                Token::Str("hi".into()),
                field("nested", WireType::Struct, 3),
                field("b", WireType::Bool, 1),
                Token::Bool(true),
                Token::stop(),
                Token::stop(),
            ]
        );
    }

    #[test]
    fn map_emits_types_and_size_then_alternating_pairs() {
        let (outcome, tokens) = run(json!({
            "method": "tally",
            "arguments": {"counts": {"a": 1, "b": 2}}
        }));
        assert!(outcome.unwrap().deferred.is_none());
        assert_eq!(
            tokens,
            vec![
                field("counts", WireType::Map, 1),
                Token::MapBegin {
                    key_type: WireType::String,
                    value_type: WireType::I32,
                    size: 2
                },
                Token::Str("a".into()),
                Token::I32(1),
                Token::Str("b".into()),
                Token::I32(2),
                Token::stop(),
            ]
        );
    }

    #[test]
    fn oneway_overrides_call() {
        let (outcome, _) = run(json!({"method": "notify", "arguments": {"text": "hey"}}));
        let identifier = outcome.unwrap().identifier;
        assert_eq!(identifier.message_type, MessageType::Oneway);
        assert_eq!(identifier.sequence_number, 0);
    }

    #[test]
    fn unknown_method_pushes_stop_and_succeeds() {
        let (outcome, tokens) = run(json!({"method": "nope", "arguments": {"a": 1}}));
        let outcome = outcome.unwrap();
        assert_eq!(outcome.identifier.name, "nope");
        assert_eq!(outcome.identifier.message_type, MessageType::Call);
        assert!(outcome.deferred.is_none());
        assert_eq!(tokens, vec![Token::stop()]);
    }

    #[test]
    fn missing_envelope_key_is_invalid_message_type() {
        let (outcome, _) = run(json!({"method": "record", "payload": {}}));
        assert!(matches!(
            outcome.unwrap_err(),
            ProtocolError::InvalidMessageType
        ));
    }

    #[test]
    fn reply_success_wraps_return_value_in_field_zero() {
        let (outcome, tokens) = run(json!({"method": "login", "result": {"success": "tok"}}));
        let outcome = outcome.unwrap();
        assert_eq!(outcome.identifier.message_type, MessageType::Reply);
        assert_eq!(outcome.identifier.sequence_number, 1);
        assert_eq!(
            tokens,
            vec![
                field("", WireType::String, 0),
                Token::Str("tok".into()),
                Token::stop(),
            ]
        );
    }

    #[test]
    fn reply_empty_result_is_void() {
        let (_, tokens) = run(json!({"method": "record", "result": {}}));
        assert_eq!(tokens, vec![Token::stop()]);
    }

    #[test]
    fn reply_declared_exception_uses_its_field_key() {
        let (outcome, tokens) = run(json!({
            "method": "login",
            "result": {"err": {"errorCode": 401, "message": "nope"}}
        }));
        assert!(outcome.unwrap().deferred.is_none());
        assert_eq!(
            tokens,
            vec![
                field("err", WireType::Struct, 1),
                field("errorCode", WireType::I32, 1),
                Token::I32(401),
                field("message", WireType::String, 2),
                Token::Str("nope".into()),
                Token::stop(),
                Token::stop(),
            ]
        );
    }

    #[test]
    fn reply_undeclared_exception_fails_immediately() {
        let (outcome, _) = run(json!({"method": "login", "result": {"bogus": {}}}));
        assert!(matches!(outcome.unwrap_err(), ProtocolError::InvalidResult));
    }

    #[test]
    fn exception_envelope_with_defaults() {
        let (outcome, tokens) = run(json!({"method": "login", "exception": {}}));
        let outcome = outcome.unwrap();
        assert_eq!(outcome.identifier.message_type, MessageType::Exception);
        assert_eq!(outcome.identifier.sequence_number, 1);
        assert_eq!(
            tokens,
            vec![
                field("", WireType::String, 1),
                Token::Str(String::new()),
                field("", WireType::I32, 2),
                Token::I32(UNKNOWN_APPLICATION_EXCEPTION),
                Token::stop(),
            ]
        );
    }

    #[test]
    fn unexpected_field_defers() {
        let (outcome, _) = run(json!({
            "method": "record",
            "arguments": {"x": 1, "zz": 2}
        }));
        let outcome = outcome.unwrap();
        assert!(matches!(
            outcome.deferred,
            Some(ProtocolError::UnexpectedField(ref k)) if k == "zz"
        ));
    }

    #[test]
    fn scalar_type_mismatch_defers() {
        let (outcome, _) = run(json!({
            "method": "record",
            "arguments": {"x": "not a number"}
        }));
        assert!(matches!(
            outcome.unwrap().deferred,
            Some(ProtocolError::TypeMismatch { expected: "i32" })
        ));
    }

    #[test]
    fn integer_map_keys_are_coerced_from_strings() {
        let meta = Metadata::new(json!([
            {
                "name": "demo",
                "services": [{
                    "name": "demo.Ledger",
                    "functions": [{
                        "name": "scores",
                        "oneway": false,
                        "returnTypeId": "void",
                        "arguments": [{
                            "name": "byId",
                            "typeId": "map",
                            "key": 1,
                            "type": {
                                "typeId": "map",
                                "keyTypeId": "i32",
                                "valueTypeId": "string"
                            }
                        }],
                        "exceptions": []
                    }]
                }],
                "structs": []
            }
        ]));
        let mut tokens = TokenQueue::new();
        let outcome = linearize(
            &meta,
            "Ledger",
            &json!({"method": "scores", "arguments": {"byId": {"17": "ok"}}}),
            &mut tokens,
        )
        .unwrap();
        assert!(outcome.deferred.is_none());
        tokens.pop_field_begin().unwrap();
        assert_eq!(
            tokens.pop_map_begin().unwrap(),
            (WireType::I32, WireType::String, 1)
        );
        assert_eq!(tokens.pop_i32().unwrap(), 17);
        assert_eq!(tokens.pop_str().unwrap(), "ok");
    }
}
