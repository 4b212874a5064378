//! Typed token stream between the linearizer and the reader façade.
//!
//! The protocol interface is pull-based, so the parser runs ahead of the
//! processor and leaves behind the exact value sequence the processor's
//! read calls will drain. Structural begin calls carry their whole tuple in
//! one token; every reader call pops exactly one token and pattern-matches
//! it instead of downcasting.

use std::collections::VecDeque;

use crate::constants::WireType;
use crate::error::ProtocolError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    FieldBegin {
        name: String,
        field_type: WireType,
        id: i16,
    },
    MapBegin {
        key_type: WireType,
        value_type: WireType,
        size: usize,
    },
    /// Shared by lists and sets; both read back as (element type, size).
    ListBegin {
        element_type: WireType,
        size: usize,
    },
    Bool(bool),
    Byte(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
    Str(String),
}

impl Token {
    /// The STOP sentinel triple `("", Stop, -1)` terminating a struct.
    pub(crate) fn stop() -> Self {
        Token::FieldBegin {
            name: String::new(),
            field_type: WireType::Stop,
            id: -1,
        }
    }
}

/// Single-producer/single-consumer token buffer: the linearizer appends at
/// the back, the reader façade pops from the front.
#[derive(Debug, Default)]
pub(crate) struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn clear(&mut self) {
        self.tokens.clear();
    }

    pub(crate) fn pop_field_begin(&mut self) -> Result<(String, WireType, i16), ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::FieldBegin { name, field_type, id }) => Ok((name, field_type, id)),
            other => self.put_back(other, "field-begin"),
        }
    }

    pub(crate) fn pop_map_begin(&mut self) -> Result<(WireType, WireType, usize), ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::MapBegin { key_type, value_type, size }) => {
                Ok((key_type, value_type, size))
            }
            other => self.put_back(other, "map-begin"),
        }
    }

    pub(crate) fn pop_list_begin(&mut self) -> Result<(WireType, usize), ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::ListBegin { element_type, size }) => Ok((element_type, size)),
            other => self.put_back(other, "list-begin"),
        }
    }

    pub(crate) fn pop_bool(&mut self) -> Result<bool, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::Bool(v)) => Ok(v),
            other => self.put_back(other, "bool"),
        }
    }

    pub(crate) fn pop_byte(&mut self) -> Result<i8, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::Byte(v)) => Ok(v),
            other => self.put_back(other, "byte"),
        }
    }

    pub(crate) fn pop_i16(&mut self) -> Result<i16, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::I16(v)) => Ok(v),
            other => self.put_back(other, "i16"),
        }
    }

    pub(crate) fn pop_i32(&mut self) -> Result<i32, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::I32(v)) => Ok(v),
            other => self.put_back(other, "i32"),
        }
    }

    pub(crate) fn pop_i64(&mut self) -> Result<i64, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::I64(v)) => Ok(v),
            other => self.put_back(other, "i64"),
        }
    }

    pub(crate) fn pop_double(&mut self) -> Result<f64, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::Double(v)) => Ok(v),
            other => self.put_back(other, "double"),
        }
    }

    pub(crate) fn pop_str(&mut self) -> Result<String, ProtocolError> {
        match self.tokens.pop_front() {
            Some(Token::Str(v)) => Ok(v),
            other => self.put_back(other, "string"),
        }
    }

    /// A mismatched pop leaves the queue untouched so the failure is
    /// observable without corrupting whatever state remains.
    fn put_back<T>(
        &mut self,
        token: Option<Token>,
        expected: &'static str,
    ) -> Result<T, ProtocolError> {
        if let Some(token) = token {
            self.tokens.push_front(token);
        }
        Err(out_of_sequence(expected))
    }
}

fn out_of_sequence(expected: &'static str) -> ProtocolError {
    ProtocolError::OutOfSequence { expected }
}
