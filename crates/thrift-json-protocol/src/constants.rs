//! Wire-level constants: type tags, message types, exception kinds, and the
//! well-known key strings of the request envelope and the IDL-reflection
//! metadata document.

use crate::error::ProtocolError;

pub(crate) const METHOD_KEY: &str = "method";
pub(crate) const ARGUMENTS_KEY: &str = "arguments";
pub(crate) const RESULT_KEY: &str = "result";
pub(crate) const SUCCESS_KEY: &str = "success";
pub(crate) const EXCEPTION_KEY: &str = "exception";
pub(crate) const EXCEPTIONS_KEY: &str = "exceptions";
pub(crate) const MESSAGE_KEY: &str = "message";
pub(crate) const NAME_KEY: &str = "name";
pub(crate) const KEY_KEY: &str = "key";
pub(crate) const ONEWAY_KEY: &str = "oneway";
pub(crate) const SERVICES_KEY: &str = "services";
pub(crate) const FUNCTIONS_KEY: &str = "functions";
pub(crate) const STRUCTS_KEY: &str = "structs";
pub(crate) const FIELDS_KEY: &str = "fields";
pub(crate) const CLASS_KEY: &str = "class";
pub(crate) const TYPE_ID_KEY: &str = "typeId";
pub(crate) const TYPE_KEY: &str = "type";
pub(crate) const KEY_TYPE_ID_KEY: &str = "keyTypeId";
pub(crate) const VALUE_TYPE_ID_KEY: &str = "valueTypeId";
pub(crate) const VALUE_TYPE_KEY: &str = "valueType";
pub(crate) const ELEM_TYPE_ID_KEY: &str = "elemTypeId";
pub(crate) const ELEM_TYPE_KEY: &str = "elemType";
pub(crate) const RETURN_TYPE_ID_KEY: &str = "returnTypeId";
pub(crate) const RETURN_TYPE_KEY: &str = "returnType";

/// Default `exception.type` code for framework-level exceptions whose kind
/// is not known (`UNKNOWN_APPLICATION_EXCEPTION` in Thrift runtimes).
pub const UNKNOWN_APPLICATION_EXCEPTION: i32 = 0;

/// Recursion budget for [`skip`](crate::protocol::InputProtocol::skip).
pub(crate) const MAX_SKIP_DEPTH: u32 = 64;

/// Thrift wire-type tags, with their on-wire values.
///
/// `Stop` is the struct terminator; it never names a field type in the
/// metadata but appears in the STOP sentinel triple `("", Stop, -1)`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Stop = 0,
    Void = 1,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl WireType {
    /// Maps an IDL type identifier from the metadata document to its wire
    /// tag. `struct`, `union` and `exception` all travel as `Struct`.
    pub fn from_type_id(type_id: &str) -> Result<Self, ProtocolError> {
        match type_id {
            "bool" => Ok(Self::Bool),
            "i8" => Ok(Self::Byte),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "double" => Ok(Self::Double),
            "string" => Ok(Self::String),
            "struct" | "union" | "exception" => Ok(Self::Struct),
            "map" => Ok(Self::Map),
            "set" => Ok(Self::Set),
            "list" => Ok(Self::List),
            other => Err(ProtocolError::InvalidTypeId(other.to_string())),
        }
    }
}

/// Thrift message types, with their on-wire values.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Call = 1,
    Reply = 2,
    Exception = 3,
    Oneway = 4,
}

/// Classification a [`ProtocolError`] maps to when handed back to a Thrift
/// runtime as a protocol exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolExceptionKind {
    Unknown,
    InvalidData,
    InvalidMessageType,
    DepthLimit,
}
