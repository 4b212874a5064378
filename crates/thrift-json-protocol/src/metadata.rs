//! Read-only index over the IDL-reflection metadata document.
//!
//! The document is the JSON output of the Thrift compiler's reflection
//! pass: an array of packages, each carrying `services` (with `functions`)
//! and `structs` (with `fields`). The index answers the two questions the
//! linearizer asks — "describe method M of service S" and "describe struct
//! C" — and tolerates any structure beyond the keys it reads.

use serde_json::Value;

use crate::constants::{
    CLASS_KEY, FIELDS_KEY, FUNCTIONS_KEY, NAME_KEY, SERVICES_KEY, STRUCTS_KEY,
};
use crate::error::ProtocolError;
use crate::json;

/// Immutable metadata view, shared by every protocol instance a factory
/// produces.
#[derive(Debug)]
pub struct Metadata {
    document: Value,
}

impl Metadata {
    /// Wraps a reflection document. The top level is expected to be the
    /// package array; anything else behaves as an empty one.
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    fn packages(&self) -> &[Value] {
        self.document.as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Descriptor of `method` on `service`. Services are stored under their
    /// package-qualified name, so each package is probed for
    /// `<package>.<service>`.
    pub fn method_info(&self, service: &str, method: &str) -> Result<&Value, ProtocolError> {
        for package in self.packages() {
            let Some(services) = package.get(SERVICES_KEY).and_then(Value::as_array) else {
                continue;
            };
            let qualified = format!("{}.{}", json::get_str_or(package, NAME_KEY, ""), service);
            let Some(svc) = json::find_by_field(services, NAME_KEY, &qualified) else {
                continue;
            };
            if let Some(functions) = svc.get(FUNCTIONS_KEY).and_then(Value::as_array) {
                if let Some(info) = json::find_by_field(functions, NAME_KEY, method) {
                    return Ok(info);
                }
            }
        }
        Err(ProtocolError::MethodNotFound {
            service: service.to_string(),
            method: method.to_string(),
        })
    }

    /// Descriptor of a package-qualified struct, e.g. `auth.Credentials`.
    pub fn struct_info(&self, class: &str) -> Result<&Value, ProtocolError> {
        let Some((package_name, struct_name)) = class.split_once('.') else {
            return Err(ProtocolError::MetadataShape(format!(
                "package-qualified class name (got \"{class}\")"
            )));
        };
        let package = json::find_by_field(self.packages(), NAME_KEY, package_name)
            .ok_or_else(|| ProtocolError::MetadataShape(format!("package \"{package_name}\"")))?;
        let structs = package
            .get(STRUCTS_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| ProtocolError::MetadataShape(format!("structs of \"{package_name}\"")))?;
        json::find_by_field(structs, NAME_KEY, struct_name)
            .ok_or_else(|| ProtocolError::MetadataShape(format!("struct \"{class}\"")))
    }

    /// Field list of the struct a composite type descriptor points at
    /// through its `class` key.
    pub fn struct_fields(&self, type_desc: &Value) -> Result<&[Value], ProtocolError> {
        let class = type_desc
            .get(CLASS_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| ProtocolError::MetadataShape("\"class\" on type descriptor".into()))?;
        self.struct_info(class)?
            .get(FIELDS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| ProtocolError::MetadataShape(format!("fields of \"{class}\"")))
    }
}
