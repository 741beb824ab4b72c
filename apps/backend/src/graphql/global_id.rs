//! Relay global ids: base64 of `<TypeName>:<primary key>`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn encode(type_name: &str, id: i32) -> String {
    STANDARD.encode(format!("{type_name}:{id}"))
}

/// Split a global id into its type name and primary key. `None` when the id
/// is not base64, not UTF-8, or not `Type:integer`.
pub fn decode(global_id: &str) -> Option<(String, i32)> {
    let raw = STANDARD.decode(global_id).ok()?;
    let text = String::from_utf8(raw).ok()?;
    let (type_name, id) = text.split_once(':')?;
    let id = id.parse::<i32>().ok()?;

    Some((type_name.to_string(), id))
}
