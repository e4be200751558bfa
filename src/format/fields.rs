// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Field lookup and scalar coercion over loosely typed JSON records.

use serde_json::Value;

/// Coerces a JSON scalar into trimmed text.
///
/// `null`, missing values, objects and arrays all become `""`, so nothing optional leaks
/// into canonical records.
pub fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_owned(),
        Some(Value::Number(number)) => {
            if let Some(n) = number.as_u64() {
                itoa::Buffer::new().format(n).to_owned()
            } else if let Some(n) = number.as_i64() {
                itoa::Buffer::new().format(n).to_owned()
            } else {
                number.to_string()
            }
        }
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => {
            String::new()
        }
    }
}

/// Returns the first non-empty value among `aliases`, checked in order.
pub fn field(record: &Value, aliases: &[&str]) -> String {
    aliases
        .iter()
        .map(|alias| scalar_text(record.get(alias)))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Follows `path` through nested objects and coerces the leaf.
pub fn nested_field(record: &Value, path: &[&str]) -> String {
    let mut current = Some(record);
    for key in path {
        current = current.and_then(|value| value.get(key));
    }
    scalar_text(current)
}

/// Interprets a loosely typed flag: `"1"`, `1` and `true` are set.
pub fn flag(record: &Value, aliases: &[&str]) -> bool {
    let text = field(record, aliases);
    matches!(text.to_ascii_lowercase().as_str(), "1" | "true")
}

/// A container that may hold one object or a list of them.
pub fn one_or_many(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().filter(|item| !item.is_null()).collect(),
        Some(item @ Value::Object(_)) => vec![item],
        _ => Vec::new(),
    }
}

/// Canonical login: the part after the last `\` (dropping a `domain\` prefix), lower-cased
/// and trimmed.
pub fn normalize_login(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let tail = match memchr::memrchr(b'\\', bytes) {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };
    tail.trim().to_lowercase()
}

/// A login "looks real" when it carries letters; purely numeric values are national-ID
/// style fallbacks.
pub fn is_alphabetic_login(login: &str) -> bool {
    login.chars().any(char::is_alphabetic)
}
