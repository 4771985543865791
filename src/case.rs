//! Key case rewriting between snake_case and camelCase forms.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Casing applied to the first segment of a camelized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    UpperFirst,
    LowerFirst,
}

/// Camelize one key: split on underscores, case the first segment per
/// `mode`, capitalize every later segment, concatenate.
///
/// Keys with no underscores only have their first character recased, so
/// camelizing an already-camelized key is a no-op.
pub fn camelize(key: &str, mode: CaseMode) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, segment) in key.split('_').filter(|s| !s.is_empty()).enumerate() {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else { continue };
        if i == 0 && mode == CaseMode::LowerFirst {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }
        out.push_str(chars.as_str());
    }
    out
}

/// Destructively camelize the top-level keys of a JSON map and return
/// the same map.
///
/// Only top-level keys are rewritten; nested maps and arrays are left
/// untouched. When two original keys camelize to the same name the
/// last-iterated one wins (serde_json's map iterates keys in sorted
/// order). Never fails.
pub fn camelize_keys(map: &mut Map<String, Value>, mode: CaseMode) -> &mut Map<String, Value> {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        if let Some(value) = map.remove(&key) {
            map.insert(camelize(&key, mode), value);
        }
    }
    map
}

/// Lower-snake a camel or space-free title fragment, Rails style:
/// `"JQ_Touch"` becomes `"jq_touch"`, `"MyPage"` becomes `"my_page"`.
pub fn underscore(s: &str) -> String {
    static ACRONYM_RE: OnceLock<Regex> = OnceLock::new();
    static BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();
    let acronym = ACRONYM_RE.get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
    let boundary = BOUNDARY_RE.get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

    let s = acronym.replace_all(s, "${1}_${2}");
    let s = boundary.replace_all(&s, "${1}_${2}");
    s.replace('-', "_").to_lowercase()
}
