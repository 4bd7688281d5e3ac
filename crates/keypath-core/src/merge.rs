//! Deep merging of layered value trees

use serde_json::Value as J;

/// Merge two JSON values with deep object merging and array replacement
///
/// Objects are merged recursively, scalars/arrays replace the left value. A `null`
/// in the layer never replaces anything and never introduces a new key.
pub fn merge_two_json(base: &mut J, layer: J) {
    match (base, layer) {
        (J::Object(a), J::Object(b)) => {
            for (k, v) in b {
                if v.is_null() && !a.contains_key(&k) {
                    continue;
                }
                merge_two_json(a.entry(k).or_insert(J::Null), v);
            }
        }
        // Policy: arrays are replaced wholesale
        (a @ J::Array(_), J::Array(b)) => *a = J::Array(b),
        (_, J::Null) => { /* keep left if right is null */ }
        (a, b) => *a = b,
    }
}

/// Insert a value at a dotted path, creating intermediate mappings as needed
///
/// Non-mapping values found on the way are replaced by mappings.
pub fn insert_dotted(root: &mut J, dotted: &str, v: J) {
    let mut parts: Vec<&str> = dotted.split('.').collect();
    let Some(final_key) = parts.pop() else {
        return;
    };

    let mut cur = root;
    for p in parts {
        if !cur.is_object() {
            *cur = J::Object(Default::default());
        }
        let Some(map) = cur.as_object_mut() else {
            return;
        };
        cur = map.entry(p).or_insert_with(|| J::Object(Default::default()));
    }

    if let J::Object(map) = cur {
        map.insert(final_key.into(), v);
    } else {
        *cur = serde_json::json!({ final_key: v });
    }
}
