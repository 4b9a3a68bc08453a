//! Recursive merge of partial configurations

use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

/// A property absent from the reference configuration
///
/// Such properties are still applied, so newer configurations keep working
/// with older gauges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownProperty {
    /// Dotted path, e.g. `ring.glow`
    pub path: String,
    pub value: Value,
}

/// Merge `source` into `target`, checking property names against `reference`
///
/// Objects are merged recursively; scalars and lists overwrite. Returns the
/// properties that have no counterpart in `reference`.
pub fn merge(target: &mut Value, source: &Value, reference: &Value) -> Vec<UnknownProperty> {
    let mut unknown = Vec::new();
    if let (Some(target), Some(source)) = (ensure_object(target), source.as_object()) {
        merge_objects(target, source, reference.as_object(), "", &mut unknown);
    }
    unknown
}

fn merge_objects(
    target: &mut Map<String, Value>,
    source: &Map<String, Value>,
    reference: Option<&Map<String, Value>>,
    prefix: &str,
    unknown: &mut Vec<UnknownProperty>,
) {
    for (prop, data) in source {
        let path = if prefix.is_empty() {
            prop.clone()
        } else {
            format!("{}.{}", prefix, prop)
        };
        let reference_value = reference.and_then(|r| r.get(prop));

        match data {
            Value::Object(nested) => {
                let slot = target
                    .entry(prop.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Some(slot) = ensure_object(slot) {
                    merge_objects(
                        slot,
                        nested,
                        reference_value.and_then(Value::as_object),
                        &path,
                        unknown,
                    );
                }
            }
            scalar => {
                target.insert(prop.clone(), scalar.clone());
                if reference_value.is_none() {
                    warn!("Config property {} is unknown", path);
                    unknown.push(UnknownProperty {
                        path,
                        value: scalar.clone(),
                    });
                }
            }
        }
    }
}

/// Turn `value` into an object if it is not one already
fn ensure_object(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference() -> Value {
        json!({
            "ring": { "shift": 3, "width": 7, "colors": false },
            "data": { "min": 0, "max": 100 }
        })
    }

    #[test]
    fn test_merge_keeps_defaults_not_overridden() {
        let mut target = reference();
        let unknown = merge(&mut target, &json!({ "ring": { "width": 10 } }), &reference());

        assert!(unknown.is_empty());
        assert_eq!(target["ring"]["width"], json!(10));
        assert_eq!(target["ring"]["shift"], json!(3));
        assert_eq!(target["data"], json!({ "min": 0, "max": 100 }));
    }

    #[test]
    fn test_lists_overwrite() {
        let mut target = reference();
        merge(
            &mut target,
            &json!({ "ring": { "colors": ["#111", "#222"] } }),
            &reference(),
        );
        assert_eq!(target["ring"]["colors"], json!(["#111", "#222"]));
    }

    #[test]
    fn test_unknown_properties_are_reported_and_applied() {
        let mut target = reference();
        let unknown = merge(
            &mut target,
            &json!({ "ring": { "glow": true }, "extra": { "depth": 2 } }),
            &reference(),
        );

        let paths: Vec<_> = unknown.iter().map(|u| u.path.as_str()).collect();
        assert_eq!(paths, vec!["extra.depth", "ring.glow"]);
        assert_eq!(target["ring"]["glow"], json!(true));
        assert_eq!(target["extra"]["depth"], json!(2));
    }

    #[test]
    fn test_null_overrides_known_value() {
        let mut target = reference();
        let unknown = merge(&mut target, &json!({ "data": { "max": null } }), &reference());
        assert!(unknown.is_empty());
        assert!(target["data"]["max"].is_null());
    }

    #[test]
    fn test_non_object_source_is_ignored() {
        let mut target = reference();
        let unknown = merge(&mut target, &json!(42), &reference());
        assert!(unknown.is_empty());
        assert_eq!(target, reference());
    }
}
