//! Field normalization for loosely shaped backend records.
//!
//! The backend spells the same logical field several ways (`subject_id`,
//! `SubjectID`, `subjectId`, bare `id`). Every field of every model is resolved
//! through an ordered list of candidate keys; the first candidate that is
//! present with an acceptable type wins, otherwise the type default is used.
//! Absence is data here, so nothing in this module fails.

use serde_json::{Map, Value};

/// Ordered candidate keys for one logical field.
pub type Keys = &'static [&'static str];

/// Keys tried, in order, when an element of a reference list is an object.
const REFERENCE_ID_KEYS: Keys = &["id", "SubjectID", "subject_id"];

/// Borrowed view over one backend record.
///
/// Non-object values behave like an empty record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Record<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    fn candidates(&self, keys: Keys) -> impl Iterator<Item = &'a Value> + '_ {
        let fields = self.fields;
        keys.iter()
            .filter_map(move |key| fields.and_then(|map| map.get(*key)))
    }

    /// First string (or number rendered as string) among `keys`, else `""`.
    pub fn string(&self, keys: Keys) -> String {
        self.candidates(keys)
            .find_map(scalar_string)
            .unwrap_or_default()
    }

    /// Like [`Record::string`], but an absent or empty value is `None`.
    pub fn optional_string(&self, keys: Keys) -> Option<String> {
        self.candidates(keys)
            .find_map(scalar_string)
            .filter(|s| !s.is_empty())
    }

    /// First finite number (native or numeric string) among `keys`, else `0.0`.
    pub fn number(&self, keys: Keys) -> f64 {
        self.candidates(keys).find_map(finite_number).unwrap_or(0.0)
    }

    /// [`Record::number`] truncated toward zero.
    pub fn int(&self, keys: Keys) -> i64 {
        self.number(keys).trunc() as i64
    }

    /// Integer reference; absent or zero is `None`.
    pub fn optional_int(&self, keys: Keys) -> Option<i64> {
        self.candidates(keys)
            .find_map(finite_number)
            .map(|n| n.trunc() as i64)
            .filter(|n| *n != 0)
    }

    /// First array among `keys`; anything else is an empty slice.
    pub fn array(&self, keys: Keys) -> &'a [Value] {
        self.candidates(keys)
            .find_map(|v| v.as_array().map(Vec::as_slice))
            .unwrap_or_default()
    }

    /// Reference ids from the first array among `keys`, empty ones dropped.
    pub fn id_list(&self, keys: Keys) -> Vec<String> {
        self.array(keys)
            .iter()
            .map(reference_id)
            .filter(|id| !id.is_empty())
            .collect()
    }
}

/// String form of a scalar: strings as-is, numbers rendered; others rejected.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(render_number(n)),
        _ => None,
    }
}

/// Integral floats render without a fractional part (`3.0` -> `"3"`).
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            // Blank text is not zero; the next candidate key gets a chance.
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Id of one element of a reference list.
///
/// Strings and numbers are the id themselves; objects carry it under `id`,
/// `SubjectID` or `subject_id`. Anything else has no id.
pub fn reference_id(value: &Value) -> String {
    match value {
        Value::Object(_) => Record::new(value).string(REFERENCE_ID_KEYS),
        other => scalar_string(other).unwrap_or_default(),
    }
}

/// Elements of a list response: a bare array, or an array under `data`.
///
/// Any other shape yields an empty list.
pub fn unwrap_list(body: &Value) -> &[Value] {
    if let Some(items) = body.as_array() {
        return items.as_slice();
    }
    match body.get("data").and_then(Value::as_array) {
        Some(items) => items.as_slice(),
        None => {
            tracing::warn!("List response is neither an array nor a data envelope");
            &[]
        }
    }
}

/// The record inside a single-record response.
///
/// Returns the object found under the first matching wrapper key, or the body
/// itself when it is not wrapped.
pub fn unwrap_record<'a>(body: &'a Value, wrappers: Keys) -> &'a Value {
    wrappers
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|inner| inner.is_object())
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: Keys = &["subject_id", "SubjectID", "id"];
    const CREDIT: Keys = &["credit", "Credit"];

    #[test]
    fn test_first_present_key_wins() {
        let value = json!({"id": "fallback", "SubjectID": "S2", "subject_id": "S1"});
        assert_eq!(Record::new(&value).string(ID), "S1");

        let value = json!({"id": "fallback", "SubjectID": "S2"});
        assert_eq!(Record::new(&value).string(ID), "S2");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let value = json!({"unrelated": true});
        let record = Record::new(&value);
        assert_eq!(record.string(ID), "");
        assert_eq!(record.number(CREDIT), 0.0);
        assert_eq!(record.int(CREDIT), 0);
        assert_eq!(record.optional_string(ID), None);
        assert_eq!(record.optional_int(CREDIT), None);
        assert!(record.array(&["study_times"]).is_empty());
    }

    #[test]
    fn test_null_and_wrong_types_are_skipped() {
        let value = json!({"subject_id": null, "SubjectID": false, "id": 42});
        assert_eq!(Record::new(&value).string(ID), "42");
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let value = json!({"credit": " 4 "});
        assert_eq!(Record::new(&value).int(CREDIT), 4);

        let value = json!({"credit": "three", "Credit": 2});
        assert_eq!(Record::new(&value).int(CREDIT), 2);

        let value = json!({"credit": ""});
        assert_eq!(Record::new(&value).number(CREDIT), 0.0);

        let value = json!({"credit": "  ", "Credit": 4});
        assert_eq!(Record::new(&value).int(CREDIT), 4);
    }

    #[test]
    fn test_non_finite_falls_back_to_default() {
        let value = json!({"credit": "NaN"});
        assert_eq!(Record::new(&value).number(CREDIT), 0.0);

        let value = json!({"credit": "inf", "Credit": "1e999"});
        assert_eq!(Record::new(&value).number(CREDIT), 0.0);
    }

    #[test]
    fn test_integral_float_renders_without_fraction() {
        let value = json!({"id": 7.0});
        assert_eq!(Record::new(&value).string(ID), "7");
        let value = json!({"id": 7.5});
        assert_eq!(Record::new(&value).string(ID), "7.5");
    }

    #[test]
    fn test_non_object_record_is_empty() {
        let value = json!(["not", "a", "record"]);
        assert_eq!(Record::new(&value).string(ID), "");
        let value = Value::Null;
        assert_eq!(Record::new(&value).int(CREDIT), 0);
    }

    #[test]
    fn test_reference_ids() {
        assert_eq!(reference_id(&json!("S1")), "S1");
        assert_eq!(reference_id(&json!(12)), "12");
        assert_eq!(reference_id(&json!({"SubjectID": "S3"})), "S3");
        assert_eq!(reference_id(&json!({"subject_id": 9})), "9");
        assert_eq!(reference_id(&json!({"name": "no id"})), "");
        assert_eq!(reference_id(&json!(true)), "");

        let value = json!({"subjects": ["S1", {"id": "S2"}, {"name": "x"}, null]});
        assert_eq!(
            Record::new(&value).id_list(&["subjectIds", "subjects"]),
            vec!["S1", "S2"]
        );
    }

    #[test]
    fn test_non_array_list_field_is_empty() {
        let value = json!({"subjectIds": "S1,S2"});
        assert!(Record::new(&value).id_list(&["subjectIds"]).is_empty());
    }

    #[test]
    fn test_unwrap_list_shapes() {
        let bare = json!([{"id": 1}, {"id": 2}]);
        let wrapped = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(unwrap_list(&bare), unwrap_list(&wrapped));
        assert_eq!(unwrap_list(&bare).len(), 2);

        assert!(unwrap_list(&json!({"data": {"id": 1}})).is_empty());
        assert!(unwrap_list(&json!("nope")).is_empty());
    }

    #[test]
    fn test_unwrap_record_shapes() {
        let wrapped = json!({"message": "ok", "book": {"id": 3}});
        assert_eq!(unwrap_record(&wrapped, &["book"]), &json!({"id": 3}));

        let bare = json!({"id": 3});
        assert_eq!(unwrap_record(&bare, &["book"]), &bare);

        let null_inner = json!({"data": null, "id": 4});
        assert_eq!(unwrap_record(&null_inner, &["data"]), &null_inner);
    }
}
