mod common;

use common::{attrs, init_tracing, sequence};
use dataobject_model::{Attributes, DataObject, HumanIdGenerator, ModelError, UuidV7Generator};
use pretty_assertions::assert_eq;

// ── Fresh objects ────────────────────────────────────────────────

#[test]
fn new_generates_id_and_is_dirty() {
    let obj = DataObject::new();
    assert!(!obj.id().is_empty());
    assert!(obj.is_dirty());
    assert_eq!(obj.data_changed(), &attrs(&[("id", obj.id())]));
}

#[test]
fn new_ids_are_unique() {
    let a = DataObject::new();
    let b = DataObject::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn with_generator_uses_injected_ids() {
    let generator = sequence("user");
    let a = DataObject::with_generator(generator.as_ref());
    let b = DataObject::with_generator(generator.as_ref());
    assert_eq!(a.id(), "user-0");
    assert_eq!(b.id(), "user-1");
    assert!(a.is_dirty());
}

#[test]
fn with_generator_accepts_closures_and_builtins() {
    let fixed = DataObject::with_generator(&|| "fixed-id".to_string());
    assert_eq!(fixed.id(), "fixed-id");

    let human = DataObject::with_generator(&HumanIdGenerator);
    assert_eq!(human.id().len(), HumanIdGenerator::LEN);

    let uuid = DataObject::with_generator(&UuidV7Generator);
    assert_eq!(uuid.id().len(), 36);
}

// ── From existing data ───────────────────────────────────────────

#[test]
fn from_data_is_clean() {
    let data = attrs(&[("id", "test-id"), ("key1", "value1"), ("key2", "value2")]);
    let obj = DataObject::from_data(data.clone());

    assert_eq!(obj.id(), "test-id");
    assert_eq!(obj.data(), &data);
    assert!(!obj.is_dirty());
    assert!(obj.data_changed().is_empty());
}

#[test]
fn from_data_then_set_tracks_only_the_set() {
    let mut obj = DataObject::from_data(attrs(&[("id", "1"), ("a", "x")]));
    obj.set("b", "y").unwrap();
    assert_eq!(obj.data_changed(), &attrs(&[("b", "y")]));
}

// ── JSON ─────────────────────────────────────────────────────────

#[test]
fn to_json_is_flat_object_of_strings() {
    let obj = DataObject::from_data(attrs(&[("id", "X"), ("count", "42")]));
    let json = obj.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value, serde_json::json!({"id": "X", "count": "42"}));
}

#[test]
fn to_json_of_empty_object() {
    assert_eq!(DataObject::default().to_json().unwrap(), "{}");
}

#[test]
fn json_round_trip_is_clean() {
    let mut original = DataObject::default();
    original.set_id("X");
    original.set("first_name", "Jon").unwrap();
    original.set("last_name", "Doe").unwrap();

    let json = original.to_json().unwrap();
    let restored = DataObject::from_json(&json).unwrap();

    assert_eq!(restored.id(), "X");
    assert_eq!(restored.get("first_name").unwrap(), "Jon");
    assert_eq!(restored.get("last_name").unwrap(), "Doe");
    assert_eq!(restored.data(), original.data());
    assert!(!restored.is_dirty());
}

#[test]
fn serialize_matches_to_json() {
    let obj = DataObject::from_data(attrs(&[("id", "s-1"), ("k", "v")]));
    let via_serde: serde_json::Value = serde_json::to_value(&obj).unwrap();
    let via_to_json: serde_json::Value = serde_json::from_str(&obj.to_json().unwrap()).unwrap();
    assert_eq!(via_serde, via_to_json);
}

#[test]
fn from_json_converts_every_value_type() {
    let json = r#"{
        "id": "complex-123",
        "name": "Test Object",
        "active": true,
        "count": 42,
        "price": 19.99,
        "missing": null,
        "nested": {"key2": "value2", "key1": "value1"},
        "array": [1, 2, 3]
    }"#;

    let obj = DataObject::from_json(json).unwrap();

    assert_eq!(obj.id(), "complex-123");
    assert_eq!(obj.get("name").unwrap(), "Test Object");
    assert_eq!(obj.get("active").unwrap(), "true");
    assert_eq!(obj.get("count").unwrap(), "42.0000");
    assert_eq!(obj.get("price").unwrap(), "19.9900");
    assert_eq!(obj.get("missing").unwrap(), "");
    assert!(obj.has("missing"));
    assert_eq!(obj.get("nested").unwrap(), "{key1:value1 key2:value2}");
    assert_eq!(obj.get("array").unwrap(), "[1.0000 2.0000 3.0000]");
    assert!(!obj.is_dirty());
}

#[test]
fn from_json_accepts_empty_and_non_string_ids() {
    assert_eq!(DataObject::from_json(r#"{"id":""}"#).unwrap().id(), "");
    assert_eq!(DataObject::from_json(r#"{"id":123}"#).unwrap().id(), "123.0000");
    assert_eq!(DataObject::from_json(r#"{"id":"123"}"#).unwrap().id(), "123");
}

#[test]
fn from_json_rejects_invalid_payloads_before_decoding() {
    init_tracing();
    for input in ["", "{}", "null", "[1,2,3]", r#"{"name":"test"}"#, r#"{"id":"123""#, "   "] {
        let err = DataObject::from_json(input).unwrap_err();
        assert!(
            matches!(err, ModelError::InvalidJson(_)),
            "{input:?} gave {err:?}"
        );
        assert!(err.is_validation());
    }
}

#[test]
fn from_json_trims_whitespace() {
    let obj = DataObject::from_json("\n  {\"id\": \"t\"}  \n").unwrap();
    assert_eq!(obj.id(), "t");
}

#[test]
fn from_json_reports_decode_failures_as_json_errors() {
    let err = DataObject::from_json(r#"{"id": "1", broken}"#).unwrap_err();
    assert!(matches!(err, ModelError::Json(_)));
    assert!(!err.is_validation());
}

#[test]
fn from_json_requires_id_key_not_just_token() {
    let err = DataObject::from_json(r#"{"label":"id"}"#).unwrap_err();
    assert!(matches!(err, ModelError::MissingId { format: "json" }));
    assert_eq!(err.to_string(), "invalid json data: missing id");
}

// ── Binary ───────────────────────────────────────────────────────

#[test]
fn to_binary_is_not_empty_and_decodes_to_map() {
    let mut user = DataObject::new();
    user.set("first_name", "Jon").unwrap();
    user.set("last_name", "Doe").unwrap();

    let bytes = user.to_binary().unwrap();
    assert!(!bytes.is_empty());

    let decoded: Attributes = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(&decoded, user.data());
}

#[test]
fn binary_round_trip_is_clean() {
    let mut original = DataObject::new();
    original.set("first_name", "Jane").unwrap();
    original.set("last_name", "Smith").unwrap();
    original.set("age", "30").unwrap();

    let restored = DataObject::from_binary(&original.to_binary().unwrap()).unwrap();

    assert_eq!(restored.id(), original.id());
    assert_eq!(restored.data(), original.data());
    assert!(!restored.is_dirty());
}

#[test]
fn from_binary_rejects_garbage() {
    init_tracing();
    let err = DataObject::from_binary(b"invalid binary data").unwrap_err();
    assert!(matches!(err, ModelError::InvalidBinary(_)));
    assert!(err.is_validation());

    assert!(DataObject::from_binary(&[]).is_err());
}

#[test]
fn from_binary_requires_id() {
    let data = attrs(&[("first_name", "John"), ("last_name", "Doe"), ("age", "25")]);
    let bytes = rmp_serde::to_vec(&data).unwrap();

    let err = DataObject::from_binary(&bytes).unwrap_err();

    assert_eq!(err.to_string(), "invalid binary data: missing id");
    assert!(err.is_validation());
}
