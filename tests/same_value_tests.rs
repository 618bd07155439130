use ecmascript::{Realm, Value, same_value, strict_equals};

#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[test]
fn test_same_value_nan_and_zeros() {
    assert!(same_value(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    assert!(!same_value(&Value::from(0.0), &Value::from(-0.0)));
    assert!(same_value(&Value::from(-0.0), &Value::from(-0.0)));

    // strict equality keeps the IEEE behavior
    assert!(!strict_equals(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    assert!(strict_equals(&Value::from(0.0), &Value::from(-0.0)));
}

#[test]
fn test_same_value_by_type() {
    assert!(same_value(&Value::Undefined, &Value::Undefined));
    assert!(same_value(&Value::Null, &Value::Null));
    assert!(!same_value(&Value::Null, &Value::Undefined));
    assert!(same_value(&Value::from("abc"), &Value::from("abc")));
    assert!(!same_value(&Value::from("abc"), &Value::from("abd")));
    assert!(same_value(&Value::Boolean(true), &Value::Boolean(true)));
    assert!(!same_value(&Value::Boolean(true), &Value::Boolean(false)));
    // no coercion between types
    assert!(!same_value(&Value::from(1.0), &Value::from("1")));
    assert!(!same_value(&Value::from(0.0), &Value::Boolean(false)));
}

#[test]
fn test_same_value_objects_compare_by_identity() {
    let mut realm = Realm::new();
    let a = realm.new_object();
    let b = realm.new_object();
    assert!(same_value(&Value::Object(a), &Value::Object(a)));
    assert!(!same_value(&Value::Object(a), &Value::Object(b)));
    assert!(strict_equals(&Value::Object(b), &Value::Object(b)));
}
