use ecmascript::{Hint, ObjectId, PropertyDescriptor, Realm, Value};
use std::cell::RefCell;
use std::rc::Rc;

#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

/// Install `name` on `obj` as a method that records its name and returns `result`.
fn recording_method(realm: &mut Realm, obj: ObjectId, name: &'static str, result: Value, calls: &Rc<RefCell<Vec<&'static str>>>) {
    let calls = calls.clone();
    let func = realm
        .new_function(name, 0, move |_realm, _this, _args| {
            calls.borrow_mut().push(name);
            Ok(result.clone())
        })
        .unwrap();
    let desc = PropertyDescriptor::new_data(Value::Object(func), true, false, true);
    realm.define_own_property(obj, name, &desc, true).unwrap();
}

#[test]
fn test_number_hint_tries_value_of_first() {
    let mut realm = Realm::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let obj = realm.new_object();
    recording_method(&mut realm, obj, "valueOf", Value::from(1.0), &calls);
    recording_method(&mut realm, obj, "toString", Value::from("s"), &calls);

    let v = realm.default_value(obj, Some(Hint::Number)).unwrap();
    assert_eq!(v.as_number(), Some(1.0));
    assert_eq!(*calls.borrow(), vec!["valueOf"]);

    // no hint behaves as Number for ordinary objects
    calls.borrow_mut().clear();
    let v = realm.default_value(obj, None).unwrap();
    assert_eq!(v.as_number(), Some(1.0));
    assert_eq!(*calls.borrow(), vec!["valueOf"]);
}

#[test]
fn test_string_hint_tries_to_string_first() {
    let mut realm = Realm::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let obj = realm.new_object();
    recording_method(&mut realm, obj, "valueOf", Value::from(1.0), &calls);
    recording_method(&mut realm, obj, "toString", Value::from("s"), &calls);

    let v = realm.default_value(obj, Some(Hint::String)).unwrap();
    assert_eq!(v.as_str().as_deref(), Some("s"));
    assert_eq!(*calls.borrow(), vec!["toString"]);
}

#[test]
fn test_falls_back_when_first_method_returns_object() {
    let mut realm = Realm::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let obj = realm.new_object();
    let other = realm.new_object();
    recording_method(&mut realm, obj, "valueOf", Value::Object(other), &calls);
    recording_method(&mut realm, obj, "toString", Value::from("fallback"), &calls);

    let v = realm.default_value(obj, Some(Hint::Number)).unwrap();
    assert_eq!(v.as_str().as_deref(), Some("fallback"));
    assert_eq!(*calls.borrow(), vec!["valueOf", "toString"]);
}

#[test]
fn test_non_callable_methods_are_skipped() {
    let mut realm = Realm::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let obj = realm.new_object();
    realm.put(obj, "valueOf", Value::from(5.0), true).unwrap();
    recording_method(&mut realm, obj, "toString", Value::from("ok"), &calls);

    let v = realm.default_value(obj, Some(Hint::Number)).unwrap();
    assert_eq!(v.as_str().as_deref(), Some("ok"));
}

#[test]
fn test_no_primitive_result_is_type_error() {
    let mut realm = Realm::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let obj = realm.new_object();
    let other = realm.new_object();
    recording_method(&mut realm, obj, "valueOf", Value::Object(other), &calls);
    recording_method(&mut realm, obj, "toString", Value::Object(other), &calls);

    let err = realm.default_value(obj, None).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(*calls.borrow(), vec!["valueOf", "toString"]);

    let bare = realm.new_object_with_proto(None);
    assert!(realm.default_value(bare, Some(Hint::String)).unwrap_err().is_type_error());
}

#[test]
fn test_date_defaults_to_string_hint() {
    let mut realm = Realm::new();
    let date = realm.new_date(0.0);
    let v = realm.default_value(date, None).unwrap();
    assert_eq!(v.as_str().as_deref(), Some("Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)"));

    let v = realm.default_value(date, Some(Hint::Number)).unwrap();
    assert_eq!(v.as_number(), Some(0.0));

    let invalid = realm.new_date(f64::NAN);
    let v = realm.to_rust_string(&Value::Object(invalid)).unwrap();
    assert_eq!(v, "Invalid Date");
    assert!(realm.to_number(&Value::Object(invalid)).unwrap().is_nan());
}

#[test]
fn test_user_method_overrides_builtin_on_prototype() {
    let mut realm = Realm::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let proto = realm.new_object();
    recording_method(&mut realm, proto, "valueOf", Value::from(99.0), &calls);
    let obj = realm.new_object_with_proto(Some(proto));

    assert_eq!(realm.to_number(&Value::Object(obj)).unwrap(), 99.0);
    // toString still comes from Object.prototype
    assert_eq!(realm.to_rust_string(&Value::Object(obj)).unwrap(), "[object Object]");
}
