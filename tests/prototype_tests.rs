use ecmascript::{PropertyDescriptor, Realm, RealmOptions, Value};

#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[test]
fn test_prototype_chain_lookup() {
    let mut realm = Realm::new();
    let proto = realm.new_object();
    realm.put(proto, "inheritedProp", Value::from("inherited value"), true).unwrap();
    let obj = realm.new_object_with_proto(Some(proto));
    realm.put(obj, "ownProp", Value::from("own value"), true).unwrap();

    assert_eq!(realm.get(obj, "ownProp").unwrap().as_str().as_deref(), Some("own value"));
    assert_eq!(realm.get(obj, "inheritedProp").unwrap().as_str().as_deref(), Some("inherited value"));
    assert!(realm.get_own_property(obj, "inheritedProp").unwrap().is_none());
    assert!(realm.get_property(obj, "inheritedProp").unwrap().is_some());
    assert!(realm.has_property(obj, "inheritedProp").unwrap());
    assert!(!realm.has_property(obj, "missing").unwrap());
    assert!(realm.get(obj, "missing").unwrap().is_undefined());
}

#[test]
fn test_own_property_shadows_prototype() {
    let mut realm = Realm::new();
    let proto = realm.new_object();
    realm.put(proto, "x", Value::from(1.0), true).unwrap();
    let obj = realm.new_object_with_proto(Some(proto));
    realm.put(obj, "x", Value::from(2.0), true).unwrap();

    assert_eq!(realm.get(obj, "x").unwrap().as_number(), Some(2.0));
    assert_eq!(realm.get(proto, "x").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_builtin_prototypes_are_reachable() {
    let mut realm = Realm::new();
    let obj = realm.new_object();
    assert_eq!(realm.prototype_of(obj).unwrap(), Some(realm.intrinsics().object_prototype));
    assert!(realm.has_property(obj, "toString").unwrap());

    let bare = realm.new_object_with_proto(None);
    assert!(!realm.has_property(bare, "toString").unwrap());
}

#[test]
fn test_can_put_respects_inherited_read_only_property() {
    let mut realm = Realm::new();
    let proto = realm.new_object();
    let read_only = PropertyDescriptor::new_data(Value::from(1.0), false, true, true);
    realm.define_own_property(proto, "ro", &read_only, true).unwrap();
    let obj = realm.new_object_with_proto(Some(proto));

    assert!(!realm.can_put(obj, "ro").unwrap());
    assert!(!realm.put(obj, "ro", Value::from(2.0), false).unwrap());
    assert!(realm.put(obj, "ro", Value::from(2.0), true).unwrap_err().is_type_error());
    assert!(realm.get_own_property(obj, "ro").unwrap().is_none());
    assert_eq!(realm.get(obj, "ro").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_can_put_inherited_writable_depends_on_extensibility() {
    let mut realm = Realm::new();
    let proto = realm.new_object();
    realm.put(proto, "w", Value::from(1.0), true).unwrap();
    let obj = realm.new_object_with_proto(Some(proto));
    assert!(realm.can_put(obj, "w").unwrap());

    realm.prevent_extensions(obj).unwrap();
    assert!(!realm.can_put(obj, "w").unwrap());
    assert!(!realm.can_put(obj, "fresh").unwrap());
}

#[test]
fn test_put_creates_own_property_over_inherited_one() {
    let mut realm = Realm::new();
    let proto = realm.new_object();
    realm.put(proto, "w", Value::from(1.0), true).unwrap();
    let obj = realm.new_object_with_proto(Some(proto));
    assert!(realm.put(obj, "w", Value::from(2.0), true).unwrap());

    let own = realm.get_own_property(obj, "w").unwrap().unwrap();
    assert_eq!(own.value.unwrap().as_number(), Some(2.0));
    assert_eq!(own.writable, Some(true));
    assert_eq!(own.enumerable, Some(true));
    assert_eq!(own.configurable, Some(true));
    assert_eq!(realm.get(proto, "w").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_set_prototype_rejects_cycles() {
    let mut realm = Realm::new();
    let a = realm.new_object();
    let b = realm.new_object_with_proto(Some(a));
    let err = realm.set_prototype(a, Some(b)).unwrap_err();
    assert!(err.is_type_error());
    assert!(realm.set_prototype(a, Some(a)).unwrap_err().is_type_error());
    assert_eq!(realm.prototype_of(a).unwrap(), Some(realm.intrinsics().object_prototype));

    realm.set_prototype(a, None).unwrap();
    assert_eq!(realm.prototype_of(a).unwrap(), None);
}

#[test]
fn test_lookup_on_cyclic_chain_is_type_error() {
    let mut realm = Realm::new();
    let a = realm.new_object_with_proto(None);
    let b = realm.new_object_with_proto(Some(a));
    realm.set_prototype_unchecked(a, Some(b)).unwrap();

    let err = realm.get_property(b, "missing").unwrap_err();
    assert!(err.is_type_error());
    assert!(realm.get(a, "missing").unwrap_err().is_type_error());

    // a hit before the cycle closes still resolves
    let desc = PropertyDescriptor::new_data(Value::from(1.0), true, true, true);
    realm.define_own_property(b, "here", &desc, true).unwrap();
    assert_eq!(realm.get(a, "here").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_prototype_chain_depth_limit() {
    let mut realm = Realm::with_options(RealmOptions::new().max_prototype_chain(8));
    let mut current = realm.new_object_with_proto(None);
    for _ in 0..20 {
        current = realm.new_object_with_proto(Some(current));
    }
    assert!(realm.get_property(current, "missing").unwrap_err().is_type_error());

    let shallow = realm.new_object_with_proto(None);
    let child = realm.new_object_with_proto(Some(shallow));
    assert!(realm.get_property(child, "missing").unwrap().is_none());
}

#[test]
fn test_cycle_behind_long_prefix_is_detected() {
    let mut realm = Realm::new();
    // a <- b <- c <- a, reached through twenty plain objects
    let a = realm.new_object_with_proto(None);
    let b = realm.new_object_with_proto(Some(a));
    let c = realm.new_object_with_proto(Some(b));
    realm.set_prototype_unchecked(a, Some(c)).unwrap();
    let mut leaf = c;
    for _ in 0..20 {
        leaf = realm.new_object_with_proto(Some(leaf));
    }

    let err = realm.get_property(leaf, "missing").unwrap_err();
    assert!(err.is_type_error());
    assert!(err.message().contains("Cyclic"), "{}", err.message());

    // lookups that resolve deep in the chain still succeed
    let desc = PropertyDescriptor::new_data(Value::from(3.0), true, true, true);
    realm.define_own_property(b, "deep", &desc, true).unwrap();
    assert_eq!(realm.get(leaf, "deep").unwrap().as_number(), Some(3.0));
}
