use crate::core::{Realm, Value};
use crate::error::JSError;

pub fn initialize_object_prototype(realm: &mut Realm) -> Result<(), JSError> {
    let object_proto = realm.intrinsics().object_prototype;
    realm.define_builtin_method(object_proto, "toString", 0, object_to_string)?;
    realm.define_builtin_method(object_proto, "valueOf", 0, object_value_of)?;
    Ok(())
}

/// Object.prototype.toString: `"[object " + [[Class]] + "]"`.
fn object_to_string(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    let tag = match this {
        Value::Undefined => "Undefined",
        Value::Null => "Null",
        other => {
            let obj = realm.to_object(other)?;
            realm.class_of(obj)?.name()
        }
    };
    Ok(Value::from(format!("[object {}]", tag)))
}

/// Object.prototype.valueOf: the receiver as an object.
fn object_value_of(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    Ok(Value::Object(realm.to_object(this)?))
}
