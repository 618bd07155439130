use crate::core::{ObjectClass, Realm, Value};
use crate::error::JSError;

pub fn initialize_boolean_prototype(realm: &mut Realm) -> Result<(), JSError> {
    let boolean_proto = realm.intrinsics().boolean_prototype;
    realm.define_builtin_method(boolean_proto, "toString", 0, boolean_to_string)?;
    realm.define_builtin_method(boolean_proto, "valueOf", 0, boolean_value_of)?;
    Ok(())
}

fn boolean_to_string(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    let b = this_boolean_value(realm, this)?;
    Ok(Value::from(if b { "true" } else { "false" }))
}

fn boolean_value_of(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    Ok(Value::Boolean(this_boolean_value(realm, this)?))
}

fn this_boolean_value(realm: &Realm, value: &Value) -> Result<bool, JSError> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::Object(obj) => {
            let data = realm.object(*obj)?;
            if data.class() == ObjectClass::Boolean
                && let Some(Value::Boolean(b)) = data.primitive_value()
            {
                return Ok(*b);
            }
            Err(crate::raise_type_error!("Boolean.prototype method called on incompatible receiver"))
        }
        _ => Err(crate::raise_type_error!("Boolean.prototype method called on incompatible receiver")),
    }
}
