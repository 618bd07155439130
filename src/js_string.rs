use crate::core::{ObjectClass, Realm, Value};
use crate::error::JSError;

pub fn initialize_string_prototype(realm: &mut Realm) -> Result<(), JSError> {
    let string_proto = realm.intrinsics().string_prototype;
    realm.define_builtin_method(string_proto, "toString", 0, string_to_string)?;
    realm.define_builtin_method(string_proto, "valueOf", 0, string_to_string)?;
    Ok(())
}

// toString and valueOf are the same function for String
fn string_to_string(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    Ok(Value::String(this_string_value(realm, this)?))
}

fn this_string_value(realm: &Realm, value: &Value) -> Result<Vec<u16>, JSError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(obj) => {
            let data = realm.object(*obj)?;
            if data.class() == ObjectClass::String
                && let Some(Value::String(s)) = data.primitive_value()
            {
                return Ok(s.clone());
            }
            Err(crate::raise_type_error!("String.prototype method called on incompatible receiver"))
        }
        _ => Err(crate::raise_type_error!("String.prototype method called on incompatible receiver")),
    }
}
