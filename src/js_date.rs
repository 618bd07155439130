use crate::core::{ObjectClass, Realm, Value};
use crate::error::JSError;
use chrono::{DateTime, Utc};

pub fn initialize_date_prototype(realm: &mut Realm) -> Result<(), JSError> {
    let date_proto = realm.intrinsics().date_prototype;
    realm.define_builtin_method(date_proto, "toString", 0, date_to_string)?;
    realm.define_builtin_method(date_proto, "valueOf", 0, date_value_of)?;
    Ok(())
}

fn date_to_string(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    let t = this_time_value(realm, this)?;
    Ok(Value::from(format_date(t)))
}

fn date_value_of(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    Ok(Value::Number(this_time_value(realm, this)?))
}

fn this_time_value(realm: &Realm, value: &Value) -> Result<f64, JSError> {
    if let Value::Object(obj) = value {
        let data = realm.object(*obj)?;
        if data.class() == ObjectClass::Date
            && let Some(Value::Number(t)) = data.primitive_value()
        {
            return Ok(*t);
        }
    }
    Err(crate::raise_type_error!("this is not a Date object."))
}

/// Render a time value the way `Date.prototype.toString` does, in UTC.
pub(crate) fn format_date(t: f64) -> String {
    if !t.is_finite() {
        return "Invalid Date".to_string();
    }
    match DateTime::<Utc>::from_timestamp_millis(t.trunc() as i64) {
        Some(dt) => dt.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)").to_string(),
        None => "Invalid Date".to_string(),
    }
}
