use crate::core::number::{number_to_string, string_to_number};
use crate::core::{JSObjectData, ObjectClass, ObjectId, PropertyDescriptor, Realm, Value, number};
use crate::unicode::utf8_to_utf16;
use crate::{JSError, raise_type_error};

/// Preferred type passed to ToPrimitive / `[[DefaultValue]]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    Number,
    String,
}

/// ToBoolean
pub fn to_boolean(val: &Value) -> bool {
    match val {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Object(_) => true,
    }
}

/// CheckObjectCoercible: Undefined and Null cannot become objects.
pub fn check_object_coercible(val: &Value) -> Result<(), JSError> {
    if val.is_null_or_undefined() {
        return Err(raise_type_error!(format!("Cannot convert {} to object", val.kind().name().to_lowercase())));
    }
    Ok(())
}

impl Realm {
    /// ToPrimitive: primitives pass through, objects go through `[[DefaultValue]]`.
    pub fn to_primitive(&mut self, val: &Value, hint: Option<Hint>) -> Result<Value, JSError> {
        match val {
            Value::Object(obj) => self.default_value(*obj, hint),
            _ => Ok(val.clone()),
        }
    }

    /// ToNumber
    pub fn to_number(&mut self, val: &Value) -> Result<f64, JSError> {
        Ok(match val {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Object(_) => {
                let prim = self.to_primitive(val, Some(Hint::Number))?;
                return self.to_number(&prim);
            }
        })
    }

    /// ToInteger
    pub fn to_integer(&mut self, val: &Value) -> Result<f64, JSError> {
        Ok(number::to_integer(self.to_number(val)?))
    }

    /// ToInt32
    pub fn to_int32(&mut self, val: &Value) -> Result<i32, JSError> {
        Ok(number::to_int32(self.to_number(val)?))
    }

    /// ToUint32
    pub fn to_uint32(&mut self, val: &Value) -> Result<u32, JSError> {
        Ok(number::to_uint32(self.to_number(val)?))
    }

    /// ToUint16
    pub fn to_uint16(&mut self, val: &Value) -> Result<u16, JSError> {
        Ok(number::to_uint16(self.to_number(val)?))
    }

    /// ToString, producing the UTF-16 code units of the result.
    pub fn to_js_string(&mut self, val: &Value) -> Result<Vec<u16>, JSError> {
        Ok(match val {
            Value::Undefined => utf8_to_utf16("undefined"),
            Value::Null => utf8_to_utf16("null"),
            Value::Boolean(b) => utf8_to_utf16(if *b { "true" } else { "false" }),
            Value::Number(n) => utf8_to_utf16(&number_to_string(*n)),
            Value::String(s) => s.clone(),
            Value::Object(_) => {
                let prim = self.to_primitive(val, Some(Hint::String))?;
                return self.to_js_string(&prim);
            }
        })
    }

    /// ToString, lossily decoded into a Rust `String`.
    pub fn to_rust_string(&mut self, val: &Value) -> Result<String, JSError> {
        Ok(String::from_utf16_lossy(&self.to_js_string(val)?))
    }

    /// ToObject: wrap primitives in a fresh Boolean/Number/String object.
    pub fn to_object(&mut self, val: &Value) -> Result<ObjectId, JSError> {
        check_object_coercible(val)?;
        let intrinsics = *self.intrinsics();
        let (class, proto) = match val {
            Value::Object(obj) => return Ok(*obj),
            Value::Boolean(_) => (ObjectClass::Boolean, intrinsics.boolean_prototype),
            Value::Number(_) => (ObjectClass::Number, intrinsics.number_prototype),
            Value::String(_) => (ObjectClass::String, intrinsics.string_prototype),
            Value::Undefined | Value::Null => return Err(raise_type_error!("Cannot convert undefined or null to object")),
        };
        let data = JSObjectData::new(Some(proto)).with_class(class).with_primitive_value(val.clone());
        let wrapper = self.alloc(data);
        if let Value::String(s) = val {
            let length = PropertyDescriptor::new_data(Value::Number(s.len() as f64), false, false, false);
            self.define_own_property(wrapper, "length", &length, true)?;
        }
        log::trace!("to_object: wrapped {:?} in {}", val, wrapper);
        Ok(wrapper)
    }
}
