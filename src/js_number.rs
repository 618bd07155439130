use crate::core::number::number_to_string;
use crate::core::{ObjectClass, Realm, Value};
use crate::error::JSError;
use crate::{raise_range_error, raise_type_error};

pub fn initialize_number_prototype(realm: &mut Realm) -> Result<(), JSError> {
    let number_proto = realm.intrinsics().number_prototype;
    realm.define_builtin_method(number_proto, "toString", 1, number_to_string_method)?;
    realm.define_builtin_method(number_proto, "valueOf", 0, number_value_of)?;
    Ok(())
}

/// Number.prototype.toString([radix])
fn number_to_string_method(realm: &mut Realm, this: &Value, args: &[Value]) -> Result<Value, JSError> {
    let n = this_number_value(realm, this)?;
    let radix_arg = args.first().unwrap_or(&Value::Undefined);
    if radix_arg.is_undefined() {
        return Ok(Value::from(number_to_string(n)));
    }
    let radix = realm.to_integer(radix_arg)?;
    if !(2.0..=36.0).contains(&radix) {
        return Err(raise_range_error!("toString() radix must be between 2 and 36"));
    }
    if radix == 10.0 {
        return Ok(Value::from(number_to_string(n)));
    }
    Ok(Value::from(number_to_radix_string(n, radix as u32)))
}

fn number_value_of(realm: &mut Realm, this: &Value, _args: &[Value]) -> Result<Value, JSError> {
    Ok(Value::Number(this_number_value(realm, this)?))
}

fn this_number_value(realm: &Realm, value: &Value) -> Result<f64, JSError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Object(obj) => {
            let data = realm.object(*obj)?;
            if data.class() == ObjectClass::Number
                && let Some(Value::Number(n)) = data.primitive_value()
            {
                return Ok(*n);
            }
            Err(raise_type_error!("Number.prototype method called on incompatible receiver"))
        }
        _ => Err(raise_type_error!("Number.prototype method requires that 'this' be a Number")),
    }
}

/// Number→string in non-decimal radix (2–36), with fractional part.
fn number_to_radix_string(n: f64, radix: u32) -> String {
    if !n.is_finite() || n == 0.0 {
        return number_to_string(n);
    }

    let negative = n < 0.0;
    let abs_n = n.abs();
    let mut int_part = abs_n.trunc();
    let mut frac = abs_n - int_part;
    let radix_f = radix as f64;

    // Integer part, digit by digit so values beyond u64 keep working
    let mut int_digits = Vec::new();
    if int_part == 0.0 {
        int_digits.push('0');
    }
    while int_part >= 1.0 {
        let d = (int_part % radix_f) as u32;
        int_digits.push(std::char::from_digit(d, radix).unwrap_or('0'));
        int_part = (int_part / radix_f).trunc();
    }
    int_digits.reverse();

    let mut out: String = int_digits.into_iter().collect();
    if frac > 0.0 {
        out.push('.');
        // precision limit
        for _ in 0..52 {
            frac *= radix_f;
            let digit = frac.trunc() as u32;
            out.push(std::char::from_digit(digit, radix).unwrap_or('0'));
            frac -= digit as f64;
            if frac < f64::EPSILON * radix_f {
                break;
            }
        }
    }

    if negative { format!("-{out}") } else { out }
}
