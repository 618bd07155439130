use crate::core::{Realm, Value};
use crate::error::JSError;

/// The `[[Call]]` capability of function objects.
///
/// Hosts plug their own function types in by implementing this trait (or by
/// handing a closure to [`Realm::new_function`]). The callee receives the
/// realm mutably and may read or redefine properties of any object,
/// including the receiver that is currently being resolved.
pub trait Callable {
    fn call(&self, realm: &mut Realm, this: &Value, args: &[Value]) -> Result<Value, JSError>;
}

impl<F> Callable for F
where
    F: Fn(&mut Realm, &Value, &[Value]) -> Result<Value, JSError>,
{
    fn call(&self, realm: &mut Realm, this: &Value, args: &[Value]) -> Result<Value, JSError> {
        self(realm, this, args)
    }
}

/// Signature of the built-in methods installed on the intrinsic prototypes.
pub type NativeFn = fn(&mut Realm, &Value, &[Value]) -> Result<Value, JSError>;
