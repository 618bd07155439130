//! Object and value semantics of an ECMAScript-style dynamic language:
//! property descriptors, prototype-chain lookup, type coercion and the
//! `[[DefineOwnProperty]]` reconciliation algorithm.
//!
//! Every object lives in a [`Realm`]; values refer to objects by
//! [`ObjectId`] handle.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod js_boolean;
pub(crate) mod js_date;
pub(crate) mod js_number;
pub(crate) mod js_object;
pub(crate) mod js_string;
pub(crate) mod unicode;

pub use crate::core::number;
pub use crate::core::{
    Callable, Hint, Intrinsics, JSObjectData, Kind, MAX_PROTOTYPE_CHAIN, NativeFn, ObjectClass, ObjectId, Property, PropertyDescriptor,
    PropertyKey, PropertySlot, Realm, RealmOptions, Value, check_object_coercible, is_accessor_descriptor, is_data_descriptor,
    is_generic_descriptor, same_value, strict_equals, to_boolean, type_of,
};
pub use error::{JSError, JSErrorKind};
pub use unicode::{utf8_to_utf16, utf16_to_utf8};
