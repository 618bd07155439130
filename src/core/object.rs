use crate::core::{Callable, PropertyDescriptor, PropertyKey, Value};
use indexmap::IndexMap;
use std::rc::Rc;

/// Handle to an object stored in a [`Realm`](crate::Realm)'s arena.
///
/// Handles are plain indices: copying one never copies the object, and a
/// prototype link is just another handle, so cyclic chains cannot leak or
/// dangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub(crate) fn new(index: u32) -> Self {
        ObjectId(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Value of the `[[Class]]` internal property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Object,
    Function,
    Boolean,
    Number,
    String,
    Date,
}

impl ObjectClass {
    pub fn name(self) -> &'static str {
        match self {
            ObjectClass::Object => "Object",
            ObjectClass::Function => "Function",
            ObjectClass::Boolean => "Boolean",
            ObjectClass::Number => "Number",
            ObjectClass::String => "String",
            ObjectClass::Date => "Date",
        }
    }
}

/// Storage half of a property: either a value or a getter/setter pair.
#[derive(Clone, Debug)]
pub enum PropertySlot {
    Data { value: Value, writable: bool },
    // `Undefined` stands for an absent accessor function
    Accessor { get: Value, set: Value },
}

/// A normalized, fully populated own property.
#[derive(Clone, Debug)]
pub struct Property {
    pub slot: PropertySlot,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Property {
    /// Materialize a (possibly partial) descriptor, filling absent fields
    /// with their defaults. Generic descriptors produce data properties.
    pub fn from_descriptor(desc: &PropertyDescriptor) -> Self {
        let slot = if desc.is_accessor_descriptor() {
            PropertySlot::Accessor {
                get: desc.get.clone().unwrap_or_default(),
                set: desc.set.clone().unwrap_or_default(),
            }
        } else {
            PropertySlot::Data {
                value: desc.value.clone().unwrap_or_default(),
                writable: desc.writable.unwrap_or(false),
            }
        };
        Property {
            slot,
            enumerable: desc.enumerable.unwrap_or(false),
            configurable: desc.configurable.unwrap_or(false),
        }
    }

    pub fn to_descriptor(&self) -> PropertyDescriptor {
        match &self.slot {
            PropertySlot::Data { value, writable } => PropertyDescriptor::new_data(value.clone(), *writable, self.enumerable, self.configurable),
            PropertySlot::Accessor { get, set } => PropertyDescriptor::new_accessor(get.clone(), set.clone(), self.enumerable, self.configurable),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self.slot, PropertySlot::Data { .. })
    }

    /// Replace the slot with the default slot of the opposite kind, keeping
    /// `enumerable` and `configurable`.
    pub(crate) fn convert_kind(&mut self) {
        self.slot = match self.slot {
            PropertySlot::Data { .. } => PropertySlot::Accessor {
                get: Value::Undefined,
                set: Value::Undefined,
            },
            PropertySlot::Accessor { .. } => PropertySlot::Data {
                value: Value::Undefined,
                writable: false,
            },
        };
    }

    /// Overwrite every attribute present in `desc`. The caller guarantees
    /// that `desc` is generic or of the same kind as this property.
    pub(crate) fn apply(&mut self, desc: &PropertyDescriptor) {
        match &mut self.slot {
            PropertySlot::Data { value, writable } => {
                if let Some(v) = &desc.value {
                    *value = v.clone();
                }
                if let Some(w) = desc.writable {
                    *writable = w;
                }
            }
            PropertySlot::Accessor { get, set } => {
                if let Some(g) = &desc.get {
                    *get = g.clone();
                }
                if let Some(s) = &desc.set {
                    *set = s.clone();
                }
            }
        }
        if let Some(e) = desc.enumerable {
            self.enumerable = e;
        }
        if let Some(c) = desc.configurable {
            self.configurable = c;
        }
    }
}

#[derive(Clone)]
pub struct JSObjectData {
    pub(crate) properties: IndexMap<PropertyKey, Property>,
    pub(crate) prototype: Option<ObjectId>,
    // Whether new own properties can be added to this object. Default true.
    pub(crate) extensible: bool,
    pub(crate) class: ObjectClass,
    /// `[[PrimitiveValue]]` of wrapper and date objects
    pub(crate) primitive_value: Option<Value>,
    /// `[[Call]]` for function objects
    callable: Option<Rc<dyn Callable>>,
}

impl JSObjectData {
    pub fn new(prototype: Option<ObjectId>) -> Self {
        JSObjectData {
            properties: IndexMap::new(),
            prototype,
            extensible: true,
            class: ObjectClass::Object,
            primitive_value: None,
            callable: None,
        }
    }

    pub fn with_class(mut self, class: ObjectClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_primitive_value(mut self, value: Value) -> Self {
        self.primitive_value = Some(value);
        self
    }

    pub fn with_callable(mut self, callable: Rc<dyn Callable>) -> Self {
        self.callable = Some(callable);
        self
    }

    pub fn get_own(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.properties.keys()
    }

    pub fn prototype(&self) -> Option<ObjectId> {
        self.prototype
    }

    pub fn class(&self) -> ObjectClass {
        self.class
    }

    pub fn primitive_value(&self) -> Option<&Value> {
        self.primitive_value.as_ref()
    }

    // Extensibility helpers
    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }

    pub fn get_callable(&self) -> Option<Rc<dyn Callable>> {
        self.callable.clone()
    }
}

impl std::fmt::Debug for JSObjectData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JSObjectData")
            .field("class", &self.class)
            .field("prototype", &self.prototype)
            .field("extensible", &self.extensible)
            .field("properties", &self.properties)
            .field("callable", &self.callable.is_some())
            .finish()
    }
}
