use crate::core::{ObjectId, PropertyKey, Realm, Value, to_boolean};
use crate::{JSError, raise_type_error};

/// A Rust representation of a property descriptor used by the engine.
/// Supports both data descriptors (`value` + `writable`) and accessor descriptors (`get`/`set`).
/// Fields are optional to support "partial" descriptors (as accepted by DefineOwnProperty).
#[derive(Clone, Debug, Default)]
pub struct PropertyDescriptor {
    // Data fields
    pub value: Option<Value>,
    pub writable: Option<bool>,
    // Accessor fields
    pub get: Option<Value>,
    pub set: Option<Value>,
    // Common flags
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// Construct a full data descriptor from explicit values
    pub fn new_data(value: Value, writable: bool, enumerable: bool, configurable: bool) -> Self {
        PropertyDescriptor {
            value: Some(value),
            writable: Some(writable),
            get: None,
            set: None,
            enumerable: Some(enumerable),
            configurable: Some(configurable),
        }
    }

    /// Construct an accessor descriptor. `Value::Undefined` stands for a
    /// missing getter or setter; callability is checked by
    /// [`Realm::create_accessor_property`].
    pub fn new_accessor(get: Value, set: Value, enumerable: bool, configurable: bool) -> Self {
        PropertyDescriptor {
            value: None,
            writable: None,
            get: Some(get),
            set: Some(set),
            enumerable: Some(enumerable),
            configurable: Some(configurable),
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    pub fn with_get(mut self, get: Value) -> Self {
        self.get = Some(get);
        self
    }

    pub fn with_set(mut self, set: Value) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    /// True when every field is absent.
    pub fn is_empty(&self) -> bool {
        self.is_generic_descriptor() && self.enumerable.is_none() && self.configurable.is_none()
    }
}

/// IsAccessorDescriptor; an absent descriptor is not one.
pub fn is_accessor_descriptor(desc: Option<&PropertyDescriptor>) -> bool {
    desc.is_some_and(PropertyDescriptor::is_accessor_descriptor)
}

/// IsDataDescriptor; an absent descriptor is not one.
pub fn is_data_descriptor(desc: Option<&PropertyDescriptor>) -> bool {
    desc.is_some_and(PropertyDescriptor::is_data_descriptor)
}

/// IsGenericDescriptor; an absent descriptor is not one.
pub fn is_generic_descriptor(desc: Option<&PropertyDescriptor>) -> bool {
    desc.is_some_and(PropertyDescriptor::is_generic_descriptor)
}

impl Realm {
    /// Build a complete data descriptor (`createDataProperty`).
    pub fn create_data_property(&self, value: Value, writable: bool, enumerable: bool, configurable: bool) -> PropertyDescriptor {
        PropertyDescriptor::new_data(value, writable, enumerable, configurable)
    }

    /// Build a complete accessor descriptor (`createAccessorProperty`).
    /// Both functions must be callable or `undefined`.
    pub fn create_accessor_property(&self, get: Value, set: Value, enumerable: bool, configurable: bool) -> Result<PropertyDescriptor, JSError> {
        let desc = PropertyDescriptor::new_accessor(get, set, enumerable, configurable);
        self.validate_descriptor_for_define(&desc)?;
        Ok(desc)
    }

    /// Validate a descriptor for use in DefineOwnProperty.
    /// Ensures it is NOT both a data and an accessor descriptor and that
    /// getter/setter values are functions or `undefined`.
    pub fn validate_descriptor_for_define(&self, pd: &PropertyDescriptor) -> Result<(), JSError> {
        if pd.is_accessor_descriptor() && pd.is_data_descriptor() {
            return Err(raise_type_error!(
                "Invalid property descriptor: cannot be both a data and an accessor descriptor"
            ));
        }
        if let Some(get_val) = &pd.get
            && !get_val.is_undefined()
            && !self.is_callable(get_val)
        {
            return Err(raise_type_error!(format!("Getter must be a function: {:?}", get_val)));
        }
        if let Some(set_val) = &pd.set
            && !set_val.is_undefined()
            && !self.is_callable(set_val)
        {
            return Err(raise_type_error!(format!("Setter must be a function: {:?}", set_val)));
        }
        Ok(())
    }

    /// FromPropertyDescriptor: produce a JS object describing `desc`.
    /// Missing fields of a partial descriptor are materialized using their
    /// defaults, so the result is always a complete descriptor object.
    pub fn from_property_descriptor(&mut self, desc: Option<&PropertyDescriptor>) -> Result<Value, JSError> {
        let Some(desc) = desc else {
            return Ok(Value::Undefined);
        };
        let obj = self.new_object();
        let field = |v: Value| PropertyDescriptor::new_data(v, true, true, true);
        if desc.is_accessor_descriptor() {
            self.define_own_property(obj, "get", &field(desc.get.clone().unwrap_or_default()), false)?;
            self.define_own_property(obj, "set", &field(desc.set.clone().unwrap_or_default()), false)?;
        } else {
            self.define_own_property(obj, "value", &field(desc.value.clone().unwrap_or_default()), false)?;
            self.define_own_property(obj, "writable", &field(Value::Boolean(desc.writable.unwrap_or(false))), false)?;
        }
        self.define_own_property(obj, "enumerable", &field(Value::Boolean(desc.enumerable.unwrap_or(false))), false)?;
        self.define_own_property(obj, "configurable", &field(Value::Boolean(desc.configurable.unwrap_or(false))), false)?;
        Ok(Value::Object(obj))
    }

    /// ToPropertyDescriptor: convert a descriptor object into a partial
    /// `PropertyDescriptor`. Only fields the object has (own or inherited)
    /// become present; flags are coerced with ToBoolean.
    pub fn to_property_descriptor(&mut self, obj: &Value) -> Result<PropertyDescriptor, JSError> {
        let Value::Object(id) = obj else {
            return Err(raise_type_error!(format!("Property description must be an object: {:?}", obj)));
        };
        let id = *id;
        let pd = PropertyDescriptor {
            enumerable: self.read_descriptor_field(id, "enumerable")?.map(|v| to_boolean(&v)),
            configurable: self.read_descriptor_field(id, "configurable")?.map(|v| to_boolean(&v)),
            value: self.read_descriptor_field(id, "value")?,
            writable: self.read_descriptor_field(id, "writable")?.map(|v| to_boolean(&v)),
            get: self.read_descriptor_field(id, "get")?,
            set: self.read_descriptor_field(id, "set")?,
        };
        self.validate_descriptor_for_define(&pd)?;
        Ok(pd)
    }

    fn read_descriptor_field(&mut self, obj: ObjectId, name: &str) -> Result<Option<Value>, JSError> {
        let key = PropertyKey::from(name);
        if self.has_property(obj, &key)? {
            Ok(Some(self.get(obj, &key)?))
        } else {
            Ok(None)
        }
    }
}
