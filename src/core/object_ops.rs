use crate::core::{Hint, ObjectClass, ObjectId, Property, PropertyDescriptor, PropertyKey, Realm, Value, same_value};
use crate::{JSError, raise_type_error};
use std::collections::HashSet;

/// Prototype hops walked before `get_property` starts recording visited objects.
const UNTRACKED_PROTOTYPE_STEPS: usize = 8;

/// "Reject": `false`, or a TypeError when the caller asked for throwing.
fn reject(key: &PropertyKey, reason: &str, throw: bool) -> Result<bool, JSError> {
    log::debug!("define_own_property: reject key={} reason={} throw={}", key, reason, throw);
    if throw {
        Err(raise_type_error!(format!("Cannot redefine property: {} ({})", key, reason)))
    } else {
        Ok(false)
    }
}

/// Every field present in `desc` also occurs in `current` with a SameValue-equal value.
fn fields_agree(desc: &PropertyDescriptor, current: &PropertyDescriptor) -> bool {
    fn value_field(d: &Option<Value>, c: &Option<Value>) -> bool {
        match (d, c) {
            (None, _) => true,
            (Some(d), Some(c)) => same_value(d, c),
            (Some(_), None) => false,
        }
    }
    fn flag_field(d: Option<bool>, c: Option<bool>) -> bool {
        d.is_none() || d == c
    }
    value_field(&desc.value, &current.value)
        && value_field(&desc.get, &current.get)
        && value_field(&desc.set, &current.set)
        && flag_field(desc.writable, current.writable)
        && flag_field(desc.enumerable, current.enumerable)
        && flag_field(desc.configurable, current.configurable)
}

fn accessor_defined(f: &Option<Value>) -> bool {
    f.as_ref().is_some_and(|v| !v.is_undefined())
}

impl Realm {
    /// `[[GetOwnProperty]]`: the normalized descriptor stored on `obj`, never
    /// consulting the prototype chain.
    pub fn get_own_property(&self, obj: ObjectId, key: impl Into<PropertyKey>) -> Result<Option<PropertyDescriptor>, JSError> {
        let key = key.into();
        Ok(self.obj(obj)?.get_own(&key).map(Property::to_descriptor))
    }

    /// `[[GetProperty]]`: own property first, then the prototype chain.
    /// A cyclic or over-deep chain is a TypeError.
    pub fn get_property(&self, obj: ObjectId, key: impl Into<PropertyKey>) -> Result<Option<PropertyDescriptor>, JSError> {
        let key = key.into();
        let mut current = Some(obj);
        let mut steps = 0usize;
        // visited objects are only recorded past the first few hops
        let mut visited: Option<HashSet<ObjectId>> = None;
        while let Some(id) = current {
            if steps >= self.options().max_prototype_chain {
                log::warn!("get_property: prototype chain of {} exceeds {} objects", obj, steps);
                return Err(raise_type_error!("Prototype chain too deep"));
            }
            steps += 1;
            if steps > UNTRACKED_PROTOTYPE_STEPS && !visited.get_or_insert_with(HashSet::new).insert(id) {
                log::warn!("get_property: prototype cycle through {} while looking up {}", id, key);
                return Err(raise_type_error!(format!("Cyclic prototype chain while looking up '{}'", key)));
            }
            let data = self.obj(id)?;
            if let Some(prop) = data.get_own(&key) {
                log::trace!("get_property: {} found on {} after {} step(s)", key, id, steps);
                return Ok(Some(prop.to_descriptor()));
            }
            current = data.prototype;
        }
        Ok(None)
    }

    /// `[[HasProperty]]`
    pub fn has_property(&self, obj: ObjectId, key: impl Into<PropertyKey>) -> Result<bool, JSError> {
        Ok(self.get_property(obj, key)?.is_some())
    }

    /// `[[Get]]`: data properties yield their value; accessors call the getter
    /// with `obj` as receiver.
    pub fn get(&mut self, obj: ObjectId, key: impl Into<PropertyKey>) -> Result<Value, JSError> {
        let Some(desc) = self.get_property(obj, key)? else {
            return Ok(Value::Undefined);
        };
        if desc.is_data_descriptor() {
            return Ok(desc.value.unwrap_or_default());
        }
        match desc.get {
            Some(getter) if !getter.is_undefined() => self.call(&getter, &Value::Object(obj), &[]),
            _ => Ok(Value::Undefined),
        }
    }

    /// `[[CanPut]]`
    pub fn can_put(&self, obj: ObjectId, key: impl Into<PropertyKey>) -> Result<bool, JSError> {
        let key = key.into();
        if let Some(desc) = self.get_own_property(obj, &key)? {
            if desc.is_accessor_descriptor() {
                return Ok(accessor_defined(&desc.set));
            }
            return Ok(desc.writable.unwrap_or(false));
        }
        let extensible = self.is_extensible(obj)?;
        let Some(proto) = self.prototype_of(obj)? else {
            return Ok(extensible);
        };
        match self.get_property(proto, &key)? {
            None => Ok(extensible),
            Some(inherited) if inherited.is_accessor_descriptor() => Ok(accessor_defined(&inherited.set)),
            Some(_) if !extensible => Ok(false),
            Some(inherited) => Ok(inherited.writable.unwrap_or(false)),
        }
    }

    /// `[[Put]]`: assignment. Own data properties are redefined with the new
    /// value, accessors (own or inherited) have their setter called, and
    /// anything else creates a plain writable/enumerable/configurable property.
    pub fn put(&mut self, obj: ObjectId, key: impl Into<PropertyKey>, value: Value, throw: bool) -> Result<bool, JSError> {
        let key = key.into();
        if !self.can_put(obj, &key)? {
            if throw {
                return Err(raise_type_error!(format!("Cannot assign to read only property '{}'", key)));
            }
            return Ok(false);
        }
        if let Some(own) = self.get_own_property(obj, &key)?
            && own.is_data_descriptor()
        {
            let desc = PropertyDescriptor::default().with_value(value);
            return self.define_own_property(obj, &key, &desc, throw);
        }
        if let Some(desc) = self.get_property(obj, &key)?
            && desc.is_accessor_descriptor()
        {
            let setter = desc.set.unwrap_or_default();
            self.call(&setter, &Value::Object(obj), &[value])?;
            return Ok(true);
        }
        let desc = PropertyDescriptor::new_data(value, true, true, true);
        self.define_own_property(obj, &key, &desc, throw)
    }

    /// `[[DefaultValue]]`: try `toString`/`valueOf` in hint order and return
    /// the first primitive result. Without a hint, date-like objects prefer
    /// String and everything else prefers Number.
    pub fn default_value(&mut self, obj: ObjectId, hint: Option<Hint>) -> Result<Value, JSError> {
        let hint = match hint {
            Some(h) => h,
            None if self.class_of(obj)? == ObjectClass::Date => Hint::String,
            None => Hint::Number,
        };
        let order = match hint {
            Hint::String => ["toString", "valueOf"],
            Hint::Number => ["valueOf", "toString"],
        };
        for method in order {
            let func = self.get(obj, method)?;
            if !self.is_callable(&func) {
                log::debug!("default_value: {}.{} is not callable", obj, method);
                continue;
            }
            let result = self.call(&func, &Value::Object(obj), &[])?;
            log::debug!("default_value: {}.{}() returned {:?}", obj, method, result);
            if result.is_primitive() {
                return Ok(result);
            }
        }
        Err(raise_type_error!("Cannot convert object to primitive value"))
    }

    /// `[[DefineOwnProperty]]`: reconcile `desc` with the current own
    /// property `key` of `obj`.
    ///
    /// Returns `Ok(true)` when the definition is accepted. A rejected
    /// definition returns `Ok(false)`, or a TypeError when `throw` is set.
    /// Descriptors mixing data and accessor fields, or carrying a
    /// non-callable getter/setter, are a TypeError regardless of `throw`.
    pub fn define_own_property(&mut self, obj: ObjectId, key: impl Into<PropertyKey>, desc: &PropertyDescriptor, throw: bool) -> Result<bool, JSError> {
        let key = key.into();
        self.validate_descriptor_for_define(desc)?;

        // Always a fresh read: a getter may have redefined this property since the last call.
        let current = self.get_own_property(obj, &key)?;
        let extensible = self.is_extensible(obj)?;

        let Some(current) = current else {
            if !extensible {
                return reject(&key, "object is not extensible", throw);
            }
            log::debug!("define_own_property: create {} on {} as {:?}", key, obj, desc);
            let prop = Property::from_descriptor(desc);
            self.obj_mut(obj)?.properties.insert(key, prop);
            return Ok(true);
        };

        if desc.is_empty() || fields_agree(desc, &current) {
            return Ok(true);
        }

        let configurable = current.configurable.unwrap_or(false);
        if !configurable {
            if desc.configurable == Some(true) {
                return reject(&key, "property is not configurable", throw);
            }
            if let Some(enumerable) = desc.enumerable
                && Some(enumerable) != current.enumerable
            {
                return reject(&key, "cannot change enumerable of a non-configurable property", throw);
            }
        }

        let mut convert = false;
        if desc.is_generic_descriptor() {
            // no further validation
        } else if current.is_data_descriptor() != desc.is_data_descriptor() {
            if !configurable {
                return reject(&key, "cannot change the kind of a non-configurable property", throw);
            }
            convert = true;
        } else if current.is_data_descriptor() {
            if !configurable && current.writable == Some(false) {
                if desc.writable == Some(true) {
                    return reject(&key, "cannot make a non-writable property writable", throw);
                }
                if let Some(value) = &desc.value
                    && !current.value.as_ref().is_some_and(|cur| same_value(value, cur))
                {
                    return reject(&key, "cannot change the value of a non-writable property", throw);
                }
            }
        } else if !configurable {
            if let Some(set) = &desc.set
                && !current.set.as_ref().is_some_and(|cur| same_value(set, cur))
            {
                return reject(&key, "cannot change the setter of a non-configurable property", throw);
            }
            if let Some(get) = &desc.get
                && !current.get.as_ref().is_some_and(|cur| same_value(get, cur))
            {
                return reject(&key, "cannot change the getter of a non-configurable property", throw);
            }
        }

        let data = self.obj_mut(obj)?;
        let Some(prop) = data.properties.get_mut(&key) else {
            return Err(raise_type_error!(format!("Property '{}' vanished during definition", key)));
        };
        if convert {
            log::debug!("define_own_property: convert {} on {} to the opposite kind", key, obj);
            prop.convert_kind();
        }
        prop.apply(desc);
        Ok(true)
    }
}
