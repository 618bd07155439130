use crate::core::{Callable, JSObjectData, NativeFn, ObjectClass, ObjectId, PropertyDescriptor, PropertyKey, Value};
use crate::{JSError, JSErrorKind, make_js_error, raise_type_error};
use std::collections::HashSet;
use std::rc::Rc;

/// Default bound on prototype-chain walks before a chain is treated as pathological.
pub const MAX_PROTOTYPE_CHAIN: usize = 10_000;

/// Runtime configuration of a [`Realm`].
#[derive(Clone, Debug)]
pub struct RealmOptions {
    pub(crate) max_prototype_chain: usize,
    pub(crate) install_builtins: bool,
}

impl Default for RealmOptions {
    fn default() -> Self {
        RealmOptions {
            max_prototype_chain: MAX_PROTOTYPE_CHAIN,
            install_builtins: true,
        }
    }
}

impl RealmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of objects visited by one prototype-chain walk.
    pub fn max_prototype_chain(mut self, depth: usize) -> Self {
        self.max_prototype_chain = depth.max(1);
        self
    }

    /// Whether `toString`/`valueOf` are installed on the intrinsic prototypes.
    /// Without them the prototypes still exist but are empty.
    pub fn install_builtins(mut self, install: bool) -> Self {
        self.install_builtins = install;
        self
    }
}

/// The prototype objects every realm starts with.
#[derive(Clone, Copy, Debug)]
pub struct Intrinsics {
    pub object_prototype: ObjectId,
    pub function_prototype: ObjectId,
    pub boolean_prototype: ObjectId,
    pub number_prototype: ObjectId,
    pub string_prototype: ObjectId,
    pub date_prototype: ObjectId,
}

/// One simulated environment: the object arena, the intrinsic prototypes
/// and the registry of named globals. Dropping the realm tears it down.
pub struct Realm {
    objects: Vec<JSObjectData>,
    intrinsics: Intrinsics,
    globals: ObjectId,
    options: RealmOptions,
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl Realm {
    pub fn new() -> Self {
        Self::with_options(RealmOptions::default())
    }

    pub fn with_options(options: RealmOptions) -> Self {
        let mut objects = Vec::new();
        let mut alloc = |data: JSObjectData| {
            objects.push(data);
            ObjectId::new((objects.len() - 1) as u32)
        };
        let object_prototype = alloc(JSObjectData::new(None));
        let proto = Some(object_prototype);
        let intrinsics = Intrinsics {
            object_prototype,
            function_prototype: alloc(JSObjectData::new(proto).with_class(ObjectClass::Function)),
            boolean_prototype: alloc(JSObjectData::new(proto).with_class(ObjectClass::Boolean).with_primitive_value(Value::Boolean(false))),
            number_prototype: alloc(JSObjectData::new(proto).with_class(ObjectClass::Number).with_primitive_value(Value::Number(0.0))),
            string_prototype: alloc(JSObjectData::new(proto).with_class(ObjectClass::String).with_primitive_value(Value::String(Vec::new()))),
            date_prototype: alloc(JSObjectData::new(proto).with_class(ObjectClass::Date).with_primitive_value(Value::Number(f64::NAN))),
        };
        let globals = alloc(JSObjectData::new(proto));

        let mut realm = Realm {
            objects,
            intrinsics,
            globals,
            options,
        };
        if realm.options.install_builtins
            && let Err(e) = realm.initialize_builtins()
        {
            log::error!("failed to install built-in prototype methods: {e}");
        }
        realm
    }

    fn initialize_builtins(&mut self) -> Result<(), JSError> {
        crate::js_object::initialize_object_prototype(self)?;
        crate::js_boolean::initialize_boolean_prototype(self)?;
        crate::js_number::initialize_number_prototype(self)?;
        crate::js_string::initialize_string_prototype(self)?;
        crate::js_date::initialize_date_prototype(self)?;
        Ok(())
    }

    pub fn options(&self) -> &RealmOptions {
        &self.options
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    pub(crate) fn alloc(&mut self, data: JSObjectData) -> ObjectId {
        let id = ObjectId::new(self.objects.len() as u32);
        self.objects.push(data);
        log::trace!("alloc object {}", id);
        id
    }

    pub(crate) fn obj(&self, id: ObjectId) -> Result<&JSObjectData, JSError> {
        self.objects
            .get(id.index() as usize)
            .ok_or_else(|| make_js_error!(JSErrorKind::InvalidHandle { index: id.index() }))
    }

    pub(crate) fn obj_mut(&mut self, id: ObjectId) -> Result<&mut JSObjectData, JSError> {
        self.objects
            .get_mut(id.index() as usize)
            .ok_or_else(|| make_js_error!(JSErrorKind::InvalidHandle { index: id.index() }))
    }

    /// Read-only view of an object's internal state.
    pub fn object(&self, id: ObjectId) -> Result<&JSObjectData, JSError> {
        self.obj(id)
    }

    /// A fresh, empty, extensible ordinary object inheriting from `Object.prototype`.
    pub fn new_object(&mut self) -> ObjectId {
        self.alloc(JSObjectData::new(Some(self.intrinsics.object_prototype)))
    }

    pub fn new_object_with_proto(&mut self, prototype: Option<ObjectId>) -> ObjectId {
        self.alloc(JSObjectData::new(prototype))
    }

    /// Allocate a function object around `f`.
    pub fn new_function<F>(&mut self, name: &str, length: u32, f: F) -> Result<ObjectId, JSError>
    where
        F: Fn(&mut Realm, &Value, &[Value]) -> Result<Value, JSError> + 'static,
    {
        self.new_function_from_callable(name, length, Rc::new(f))
    }

    /// Allocate a function object around a host-provided [`Callable`].
    pub fn new_function_from_callable(&mut self, name: &str, length: u32, callable: Rc<dyn Callable>) -> Result<ObjectId, JSError> {
        let data = JSObjectData::new(Some(self.intrinsics.function_prototype))
            .with_class(ObjectClass::Function)
            .with_callable(callable);
        let func = self.alloc(data);
        self.define_own_property(func, "length", &PropertyDescriptor::new_data(length.into(), false, false, false), true)?;
        self.define_own_property(func, "name", &PropertyDescriptor::new_data(name.into(), false, false, false), true)?;
        Ok(func)
    }

    /// Create a date-like object holding `time_value` (milliseconds since the epoch).
    pub fn new_date(&mut self, time_value: f64) -> ObjectId {
        let data = JSObjectData::new(Some(self.intrinsics.date_prototype))
            .with_class(ObjectClass::Date)
            .with_primitive_value(Value::Number(time_value));
        self.alloc(data)
    }

    /// Install a built-in method as `{writable: true, enumerable: false, configurable: true}`.
    pub(crate) fn define_builtin_method(&mut self, target: ObjectId, name: &str, length: u32, f: NativeFn) -> Result<(), JSError> {
        let func = self.new_function(name, length, f)?;
        let desc = PropertyDescriptor::new_data(Value::Object(func), true, false, true);
        self.define_own_property(target, name, &desc, true)?;
        Ok(())
    }

    pub fn prototype_of(&self, id: ObjectId) -> Result<Option<ObjectId>, JSError> {
        Ok(self.obj(id)?.prototype)
    }

    /// Set `[[Prototype]]`, refusing any link that would close a cycle.
    pub fn set_prototype(&mut self, id: ObjectId, prototype: Option<ObjectId>) -> Result<(), JSError> {
        self.obj(id)?;
        let mut current = prototype;
        let mut steps = 0usize;
        let mut visited = HashSet::new();
        while let Some(p) = current {
            if p == id || !visited.insert(p) {
                return Err(raise_type_error!(format!("Cyclic prototype value for object {}", id)));
            }
            steps += 1;
            if steps > self.options.max_prototype_chain {
                return Err(raise_type_error!("Prototype chain too deep"));
            }
            current = self.obj(p)?.prototype;
        }
        self.obj_mut(id)?.prototype = prototype;
        Ok(())
    }

    /// Set `[[Prototype]]` without cycle checks. Lookups on a cyclic chain
    /// fail with a TypeError instead of looping.
    pub fn set_prototype_unchecked(&mut self, id: ObjectId, prototype: Option<ObjectId>) -> Result<(), JSError> {
        if let Some(p) = prototype {
            self.obj(p)?;
        }
        self.obj_mut(id)?.prototype = prototype;
        Ok(())
    }

    pub fn is_extensible(&self, id: ObjectId) -> Result<bool, JSError> {
        Ok(self.obj(id)?.is_extensible())
    }

    pub fn prevent_extensions(&mut self, id: ObjectId) -> Result<(), JSError> {
        self.obj_mut(id)?.prevent_extensions();
        Ok(())
    }

    pub fn class_of(&self, id: ObjectId) -> Result<ObjectClass, JSError> {
        Ok(self.obj(id)?.class)
    }

    /// Own property keys in insertion order.
    pub fn own_property_keys(&self, id: ObjectId) -> Result<Vec<PropertyKey>, JSError> {
        Ok(self.obj(id)?.keys().cloned().collect())
    }

    /// IsCallable: an object that carries a `[[Call]]` slot.
    pub fn is_callable(&self, value: &Value) -> bool {
        match value {
            Value::Object(id) => self.obj(*id).is_ok_and(|o| o.get_callable().is_some()),
            _ => false,
        }
    }

    /// Invoke `f` with `this` and `args`.
    pub fn call(&mut self, f: &Value, this: &Value, args: &[Value]) -> Result<Value, JSError> {
        let callable = match f {
            Value::Object(id) => self.obj(*id)?.get_callable(),
            _ => None,
        };
        let Some(callable) = callable else {
            return Err(raise_type_error!(format!("{:?} is not a function", f)));
        };
        // The slot was cloned out, so the callee is free to re-enter the realm.
        callable.call(self, this, args)
    }

    /// `[[Construct]]`: allocate the receiver from `F.prototype`, run `F`,
    /// and prefer an object result over the receiver.
    pub fn construct(&mut self, f: &Value, args: &[Value]) -> Result<Value, JSError> {
        let Some(func) = f.as_object().filter(|_| self.is_callable(f)) else {
            return Err(raise_type_error!(format!("{:?} is not a constructor", f)));
        };
        let proto = match self.get(func, "prototype")? {
            Value::Object(p) => p,
            _ => self.intrinsics.object_prototype,
        };
        let obj = self.new_object_with_proto(Some(proto));
        let result = self.call(f, &Value::Object(obj), args)?;
        if let Value::Object(_) = result {
            return Ok(result);
        }
        Ok(Value::Object(obj))
    }

    /// The registry object holding named globals.
    pub fn globals(&self) -> ObjectId {
        self.globals
    }

    /// Register `value` under `name` as `{writable: true, enumerable: false, configurable: true}`.
    pub fn register_global(&mut self, name: &str, value: Value) -> Result<(), JSError> {
        let desc = PropertyDescriptor::new_data(value, true, false, true);
        self.define_own_property(self.globals, name, &desc, true)?;
        Ok(())
    }

    pub fn global(&mut self, name: &str) -> Result<Value, JSError> {
        self.get(self.globals, name)
    }
}
