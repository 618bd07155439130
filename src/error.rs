use crate::core::Value;

/// The kinds of failure an object-model operation can report.
#[derive(thiserror::Error, Debug, Clone)]
pub enum JSErrorKind {
    #[error("TypeError: {message}")]
    TypeError { message: String },

    #[error("RangeError: {message}")]
    RangeError { message: String },

    /// A value thrown by host code running inside a getter, setter or method.
    #[error("Thrown value: {value:?}")]
    Throw { value: Value },

    #[error("Invalid object handle #{index}")]
    InvalidHandle { index: u32 },
}

#[derive(thiserror::Error, Debug, Clone)]
#[error("{kind}")]
pub struct JSError {
    kind: Box<JSErrorKind>,
    file: &'static str,
    line: u32,
    method: &'static str,
}

impl JSError {
    pub fn new(kind: JSErrorKind, file: &'static str, line: u32, method: &'static str) -> Self {
        JSError {
            kind: Box::new(kind),
            file,
            line,
            method,
        }
    }

    /// Wrap a host value so it propagates through the engine unchanged.
    pub fn throw(value: Value) -> Self {
        crate::make_js_error!(JSErrorKind::Throw { value })
    }

    pub fn kind(&self) -> &JSErrorKind {
        &self.kind
    }

    pub fn is_type_error(&self) -> bool {
        matches!(*self.kind, JSErrorKind::TypeError { .. })
    }

    pub fn thrown_value(&self) -> Option<&Value> {
        match &*self.kind {
            JSErrorKind::Throw { value } => Some(value),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match &*self.kind {
            JSErrorKind::TypeError { message } | JSErrorKind::RangeError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Rust source location (`file`, `line`, `function`) that raised this error.
    pub fn location(&self) -> (&'static str, u32, &'static str) {
        (self.file, self.line, self.method)
    }
}

// Macro that constructs a JSError using the compile-time caller location.
// Using a macro (rather than a function) ensures `file!()` and `line!()`
// expand to the site where the macro is invoked.
#[macro_export]
macro_rules! make_js_error {
    ($kind:expr) => {
        $crate::JSError::new($kind, file!(), line!(), $crate::function_name!())
    };
}

#[macro_export]
macro_rules! raise_type_error {
    ($msg:expr) => {
        $crate::make_js_error!($crate::JSErrorKind::TypeError { message: $msg.to_string() })
    };
}

#[macro_export]
macro_rules! raise_range_error {
    ($msg:expr) => {
        $crate::make_js_error!($crate::JSErrorKind::RangeError { message: $msg.to_string() })
    };
}

#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // remove the trailing "::f"
        &name[..name.len() - 3]
    }};
}
