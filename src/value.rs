//! Runtime values and the type tags used to validate them on insertion.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::mem::discriminant;
use std::rc::Rc;

/// The field set of a runtime object value.
pub type ObjectFields = BTreeMap<String, Value>;

/// A reference to a callable, invokable with a slice of arguments.
///
/// Two callables are equal only if they reference the same underlying
/// function (identity, not behavior).
///
/// # Examples
///
/// ```
/// use tagdict::Callable;
/// use tagdict::Value;
///
/// let double = Callable::new("double", |args: &[Value]| {
///     let n = args.first().and_then(Value::as_int).unwrap_or(0);
///     Value::from(n * 2)
/// });
/// assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
/// ```
#[derive(Clone)]
pub struct Callable {
    name: String,
    func: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Callable {
    /// Wraps a function under a display name.
    pub fn new(name: impl Into<String>, func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Callable {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// The display name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the referenced function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<callable {}>", self.name)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl Eq for Callable {}

impl Hash for Callable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.func) as *const () as usize).hash(state);
    }
}

/// A dynamically typed value stored in a [`Dictionary`](crate::Dictionary).
///
/// Equality is strict: two values are equal only when they have the same
/// runtime type and the same content. There is no coercion, so
/// `Value::Int(1)` never equals `Value::Float(1.0)`.
///
/// Floats compare and hash by bit pattern, so `NaN` equals `NaN` and
/// `0.0` differs from `-0.0`. Objects and callables compare by identity.
#[derive(Debug, Clone)]
pub enum Value {
    /// An owned UTF-8 string.
    String(String),
    /// A signed 64-bit integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A shared object with named fields; identity semantics.
    Object(Rc<ObjectFields>),
    /// The null value.
    Null,
    /// A reference to a callable; identity semantics.
    Callable(Callable),
    /// An opaque resource handle.
    Resource(u64),
}

impl Value {
    /// The [`TypeTag`] describing this value's runtime type.
    ///
    /// Never returns [`TypeTag::Mixed`] or [`TypeTag::Undefined`]; those two
    /// tags exist only on the constraint side.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Int(_) => TypeTag::Integer,
            Value::Float(_) => TypeTag::Float,
            Value::Bool(_) => TypeTag::Bool,
            Value::Object(_) => TypeTag::Object,
            Value::Null => TypeTag::Null,
            Value::Callable(_) => TypeTag::Callable,
            Value::Resource(_) => TypeTag::Resource,
        }
    }

    /// A lowercase name for this value's runtime type.
    pub fn type_name(&self) -> &'static str {
        self.type_tag().name()
    }

    /// Borrows the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float content, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True iff this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Null, Value::Null) => true,
            (Value::Callable(a), Value::Callable(b)) => a == b,
            (Value::Resource(a), Value::Resource(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Value::String(s) => s.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Object(o) => (Rc::as_ptr(o) as usize).hash(state),
            Value::Null => {}
            Value::Callable(c) => c.hash(state),
            Value::Resource(id) => id.hash(state),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

impl From<ObjectFields> for Value {
    fn from(fields: ObjectFields) -> Self {
        Value::Object(Rc::new(fields))
    }
}

/// The closed set of runtime type categories a [`Dictionary`](crate::Dictionary)
/// can constrain its keys and values to.
///
/// `Mixed` is a wildcard matching every value. `Undefined` is a sentinel
/// matching no value; it never describes a real value's type.
///
/// # Examples
///
/// ```
/// use tagdict::TypeTag;
/// use tagdict::Value;
///
/// assert!(TypeTag::String.matches(&Value::from("hi")));
/// assert!(!TypeTag::String.matches(&Value::from(1)));
/// assert!(TypeTag::Mixed.matches(&Value::Null));
/// assert!(!TypeTag::Undefined.matches(&Value::Null));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// UTF-8 strings.
    String,
    /// Signed 64-bit integers.
    Integer,
    /// 64-bit floats.
    Float,
    /// Booleans.
    Bool,
    /// Objects.
    Object,
    /// The null value.
    Null,
    /// Callable references.
    Callable,
    /// Resource handles.
    Resource,
    /// Wildcard: matches any value.
    Mixed,
    /// Sentinel: matches no value.
    Undefined,
}

impl TypeTag {
    /// True iff `value` satisfies this tag: either the tag is `Mixed`, or the
    /// value's runtime type is exactly this tag.
    pub fn matches(self, value: &Value) -> bool {
        self == TypeTag::Mixed || value.type_tag() == self
    }

    /// A lowercase name for this tag.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::Object => "object",
            TypeTag::Null => "null",
            TypeTag::Callable => "callable",
            TypeTag::Resource => "resource",
            TypeTag::Mixed => "mixed",
            TypeTag::Undefined => "undefined",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
