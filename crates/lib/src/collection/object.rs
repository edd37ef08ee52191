//! Opaque object values.
//!
//! Objects are stored behind shared handles ([`ObjectRef`]). Copying a
//! [`Value`](super::Value) copies the handle; deep-copying a collection asks the
//! object for a fresh instance through [`Object::clone_object`].

use std::{fmt, rc::Rc};

use super::Collection;

/// An object that can be stored in a collection.
///
/// # Examples
///
/// ```
/// use collection::{Collection, Object, ObjectRef};
///
/// #[derive(Debug, Clone)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Object for Point {
///     fn class_name(&self) -> &str {
///         "Point"
///     }
///
///     fn properties(&self) -> Collection {
///         Collection::from_pairs([("x", self.x), ("y", self.y)])
///     }
///
///     fn clone_object(&self) -> ObjectRef {
///         ObjectRef::new(self.clone())
///     }
/// }
///
/// let point = ObjectRef::new(Point { x: 1, y: 2 });
/// assert_eq!(point.class_name(), "Point");
/// assert_eq!(point.properties().len(), 2);
/// ```
pub trait Object: fmt::Debug {
    /// Name of the object's type, used for loose comparisons.
    fn class_name(&self) -> &str;

    /// Exports the object's public state as an array.
    fn properties(&self) -> Collection;

    /// Produces an independent copy of this object.
    fn clone_object(&self) -> ObjectRef;

    /// Loose equality with another object.
    ///
    /// Two objects are loosely equal when they share a class and their properties
    /// are loosely equal.
    fn loose_eq(&self, other: &dyn Object) -> bool {
        self.class_name() == other.class_name()
            && super::value::loose_eq_entries(&self.properties(), &other.properties())
    }
}

/// Shared handle to an [`Object`].
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn Object>);

impl ObjectRef {
    /// Wraps an object in a new handle.
    pub fn new(object: impl Object + 'static) -> Self {
        Self(Rc::new(object))
    }

    /// Returns true if both handles point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Copies the object through its own copy protocol.
    pub fn deep_clone(&self) -> ObjectRef {
        self.0.clone_object()
    }

    /// Borrows the underlying object.
    pub fn as_object(&self) -> &dyn Object {
        self.0.as_ref()
    }

    /// Name of the object's type.
    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    /// The object's public state as an array.
    pub fn properties(&self) -> Collection {
        self.0.properties()
    }

    /// Loose equality: same handle, or the object's own [`Object::loose_eq`].
    pub fn loose_eq(&self, other: &ObjectRef) -> bool {
        self.ptr_eq(other) || self.0.loose_eq(other.as_object())
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Object + 'static> From<Rc<T>> for ObjectRef {
    fn from(value: Rc<T>) -> Self {
        Self(value)
    }
}
