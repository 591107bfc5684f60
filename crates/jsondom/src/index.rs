use std::ops;

use crate::{Value, ValueKind};

/// A type that can address an element of a [`Value`]: `usize` for arrays, strings for objects.
///
/// This trait is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value>;

    /// Panic with a message describing why `value` can't be indexed by `self`.
    #[doc(hidden)]
    fn invalid(&self, value: &Value) -> !;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_array()?.get(*self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        value.as_array_mut()?.get_mut(*self)
    }

    #[track_caller]
    fn invalid(&self, value: &Value) -> ! {
        match value {
            Value::Array(array) => panic!(
                "index {self} is out of bounds for a JSON array of length {}",
                array.len()
            ),
            other => other.kind_mismatch(ValueKind::Array),
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_object()?.get(self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        value.as_object_mut()?.get_mut(self)
    }

    #[track_caller]
    fn invalid(&self, value: &Value) -> ! {
        match value {
            Value::Object(_) => panic!("key {self:?} is missing from a JSON object"),
            other => other.kind_mismatch(ValueKind::Object),
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }

    #[track_caller]
    fn invalid(&self, value: &Value) -> ! {
        self.as_str().invalid(value)
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(value)
    }

    #[track_caller]
    fn invalid(&self, value: &Value) -> ! {
        (**self).invalid(value)
    }
}

#[allow(unreachable_pub)]
mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

impl Value {
    /// Element at `index` of an array, or entry under `index` of an object.
    ///
    /// # Panics
    ///
    /// If the value is not of the kind `index` addresses, the array index is out of bounds or
    /// the object key is missing.
    #[must_use]
    #[track_caller]
    pub fn at<I: Index>(&self, index: I) -> &Value {
        match index.index_into(self) {
            Some(value) => value,
            None => index.invalid(self),
        }
    }

    /// Mutable form of [`Value::at`].
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Value::at`].
    #[track_caller]
    pub fn at_mut<I: Index>(&mut self, index: I) -> &mut Value {
        // NOTE: Returning the mutable borrow from an `if let` and panicking with `self` in the
        // fallthrough is rejected by the current borrow checker (NLL problem case #3), hence the
        // shared lookup first.
        if index.index_into(self).is_none() {
            index.invalid(self)
        }
        match index.index_into_mut(self) {
            Some(value) => value,
            None => unreachable!("Checked above"),
        }
    }

    /// Non-panicking form of [`Value::at`].
    #[must_use]
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Non-panicking form of [`Value::at_mut`].
    pub fn get_mut<I: Index>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }
}

impl<I: Index> ops::Index<I> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: I) -> &Value {
        self.at(index)
    }
}

impl<I: Index> ops::IndexMut<I> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Value {
        self.at_mut(index)
    }
}
