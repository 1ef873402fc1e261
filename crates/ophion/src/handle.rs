//! Owned RAII wrapper over a raw foreign reference.

use std::fmt;

use crate::{interp::Interpreter, value::HostValue};

/// A uniquely-owned reference to an object in the foreign interpreter's heap.
///
/// Adopting a raw token with [`Handle::from_owned`] takes responsibility for
/// exactly one reference; dropping the handle decrements it. Because the
/// binding exposes no increment, handles are not `Clone` — every reference
/// acquired during translation has exactly one owner and is released exactly
/// once, on success and failure paths alike.
pub struct Handle<'a, I: Interpreter> {
    interp: &'a I,
    raw: I::Raw,
}

impl<'a, I: Interpreter> Handle<'a, I> {
    /// Adopts ownership of one reference held by `raw`.
    ///
    /// Null tokens are fine: the drop-time decrement is a no-op on null.
    pub fn from_owned(interp: &'a I, raw: I::Raw) -> Self {
        Self { interp, raw }
    }

    /// Whether this handle wraps the null sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.interp.is_null(self.raw)
    }

    /// The raw token. Copying it does not transfer ownership.
    #[must_use]
    pub fn raw(&self) -> I::Raw {
        self.raw
    }

    /// Looks up an attribute, adopting the new reference.
    pub fn get_attr(&self, name: &str) -> Result<Self, I::CallError> {
        let raw = self.interp.get_attr(self.raw, name)?;
        Ok(Self::from_owned(self.interp, raw))
    }

    /// Invokes this object with zero arguments, adopting the result.
    ///
    /// The empty argument tuple is itself an owned foreign reference; it is
    /// released when this call returns, whether or not the invocation raised.
    pub fn call0(&self) -> Result<Self, I::CallError> {
        let args = Self::from_owned(self.interp, self.interp.empty_tuple()?);
        let out = self.interp.call(self.raw, args.raw)?;
        Ok(Self::from_owned(self.interp, out))
    }

    /// Converts the referenced object to a host value.
    pub fn to_host(&self) -> Result<HostValue, I::CallError> {
        self.interp.to_host(self.raw)
    }
}

impl<I: Interpreter> Drop for Handle<'_, I> {
    fn drop(&mut self) {
        // dec_ref is a no-op on null, so no guard is needed here.
        self.interp.dec_ref(self.raw);
    }
}

impl<I: Interpreter> fmt::Debug for Handle<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("raw", &self.raw).finish()
    }
}
