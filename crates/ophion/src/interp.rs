//! The low-level binding seam to the embedded interpreter.
//!
//! Everything the bridge needs from the foreign runtime is expressed as one
//! trait so that the translation logic is independent of the concrete
//! embedding (a C-API binding in production, an instrumented fake in tests).
//! The trait covers two collaborator surfaces:
//!
//! - the **object protocol**: null checks, attribute lookup, invocation,
//!   host conversion, and reference-count decrement;
//! - the **error channel**: the interpreter's process-wide error flag and the
//!   atomic fetch-and-clear of the pending (type, value, traceback) triple.
//!
//! The error flag is shared mutable interpreter state with no internal
//! locking. The embedding contract is single-threaded access per interpreter
//! instance; implementations may use interior mutability, and this crate only
//! ever takes `&self`.

use crate::value::HostValue;

/// Binding to one embedded interpreter instance.
pub trait Interpreter {
    /// Raw object token, as handed out by the underlying runtime.
    ///
    /// A plain copyable token (pointer, slab index, ...) with a representable
    /// null. Copying a `Raw` never touches reference counts; ownership of
    /// references is tracked by [`Handle`](crate::Handle).
    type Raw: Copy + std::fmt::Debug;

    /// Failure raised by a foreign call made through this binding.
    ///
    /// When a call fails because foreign code raised, the new exception is
    /// left pending on the error channel and the call surfaces as this error.
    type CallError: std::error::Error;

    // --- object protocol ---

    /// Whether the token is the null sentinel.
    fn is_null(&self, raw: Self::Raw) -> bool;

    /// Looks up an attribute, returning a new owned reference.
    ///
    /// Fails if the attribute is absent or the receiver is null.
    fn get_attr(&self, obj: Self::Raw, name: &str) -> Result<Self::Raw, Self::CallError>;

    /// Builds the zero-element argument tuple, returning a new owned reference.
    fn empty_tuple(&self) -> Result<Self::Raw, Self::CallError>;

    /// Invokes a callable with an argument tuple, returning a new owned
    /// reference to the result.
    ///
    /// May raise in foreign code, in which case the new error is pending on
    /// the channel and `Err` is returned.
    fn call(&self, callee: Self::Raw, args: Self::Raw) -> Result<Self::Raw, Self::CallError>;

    /// Converts a foreign object to a host value.
    ///
    /// General marshalling entry point; the bridge only relies on the string
    /// case.
    fn to_host(&self, obj: Self::Raw) -> Result<HostValue, Self::CallError>;

    /// Decrements the reference count behind the token.
    ///
    /// Must be a no-op on the null sentinel.
    fn dec_ref(&self, raw: Self::Raw);

    // --- error channel ---

    /// Whether the interpreter has a raised, not-yet-fetched exception.
    fn error_pending(&self) -> bool;

    /// Atomically fetches and clears the pending error state.
    ///
    /// Transfers ownership of up to three references — exception type, value,
    /// traceback — to the caller. Any of the three may be null (a bare class
    /// raise carries no value); all three are null when nothing was pending.
    fn error_fetch(&self) -> (Self::Raw, Self::Raw, Self::Raw);

    /// Clears the error flag without fetching. Idempotent.
    fn error_clear(&self);
}
