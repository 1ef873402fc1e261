//! The embedding session that owns the interpreter binding.
//!
//! The interpreter's error flag is process-wide mutable state; rather than
//! reaching it through ambient globals, every operation goes through a
//! [`Session`] that owns the binding and is passed around explicitly. One
//! session per interpreter instance, accessed from one execution context at a
//! time — the same contract that governs all other foreign calls.

use crate::{error::ForeignError, interp::Interpreter, translate::translate_current_error};

/// An embedding session wrapping one interpreter binding.
#[derive(Debug)]
pub struct Session<I> {
    interp: I,
}

impl<I: Interpreter> Session<I> {
    /// Wraps a binding in a session.
    #[must_use]
    pub fn new(interp: I) -> Self {
        Self { interp }
    }

    /// Shared access to the underlying binding, for making foreign calls.
    #[must_use]
    pub fn interpreter(&self) -> &I {
        &self.interp
    }

    /// Consumes the session, returning the binding.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.interp
    }

    /// Whether the interpreter has a raised, not-yet-translated exception.
    #[must_use]
    pub fn error_pending(&self) -> bool {
        self.interp.error_pending()
    }

    /// Translates the pending foreign exception into a [`ForeignError`].
    ///
    /// Call this after a foreign call signalled failure. Returns `Ok(None)`
    /// — without touching the error channel further — when nothing is
    /// pending. See [`ForeignError`] for the shape of the result; failures of
    /// the foreign calls made during translation propagate as
    /// `Err(I::CallError)` unmodified.
    ///
    /// On success, every foreign reference acquired during translation has
    /// been released and the interpreter's error flag is clear.
    pub fn translate_current_error(&self) -> Result<Option<ForeignError>, I::CallError> {
        translate_current_error(&self.interp)
    }
}
