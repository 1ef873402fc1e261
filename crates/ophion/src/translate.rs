//! The fetch-and-translate protocol.
//!
//! Turns the interpreter's pending exception state into a [`ForeignError`]:
//! fetch the (type, value, traceback) triple, render the value through its
//! `__str__` protocol, read the type's `__name__`, release every acquired
//! reference, clear the error flag, build the host error. The three stages
//! mirror the structure of the protocol: a boundary-crossing extractor, a
//! renderer, and the orchestrating factory.

use crate::{error::ForeignError, handle::Handle, interp::Interpreter};

/// Conventional string-conversion attribute on the exception value.
const STR_ATTR: &str = "__str__";
/// Name attribute on the exception type.
const NAME_ATTR: &str = "__name__";

/// The fetched exception state, each part an owned (possibly null) handle.
///
/// Ephemeral: lives only for the duration of one translation. The traceback
/// is never inspected, only released.
struct ErrorTriple<'a, I: Interpreter> {
    exc_type: Handle<'a, I>,
    value: Handle<'a, I>,
    traceback: Handle<'a, I>,
}

/// Extractor: one atomic fetch-and-clear against the error channel.
///
/// Ownership of up to three references transfers to the returned handles. No
/// inspection or conversion happens here. With no pending error this yields
/// three null handles, which is well-defined (their release is a no-op).
fn fetch_triple<I: Interpreter>(interp: &I) -> ErrorTriple<'_, I> {
    let (exc_type, value, traceback) = interp.error_fetch();
    ErrorTriple {
        exc_type: Handle::from_owned(interp, exc_type),
        value: Handle::from_owned(interp, value),
        traceback: Handle::from_owned(interp, traceback),
    }
}

/// Renderer: converts the exception value to a host string via `__str__`.
///
/// A null value (a bare exception class was raised, with no instance) yields
/// `None`. The `__str__` invocation itself can raise in foreign code; that
/// failure propagates unmodified, and the intermediate references (bound
/// method, argument tuple, result) are released on both paths.
fn render_message<I: Interpreter>(value: &Handle<'_, I>) -> Result<Option<String>, I::CallError> {
    if value.is_null() {
        return Ok(None);
    }
    let str_method = value.get_attr(STR_ATTR)?;
    let rendered = str_method.call0()?;
    Ok(Some(rendered.to_host()?.into_string()))
}

/// Factory: drives extraction and rendering, releases every reference, clears
/// the error flag, and builds the [`ForeignError`].
///
/// Returns `Ok(None)` without fetching when no error is pending. On the
/// success path the guarantee is: zero foreign references acquired by this
/// call remain outstanding, and the interpreter's error flag is clear. If a
/// foreign call made here (rendering, name lookup) itself raises, that
/// failure propagates as `Err` — never wrapped into another `ForeignError`,
/// which would recurse into this same machinery — with all acquired
/// references still released; the newly raised error is left pending for the
/// caller to observe.
pub(crate) fn translate_current_error<I: Interpreter>(
    interp: &I,
) -> Result<Option<ForeignError>, I::CallError> {
    if !interp.error_pending() {
        return Ok(None);
    }

    let ErrorTriple {
        exc_type,
        value,
        traceback,
    } = fetch_triple(interp);

    // Rendering needs the value handle's invocation capability, so it must
    // precede the release of the value.
    let message = render_message(&value)?;
    drop(value);
    drop(traceback);

    let name = exc_type.get_attr(NAME_ATTR)?;
    let type_name = name.to_host()?.into_string();
    drop(name);
    drop(exc_type);

    // Most runtimes clear the flag as part of the fetch; the explicit clear
    // is idempotent and covers variants where fetch does not.
    interp.error_clear();

    Ok(Some(ForeignError::new(type_name, message)))
}
