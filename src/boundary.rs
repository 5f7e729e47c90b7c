//! Render-path fault guard.
//!
//! Catch-all around snapshot assembly: an unexpected panic below the IPC
//! surface becomes an error string the frontend renders as a static
//! "Something went wrong" fallback instead of a dead page. One-shot by
//! design — validation errors are handled by `validation`/`form` and
//! never arrive here.

use std::panic::{catch_unwind, AssertUnwindSafe};

pub const FALLBACK_PREFIX: &str = "Something went wrong";

/// Run `f`, converting a panic into a fallback message with the fault's
/// description. `label` names the guarded call site for the log.
pub fn guard<T>(label: &str, f: impl FnOnce() -> T) -> Result<T, String> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown fault".to_string()
        };
        tracing::error!(label, %message, "unexpected fault caught at boundary");
        format!("{FALLBACK_PREFIX}: {message}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_values_through_untouched() {
        let result = guard("test", || 7);
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn converts_str_panic_into_fallback_message() {
        let result: Result<(), String> = guard("test", || panic!("renderer exploded"));
        assert_eq!(result.unwrap_err(), "Something went wrong: renderer exploded");
    }

    #[test]
    fn converts_formatted_panic_into_fallback_message() {
        let code = 42;
        let result: Result<(), String> = guard("test", || panic!("fault {code}"));
        assert_eq!(result.unwrap_err(), "Something went wrong: fault 42");
    }
}
