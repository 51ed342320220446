//! Macros for declaring handled-error families.

/// Declare an error enum that belongs to the handled-error family.
///
/// Generates the enum with `thiserror`-derived `Display` (so `thiserror`
/// must be in the caller's dependency graph) and the
/// [`Handled`](crate::core::Handled) membership impl in one block. Variants
/// may be unit, tuple, or struct shaped; `#[error]` attributes pass through
/// unchanged.
///
/// # Example
///
/// ```
/// use resolute::handled_error;
///
/// handled_error! {
///     pub enum ApiError {
///         #[error("Cannot divide by zero")]
///         DivisionByZero,
///         #[error("HTTP {code}: {message}")]
///         Status { code: u16, message: String },
///         #[error("invalid payload: {0}")]
///         InvalidPayload(String),
///     }
/// }
///
/// let error = ApiError::Status {
///     code: 429,
///     message: "rate limited".to_string(),
/// };
/// assert_eq!(error.to_string(), "HTTP 429: rate limited");
/// ```
#[macro_export]
macro_rules! handled_error {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple_ty:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, thiserror::Error)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple_ty),* ) )?
                $( { $($field : $field_ty),* } )?
            ),*
        }

        impl $crate::core::Handled for $name {}
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Handled, Outcome};
    use crate::wrap::wrap;
    use crate::wrap::Wrapped;

    handled_error! {
        enum StoreError {
            #[error("key not found: {0}")]
            NotFound(String),
            #[error("write conflict on {key} at version {version}")]
            Conflict { key: String, version: u64 },
            #[error("store is read-only")]
            ReadOnly,
        }
    }

    fn assert_handled<E: Handled>() {}

    #[test]
    fn handled_error_macro_generates_membership() {
        assert_handled::<StoreError>();
    }

    #[test]
    fn handled_error_macro_renders_all_variant_shapes() {
        assert_eq!(
            StoreError::NotFound("users/42".to_string()).to_string(),
            "key not found: users/42"
        );
        assert_eq!(
            StoreError::Conflict {
                key: "users/42".to_string(),
                version: 7,
            }
            .to_string(),
            "write conflict on users/42 at version 7"
        );
        assert_eq!(StoreError::ReadOnly.to_string(), "store is read-only");
    }

    #[test]
    fn handled_error_macro_supports_visibility() {
        handled_error! {
            pub enum PublicError {
                #[error("nope")]
                Nope,
            }
        }

        assert_handled::<PublicError>();
    }

    #[test]
    fn macro_declared_family_classifies_through_a_wrapper() {
        let wrapped: Wrapped<String, u64, StoreError> = wrap(|key: String| {
            Err(StoreError::Conflict { key, version: 2 }.raised())
        });

        let outcome = wrapped.call("users/42".to_string()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Failure(StoreError::Conflict {
                key: "users/42".to_string(),
                version: 2,
            })
        );
    }
}
