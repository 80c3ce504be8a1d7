use std::{cell::LazyCell, fmt::Display};

const DISABLE_STRING_CHECKS_ENV_VAR: &str = "TOKENSIG_SKIP_STRING_ERROR_CHECKS";

thread_local! {
    static DISABLE_STRING_CHECKS: LazyCell<bool> = LazyCell::new(
        || std::env::var(DISABLE_STRING_CHECKS_ENV_VAR).is_ok(),
    );
}

pub trait ResultAssertsExt {
    fn assert_err_contains(&self, to_contain: impl AsRef<str>);
}

impl<T, E> ResultAssertsExt for Result<T, E>
where
    E: Display,
{
    #[track_caller]
    fn assert_err_contains(&self, to_contain: impl AsRef<str>) {
        let to_contain = to_contain.as_ref();
        let Err(e) = self else {
            panic!("expected an error containing `{to_contain}`, got Ok");
        };
        if DISABLE_STRING_CHECKS.with(|b| **b) {
            eprintln!(
                "WARNING: `{DISABLE_STRING_CHECKS_ENV_VAR}` is set, not checking error strings"
            );
            return;
        }
        let error_string = e.to_string();
        assert!(
            error_string.contains(to_contain),
            "error `{error_string}` should have contained `{to_contain}`"
        );
    }
}
