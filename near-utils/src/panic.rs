use near_sdk::FunctionError;

/// Abort the current receipt with the error of a [`FunctionError`].
pub trait UnwrapOrPanic<T> {
    fn unwrap_or_panic(self) -> T;
}

impl<T, E> UnwrapOrPanic<T> for Result<T, E>
where
    E: FunctionError,
{
    #[inline]
    #[track_caller]
    fn unwrap_or_panic(self) -> T {
        self.unwrap_or_else(|err| err.panic())
    }
}
