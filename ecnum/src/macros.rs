/// Checks a caller contract.
///
/// Active with `debug_assertions` or the `verify` feature, compiled out otherwise.
macro_rules! verify_check {
    ($cond:expr $(,)?) => {
        if cfg!(any(debug_assertions, feature = "verify")) {
            assert!($cond);
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "verify")) {
            assert!($cond, $($arg)+);
        }
    };
}
