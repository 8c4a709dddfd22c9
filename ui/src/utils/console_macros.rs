/// Browser console logging with a millisecond timestamp prefix.
///
/// These wrap gloo_console and format eagerly so only plain strings cross into
/// JS. They are for component code running in the browser; services log
/// through `tracing`.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_at {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__console_at!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => { $crate::__console_at!(debug, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__console_at!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::__console_at!(error, $($arg)*) };
}
