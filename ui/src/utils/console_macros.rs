/// Macros for properly formatted console logging.
///
/// In the browser these wrap gloo_console and prefix each line with a
/// `js_sys::Date` timestamp. Off wasm32 (native unit tests, tooling) there is
/// no JS console to talk to, so the same call sites go through `tracing`.
///
/// All macros take a format string literal followed by optional arguments.
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)+)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!($($arg)+);
        }
    }};
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)+)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::trace!($($arg)+);
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)+)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!($($arg)+);
        }
    }};
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)+)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::error!($($arg)+);
        }
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)+)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::debug!($($arg)+);
        }
    }};
}
