// Macros for user-facing console output. Logs go through `tracing`; these
// are the lines a person running the tool is meant to read.

/// Icons are skipped when stdout is not a terminal or `NO_ICONS` is set.
pub fn icons_enabled() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal() && std::env::var_os("NO_ICONS").is_none()
}

#[macro_export]
macro_rules! ui_ok {
    ($($arg:tt)*) => {{
        println!("✓ {}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ui_info {
    ($($arg:tt)*) => {{
        eprintln!("ℹ {}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ui_warn {
    ($($arg:tt)*) => {{
        if $crate::ui::icons_enabled() {
            eprintln!("⚠ {}", format!($($arg)*));
        } else {
            eprintln!("{}", format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! ui_err {
    ($($arg:tt)*) => {{
        eprintln!("✗ {}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ui_out {
    ($($arg:tt)*) => {{
        println!($($arg)*);
    }};
}
