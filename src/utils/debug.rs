use once_cell::sync::Lazy;

/// Whether `GA4COST_DEBUG` was set when the process started
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("GA4COST_DEBUG").is_ok());

/// Print pricing diagnostics to stderr when `GA4COST_DEBUG` is set
///
/// Band selection, config loading, locale fallback and rejected form input
/// are traced through this macro. Stdout stays reserved for the report and
/// `--json` output.
///
/// # Examples
///
/// ```
/// use ga4cost::debug_println;
///
/// let quantity = 55.0;
/// debug_println!("pricing: {} M events -> {}", quantity, "Tier B");
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!($($arg)*);
        }
    };
}

pub use debug_println;
