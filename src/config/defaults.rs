use super::types::Config;

pub const DEFAULT_LOCALE: &str = "pt_BR.UTF-8";

pub const DEFAULT_CONFIG: Config = Config {
    locale: String::new(), // Set to DEFAULT_LOCALE at runtime
    default_quantity: 55.0,
    step: 10.0,
    show_breakdown: false,
};

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: DEFAULT_LOCALE.to_string(),
            ..DEFAULT_CONFIG
        }
    }
}
