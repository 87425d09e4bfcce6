use crate::debug_println;

/// Symbol used when no locale convention is known
pub const FALLBACK_SYMBOL: &str = "R$";

/// Renders a monetary amount as display text
pub trait CurrencyFormatter {
    fn format(&self, value: f64) -> String;
}

/// Separator and symbol placement rules for one locale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleConventions {
    pub symbol: &'static str,
    pub grouping: &'static str,
    pub decimal: &'static str,
    pub symbol_first: bool,
    pub symbol_space: bool,
}

/// Fallback rendering: `R$ 15,274.50`
const FALLBACK: LocaleConventions = LocaleConventions {
    symbol: FALLBACK_SYMBOL,
    grouping: ",",
    decimal: ".",
    symbol_first: true,
    symbol_space: true,
};

const KNOWN_LOCALES: &[(&str, LocaleConventions)] = &[
    (
        "pt_BR",
        LocaleConventions {
            symbol: "R$",
            grouping: ".",
            decimal: ",",
            symbol_first: true,
            symbol_space: true,
        },
    ),
    (
        "en_US",
        LocaleConventions {
            symbol: "R$",
            grouping: ",",
            decimal: ".",
            symbol_first: true,
            symbol_space: false,
        },
    ),
    (
        "es_ES",
        LocaleConventions {
            symbol: "R$",
            grouping: ".",
            decimal: ",",
            symbol_first: false,
            symbol_space: true,
        },
    ),
    (
        "de_DE",
        LocaleConventions {
            symbol: "R$",
            grouping: ".",
            decimal: ",",
            symbol_first: false,
            symbol_space: true,
        },
    ),
    (
        "fr_FR",
        LocaleConventions {
            symbol: "R$",
            grouping: "\u{202f}",
            decimal: ",",
            symbol_first: false,
            symbol_space: true,
        },
    ),
];

/// Normalize `pt-br`, `pt_BR.UTF-8` or `pt_BR@euro` to `pt_BR`
fn normalize_locale(tag: &str) -> Option<String> {
    let base = tag.split(['.', '@']).next()?.trim();
    let mut parts = base.split(['_', '-']);
    let language = parts.next()?.to_lowercase();
    let region = parts.next()?.to_uppercase();

    if language.is_empty() || region.is_empty() || parts.next().is_some() {
        return None;
    }
    Some(format!("{}_{}", language, region))
}

/// Look up the conventions for a locale tag, if known
pub fn conventions_for(tag: &str) -> Option<LocaleConventions> {
    let normalized = normalize_locale(tag)?;
    KNOWN_LOCALES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, conventions)| *conventions)
}

/// Locale-aware formatter that never fails
///
/// Unknown locales fall back to `R$` with comma grouping and two decimals.
#[derive(Debug, Clone)]
pub struct LocaleCurrencyFormatter {
    locale: String,
    conventions: LocaleConventions,
    is_fallback: bool,
}

impl LocaleCurrencyFormatter {
    pub fn new(locale: &str) -> Self {
        let (conventions, is_fallback) = match conventions_for(locale) {
            Some(conventions) => (conventions, false),
            None => {
                debug_println!(
                    "currency: no conventions for locale '{}', using fallback",
                    locale
                );
                (FALLBACK, true)
            }
        };

        Self {
            locale: locale.to_string(),
            conventions,
            is_fallback,
        }
    }

    /// Formatter that always uses the fallback rendering
    pub fn fallback() -> Self {
        Self {
            locale: String::new(),
            conventions: FALLBACK,
            is_fallback: true,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Format a number with grouping and two decimals, without symbol
    pub fn format_amount(&self, value: f64) -> String {
        format_grouped(value, 2, &self.conventions)
    }

    /// Format a number with grouping and no decimals
    pub fn format_whole(&self, value: f64) -> String {
        format_grouped(value, 0, &self.conventions)
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{} {}", FALLBACK_SYMBOL, value);
        }

        let c = &self.conventions;
        let amount = self.format_amount(value);
        let space = if c.symbol_space { " " } else { "" };

        if c.symbol_first {
            format!("{}{}{}", c.symbol, space, amount)
        } else {
            format!("{}{}{}", amount, space, c.symbol)
        }
    }
}

fn format_grouped(value: f64, decimals: u32, c: &LocaleConventions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = decimals as usize;
    let scaled = (value.abs() * 10f64.powi(decimals as i32)).round();

    // Integer digits of the rounded amount, including the cents. Near f64::MAX
    // the scaling overflows and the amount has no fractional part anyway.
    let mut digits = if scaled.is_finite() {
        format!("{:.0}", scaled)
    } else {
        format!("{:.0}{}", value.abs(), "0".repeat(decimals))
    };
    if digits.len() <= decimals {
        digits = format!("{:0>width$}", digits, width = decimals + 1);
    }
    let (whole, fraction) = digits.split_at(digits.len() - decimals);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 * c.grouping.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push_str(c.grouping);
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && scaled > 0.0 { "-" } else { "" };

    if decimals == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, c.decimal, fraction)
    }
}
