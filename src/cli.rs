use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ga4cost")]
#[command(version, about = "Estimate GA4 360 monthly and annual cost from event volume")]
pub struct Cli {
    /// Monthly event volume in millions (defaults to the configured value)
    #[arg(value_name = "EVENTS", allow_negative_numbers = true)]
    pub events: Option<f64>,

    /// Locale used to format currency (e.g. pt_BR.UTF-8, en-US)
    #[arg(short = 'l', long = "locale")]
    pub locale: Option<String>,

    /// Print the estimate as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Include the pricing details table
    #[arg(short = 't', long = "table")]
    pub table: bool,

    /// Open the interactive form
    #[arg(short = 'f', long = "form")]
    pub form: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Event volume to price: the positional argument, or `default` when it
    /// was omitted. Negative and non-finite volumes are rejected here so they
    /// never reach the calculator.
    pub fn quantity(&self, default: f64) -> Result<f64, String> {
        let quantity = self.events.unwrap_or(default);
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(format!(
                "Event volume must be a non-negative number, got {}",
                quantity
            ));
        }
        Ok(quantity)
    }
}
