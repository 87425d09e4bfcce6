use ga4cost::cli::Cli;
use ga4cost::config::Config;
use ga4cost::core::{Estimate, ReportGenerator};
use ga4cost::debug_println;
use ga4cost::utils::LocaleCurrencyFormatter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print {
        let config = Config::load().unwrap_or_else(|_| Config::default());
        config.print()?;
        return Ok(());
    }

    if cli.check {
        let config = Config::load()?;
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load configuration, using defaults: {}", e);
        Config::default()
    });

    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }

    let quantity = match cli.quantity(config.default_quantity) {
        Ok(quantity) => quantity,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug_println!("main: {} M events, locale {}", quantity, config.locale);

    if cli.form {
        #[cfg(feature = "tui")]
        {
            ga4cost::ui::run_form(&config, quantity)?;
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("TUI feature is not enabled. Please install with --features tui");
            std::process::exit(1);
        }
        return Ok(());
    }

    let estimate = Estimate::from_quantity(quantity)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    let generator = ReportGenerator::new(LocaleCurrencyFormatter::new(&config.locale));
    let report = generator.generate(&estimate, cli.table || config.show_breakdown);

    println!("{}", report);

    Ok(())
}
