use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use countup::{
    app::App,
    config::CounterConfig,
    constants::FRAME_INTERVAL,
    counter::CountUp,
    handler::handle_event,
    logging,
    tui::{self, Tui},
    ui,
};

// countup version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// countup - animated currency amounts in the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Amounts to display; cycle through them with n/p
    #[arg(allow_negative_numbers = true)]
    amounts: Vec<f64>,

    /// Length of one count-up run in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Digits after the decimal mark
    #[arg(long)]
    decimals: Option<u8>,

    /// Decimal mark
    #[arg(long)]
    decimal: Option<String>,

    /// Thousands separator (empty for none)
    #[arg(long)]
    separator: Option<String>,

    /// Text before the number
    #[arg(long)]
    prefix: Option<String>,

    /// Text after the number
    #[arg(long)]
    suffix: Option<String>,

    /// Value every run starts from
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,

    /// Ease the whole distance even for large amounts
    #[arg(long)]
    no_smart_easing: bool,

    /// Print the final formatted amounts and exit
    #[arg(long)]
    print: bool,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the config file location and effective settings, writing the
    /// defaults there if no file exists yet
    Config,
    /// Display version
    Version,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut CounterConfig) {
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        if let Some(decimal) = &self.decimal {
            config.decimal.clone_from(decimal);
        }
        if let Some(separator) = &self.separator {
            config.separator.clone_from(separator);
        }
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            config.suffix.clone_from(suffix);
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if self.no_smart_easing {
            config.smart_easing = false;
        }
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let cli = Cli::parse();
    let mut config = CounterConfig::load();
    cli.apply(&mut config);

    if let Some(command) = &cli.command {
        match command {
            Commands::Config => {
                let path = CounterConfig::config_path()?;
                if path.exists() {
                    println!("{}", path.display());
                } else {
                    let path = CounterConfig::default().save()?;
                    println!("{} (created with defaults)", path.display());
                }
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Commands::Version => println!("countup v{VERSION}"),
        }
        return Ok(());
    }

    let options = config.to_options()?;

    if cli.print {
        let mut counter = CountUp::new(options)?;
        let now = Instant::now();
        for amount in &cli.amounts {
            counter.start(*amount, now)?;
            println!("{}", counter.final_text());
        }
        return Ok(());
    }

    let mut terminal = tui::init()?;
    let mut app = App::new(cli.amounts, options, Instant::now());
    let result = run_app(&mut terminal, &mut app).await;
    tui::restore()?;
    result
}

/// Main application loop.
async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    tracing::info!("starting with amount {}", app.current_amount());

    while !app.exit {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(app, frame))?;

        // Drain pending input before sleeping until the next frame.
        while crossterm::event::poll(Duration::ZERO)? {
            let event = crossterm::event::read()?;
            if let Some(action) = handle_event(app, &event) {
                app.update(action, Instant::now());
            }
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    }
    Ok(())
}
