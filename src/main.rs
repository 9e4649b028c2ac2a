use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::modes::{HeadlessMode, HumanMode};

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Cells gained per food
    #[arg(long)]
    growth: Option<usize>,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value = "10000")]
    ticks: u64,

    /// Log file (the terminal is taken over by the game)
    #[arg(long, default_value = "torus_snake.log")]
    log_file: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Autoplay without a terminal and print a summary
    Headless,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.ticks_per_second = speed;
        }
        if let Some(growth) = self.growth {
            config.growth_per_food = growth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), file)
        .context("Failed to initialize logger")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config()?;
    info!("Configuration: {:?}", config);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config)?;
            human_mode.run().await?;
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config)?;
            let summary = headless_mode.run(cli.ticks)?;
            println!("{}", summary.format_summary());
        }
    }

    Ok(())
}
