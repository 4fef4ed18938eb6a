use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use urania::{BirthInput, Engine, HouseSystem, RulerPolicy};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Report {
    Astrology,
    HumanDesign,
    All,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RulerArg {
    SunSign,
    Ascendant,
}

impl From<RulerArg> for RulerPolicy {
    fn from(arg: RulerArg) -> Self {
        match arg {
            RulerArg::SunSign => RulerPolicy::SunSign,
            RulerArg::Ascendant => RulerPolicy::Ascendant,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "urania", author, version, about = "Natal chart and Human Design calculator")]
struct Args {
    #[arg(long, help = "Birth date, YYYY-MM-DD or DD/MM/YYYY")]
    date: String,

    #[arg(long, help = "Local birth time, HH:MM (24-hour)")]
    time: String,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    #[arg(long, value_enum, default_value_t = Report::All)]
    report: Report,

    #[arg(long, help = "House system name or one-letter code (overrides config)")]
    house_system: Option<HouseSystem>,

    #[arg(long, value_enum, help = "Sign that picks the ruling planet (overrides config)")]
    ruler_policy: Option<RulerArg>,

    #[arg(long, help = "Path to urania.toml")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = urania_config::load_config(args.config.as_deref())?;
    let reference = urania_config::load_reference_data(&config)?;

    let mut settings = config.engine;
    if let Some(system) = args.house_system {
        settings.house_system = system;
    }
    if let Some(policy) = args.ruler_policy {
        settings.ruler_policy = policy.into();
    }

    let input = BirthInput::parse(&args.date, &args.time, args.lat, args.lon)
        .context("Invalid birth data")?;
    log::info!(
        "Calculating {:?} for {} at ({}, {})",
        args.report,
        input.naive_datetime(),
        input.latitude(),
        input.longitude()
    );

    let engine = Engine::new(settings, reference);
    let output = match args.report {
        Report::Astrology => serde_json::to_value(engine.astrology(&input)?)?,
        Report::HumanDesign => serde_json::to_value(engine.human_design(&input)?)?,
        Report::All => serde_json::json!({
            "astrology": engine.astrology(&input)?,
            "human_design": engine.human_design(&input)?,
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
