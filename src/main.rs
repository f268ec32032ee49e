use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use unit_converter::config::Config;
use unit_converter::form::ConverterForm;
use unit_converter::render;
use unit_converter::theme::Theme;
use unit_converter::units::{self, LengthUnit, UNIT_TABLE};

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(version, about = "Convert lengths between Metre, Millimetre, Mile and Foot", long_about = None)]
struct Cli {
    /// Config file (default: ./unit-converter.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value and print the result
    Convert {
        /// Value to convert; leading numeric prefix is used ("12.5abc" is 12.5)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (name or symbol, default from config)
        #[arg(short, long)]
        from: Option<LengthUnit>,

        /// Target unit (name or symbol, default from config)
        #[arg(short, long)]
        to: Option<LengthUnit>,
    },

    /// List units and their factors relative to one Metre
    Units,

    /// Fill in the converter form, submit it and draw it
    Show {
        /// Input value (default from config)
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,

        #[arg(short, long)]
        from: Option<LengthUnit>,

        #[arg(short, long)]
        to: Option<LengthUnit>,

        /// Theme preset (default from config)
        #[arg(long)]
        theme: Option<String>,

        /// Draw without colors
        #[arg(long)]
        plain: bool,
    },

    /// List theme presets, or print one as JSON
    Themes {
        /// Preset to print
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert { value, from, to } => convert_value(cli.config, &value, from, to),
        Commands::Units => {
            list_units();
            Ok(())
        }
        Commands::Show {
            value,
            from,
            to,
            theme,
            plain,
        } => show_form(cli.config, value, from, to, theme, plain),
        Commands::Themes { name } => list_themes(cli.config, name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn convert_value(
    config_path: Option<PathBuf>,
    value: &str,
    from: Option<LengthUnit>,
    to: Option<LengthUnit>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(config_path.as_deref())?;
    let from = from.unwrap_or(config.defaults.from);
    let to = to.unwrap_or(config.defaults.to);

    debug!("Converting {:?} from {} to {}", value, from, to);
    println!("{}", units::convert(value, from, to));

    Ok(())
}

fn list_units() {
    println!("Units ({}), factor = units per Metre:", UNIT_TABLE.len());
    for (unit, factor) in UNIT_TABLE.entries() {
        let marker = if unit == LengthUnit::BASE { " (base)" } else { "" };
        println!(
            "  - {:<10} {:<3} {}{}",
            unit.name(),
            unit.symbol(),
            factor,
            marker
        );
    }
}

fn show_form(
    config_path: Option<PathBuf>,
    value: Option<String>,
    from: Option<LengthUnit>,
    to: Option<LengthUnit>,
    theme_name: Option<String>,
    plain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(config_path.as_deref())?;
    let theme = match theme_name {
        Some(name) => config.resolve_theme_named(&name)?,
        None => config.resolve_theme()?,
    };

    let mut form = ConverterForm::new(&config.defaults);
    if let Some(value) = value {
        form.set_value(value);
    }
    if let Some(from) = from {
        form.select_from(from);
    }
    if let Some(to) = to {
        form.select_to(to);
    }
    form.submit();

    let drawn = if plain {
        render::render_plain(&form, &theme)
    } else {
        render::render_form(&form, &theme)
    };
    print!("{}", drawn);

    Ok(())
}

fn list_themes(
    config_path: Option<PathBuf>,
    name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    match name {
        Some(name) => {
            // Overrides from the config apply here too
            let config = Config::discover(config_path.as_deref())?;
            let theme = config.resolve_theme_named(name)?;
            println!("{}", serde_json::to_string_pretty(&theme)?);
        }
        None => {
            println!("Themes:");
            for name in Theme::preset_names() {
                println!("  - {}", name);
            }
        }
    }

    Ok(())
}
