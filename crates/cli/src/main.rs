#![deny(unsafe_code)]
//! CLI binary for randomkolor.
//!
//! Subcommands:
//! - `generate` — print one or more random colors
//! - `list` — print the hue catalog, luminosity policies and formats

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use log::debug;
use randomkolor_core::{
    ColorName, ColorRequest, Format, HueSpec, Luminosity, RandomKolor, Swatch,
};
use std::process;

#[derive(Parser)]
#[command(name = "randomkolor", about = "Generate aesthetically pleasing random colors")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log generation details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random colors.
    Generate {
        /// "random", a degree (1-359) or a color name (red, blue, ...).
        #[arg(long, default_value = "random", allow_hyphen_values = true)]
        hue: String,

        /// Luminosity policy (random, bright, light, dark).
        #[arg(short, long, default_value = "random")]
        luminosity: String,

        /// Output format (rgb, hsl, hex).
        #[arg(short, long, default_value = "rgb")]
        format: String,

        /// Number of colors to generate.
        #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,

        /// PRNG seed for reproducible output. Random when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Full request as JSON, e.g. '{"hue": "blue", "format": "hex"}'.
        /// Overrides --hue, --luminosity and --format.
        #[arg(long)]
        request: Option<String>,
    },
    /// List hue buckets, luminosity policies and formats.
    List,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn parse_request(
    hue: &str,
    luminosity: &str,
    format: &str,
    request: Option<&str>,
) -> Result<ColorRequest, CliError> {
    if let Some(json) = request {
        return serde_json::from_str(json)
            .map_err(|e| CliError::Input(format!("invalid --request JSON: {e}")));
    }
    Ok(ColorRequest::new(
        hue.parse::<HueSpec>()?,
        luminosity.parse::<Luminosity>()?,
        format.parse::<Format>()?,
    ))
}

fn swatch_json(swatch: &Swatch) -> serde_json::Value {
    serde_json::json!({
        "value": swatch.value.to_string(),
        "bucket": swatch.bucket,
        "hsv": swatch.hsv,
        "rgb": swatch.rgb,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let buckets: Vec<serde_json::Value> = ColorName::ALL
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "name": c,
                            "hue_range": c.hue_range(),
                            "saturation_range": c.saturation_range(),
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "colors": buckets,
                    "luminosities": Luminosity::ALL,
                    "formats": Format::ALL,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Colors:");
                for c in ColorName::ALL {
                    let (h_low, h_high) = c.hue_range();
                    let (s_low, s_high) = c.saturation_range();
                    println!("  {c:<10} hue {h_low}..={h_high}  saturation {s_low}..={s_high}");
                }
                let luminosities: Vec<&str> = Luminosity::ALL.iter().map(|l| l.name()).collect();
                let formats: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();
                println!("Luminosities:");
                println!("  {}", luminosities.join(", "));
                println!("Formats:");
                println!("  {}", formats.join(", "));
            }
        }
        Command::Generate {
            hue,
            luminosity,
            format,
            count,
            seed,
            request,
        } => {
            let request = parse_request(&hue, &luminosity, &format, request.as_deref())?;
            let mut kolor = match seed {
                Some(seed) => RandomKolor::new(seed),
                None => RandomKolor::from_entropy(),
            };
            debug!("generating {count} colors for {request:?}");

            let swatches = kolor.swatches(count, request)?;

            if cli.json {
                let out: Vec<serde_json::Value> = swatches.iter().map(swatch_json).collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for swatch in &swatches {
                    println!("{}", swatch.value);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_accepts_negative_count_and_hue() {
        let cli = Cli::try_parse_from([
            "randomkolor", "generate", "--hue", "-5", "--count", "-1",
        ])
        .unwrap();
        match cli.command {
            Command::Generate { hue, count, .. } => {
                assert_eq!(hue, "-5");
                assert_eq!(count, -1);
            }
            Command::List => panic!("expected generate"),
        }
    }

    #[test]
    fn parse_request_reads_flags() {
        let req = parse_request("blue", "light", "hex", None).unwrap();
        assert_eq!(
            req,
            ColorRequest::new(HueSpec::Named(ColorName::Blue), Luminosity::Light, Format::Hex)
        );
    }

    #[test]
    fn parse_request_json_overrides_flags() {
        let req = parse_request("blue", "light", "hex", Some(r#"{"hue": 120}"#)).unwrap();
        assert_eq!(req, ColorRequest::new(HueSpec::Degree(120), Luminosity::Random, Format::Rgb));
    }

    #[test]
    fn parse_request_unknown_name_is_input_error() {
        let err = parse_request("teal", "random", "rgb", None).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = parse_request("random", "random", "cmyk", None).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = parse_request("random", "random", "rgb", Some("{nope")).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn negative_count_is_generate_error() {
        let cli = Cli::try_parse_from(["randomkolor", "generate", "-n", "-1", "--seed", "1"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn swatch_json_carries_string_value() {
        let mut kolor = RandomKolor::new(1);
        let swatch = kolor.swatch(ColorRequest::new(HueSpec::Degree(120), Luminosity::Bright, Format::Hex));
        let v = swatch_json(&swatch);
        assert_eq!(v["value"], serde_json::json!(swatch.rgb.to_hex()));
        assert_eq!(v["bucket"], serde_json::json!("green"));
        assert_eq!(v["hsv"]["h"], serde_json::json!(120));
    }
}
