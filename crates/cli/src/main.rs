use abg_core::reference::{HCO3_RANGE, PCO2_RANGE, PH_RANGE};
use abg_core::{
    chronicity_from_env_value, classify_raw, classify_records, reading_flags,
    read_measurement_file, CoreConfig, DisorderResult, MeasurementSet, PrimaryDisorder,
    RawMeasurements, ReadingFlag,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const NO_RESULT: &str = "No result: pH, pCO2 and HCO3 are required.";

#[derive(Parser)]
#[command(name = "abg")]
#[command(about = "Acid-base disorder classifier for arterial blood gas results")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single set of readings
    Classify {
        #[command(flatten)]
        readings: ReadingArgs,
        #[command(flatten)]
        chronicity: ChronicityArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify every record in a YAML or JSON measurement file
    Batch {
        /// Path to the measurement file
        file: PathBuf,
        #[command(flatten)]
        chronicity: ChronicityArgs,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show normal bounds and reference ranges
    Ranges,
}

/// Readings are taken as text so the lenient form parsing applies.
#[derive(Args)]
struct ReadingArgs {
    /// Arterial pH
    #[arg(long, allow_hyphen_values = true)]
    ph: Option<String>,
    /// pCO2 (mmHg)
    #[arg(long, allow_hyphen_values = true)]
    pco2: Option<String>,
    /// HCO3 (mEq/L)
    #[arg(long, allow_hyphen_values = true)]
    hco3: Option<String>,
    /// Sodium (mEq/L)
    #[arg(long, allow_hyphen_values = true)]
    na: Option<String>,
    /// Chloride (mEq/L)
    #[arg(long, allow_hyphen_values = true)]
    cl: Option<String>,
    /// Albumin (g/dL)
    #[arg(long, allow_hyphen_values = true)]
    albumin: Option<String>,
}

#[derive(Args)]
struct ChronicityArgs {
    /// Treat a respiratory process as acute
    #[arg(long, conflicts_with = "chronic")]
    acute: bool,
    /// Treat a respiratory process as chronic
    #[arg(long)]
    chronic: bool,
}

impl ChronicityArgs {
    fn resolve(&self, config: &CoreConfig) -> bool {
        match (self.acute, self.chronic) {
            (true, _) => false,
            (_, true) => true,
            _ => config.default_chronic(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("abg=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CoreConfig::new(chronicity_from_env_value(
        std::env::var("ABG_DEFAULT_CHRONICITY").ok(),
    )?);

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Classify {
            readings,
            chronicity,
            json,
        }) => {
            let raw = RawMeasurements {
                ph: readings.ph.unwrap_or_default(),
                pco2: readings.pco2.unwrap_or_default(),
                hco3: readings.hco3.unwrap_or_default(),
                na: readings.na.unwrap_or_default(),
                cl: readings.cl.unwrap_or_default(),
                albumin: readings.albumin.unwrap_or_default(),
                chronic: chronicity.resolve(&config),
            };
            let result = classify_raw(&raw);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let measurements = MeasurementSet::from_raw(&raw);
                match result {
                    Some(result) => println!("{}", render_result(&result)),
                    None => println!("{NO_RESULT}"),
                }
                if let Some(line) = render_flags(&measurements) {
                    println!("{line}");
                }
            }
        }
        Some(Commands::Batch {
            file,
            chronicity,
            json,
        }) => {
            let config = CoreConfig::new(chronicity.resolve(&config));
            let records = read_measurement_file(&file)?;
            tracing::info!("classifying {} record(s) from {}", records.len(), file.display());
            let entries = classify_records(&records, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!("[{}]", entry.id);
                    match entry.result {
                        Some(result) => println!("{}", render_result(&result)),
                        None => println!("{NO_RESULT}"),
                    }
                    println!();
                }
            }
        }
        Some(Commands::Ranges) => {
            println!("{}", render_ranges());
        }
        None => {
            println!("Use 'abg --help' for commands");
        }
    }

    Ok(())
}

/// Renders the interpretation followed by the badge lines the result display shows.
fn render_result(result: &DisorderResult) -> String {
    let mut lines = vec![result.interpretation.clone()];

    if !result.all_disorders.is_empty() {
        lines.push(format!("Disorders: {}", result.all_disorders.join(" | ")));
    }

    if let (true, Some(response)) = (result.has_compensation(), result.compensatory_response) {
        lines.push(format!(
            "Compensation: {} by {}",
            result.compensation_status, response
        ));
    }

    if let Some(range) = result.expected_range {
        let parameter = match result.primary_disorder {
            PrimaryDisorder::MetabolicAcidosis | PrimaryDisorder::MetabolicAlkalosis => "pCO2",
            _ => "HCO3",
        };
        lines.push(format!("Expected {parameter}: {range}"));
    }

    if let (Some(gap), Some(status)) = (result.anion_gap_text(), result.anion_gap_status) {
        let mut line = format!("Anion Gap {gap} ({status})");
        if let (Some(uncorrected), Some(_)) =
            (result.uncorrected_anion_gap, result.corrected_anion_gap)
        {
            line.push_str(&format!(", albumin-corrected from {uncorrected:.1}"));
        }
        lines.push(line);
    }

    if let (Some(ratio), Some(meaning)) =
        (result.delta_ratio_text(), result.delta_ratio_interpretation)
    {
        lines.push(format!("Delta ratio {ratio}: {meaning}"));
    }

    lines.join("\n")
}

/// Lists triad readings outside their reference range, if any.
fn render_flags(measurements: &MeasurementSet) -> Option<String> {
    let flags = reading_flags(measurements);
    let abnormal: Vec<String> = [("pH", flags.ph), ("pCO2", flags.pco2), ("HCO3", flags.hco3)]
        .into_iter()
        .filter_map(|(name, flag)| match flag {
            Some(flag) if flag != ReadingFlag::Normal => Some(format!("{name} {flag}")),
            _ => None,
        })
        .collect();

    (!abnormal.is_empty()).then(|| format!("Out of range: {}", abnormal.join(", ")))
}

fn render_ranges() -> String {
    [
        format!("pH    {PH_RANGE}"),
        format!("pCO2  {PCO2_RANGE} mmHg"),
        format!("HCO3  {HCO3_RANGE} mEq/L (classification treats up to 28 as normal at normal pH)"),
        "Anion gap  8-12 mEq/L".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use abg_core::classify;

    #[test]
    fn renders_badges_for_high_gap_acidosis() {
        let set = MeasurementSet::new(true)
            .with_ph(7.20)
            .with_pco2(26.0)
            .with_hco3(12.0)
            .with_na(140.0)
            .with_cl(100.0)
            .with_albumin(2.0);
        let result = classify(&set).expect("result");
        let text = render_result(&result);

        assert!(text.starts_with("Anion Gap Metabolic Acidosis. Primary Metabolic Acidosis"));
        assert!(text.contains("Disorders: Metabolic Acidosis | Respiratory Alkalosis"));
        assert!(text.contains("Compensation: Compensated by Respiratory Alkalosis"));
        assert!(text.contains("Expected pCO2: 24.0 | 28.0"));
        assert!(text.contains("Anion Gap 33.0 (High), albumin-corrected from 28.0"));
        assert!(text.contains("Delta ratio 1.75: Pure high AG metabolic acidosis"));
    }

    #[test]
    fn renders_normal_result_without_badges() {
        let set = MeasurementSet::new(true)
            .with_ph(7.40)
            .with_pco2(40.0)
            .with_hco3(24.0);
        let result = classify(&set).expect("result");
        assert_eq!(render_result(&result), "Normal acid-base status.");
    }

    #[test]
    fn flags_only_abnormal_readings() {
        let set = MeasurementSet::new(true).with_ph(7.30).with_pco2(40.0);
        assert_eq!(render_flags(&set).as_deref(), Some("Out of range: pH low"));

        let normal = MeasurementSet::new(true).with_ph(7.40);
        assert_eq!(render_flags(&normal), None);
    }

    #[test]
    fn chronicity_flags_override_config() {
        let chronic_default = CoreConfig::new(true);
        let acute = ChronicityArgs {
            acute: true,
            chronic: false,
        };
        let unset = ChronicityArgs {
            acute: false,
            chronic: false,
        };
        assert!(!acute.resolve(&chronic_default));
        assert!(unset.resolve(&chronic_default));
        assert!(!unset.resolve(&CoreConfig::new(false)));
    }

    #[test]
    fn cli_parses_classify_arguments() {
        let cli = Cli::try_parse_from([
            "abg", "classify", "--ph", "7.2", "--pco2", "32", "--hco3", "12", "--acute",
        ])
        .expect("should parse");
        match cli.command {
            Some(Commands::Classify {
                readings,
                chronicity,
                json,
            }) => {
                assert_eq!(readings.ph.as_deref(), Some("7.2"));
                assert!(chronicity.acute);
                assert!(!json);
            }
            _ => panic!("expected classify command"),
        }
    }

    #[test]
    fn cli_rejects_conflicting_chronicity() {
        let parsed = Cli::try_parse_from(["abg", "classify", "--acute", "--chronic"]);
        assert!(parsed.is_err());
    }
}
