//! Command-line arguments

use std::path::PathBuf;

use brewlog_domain::extraction::{BrewMeasurement, ExtractionError};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// BrewLog coffee tracker
///
/// Logs coffee inventory and pour-over brews, and computes extraction
/// metrics from scale readings.
#[derive(Debug, Parser)]
#[command(name = "brewlog", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the tracker tables
    #[arg(
        long,
        env = "BREWLOG_DATA_DIR",
        default_value = "./brewlog-data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Grams under which a coffee is flagged as running low
    #[arg(long, env = "BREWLOG_LOW_SUPPLY_G", default_value_t = 50.0, global = true)]
    pub low_supply_g: f64,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the tracker tables that do not exist yet
    Init,
    /// Compute extraction metrics without logging anything
    Calc(MeasurementArgs),
    /// Log a brew and take its dose out of the inventory
    Brew(BrewArgs),
    /// Manage the beans inventory
    #[command(subcommand)]
    Beans(BeansCommand),
    /// Brewing advice for a varietal and process
    Suggest(SuggestArgs),
    /// Show the brew log, newest first
    Log {
        /// Reload the log from storage
        #[arg(long)]
        refresh: bool,
        /// Show at most this many brews
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Statistics over the brew log
    Stats,
    /// List the known brewers
    Brewers,
    /// List the known water recipes
    Recipes,
}

/// Scale readings, in grams
#[derive(Debug, Clone, Default, Args)]
pub struct MeasurementArgs {
    /// Coffee dose
    #[arg(long)]
    pub dose: Option<f64>,
    /// Dry weight of filter and dripper
    #[arg(long)]
    pub dry: Option<f64>,
    /// Wet weight of filter, dripper and spent grounds
    #[arg(long)]
    pub wet: Option<f64>,
    /// Total water poured
    #[arg(long)]
    pub water: Option<f64>,
    /// Beverage weight in the cup
    #[arg(long)]
    pub beverage: Option<f64>,
}

impl MeasurementArgs {
    /// Build the measurement, naming the first reading left out
    pub fn measurement(&self) -> Result<BrewMeasurement, ExtractionError> {
        let mut builder = BrewMeasurement::builder();
        if let Some(grams) = self.dose {
            builder = builder.coffee_dose(grams);
        }
        if let Some(grams) = self.dry {
            builder = builder.dry_weight(grams);
        }
        if let Some(grams) = self.wet {
            builder = builder.wet_weight(grams);
        }
        if let Some(grams) = self.water {
            builder = builder.total_water(grams);
        }
        if let Some(grams) = self.beverage {
            builder = builder.beverage_weight(grams);
        }
        builder.build()
    }
}

#[derive(Debug, Args)]
pub struct BrewArgs {
    /// ID of the coffee brewed
    #[arg(long)]
    pub coffee: String,

    #[command(flatten)]
    pub measurement: MeasurementArgs,

    /// Grinder setting
    #[arg(long, default_value = "")]
    pub grind: String,

    /// Brew time as mm:ss or seconds
    #[arg(long)]
    pub brew_time: Option<String>,

    /// Water recipe used
    #[arg(long)]
    pub recipe: Option<String>,

    /// Brewer used
    #[arg(long)]
    pub brewer: Option<String>,

    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Debug, Subcommand)]
pub enum BeansCommand {
    /// List the coffees in the inventory
    List {
        /// Reload the inventory from storage
        #[arg(long)]
        refresh: bool,
        /// Only coffees running low
        #[arg(long)]
        low: bool,
    },
    /// Add a coffee to the inventory
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        varietal: String,
        #[arg(long, default_value = "")]
        process: String,
        #[arg(long, default_value = "")]
        origin: String,
        /// Roast date as YYYY-MM-DD
        #[arg(long)]
        roast_date: Option<NaiveDate>,
        /// Grams in the bag
        #[arg(long)]
        grams: f64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Add grams to a coffee
    Restock { id: String, grams: f64 },
    /// Set the grams left of a coffee
    Adjust { id: String, grams: f64 },
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Use the varietal and process of a coffee in the inventory
    #[arg(long, conflicts_with_all = ["varietal", "process"])]
    pub coffee: Option<String>,

    #[arg(long, default_value = "")]
    pub varietal: String,

    #[arg(long, default_value = "")]
    pub process: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_domain::extraction::MeasurementField;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from([
            "brewlog", "calc", "--dose", "20", "--dry", "0", "--wet", "40", "--water", "300",
            "--beverage", "256",
        ])
        .unwrap();

        match cli.command {
            Command::Calc(args) => assert_eq!(
                args.measurement().unwrap(),
                BrewMeasurement::new(20.0, 0.0, 40.0, 300.0, 256.0)
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_missing_reading_is_named() {
        let args = MeasurementArgs {
            dose: Some(18.0),
            dry: Some(50.0),
            wet: Some(68.0),
            water: Some(300.0),
            beverage: None,
        };

        assert_eq!(
            args.measurement(),
            Err(ExtractionError::MissingInput(MeasurementField::BeverageWeight))
        );
    }

    #[test]
    fn test_parse_beans_add() {
        let cli = Cli::try_parse_from([
            "brewlog",
            "--data-dir",
            "/tmp/beans",
            "beans",
            "add",
            "--name",
            "Kochere",
            "--roast-date",
            "2024-03-01",
            "--grams",
            "250",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, PathBuf::from("/tmp/beans"));
        match cli.command {
            Command::Beans(BeansCommand::Add {
                name,
                roast_date,
                grams,
                ..
            }) => {
                assert_eq!(name, "Kochere");
                assert_eq!(roast_date, NaiveDate::from_ymd_opt(2024, 3, 1));
                assert_eq!(grams, 250.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_suggest_coffee_conflicts_with_varietal() {
        let result = Cli::try_parse_from([
            "brewlog", "suggest", "--coffee", "20240101", "--varietal", "Gesha",
        ]);
        assert!(result.is_err());
    }
}
