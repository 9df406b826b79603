//! Command handlers
//!
//! Each handler drives the brew service and prints its outcome, as text or
//! as JSON when `--json` is set.

use anyhow::{Context, Result};
use brewlog_domain::brewing::{format_brew_time, parse_brew_time};
use brewlog_domain::extraction::ExtractionResult;
use brewlog_domain::{
    BrewLogEntry, BrewRequest, BrewService, BrewStats, BrewingSuggestion, Coffee, CoffeeId,
    NewCoffee, SuggestedDefaults, TableRepository,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{BeansCommand, BrewArgs, Command, SuggestArgs};
use crate::config::AppConfig;

/// Run one command against the service
pub async fn run<R>(service: &BrewService<R>, config: &AppConfig, command: Command) -> Result<()>
where
    R: TableRepository,
{
    let output = Output { json: config.json };

    match command {
        Command::Init => {
            let created = service.provision().await?;
            info!(tables = created.len(), dir = %config.data_dir.display(), "Tracker ready");
            if created.is_empty() {
                println!("All tables already exist in {}", config.data_dir.display());
            }
            for table in created {
                println!("Created table {}", table);
            }
        }
        Command::Calc(args) => {
            let result = service.calculate(&args.measurement()?)?;
            output.print(&result, |result| result.to_string())?;
        }
        Command::Brew(args) => brew(service, &output, args).await?,
        Command::Beans(command) => beans(service, &output, command).await?,
        Command::Suggest(args) => suggest(service, &output, args).await?,
        Command::Log { refresh, limit } => {
            let mut entries = service.brew_log(refresh).await?;
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            output.print(&entries, |entries| {
                if entries.is_empty() {
                    return "No brews logged yet".to_string();
                }
                entries.iter().map(log_line).collect::<Vec<_>>().join("\n")
            })?;
        }
        Command::Stats => {
            let stats = service.stats().await?;
            output.print(&stats, stats_text)?;
        }
        Command::Brewers => {
            let names = service.brewers().await?;
            output.print(&names, |names| names.join("\n"))?;
        }
        Command::Recipes => {
            let names = service.water_recipes().await?;
            output.print(&names, |names| names.join("\n"))?;
        }
    }

    Ok(())
}

async fn brew<R: TableRepository>(
    service: &BrewService<R>,
    output: &Output,
    args: BrewArgs,
) -> Result<()> {
    let mut request = BrewRequest::new(CoffeeId::new(args.coffee), args.measurement.measurement()?);
    request.grind_size = args.grind;
    request.water_recipe = args.recipe;
    request.brewer = args.brewer;
    request.notes = args.notes;
    if let Some(text) = args.brew_time {
        request.brew_time = normalize_brew_time(&text)?;
    }

    let recorded = service.record_brew(request).await?;

    #[derive(Serialize)]
    struct Recorded<'a> {
        entry: &'a BrewLogEntry,
        result: &'a ExtractionResult,
        remaining_g: f64,
        low_supply: bool,
    }

    let view = Recorded {
        entry: &recorded.entry,
        result: &recorded.result,
        remaining_g: recorded.remaining_g,
        low_supply: recorded.low_supply,
    };

    output.print(&view, |view| {
        let mut text = format!(
            "Logged brew of {}\n{}\n{:.1}g left",
            view.entry.coffee_name, view.result, view.remaining_g
        );
        if view.remaining_g < 0.0 {
            text.push_str("\nInventory is below zero, adjust the amount with `beans adjust`");
        } else if view.low_supply {
            text.push_str("\nRunning low on this coffee");
        }
        text
    })
}

async fn beans<R: TableRepository>(
    service: &BrewService<R>,
    output: &Output,
    command: BeansCommand,
) -> Result<()> {
    match command {
        BeansCommand::List { refresh, low } => {
            let coffees = if low {
                if refresh {
                    service.coffees(true).await?;
                }
                service.low_supply().await?
            } else {
                service.coffees(refresh).await?
            };
            let threshold = service.config().low_supply_threshold_g;

            output.print(&coffees, |coffees| {
                if coffees.is_empty() {
                    return "No coffees in the inventory".to_string();
                }
                coffees
                    .iter()
                    .map(|coffee| coffee_line(coffee, threshold))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        BeansCommand::Add {
            name,
            varietal,
            process,
            origin,
            roast_date,
            grams,
            notes,
        } => {
            let coffee = service
                .add_coffee(NewCoffee {
                    name,
                    varietal,
                    process,
                    origin,
                    roast_date,
                    grams,
                    notes,
                })
                .await?;
            output.print(&coffee, |coffee| format!("Added {} as {}", coffee.label(), coffee.id))
        }
        BeansCommand::Restock { id, grams } => {
            let coffee = service.restock(&CoffeeId::new(id), grams).await?;
            output.print(&coffee, |coffee| format!("Restocked {}", coffee.label()))
        }
        BeansCommand::Adjust { id, grams } => {
            let coffee = service.adjust(&CoffeeId::new(id), grams).await?;
            output.print(&coffee, |coffee| format!("Adjusted {}", coffee.label()))
        }
    }
}

async fn suggest<R: TableRepository>(
    service: &BrewService<R>,
    output: &Output,
    args: SuggestArgs,
) -> Result<()> {
    let suggestion = match args.coffee {
        Some(id) => match service.suggestions_for(&CoffeeId::new(id.as_str())).await? {
            Some(suggestion) => suggestion,
            None => {
                println!("Coffee {} has no varietal or process recorded", id);
                return Ok(());
            }
        },
        None => brewlog_domain::suggest(&args.varietal, &args.process),
    };

    let defaults = match SuggestedDefaults::from_suggestion(&suggestion) {
        Ok(defaults) => Some(defaults),
        Err(err) => {
            warn!(error = %err, "Advice has no usable brew settings");
            None
        }
    };

    #[derive(Serialize)]
    struct Advice<'a> {
        suggestion: &'a BrewingSuggestion,
        defaults: Option<SuggestedDefaults>,
    }

    output.print(
        &Advice {
            suggestion: &suggestion,
            defaults,
        },
        |advice| {
            let mut text = advice.suggestion.to_string();
            if let Some(defaults) = &advice.defaults {
                text.push_str(&format!(
                    "\n\nTo apply: --dose {} --water {:.1} --grind {}",
                    defaults.coffee_dose_g, defaults.water_g, defaults.grind_size
                ));
            }
            text
        },
    )
}

/// Accept `mm:ss` or whole seconds and store `mm:ss`
fn normalize_brew_time(text: &str) -> Result<String> {
    if let Some(seconds) = parse_brew_time(text) {
        return Ok(format_brew_time(seconds));
    }
    let seconds: u64 = text
        .trim()
        .parse()
        .with_context(|| format!("brew time '{}' is neither mm:ss nor seconds", text))?;
    Ok(format_brew_time(seconds))
}

fn coffee_line(coffee: &Coffee, threshold: f64) -> String {
    let marker = if coffee.is_low_supply(threshold) { " LOW" } else { "" };
    let kind = [coffee.varietal.as_str(), coffee.process.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{:<18} {:<28} {:>8.1}g{}  {}",
        coffee.id.as_str(), coffee.name, coffee.grams_remaining, marker, kind
    )
}

fn log_line(entry: &BrewLogEntry) -> String {
    format!(
        "{}  {:<24} {:>5.1}g/{:>5.1}g  TDS {:>5.2}%  EY {:>5.2}% {:<15} {}",
        entry.date.format("%Y-%m-%d %H:%M"),
        entry.coffee_name,
        entry.dose,
        entry.total_water,
        entry.tds_percent,
        entry.extraction_yield,
        entry.zone().label(),
        entry.brewer.as_deref().unwrap_or("")
    )
}

fn stats_text(stats: &BrewStats) -> String {
    let or_dash = |value: Option<f64>, precision: usize| {
        value
            .map(|v| format!("{:.*}%", precision, v))
            .unwrap_or_else(|| "-".to_string())
    };
    let most_used = |value: &Option<(String, usize)>| {
        value
            .as_ref()
            .map(|(name, count)| format!("{} ({} brews)", name, count))
            .unwrap_or_else(|| "-".to_string())
    };

    format!(
        "Total brews:              {}\n\
         Average extraction yield: {}\n\
         Average TDS:              {}\n\
         Most used coffee:         {}\n\
         Most used brewer:         {}",
        stats.total_brews,
        or_dash(stats.average_extraction_yield, 2),
        or_dash(stats.average_tds, 2),
        most_used(&stats.most_used_coffee),
        most_used(&stats.most_used_brewer),
    )
}

struct Output {
    json: bool,
}

impl Output {
    fn print<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }
}
