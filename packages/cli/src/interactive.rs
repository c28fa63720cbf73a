//! Menu-driven mode used when no subcommand is given.
//!
//! Mirrors the controls of the map dashboard: status checkboxes, a city
//! picker labelled with record counts, a bucket-width selector, and a
//! start-year input.

use dialoguer::{Input, MultiSelect, Select};
use skyline_map_analytics::RecordStore;
use skyline_map_analytics::timeline::{BUCKET_WIDTH_RANGE, MAX_START_YEAR};
use skyline_map_building_models::CoarseStatus;

use crate::defaults::Defaults;
use crate::selection::{resolve_city, resolve_start_year};
use crate::{Commands, run_command};

enum Action {
    Map,
    CityDetail,
    Summary,
    Timeline,
    Tally,
    Cities,
}

impl Action {
    const ALL: &[Self] = &[
        Self::Map,
        Self::CityDetail,
        Self::Summary,
        Self::Timeline,
        Self::Tally,
        Self::Cities,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Map => "Map markers by status",
            Self::CityDetail => "City skyscraper table",
            Self::Summary => "Tallest skyscraper summary",
            Self::Timeline => "Construction start timeline",
            Self::Tally => "Status distribution",
            Self::Cities => "List cities",
        }
    }
}

/// Prompts for a view and its options, then prints it.
///
/// # Errors
///
/// Returns an error if a prompt fails or the selected view cannot be
/// derived.
pub fn run(
    store: &RecordStore,
    defaults: &Defaults,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if store.is_empty() {
        println!("No skyscraper data loaded.");
    }

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
    let idx = Select::new()
        .with_prompt("What would you like to see?")
        .items(&labels)
        .default(0)
        .interact()?;

    let command = match Action::ALL[idx] {
        Action::Map => {
            let statuses = prompt_statuses(defaults)?;
            Commands::Map {
                no_status: statuses.is_empty(),
                statuses,
            }
        }
        Action::CityDetail => Commands::City {
            city: prompt_city(store, defaults)?,
        },
        Action::Summary => Commands::Summary {
            city: prompt_city(store, defaults)?,
        },
        Action::Timeline => Commands::Timeline {
            bucket: Some(prompt_bucket_width(defaults)?),
            start_year: Some(prompt_start_year(store, defaults)?),
        },
        Action::Tally => Commands::Tally,
        Action::Cities => Commands::Cities,
    };

    run_command(&command, store, defaults, json)
}

fn prompt_statuses(defaults: &Defaults) -> Result<Vec<CoarseStatus>, dialoguer::Error> {
    let labels: Vec<String> = CoarseStatus::all().iter().map(ToString::to_string).collect();
    let checked: Vec<bool> = CoarseStatus::all()
        .iter()
        .map(|s| defaults.statuses.contains(s))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Statuses to show (space=toggle, enter=confirm)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    Ok(selected.into_iter().map(|i| CoarseStatus::all()[i]).collect())
}

/// Returns the chosen picker label, or `None` when there are no cities.
fn prompt_city(
    store: &RecordStore,
    defaults: &Defaults,
) -> Result<Option<String>, dialoguer::Error> {
    let options = store.city_options();
    if options.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let preselected = resolve_city(None, defaults, store)
        .and_then(|city| options.iter().position(|o| o.city == city))
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("City")
        .items(&labels)
        .default(preselected)
        .max_length(20)
        .interact()?;

    Ok(Some(labels[idx].clone()))
}

fn prompt_bucket_width(defaults: &Defaults) -> Result<u8, dialoguer::Error> {
    let widths: Vec<u8> = BUCKET_WIDTH_RANGE.collect();
    let labels: Vec<String> = widths.iter().map(|w| format!("{w} year(s)")).collect();
    let preselected = widths
        .iter()
        .position(|&w| w == defaults.bucket_width)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Bucket width")
        .items(&labels)
        .default(preselected)
        .interact()?;

    Ok(widths[idx])
}

fn prompt_start_year(store: &RecordStore, defaults: &Defaults) -> Result<i32, dialoguer::Error> {
    Input::new()
        .with_prompt(format!("Start year (up to {MAX_START_YEAR})"))
        .default(resolve_start_year(None, defaults, store))
        .interact_text()
}
