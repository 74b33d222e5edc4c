//! Interactive coverage editor.
//!
//! Presents the statewide/region/county/city hierarchy as nested menus
//! with tri-state markers. Every toggle goes through [`CoverageSelection`]
//! so the derived county/region/statewide state stays consistent. Nothing
//! is written here; the caller saves or discards the selection based on the
//! returned [`Outcome`].

use casa_resources_coverage::CoverageSelection;

use crate::CliError;

/// How the user left the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep the edits.
    Save,
    /// Discard the edits.
    Cancel,
}

/// The menu currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Statewide toggle plus the list of regions.
    State,
    /// One region's toggle plus its counties.
    Region(String),
    /// One county's toggle plus its cities.
    County {
        /// Region containing the county.
        region: String,
        /// County name.
        county: String,
    },
}

/// What choosing a menu item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleStatewide,
    ToggleRegion(String),
    ToggleCounty { region: String, county: String },
    ToggleCity { city: String, county: String, region: String },
    Open(View),
    Back,
    Finish(Outcome),
}

/// One line of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown to the user.
    pub label: String,
    /// Effect of choosing it.
    pub action: Action,
}

impl MenuItem {
    fn new(label: String, action: Action) -> Self {
        Self { label, action }
    }
}

/// Builds the menu for a view from the current selection.
#[must_use]
pub fn menu(selection: &CoverageSelection<'_>, view: &View) -> Vec<MenuItem> {
    let catalog = selection.catalog();
    let mut items = Vec::new();

    match view {
        View::State => {
            items.push(MenuItem::new(
                format!("{} Statewide", selection.statewide_state().marker()),
                Action::ToggleStatewide,
            ));
            for region in catalog.region_names() {
                items.push(MenuItem::new(
                    format!("{} {region} >", selection.region_state(region).marker()),
                    Action::Open(View::Region(region.to_string())),
                ));
            }
            items.push(MenuItem::new("Save".to_string(), Action::Finish(Outcome::Save)));
            items.push(MenuItem::new(
                "Cancel".to_string(),
                Action::Finish(Outcome::Cancel),
            ));
        }
        View::Region(region) => {
            items.push(MenuItem::new(
                format!("{} All of {region}", selection.region_state(region).marker()),
                Action::ToggleRegion(region.clone()),
            ));
            for county in catalog.counties_in_region(region) {
                items.push(MenuItem::new(
                    format!(
                        "{} {} County >",
                        selection.county_state(region, &county.name).marker(),
                        county.name
                    ),
                    Action::Open(View::County {
                        region: region.clone(),
                        county: county.name.clone(),
                    }),
                ));
            }
            items.push(MenuItem::new("Back".to_string(), Action::Back));
        }
        View::County { region, county } => {
            items.push(MenuItem::new(
                format!(
                    "{} All of {county} County",
                    selection.county_state(region, county).marker()
                ),
                Action::ToggleCounty {
                    region: region.clone(),
                    county: county.clone(),
                },
            ));
            for city in catalog.cities_in_county(region, county) {
                let marker = if selection.is_city_selected(&city.name) {
                    "[x]"
                } else {
                    "[ ]"
                };
                items.push(MenuItem::new(
                    format!("{marker} {} ({})", city.name, city.zip_codes.join(", ")),
                    Action::ToggleCity {
                        city: city.name.clone(),
                        county: county.clone(),
                        region: region.clone(),
                    },
                ));
            }
            items.push(MenuItem::new("Back".to_string(), Action::Back));
        }
    }

    items
}

/// Applies a menu action, updating the selection and the current view.
///
/// Returns `Some` when the action leaves the editor.
pub fn apply(
    selection: &mut CoverageSelection<'_>,
    view: &mut View,
    action: Action,
) -> Option<Outcome> {
    match action {
        Action::ToggleStatewide => selection.toggle_statewide(),
        Action::ToggleRegion(region) => selection.toggle_region(&region),
        Action::ToggleCounty { region, county } => selection.toggle_county(&region, &county),
        Action::ToggleCity {
            city,
            county,
            region,
        } => {
            let catalog = selection.catalog();
            let zip_codes = catalog
                .city(&city)
                .map(|location| location.city.zip_codes.clone())
                .unwrap_or_default();
            selection.toggle_city(&city, &zip_codes, &county, &region);
        }
        Action::Open(next) => *view = next,
        Action::Back => *view = parent(view),
        Action::Finish(outcome) => return Some(outcome),
    }
    None
}

fn parent(view: &View) -> View {
    match view {
        View::State | View::Region(_) => View::State,
        View::County { region, .. } => View::Region(region.clone()),
    }
}

fn prompt(view: &View) -> String {
    match view {
        View::State => "Coverage (Esc to go back)".to_string(),
        View::Region(region) => region.clone(),
        View::County { region, county } => format!("{region} / {county} County"),
    }
}

/// Runs the menu loop until the user saves or cancels.
///
/// Escape goes up one level; Escape at the top level asks whether to
/// discard the edits.
///
/// # Errors
///
/// Returns [`CliError::Prompt`] if the terminal cannot be read.
pub fn run(selection: &mut CoverageSelection<'_>) -> Result<Outcome, CliError> {
    let mut view = View::State;
    let mut cursor = 0;

    loop {
        let items = menu(selection, &view);
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();

        let Some(idx) = casa_resources_cli_utils::select(&prompt(&view), &labels, cursor)? else {
            if view == View::State {
                if casa_resources_cli_utils::confirm("Discard changes?", false)? {
                    return Ok(Outcome::Cancel);
                }
            } else {
                view = parent(&view);
                cursor = 0;
            }
            continue;
        };

        let action = items[idx].action.clone();
        let changes_view = matches!(action, Action::Open(_) | Action::Back);
        if let Some(outcome) = apply(selection, &mut view, action) {
            return Ok(outcome);
        }
        cursor = if changes_view { 0 } else { idx };
    }
}
