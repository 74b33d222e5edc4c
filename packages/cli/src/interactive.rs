//! Menu-driven entry point used when no subcommand is given.

use casa_resources_geography::GeographyCatalog;
use casa_resources_store::{DocumentStore, list_resources};
use dialoguer::Input;

use crate::report;

/// Top-level actions available in the interactive menu.
enum Action {
    EditCoverage,
    ShowSummary,
    ListRegions,
    LookupZip,
}

impl Action {
    const ALL: &[Self] = &[
        Self::EditCoverage,
        Self::ShowSummary,
        Self::ListRegions,
        Self::LookupZip,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::EditCoverage => "Edit a resource's coverage",
            Self::ShowSummary => "Show a resource's service area",
            Self::ListRegions => "List regions and counties",
            Self::LookupZip => "Look up a ZIP code",
        }
    }
}

/// Runs the interactive menu.
///
/// # Errors
///
/// Returns an error if a prompt, store operation, or save fails.
pub async fn run(
    store: &dyn DocumentStore,
    catalog: &GeographyCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
    let Some(idx) = casa_resources_cli_utils::select("What would you like to do?", &labels, 0)?
    else {
        return Ok(());
    };

    match Action::ALL[idx] {
        Action::EditCoverage => {
            if let Some(id) = pick_resource(store).await? {
                crate::edit_coverage(store, catalog, &id).await?;
            }
        }
        Action::ShowSummary => {
            if let Some(id) = pick_resource(store).await? {
                print!("{}", crate::summary(store, catalog, &id).await?);
            }
        }
        Action::ListRegions => print!("{}", report::render_regions(catalog)),
        Action::LookupZip => {
            let zip: String = Input::new().with_prompt("ZIP code").interact_text()?;
            print!("{}", report::render_zip_lookup(catalog, zip.trim()));
        }
    }

    Ok(())
}

/// Prompts the user to pick a resource by name. Returns its id.
async fn pick_resource(
    store: &dyn DocumentStore,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let mut resources = list_resources(store).await?;
    if resources.is_empty() {
        println!("No resources in the directory.");
        return Ok(None);
    }
    resources.sort_by(|a, b| a.name.cmp(&b.name));

    let labels: Vec<&str> = resources.iter().map(|r| r.name.as_str()).collect();
    let idx = casa_resources_cli_utils::select("Resource", &labels, 0)?;
    Ok(idx.map(|i| resources[i].id.clone()))
}
