use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::CatalogService;
use crate::cli::args::{Cli, Commands, ConfigCommands, OrderArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::menu::Menu;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{CourseId, TreeDisplay};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);
    let file = cli.file.as_deref();

    match &cli.command {
        None | Some(Commands::Menu) => _menu(&container, file),
        Some(Commands::List { order }) => _list(&container, file, *order),
        Some(Commands::Show { course }) => _show(&container, file, course),
        Some(Commands::Validate) => _validate(&container, file),
        Some(Commands::Tree) => _tree(&container, file),
        Some(Commands::Config { command }) => _config(&container, command),
        Some(Commands::Completion { .. }) => Ok(()),
    }
}

/// Load the course file for a one-shot command, warning about skipped lines.
fn load_catalog(container: &ServiceContainer, file: Option<&Path>) -> CliResult<CatalogService> {
    let path = container.settings.resolve_data_file(file)?;
    let mut service = container.catalog_service();
    let report = service.load(&path)?;
    for rejected in &report.rejected {
        output::warning(rejected);
    }
    debug!("loaded {} course(s) from {}", report.added, path.display());
    Ok(service)
}

#[instrument(skip(container))]
fn _menu(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(container.catalog_service(), stdin.lock(), io::stdout());
    if let Some(path) = file {
        menu.load(path)?;
    }
    menu.run()?;
    Ok(())
}

#[instrument(skip(container))]
fn _list(container: &ServiceContainer, file: Option<&Path>, order: Option<OrderArg>) -> CliResult<()> {
    let service = load_catalog(container, file)?;
    let order = order.map_or(container.settings.listing_order, Into::into);
    for course in service.listing(order) {
        output::info(course);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _show(container: &ServiceContainer, file: Option<&Path>, course: &str) -> CliResult<()> {
    let service = load_catalog(container, file)?;
    match service.course_detail(course) {
        Some(detail) => {
            output::info(&detail);
            Ok(())
        }
        None => Err(CliError::CourseNotFound(CourseId::new(course).to_string())),
    }
}

#[instrument(skip(container))]
fn _validate(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let service = load_catalog(container, file)?;
    let dangling = service.validate();
    if dangling.is_empty() {
        output::success(&format!(
            "all prerequisites resolve ({} courses)",
            service.catalog().len()
        ));
        return Ok(());
    }

    output::header("Missing prerequisites");
    for reference in &dangling {
        output::failure(reference);
    }
    Err(CliError::DanglingPrerequisites(dangling.len()))
}

#[instrument(skip(container))]
fn _tree(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let service = load_catalog(container, file)?;
    let catalog = service.catalog();
    output::info(&catalog.to_tree_string());
    output::detail(&format!("{} courses, depth {}", catalog.len(), catalog.depth()));
    Ok(())
}

#[instrument(skip(container))]
fn _config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory on this platform"),
        },
    }
    Ok(())
}
