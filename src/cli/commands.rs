//! Command dispatch and the interactive roster session.

use clap::CommandFactory;
use clap_complete::generate;
use std::io;
use tracing::{debug, instrument};

use crate::application::services::{SessionService, SubmitOutcome};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::global_config_path;
use crate::domain::{Field, PersonDraft};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Console;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run) | None => _run(container),
        Some(Commands::Info) => _info(container),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument(skip(container))]
fn _run(container: &ServiceContainer) -> CliResult<()> {
    let mut session = SessionService::new();
    run_session(&mut session, container)
}

/// Drive one interactive session until the user quits.
///
/// Public so tests can run it with a scripted console and inspect the
/// resulting roster afterwards.
pub fn run_session(session: &mut SessionService, container: &ServiceContainer) -> CliResult<()> {
    let settings = container.settings.as_ref();
    let console = container.console.as_ref();

    output::header("People");
    output::render_table(session.roster().people(), &settings.table);

    loop {
        // EOF at the menu quits
        let Some(choice) = read(console, "[a]dd  [l]ist  [q]uit > ")? else {
            break;
        };
        match choice.trim() {
            "a" | "add" => add_flow(session, console)?,
            "l" | "list" => output::render_table(session.roster().people(), &settings.table),
            "q" | "quit" => break,
            "" => {}
            other => output::warning(&format!("unknown choice: {other:?}")),
        }
    }

    debug!("session over: {} on roster", session.roster().len());
    Ok(())
}

/// The add flow: the terminal analogue of the original modal dialog.
///
/// Prompts the three fields, pre-filling each with the retained draft value
/// after a rejection (empty input keeps the shown value). Every rejection is
/// echoed in full and the form stays open; EOF at any prompt cancels without
/// touching the roster.
fn add_flow(session: &mut SessionService, console: &dyn Console) -> CliResult<()> {
    session.open();

    loop {
        let retained = session.draft().cloned().unwrap_or_default();

        let Some(name) = prompt_field(console, Field::Name, &retained.name)? else {
            return cancel(session);
        };
        let Some(surname) = prompt_field(console, Field::Surname, &retained.surname)? else {
            return cancel(session);
        };
        let Some(age) = prompt_field(console, Field::Age, &retained.age)? else {
            return cancel(session);
        };

        match session.submit(PersonDraft::new(name, surname, age)) {
            SubmitOutcome::Added(person) => {
                output::success(&format!("person added: {person}"));
                return Ok(());
            }
            SubmitOutcome::Rejected(errors) => {
                for e in &errors {
                    output::failure(e);
                }
                // still editing: the loop re-prompts with the retained draft
            }
        }
    }
}

fn cancel(session: &mut SessionService) -> CliResult<()> {
    session.cancel();
    output::detail("cancelled, nothing added");
    Ok(())
}

/// Prompt one field, showing the retained value as the default.
fn prompt_field(
    console: &dyn Console,
    field: Field,
    retained: &str,
) -> CliResult<Option<String>> {
    let label = field_label(field);
    let prompt = if retained.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{retained}]: ")
    };
    let line = read(console, &prompt)?;
    Ok(line.map(|value| {
        if value.is_empty() && !retained.is_empty() {
            retained.to_string()
        } else {
            value
        }
    }))
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Surname => "Surname",
        Field::Age => "Age",
    }
}

fn read(console: &dyn Console, prompt: &str) -> CliResult<Option<String>> {
    console
        .read_line(prompt)
        .map_err(|e| InfraError::io("read console input", e).into())
}

fn _info(container: &ServiceContainer) -> CliResult<()> {
    let cmd = Cli::command();
    if let Some(version) = cmd.get_version() {
        output::info(&format!("agenda {version}"));
    }
    match global_config_path() {
        Some(path) if path.exists() => output::detail(&format!("global config: {}", path.display())),
        Some(path) => output::detail(&format!("global config: {} (absent)", path.display())),
        None => output::detail("global config: unavailable (no home directory)"),
    }

    let effective = toml::to_string(container.settings.as_ref()).map_err(|e| {
        ApplicationError::OperationFailed {
            context: "render effective settings".into(),
            source: Box::new(e),
        }
    })?;
    output::header("settings");
    for line in effective.lines() {
        output::detail(line);
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
