use crate::core::report::{self, TimeDisplay};
use crate::domain::model::PassRequest;
use crate::domain::ports::IssApi;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Location,
    People,
    Passes(PassRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Location => "loc",
            Command::People => "people",
            Command::Passes(_) => "pass",
        }
    }
}

/// Runs commands one after another against an `IssApi`.
///
/// Every command renders its whole report before writing, so a failed
/// request leaves no partial output behind.
pub struct CommandRunner<A: IssApi> {
    api: A,
    time_display: TimeDisplay,
}

impl<A: IssApi> CommandRunner<A> {
    pub fn new(api: A, time_display: TimeDisplay) -> Self {
        Self { api, time_display }
    }

    /// Stops at the first failing command.
    pub async fn run_all<W: Write>(&self, commands: &[Command], out: &mut W) -> Result<()> {
        for command in commands {
            self.run(command, out).await?;
        }
        Ok(())
    }

    pub async fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        tracing::debug!("Running {}", command.name());

        let lines = match command {
            Command::Location => {
                let location = self.api.current_location().await?;
                vec![report::location_line(&location, self.time_display)]
            }
            Command::People => {
                let manifest = self.api.people_in_space().await?;
                if let Some((reported, listed)) = manifest.count_mismatch() {
                    tracing::debug!("API reports {} people but listed {}", reported, listed);
                }
                tracing::debug!(
                    "{} people in space across {} crafts",
                    manifest.total_people(),
                    manifest.crafts().count()
                );
                report::crew_lines(&manifest)
            }
            Command::Passes(request) => {
                let pass_report = self.api.passes(request).await?;
                report::pass_lines(&pass_report, self.time_display)
            }
        };

        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Full CLI flow: resolve settings, validate `--pass` arguments before any
/// request, then run the selected commands.
#[cfg(feature = "cli")]
pub async fn run_cli<W: Write>(args: &crate::config::cli::CliArgs, out: &mut W) -> Result<()> {
    use crate::adapters::http::OpenNotifyClient;

    let settings = args.settings()?;
    let commands = args.commands()?;
    if commands.is_empty() {
        tracing::debug!("No command selected");
        return Ok(());
    }

    tracing::debug!("Using API at {}", settings.api_base);
    let runner = CommandRunner::new(
        OpenNotifyClient::new(settings.api_base),
        settings.time_display,
    );
    runner.run_all(&commands, out).await
}
