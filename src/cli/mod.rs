//! Command-line front end
//!
//! Thin layer over the composer: loads drafts, prints previews and
//! diagnostics, and hosts the interactive session.

pub mod output;
pub mod session;
pub mod watch;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::composer::Composer;
use crate::config::{Command, Config};
use crate::template::{TemplateDraft, embedded_example, load_draft};
use crate::validation::validate_composer;

pub use session::{Session, SessionCommand, parse_command};

/// Load a draft into a normalized composer
pub fn open_draft(path: &Path, config: &Config) -> Result<Composer> {
    let draft = load_draft(path)?;
    Ok(composer_from_draft(draft, config))
}

pub(crate) fn composer_from_draft(mut draft: TemplateDraft, config: &Config) -> Composer {
    draft.template_type.get_or_insert(config.template_type);
    let before = (draft.header_variables.len(), draft.body_variables.len());
    let composer = Composer::from_draft(draft, config.limits.max_buttons);

    let draft = composer.to_draft();
    let after = (draft.header_variables.len(), draft.body_variables.len());
    if before != after {
        log::info!(
            "Variables reconciled: header {} -> {}, body {} -> {}",
            before.0,
            after.0,
            before.1,
            after.1
        );
    }
    composer
}

/// Run a subcommand; returns `false` when the template has errors
pub async fn run(command: Command, config: &Config) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Preview {
            file,
            format,
            watch,
        } => {
            if watch {
                watch::watch_preview(&file, config, format, &mut out).await?;
            } else {
                let composer = open_draft(&file, config)?;
                output::write_preview(&mut out, &composer.preview(), format)?;
            }
            Ok(true)
        }
        Command::Check { file, format } => {
            let composer = open_draft(&file, config)?;
            let result = validate_composer(&composer, &config.limits);
            output::write_diagnostics(&mut out, &result, format)?;
            Ok(result.is_valid())
        }
        Command::Normalize { file } => {
            let composer = open_draft(&file, config)?;
            write!(out, "{}", toml::to_string(&composer.to_draft())?)?;
            Ok(true)
        }
        Command::Example => {
            write!(out, "{}", toml::to_string(&embedded_example())?)?;
            Ok(true)
        }
        Command::Session { from, example } => {
            let mut session = match (from, example) {
                (Some(path), _) => Session::with_composer(open_draft(&path, config)?, config.limits),
                (None, true) => {
                    let mut session = Session::new(config);
                    session.apply(SessionCommand::Example)?;
                    session
                }
                (None, false) => Session::new(config),
            };
            session.run(io::stdin().lock(), &mut out)?;
            Ok(true)
        }
    }
}
