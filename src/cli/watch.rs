//! Live preview
//!
//! Re-renders a draft file every time it changes on disk.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config as WatcherConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::cli::composer_from_draft;
use crate::cli::output::write_preview;
use crate::config::{Config, OutputFormat};
use crate::template::load_draft_async;

/// Events from the file watcher
#[derive(Debug)]
enum WatcherEvent {
    DraftChanged,
    WatcherError(notify::Error),
}

/// Editors often write a temp file and rename it over the original
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Start watching `path`; the returned watcher must be kept alive
fn start_watching(path: &Path) -> Result<(RecommendedWatcher, mpsc::UnboundedReceiver<WatcherEvent>)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let file_name: Option<OsString> = path.file_name().map(|name| name.to_os_string());

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let EventKind::Create(_) | EventKind::Modify(_) = event.kind {
                    let ours = event
                        .paths
                        .iter()
                        .any(|changed| changed.file_name() == file_name.as_deref());
                    if ours {
                        let _ = tx.send(WatcherEvent::DraftChanged);
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(WatcherEvent::WatcherError(e));
            }
        },
        WatcherConfig::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Watch the directory so rename-over saves are still seen
    let dir = watch_dir(path);
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    Ok((watcher, rx))
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

async fn render_once<W: Write>(path: &Path, config: &Config, format: OutputFormat, out: &mut W) -> Result<()> {
    let draft = load_draft_async(path).await?;
    let composer = composer_from_draft(draft, config);
    write_preview(out, &composer.preview(), format)?;
    out.flush()?;
    Ok(())
}

/// Print the preview, then again after every change until the channel closes
pub async fn watch_preview<W: Write>(
    path: &Path,
    config: &Config,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    render_once(path, config, format, out).await?;

    let (_watcher, mut rx) = start_watching(path)?;
    log::info!("Watching {} for changes", path.display());

    while let Some(event) = rx.recv().await {
        match event {
            WatcherEvent::DraftChanged => {
                tokio::time::sleep(SETTLE_DELAY).await;
                // Collapse the burst of events a single save produces
                while rx.try_recv().is_ok() {}

                log::info!("Template draft changed: {}", path.display());
                writeln!(out, "---")?;
                if let Err(e) = render_once(path, config, format, out).await {
                    log::warn!("{e:#}");
                }
            }
            WatcherEvent::WatcherError(e) => {
                log::error!("Draft file watcher error: {e}");
            }
        }
    }

    Ok(())
}
