//! Command-line front end over the SQLite-backed journal.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use traveljournal_entries::{Coordinates, TravelEntry};
use traveljournal_gateways::{
    FixedLocation, GrantAllPermissions, LogNotifier, ManualGeocoder, StaticCapture,
};
use traveljournal_infra::config::{DB_PATH_ENV, STORAGE_KEY_ENV};
use traveljournal_infra::{EntryRepository, KeyValueStore, SqliteKeyValueStore, StorageConfig};

use crate::flow::{CaptureFlow, FlowError, Gateways};

#[derive(Parser, Debug)]
#[command(name = "traveljournal")]
#[command(about = "Photo travel journal backed by local storage", long_about = None)]
pub struct Cli {
    /// Database file (overrides TRAVELJOURNAL_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Storage key of the entry collection (overrides TRAVELJOURNAL_STORAGE_KEY)
    #[arg(long, global = true)]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List saved entries, oldest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry
    Show {
        id: String,
    },

    /// Save a new entry for a photo taken at the given position
    Add {
        /// Image path or URI
        #[arg(long)]
        image: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Address of the position (no geocoding provider is contacted)
        #[arg(long)]
        address: String,
    },

    /// Delete an entry by id (succeeds if it does not exist)
    Delete {
        id: String,
    },

    /// Delete every entry
    Clear,
}

impl Cli {
    /// Resolve storage configuration. Flags take precedence over the environment.
    pub fn storage_config(&self) -> Result<StorageConfig> {
        let db = self.db.as_ref().map(|p| p.to_string_lossy().into_owned());
        StorageConfig::from_lookup(|name| match name {
            DB_PATH_ENV if db.is_some() => db.clone(),
            STORAGE_KEY_ENV if self.key.is_some() => self.key.clone(),
            _ => std::env::var(name).ok(),
        })
        .context("failed to load storage configuration")
    }
}

/// Execute `cli`, writing human output to `out`.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.storage_config()?;
    tracing::debug!(path = ?config.database_path, key = %config.storage_key, "opening journal");

    let store = SqliteKeyValueStore::open(&config.database_path);
    let repository = Arc::new(EntryRepository::with_key(store, config.storage_key));

    execute(cli.command, repository, out).await
}

/// Execute a single command against an existing repository.
pub async fn execute<S>(
    command: Command,
    repository: Arc<EntryRepository<S>>,
    out: &mut impl Write,
) -> Result<()>
where
    S: KeyValueStore,
{
    match command {
        Command::List { json } => {
            let entries = repository.list().await;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else if entries.is_empty() {
                writeln!(out, "No entries yet")?;
            } else {
                for entry in &entries {
                    writeln!(out, "{}", format_entry(entry))?;
                }
            }
        }
        Command::Show { id } => match repository.get(&id).await {
            Some(entry) => writeln!(out, "{}", serde_json::to_string_pretty(&entry)?)?,
            None => bail!("no entry with id '{id}'"),
        },
        Command::Add {
            image,
            lat,
            lon,
            address,
        } => {
            let coordinates = Coordinates::new(lat, lon)?;
            let gateways = Gateways {
                capture: Arc::new(StaticCapture::new(image)),
                location: Arc::new(FixedLocation::new(coordinates)),
                geocoder: Arc::new(ManualGeocoder::new(address)),
                permissions: Arc::new(GrantAllPermissions),
                notifier: Arc::new(LogNotifier),
            };

            let flow = CaptureFlow::new(repository, gateways);
            match flow.capture_and_save().await {
                Ok(Some(entry)) => writeln!(out, "Saved {}", entry.entry_id())?,
                Ok(None) => writeln!(out, "Capture cancelled")?,
                Err(FlowError::Journal(err)) if err.is_write_failure() => {
                    return Err(err).context("entry not saved; storage rejected the write, try again");
                }
                Err(err) => return Err(err).context("entry not saved"),
            }
        }
        Command::Delete { id } => {
            let removed = repository
                .remove_by_id(&id)
                .await
                .with_context(|| format!("failed to delete entry '{id}'"))?;
            if removed {
                writeln!(out, "Deleted {id}")?;
            } else {
                writeln!(out, "No entry with id '{id}'; nothing to delete")?;
            }
        }
        Command::Clear => {
            repository.clear().await.context("failed to clear entries")?;
            writeln!(out, "Cleared all entries")?;
        }
    }
    Ok(())
}

fn format_entry(entry: &TravelEntry) -> String {
    let created = entry
        .created_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let position = entry
        .coordinates()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{}  {}  {}  [{}]  {}",
        entry.entry_id(),
        created,
        entry.address(),
        position,
        entry.image_uri()
    )
}
