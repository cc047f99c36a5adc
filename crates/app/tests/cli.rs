use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use traveljournal_app::cli::{Cli, Command, execute, run};
use traveljournal_entries::TravelEntry;
use traveljournal_infra::{EntryRepository, InMemoryKeyValueStore, KeyValueStore, StoreError};

type Repo = Arc<EntryRepository<InMemoryKeyValueStore>>;

async fn exec(repo: &Repo, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    execute(command, repo.clone(), &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

fn add(image: &str, lat: f64, lon: f64, address: &str) -> Command {
    Command::Add {
        image: image.to_string(),
        lat,
        lon,
        address: address.to_string(),
    }
}

#[tokio::test]
async fn empty_journal_lists_nothing() {
    let repo: Repo = Arc::new(EntryRepository::new(InMemoryKeyValueStore::new()));

    let out = exec(&repo, Command::List { json: false }).await.unwrap();
    assert_eq!(out.trim(), "No entries yet");

    let out = exec(&repo, Command::List { json: true }).await.unwrap();
    let entries: Vec<TravelEntry> = serde_json::from_str(&out).unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn add_list_delete_clear() {
    let repo: Repo = Arc::new(EntryRepository::new(InMemoryKeyValueStore::new()));

    let out = exec(&repo, add("/tmp/a.jpg", 48.8584, 2.2945, "Eiffel Tower, Paris, IDF"))
        .await
        .unwrap();
    assert!(out.starts_with("Saved "));
    exec(&repo, add("/tmp/b.jpg", -33.8568, 151.2153, "Opera House, Sydney, NSW"))
        .await
        .unwrap();

    let out = exec(&repo, Command::List { json: false }).await.unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Eiffel Tower, Paris, IDF"));
    assert!(lines[1].contains("-33.856800, 151.215300"));

    let first = repo.list().await[0].entry_id().to_string();
    let out = exec(&repo, Command::Show { id: first.clone() }).await.unwrap();
    assert!(out.contains("\"imageUri\": \"/tmp/a.jpg\""));

    let out = exec(&repo, Command::Delete { id: first.clone() }).await.unwrap();
    assert_eq!(out.trim(), format!("Deleted {first}"));
    assert_eq!(repo.list().await.len(), 1);

    let out = exec(&repo, Command::Delete { id: first.clone() }).await.unwrap();
    assert!(out.contains("nothing to delete"));

    let out = exec(&repo, Command::Clear).await.unwrap();
    assert_eq!(out.trim(), "Cleared all entries");
    assert!(repo.list().await.is_empty());
}

#[tokio::test]
async fn add_rejects_bad_input_without_writing() {
    let repo: Repo = Arc::new(EntryRepository::new(InMemoryKeyValueStore::new()));

    assert!(exec(&repo, add("/tmp/a.jpg", 91.0, 0.0, "Nowhere")).await.is_err());
    assert!(exec(&repo, add("  ", 10.0, 10.0, "Somewhere")).await.is_err());
    assert!(exec(&repo, add("/tmp/a.jpg", 10.0, 10.0, "")).await.is_err());

    assert!(repo.list().await.is_empty());
}

#[tokio::test]
async fn show_unknown_id_fails() {
    let repo: Repo = Arc::new(EntryRepository::new(InMemoryKeyValueStore::new()));

    let err = exec(&repo, Command::Show { id: "missing".to_string() })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing"));
}

/// In-memory store whose reads can be switched off.
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryKeyValueStore,
    fail_reads: AtomicBool,
}

#[async_trait::async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("device busy".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key).await
    }
}

#[tokio::test]
async fn delete_fails_loudly_when_entries_cannot_be_read() {
    let repo = Arc::new(EntryRepository::new(FlakyStore::default()));
    let mut out = Vec::new();
    execute(add("/tmp/a.jpg", 1.0, 2.0, "Here"), repo.clone(), &mut out)
        .await
        .unwrap();
    let id = repo.list().await[0].entry_id().to_string();

    repo.store().fail_reads.store(true, Ordering::SeqCst);
    let mut out = Vec::new();
    let err = execute(Command::Delete { id: id.clone() }, repo.clone(), &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains(&id));
    assert!(out.is_empty());

    repo.store().fail_reads.store(false, Ordering::SeqCst);
    let mut out = Vec::new();
    execute(Command::Delete { id: id.clone() }, repo.clone(), &mut out)
        .await
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap().trim(), format!("Deleted {id}"));
}

#[test]
fn parses_negative_coordinates_and_global_flags() {
    let cli = Cli::try_parse_from([
        "traveljournal",
        "add",
        "--image",
        "/tmp/a.jpg",
        "--lat",
        "-22.9519",
        "--lon",
        "-43.2105",
        "--address",
        "Cristo Redentor, Rio de Janeiro, RJ",
        "--key",
        "trip",
    ])
    .unwrap();

    assert_eq!(cli.key.as_deref(), Some("trip"));
    match cli.command {
        Command::Add { lat, lon, .. } => {
            assert_eq!(lat, -22.9519);
            assert_eq!(lon, -43.2105);
        }
        other => panic!("Expected add, got {other:?}"),
    }
}

#[tokio::test]
async fn run_persists_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("journal.db");
    let db_arg = db.to_str().unwrap();

    let cli = Cli::try_parse_from([
        "traveljournal",
        "--db",
        db_arg,
        "add",
        "--image",
        "/tmp/a.jpg",
        "--lat",
        "1.5",
        "--lon",
        "2.5",
        "--address",
        "Somewhere",
    ])
    .unwrap();
    let mut out = Vec::new();
    run(cli, &mut out).await.unwrap();

    let cli = Cli::try_parse_from(["traveljournal", "--db", db_arg, "list", "--json"]).unwrap();
    let mut out = Vec::new();
    run(cli, &mut out).await.unwrap();

    let entries: Vec<TravelEntry> = serde_json::from_slice(&out).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].address(), "Somewhere");
}
