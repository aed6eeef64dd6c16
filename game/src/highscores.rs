use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const MAX_HIGHSCORES: usize = 10;
pub const MAX_NAME_LEN: usize = 20;
pub const DEFAULT_PLAYER_NAME: &str = "Anon";

const SCORES_FILE: &str = "highscores_v1.json";

/// One finished round on the score table. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
}

impl ScoreEntry {
    /// Build an entry from the raw name string the player typed. Names are
    /// trimmed, capped at `MAX_NAME_LEN` chars, and fall back to
    /// `DEFAULT_PLAYER_NAME` when nothing is left.
    pub fn new(raw_name: &str, score: u32, date: String) -> Self {
        Self {
            name: sanitize_name(raw_name),
            score,
            date,
        }
    }
}

pub fn sanitize_name(raw: &str) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed
    }
}

/// Append `entry`, keeping the table sorted by score (descending, stable
/// among ties) and capped at `MAX_HIGHSCORES`.
pub fn insert_entry(mut table: Vec<ScoreEntry>, entry: ScoreEntry) -> Vec<ScoreEntry> {
    table.push(entry);
    table.sort_by(|a, b| b.score.cmp(&a.score));
    table.truncate(MAX_HIGHSCORES);
    table
}

/// Storage capability for the persisted table. Implementations only move
/// bytes; ordering and capping live in `insert_entry`/`HighScoreBook`.
pub trait ScoreRepository {
    /// Read the persisted table. Absent, unreadable, or malformed data all
    /// come back as the empty table.
    fn load_table(&self) -> Vec<ScoreEntry>;
    fn store_table(&mut self, entries: &[ScoreEntry]) -> io::Result<()>;
    fn clear_table(&mut self) -> io::Result<()>;
}

/// Policy layer over a `ScoreRepository`: read-modify-write submits with the
/// table invariants applied, and storage failures kept away from gameplay.
#[derive(Debug, Clone)]
pub struct HighScoreBook<R> {
    repo: R,
}

impl<R: ScoreRepository> HighScoreBook<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> Vec<ScoreEntry> {
        self.repo.load_table()
    }

    /// Record one finished round. The updated table is returned even when
    /// persisting it fails; the failure is logged and swallowed.
    pub fn submit(&mut self, entry: ScoreEntry) -> Vec<ScoreEntry> {
        let table = insert_entry(self.repo.load_table(), entry);
        if let Err(err) = self.repo.store_table(&table) {
            eprintln!("saving high scores failed: {err}");
        }
        table
    }

    pub fn clear(&mut self) {
        if let Err(err) = self.repo.clear_table() {
            eprintln!("clearing high scores failed: {err}");
        }
    }
}

/// Score table persisted as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("AIM_TRAINER_SCORES_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("aim-trainer");
        path.push(SCORES_FILE);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreRepository for FileScoreStore {
    fn load_table(&self) -> Vec<ScoreEntry> {
        let Ok(bytes) = fs::read(&self.path) else {
            return Vec::new();
        };
        serde_json::from_slice::<Vec<ScoreEntry>>(&bytes).unwrap_or_default()
    }

    fn store_table(&mut self, entries: &[ScoreEntry]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        atomic_write(&self.path, text.as_bytes())
    }

    fn clear_table(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    match fs::rename(&tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(&tmp, path)?;
            let _ = fs::remove_file(&tmp);
            Ok(())
        }
    }
}

/// In-memory repository for tests. `fail_writes` makes every write error
/// out, to exercise the best-effort save path.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: Vec<ScoreEntry>,
    pub fail_writes: bool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }
}

impl ScoreRepository for MemoryScoreStore {
    fn load_table(&self) -> Vec<ScoreEntry> {
        self.entries.clone()
    }

    fn store_table(&mut self, entries: &[ScoreEntry]) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "score storage unavailable",
            ));
        }
        self.entries = entries.to_vec();
        Ok(())
    }

    fn clear_table(&mut self) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "score storage unavailable",
            ));
        }
        self.entries.clear();
        Ok(())
    }
}
