use crate::Error;
use crate::Map;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Supplies word lists per language code. The filter only needs this once,
/// during [`initialize`](crate::ProfanityFilter::initialize); implement it to
/// pull lists from wherever they live (embedded data, a database, the
/// bundled [`DirSource`] for plain files).
pub trait WordSource {
    /// Language codes this source can provide.
    fn languages(&self) -> Vec<String>;

    /// The words for one language. `Err` here is per-language: the filter
    /// logs it, records it in the [`LoadReport`](crate::LoadReport), and
    /// carries on with the remaining languages.
    fn load(&self, language: &str) -> Result<Vec<String>, Error>;
}

lazy_static! {
    /// Process-wide cache of parsed word files. A list is read from disk at
    /// most once per path for the lifetime of the process; constructing a
    /// second filter over the same directory is free.
    static ref FILE_CACHE: Mutex<Map<PathBuf, Arc<Vec<String>>>> = Mutex::new(Map::default());
}

/// A directory of `<language>.txt` files, one word per line, UTF-8. Blank
/// lines and `#` comments are ignored; a line with several
/// whitespace-separated entries contributes them all.
#[derive(Clone, Debug)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", language))
    }

    /// Drops the cached copy of one language's file, so the next
    /// [`load`](WordSource::load) re-reads it from disk.
    pub fn reload(&self, language: &str) {
        let mut cache = lock(&FILE_CACHE);
        cache.remove(&self.path_for(language));
    }
}

fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_owned)
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl WordSource for DirSource {
    fn languages(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("cannot list word lists in {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };
        let mut languages: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
            .filter_map(|path| Some(path.file_stem()?.to_str()?.to_owned()))
            .collect();
        languages.sort();
        languages
    }

    fn load(&self, language: &str) -> Result<Vec<String>, Error> {
        let path = self.path_for(language);
        if let Some(cached) = lock(&FILE_CACHE).get(&path) {
            return Ok(cached.as_ref().clone());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| Error::Load {
            language: language.to_owned(),
            source,
        })?;
        let words = Arc::new(parse_words(&contents));
        lock(&FILE_CACHE).insert(path, Arc::clone(&words));
        Ok(words.as_ref().clone())
    }
}

/// An in-memory source, handy for tests and for embedders that ship their
/// own lists.
#[derive(Clone, Debug, Default)]
pub struct SliceSource {
    entries: Vec<(String, Vec<String>)>,
}

impl SliceSource {
    pub fn new<L, W, S>(entries: L) -> Self
    where
        L: IntoIterator<Item = (W, Vec<S>)>,
        W: AsRef<str>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(language, words)| {
                    (
                        language.as_ref().to_owned(),
                        words.iter().map(|w| w.as_ref().to_owned()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl WordSource for SliceSource {
    fn languages(&self) -> Vec<String> {
        self.entries.iter().map(|(language, _)| language.clone()).collect()
    }

    fn load(&self, language: &str) -> Result<Vec<String>, Error> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == language)
            .map(|(_, words)| words.clone())
            .ok_or_else(|| Error::UnknownLanguage(language.to_owned()))
    }
}
