//! Score-table sources.
//!
//! A table reference is either a local file path or an `http(s)` URL.
//! Remote tables are downloaded once and cached on disk under the
//! configured cache directory, keyed by the URL's file name. Only the
//! fetched CSV *text* ever reaches the tokenizer — a reference is a
//! pointer to content, never content itself.

use std::path::{Path, PathBuf};

use crate::error::MutviewError;
use crate::score::{self, ScoreTable};

/// Resolve a table reference to CSV text.
///
/// Local paths are read directly. URLs are served from `cache_dir` when a
/// previous download exists, otherwise fetched with a blocking GET and
/// written through the cache.
///
/// # Errors
///
/// [`MutviewError::Fetch`] when the reference is neither an existing path
/// nor an `http(s)` URL, or the download fails; [`MutviewError::Io`] on
/// cache read/write failure.
pub fn fetch_text(
    reference: &str,
    cache_dir: &Path,
) -> Result<String, MutviewError> {
    if Path::new(reference).exists() {
        return Ok(std::fs::read_to_string(reference)?);
    }

    if !reference.starts_with("http://") && !reference.starts_with("https://")
    {
        return Err(MutviewError::Fetch(format!(
            "not a readable file or an http(s) URL: {reference}"
        )));
    }

    let cached = cache_dir.join(cache_file_name(reference));
    if cached.exists() {
        log::debug!("score table cache hit: {}", cached.display());
        return Ok(std::fs::read_to_string(&cached)?);
    }

    log::info!("downloading score table from {reference}");
    let content = ureq::get(reference)
        .call()
        .map_err(|e| {
            MutviewError::Fetch(format!("GET {reference} failed: {e}"))
        })?
        .into_body()
        .read_to_string()
        .map_err(|e| {
            MutviewError::Fetch(format!(
                "reading response from {reference} failed: {e}"
            ))
        })?;

    if !cache_dir.exists() {
        std::fs::create_dir_all(cache_dir)?;
    }
    std::fs::write(&cached, &content)?;
    log::info!("cached score table at {}", cached.display());

    Ok(content)
}

/// Fetch, tokenize, and parse a score table in one call.
///
/// # Errors
///
/// Propagates fetch errors from [`fetch_text`] and parse errors from
/// [`score::read_records`] / [`score::parse`].
pub fn load_table(
    reference: &str,
    cache_dir: &Path,
) -> Result<ScoreTable, MutviewError> {
    let text = fetch_text(reference, cache_dir)?;
    let records = score::read_records(&text)?;
    score::parse(&records)
}

/// Cache file name for a URL: its last path segment, query stripped.
fn cache_file_name(url: &str) -> PathBuf {
    let tail = url
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    if tail.is_empty() {
        PathBuf::from("scores.csv")
    } else {
        PathBuf::from(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_is_read_directly() {
        let path = std::env::temp_dir().join("mutview_source_test.csv");
        std::fs::write(&path, "pos,A\n1,0.5\n").unwrap();

        let table = load_table(
            path.to_str().unwrap(),
            &std::env::temp_dir().join("mutview_cache_unused"),
        )
        .unwrap();
        assert_eq!(table.matrix, vec![vec![0.5]]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unresolvable_reference_is_a_fetch_error() {
        let err =
            fetch_text("no/such/file.csv", Path::new("/tmp")).unwrap_err();
        assert!(matches!(err, MutviewError::Fetch(_)));
    }

    #[test]
    fn cache_names_come_from_the_url_tail() {
        assert_eq!(
            cache_file_name("https://host/path/P38398.csv?rev=2"),
            PathBuf::from("P38398.csv")
        );
        assert_eq!(
            cache_file_name("https://host/"),
            PathBuf::from("scores.csv")
        );
    }

    #[test]
    fn cached_download_is_reused() {
        let dir = std::env::temp_dir().join("mutview_cache_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("table.csv"), "pos,A\n1,2.0\n").unwrap();

        // The cache satisfies the request; no network touched.
        let text =
            fetch_text("https://unreachable.invalid/x/table.csv", &dir)
                .unwrap();
        assert_eq!(text, "pos,A\n1,2.0\n");

        std::fs::remove_file(dir.join("table.csv")).unwrap();
    }
}
