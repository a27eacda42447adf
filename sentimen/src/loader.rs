use std::path::Path;

use crate::errors::{LoadFailureError, Result, SentimenError};

/// Reads a resource from the first candidate path that succeeds.
///
/// Candidates are tried in order. When every candidate fails, the returned
/// [`SentimenError::LoadFailure`] keeps each path together with its own cause.
///
/// # Arguments
///
/// * `candidates` - Paths in priority order.
/// * `read` - Function reading the resource from one path.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// use sentimen::{load_first, Model};
///
/// let model = load_first(["models/sentimen.model", "sentimen.model"], |path| {
///     Model::read(&mut BufReader::new(File::open(path)?))
/// })
/// .unwrap();
/// ```
pub fn load_first<I, P, T, F>(candidates: I, mut read: F) -> Result<T>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<T>,
{
    let mut attempts = vec![];
    for path in candidates {
        let path = path.as_ref();
        match read(path) {
            Ok(resource) => {
                tracing::info!(path = %path.display(), "loaded");
                return Ok(resource);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load, trying next");
                attempts.push((path.display().to_string(), e));
            }
        }
    }
    Err(SentimenError::LoadFailure(LoadFailureError { attempts }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_success() {
        let r = load_first(["a", "b", "c"], |path| {
            if path == Path::new("a") {
                Err(SentimenError::invalid_model("broken"))
            } else {
                Ok(path.to_path_buf())
            }
        });
        assert_eq!(Path::new("b"), r.unwrap());
    }

    #[test]
    fn test_all_failures_are_kept() {
        let r: Result<()> = load_first(["models/x", "x"], |path| {
            Err(SentimenError::invalid_model(format!(
                "cannot read {}",
                path.display()
            )))
        });
        match r {
            Err(SentimenError::LoadFailure(e)) => {
                let sources: Vec<_> = e.attempts().iter().map(|(s, _)| s.as_str()).collect();
                assert_eq!(vec!["models/x", "x"], sources);
                assert!(e.attempts()[1].1.to_string().contains("cannot read x"));
            }
            _ => panic!("expected LoadFailure"),
        }
    }

    #[test]
    fn test_no_candidates() {
        let r: Result<()> = load_first(Vec::<&str>::new(), |_| Ok(()));
        assert!(matches!(r, Err(SentimenError::LoadFailure(_))));
    }
}
