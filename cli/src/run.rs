//! Per-file renumbering and analysis.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use folio::{Confirm, Folio, MissingPage, RenumberSummary};

use crate::files::{self, OutputNaming, FILE_EXTENSIONS};

pub type CliResult<T> = Result<T, Box<dyn Error>>;

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Renumbered text was written to this path
    Written {
        path: PathBuf,
        missing: Vec<MissingPage>,
    },
    /// The user declined; nothing was written
    Cancelled,
}

/// Settings shared by every file of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    pub naming: OutputNaming,
    pub trailing_newline: bool,
}

/// Resolve `path` to the list of files to process.
///
/// A file must carry one of [`FILE_EXTENSIONS`]; a directory yields its
/// `.txt` files.
pub fn resolve_inputs(path: &Path) -> CliResult<Vec<PathBuf>> {
    if path.is_file() {
        if !files::has_extension(path, FILE_EXTENSIONS) {
            return Err(format!("{} is not a supported extension.", path.display()).into());
        }
        Ok(vec![path.to_path_buf()])
    } else if path.is_dir() {
        Ok(files::collect_inputs(path)?)
    } else {
        Err(format!("{} is neither a file nor a directory.", path.display()).into())
    }
}

/// Renumber one file and write the result.
///
/// Nothing is written when reading, parsing or confirmation fails.
pub fn renumber_file<C>(input: &Path, settings: &RunSettings, confirm: &mut C) -> CliResult<FileOutcome>
where
    C: Confirm + ?Sized,
{
    let text = files::read_document(input)?;
    let folio = Folio::new().with_trailing_newline(settings.trailing_newline);

    let result = match folio.renumber(&text, confirm) {
        Ok(result) => result,
        Err(e) if e.is_cancelled() => {
            log::info!("{}: cancelled", input.display());
            return Ok(FileOutcome::Cancelled);
        }
        Err(e) => return Err(format!("{}: {}", input.display(), e).into()),
    };

    let path = settings.naming.output_path(input);
    files::write_document(&path, &result.to_text())?;
    log::debug!("{} -> {}", input.display(), path.display());

    Ok(FileOutcome::Written {
        path,
        missing: result.missing_pages(),
    })
}

/// Analyze files without writing anything, keyed by path.
pub fn analyze_files(inputs: &[PathBuf]) -> CliResult<BTreeMap<String, RenumberSummary>> {
    let folio = Folio::new();
    let mut summaries = BTreeMap::new();
    for input in inputs {
        let text = files::read_document(input)?;
        let summary = folio
            .analyze(&text)
            .map_err(|e| format!("{}: {}", input.display(), e))?;
        summaries.insert(input.display().to_string(), summary);
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{AlwaysAbort, AlwaysContinue};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_renumber_file_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("book.txt");
        fs::write(&input, "a 1\nb 2->10\nc 3\n").unwrap();

        let outcome = renumber_file(&input, &RunSettings::default(), &mut AlwaysAbort).unwrap();
        let FileOutcome::Written { path, missing } = outcome else {
            panic!("expected a written file");
        };
        assert_eq!(path, dir.path().join("book_renumbered.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "a 1\nb 10\nc 11\n");
        // The trailing empty line has no page number
        assert_eq!(missing.len(), 1);
        // Input untouched
        assert_eq!(fs::read_to_string(&input).unwrap(), "a 1\nb 2->10\nc 3\n");
    }

    #[test]
    fn test_renumber_file_abort_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("book.txt");
        fs::write(&input, "a 2\nb 1").unwrap();

        let outcome = renumber_file(&input, &RunSettings::default(), &mut AlwaysAbort).unwrap();
        assert!(matches!(outcome, FileOutcome::Cancelled));
        assert!(!dir.path().join("book_renumbered.txt").exists());
        assert_eq!(fs::read_to_string(&input).unwrap(), "a 2\nb 1");
    }

    #[test]
    fn test_renumber_file_overwrite_with_blank() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("book.txt");
        fs::write(&input, "a 1\nb 2->5\nc 3").unwrap();

        let settings = RunSettings {
            naming: OutputNaming {
                overwrite: true,
                ..Default::default()
            },
            trailing_newline: true,
        };
        renumber_file(&input, &settings, &mut AlwaysContinue).unwrap();
        assert_eq!(fs::read_to_string(&input).unwrap(), "a 1\nb 5\nc 6\n");
    }

    #[test]
    fn test_resolve_inputs() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("a.txt");
        let md = dir.path().join("a.md");
        fs::write(&txt, "").unwrap();
        fs::write(&md, "").unwrap();

        assert_eq!(resolve_inputs(&txt).unwrap(), vec![txt.clone()]);
        assert!(resolve_inputs(&md).is_err());
        assert_eq!(resolve_inputs(dir.path()).unwrap(), vec![txt]);
        assert!(resolve_inputs(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_analyze_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("a.txt");
        fs::write(&input, "a 3\nb 2").unwrap();

        let summaries = analyze_files(&[input.clone()]).unwrap();
        let summary = &summaries[&input.display().to_string()];
        assert_eq!(summary.order_disturbing.len(), 1);
    }
}
