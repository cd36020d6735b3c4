//! Input discovery, output naming and document I/O.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio::render::normalize_line_endings;

/// Extensions accepted when a single file is given.
pub const FILE_EXTENSIONS: &[&str] = &["txt", "yaml", "yml"];

/// Extensions picked up when a directory is given.
pub const DIR_EXTENSIONS: &[&str] = &["txt"];

/// Where and under which name a renumbered document is written.
#[derive(Debug, Clone)]
pub struct OutputNaming {
    /// Output directory (input's directory if not set)
    pub dir: Option<PathBuf>,
    /// Prefix for the output stem
    pub prefix: String,
    /// Suffix for the output stem
    pub suffix: String,
    /// Joiner between prefix, stem and suffix
    pub join: String,
    /// Write back to the input file, ignoring every other option
    pub overwrite: bool,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            dir: None,
            prefix: String::new(),
            suffix: "_renumbered".to_string(),
            join: String::new(),
            overwrite: false,
        }
    }
}

impl OutputNaming {
    /// File name for the output of `input`: `prefix + stem + suffix`, joined
    /// with `join`, keeping the input extension. Empty parts are skipped.
    pub fn file_name(&self, input: &Path) -> String {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = [self.prefix.as_str(), stem.as_str(), self.suffix.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(self.join.as_str());
        match input.extension() {
            Some(ext) => format!("{}.{}", name, ext.to_string_lossy()),
            None => name,
        }
    }

    /// Full output path for `input`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        if self.overwrite {
            return input.to_path_buf();
        }
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        dir.join(self.file_name(input))
    }
}

/// Check if `path` has one of `extensions`.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Files in `dir` (not recursive) with a supported extension, sorted by path.
pub fn collect_inputs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, DIR_EXTENSIONS) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read a document, normalizing `\r\n` line endings.
pub fn read_document(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(normalize_line_endings(&text))
}

/// Write a document, creating the parent directory if needed.
pub fn write_document(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_file_name() {
        let naming = OutputNaming::default();
        assert_eq!(
            naming.file_name(Path::new("book/sample.txt")),
            "sample_renumbered.txt"
        );
    }

    #[test]
    fn test_file_name_with_prefix_and_join() {
        let naming = OutputNaming {
            prefix: "pre".to_string(),
            suffix: "suf".to_string(),
            join: "_".to_string(),
            ..Default::default()
        };
        assert_eq!(naming.file_name(Path::new("sample.txt")), "pre_sample_suf.txt");

        let naming = OutputNaming {
            suffix: "suf".to_string(),
            join: "_".to_string(),
            ..Default::default()
        };
        assert_eq!(naming.file_name(Path::new("sample.txt")), "sample_suf.txt");
    }

    #[test]
    fn test_output_path() {
        let naming = OutputNaming::default();
        assert_eq!(
            naming.output_path(Path::new("book/sample.txt")),
            PathBuf::from("book/sample_renumbered.txt")
        );

        let naming = OutputNaming {
            dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert_eq!(
            naming.output_path(Path::new("book/sample.txt")),
            PathBuf::from("out/sample_renumbered.txt")
        );

        let naming = OutputNaming {
            dir: Some(PathBuf::from("out")),
            overwrite: true,
            ..Default::default()
        };
        assert_eq!(
            naming.output_path(Path::new("book/sample.txt")),
            PathBuf::from("book/sample.txt")
        );
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a.txt"), FILE_EXTENSIONS));
        assert!(has_extension(Path::new("a.yml"), FILE_EXTENSIONS));
        assert!(!has_extension(Path::new("a.yml"), DIR_EXTENSIONS));
        assert!(!has_extension(Path::new("a"), FILE_EXTENSIONS));
    }

    #[test]
    fn test_collect_inputs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b 1").unwrap();
        fs::write(dir.path().join("a.txt"), "a 1").unwrap();
        fs::write(dir.path().join("c.yaml"), "c 1").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = collect_inputs(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_read_and_write_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "a 1\r\nb 2\r\n").unwrap();
        assert_eq!(read_document(&input).unwrap(), "a 1\nb 2\n");

        let output = dir.path().join("nested").join("out.txt");
        write_document(&output, "x 1").unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "x 1");
    }
}
