//! Builds `install.packages` commands for every R package loaded by the
//! course material (R Markdown notebooks and R scripts).

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info};
use regex::Regex;

use crate::error::ScanError;

/// A directory below the scan root whose immediate subdirectories hold
/// files with the given extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub base: PathBuf,
    pub extension: String,
}

#[derive(Debug)]
pub struct PackageScanner {
    root: PathBuf,
    sources: Vec<Source>,
    load_statement: Regex,
}

impl PackageScanner {
    /// Scans `<root>/notebooks/*/*.Rmd` and `<root>/inst/*/*.R`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            sources: vec![],
            load_statement: Regex::new(r"^(?:library|require)").expect("valid regex"),
        }
        .with_source("notebooks", "Rmd")
        .with_source("inst", "R")
    }

    pub fn with_source<P: Into<PathBuf>>(mut self, base: P, extension: &str) -> Self {
        self.sources.push(Source {
            base: base.into(),
            extension: extension.to_string(),
        });
        self
    }

    pub fn clear_sources(mut self) -> Self {
        self.sources.clear();
        self
    }

    fn read_dir(path: &Path) -> Result<Option<fs::ReadDir>, ScanError> {
        match fs::read_dir(path) {
            Ok(entries) => Ok(Some(entries)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ScanError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.starts_with('.'))
    }

    fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ScanError + '_ {
        move |source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Every matching file, exactly one directory level below each source base.
    ///
    /// Hidden entries (names starting with `.`) are skipped at both levels.
    pub fn files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut paths = vec![];
        for source in &self.sources {
            let base = self.root.join(&source.base);
            let Some(entries) = Self::read_dir(&base)? else {
                debug!("skipping missing directory {:?}", base);
                continue;
            };
            for entry in entries {
                let dir = entry.map_err(Self::io_err(&base))?.path();
                if Self::is_hidden(&dir) || !dir.is_dir() {
                    continue;
                }
                let Some(files) = Self::read_dir(&dir)? else {
                    continue;
                };
                for file in files {
                    let p = file.map_err(Self::io_err(&dir))?.path();
                    let matches = !Self::is_hidden(&p)
                        && p.is_file()
                        && p.extension().and_then(|e| e.to_str())
                            == Some(source.extension.as_str());
                    if matches {
                        paths.push(p);
                    }
                }
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Package names loaded in `text`, in order of appearance.
    ///
    /// Only statements starting in the first column count. The name is the
    /// text after the first `(` up to the next `(`, without any `)`.
    pub fn extract_packages(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| self.load_statement.is_match(line))
            .filter_map(|line| line.trim().split('(').nth(1))
            .map(|name| name.replace(')', "").trim().to_string())
            .collect()
    }

    /// Distinct package names over all scanned files.
    pub fn packages(&self) -> Result<BTreeSet<String>, ScanError> {
        let mut packages = BTreeSet::new();
        let files = self.files()?;
        for path in &files {
            let text = fs::read_to_string(path).map_err(Self::io_err(path))?;
            packages.extend(self.extract_packages(&text));
        }
        info!(
            "found {} packages in {} files under {:?}",
            packages.len(),
            files.len(),
            self.root
        );
        Ok(packages)
    }

    pub fn install_commands(&self) -> Result<Vec<String>, ScanError> {
        Ok(self
            .packages()?
            .iter()
            .map(|p| install_command(p))
            .collect_vec())
    }
}

pub fn install_command(package: &str) -> String {
    format!("install.packages(\"{package}\",dependencies=TRUE)")
}
