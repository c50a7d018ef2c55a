use {
    crate::Artifact,
    std::path::{Path, PathBuf},
    walkdir::WalkDir,
};

/// Read-only view of a Hardhat artifacts directory.
#[derive(Debug, Clone)]
pub struct HardhatArtifacts {
    dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("artifact for contract {name:?} not found in {dir:?}, did you compile the contracts?")]
    NotFound { name: String, dir: PathBuf },
    #[error("multiple artifacts match {name:?}, use one of the fully qualified names {candidates:?}")]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("failed to read artifact {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl HardhatArtifacts {
    /// Holds compiler inputs and outputs, never artifacts.
    const BUILD_INFO: &'static str = "build-info";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads an artifact either by its bare contract name (`Marketplace`) or
    /// by its fully qualified name (`contracts/Marketplace.sol:Marketplace`).
    pub fn load(&self, name: &str) -> Result<Artifact, LoadError> {
        let path = match name.rsplit_once(':') {
            Some((source, contract)) => {
                let path = self.dir.join(source).join(format!("{contract}.json"));
                if !path.is_file() {
                    return Err(self.not_found(name));
                }
                path
            }
            None => self.find(name)?,
        };
        tracing::debug!(?path, "loading artifact");
        Artifact::from_file(&path)
    }

    fn find(&self, contract: &str) -> Result<PathBuf, LoadError> {
        let file_name = format!("{contract}.json");
        let mut matches = WalkDir::new(&self.dir)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != Self::BUILD_INFO)
            // Unreadable entries can't be the artifact we are looking for.
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_str() == Some(file_name.as_str())
                    && entry
                        .path()
                        .parent()
                        .and_then(|parent| parent.extension())
                        .is_some_and(|extension| extension == "sol")
            })
            .map(|entry| entry.into_path())
            .collect::<Vec<_>>();

        match matches.len() {
            0 => Err(self.not_found(contract)),
            1 => Ok(matches.remove(0)),
            _ => {
                let mut candidates = matches
                    .iter()
                    .map(|path| self.fully_qualified_name(path, contract))
                    .collect::<Vec<_>>();
                candidates.sort();
                Err(LoadError::Ambiguous {
                    name: contract.to_string(),
                    candidates,
                })
            }
        }
    }

    fn fully_qualified_name(&self, path: &Path, contract: &str) -> String {
        let source = path
            .parent()
            .and_then(|parent| parent.strip_prefix(&self.dir).ok())
            .unwrap_or(path);
        format!("{}:{contract}", source.display())
    }

    fn not_found(&self, name: &str) -> LoadError {
        LoadError::NotFound {
            name: name.to_string(),
            dir: self.dir.clone(),
        }
    }
}
