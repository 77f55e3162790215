use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Files a verification run reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub seller_id: String,
    pub seller_json: PathBuf,
    pub index_path: PathBuf,
}

/// Works out which seller and catalog file to check.
///
/// All lookups happen relative to `dir`; nothing is read from the process
/// working directory.
pub struct InputResolver {
    dir: PathBuf,
    default_index: String,
}

impl InputResolver {
    pub fn new(dir: impl Into<PathBuf>, default_index: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            default_index: default_index.into(),
        }
    }

    /// An explicit `index_path` is taken as given, not joined onto the
    /// directory.
    pub fn resolve(
        &self,
        seller_id: Option<String>,
        index_path: Option<PathBuf>,
    ) -> Result<ResolvedInputs> {
        let seller_id = match seller_id {
            Some(id) => id,
            None => match self.discover_seller_id()? {
                Some(id) => {
                    info!("Discovered seller ID {} in {}", id, self.dir.display());
                    id
                }
                None => bail!("Unable to determine seller ID. Please provide it as an argument."),
            },
        };

        let index_path = index_path.unwrap_or_else(|| self.dir.join(&self.default_index));
        let seller_json = self.dir.join(format!("{}.json", seller_id));

        Ok(ResolvedInputs {
            seller_id,
            seller_json,
            index_path,
        })
    }

    /// First `<digits>.json` file in the directory, by name
    pub fn discover_seller_id(&self) -> Result<Option<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read directory '{}'", self.dir.display()))?;

        let mut candidates = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_seller_id(stem) {
                    debug!("Seller ID candidate: {}", path.display());
                    candidates.push(stem.to_string());
                }
            }
        }

        candidates.sort();
        Ok(candidates.into_iter().next())
    }
}

fn is_seller_id(stem: &str) -> bool {
    !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit())
}
