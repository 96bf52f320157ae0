use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};

use crate::config::{DirectoryConfig, ModelConfig};

#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
    pub spam_vectorizer: PathBuf,
    pub spam_model: PathBuf,
    pub phishing_vectorizer: PathBuf,
    pub phishing_model: PathBuf,
}

pub fn ensure_directories(dirs: &DirectoryConfig, models: &ModelConfig) -> Result<ResolvedPaths> {
    let logs_dir = ensure_dir(&dirs.logs_dir)?;
    let models_dir = &models.models_dir;
    if !models_dir.is_dir() {
        bail!("models directory {} does not exist", models_dir.display());
    }
    let models_dir = models_dir
        .canonicalize()
        .unwrap_or_else(|_| models_dir.clone());

    Ok(ResolvedPaths {
        logs_dir,
        spam_vectorizer: models_dir.join(&models.spam_vectorizer),
        spam_model: models_dir.join(&models.spam_model),
        phishing_vectorizer: models_dir.join(&models.phishing_vectorizer),
        phishing_model: models_dir.join(&models.phishing_model),
    })
}

fn ensure_dir(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(path);
    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| format!("failed to create directory {}", path))?;
    }
    let probe_file = dir.join(".write-test");
    fs::write(&probe_file, b"ok")
        .with_context(|| format!("directory {} is not writable", path))?;
    fs::remove_file(&probe_file)?;
    Ok(canonical(&dir))
}

fn canonical(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}
