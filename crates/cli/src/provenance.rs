//! `<artifact>.provenance.json` sidecars.
//!
//! A sidecar names the code revision and the canonicalization settings, lists
//! the inputs (single nets with their canonical form), and records what the
//! command produced.

use anyhow::{Context, Result};
use cubecanon::{CanonCfg, CanonicalForm, Strategy};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::batch::BatchSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CfgRecord {
    pub parallel: bool,
    pub strategy: &'static str,
}

impl From<&CanonCfg> for CfgRecord {
    fn from(cfg: &CanonCfg) -> Self {
        Self {
            parallel: cfg.parallel,
            strategy: match cfg.strategy {
                Strategy::Refine => "refine",
                Strategy::LexMin => "lex-min",
            },
        }
    }
}

/// An input file; single-net inputs also carry their canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InputRecord {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

impl InputRecord {
    pub fn net(path: &Path, canonical: &CanonicalForm) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            canonical: Some(canonical.to_string()),
        }
    }

    pub fn file(path: &Path) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            canonical: None,
        }
    }
}

/// What a command wrote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Outcome {
    Batch(BatchSummary),
    Orbit {
        orbit_size: usize,
        written: usize,
        refinements: usize,
    },
    Sample {
        seed: u64,
        count: u64,
    },
}

#[derive(Clone, Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub cubecanon: &'static str,
    pub cfg: Option<CfgRecord>,
    pub inputs: Vec<InputRecord>,
    pub outcome: Outcome,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            code_rev: git_rev(),
            cubecanon: cubecanon::VERSION,
            cfg: None,
            inputs: Vec::new(),
            outcome,
            outputs: Vec::new(),
        }
    }

    pub fn with_cfg(mut self, cfg: &CanonCfg) -> Self {
        self.cfg = Some(cfg.into());
        self
    }

    pub fn with_input(mut self, input: InputRecord) -> Self {
        self.inputs.push(input);
        self
    }

    /// Record `artifact` as the output and write the sidecar next to it.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs.push(artifact.to_string_lossy().into_owned());
        let path = sidecar_path(artifact);
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, &self)?;
        w.flush()?;
        Ok(path)
    }
}

/// `dir/name.ext` → `dir/name.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
