//! Wiring scripts: a list of elements followed by wire/unwire steps.

use std::collections::HashSet;
use std::path::Path;

use aw_scheme::{PoleRef, Scheme};
use serde::Deserialize;
use tracing::info;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Script {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ElementDef {
    pub id: String,
    #[serde(default)]
    pub poles: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepDef {
    Wire { from: String, to: String },
    Unwire { from: String, to: String },
}

impl std::fmt::Display for StepDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepDef::Wire { from, to } => write!(f, "wire {from} -- {to}"),
            StepDef::Unwire { from, to } => write!(f, "unwire {from} -/- {to}"),
        }
    }
}

pub fn load_script(path: &Path) -> CliResult<Script> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

pub fn parse_script(text: &str) -> CliResult<Script> {
    Ok(serde_yaml::from_str(text)?)
}

/// Create the scheme with every element and pole of the script.
pub fn build_scheme(script: &Script) -> CliResult<Scheme> {
    let mut seen = HashSet::new();
    let mut scheme = Scheme::new(script.name.clone());
    for def in &script.elements {
        if !seen.insert(def.id.as_str()) {
            return Err(CliError::DuplicateElement {
                tag: def.id.clone(),
            });
        }
        let element = scheme.add_element(def.id.clone())?;
        for (name, value) in &def.attributes {
            scheme
                .element_mut(element)?
                .set_attribute(name.clone(), value.clone())?;
        }
        for pole in &def.poles {
            scheme.add_pole(element, pole.clone())?;
        }
    }
    Ok(scheme)
}

/// Check that every step references a declared pole.
pub fn validate_steps(scheme: &Scheme, script: &Script) -> CliResult<()> {
    for step in &script.steps {
        let (StepDef::Wire { from, to } | StepDef::Unwire { from, to }) = step;
        resolve(scheme, from)?;
        resolve(scheme, to)?;
    }
    Ok(())
}

pub fn apply_step(scheme: &mut Scheme, step: &StepDef) -> CliResult<()> {
    info!(%step, "applying step");
    match step {
        StepDef::Wire { from, to } => {
            let (src, dst) = (resolve(scheme, from)?, resolve(scheme, to)?);
            scheme.wire(src, dst)?;
        }
        StepDef::Unwire { from, to } => {
            let (src, dst) = (resolve(scheme, from)?, resolve(scheme, to)?);
            scheme.unwire(src, dst)?;
        }
    }
    Ok(())
}

/// Resolve an `ELEMENT.POLE` label.
pub fn resolve(scheme: &Scheme, label: &str) -> CliResult<PoleRef> {
    let (tag, pole) = label
        .split_once('.')
        .filter(|(tag, pole)| !tag.is_empty() && !pole.is_empty())
        .ok_or_else(|| CliError::BadLabel {
            label: label.to_string(),
        })?;
    scheme
        .find_pole(tag, pole)
        .ok_or_else(|| CliError::UnknownPole {
            label: label.to_string(),
        })
}
