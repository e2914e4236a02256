//! Compiled contract artifacts, as written by Hardhat or Foundry
//!
//! Only the ABI and the creation bytecode are read, everything else in the
//! artifact file is ignored.

use std::path::{Path, PathBuf};

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::Deserialize;

use crate::{error::ArtifactError, serde::deserialize_bytecode};

#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub path: PathBuf,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    #[serde(deserialize_with = "deserialize_bytecode")]
    bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|source| ArtifactError::Read {
            path: path.clone(),
            source,
        })?;

        let raw: RawArtifact =
            serde_json::from_str(&json).map_err(|source| ArtifactError::Parse {
                path: path.clone(),
                source,
            })?;

        let name = name.into();

        if raw.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(name));
        }

        Ok(Self {
            name,
            path,
            abi: raw.abi,
            bytecode: raw.bytecode,
        })
    }

    /// Number of constructor parameters in the ABI (zero when there is no constructor)
    pub fn constructor_arity(&self) -> usize {
        self.abi
            .constructor()
            .map(|constructor| constructor.inputs.len())
            .unwrap_or_default()
    }

    /// Errors if the ABI does not take exactly `arity` constructor arguments
    pub fn check_constructor_arity(&self, arity: usize) -> Result<(), ArtifactError> {
        let expected = self.constructor_arity();
        if expected != arity {
            return Err(ArtifactError::ConstructorArity {
                name: self.name.clone(),
                expected,
                actual: arity,
            });
        }
        Ok(())
    }

    /// Creation bytecode followed by the abi-encoded constructor arguments
    pub fn creation_code(&self, encoded_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + encoded_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(encoded_args);
        code.into()
    }
}

/// A directory of compiled artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    pub root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where an artifact for `name` may live, in order of preference
    ///
    /// `<root>/<Name>.sol/<Name>.json` is the layout of both `hardhat compile`
    /// (with root `artifacts/contracts`) and `forge build` (with root `out`)
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        vec![
            self.root
                .join(format!("{name}.sol"))
                .join(format!("{name}.json")),
            self.root.join(format!("{name}.json")),
        ]
    }

    pub fn load(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        let searched = self.candidates(name);

        match searched.iter().find(|path| path.is_file()) {
            Some(path) => {
                tracing::debug!("Loading {} artifact from {}", name, path.display());
                ContractArtifact::load(name, path)
            }
            None => Err(ArtifactError::NotFound {
                name: name.to_string(),
                searched,
            }),
        }
    }
}
