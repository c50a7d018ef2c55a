use {
    crate::LoadError,
    alloy::{
        dyn_abi::{DynSolValue, JsonAbiExt as _},
        json_abi::JsonAbi,
        primitives::Bytes,
    },
    serde::Deserialize,
    std::{collections::BTreeMap, path::Path},
};

/// A compiled contract as written by `hardhat compile` (or the zksolc
/// plugin) into `<artifacts>/<sourceName>/<contractName>.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(rename = "_format", default)]
    pub format: String,
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode. Empty for interfaces and abstract contracts.
    pub bytecode: Bytes,
    /// Bytecode hashes of contracts this one deploys at runtime, mapped to
    /// their fully qualified names. Only emitted by zksolc.
    #[serde(default)]
    pub factory_deps: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("{contract} has no bytecode, it is an interface or abstract contract")]
    NoBytecode { contract: String },
    #[error(
        "{contract} was compiled by zksolc ({format}), its bytecode can't be deployed with a plain \
         creation transaction"
    )]
    ZkSync { contract: String, format: String },
    #[error(
        "{contract} declares factory dependencies {deps:?} which a plain creation transaction \
         cannot publish"
    )]
    FactoryDependencies { contract: String, deps: Vec<String> },
    #[error("{contract} has no constructor but {count} constructor arguments were given")]
    NoConstructor { contract: String, count: usize },
    #[error("invalid constructor arguments for {contract}")]
    Arguments {
        contract: String,
        #[source]
        source: alloy::dyn_abi::Error,
    },
}

impl Artifact {
    /// Prefix of the `_format` tag the zksolc Hardhat plugin writes.
    const ZKSOLC_FORMAT: &'static str = "hh-zksolc";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// `<sourceName>:<contractName>`, the name Hardhat uses to disambiguate
    /// contracts with the same name in different sources.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }

    /// Checks that the artifact can be deployed with a single creation
    /// transaction.
    pub fn ensure_deployable(&self) -> Result<(), EncodeError> {
        if self.bytecode.is_empty() {
            return Err(EncodeError::NoBytecode {
                contract: self.contract_name.clone(),
            });
        }
        if self.format.starts_with(Self::ZKSOLC_FORMAT) {
            return Err(EncodeError::ZkSync {
                contract: self.contract_name.clone(),
                format: self.format.clone(),
            });
        }
        if !self.factory_deps.is_empty() {
            return Err(EncodeError::FactoryDependencies {
                contract: self.contract_name.clone(),
                deps: self.factory_deps.values().cloned().collect(),
            });
        }
        Ok(())
    }

    /// ABI encodes the constructor arguments, without bytecode. The values are
    /// type checked against the constructor inputs of the ABI.
    pub fn encode_deploy(&self, args: &[DynSolValue]) -> Result<Bytes, EncodeError> {
        let Some(constructor) = self.abi.constructor() else {
            return match args.len() {
                0 => Ok(Bytes::new()),
                count => Err(EncodeError::NoConstructor {
                    contract: self.contract_name.clone(),
                    count,
                }),
            };
        };
        constructor
            .abi_encode_input(args)
            .map(Bytes::from)
            .map_err(|source| EncodeError::Arguments {
                contract: self.contract_name.clone(),
                source,
            })
    }

    /// Creation bytecode followed by the encoded constructor arguments, i.e.
    /// the input of the contract creation transaction.
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes, EncodeError> {
        let encoded = self.encode_deploy(args)?;
        let mut code = Vec::with_capacity(self.bytecode.len() + encoded.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(&encoded);
        Ok(code.into())
    }
}
