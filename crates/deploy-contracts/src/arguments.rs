use {
    alloy::primitives::Address,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(Debug, clap::Parser)]
#[clap(about = "Deploys a compiled contract with a single marketplace address argument")]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: Logging,

    /// The node RPC API endpoint.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Chain id the node is expected to serve. Deployment is aborted if the
    /// node reports a different one.
    #[clap(long, env)]
    pub chain_id: Option<u64>,

    /// File holding the hex encoded private key of the deployer account. The
    /// whole file content, without surrounding whitespace, is the key.
    #[clap(long, env, default_value = ".secret")]
    pub private_key_file: PathBuf,

    /// The Hardhat artifacts directory the contract was compiled into.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Bare (`Marketplace`) or fully qualified
    /// (`contracts/Marketplace.sol:Marketplace`) name of the contract.
    #[clap(long, env, default_value = "Marketplace")]
    pub contract_name: String,

    /// Marketplace address passed to the contract constructor.
    #[clap(
        long,
        env,
        default_value = "0xa1d22441dE66BB328E8269451B1A28d181C74d11"
    )]
    pub marketplace_address: Address,

    /// Number of confirmations to wait for before the deployment is
    /// considered final.
    #[clap(long, env, default_value = "1")]
    pub required_confirmations: u64,
}

#[derive(Debug, clap::Parser)]
pub struct Logging {
    #[clap(
        long,
        env,
        default_value = "warn,deploy_contracts=info,deploy=info,contracts=info,ethrpc=info"
    )]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub log_json: bool,
}

impl Logging {
    pub fn observe_config(&self) -> observe::Config {
        let config = observe::Config::new(&self.log_filter, self.log_stderr_threshold);
        if self.log_json {
            config.with_json_format()
        } else {
            config
        }
    }
}

/// Secret values are printed as "SECRET".
impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            node_url: _,
            chain_id,
            private_key_file,
            artifacts_dir,
            contract_name,
            marketplace_address,
            required_confirmations,
        } = self;

        write!(f, "{logging}")?;
        writeln!(f, "node_url: SECRET")?;
        writeln!(f, "chain_id: {chain_id:?}")?;
        writeln!(f, "private_key_file: {}", private_key_file.display())?;
        writeln!(f, "artifacts_dir: {}", artifacts_dir.display())?;
        writeln!(f, "contract_name: {contract_name}")?;
        writeln!(f, "marketplace_address: {marketplace_address}")?;
        writeln!(f, "required_confirmations: {required_confirmations}")?;
        Ok(())
    }
}

impl Display for Logging {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            log_json,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "log_json: {log_json}")?;
        Ok(())
    }
}
