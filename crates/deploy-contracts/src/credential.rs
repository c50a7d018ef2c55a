use {
    alloy::signers::local::PrivateKeySigner,
    anyhow::{Context, Result},
    std::{fmt, path::Path},
};

/// Private key of the deployer account, as read from disk.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(private_key: impl Into<String>) -> Self {
        Self(private_key.into())
    }

    /// Reads the whole file and trims surrounding whitespace, which is usually
    /// a trailing newline left by an editor.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read private key file {path:?}"))?;
        let private_key = contents.trim();
        anyhow::ensure!(!private_key.is_empty(), "private key file {path:?} is empty");
        Ok(Self::new(private_key))
    }

    /// Builds the signer that authorizes the deployment. The key may carry a
    /// `0x` prefix.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        self.0
            .parse()
            .context("private key is not a 32 byte hex string")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(SECRET)")
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address, std::io::Write, tempfile::NamedTempFile};

    // First account of the "test test ... junk" development mnemonic.
    const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn credential_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_trims_credential() {
        let file = credential_file(&format!("  {PRIVATE_KEY}\n"));
        let signer = Credential::load(file.path()).unwrap().signer().unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn accepts_key_without_prefix() {
        let signer = Credential::new(PRIVATE_KEY.trim_start_matches("0x"))
            .signer()
            .unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Credential::load(Path::new("/this/file/does/not/exist/.secret")).unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn empty_file() {
        let file = credential_file(" \n");
        assert!(Credential::load(file.path()).is_err());
    }

    #[test]
    fn malformed_key() {
        assert!(Credential::new("not a key").signer().is_err());
        assert!(Credential::new("0x1234").signer().is_err());
    }

    #[test]
    fn debug_hides_key() {
        let credential = Credential::new(PRIVATE_KEY);
        assert_eq!(format!("{credential:?}"), "Credential(SECRET)");
    }
}
