use crate::config::{join_url, trim_trailing_slashes, PlaygroundConfig};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt, str::FromStr};

/// Builds links into the ledger explorer.
#[derive(Clone, Debug, PartialEq)]
pub struct Explorer {
    url: String,
    network: String,
}

impl Explorer {
    /// Construct an explorer for the given base url and network.
    pub fn new(url: &str, network: impl Into<String>) -> Self {
        Self { url: trim_trailing_slashes(url).into(), network: network.into() }
    }

    /// Construct the explorer the configuration points at.
    pub fn from_config(config: &PlaygroundConfig) -> Self {
        Self::new(&config.explorer_url, config.network.clone())
    }

    /// The url for a resource path in the explorer.
    pub fn url(&self, resource_path: &str) -> String {
        join_url(&self.url, resource_path)
    }

    /// The url for the ledger object behind a verifiable storage id.
    pub fn verifiable_storage_url(&self, verifiable_storage_id: &str) -> Option<String> {
        self.object_url(verifiable_storage_id, 3)
    }

    /// The url for the ledger object behind an identity.
    pub fn identity_url(&self, identity: &str) -> Option<String> {
        self.object_url(identity, 3)
    }

    /// The url for the ledger object behind an NFT id.
    pub fn nft_url(&self, nft_id: &str) -> Option<String> {
        self.object_url(nft_id, 4)
    }

    pub fn epoch_url(&self, epoch: &str) -> String {
        self.url(&format!("epoch/{epoch}?network={}", self.network))
    }

    pub fn digest_url(&self, digest: &str) -> String {
        self.url(&format!("txblock/{digest}?network={}", self.network))
    }

    // The object id is the segment at `index` of a `:` separated id.
    fn object_url(&self, id: &str, index: usize) -> Option<String> {
        let object_id = id.split(':').nth(index)?;
        Some(self.url(&format!("object/{object_id}?network={}", self.network)))
    }
}

/// A uniform resource name.
#[derive(Clone, Debug, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Urn {
    parts: Vec<String>,
}

impl Urn {
    /// The namespace identifier, i.e. the first part after the `urn:` prefix.
    pub fn namespace_identifier(&self) -> &str {
        &self.parts[0]
    }

    /// The namespace specific parts, starting at the given offset, joined by `:`.
    pub fn namespace_specific(&self, start: usize) -> String {
        self.parts.iter().skip(1 + start).map(String::as_str).collect::<Vec<_>>().join(":")
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urn:{}", self.parts.join(":"))
    }
}

impl FromStr for Urn {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = match s.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("urn:") => &s[4..],
            _ => s,
        };
        let parts: Vec<String> = s.split(':').map(String::from).collect();
        if parts.len() < 2 || parts.iter().any(String::is_empty) {
            return Err(ExplorerError::InvalidUrn(s.to_string()));
        }
        Ok(Self { parts })
    }
}

/// Get the id of the NFT an attestation is stored in.
///
/// The attestation id embeds the NFT id base64 encoded after its namespace, e.g.
/// `attestation:nft:<base64 of the nft urn>`.
pub fn attestation_id_to_nft_id(attestation_id: &str) -> Result<String, ExplorerError> {
    let attestation: Urn = attestation_id.parse()?;
    let encoded = attestation.namespace_specific(1);
    let decoded = BASE64_STANDARD.decode(&encoded).map_err(|_| ExplorerError::InvalidEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ExplorerError::InvalidEncoding)?;
    let nft: Urn = decoded.parse()?;
    Ok(nft.to_string())
}

/// An error when interpreting a ledger id.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ExplorerError {
    #[error("invalid urn: {0}")]
    InvalidUrn(String),

    #[error("embedded id is not valid base64 encoded text")]
    InvalidEncoding,
}
