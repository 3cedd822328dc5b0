//! Domain primitives: BankId, RiskTag.

use serde::{Deserialize, Serialize};

/// Bank address (base58 string on-chain).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(pub String);

impl BankId {
    pub fn new(addr: impl Into<String>) -> Self {
        BankId(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BankId {
    fn from(addr: &str) -> Self {
        BankId(addr.to_string())
    }
}

/// E-mode risk tag attached to a bank.
///
/// Mirrors the on-chain `u16` tag; zero is the `UNSET` sentinel meaning the
/// bank participates in no preferential tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RiskTag(pub u16);

impl RiskTag {
    pub const UNSET: RiskTag = RiskTag(0);

    pub fn new(tag: u16) -> Self {
        RiskTag(tag)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl std::fmt::Display for RiskTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unset() {
            write!(f, "unset")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
