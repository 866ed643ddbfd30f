// Balance newtype
//
// Balances exceed what JSON numbers can carry losslessly, so the snapshot
// may encode them as a number, a decimal string or a `0x` hex string.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(pub u128);

impl Balance {
    pub const ZERO: Balance = Balance(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_sub(self, other: Balance) -> Balance {
        Balance(self.0.saturating_sub(other.0))
    }

    /// Parse a decimal or `0x`-prefixed hex string
    pub fn parse(s: &str) -> Option<Balance> {
        let s = s.trim();
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some("") => Some(Balance::ZERO),
            Some(hex) => u128::from_str_radix(hex, 16).ok().map(Balance),
            None => s.parse().ok().map(Balance),
        }
    }
}

impl From<u128> for Balance {
    fn from(v: u128) -> Self {
        Balance(v)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct BalanceVisitor;

impl<'de> Visitor<'de> for BalanceVisitor {
    type Value = Balance;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an unsigned integer, a decimal string or a 0x hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Balance, E> {
        Ok(Balance(v as u128))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Balance, E> {
        Ok(Balance(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Balance, E> {
        u128::try_from(v)
            .map(Balance)
            .map_err(|_| E::custom(format!("negative balance {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Balance, E> {
        Balance::parse(v).ok_or_else(|| E::custom(format!("invalid balance {v:?}")))
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BalanceVisitor)
    }
}
