// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serialization Round-Trip Contract
//!
//! A serializable value must survive `decode(encode(x))` unchanged in every
//! supported wire format. Failures carry the encoded payload (base64) so a
//! broken case can be replayed by hand.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::debug;

use crate::error::{ContractError, ContractResult};

/// Wire formats exercised by the round-trip contract.
///
/// Serialized through [`Display`](fmt::Display) and parsed through
/// [`FromStr`], so config files accept the same spellings as env vars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Format {
    /// Self-describing text (serde_json).
    Json,
    /// Compact binary (bincode 1.x, fixed-int little-endian).
    Bincode,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 2] = [Format::Json, Format::Bincode];

    /// Lowercase identifier used in config files and env vars.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Bincode => "bincode",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "bincode" => Ok(Format::Bincode),
            other => Err(ContractError::config(format!("unknown format: {other}"))),
        }
    }
}

/// Encodes `value` in the given format.
pub fn encode<T: Serialize + ?Sized>(value: &T, format: Format) -> ContractResult<Vec<u8>> {
    let result = match format {
        Format::Json => serde_json::to_vec(value).map_err(|e| e.to_string()),
        Format::Bincode => bincode::serialize(value).map_err(|e| e.to_string()),
    };
    result.map_err(|detail| ContractError::Encode { format, detail })
}

/// Decodes a value of type `T` from `bytes`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], format: Format) -> ContractResult<T> {
    let result = match format {
        Format::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        Format::Bincode => bincode::deserialize(bytes).map_err(|e| e.to_string()),
    };
    result.map_err(|detail| ContractError::Decode { format, detail })
}

/// Checks that `value` survives an encode/decode round trip in `format`.
///
/// Returns the decoded copy so callers can make further assertions on it.
pub fn check_round_trip<T>(value: &T, format: Format) -> ContractResult<T>
where
    T: Serialize + DeserializeOwned + PartialEq + fmt::Debug,
{
    let bytes = encode(value, format)?;
    debug!(%format, len = bytes.len(), "round-trip payload encoded");

    let restored: T = decode(&bytes, format)?;
    if restored != *value {
        return Err(ContractError::RoundTrip {
            format,
            detail: format!(
                "original {:?}, restored {:?}, payload {}",
                value,
                restored,
                BASE64.encode(&bytes)
            ),
        });
    }

    Ok(restored)
}

/// Runs [`check_round_trip`] for each format in turn.
pub fn check_round_trip_all<T>(value: &T, formats: &[Format]) -> ContractResult<()>
where
    T: Serialize + DeserializeOwned + PartialEq + fmt::Debug,
{
    for format in formats {
        check_round_trip(value, *format)?;
    }
    Ok(())
}

/// Checks that encoding is deterministic: encoding twice, and re-encoding
/// the decoded value, yields byte-identical payloads.
pub fn check_stable_encoding<T>(value: &T, format: Format) -> ContractResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let first = encode(value, format)?;
    let second = encode(value, format)?;
    if first != second {
        return Err(ContractError::RoundTrip {
            format,
            detail: format!(
                "encoding is not deterministic: {} vs {}",
                BASE64.encode(&first),
                BASE64.encode(&second)
            ),
        });
    }

    let restored: T = decode(&first, format)?;
    let reencoded = encode(&restored, format)?;
    if reencoded != first {
        return Err(ContractError::RoundTrip {
            format,
            detail: format!(
                "re-encoded payload differs: {} vs {}",
                BASE64.encode(&first),
                BASE64.encode(&reencoded)
            ),
        });
    }

    Ok(())
}
