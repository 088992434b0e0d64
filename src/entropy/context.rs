use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::traits::model::loose_enum;

/// Scalar used when the caller supplies none.
pub const DEFAULT_ENTROPY_SCALAR: f64 = 0.5;

loose_enum! {
    /// Quantum-state tag; selects the overlay's post-process.
    QuantumState {
        /// Ghost double-draw.
        Superposition => "superposition" [],
        /// Faint chord lines across the surface.
        Entangled => "entangled" [],
        /// Spotlight vignette.
        Observed => "observed" [],
        /// Uniform blur.
        Unobserved => "unobserved" ["collapsed"],
    }
    default Unobserved
}

/// Raw chain-derived input, as supplied by a collaborator.
///
/// Nothing here is trusted: [`EntropyContext::from_input`] validates each field independently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyInput {
    /// Block height; integers or numeric strings.
    #[serde(alias = "blockHeight", deserialize_with = "loose_height")]
    pub block_height: Option<u64>,
    /// Block hash, expected hex-like.
    #[serde(alias = "blockHash", deserialize_with = "loose_text")]
    pub block_hash: Option<String>,
    /// Quantum-state tag.
    #[serde(alias = "quantumState", deserialize_with = "loose_text")]
    pub quantum_state: Option<String>,
    /// Scalar on a 0-1 or 0-100 scale.
    #[serde(alias = "entropyScalar", alias = "entropy", deserialize_with = "loose_number")]
    pub entropy_scalar: Option<f64>,
}

impl EntropyInput {
    /// Set the block height.
    pub fn with_block_height(mut self, v: u64) -> Self {
        self.block_height = Some(v);
        self
    }

    /// Set the block hash.
    pub fn with_block_hash(mut self, v: impl Into<String>) -> Self {
        self.block_hash = Some(v.into());
        self
    }

    /// Set the quantum-state tag.
    pub fn with_quantum_state(mut self, v: impl Into<String>) -> Self {
        self.quantum_state = Some(v.into());
        self
    }

    /// Set the entropy scalar.
    pub fn with_entropy_scalar(mut self, v: f64) -> Self {
        self.entropy_scalar = Some(v);
        self
    }
}

/// Validated block hash: lowercase hex digits without the `0x` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockHash(String);

impl BlockHash {
    /// Minimum number of hex digits.
    pub const MIN_DIGITS: usize = 4;

    /// Accept an optional `0x` prefix followed by at least four hex digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);
        if digits.len() < Self::MIN_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(digits.to_ascii_lowercase()))
    }

    /// Hex digits, lowercase, no prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Successive digit pairs as bytes. A trailing odd digit becomes its own byte.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.as_bytes().chunks(2).map(|pair| {
            pair.iter()
                .fold(0u8, |acc, &d| (acc << 4) | hex_value(d))
        })
    }
}

fn hex_value(d: u8) -> u8 {
    match d {
        b'0'..=b'9' => d - b'0',
        b'a'..=b'f' => d - b'a' + 10,
        b'A'..=b'F' => d - b'A' + 10,
        _ => 0,
    }
}

/// Validated entropy. Each field is present only when its input was well-formed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntropyContext {
    /// Block height.
    pub block_height: Option<u64>,
    /// Hex-like block hash.
    pub block_hash: Option<BlockHash>,
    /// Quantum-state tag.
    pub quantum_state: Option<QuantumState>,
    /// Scalar normalized to `[0, 1]`.
    pub entropy_scalar: Option<f64>,
}

impl EntropyContext {
    /// Validate raw input. Malformed fields are dropped one at a time.
    pub fn from_input(input: &EntropyInput) -> Self {
        let block_hash = input.block_hash.as_deref().and_then(|raw| {
            let parsed = BlockHash::parse(raw);
            if parsed.is_none() {
                debug!(value = raw, "block hash is not hex-like, dropping");
            }
            parsed
        });
        let quantum_state = input.quantum_state.as_deref().and_then(|raw| {
            let parsed = QuantumState::parse(raw);
            if parsed.is_none() {
                debug!(value = raw, "unknown quantum state, dropping");
            }
            parsed
        });
        let entropy_scalar = input.entropy_scalar.and_then(|raw| {
            let parsed = normalize_scalar(raw);
            if parsed.is_none() {
                debug!(value = raw, "entropy scalar is not finite, dropping");
            }
            parsed
        });

        Self {
            block_height: input.block_height,
            block_hash,
            quantum_state,
            entropy_scalar,
        }
    }

    /// Scalar in `[0, 1]`, or [`DEFAULT_ENTROPY_SCALAR`].
    pub fn scalar(&self) -> f64 {
        self.entropy_scalar.unwrap_or(DEFAULT_ENTROPY_SCALAR)
    }

    /// `true` when the context carries block data (height or hash).
    pub fn has_chain_data(&self) -> bool {
        self.block_height.is_some() || self.block_hash.is_some()
    }

    /// `true` when no field survived validation.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Map a 0-1 or 0-100 value onto `[0, 1]`.
pub fn normalize_scalar(raw: f64) -> Option<f64> {
    if !raw.is_finite() {
        return None;
    }
    let v = if raw > 1.0 { raw / 100.0 } else { raw };
    Some(v.clamp(0.0, 1.0))
}

fn loose_height<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn loose_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn loose_number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/entropy/context.rs"]
mod tests;
