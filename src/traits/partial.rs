use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Loosely-typed trait input as it arrives from external collaborators.
///
/// Every field is optional. Values of the wrong JSON type are treated as absent rather than
/// rejected, so stored records with drifting schemas still render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTraitDescriptor {
    /// Theme tag (`quantum`, `theme-b`, ...).
    #[serde(deserialize_with = "loose_string")]
    pub category: Option<String>,
    /// Rarity tag.
    #[serde(alias = "rarityTier", alias = "rarity_tier", deserialize_with = "loose_string")]
    pub rarity: Option<String>,
    /// Hex colours, primary first. `None` entries are malformed inputs.
    #[serde(deserialize_with = "loose_palette")]
    pub palette: Option<Vec<Option<String>>>,
    /// Accessory tags in any order.
    #[serde(
        alias = "accessorySet",
        alias = "accessory_set",
        deserialize_with = "loose_strings"
    )]
    pub accessories: Option<Vec<String>>,
    /// Expression tag.
    #[serde(deserialize_with = "loose_string")]
    pub expression: Option<String>,
    /// Text-backend eye style tag.
    #[serde(alias = "eyeStyle", deserialize_with = "loose_string")]
    pub eye_style: Option<String>,
    /// Text-backend coat pattern tag.
    #[serde(deserialize_with = "loose_string")]
    pub pattern: Option<String>,
    /// Special flag.
    #[serde(deserialize_with = "loose_bool")]
    pub special: Option<bool>,
    /// Physical feature tags.
    #[serde(alias = "featureTags", deserialize_with = "loose_features")]
    pub features: Option<PartialFeatureTags>,
}

/// Loosely-typed feature tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFeatureTags {
    /// Fur length tag.
    #[serde(alias = "furLength", deserialize_with = "loose_string")]
    pub fur_length: Option<String>,
    /// Ear shape tag.
    #[serde(alias = "earShape", deserialize_with = "loose_string")]
    pub ear_shape: Option<String>,
    /// Tail type tag.
    #[serde(alias = "tailType", deserialize_with = "loose_string")]
    pub tail_type: Option<String>,
    /// Paw style tag.
    #[serde(alias = "pawStyle", deserialize_with = "loose_string")]
    pub paw_style: Option<String>,
    /// Muzzle shape tag.
    #[serde(alias = "muzzleShape", deserialize_with = "loose_string")]
    pub muzzle_shape: Option<String>,
    /// Facial markings tag.
    #[serde(
        alias = "facialMarkings",
        alias = "facial_markings",
        deserialize_with = "loose_string"
    )]
    pub markings: Option<String>,
}

impl PartialTraitDescriptor {
    /// Set the category tag.
    pub fn with_category(mut self, v: impl Into<String>) -> Self {
        self.category = Some(v.into());
        self
    }

    /// Set the rarity tag.
    pub fn with_rarity(mut self, v: impl Into<String>) -> Self {
        self.rarity = Some(v.into());
        self
    }

    /// Set the palette from hex strings.
    pub fn with_palette<I, S>(mut self, colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = Some(colours.into_iter().map(|c| Some(c.into())).collect());
        self
    }

    /// Set the accessory tags.
    pub fn with_accessories<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessories = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the expression tag.
    pub fn with_expression(mut self, v: impl Into<String>) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Set the eye style tag.
    pub fn with_eye_style(mut self, v: impl Into<String>) -> Self {
        self.eye_style = Some(v.into());
        self
    }

    /// Set the pattern tag.
    pub fn with_pattern(mut self, v: impl Into<String>) -> Self {
        self.pattern = Some(v.into());
        self
    }

    /// Set the special flag.
    pub fn with_special(mut self, v: bool) -> Self {
        self.special = Some(v);
        self
    }

    /// Set the feature tags.
    pub fn with_features(mut self, v: PartialFeatureTags) -> Self {
        self.features = Some(v);
        self
    }
}

fn loose_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn loose_strings<'de, D>(d: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        Value::String(s) => Some(vec![s]),
        // `{"hat": true, "glasses": false}`
        Value::Object(map) => Some(
            map.into_iter()
                .filter(|(_, v)| matches!(v, Value::Bool(true)))
                .map(|(k, _)| k)
                .collect(),
        ),
        _ => None,
    })
}

fn loose_palette<'de, D>(d: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        Value::String(s) => Some(vec![Some(s)]),
        _ => None,
    })
}

fn loose_bool<'de, D>(d: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn loose_features<'de, D>(d: D) -> Result<Option<PartialFeatureTags>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/traits/partial.rs"]
mod tests;
