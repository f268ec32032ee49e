// Style tokens for the converter form
// One presentation layer, parameterized by a Theme, replaces per-look copies of the screen

pub mod color;
pub mod error;

pub use color::Color;
pub use error::ThemeError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    /// Corner radius in points; 0 means square corners
    pub radius: u16,
    pub spacing: Spacing,
    pub font: FontSizes,
    pub button: ButtonStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub background: Color,
    pub title: Color,
    pub text: Color,
    pub placeholder: Color,
    pub border: Color,
    pub input_background: Color,
    pub picker_background: Color,
    pub accent: Color,
    pub button_text: Color,
    pub result: Color,
}

/// Spacing in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spacing {
    /// Padding around the whole form
    pub padding: u16,
    /// Vertical gap between rows
    pub gap: u16,
    /// Padding inside the text input
    pub input_padding: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSizes {
    pub title: u16,
    pub input: u16,
    pub arrow: u16,
    pub result: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Accent-colored block with contrasting label
    Filled,
    /// Accent-colored label inside an accent border
    Outlined,
}

const PRESET_NAMES: [&str; 2] = ["classic", "rounded"];

impl Theme {
    /// Light palette, small radius and a filled button
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            palette: Palette {
                background: Color::hex(0xf0f4f8),
                title: Color::hex(0x333333),
                text: Color::hex(0x333333),
                placeholder: Color::hex(0x888888),
                border: Color::hex(0xcccccc),
                input_background: Color::hex(0xffffff),
                picker_background: Color::hex(0xffffff),
                accent: Color::hex(0x007bff),
                button_text: Color::hex(0xffffff),
                result: Color::hex(0x007bff),
            },
            radius: 5,
            spacing: Spacing {
                padding: 20,
                gap: 20,
                input_padding: 10,
            },
            font: FontSizes {
                title: 28,
                input: 18,
                arrow: 30,
                result: 28,
            },
            button: ButtonStyle::Filled,
        }
    }

    /// Softer palette, generous radius and an outlined button
    pub fn rounded() -> Self {
        Self {
            name: "rounded".to_string(),
            palette: Palette {
                background: Color::hex(0xffffff),
                title: Color::hex(0x1a237e),
                text: Color::hex(0x37474f),
                placeholder: Color::hex(0x9e9e9e),
                border: Color::hex(0x90caf9),
                input_background: Color::hex(0xf5f9ff),
                picker_background: Color::hex(0xe3f2fd),
                accent: Color::hex(0x1e88e5),
                button_text: Color::hex(0x1e88e5),
                result: Color::hex(0x43a047),
            },
            radius: 12,
            spacing: Spacing {
                padding: 24,
                gap: 16,
                input_padding: 12,
            },
            font: FontSizes {
                title: 26,
                input: 18,
                arrow: 26,
                result: 30,
            },
            button: ButtonStyle::Outlined,
        }
    }

    pub fn preset_names() -> &'static [&'static str] {
        &PRESET_NAMES
    }

    pub fn preset(name: &str) -> Result<Self, ThemeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "rounded" => Ok(Self::rounded()),
            _ => Err(ThemeError::UnknownTheme {
                name: name.to_string(),
                available: PRESET_NAMES.join(", "),
            }),
        }
    }

    /// Apply a partial theme (any subset of fields, nested tables merge)
    pub fn with_overrides(&self, overrides: &toml::Table) -> Result<Self, ThemeError> {
        if overrides.is_empty() {
            return Ok(self.clone());
        }

        let mut base = match toml::Value::try_from(self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(other) => {
                return Err(ThemeError::InvalidOverride(format!(
                    "theme serialized to {} instead of a table",
                    other.type_str()
                )))
            }
            Err(e) => return Err(ThemeError::InvalidOverride(e.to_string())),
        };
        merge_tables(&mut base, overrides);

        toml::Value::Table(base)
            .try_into::<Theme>()
            .map_err(|e: toml::de::Error| ThemeError::InvalidOverride(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

fn merge_tables(base: &mut toml::Table, overrides: &toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(patch)) => {
                merge_tables(existing, patch);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
