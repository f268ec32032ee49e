// WebAssembly bindings for web and mobile front ends
use crate::theme::Theme;
use crate::units::{self, LengthUnit, UNIT_TABLE};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitConverterWasm {}

impl Default for UnitConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert a raw input value between two units given by name
    /// Returns the display string ("0" for non-numeric input)
    #[wasm_bindgen]
    pub fn convert(&self, raw_value: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let from: LengthUnit = from
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Invalid source unit: {}", e)))?;
        let to: LengthUnit = to
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Invalid target unit: {}", e)))?;

        Ok(units::convert(raw_value, from, to))
    }

    /// Unit table for picker population
    /// Returns JSON array of {"name": ..., "factor": ...} in table order
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        let entries: Vec<_> = UNIT_TABLE
            .entries()
            .map(|(unit, factor)| {
                serde_json::json!({
                    "name": unit.name(),
                    "symbol": unit.symbol(),
                    "factor": factor,
                })
            })
            .collect();

        serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Style tokens for a preset theme
    /// Returns JSON object with palette, radius, spacing, font and button
    #[wasm_bindgen]
    pub fn theme(&self, name: &str) -> Result<String, JsValue> {
        let theme = Theme::preset(name).map_err(|e| JsValue::from_str(&e.to_string()))?;

        theme
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize theme: {}", e)))
    }

    /// Names of the built-in themes as a JSON array
    #[wasm_bindgen]
    pub fn theme_names(&self) -> Result<String, JsValue> {
        serde_json::to_string(Theme::preset_names())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize theme names: {}", e)))
    }
}
