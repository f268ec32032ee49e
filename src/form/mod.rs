// Presentation state of the converter screen: one text input, two unit pickers, a result

use crate::config::FormDefaults;
use crate::units::{ConversionRequest, LengthUnit, UNPARSED_RESULT};
use log::debug;

/// A picker entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitOption {
    pub label: &'static str,
    pub unit: LengthUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterForm {
    value: String,
    from: LengthUnit,
    to: LengthUnit,
    result: String,
}

impl ConverterForm {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            value: defaults.value.clone(),
            from: defaults.from,
            to: defaults.to,
            result: UNPARSED_RESULT.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn from_unit(&self) -> LengthUnit {
        self.from
    }

    pub fn to_unit(&self) -> LengthUnit {
        self.to
    }

    /// Text last produced by `submit`
    pub fn result(&self) -> &str {
        &self.result
    }

    // Editing does not recompute the result; only submit does
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn select_from(&mut self, unit: LengthUnit) {
        self.from = unit;
    }

    pub fn select_to(&mut self, unit: LengthUnit) {
        self.to = unit;
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Run the conversion for the current input and store the result
    pub fn submit(&mut self) -> &str {
        let outcome = ConversionRequest::new(&self.value, self.from, self.to).run();
        if outcome.is_unparsed() {
            debug!("Input {:?} has no numeric prefix, showing {}", self.value, UNPARSED_RESULT);
        } else {
            debug!(
                "Converted {:?} {} -> {} {}",
                self.value, self.from, outcome, self.to
            );
        }
        self.result = outcome.into_string();
        &self.result
    }

    /// Picker entries in table order
    pub fn unit_options() -> Vec<UnitOption> {
        LengthUnit::ALL
            .iter()
            .map(|&unit| UnitOption {
                label: unit.name(),
                unit,
            })
            .collect()
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new(&FormDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let form = ConverterForm::default();
        assert_eq!(form.value(), "0");
        assert_eq!(form.from_unit(), LengthUnit::Metre);
        assert_eq!(form.to_unit(), LengthUnit::Foot);
        assert_eq!(form.result(), "0");
    }

    #[test]
    fn test_result_only_changes_on_submit() {
        let mut form = ConverterForm::default();
        form.set_value("1");
        assert_eq!(form.result(), "0");

        assert_eq!(form.submit(), "3.2808");
        form.select_to(LengthUnit::Millimetre);
        assert_eq!(form.result(), "3.2808");

        assert_eq!(form.submit(), "1000.0000");
    }

    #[test]
    fn test_unparsed_input_resets_result() {
        let mut form = ConverterForm::default();
        form.set_value("10");
        form.submit();
        form.set_value("ten");
        assert_eq!(form.submit(), "0");
    }

    #[test]
    fn test_swap_units() {
        let mut form = ConverterForm::default();
        form.set_value("3.28084");
        form.swap_units();
        assert_eq!(form.from_unit(), LengthUnit::Foot);
        assert_eq!(form.to_unit(), LengthUnit::Metre);
        assert_eq!(form.submit(), "1.0000");
    }

    #[test]
    fn test_unit_options_follow_table_order() {
        let labels: Vec<_> = ConverterForm::unit_options()
            .iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(labels, ["Metre", "Millimetre", "Mile", "Foot"]);
    }

    #[test]
    fn test_form_from_defaults() {
        let defaults = FormDefaults {
            value: "2".to_string(),
            from: LengthUnit::Mile,
            to: LengthUnit::Metre,
        };
        let mut form = ConverterForm::new(&defaults);
        assert_eq!(form.submit(), "3218.6890");
    }
}
