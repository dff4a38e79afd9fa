use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StrandError;

/// How the backbone cartoon is colored.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CartoonColorMode {
    /// Single palette color.
    #[default]
    Uniform,
    /// Rainbow gradient along each strand.
    Spectrum,
}

impl CartoonColorMode {
    /// The other mode.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Uniform => Self::Spectrum,
            Self::Spectrum => Self::Uniform,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Spectrum => "spectrum",
        }
    }
}

impl FromStr for CartoonColorMode {
    type Err = StrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "default" => Ok(Self::Uniform),
            "spectrum" | "rainbow" => Ok(Self::Spectrum),
            other => Err(StrandError::InvalidControlValue {
                control: DisplayControl::CartoonColor.to_string(),
                value: other.to_owned(),
            }),
        }
    }
}

/// Display toggles and coloring mode selections.
///
/// This is pure UI state: it mirrors the page's checkboxes and selectors,
/// and the whole visual style is re-derived from it on every change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Whether to draw the backbone cartoon.
    #[schemars(title = "Show Backbone")]
    pub show_cartoon: bool,
    /// Whether to draw stick bonds.
    #[schemars(title = "Show Sticks")]
    pub show_sticks: bool,
    /// Whether sticks use the per-base palette instead of element colors.
    #[schemars(title = "Color by Base")]
    pub color_by_base: bool,
    /// Backbone coloring strategy.
    #[schemars(title = "Backbone Color")]
    pub cartoon_color: CartoonColorMode,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_cartoon: true,
            show_sticks: true,
            color_by_base: true,
            cartoon_color: CartoonColorMode::Uniform,
        }
    }
}

impl DisplayOptions {
    /// Build options from initial control values. Controls that are absent
    /// keep their defaults; unknown or malformed ones are logged and
    /// skipped.
    #[must_use]
    pub fn from_controls<'a, I>(controls: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, ControlValue)>,
    {
        let mut opts = Self::default();
        for (name, value) in controls {
            let result = name
                .parse::<DisplayControl>()
                .and_then(|control| opts.set(control, &value));
            if let Err(e) = result {
                log::warn!("ignoring initial control '{name}': {e}");
            }
        }
        opts
    }

    /// Current value of one control.
    #[must_use]
    pub fn get(&self, control: DisplayControl) -> ControlValue {
        match control {
            DisplayControl::Cartoon => ControlValue::Bool(self.show_cartoon),
            DisplayControl::Sticks => ControlValue::Bool(self.show_sticks),
            DisplayControl::BaseColors => {
                ControlValue::Bool(self.color_by_base)
            }
            DisplayControl::CartoonColor => {
                ControlValue::Choice(self.cartoon_color.as_str().to_owned())
            }
        }
    }

    /// Set one control from a UI value.
    pub fn set(
        &mut self,
        control: DisplayControl,
        value: &ControlValue,
    ) -> Result<(), StrandError> {
        match (control, value) {
            (DisplayControl::Cartoon, ControlValue::Bool(on)) => {
                self.show_cartoon = *on;
            }
            (DisplayControl::Sticks, ControlValue::Bool(on)) => {
                self.show_sticks = *on;
            }
            (DisplayControl::BaseColors, ControlValue::Bool(on)) => {
                self.color_by_base = *on;
            }
            (DisplayControl::CartoonColor, ControlValue::Choice(choice)) => {
                self.cartoon_color = choice.parse()?;
            }
            _ => {
                return Err(StrandError::InvalidControlValue {
                    control: control.to_string(),
                    value: value.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Flip a boolean control, or cycle a choice control.
    pub fn toggle(&mut self, control: DisplayControl) {
        match control {
            DisplayControl::Cartoon => self.show_cartoon = !self.show_cartoon,
            DisplayControl::Sticks => self.show_sticks = !self.show_sticks,
            DisplayControl::BaseColors => {
                self.color_by_base = !self.color_by_base;
            }
            DisplayControl::CartoonColor => {
                self.cartoon_color = self.cartoon_color.cycled();
            }
        }
    }
}

/// A named display control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayControl {
    /// Backbone cartoon checkbox.
    Cartoon,
    /// Stick bonds checkbox.
    Sticks,
    /// Per-base coloring checkbox.
    BaseColors,
    /// Backbone color selector.
    CartoonColor,
}

impl DisplayControl {
    /// Every control, in page order.
    pub const ALL: [Self; 4] =
        [Self::Sticks, Self::Cartoon, Self::BaseColors, Self::CartoonColor];
}

impl fmt::Display for DisplayControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cartoon => "cartoon",
            Self::Sticks => "sticks",
            Self::BaseColors => "bases",
            Self::CartoonColor => "cartoon_color",
        };
        f.write_str(name)
    }
}

impl FromStr for DisplayControl {
    type Err = StrandError;

    /// Accepts canonical names (`sticks`), page element ids (`cb-sticks`),
    /// and labels (`Show side-chain sticks`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let stripped = lowered
            .strip_prefix("cb-")
            .or_else(|| lowered.strip_prefix("sel-"))
            .unwrap_or(&lowered);
        let normalized = stripped.replace(['-', ' '], "_");
        match normalized.as_str() {
            "cartoon" | "show_cartoon" | "backbone" | "show_backbone" => {
                Ok(Self::Cartoon)
            }
            "sticks" | "stick" | "show_sticks" | "show_side_chain_sticks" => {
                Ok(Self::Sticks)
            }
            "bases" | "base_colors" | "color_by_base"
            | "color_by_base_type" => Ok(Self::BaseColors),
            "cartoon_color" | "cartoon_color_mode" | "backbone_color" => {
                Ok(Self::CartoonColor)
            }
            _ => Err(StrandError::UnknownControl(s.to_owned())),
        }
    }
}

/// Value carried by a control-change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    /// Checkbox state.
    Bool(bool),
    /// Selected option of an enumerated control.
    Choice(String),
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(on) => write!(f, "{on}"),
            Self::Choice(choice) => f.write_str(choice),
        }
    }
}
