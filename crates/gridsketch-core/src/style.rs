//! Style model shared by the designer and the settings crate.
//!
//! Styles resolve in three tiers: a per-object override, then the global
//! defaults (`StyleDefaults`, sparse), then the built-in constants below.
//! A committed object carries the defaults as they were when it was drawn;
//! [`StyleDefaults::resolve_field`] supplies the last two tiers for anything
//! else.

use serde::{Deserialize, Serialize};

/// Built-in stroke colour (RGB).
pub const BUILTIN_COLOR: u32 = 0x000000;
/// Built-in stroke width in world units.
pub const BUILTIN_STROKE_WIDTH: f64 = 1.0;
/// Built-in stroke opacity.
pub const BUILTIN_STROKE_ALPHA: f64 = 1.0;
/// Built-in fill colour (RGB).
pub const BUILTIN_FILL_COLOR: u32 = 0xffffff;
/// Built-in fill opacity. Zero means shapes are drawn unfilled.
pub const BUILTIN_FILL_ALPHA: f64 = 0.0;

/// A single style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleField {
    Color,
    StrokeWidth,
    StrokeAlpha,
    FillColor,
    FillAlpha,
}

impl StyleField {
    /// Every field, in display order.
    pub const ALL: [StyleField; 5] = [
        StyleField::Color,
        StyleField::StrokeWidth,
        StyleField::StrokeAlpha,
        StyleField::FillColor,
        StyleField::FillAlpha,
    ];

    /// Whether `value` has the right type for this field.
    pub fn accepts(self, value: StyleValue) -> bool {
        match self {
            StyleField::Color | StyleField::FillColor => matches!(value, StyleValue::Color(_)),
            StyleField::StrokeWidth | StyleField::StrokeAlpha | StyleField::FillAlpha => {
                matches!(value, StyleValue::Number(_))
            }
        }
    }

    /// The hard-coded fallback used when neither an override nor a default is set.
    pub fn builtin(self) -> StyleValue {
        match self {
            StyleField::Color => StyleValue::Color(BUILTIN_COLOR),
            StyleField::StrokeWidth => StyleValue::Number(BUILTIN_STROKE_WIDTH),
            StyleField::StrokeAlpha => StyleValue::Number(BUILTIN_STROKE_ALPHA),
            StyleField::FillColor => StyleValue::Color(BUILTIN_FILL_COLOR),
            StyleField::FillAlpha => StyleValue::Number(BUILTIN_FILL_ALPHA),
        }
    }
}

impl std::fmt::Display for StyleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::StrokeWidth => write!(f, "stroke_width"),
            Self::StrokeAlpha => write!(f, "stroke_alpha"),
            Self::FillColor => write!(f, "fill_color"),
            Self::FillAlpha => write!(f, "fill_alpha"),
        }
    }
}

/// The value of a style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue {
    /// 24-bit RGB colour.
    Color(u32),
    Number(f64),
}

/// A fully resolved style, as stored on a committed object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: u32,
    pub stroke_width: f64,
    pub stroke_alpha: f64,
    pub fill_color: u32,
    pub fill_alpha: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: BUILTIN_COLOR,
            stroke_width: BUILTIN_STROKE_WIDTH,
            stroke_alpha: BUILTIN_STROKE_ALPHA,
            fill_color: BUILTIN_FILL_COLOR,
            fill_alpha: BUILTIN_FILL_ALPHA,
        }
    }
}

impl Style {
    /// Read one field.
    pub fn get(&self, field: StyleField) -> StyleValue {
        match field {
            StyleField::Color => StyleValue::Color(self.color),
            StyleField::StrokeWidth => StyleValue::Number(self.stroke_width),
            StyleField::StrokeAlpha => StyleValue::Number(self.stroke_alpha),
            StyleField::FillColor => StyleValue::Color(self.fill_color),
            StyleField::FillAlpha => StyleValue::Number(self.fill_alpha),
        }
    }

    /// Write one field. Returns `false` if the value type does not match.
    pub fn set(&mut self, field: StyleField, value: StyleValue) -> bool {
        match (field, value) {
            (StyleField::Color, StyleValue::Color(c)) => self.color = c,
            (StyleField::FillColor, StyleValue::Color(c)) => self.fill_color = c,
            (StyleField::StrokeWidth, StyleValue::Number(n)) => self.stroke_width = n,
            (StyleField::StrokeAlpha, StyleValue::Number(n)) => self.stroke_alpha = n,
            (StyleField::FillAlpha, StyleValue::Number(n)) => self.fill_alpha = n,
            _ => return false,
        }
        true
    }

    /// Whether the fill is visible at all.
    pub fn has_fill(&self) -> bool {
        self.fill_alpha > 0.0
    }
}

/// Global default style, edited by the style panel.
///
/// Sparse: unset fields fall back to the built-in constants. Passed
/// explicitly to the store and the drawing session at the moment of use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_alpha: Option<f64>,
}

impl StyleDefaults {
    /// The default set by the style panel for `field`, if any.
    pub fn get(&self, field: StyleField) -> Option<StyleValue> {
        match field {
            StyleField::Color => self.color.map(StyleValue::Color),
            StyleField::StrokeWidth => self.stroke_width.map(StyleValue::Number),
            StyleField::StrokeAlpha => self.stroke_alpha.map(StyleValue::Number),
            StyleField::FillColor => self.fill_color.map(StyleValue::Color),
            StyleField::FillAlpha => self.fill_alpha.map(StyleValue::Number),
        }
    }

    /// Set a default. Returns `false` if the value type does not match.
    pub fn set(&mut self, field: StyleField, value: StyleValue) -> bool {
        match (field, value) {
            (StyleField::Color, StyleValue::Color(c)) => self.color = Some(c),
            (StyleField::FillColor, StyleValue::Color(c)) => self.fill_color = Some(c),
            (StyleField::StrokeWidth, StyleValue::Number(n)) => self.stroke_width = Some(n),
            (StyleField::StrokeAlpha, StyleValue::Number(n)) => self.stroke_alpha = Some(n),
            (StyleField::FillAlpha, StyleValue::Number(n)) => self.fill_alpha = Some(n),
            _ => {
                tracing::warn!(%field, ?value, "style default has the wrong value type");
                return false;
            }
        }
        true
    }

    /// Remove a default so the field falls back to its built-in.
    pub fn clear(&mut self, field: StyleField) {
        match field {
            StyleField::Color => self.color = None,
            StyleField::StrokeWidth => self.stroke_width = None,
            StyleField::StrokeAlpha => self.stroke_alpha = None,
            StyleField::FillColor => self.fill_color = None,
            StyleField::FillAlpha => self.fill_alpha = None,
        }
    }

    /// Default for `field`, falling back to the built-in constant.
    pub fn resolve_field(&self, field: StyleField) -> StyleValue {
        self.get(field).unwrap_or_else(|| field.builtin())
    }

    /// Resolve every field into a concrete style.
    pub fn resolve(&self) -> Style {
        Style {
            color: self.color.unwrap_or(BUILTIN_COLOR),
            stroke_width: self.stroke_width.unwrap_or(BUILTIN_STROKE_WIDTH),
            stroke_alpha: self.stroke_alpha.unwrap_or(BUILTIN_STROKE_ALPHA),
            fill_color: self.fill_color.unwrap_or(BUILTIN_FILL_COLOR),
            fill_alpha: self.fill_alpha.unwrap_or(BUILTIN_FILL_ALPHA),
        }
    }
}
