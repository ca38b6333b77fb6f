//! Typography tokens for theming

use serde::{Deserialize, Serialize};

use super::Scaling;

/// Font size, line height and letter spacing for one size step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizeStep {
    pub font_size: f32,
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
}

impl FontSizeStep {
    const fn new(font_size: f32, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            font_size,
            line_height,
            letter_spacing,
        }
    }
}

const BASE_SIZES: [FontSizeStep; 9] = [
    FontSizeStep::new(12.0, 16.0, 0.0025),
    FontSizeStep::new(14.0, 20.0, 0.0),
    FontSizeStep::new(16.0, 24.0, 0.0),
    FontSizeStep::new(18.0, 26.0, -0.0025),
    FontSizeStep::new(20.0, 28.0, -0.005),
    FontSizeStep::new(24.0, 30.0, -0.00625),
    FontSizeStep::new(28.0, 36.0, -0.0075),
    FontSizeStep::new(35.0, 40.0, -0.01),
    FontSizeStep::new(60.0, 60.0, -0.025),
];

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    /// Numeric CSS-style weight
    pub fn value(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Bold => 700,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Named font roles used by text components
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Body,
    Heading,
    Code,
    Strong,
    Em,
    Quote,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Font {
    fn new(family: &str, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            family: family.to_string(),
            weight,
            style,
        }
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    sizes: [FontSizeStep; 9],
    pub body: Font,
    pub heading: Font,
    pub code: Font,
    pub strong: Font,
    pub em: Font,
    pub quote: Font,
}

impl TypographyTokens {
    /// Sizes and line heights scale; letter spacing (in em) does not
    pub fn new(scaling: Scaling) -> Self {
        let factor = scaling.factor();
        Self {
            sizes: BASE_SIZES.map(|s| {
                FontSizeStep::new(s.font_size * factor, s.line_height * factor, s.letter_spacing)
            }),
            body: Font::new("System", FontWeight::Regular, FontStyle::Normal),
            heading: Font::new("System", FontWeight::Bold, FontStyle::Normal),
            code: Font::new("Menlo", FontWeight::Regular, FontStyle::Normal),
            strong: Font::new("System", FontWeight::Bold, FontStyle::Normal),
            em: Font::new("Times New Roman", FontWeight::Regular, FontStyle::Italic),
            quote: Font::new("Times New Roman", FontWeight::Regular, FontStyle::Italic),
        }
    }

    /// Size step by 1-based index (1-9)
    pub fn size(&self, step: usize) -> Option<FontSizeStep> {
        step.checked_sub(1).and_then(|i| self.sizes.get(i)).copied()
    }

    pub fn font(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Body => &self.body,
            FontRole::Heading => &self.heading,
            FontRole::Code => &self.code,
            FontRole::Strong => &self.strong,
            FontRole::Em => &self.em,
            FontRole::Quote => &self.quote,
        }
    }

    pub(crate) fn font_mut(&mut self, role: FontRole) -> &mut Font {
        match role {
            FontRole::Body => &mut self.body,
            FontRole::Heading => &mut self.heading,
            FontRole::Code => &mut self.code,
            FontRole::Strong => &mut self.strong,
            FontRole::Em => &mut self.em,
            FontRole::Quote => &mut self.quote,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::new(Scaling::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_steps() {
        let t = TypographyTokens::default();
        let step3 = t.size(3).unwrap();
        assert_eq!(step3.font_size, 16.0);
        assert_eq!(step3.line_height, 24.0);
        assert!(t.size(10).is_none());
    }

    #[test]
    fn test_scaling_keeps_letter_spacing() {
        let t = TypographyTokens::new(Scaling::P90);
        let step1 = t.size(1).unwrap();
        assert!((step1.font_size - 10.8).abs() < 1e-4);
        assert_eq!(step1.letter_spacing, 0.0025);
    }

    #[test]
    fn test_font_roles() {
        let t = TypographyTokens::default();
        assert_eq!(t.font(FontRole::Code).family, "Menlo");
        assert_eq!(t.font(FontRole::Heading).weight.value(), 700);
        assert_eq!(t.font(FontRole::Em).style, FontStyle::Italic);
    }
}
