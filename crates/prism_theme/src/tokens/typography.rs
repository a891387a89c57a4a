//! Typography tokens.

/// One text treatment: size, weight, line height, letter spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: u16,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl TextStyle {
    pub const fn new(size: f32, weight: u16, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            size,
            weight,
            line_height,
            letter_spacing,
        }
    }
}

/// Semantic typography token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    LabelSm,
    LabelMd,
    LabelLg,
    BodySm,
    BodyMd,
    Title,
}

/// The typography scale used by component text slots.
#[derive(Clone, Debug)]
pub struct TypographyTokens {
    pub label_sm: TextStyle,
    pub label_md: TextStyle,
    pub label_lg: TextStyle,
    pub body_sm: TextStyle,
    pub body_md: TextStyle,
    pub title: TextStyle,
}

impl TypographyTokens {
    pub fn get(&self, token: TypographyToken) -> TextStyle {
        match token {
            TypographyToken::LabelSm => self.label_sm,
            TypographyToken::LabelMd => self.label_md,
            TypographyToken::LabelLg => self.label_lg,
            TypographyToken::BodySm => self.body_sm,
            TypographyToken::BodyMd => self.body_md,
            TypographyToken::Title => self.title,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            label_sm: TextStyle::new(11.0, 500, 16.0, 0.1),
            label_md: TextStyle::new(12.0, 500, 16.0, 0.0),
            label_lg: TextStyle::new(13.0, 500, 20.0, 0.0),
            body_sm: TextStyle::new(12.0, 400, 16.0, 0.0),
            body_md: TextStyle::new(14.0, 400, 20.0, 0.0),
            title: TextStyle::new(16.0, 600, 24.0, -0.1),
        }
    }
}
