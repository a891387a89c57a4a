//! Stroke width tokens - named scale for borders and dividers.

/// Semantic stroke token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StrokeToken {
    Hairline,
    Thin,
    Thick,
}

/// Pixel values for the stroke scale.
#[derive(Clone, Debug)]
pub struct StrokeTokens {
    pub hairline: f32,
    pub thin: f32,
    pub thick: f32,
}

impl StrokeTokens {
    pub fn get(&self, token: StrokeToken) -> f32 {
        match token {
            StrokeToken::Hairline => self.hairline,
            StrokeToken::Thin => self.thin,
            StrokeToken::Thick => self.thick,
        }
    }
}

impl Default for StrokeTokens {
    fn default() -> Self {
        Self {
            hairline: 1.0,
            thin: 1.5,
            thick: 2.0,
        }
    }
}
