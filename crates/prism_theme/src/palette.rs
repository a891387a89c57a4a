//! Primitive color palette
//!
//! The palette is the only source of truth for concrete color values. It is
//! a fixed set of ramps: opaque hue scales keyed by numeric shade, plus
//! alpha ramps whose shade encodes the opacity step. Nothing above this
//! layer hard-codes a color; themes refer to palette entries through
//! symbolic token references (see [`crate::resolve`]).

use prism_core::Color;

/// One named ramp: shade keys (0..=1000, ascending) mapped to colors.
#[derive(Debug)]
pub struct ColorRamp {
    name: &'static str,
    entries: &'static [(u16, Color)],
}

impl ColorRamp {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact shade lookup.
    pub fn shade(&self, shade: u16) -> Option<Color> {
        self.entries
            .iter()
            .find(|(key, _)| *key == shade)
            .map(|(_, color)| *color)
    }

    /// All `(shade, color)` entries, ascending by shade.
    pub fn entries(&self) -> &'static [(u16, Color)] {
        self.entries
    }
}

const fn hex(value: u32) -> Color {
    Color::from_hex(value)
}

const fn alpha(value: u32, a: f32) -> Color {
    Color::from_hex(value).with_alpha(a)
}

static GRAY: &[(u16, Color)] = &[
    (0, hex(0xFFFFFF)),
    (50, hex(0xFAFAFA)),
    (100, hex(0xF5F5F5)),
    (200, hex(0xE5E5E5)),
    (300, hex(0xD4D4D4)),
    (400, hex(0xA3A3A3)),
    (500, hex(0x737373)),
    (600, hex(0x525252)),
    (700, hex(0x404040)),
    (800, hex(0x262626)),
    (900, hex(0x171717)),
    (950, hex(0x0A0A0A)),
    (1000, hex(0x000000)),
];

static RED: &[(u16, Color)] = &[
    (50, hex(0xFEF2F2)),
    (100, hex(0xFEE2E2)),
    (200, hex(0xFECACA)),
    (300, hex(0xFCA5A5)),
    (400, hex(0xF87171)),
    (500, hex(0xEF4444)),
    (600, hex(0xDC2626)),
    (700, hex(0xB91C1C)),
    (800, hex(0x991B1B)),
    (900, hex(0x7F1D1D)),
    (950, hex(0x450A0A)),
];

static ORANGE: &[(u16, Color)] = &[
    (50, hex(0xFFF7ED)),
    (100, hex(0xFFEDD5)),
    (200, hex(0xFED7AA)),
    (300, hex(0xFDBA74)),
    (400, hex(0xFB923C)),
    (500, hex(0xF97316)),
    (600, hex(0xEA580C)),
    (700, hex(0xC2410C)),
    (800, hex(0x9A3412)),
    (900, hex(0x7C2D12)),
    (950, hex(0x431407)),
];

static GREEN: &[(u16, Color)] = &[
    (50, hex(0xF0FDF4)),
    (100, hex(0xDCFCE7)),
    (200, hex(0xBBF7D0)),
    (300, hex(0x86EFAC)),
    (400, hex(0x4ADE80)),
    (500, hex(0x22C55E)),
    (600, hex(0x16A34A)),
    (700, hex(0x15803D)),
    (800, hex(0x166534)),
    (900, hex(0x14532D)),
    (950, hex(0x052E16)),
];

static TEAL: &[(u16, Color)] = &[
    (50, hex(0xF0FDFA)),
    (100, hex(0xCCFBF1)),
    (200, hex(0x99F6E4)),
    (300, hex(0x5EEAD4)),
    (400, hex(0x2DD4BF)),
    (500, hex(0x14B8A6)),
    (600, hex(0x0D9488)),
    (700, hex(0x0F766E)),
    (800, hex(0x115E59)),
    (900, hex(0x134E4A)),
    (950, hex(0x042F2E)),
];

static BLUE: &[(u16, Color)] = &[
    (50, hex(0xEFF6FF)),
    (100, hex(0xDBEAFE)),
    (200, hex(0xBFDBFE)),
    (300, hex(0x93C5FD)),
    (400, hex(0x60A5FA)),
    (500, hex(0x3B82F6)),
    (600, hex(0x2563EB)),
    (700, hex(0x1D4ED8)),
    (800, hex(0x1E40AF)),
    (900, hex(0x1E3A8A)),
    (950, hex(0x172554)),
];

// Alpha ramps: the shade is the opacity step in percent.

static TRANSPARENT_DARK: &[(u16, Color)] = &[
    (0, alpha(0x000000, 0.0)),
    (5, alpha(0x000000, 0.05)),
    (10, alpha(0x000000, 0.10)),
    (15, alpha(0x000000, 0.15)),
    (20, alpha(0x000000, 0.20)),
    (30, alpha(0x000000, 0.30)),
    (40, alpha(0x000000, 0.40)),
    (50, alpha(0x000000, 0.50)),
    (60, alpha(0x000000, 0.60)),
    (80, alpha(0x000000, 0.80)),
];

static TRANSPARENT_WHITE: &[(u16, Color)] = &[
    (0, alpha(0xFFFFFF, 0.0)),
    (5, alpha(0xFFFFFF, 0.05)),
    (10, alpha(0xFFFFFF, 0.10)),
    (15, alpha(0xFFFFFF, 0.15)),
    (20, alpha(0xFFFFFF, 0.20)),
    (30, alpha(0xFFFFFF, 0.30)),
    (40, alpha(0xFFFFFF, 0.40)),
    (50, alpha(0xFFFFFF, 0.50)),
    (60, alpha(0xFFFFFF, 0.60)),
    (80, alpha(0xFFFFFF, 0.80)),
];

static TRANSPARENT_GRAY: &[(u16, Color)] = &[
    (5, alpha(0x737373, 0.05)),
    (10, alpha(0x737373, 0.10)),
    (15, alpha(0x737373, 0.15)),
    (20, alpha(0x737373, 0.20)),
    (30, alpha(0x737373, 0.30)),
];

static TRANSPARENT_RED: &[(u16, Color)] = &[
    (5, alpha(0xEF4444, 0.05)),
    (10, alpha(0xEF4444, 0.10)),
    (15, alpha(0xEF4444, 0.15)),
    (20, alpha(0xEF4444, 0.20)),
    (30, alpha(0xEF4444, 0.30)),
];

static TRANSPARENT_ORANGE: &[(u16, Color)] = &[
    (5, alpha(0xF97316, 0.05)),
    (10, alpha(0xF97316, 0.10)),
    (15, alpha(0xF97316, 0.15)),
    (20, alpha(0xF97316, 0.20)),
    (30, alpha(0xF97316, 0.30)),
];

static TRANSPARENT_GREEN: &[(u16, Color)] = &[
    (5, alpha(0x22C55E, 0.05)),
    (10, alpha(0x22C55E, 0.10)),
    (15, alpha(0x22C55E, 0.15)),
    (20, alpha(0x22C55E, 0.20)),
    (30, alpha(0x22C55E, 0.30)),
];

static TRANSPARENT_TEAL: &[(u16, Color)] = &[
    (5, alpha(0x14B8A6, 0.05)),
    (10, alpha(0x14B8A6, 0.10)),
    (15, alpha(0x14B8A6, 0.15)),
    (20, alpha(0x14B8A6, 0.20)),
    (30, alpha(0x14B8A6, 0.30)),
];

static TRANSPARENT_BLUE: &[(u16, Color)] = &[
    (5, alpha(0x3B82F6, 0.05)),
    (10, alpha(0x3B82F6, 0.10)),
    (15, alpha(0x3B82F6, 0.15)),
    (20, alpha(0x3B82F6, 0.20)),
    (30, alpha(0x3B82F6, 0.30)),
];

static RAMPS: &[ColorRamp] = &[
    ColorRamp { name: "gray", entries: GRAY },
    ColorRamp { name: "red", entries: RED },
    ColorRamp { name: "orange", entries: ORANGE },
    ColorRamp { name: "green", entries: GREEN },
    ColorRamp { name: "teal", entries: TEAL },
    ColorRamp { name: "blue", entries: BLUE },
    ColorRamp { name: "transparent-dark", entries: TRANSPARENT_DARK },
    ColorRamp { name: "transparent-white", entries: TRANSPARENT_WHITE },
    ColorRamp { name: "transparent-gray", entries: TRANSPARENT_GRAY },
    ColorRamp { name: "transparent-red", entries: TRANSPARENT_RED },
    ColorRamp { name: "transparent-orange", entries: TRANSPARENT_ORANGE },
    ColorRamp { name: "transparent-green", entries: TRANSPARENT_GREEN },
    ColorRamp { name: "transparent-teal", entries: TRANSPARENT_TEAL },
    ColorRamp { name: "transparent-blue", entries: TRANSPARENT_BLUE },
];

/// The immutable table of color ramps.
#[derive(Debug)]
pub struct Palette {
    ramps: &'static [ColorRamp],
}

static BUILTIN: Palette = Palette { ramps: RAMPS };

impl Palette {
    /// The built-in palette. Defined once, never mutated.
    pub fn builtin() -> &'static Palette {
        &BUILTIN
    }

    /// Case-insensitive ramp lookup.
    pub fn ramp(&self, name: &str) -> Option<&ColorRamp> {
        self.ramps
            .iter()
            .find(|ramp| ramp.name.eq_ignore_ascii_case(name))
    }

    /// All ramps in the palette.
    pub fn ramps(&self) -> &'static [ColorRamp] {
        self.ramps
    }
}
