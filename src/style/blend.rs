use std::{collections::HashMap, sync::LazyLock};

use crate::document::model::BlendMode;

const BLEND_NAMES: &[(BlendMode, &str)] = &[
    (BlendMode::NORMAL, "normal"),
    (BlendMode::DARKEN, "darken"),
    (BlendMode::MULTIPLY, "multiply"),
    (BlendMode::COLOR_BURN, "color-burn"),
    (BlendMode::LIGHTEN, "lighten"),
    (BlendMode::SCREEN, "screen"),
    (BlendMode::COLOR_DODGE, "color-dodge"),
    (BlendMode::OVERLAY, "overlay"),
    (BlendMode::SOFT_LIGHT, "soft-light"),
    (BlendMode::HARD_LIGHT, "hard-light"),
    (BlendMode::DIFFERENCE, "difference"),
    (BlendMode::EXCLUSION, "exclusion"),
    (BlendMode::HUE, "hue"),
    (BlendMode::SATURATION, "saturation"),
    (BlendMode::COLOR, "color"),
    (BlendMode::LUMINOSITY, "luminosity"),
    (BlendMode::PLUS_DARKER, "plus-darker"),
    (BlendMode::PLUS_LIGHTER, "plus-lighter"),
];

struct BlendTable {
    by_mode: HashMap<BlendMode, &'static str>,
    by_name: HashMap<&'static str, BlendMode>,
}

static BLEND_TABLE: LazyLock<BlendTable> = LazyLock::new(|| BlendTable {
    by_mode: BLEND_NAMES.iter().copied().collect(),
    by_name: BLEND_NAMES.iter().map(|&(mode, name)| (name, mode)).collect(),
});

/// Hyphenated lower-case name of a blend mode; empty for unknown enumerants.
pub fn blend_mode_to_string(mode: BlendMode) -> &'static str {
    BLEND_TABLE.by_mode.get(&mode).copied().unwrap_or("")
}

/// Blend mode for a hyphenated name such as `"color-burn"`.
pub fn blend_mode_from_name(name: &str) -> Option<BlendMode> {
    BLEND_TABLE.by_name.get(name).copied()
}
