//! Advice lookup tables and resolution.
//!
//! Two independent lookups (season tip, plant-type tip) feed a two-line
//! advice string. Unknown keys get a fixed fallback line instead of an
//! error, so resolution is total over all string inputs.

use log::debug;

/// Seasons with a dedicated tip, in prompt order.
pub const SEASONS: [&str; 4] = ["summer", "winter", "spring", "autumn"];

/// Plant types with a dedicated tip, in prompt order.
pub const PLANT_TYPES: [&str; 3] = ["flower", "vegetable", "succulent"];

/// Line substituted when a season has no tip.
pub const SEASON_FALLBACK: &str = "no season-specific tip available — add one";

/// Line substituted when a plant type has no tip.
pub const PLANT_FALLBACK: &str = "no plant-type tip available — add one";

/// Get the tip for a normalized season key.
pub fn season_tip(key: &str) -> Option<&'static str> {
    match key {
        "summer" => Some("Water a bit more often and give delicate plants some afternoon shade."),
        "winter" => Some("Protect from frost (old sheets/row covers) and avoid waterlogging."),
        "spring" => Some("Light mulch helps keep moisture; start a mild feed as growth kicks off."),
        "autumn" => Some("Ease off the watering; collect leaves for compost and protect tender stems."),
        _ => None,
    }
}

/// Get the tip for a normalized plant-type key.
pub fn plant_tip(key: &str) -> Option<&'static str> {
    match key {
        "flower" => Some("Pinch back spent blooms to encourage more flowers."),
        "vegetable" => Some("Watch for pests; regular checks beat heavy sprays later."),
        "succulent" => Some("Less is more—water deeply but infrequently; ensure sharp drainage."),
        // TODO: add "herb" with a short pruning tip
        _ => None,
    }
}

/// Trim surrounding whitespace and lowercase, ready for table lookup.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Build the two-line advice string for a season and plant type.
///
/// Both inputs are normalized before lookup. The lookups are independent:
/// an unknown season never affects the plant line and vice versa. The
/// result is always exactly two lines joined by a single `\n`, with no
/// trailing newline.
pub fn resolve(season: &str, plant_type: &str) -> String {
    let season_key = normalize(season);
    let plant_key = normalize(plant_type);
    debug!("resolve: season_key={:?} plant_key={:?}", season_key, plant_key);

    let season_line = season_tip(&season_key).unwrap_or(SEASON_FALLBACK);
    let plant_line = plant_tip(&plant_key).unwrap_or(PLANT_FALLBACK);

    format!("{}\n{}", season_line, plant_line)
}
