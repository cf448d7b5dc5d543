// ── GlyphEntry ────────────────────────────────────────────────────────────────

/// One row of the glyph table: the short code drawn on the placeholder and
/// the semantic tile name the renderer looks it up by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphEntry {
    pub code: &'static str,
    pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> GlyphEntry {
    GlyphEntry { code, name }
}

// ── Built-in table ────────────────────────────────────────────────────────────

/// The tile set, in index order. Appending is safe; reordering renumbers
/// every tile after the moved row.
pub const GLYPHS: &[GlyphEntry] = &[
    // Terrain
    entry("g", "grass"),
    entry("d", "dirt"),
    entry("s", "snow"),
    // Buildings
    entry("S-tru", "spawn-truck"),
    entry("S-tra", "spawn-train"),
    entry("S-b", "spawn-boat"),
    entry("Su-r", "supply-red"),
    entry("Su-g", "supply-green"),
    entry("Su-b", "supply-blue"),
    entry("D-r", "depot-red"),
    entry("D-g", "depot-green"),
    entry("D-b", "depot-blue"),
    // Tiled only
    entry("ro<", "road-west"),
    entry("ro>", "road-east"),
    entry("rov", "road-south"),
    entry("ro^", "road-north"),
    entry("c<", "canal-west"),
    entry("c>", "canal-east"),
    entry("cv", "canal-south"),
    entry("c^", "canal-north"),
    entry("ra<", "rails-west"),
    entry("ra>", "rails-east"),
    entry("rav", "rails-south"),
    entry("ra^", "rails-north"),
    // Vehicles
    entry("Tu>", "truck"),
    entry("Ta>", "train"),
    entry("B>", "boat"),
    // Fallback
    entry("", "default"),
];
