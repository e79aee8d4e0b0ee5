//! The fixed 64-color drawing palette.

/// Hex values of the palette, in selection order. Index 0 is the startup
/// color.
pub const PALETTE_HEX: [&str; 64] = [
    "#000000", "#e03c28", "#ffffff", "#d7d7d7", "#a8a8a8", "#7b7b7b", "#343434", "#151515",
    "#0d2030", "#415d66", "#71a6a1", "#bdffca", "#25e2cd", "#0a98ac", "#005280", "#00604b",
    "#20b562", "#58d332", "#139d08", "#004e00", "#172808", "#376d03", "#6ab417", "#8cd612",
    "#beeb71", "#eeffa9", "#b6c121", "#939717", "#cc8f15", "#ffbb31", "#ffe737", "#f68f37",
    "#ad4e1a", "#231712", "#5c3c0d", "#ae6c37", "#c59782", "#e2d7b5", "#4f1507", "#823c3d",
    "#da655e", "#e18289", "#f5b784", "#ffe9c5", "#ff82ce", "#cf3c71", "#871646", "#a328b3",
    "#cc69e4", "#d59cfc", "#fec9ed", "#e2c9ff", "#a675fe", "#6a31ca", "#5a1991", "#211640",
    "#3d34a5", "#6264dc", "#9ba0ef", "#98dcff", "#5ba8ff", "#0a89ff", "#024aca", "#00177d",
];

/// Index/hex lookups over [`PALETTE_HEX`].
///
/// The palette is immutable at runtime; cells store indices into it and hex
/// strings appear only at the render/export boundary.
pub struct Palette;

impl Palette {
    /// Number of palette entries.
    pub const LEN: usize = PALETTE_HEX.len();

    /// True if `index` names a palette entry.
    pub fn contains(index: u8) -> bool {
        usize::from(index) < Self::LEN
    }

    /// Hex string for a palette index.
    ///
    /// Indices are produced only by [`Palette::index_of`] and validated
    /// selection input, so `index` is always in range.
    pub fn hex(index: u8) -> &'static str {
        PALETTE_HEX[usize::from(index)]
    }

    /// RGB components for a palette index.
    pub fn rgb(index: u8) -> [u8; 3] {
        let hex = &Self::hex(index)[1..];
        let value = u32::from_str_radix(hex, 16).unwrap_or(0);
        [(value >> 16) as u8, (value >> 8) as u8, value as u8]
    }

    /// Find the palette index of a hex color, case-insensitively.
    pub fn index_of(hex: &str) -> Option<u8> {
        PALETTE_HEX
            .iter()
            .position(|c| c.eq_ignore_ascii_case(hex))
            .map(|i| i as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_64_distinct_colors() {
        assert_eq!(Palette::LEN, 64);
        for (i, a) in PALETTE_HEX.iter().enumerate() {
            for b in &PALETTE_HEX[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_hex_index_round_trip() {
        for i in 0..Palette::LEN as u8 {
            assert_eq!(Palette::index_of(Palette::hex(i)), Some(i));
        }
    }

    #[test]
    fn test_index_of_is_case_insensitive() {
        assert_eq!(Palette::index_of("#E03C28"), Some(1));
        assert_eq!(Palette::index_of("#not-a-color"), None);
    }

    #[test]
    fn test_rgb_components() {
        assert_eq!(Palette::rgb(0), [0x00, 0x00, 0x00]);
        assert_eq!(Palette::rgb(1), [0xe0, 0x3c, 0x28]);
        assert_eq!(Palette::rgb(2), [0xff, 0xff, 0xff]);
    }
}
