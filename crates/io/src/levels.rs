//! Approximate MiMA model-level indices for standard pressure levels.

/// `(label, level index)` pairs, top of the atmosphere first.
pub const MIMA_LEVELS: [(&str, usize); 8] = [
    ("10hPa", 13),
    ("20hPa", 16),
    ("27hPa", 17),
    ("40hPa", 19),
    ("77hPa", 22),
    ("100hPa", 23),
    ("200hPa", 27),
    ("850hPa", 37),
];

/// Model-level index closest to a pressure label such as `"10hPa"`.
///
/// Matching ignores case and surrounding whitespace; the `hPa` suffix is
/// optional.
pub fn mima_level_index(label: &str) -> Option<usize> {
    let wanted = label.trim().to_ascii_lowercase();
    let wanted = wanted.strip_suffix("hpa").unwrap_or(&wanted).trim();
    MIMA_LEVELS.iter().find_map(|&(name, index)| {
        let key = name.trim_end_matches("hPa");
        (key == wanted).then_some(index)
    })
}
