//! Fixed iOS `AppIcon.appiconset` size tables.

/// Device family an icon slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

/// One output file of the icon catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub filename: &'static str,
    /// Edge length in pixels (points times scale).
    pub size: u32,
    pub idiom: Idiom,
}

const fn spec(filename: &'static str, size: u32, idiom: Idiom) -> IconSpec {
    IconSpec {
        filename,
        size,
        idiom,
    }
}

/// Every slot the procedural generator fills. The iPad 20x20@2x and 40x40@2x
/// slots share their filename with the iPhone ones.
pub static GENERATOR_TABLE: &[IconSpec] = &[
    spec("Icon-App-20x20@2x.png", 40, Idiom::Iphone),
    spec("Icon-App-20x20@3x.png", 60, Idiom::Iphone),
    spec("Icon-App-29x29@1x.png", 29, Idiom::Iphone),
    spec("Icon-App-29x29@2x.png", 58, Idiom::Iphone),
    spec("Icon-App-29x29@3x.png", 87, Idiom::Iphone),
    spec("Icon-App-40x40@2x.png", 80, Idiom::Iphone),
    spec("Icon-App-40x40@3x.png", 120, Idiom::Iphone),
    spec("Icon-App-60x60@2x.png", 120, Idiom::Iphone),
    spec("Icon-App-60x60@3x.png", 180, Idiom::Iphone),
    spec("Icon-App-20x20@1x.png", 20, Idiom::Ipad),
    spec("Icon-App-20x20@2x.png", 40, Idiom::Ipad),
    spec("Icon-App-40x40@1x.png", 40, Idiom::Ipad),
    spec("Icon-App-40x40@2x.png", 80, Idiom::Ipad),
    spec("Icon-App-76x76@1x.png", 76, Idiom::Ipad),
    spec("Icon-App-76x76@2x.png", 152, Idiom::Ipad),
    spec("Icon-App-83.5x83.5@2x.png", 167, Idiom::Ipad),
    spec("Icon-App-1024x1024@1x.png", 1024, Idiom::IosMarketing),
];

/// Slots filled when resizing a source image; one record per distinct file.
pub static RESIZE_TABLE: &[IconSpec] = &[
    spec("Icon-App-20x20@2x.png", 40, Idiom::Iphone),
    spec("Icon-App-20x20@3x.png", 60, Idiom::Iphone),
    spec("Icon-App-29x29@1x.png", 29, Idiom::Iphone),
    spec("Icon-App-29x29@2x.png", 58, Idiom::Iphone),
    spec("Icon-App-29x29@3x.png", 87, Idiom::Iphone),
    spec("Icon-App-40x40@2x.png", 80, Idiom::Iphone),
    spec("Icon-App-40x40@3x.png", 120, Idiom::Iphone),
    spec("Icon-App-60x60@2x.png", 120, Idiom::Iphone),
    spec("Icon-App-60x60@3x.png", 180, Idiom::Iphone),
    spec("Icon-App-20x20@1x.png", 20, Idiom::Ipad),
    spec("Icon-App-40x40@1x.png", 40, Idiom::Ipad),
    spec("Icon-App-76x76@1x.png", 76, Idiom::Ipad),
    spec("Icon-App-76x76@2x.png", 152, Idiom::Ipad),
    spec("Icon-App-83.5x83.5@2x.png", 167, Idiom::Ipad),
    spec("Icon-App-1024x1024@1x.png", 1024, Idiom::IosMarketing),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn parse_pixels(filename: &str) -> u32 {
        // Icon-App-<pt>x<pt>@<scale>x.png
        let rest = filename.strip_prefix("Icon-App-").unwrap();
        let (dims, scale) = rest.split_once('@').unwrap();
        let points: f64 = dims.split_once('x').unwrap().0.parse().unwrap();
        let scale: f64 = scale.trim_end_matches("x.png").parse().unwrap();
        (points * scale) as u32
    }

    #[test]
    fn table_sizes_match_filenames() {
        for s in GENERATOR_TABLE.iter().chain(RESIZE_TABLE) {
            assert_eq!(parse_pixels(s.filename), s.size, "{}", s.filename);
        }
    }

    #[test]
    fn generator_has_seventeen_slots_resize_fifteen_files() {
        assert_eq!(GENERATOR_TABLE.len(), 17);
        assert_eq!(RESIZE_TABLE.len(), 15);
        let names: BTreeSet<_> = RESIZE_TABLE.iter().map(|s| s.filename).collect();
        assert_eq!(names.len(), RESIZE_TABLE.len());
    }

    #[test]
    fn generator_covers_same_files_as_resize() {
        let gen: BTreeMap<_, _> = GENERATOR_TABLE
            .iter()
            .map(|s| (s.filename, s.size))
            .collect();
        let res: BTreeMap<_, _> = RESIZE_TABLE
            .iter()
            .map(|s| (s.filename, s.size))
            .collect();
        assert_eq!(gen, res);
    }
}
