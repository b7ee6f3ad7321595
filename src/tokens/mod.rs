#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ColorKey {
    Primary,
    Secondary,
    Tertiary,
    Lightest,
    Lighter,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
    Darker,
    Darkest,
    Positive,
    Negative,
    Warning,
}

pub const COLOR_KEYS: [ColorKey; 15] = [
    ColorKey::Primary,
    ColorKey::Secondary,
    ColorKey::Tertiary,
    ColorKey::Lightest,
    ColorKey::Lighter,
    ColorKey::Light,
    ColorKey::MediumLight,
    ColorKey::Medium,
    ColorKey::MediumDark,
    ColorKey::Dark,
    ColorKey::Darker,
    ColorKey::Darkest,
    ColorKey::Positive,
    ColorKey::Negative,
    ColorKey::Warning,
];

pub struct ColorCatalog;

impl ColorCatalog {
    pub const fn hex(key: ColorKey) -> &'static str {
        match key {
            ColorKey::Primary => "#FF4785",
            ColorKey::Secondary => "#1EA7FD",
            ColorKey::Tertiary => "#DDDDDD",
            ColorKey::Lightest => "#FFFFFF",
            ColorKey::Lighter => "#F8F8F8",
            ColorKey::Light => "#F3F3F3",
            ColorKey::MediumLight => "#ECF4F9",
            ColorKey::Medium => "#DDDDDD",
            ColorKey::MediumDark => "#999999",
            ColorKey::Dark => "#666666",
            ColorKey::Darker => "#444444",
            ColorKey::Darkest => "#333333",
            ColorKey::Positive => "#66BF3C",
            ColorKey::Negative => "#FF4400",
            ColorKey::Warning => "#E69D00",
        }
    }
}

pub struct Typography;

impl Typography {
    pub const WEIGHT_REGULAR: f32 = 400.0;
    pub const WEIGHT_BOLD: f32 = 700.0;
    pub const WEIGHT_EXTRABOLD: f32 = 800.0;

    pub const SIZE_S1: f32 = 12.0;
    pub const SIZE_S2: f32 = 14.0;
    pub const SIZE_S3: f32 = 16.0;
    pub const SIZE_M1: f32 = 20.0;

    pub const FAMILY_BODY: &'static str = "Nunito Sans";
    pub const FAMILY_CODE: &'static str = "SFMono-Regular";
}

pub struct Spacing;

impl Spacing {
    pub const RADIUS_SMALL: f32 = 2.0;
    pub const RADIUS_DEFAULT: f32 = 4.0;
    pub const RADIUS_PILL: f32 = 999.0;
    pub const HORIZONTAL_LABEL_GAP: f32 = 20.0;
}

pub struct Opacity;

impl Opacity {
    pub const DISABLED: f32 = 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_key_has_a_hex_value() {
        for key in COLOR_KEYS {
            let hex = ColorCatalog::hex(key);
            assert!(hex.starts_with('#'));
            assert_eq!(hex.len(), 7);
        }
    }

    #[test]
    fn type_scale_is_ascending() {
        assert!(Typography::SIZE_S1 < Typography::SIZE_S2);
        assert!(Typography::SIZE_S2 < Typography::SIZE_S3);
        assert!(Typography::SIZE_S3 < Typography::SIZE_M1);
    }
}
