#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MotionLevel {
    #[default]
    Full,
    Reduced,
    None,
}

/// Shake played on the field icon when an error appears.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JiggleConfig {
    pub duration_ms: u16,
    pub amplitude_px: i16,
    pub oscillations: u8,
}

impl Default for JiggleConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700,
            amplitude_px: 3,
            oscillations: 3,
        }
    }
}

impl JiggleConfig {
    pub fn duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn amplitude_px(mut self, amplitude_px: i16) -> Self {
        self.amplitude_px = amplitude_px;
        self
    }

    /// Horizontal offset at `progress` in `0.0..=1.0`, decaying towards zero.
    pub fn offset_at(&self, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        let wave = (progress * std::f32::consts::PI * 2.0 * self.oscillations as f32).sin();
        self.amplitude_px as f32 * wave * (1.0 - progress)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MotionConfig {
    pub level: MotionLevel,
    pub jiggle: JiggleConfig,
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: MotionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn jiggle(mut self, jiggle: JiggleConfig) -> Self {
        self.jiggle = jiggle;
        self
    }

    pub fn animates(&self) -> bool {
        self.level == MotionLevel::Full
    }
}
