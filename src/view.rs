//! Render snapshot of a password field.
//!
//! Pure projection of [`PasswordFieldController`] state; hosts bind it to
//! their own widgets.

use secrecy::ExposeSecret;

use crate::controller::PasswordFieldController;
use crate::strength::Strength;

/// Character shown in place of each masked character.
pub const MASK_CHAR: char = '\u{2022}';

/// Colour in hue (degrees), saturation and brightness (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

/// Fill of a single strength indicator segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentColor {
    Unused,
    Weak,
    Medium,
    Strong,
}

impl SegmentColor {
    pub fn hsb(self) -> Hsb {
        match self {
            SegmentColor::Unused => Hsb::new(210.0, 0.05, 0.86),
            SegmentColor::Weak => Hsb::new(0.0, 0.60, 0.90),
            SegmentColor::Medium => Hsb::new(39.0, 0.60, 0.90),
            SegmentColor::Strong => Hsb::new(132.0, 0.60, 0.75),
        }
    }
}

/// Segment fills for a tier: segments up to the tier are lit, the rest unused.
pub fn segments_for(strength: Strength) -> [SegmentColor; 3] {
    let lit = [SegmentColor::Weak, SegmentColor::Medium, SegmentColor::Strong];
    let mut segments = [SegmentColor::Unused; 3];
    segments[..strength.segments_lit()].copy_from_slice(&lit[..strength.segments_lit()]);
    segments
}

/// Text under the indicator for a tier.
pub fn description_for(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => "Too weak",
        Strength::Medium => "Could be stronger",
        Strength::Strong => "Strong password",
    }
}

/// Icon of the show/hide button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityIcon {
    /// Text is masked.
    EyesClosed,
    /// Text is visible.
    EyesOpen,
}

impl VisibilityIcon {
    pub fn for_masked(is_masked: bool) -> Self {
        if is_masked {
            VisibilityIcon::EyesClosed
        } else {
            VisibilityIcon::EyesOpen
        }
    }

    pub fn asset_name(self) -> &'static str {
        match self {
            VisibilityIcon::EyesClosed => "eyes-closed",
            VisibilityIcon::EyesOpen => "eyes-open",
        }
    }
}

/// Everything a host needs to draw the field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub title: String,
    pub display_text: String,
    pub is_masked: bool,
    pub icon: VisibilityIcon,
    pub strength: Strength,
    pub segments: [SegmentColor; 3],
    pub description: &'static str,
}

impl FieldView {
    pub fn render(field: &PasswordFieldController) -> Self {
        let is_masked = field.is_masked();
        let display_text = if is_masked {
            std::iter::repeat_n(MASK_CHAR, field.text_len()).collect()
        } else {
            field.raw_text().expose_secret().to_string()
        };
        let strength = field.strength();

        Self {
            title: field.config().title.clone(),
            display_text,
            is_masked,
            icon: VisibilityIcon::for_masked(is_masked),
            strength,
            segments: segments_for(strength),
            description: description_for(strength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    #[test]
    fn test_segments_for_each_tier() {
        use SegmentColor::*;
        assert_eq!(segments_for(Strength::Weak), [Weak, Unused, Unused]);
        assert_eq!(segments_for(Strength::Medium), [Weak, Medium, Unused]);
        assert_eq!(segments_for(Strength::Strong), [Weak, Medium, Strong]);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(description_for(Strength::Weak), "Too weak");
        assert_eq!(description_for(Strength::Medium), "Could be stronger");
        assert_eq!(description_for(Strength::Strong), "Strong password");
    }

    #[test]
    fn test_palette() {
        assert_eq!(SegmentColor::Medium.hsb().hue, 39.0);
        assert_eq!(SegmentColor::Strong.hsb().brightness, 0.75);
        assert_ne!(SegmentColor::Unused.hsb(), SegmentColor::Weak.hsb());
    }

    #[test]
    fn test_render_masked_field() {
        let mut field = PasswordFieldController::new();
        field.on_text_changed("hunter2");

        let view = FieldView::render(&field);
        assert_eq!(view.title, "ENTER PASSWORD");
        assert_eq!(view.display_text, "•••••••");
        assert!(view.is_masked);
        assert_eq!(view.icon, VisibilityIcon::EyesClosed);
        assert_eq!(view.icon.asset_name(), "eyes-closed");
        assert_eq!(view.strength, Strength::Weak);
        assert_eq!(view.description, "Too weak");
    }

    #[test]
    fn test_render_unmasked_field() {
        let mut field = PasswordFieldController::with_config(FieldConfig {
            title: "NEW PASSWORD".to_string(),
            ..FieldConfig::default()
        });
        field.on_text_changed("abcdefghijklmnopqrst");
        field.toggle_visibility();

        let view = FieldView::render(&field);
        assert_eq!(view.title, "NEW PASSWORD");
        assert_eq!(view.display_text, "abcdefghijklmnopqrst");
        assert_eq!(view.icon, VisibilityIcon::EyesOpen);
        assert_eq!(view.icon.asset_name(), "eyes-open");
        assert_eq!(view.segments, segments_for(Strength::Strong));
    }

    #[test]
    fn test_masking_keeps_length_of_multibyte_text() {
        let mut field = PasswordFieldController::new();
        field.on_text_changed("pässwörd");

        let view = FieldView::render(&field);
        assert_eq!(view.display_text.chars().count(), 8);
        assert!(view.display_text.chars().all(|c| c == MASK_CHAR));
    }

    #[test]
    fn test_render_empty_field() {
        let field = PasswordFieldController::new();
        let view = FieldView::render(&field);
        assert_eq!(view.display_text, "");
        assert_eq!(view.segments, [SegmentColor::Weak, SegmentColor::Unused, SegmentColor::Unused]);
    }
}
