use calmui_field::components::{AnatomyInput, FieldKey, InputAnatomy, InputState};
use calmui_field::prelude::*;
use calmui_field::tokens::ColorKey;
use gpui::SharedString;

#[test]
fn prop_names_parse_from_their_lowercase_form() {
    assert_eq!("pill".parse::<Appearance>().ok(), Some(Appearance::Pill));
    assert_eq!(
        "Horizontal".parse::<FieldLayout>().ok(),
        Some(FieldLayout::Horizontal)
    );
    assert_eq!("tel".parse::<InputKind>().ok(), Some(InputKind::Tel));
    assert_eq!(
        "color".parse::<InputKind>().ok(),
        Some(InputKind::Other("color".to_string()))
    );
}

#[test]
fn bad_prop_names_surface_as_crate_errors() {
    let error = "loud".parse::<Appearance>().expect_err("unknown appearance");
    assert!(matches!(error, calmui_field::Error::UnknownAppearance(ref name) if name == "loud"));
    assert!(error.to_string().contains("loud"));
    assert!(matches!(
        "".parse::<InputKind>(),
        Err(calmui_field::Error::EmptyInputKind)
    ));
    assert!("diagonal".parse::<FieldLayout>().is_err());
}

#[test]
fn theme_patch_relabels_the_action() {
    let theme = Theme::default().merged(&ThemePatch {
        components: ComponentPatch {
            input: InputPatch {
                show_label: Some("Reveal".into()),
                hide_label: Some("Conceal".into()),
                ..InputPatch::default()
            },
            ..ComponentPatch::default()
        },
        ..ThemePatch::default()
    });

    let id = ComponentId::new("secret");
    let label: SharedString = "Secret".into();
    let hidden = InputKind::Password;
    let shown = InputKind::Text;
    let base = AnatomyInput {
        id: &id,
        value: "",
        label: &label,
        hide_label: false,
        orientation: FieldLayout::Vertical,
        appearance: Appearance::Secondary,
        icon: Some("key"),
        error: None,
        suppress_error_message: false,
        last_error_value: None,
        starting_kind: &hidden,
        current_kind: &hidden,
        class_name: None,
    };

    let masked = InputAnatomy::resolve(&theme, base);
    assert_eq!(
        masked.action.map(|action| action.label.to_string()),
        Some("Reveal".to_string())
    );
    let revealed = InputAnatomy::resolve(
        &theme,
        AnatomyInput {
            current_kind: &shown,
            ..base
        },
    );
    assert_eq!(
        revealed.action.map(|action| action.label.to_string()),
        Some("Conceal".to_string())
    );
}

#[test]
fn palette_override_changes_the_error_ring() {
    let theme = Theme::default().with_palette_override(ColorKey::Negative, "#AA0000");
    let anatomy = PureInput::new(
        InputProps::new("age", "Age")
            .value("-1")
            .error("Must be positive"),
    )
    .anatomy(&theme);
    let ring = anatomy.style.field.ring.expect("error ring");
    assert_eq!(theme.resolve_color(&ring), "#AA0000");
}

#[test]
fn typing_into_a_masked_field_edits_the_real_value() {
    let mut state = InputState::new("hunter", 6);
    let key = FieldKey::from_keystroke("2", Some("2"), false).expect("printable key");
    assert!(key.apply(&mut state, false, None));
    assert_eq!(state.value, "hunter2");
    assert_eq!(
        calmui_field::components::display_value(&state.value, &InputKind::Password),
        "•••••••"
    );
}

#[test]
fn default_icon_pack_is_embedded() {
    let registry = IconRegistry::new();
    assert!(registry.packs().iter().any(|pack| pack == "calm"));
    assert!(registry
        .resolve(&calmui_field::icon::IconName::new("search"))
        .is_some());
    assert!(registry
        .resolve(&calmui_field::icon::IconName::new("no-such-glyph"))
        .is_none());
}
