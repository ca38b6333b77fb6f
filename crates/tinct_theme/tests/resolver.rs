use tinct_core::{Color, Paint};
use tinct_theme::{
    needs_dark_text, variant_colors, ColorName, Theme, ThemeMode, Variant, VariantColors,
    NEAR_BLACK, NEAR_WHITE,
};

const MODES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

fn resolve(
    theme: &Theme,
    color: ColorName,
    mode: ThemeMode,
    variant: Variant,
    high_contrast: bool,
) -> VariantColors {
    variant_colors(theme, color, mode, variant, high_contrast).unwrap()
}

#[test]
fn resolver_is_idempotent() {
    let theme = Theme::default();
    for color in ColorName::ALL {
        for mode in MODES {
            for variant in Variant::ALL {
                for high_contrast in [false, true] {
                    assert_eq!(
                        resolve(&theme, color, mode, variant, high_contrast),
                        resolve(&theme, color, mode, variant, high_contrast),
                    );
                }
            }
        }
    }
}

#[test]
fn text_never_matches_solid_background() {
    let theme = Theme::default();
    for color in ColorName::accents() {
        for mode in MODES {
            for variant in Variant::ALL {
                for high_contrast in [false, true] {
                    let colors = resolve(&theme, color, mode, variant, high_contrast);
                    if let Paint::Solid(_) = colors.background {
                        assert_ne!(
                            colors.text, colors.background,
                            "{color} {mode:?} {variant} high_contrast={high_contrast}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn light_accents_get_dark_solid_text() {
    let theme = Theme::default();
    for color in ColorName::accents() {
        let text = resolve(&theme, color, ThemeMode::Light, Variant::Solid, false).text;
        let expected = if needs_dark_text(color) {
            NEAR_BLACK
        } else {
            NEAR_WHITE
        };
        assert_eq!(text, Paint::Solid(expected), "{color}");
    }
    assert_eq!(NEAR_BLACK.to_string(), "#0c0a09");
}

#[test]
fn red_light_solid_reference() {
    let theme = Theme::default();
    let colors = resolve(&theme, ColorName::Red, ThemeMode::Light, Variant::Solid, false);
    assert_eq!(colors.background.to_string(), "#e5484d");
    assert_eq!(colors.text.to_string(), "#ffffff");
    assert_eq!(colors.border.to_string(), "transparent");

    let classic = resolve(&theme, ColorName::Red, ThemeMode::Light, Variant::Classic, false);
    assert_eq!(classic, colors);
}

#[test]
fn unknown_color_name_is_an_error() {
    let theme = Theme::default();
    assert!(theme.scale_by_name("chartreuse").is_err());
    assert_eq!(
        theme.scale_by_name("Red").unwrap().light.get(9),
        Some(Color::from_hex(0xe5484d))
    );
}
