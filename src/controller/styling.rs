//! Derivation of the full style command list from options and selection.
//!
//! The plan is a pure function of its inputs. Applying it after
//! `clear_styles` always yields the same scene, regardless of what was shown
//! before.

use crate::options::{CartoonColorMode, Options};
use crate::structure::{
    AtomRef, CartoonStyle, ColorSpec, Selector, SphereStyle, StickStyle,
    StyleSpec,
};

/// One `set_style` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCommand {
    /// Atoms to style.
    pub selector: Selector,
    /// Style replacing theirs.
    pub style: StyleSpec,
}

/// Every style command needed to draw the model with `options`, in order.
/// Later commands override earlier ones for the atoms they match; the
/// highlight for `selected`, if any, is always last.
#[must_use]
pub fn display_plan(
    options: &Options,
    selected: Option<i32>,
) -> Vec<StyleCommand> {
    let display = &options.display;
    let geometry = &options.geometry;
    let cartoon = cartoon_style(options);
    let mut plan = Vec::new();

    let element_sticks = (display.show_sticks && !display.color_by_base)
        .then_some(StickStyle {
            color: ColorSpec::Element,
            radius: geometry.stick_radius,
        });
    let base = StyleSpec::default()
        .with_cartoon(cartoon)
        .with_stick(element_sticks);
    if !base.is_empty() {
        plan.push(StyleCommand {
            selector: Selector::All,
            style: base,
        });
    }

    if display.show_sticks && display.color_by_base {
        for (res_name, color) in &options.colors.base_colors {
            plan.push(StyleCommand {
                selector: Selector::ResidueName(res_name.clone()),
                style: StyleSpec::default().with_cartoon(cartoon).with_stick(
                    Some(StickStyle {
                        color: ColorSpec::Fixed(*color),
                        radius: geometry.stick_radius,
                    }),
                ),
            });
        }
    }

    if let Some(residue_id) = selected {
        plan.push(StyleCommand {
            selector: Selector::Residue(residue_id),
            style: StyleSpec::default().with_cartoon(cartoon).with_stick(
                Some(StickStyle {
                    color: ColorSpec::Fixed(options.colors.highlight),
                    radius: geometry.highlight_radius,
                }),
            ),
        });
    }

    plan
}

fn cartoon_style(options: &Options) -> Option<CartoonStyle> {
    let display = &options.display;
    display.show_cartoon.then(|| CartoonStyle {
        color: match display.cartoon_color {
            CartoonColorMode::Uniform => {
                ColorSpec::Fixed(options.colors.backbone)
            }
            CartoonColorMode::Spectrum => ColorSpec::Spectrum,
        },
        opacity: options.geometry.cartoon_opacity,
        thickness: options.geometry.cartoon_thickness,
    })
}

/// The style `atom` ends up with under [`display_plan`].
#[must_use]
pub fn style_for_atom(
    options: &Options,
    selected: Option<i32>,
    atom: &AtomRef,
) -> StyleSpec {
    display_plan(options, selected)
        .into_iter()
        .rev()
        .find(|cmd| cmd.selector.matches(atom))
        .map(|cmd| cmd.style)
        .unwrap_or_default()
}

/// The planned style of `atom` plus the translucent hover marker.
#[must_use]
pub fn hover_style(
    options: &Options,
    selected: Option<i32>,
    atom: &AtomRef,
) -> StyleSpec {
    style_for_atom(options, selected, atom).with_sphere(Some(SphereStyle {
        color: options.colors.hover,
        radius: options.geometry.hover_radius,
        opacity: options.geometry.hover_opacity,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DisplayOptions;

    fn options_with(display: DisplayOptions) -> Options {
        Options {
            display,
            ..Options::default()
        }
    }

    fn adenine() -> AtomRef {
        AtomRef {
            serial: 5,
            residue_id: Some(7),
            residue_name: "DA".to_owned(),
            element: "N".to_owned(),
            ..AtomRef::default()
        }
    }

    #[test]
    fn default_plan_colors_each_base() {
        let opts = Options::default();
        let plan = display_plan(&opts, None);

        assert_eq!(plan[0].selector, Selector::All);
        assert!(plan[0].style.cartoon.is_some());
        assert!(plan[0].style.stick.is_none());
        // One command per palette entry after the backbone
        assert_eq!(plan.len(), 1 + opts.colors.base_colors.len());

        let style = style_for_atom(&opts, None, &adenine());
        assert_eq!(
            style.stick.map(|s| s.color),
            opts.colors.base_color("DA").map(ColorSpec::Fixed)
        );
    }

    #[test]
    fn element_sticks_when_base_coloring_is_off() {
        let opts = options_with(DisplayOptions {
            color_by_base: false,
            ..DisplayOptions::default()
        });
        let plan = display_plan(&opts, None);
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan[0].style.stick.map(|s| s.color),
            Some(ColorSpec::Element)
        );
        assert!(plan[0].style.cartoon.is_some());
    }

    #[test]
    fn nothing_enabled_issues_nothing() {
        let opts = options_with(DisplayOptions {
            show_cartoon: false,
            show_sticks: false,
            ..DisplayOptions::default()
        });
        assert!(display_plan(&opts, None).is_empty());
    }

    #[test]
    fn spectrum_cartoon() {
        let opts = options_with(DisplayOptions {
            cartoon_color: CartoonColorMode::Spectrum,
            show_sticks: false,
            ..DisplayOptions::default()
        });
        let plan = display_plan(&opts, None);
        assert_eq!(
            plan[0].style.cartoon.map(|c| c.color),
            Some(ColorSpec::Spectrum)
        );
    }

    #[test]
    fn highlight_is_layered_last_even_without_sticks() {
        let opts = options_with(DisplayOptions {
            show_sticks: false,
            ..DisplayOptions::default()
        });
        let plan = display_plan(&opts, Some(7));
        let last = plan.last().unwrap();
        assert_eq!(last.selector, Selector::Residue(7));
        let stick = last.style.stick.unwrap();
        assert_eq!(stick.radius, 0.22);
        assert_eq!(stick.color, ColorSpec::Fixed(opts.colors.highlight));
        assert!(last.style.cartoon.is_some());
    }

    #[test]
    fn plan_is_deterministic() {
        let opts = Options::default();
        assert_eq!(display_plan(&opts, Some(3)), display_plan(&opts, Some(3)));
    }

    #[test]
    fn hover_adds_a_sphere_to_the_current_style() {
        let opts = Options::default();
        let base = style_for_atom(&opts, Some(7), &adenine());
        let hovered = hover_style(&opts, Some(7), &adenine());
        assert_eq!(hovered.cartoon, base.cartoon);
        assert_eq!(hovered.stick, base.stick);
        let sphere = hovered.sphere.unwrap();
        assert_eq!(sphere.radius, 0.4);
        assert_eq!(sphere.opacity, 0.6);
    }
}
