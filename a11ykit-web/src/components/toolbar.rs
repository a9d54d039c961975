use a11ykit_core::constants::TEXT_STEP_MAX;
use a11ykit_core::{A11yAction, AccessibilitySettings, CvdMode, Position, step_for_percent};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

use super::pressed;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: AccessibilitySettings,
    #[prop_or(AttrValue::from("Accessibility Toolbar"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub position: Position,
    #[prop_or(true)]
    pub speech_available: bool,
    pub on_action: Callback<A11yAction>,
}

#[function_component(Toolbar)]
pub fn toolbar(p: &Props) -> Html {
    let emit = |action: A11yAction| {
        let cb = p.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(action))
    };

    let on_step = {
        let cb = p.on_action.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(step) = input.value().parse::<i32>()
            {
                cb.emit(A11yAction::SetTextStep(step));
            }
        })
    };

    let s = &p.settings;
    let step = step_for_percent(s.font_size);
    let class = classes!("a11y-toolbar", p.position.css_class());

    html! {
      <div class={class} role="region" aria-label={p.label.clone()} tabindex="0" data-a11y-ui="">
        <button id="a11y-contrast-btn" aria-pressed={pressed(s.high_contrast)}
                onclick={emit(A11yAction::ToggleHighContrast)}>{"High Contrast"}</button>
        <label for="a11y-text-size">{"Text Size"}</label>
        <input id="a11y-text-size" type="range" min="0" max={TEXT_STEP_MAX.to_string()} step="1"
               value={step.to_string()} aria-valuetext={format!("{:.0}%", s.font_size)}
               oninput={on_step} />
        <button id="a11y-cvd-redgreen-btn" aria-pressed={pressed(s.cvd_mode == CvdMode::RedGreen)}
                title="Red-Green Color Blindness"
                onclick={emit(A11yAction::ToggleCvd(CvdMode::RedGreen))}>{"Red-Green CVD"}</button>
        <button id="a11y-cvd-general-btn" aria-pressed={pressed(s.cvd_mode == CvdMode::General)}
                title="General Color Weakness"
                onclick={emit(A11yAction::ToggleCvd(CvdMode::General))}>{"General CVD"}</button>
        <button id="a11y-tts-hover-btn" aria-pressed={pressed(s.tts_hover)}
                disabled={!p.speech_available}
                onclick={emit(A11yAction::ToggleTtsHover)}>{"Read on Hover"}</button>
        <button id="a11y-tts-page-btn" disabled={!p.speech_available}
                onclick={emit(A11yAction::ReadPage)}>{"Read Page"}</button>
        <button id="a11y-reset-btn" onclick={emit(A11yAction::Reset)}>{"Reset"}</button>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ykit_core::Variant;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(settings: AccessibilitySettings) -> Props {
        Props {
            settings,
            label: AttrValue::from("Accessibility Toolbar"),
            position: Position::TopRight,
            speech_available: true,
            on_action: Callback::noop(),
        }
    }

    #[test]
    fn toolbar_starts_on_midpoint_notch() {
        let html = block_on(
            LocalServerRenderer::<Toolbar>::with_props(props(Variant::Toolbar.baseline())).render(),
        );
        assert!(html.contains("a11y-text-size"));
        assert!(html.contains("value=\"9\""));
        assert!(html.contains("a11y-pos-top-right"));
    }

    #[test]
    fn pressed_state_follows_settings() {
        let settings = AccessibilitySettings {
            high_contrast: true,
            ..AccessibilitySettings::default()
        };
        let html = block_on(LocalServerRenderer::<Toolbar>::with_props(props(settings)).render());
        assert!(html.contains("aria-pressed=\"true\""));
    }

    #[test]
    fn colour_filters_use_cvd_labels() {
        let html = block_on(
            LocalServerRenderer::<Toolbar>::with_props(props(AccessibilitySettings::default()))
                .render(),
        );
        assert!(html.contains("Red-Green CVD"));
        assert!(html.contains("General CVD"));
        assert!(html.contains("title=\"General Color Weakness\""));
    }
}
