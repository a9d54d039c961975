use a11ykit_core::constants::{FONT_SIZE_MAX_PCT, FONT_SIZE_MIN_PCT, SCALE_MAX, SCALE_MIN};
use a11ykit_core::{A11yAction, AccessibilitySettings, CvdMode, Position};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::html::TargetCast;
use yew::prelude::*;

use super::pressed;

const PANEL_ID: &str = "a11y-panel";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: AccessibilitySettings,
    pub open: bool,
    #[prop_or_default]
    pub position: Position,
    #[prop_or(AttrValue::from("Accessibility"))]
    pub label: AttrValue,
    #[prop_or(true)]
    pub speech_available: bool,
    pub on_toggle_open: Callback<bool>,
    pub on_action: Callback<A11yAction>,
}

fn slider(cb: &Callback<A11yAction>, make: fn(f64) -> A11yAction) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
            && let Ok(val) = input.value().parse::<f64>()
        {
            cb.emit(make(val));
        }
    })
}

/// Floating button plus the settings dialog it opens.
#[function_component(Panel)]
pub fn panel(p: &Props) -> Html {
    let emit = |action: A11yAction| {
        let cb = p.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(action))
    };

    let on_fab = {
        let cb = p.on_toggle_open.clone();
        let open = p.open;
        Callback::from(move |_: MouseEvent| cb.emit(!open))
    };

    let on_keydown = {
        let cb = p.on_toggle_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                cb.emit(false);
            }
        })
    };

    let s = &p.settings;
    let fab_class = classes!("a11y-fab", p.position.css_class());
    let panel_class = classes!("a11y-panel", p.position.css_class());
    let expanded = if p.open { "true" } else { "false" };

    html! {
      <div data-a11y-ui="">
        <button id="a11y-panel-toggle" class={fab_class} aria-label={p.label.clone()}
                aria-controls={PANEL_ID} aria-expanded={expanded} onclick={on_fab}>
          {"♿"}
        </button>
        if p.open {
          <div id={PANEL_ID} class={panel_class} role="dialog" aria-label={p.label.clone()}
               onkeydown={on_keydown}>
            <button id="a11y-contrast-btn" aria-pressed={pressed(s.high_contrast)}
                    onclick={emit(A11yAction::ToggleHighContrast)}>{"High Contrast"}</button>
            <label for="a11y-font-size">{format!("Text Size ({:.0}%)", s.font_size)}</label>
            <input id="a11y-font-size" type="range" min={FONT_SIZE_MIN_PCT.to_string()}
                   max={FONT_SIZE_MAX_PCT.to_string()} step="10" value={s.font_size.to_string()}
                   oninput={slider(&p.on_action, A11yAction::SetTextSize)} />
            <label for="a11y-scale">{format!("Page Scale ({:.1}x)", s.scale)}</label>
            <input id="a11y-scale" type="range" min={SCALE_MIN.to_string()}
                   max={SCALE_MAX.to_string()} step="0.1" value={s.scale.to_string()}
                   oninput={slider(&p.on_action, A11yAction::SetScale)} />
            <div class="a11y-row" role="group" aria-label="Color vision filters">
              <button id="a11y-cvd-redgreen-btn" aria-pressed={pressed(s.cvd_mode == CvdMode::RedGreen)}
                      title="Red-Green Color Blindness"
                      onclick={emit(A11yAction::ToggleCvd(CvdMode::RedGreen))}>{"Red-Green CVD"}</button>
              <button id="a11y-cvd-general-btn" aria-pressed={pressed(s.cvd_mode == CvdMode::General)}
                      title="General Color Weakness"
                      onclick={emit(A11yAction::ToggleCvd(CvdMode::General))}>{"General CVD"}</button>
            </div>
            <button id="a11y-easy-btn" aria-pressed={pressed(s.easy_usability)}
                    onclick={emit(A11yAction::ToggleEasyUsability)}>{"Easy Usability"}</button>
            <div class="a11y-row" role="group" aria-label="Text to speech">
              <button id="a11y-tts-hover-btn" aria-pressed={pressed(s.tts_hover)}
                      disabled={!p.speech_available}
                      onclick={emit(A11yAction::ToggleTtsHover)}>{"Read on Hover"}</button>
              <button id="a11y-tts-page-btn" disabled={!p.speech_available}
                      onclick={emit(A11yAction::ReadPage)}>{"Read Page"}</button>
              <button id="a11y-tts-stop-btn" disabled={!p.speech_available}
                      onclick={emit(A11yAction::StopSpeech)}>{"Stop"}</button>
            </div>
            <button id="a11y-reset-btn" onclick={emit(A11yAction::Reset)}>{"Reset"}</button>
          </div>
        }
      </div>
    }
}
