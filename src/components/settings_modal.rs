use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::defaults::MAX_BLOCK_COUNT;
use crate::config::DemoConfig;
use crate::state::ZoomMode;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: DemoConfig,
    pub on_close: Callback<()>,
    pub on_apply: Callback<DemoConfig>,
    pub on_restore_defaults: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let draft = use_state(|| props.config.clone());
    {
        // Start from the live config each time the modal opens
        let draft = draft.clone();
        let config = props.config.clone();
        use_effect_with((props.show, config), move |(_, config)| {
            draft.set(config.clone());
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mode_cb = |mode: ZoomMode| {
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(DemoConfig {
                mode,
                ..(*draft).clone()
            });
        })
    };
    let count_cb = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(n) = input.value().trim().parse::<usize>() {
                draft.set(DemoConfig {
                    block_count: n.min(MAX_BLOCK_COUNT),
                    ..(*draft).clone()
                });
            }
        })
    };
    let apply_cb = {
        let draft = draft.clone();
        let cb = props.on_apply.clone();
        Callback::from(move |_| cb.emit((*draft).clone()))
    };
    let defaults_cb = {
        let cb = props.on_restore_defaults.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let mode_row = |mode: ZoomMode, hint: &'static str| {
        html! {
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="radio" name="zoom-mode" checked={draft.mode == mode} onclick={mode_cb(mode)} />
                <span>{ mode.label() }</span>
                <span style="font-size:11px; opacity:0.7;">{ hint }</span>
            </label>
        }
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px; color:#c9d1d9;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { mode_row(ZoomMode::DoubleTapToggle, "pinch and drag while zoomed") }
                { mode_row(ZoomMode::PressToZoom, "hold and drag") }
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Blocks"}</span>
                    <input type="number" min="0" max={MAX_BLOCK_COUNT.to_string()} value={draft.block_count.to_string()} oninput={count_cb} style="width:90px;" />
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={defaults_cb} style="flex:1;">{"Restore Defaults"}</button>
                <button onclick={apply_cb} style="flex:0 0 auto;">{"Apply"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Applying rebuilds the grid and resets the camera."}</div>
        </div>
    </div>}
}
