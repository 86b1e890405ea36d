use super::{scene_view::SceneView, settings_modal::SettingsModal};
use crate::config::{self, DemoConfig};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Saved settings, or defaults when nothing valid is stored
    let config = use_state(config::load);
    let open_settings = use_state(|| false);

    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let apply_cb = {
        let config = config.clone();
        let open_settings = open_settings.clone();
        Callback::from(move |next: DemoConfig| {
            if let Err(e) = next.validate() {
                log::warn!("settings rejected: {e}");
                return;
            }
            config::save(&next);
            config.set(next);
            open_settings.set(false);
        })
    };
    let restore_defaults_cb = {
        let config = config.clone();
        let open_settings = open_settings.clone();
        Callback::from(move |()| {
            let next = DemoConfig::default();
            config::save(&next);
            config.set(next);
            open_settings.set(false);
        })
    };

    html! {<div style="position:relative; width:100vw; height:100vh; background:#0e1116;">
        <SceneView config={(*config).clone()} on_open_settings={open_settings_cb} />
        <SettingsModal
            show={*open_settings}
            config={(*config).clone()}
            on_close={close_settings_cb}
            on_apply={apply_cb}
            on_restore_defaults={restore_defaults_cb}
        />
    </div>}
}
