use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_toggle_zoom: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let zoom = {
        let cb = props.on_toggle_zoom.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zoom}> {"Zoom"} </button>
        <button onclick={reset}> {"Reset"} </button>
        <span style="width:8px;"></span>
        <button onclick={settings}> {"Settings"} </button>
    </div>}
}
