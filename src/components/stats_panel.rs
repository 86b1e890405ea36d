use yew::prelude::*;

use crate::state::{CameraPhase, ZoomMode};

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub phase: CameraPhase,
    pub mode: ZoomMode,
    pub magnification: String,
    pub visible: usize,
    pub total: usize,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let (phase_text, phase_color) = match props.phase {
        CameraPhase::Resting => ("Resting", "#8b949e"),
        CameraPhase::Zoomed => ("Zoomed", "#58a6ff"),
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px; color:#c9d1d9;">
            <div style={row_style}>
                <span style={label_style}>{"Camera"}</span>
                <span style={format!("{} color:{};", value_style, phase_color)}>{ phase_text }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Zoom"}</span>
                <span style={value_style}>{ props.magnification.clone() }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Blocks"}</span>
                <span style={value_style}>{ format!("{} / {}", props.visible, props.total) }</span>
            </div>
            <div style="font-size:11px; opacity:0.7;">{ props.mode.label() }</div>
        </div>
    }
}
