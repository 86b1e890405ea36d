use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, DomRect, HtmlCanvasElement, TouchEvent, TouchList};
use yew::prelude::*;

use crate::config::DemoConfig;
use crate::model::{Point, Size};
use crate::scene::{GameScene, SceneInput};
use crate::state::{CameraPhase, Pinch, PinchPhase, TouchState, ZoomMode};
use crate::util::format_scale;

use super::{camera_controls::CameraControls, stats_panel::StatsPanel};

const BACKGROUND: &str = "#262626";
const LABEL_COLOR: &str = "#ffffff";
/// Label font size in scene units.
const LABEL_FONT_SIZE: f64 = 4.0;
/// Labels smaller than this on screen are skipped.
const LABEL_MIN_PX: f64 = 2.0;
/// Identifier used for the mouse when it stands in for a finger.
const MOUSE_ID: i32 = -1;
/// Longest frame step fed to the scene, in seconds.
const MAX_FRAME_DT: f64 = 0.1;

#[derive(Clone, PartialEq)]
pub struct SceneStatus {
    pub phase: CameraPhase,
    pub mode: ZoomMode,
    pub magnification: String,
    pub visible: usize,
    pub total: usize,
}

impl Default for SceneStatus {
    fn default() -> Self {
        Self {
            phase: CameraPhase::Resting,
            mode: ZoomMode::default(),
            magnification: format_scale(1.0),
            visible: 0,
            total: 0,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SceneViewProps {
    pub config: DemoConfig,
    pub on_open_settings: Callback<()>,
}

type SharedScene = Rc<RefCell<Option<GameScene>>>;

#[function_component(SceneView)]
pub fn scene_view(props: &SceneViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene: SharedScene = use_mut_ref(|| None::<GameScene>);
    let config_ref = use_mut_ref(|| props.config.clone());
    let touch_state = use_mut_ref(TouchState::default);
    let status = use_state(SceneStatus::default);
    let last_status = use_mut_ref(SceneStatus::default);

    // Rebuild the scene whenever the configuration changes; a mode switch
    // alone is applied to the running scene
    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let config_ref = config_ref.clone();
        let touch_state = touch_state.clone();
        use_effect_with(props.config.clone(), move |config| {
            let previous = config_ref.replace(config.clone());
            *touch_state.borrow_mut() = TouchState::default();
            let switched = previous.only_mode_differs(config)
                && match scene.borrow_mut().as_mut() {
                    Some(active) => {
                        active.set_mode(config.mode);
                        true
                    }
                    None => false,
                };
            if !switched {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    rebuild_scene(&canvas, &scene, config);
                }
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let config_ref = config_ref.clone();
        let touch_state = touch_state.clone();
        let status = status.clone();
        let last_status = last_status.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let (Some(window), Some(canvas)) = (window, canvas) else {
                log::error!("scene view: no window or canvas, nothing to drive");
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            if scene.borrow().is_none() {
                rebuild_scene(&canvas, &scene, &config_ref.borrow());
            }
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
            if ctx.is_none() {
                log::error!("scene view: canvas has no 2d context");
            }

            // RAF loop: advance animations, draw, publish status
            let running = Rc::new(RefCell::new(true));
            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let scene = scene.clone();
                let window_loop = window.clone();
                let running = running.clone();
                let raf_id = raf_id.clone();
                let frame_cell_loop = frame_cell.clone();
                let mut last_ts: Option<f64> = None;
                *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    if !*running.borrow() {
                        return;
                    }
                    let dt = last_ts.map_or(0.0, |prev| ((ts - prev) / 1000.0).clamp(0.0, MAX_FRAME_DT));
                    last_ts = Some(ts);
                    if let Some(scene) = scene.borrow_mut().as_mut() {
                        scene.on_update(dt);
                        let visible = match &ctx {
                            Some(ctx) => draw_scene(ctx, scene),
                            None => scene.visible_cells().count(),
                        };
                        let next = SceneStatus {
                            phase: scene.phase(),
                            mode: scene.controller().mode(),
                            magnification: format_scale(scene.camera().scale()),
                            visible,
                            total: scene.cells().len(),
                        };
                        if *last_status.borrow() != next {
                            *last_status.borrow_mut() = next.clone();
                            status.set(next);
                        }
                    }
                    if let Some(cb) = frame_cell_loop.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut(f64)>));
            }
            if let Some(cb) = frame_cell.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            // Resize: a new viewport means a new scene
            let resize_cb = {
                let canvas = canvas.clone();
                let scene = scene.clone();
                let config_ref = config_ref.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move || {
                    *touch_state.borrow_mut() = TouchState::default();
                    rebuild_scene(&canvas, &scene, &config_ref.borrow());
                }) as Box<dyn FnMut()>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            // Wheel: one complete pinch per event
            let wheel_cb = {
                let scene = scene.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let factor = (-e.delta_y() * 0.001).exp();
                    if let Some(scene) = scene.borrow_mut().as_mut() {
                        for (scale, phase) in [
                            (1.0, PinchPhase::Began),
                            (factor, PinchPhase::Changed),
                            (1.0, PinchPhase::Ended),
                        ] {
                            scene.on_pinch(&mut Pinch { scale, phase });
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();

            // Mouse stands in for a single finger
            let mousedown_cb = {
                let scene = scene.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let loc = Point::new(e.offset_x() as f64, e.offset_y() as f64);
                    let touch = {
                        let mut ts = touch_state.borrow_mut();
                        ts.mouse_down = true;
                        ts.begin_primary(MOUSE_ID, loc, e.time_stamp())
                    };
                    if let Some(scene) = scene.borrow_mut().as_mut() {
                        scene.on_touch_begin(&[touch]);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .ok();
            let mousemove_cb = {
                let scene = scene.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let touch = {
                        let mut ts = touch_state.borrow_mut();
                        if !ts.mouse_down {
                            return;
                        }
                        ts.move_primary(Point::new(e.offset_x() as f64, e.offset_y() as f64))
                    };
                    if let Some(scene) = scene.borrow_mut().as_mut() {
                        scene.on_touch_move(&[touch]);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .ok();
            let mouseup_cb = {
                let scene = scene.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let touch = {
                        let mut ts = touch_state.borrow_mut();
                        if !ts.mouse_down {
                            return;
                        }
                        ts.end_primary()
                    };
                    if let Some(scene) = scene.borrow_mut().as_mut() {
                        scene.on_touch_end(&[touch]);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();

            // Touch
            let touch_start_cb = {
                let canvas_tc = canvas.clone();
                let scene = scene.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let rect = canvas_tc.get_bounding_client_rect();
                    let touches = e.touches();
                    let mut ts = touch_state.borrow_mut();
                    let mut scene_ref = scene.borrow_mut();
                    let Some(scene) = scene_ref.as_mut() else { return };
                    if touches.length() >= 2 {
                        if ts.pinch.is_active() {
                            return;
                        }
                        // A pinch takes over: the dragging finger is cancelled
                        if ts.primary_id.is_some() {
                            let touch = ts.end_primary();
                            scene.on_touch_cancel(&[touch]);
                        }
                        if let Some(dist) = pinch_distance(&touches, &rect) {
                            let mut pinch = ts.pinch.begin(dist);
                            scene.on_pinch(&mut pinch);
                            ts.pinch.commit(&pinch);
                        }
                    } else if let Some(t0) = e.changed_touches().item(0) {
                        let touch = ts.begin_primary(
                            t0.identifier(),
                            touch_location(&t0, &rect),
                            e.time_stamp(),
                        );
                        scene.on_touch_begin(&[touch]);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
                .ok();
            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let scene = scene.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let rect = canvas_tc.get_bounding_client_rect();
                    let touches = e.touches();
                    let mut ts = touch_state.borrow_mut();
                    let mut scene_ref = scene.borrow_mut();
                    let Some(scene) = scene_ref.as_mut() else { return };
                    if ts.pinch.is_active() {
                        if let Some(mut pinch) =
                            pinch_distance(&touches, &rect).and_then(|d| ts.pinch.change(d))
                        {
                            scene.on_pinch(&mut pinch);
                            ts.pinch.commit(&pinch);
                        }
                        return;
                    }
                    let Some(id) = ts.primary_id else { return };
                    if let Some(t) = find_touch(&touches, id) {
                        let touch = ts.move_primary(touch_location(&t, &rect));
                        scene.on_touch_move(&[touch]);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
                .ok();
            let touch_end_cb = touch_release_listener(scene.clone(), touch_state.clone(), false);
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            let touch_cancel_cb = touch_release_listener(scene.clone(), touch_state.clone(), true);
            canvas
                .add_event_listener_with_callback("touchcancel", touch_cancel_cb.as_ref().unchecked_ref())
                .ok();

            // Cleanup
            let window_clone = window.clone();
            Box::new(move || {
                *running.borrow_mut() = false;
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                frame_cell.borrow_mut().take();
                let _ = window_clone
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                let _ = window_clone
                    .remove_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
                for (name, cb) in [
                    ("wheel", wheel_cb.as_ref()),
                    ("mousedown", mousedown_cb.as_ref()),
                    ("mousemove", mousemove_cb.as_ref()),
                    ("touchstart", touch_start_cb.as_ref()),
                    ("touchmove", touch_move_cb.as_ref()),
                    ("touchend", touch_end_cb.as_ref()),
                    ("touchcancel", touch_cancel_cb.as_ref()),
                ] {
                    let _ = canvas.remove_event_listener_with_callback(name, cb.unchecked_ref());
                }
                let _keep_alive = (
                    &resize_cb,
                    &wheel_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &touch_cancel_cb,
                );
            }) as Box<dyn FnOnce()>
        });
    }

    let toggle_zoom_cb = {
        let scene = scene.clone();
        Callback::from(move |()| {
            if let Some(scene) = scene.borrow_mut().as_mut() {
                scene.toggle_zoom();
            }
        })
    };
    let reset_cb = {
        let scene = scene.clone();
        Callback::from(move |()| {
            if let Some(scene) = scene.borrow_mut().as_mut() {
                scene.reset_camera();
            }
        })
    };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
        <canvas ref={canvas_ref.clone()} id="scene-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        <StatsPanel
            phase={status.phase}
            mode={status.mode}
            magnification={status.magnification.clone()}
            visible={status.visible}
            total={status.total}
        />
        <CameraControls on_toggle_zoom={toggle_zoom_cb} on_reset={reset_cb} on_open_settings={props.on_open_settings.clone()} />
    </div>}
}

/// Shared by `touchend` and `touchcancel`: ends the pinch when fewer than two
/// fingers remain and releases the primary finger if it lifted.
fn touch_release_listener(
    scene: SharedScene,
    touch_state: Rc<RefCell<TouchState>>,
    cancelled: bool,
) -> Closure<dyn FnMut(TouchEvent)> {
    Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        let mut ts = touch_state.borrow_mut();
        let mut scene_ref = scene.borrow_mut();
        let Some(scene) = scene_ref.as_mut() else { return };
        if ts.pinch.is_active() && e.touches().length() < 2 {
            if let Some(mut pinch) = ts.pinch.end() {
                scene.on_pinch(&mut pinch);
            }
        }
        let Some(id) = ts.primary_id else { return };
        if find_touch(&e.changed_touches(), id).is_some() {
            let touch = ts.end_primary();
            if cancelled {
                scene.on_touch_cancel(&[touch]);
            } else {
                scene.on_touch_end(&[touch]);
            }
        }
    }) as Box<dyn FnMut(TouchEvent)>)
}

fn rebuild_scene(canvas: &HtmlCanvasElement, scene: &SharedScene, config: &DemoConfig) {
    let viewport = fit_canvas(canvas);
    *scene.borrow_mut() = Some(GameScene::new(config, viewport));
}

/// Matches the canvas backing store to its on-screen size.
fn fit_canvas(canvas: &HtmlCanvasElement) -> Size {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    Size::new(width as f64, height as f64)
}

fn touch_location(t: &web_sys::Touch, rect: &DomRect) -> Point {
    Point::new(
        t.client_x() as f64 - rect.left(),
        t.client_y() as f64 - rect.top(),
    )
}

fn find_touch(list: &TouchList, id: i32) -> Option<web_sys::Touch> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .find(|t| t.identifier() == id)
}

fn pinch_distance(list: &TouchList, rect: &DomRect) -> Option<f64> {
    let a = touch_location(&list.item(0)?, rect);
    let b = touch_location(&list.item(1)?, rect);
    Some(a.distance(b))
}

/// Draws the visible blocks and returns how many were drawn.
fn draw_scene(ctx: &CanvasRenderingContext2d, scene: &GameScene) -> usize {
    let vp = scene.viewport();
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);

    let cam = scene.camera();
    let zoom = 1.0 / cam.scale();
    let font_px = LABEL_FONT_SIZE * zoom;
    let show_labels = font_px >= LABEL_MIN_PX;
    if show_labels {
        ctx.set_font(&format!("{font_px:.1}px sans-serif"));
        ctx.set_text_align("center");
        ctx.set_text_baseline("alphabetic");
    }

    let mut drawn = 0;
    for cell in scene.visible_cells() {
        let c = cam.scene_to_view(cell.position, vp);
        let w = cell.size.width * zoom;
        let h = cell.size.height * zoom;
        ctx.set_fill_style_str(&cell.color.css());
        ctx.fill_rect(c.x - w / 2.0, c.y - h / 2.0, w, h);
        if show_labels {
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.fill_text(&cell.label, c.x, c.y).ok();
        }
        drawn += 1;
    }
    drawn
}
