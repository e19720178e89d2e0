use folio_core::Theme;
use folio_core::config::StarfieldConfig;
use folio_core::starfield::{Camera, Starfield, Viewport};
use leptos::html;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Match the drawing buffer to the element's layout size.
fn sync_size(canvas: &HtmlCanvasElement) -> Viewport {
    let width = canvas.client_width().max(0) as u32;
    let height = canvas.client_height().max(0) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    Viewport {
        width: f64::from(width),
        height: f64::from(height),
    }
}

fn draw(
    ctx: &CanvasRenderingContext2d,
    field: &Starfield,
    camera: &Camera,
    viewport: Viewport,
    elapsed_secs: f64,
    color: &str,
) {
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.set_fill_style_str(color);
    for star in field.frame(elapsed_secs, camera, viewport) {
        let side = star.size.max(1.0);
        ctx.fill_rect(star.x - side / 2.0, star.y - side / 2.0, side, side);
    }
}

/// Full-viewport rotating starfield behind a page.
///
/// Points are generated when the canvas mounts and dropped with it.
#[component]
pub fn StarCanvas(theme: Theme, stars: StarfieldConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let stopped = Arc::new(AtomicBool::new(false));
    {
        let stopped = Arc::clone(&stopped);
        on_cleanup(move || stopped.store(true, Ordering::Relaxed));
    }

    let color = theme.colors.star;
    let mut started = false;
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if started {
            return;
        }
        started = true;

        let Some(ctx) = context_2d(&canvas) else {
            log::warn!("2d canvas context unavailable; starfield disabled");
            return;
        };

        let field = Starfield::random(stars.count, stars.extent);
        log::debug!("starfield mounted with {} points", field.len());
        let camera = Camera::default();
        let stopped = Arc::clone(&stopped);
        let mut origin: Option<f64> = None;

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next = Rc::clone(&frame);
        *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if stopped.load(Ordering::Relaxed) {
                // Breaks the Rc cycle so the closure is freed.
                next.borrow_mut().take();
                return;
            }
            let start = *origin.get_or_insert(timestamp);
            let viewport = sync_size(&canvas);
            draw(&ctx, &field, &camera, viewport, (timestamp - start) / 1000.0, color);
            if let Some(callback) = next.borrow().as_ref() {
                let _ = window().request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }));

        if let Some(callback) = frame.borrow().as_ref() {
            let _ = window().request_animation_frame(callback.as_ref().unchecked_ref());
        }
    });

    view! { <canvas node_ref=canvas_ref class="star-canvas" aria-hidden="true"></canvas> }
}
