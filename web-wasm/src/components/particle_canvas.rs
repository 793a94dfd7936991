//! 背景パーティクル（canvas 2D）

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use leptos::html::Canvas;
use leptos::prelude::*;
use persona_ai_common::{ParticleField, PARTICLE_COUNT, PARTICLE_FILL};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct ParticleLoop {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl ParticleLoop {
    fn new(canvas: HtmlCanvasElement) -> Option<Rc<Self>> {
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let (width, height) = window_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        Some(Rc::new(Self {
            canvas,
            context,
            field: RefCell::new(ParticleField::new(PARTICLE_COUNT, width, height, js_sys::Math::random)),
            frame: RefCell::new(None),
        }))
    }

    fn resize(&self) {
        let (width, height) = window_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.borrow_mut().resize(width, height);
    }

    fn draw(&self) {
        let mut field = self.field.borrow_mut();
        let (width, height) = field.size();
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, width, height);

        field.step();
        ctx.set_fill_style_str(PARTICLE_FILL);
        for p in field.particles() {
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        ctx.set_line_width(0.5);
        for link in field.links() {
            ctx.set_stroke_style_str(&link.stroke_style());
            ctx.begin_path();
            ctx.move_to(link.from.0, link.from.1);
            ctx.line_to(link.to.0, link.to.1);
            ctx.stroke();
        }
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            this.frame.borrow_mut().take();
            this.draw();
            this.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

fn window_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// ページ全体の背景として描画し続ける
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };
        let Some(particles) = ParticleLoop::new(canvas) else {
            return false;
        };

        if let Some(window) = web_sys::window() {
            let on_resize = Rc::clone(&particles);
            EventListener::new(&window, "resize", move |_| on_resize.resize()).forget();
        }
        particles.schedule();
        true
    });

    view! { <canvas id="particles" class="particles" node_ref=canvas_ref /> }
}
