use crate::constants::PARTICLE_CANVAS_ID;
use crate::context::{Activation, PageContext};
use crate::dom;
use glam::Vec2;
use site_core::particles::{link_stroke, particle_fill, ParticleField};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct ParticleFrame {
    ctx2d: web::CanvasRenderingContext2d,
    field: ParticleField,
    /// Last pointer position in client coordinates, if the mouse has moved.
    pointer: Rc<Cell<Option<Vec2>>>,
}

impl ParticleFrame {
    pub fn frame(&mut self) {
        let bounds = self.field.bounds();
        self.ctx2d
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
        self.field.step_with_pointer(self.pointer.get());
        for p in &self.field.particles {
            self.ctx2d.begin_path();
            _ = self.ctx2d.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.size as f64,
                0.0,
                TAU,
            );
            self.ctx2d.set_fill_style_str(&particle_fill(p.opacity));
            self.ctx2d.fill();
        }
        let ps = &self.field.particles;
        for (i, j, alpha) in self.field.connections() {
            let (a, b) = (ps[i].position, ps[j].position);
            self.ctx2d.begin_path();
            self.ctx2d.move_to(a.x as f64, a.y as f64);
            self.ctx2d.line_to(b.x as f64, b.y as f64);
            self.ctx2d.set_stroke_style_str(&link_stroke(alpha));
            self.ctx2d.stroke();
        }
    }
}

/// Drive `frame` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame: Rc<RefCell<ParticleFrame>>, running: Rc<Cell<bool>>) {
    type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
    fn schedule(tick: &Tick) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            // release the closure once this call has returned
            let done = tick_clone.borrow_mut().take();
            spawn_local(async move { drop(done) });
            return;
        }
        frame.borrow_mut().frame();
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}

pub fn wire_particles(ctx: &PageContext) -> anyhow::Result<Activation> {
    if ctx.reduced_motion {
        return Ok(Activation::Skipped("reduced motion"));
    }
    let Some(canvas) = ctx
        .document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return Ok(Activation::Skipped("no particle canvas"));
    };
    let ctx2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get 2d context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let field = ParticleField::new(ctx.config.particle_count, w as f32, h as f32, rand::random());
    let pointer = Rc::new(Cell::new(None));
    let frame = Rc::new(RefCell::new(ParticleFrame {
        ctx2d,
        field,
        pointer: pointer.clone(),
    }));

    ctx.listen(&ctx.window, "mousemove", move |ev: web::MouseEvent| {
        pointer.set(Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32)));
    });

    {
        let frame = frame.clone();
        ctx.listen(&ctx.window, "resize", move |_: web::Event| {
            let (w, h) = dom::sync_canvas_to_viewport(&canvas);
            frame.borrow_mut().field.resize(w as f32, h as f32);
        });
    }
    log::debug!(
        "[frame] particle field {}x{} with {} particles",
        w,
        h,
        ctx.config.particle_count
    );
    start_loop(frame, ctx.running_flag());
    Ok(Activation::Active)
}
