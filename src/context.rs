//! Per-page-load state shared by every component.
//!
//! Components register their DOM listeners, timers and observers here instead
//! of leaking them, so [`PageContext::teardown`] can release everything a page
//! load acquired.

use gloo_timers::callback::Interval;
use site_core::{ScrollTelemetry, SiteConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Outcome of wiring one component.
#[derive(Debug)]
pub enum Activation {
    Active,
    /// Required markup is absent; the component stays inert for this page.
    Skipped(&'static str),
}

pub type IntervalSlot = Rc<RefCell<Option<Interval>>>;

pub type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

struct ObserverHandle {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct PageContext {
    pub window: web::Window,
    pub document: web::Document,
    pub config: SiteConfig,
    pub telemetry: Rc<RefCell<ScrollTelemetry>>,
    pub reduced_motion: bool,
    running: Rc<Cell<bool>>,
    listeners: RefCell<Vec<Listener>>,
    intervals: RefCell<Vec<IntervalSlot>>,
    observers: RefCell<Vec<ObserverHandle>>,
}

impl PageContext {
    pub fn new(config: SiteConfig, reduced_motion: bool) -> anyhow::Result<Rc<Self>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let telemetry = Rc::new(RefCell::new(ScrollTelemetry::new(config.throttle)));
        Ok(Rc::new(Self {
            window,
            document,
            config,
            telemetry,
            reduced_motion,
            running: Rc::new(Cell::new(true)),
            listeners: RefCell::new(Vec::new()),
            intervals: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
        }))
    }

    /// Add a listener owned by this context. Events that are not an `E` are
    /// ignored.
    pub fn listen<E>(
        &self,
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[ctx] cannot listen for {event}: {:?}", e);
            return;
        }
        self.listeners.borrow_mut().push(Listener {
            target: target.clone(),
            event,
            closure,
        });
    }

    pub fn keep_interval(&self, slot: IntervalSlot) {
        self.intervals.borrow_mut().push(slot);
    }

    pub fn keep_observer(&self, observer: web::IntersectionObserver, callback: ObserverCallback) {
        self.observers.borrow_mut().push(ObserverHandle {
            observer,
            _callback: callback,
        });
    }

    /// Cleared by teardown; animation loops stop rescheduling once false.
    pub fn running_flag(&self) -> Rc<Cell<bool>> {
        self.running.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn teardown(&self) {
        self.running.set(false);
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        let released = listeners.len();
        drop(listeners);
        for slot in std::mem::take(&mut *self.intervals.borrow_mut()) {
            slot.borrow_mut().take();
        }
        self.observers.borrow_mut().clear();
        self.telemetry.borrow_mut().clear();
        log::info!("[ctx] teardown released {released} listeners");
    }
}
