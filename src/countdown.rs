use crate::constants::{CELEBRATION_CLASS, COUNTDOWN_UNIT_IDS, TIME_UNIT_SELECTOR, TOGGLE_PRESS_MS};
use crate::context::{Activation, IntervalSlot, PageContext};
use crate::dom;
use gloo_timers::callback::{Interval, Timeout};
use site_core::{format_unit, Countdown, CountdownTick, LocalDateTime, COUNTDOWN_TICK_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Milliseconds since the epoch for a wall-clock time in the visitor's zone.
fn local_target_ms(t: &LocalDateTime) -> i64 {
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        t.year.max(0) as u32,
        t.month as i32 - 1,
        t.day as i32,
        t.hour as i32,
        t.minute as i32,
        t.second as i32,
    )
    .get_time() as i64
}

/// Write a unit, with a short pulse when the digits change.
fn render_unit(el: &web::Element, value: i64) {
    let text = format_unit(value);
    if el.text_content().as_deref() == Some(text.as_str()) {
        return;
    }
    dom::set_style(el, "transform", "scale(1.1)");
    let el = el.clone();
    Timeout::new(TOGGLE_PRESS_MS, move || {
        el.set_text_content(Some(&text));
        dom::set_style(&el, "transform", "scale(1)");
    })
    .forget();
}

fn celebrate(document: &web::Document, units: &[web::Element]) {
    for el in units {
        el.set_text_content(Some("00"));
    }
    for el in dom::query_all(document, TIME_UNIT_SELECTOR) {
        dom::add_class(&el, CELEBRATION_CLASS);
    }
}

pub fn wire_countdown(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(target) = ctx.config.countdown else {
        return Ok(Activation::Skipped("no countdown on this page"));
    };
    let Some(units) = COUNTDOWN_UNIT_IDS
        .iter()
        .map(|id| ctx.document.get_element_by_id(id))
        .collect::<Option<Vec<_>>>()
    else {
        return Ok(Activation::Skipped("countdown markup incomplete"));
    };
    let countdown = Countdown::new(local_target_ms(&target));
    let document = ctx.document.clone();

    // true once the target has passed
    let tick = move || match countdown.tick(js_sys::Date::now() as i64) {
        CountdownTick::Running(left) => {
            for (el, value) in units.iter().zip(left.units()) {
                render_unit(el, value);
            }
            false
        }
        CountdownTick::Finished => {
            celebrate(&document, &units);
            true
        }
    };
    if tick() {
        log::info!("[countdown] target already passed");
        return Ok(Activation::Active);
    }

    let slot: IntervalSlot = Rc::new(RefCell::new(None));
    let own = slot.clone();
    let interval = Interval::new(COUNTDOWN_TICK_MS, move || {
        if tick() {
            log::info!("[countdown] finished");
            let done = own.borrow_mut().take();
            spawn_local(async move { drop(done) });
        }
    });
    *slot.borrow_mut() = Some(interval);
    ctx.keep_interval(slot);
    Ok(Activation::Active)
}
