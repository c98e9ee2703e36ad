//! Project listing: category filter and the paged carousel.

use crate::constants::{
    ACTIVE_CLASS, FILTERABLE_CARD_SELECTOR, FILTER_BUTTON_SELECTOR, FILTER_FADE_IN_MS,
    FILTER_FADE_OUT_MS, PROJECTS_GRID_SELECTOR,
};
use crate::context::{Activation, IntervalSlot, PageContext};
use crate::dom;
use crate::events::keyboard;
use crate::events::keys::KeyAction;
use crate::markup;
use gloo_timers::callback::{Interval, Timeout};
use site_core::filter::{matches_filter, FILTER_ALL};
use site_core::Carousel;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

fn show_card(card: &web::Element) {
    dom::set_style(card, "display", "block");
    let card = card.clone();
    Timeout::new(FILTER_FADE_IN_MS, move || {
        dom::set_style(&card, "opacity", "1");
        dom::set_style(&card, "transform", "translateY(0)");
    })
    .forget();
}

/// Fade out, then drop from layout unless a later filter click showed the
/// card again in the meantime.
fn hide_card(card: &web::Element, generation: &Rc<Cell<u32>>) {
    dom::set_style(card, "opacity", "0");
    dom::set_style(card, "transform", "translateY(20px)");
    let card = card.clone();
    let issued = generation.get();
    let generation = generation.clone();
    Timeout::new(FILTER_FADE_OUT_MS, move || {
        if generation.get() == issued {
            dom::set_style(&card, "display", "none");
        }
    })
    .forget();
}

pub fn wire_filter(ctx: &PageContext) -> anyhow::Result<Activation> {
    let buttons = Rc::new(dom::query_all(&ctx.document, FILTER_BUTTON_SELECTOR));
    let cards = Rc::new(dom::query_all(&ctx.document, FILTERABLE_CARD_SELECTOR));
    if buttons.is_empty() || cards.is_empty() {
        return Ok(Activation::Skipped("no filterable projects"));
    }
    let generation = Rc::new(Cell::new(0u32));
    for button in buttons.iter() {
        let (all_buttons, cards, generation) = (buttons.clone(), cards.clone(), generation.clone());
        let clicked = button.clone();
        ctx.listen(button, "click", move |_: web::MouseEvent| {
            for b in all_buttons.iter() {
                dom::set_class(b, ACTIVE_CLASS, *b == clicked);
            }
            let filter = clicked
                .get_attribute("data-filter")
                .unwrap_or_else(|| FILTER_ALL.to_string());
            generation.set(generation.get().wrapping_add(1));
            let mut shown = 0usize;
            for card in cards.iter() {
                if matches_filter(card.get_attribute("data-category").as_deref(), &filter) {
                    show_card(card);
                    shown += 1;
                } else {
                    hide_card(card, &generation);
                }
            }
            log::debug!("[projects] filter {filter:?} shows {shown}/{}", cards.len());
        });
    }
    Ok(Activation::Active)
}

struct CarouselView {
    state: RefCell<Carousel>,
    track: web::Element,
    dots: Vec<web::Element>,
}

impl CarouselView {
    fn render(&self) {
        let (offset, current) = {
            let c = self.state.borrow();
            (c.track_offset_percent(), c.current())
        };
        dom::set_style(&self.track, "transform", &markup::translate_x_percent(offset));
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, i == current);
        }
    }

    fn step(&self, action: KeyAction) {
        {
            let mut c = self.state.borrow_mut();
            match action {
                KeyAction::PrevSlide => c.prev(),
                KeyAction::NextSlide => c.next(),
                KeyAction::Dismiss => return,
            };
        }
        self.render();
    }

    fn go_to(&self, slide: usize) {
        self.state.borrow_mut().go_to(slide);
        self.render();
    }
}

fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create {tag}: {:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}

/// Rebuild the projects grid as a paged carousel. Cards are moved, not
/// re-created, so listeners added later still attach to live nodes.
pub fn wire_carousel(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(cfg) = ctx.config.carousel else {
        return Ok(Activation::Skipped("no carousel on this page"));
    };
    let Some(grid) = dom::query(&ctx.document, PROJECTS_GRID_SELECTOR) else {
        return Ok(Activation::Skipped("no projects grid"));
    };
    let items = dom::query_all_within(&grid, ":scope > *");
    let Some(carousel) = Carousel::new(items.len(), cfg.items_per_slide) else {
        return Ok(Activation::Skipped("empty projects grid"));
    };
    let doc = &ctx.document;

    let container = create(doc, "div", markup::CAROUSEL_CONTAINER_CLASS)?;
    _ = container.set_attribute("tabindex", "0");
    let mut parts = Vec::with_capacity(markup::CAROUSEL_PARTS.len());
    for (tag, class) in markup::CAROUSEL_PARTS {
        let part = create(doc, tag, class)?;
        append(&container, &part)?;
        parts.push(part);
    }
    let [track, prev, next, dots_box]: [web::Element; 4] = parts
        .try_into()
        .map_err(|_| anyhow::anyhow!("carousel layout changed"))?;
    for item in &items {
        append(&track, item)?;
    }
    prev.set_inner_html("&#8249;");
    _ = prev.set_attribute("aria-label", "Précédent");
    next.set_inner_html("&#8250;");
    _ = next.set_attribute("aria-label", "Suivant");
    let mut dots = Vec::with_capacity(carousel.total_slides());
    for i in 0..carousel.total_slides() {
        let dot = create(doc, "button", "carousel-dot")?;
        _ = dot.set_attribute("aria-label", &format!("Diapositive {}", i + 1));
        append(&dots_box, &dot)?;
        dots.push(dot);
    }
    append(&grid, &container)?;

    let view = Rc::new(CarouselView {
        state: RefCell::new(carousel),
        track,
        dots,
    });
    view.render();

    for (button, action) in [(&prev, KeyAction::PrevSlide), (&next, KeyAction::NextSlide)] {
        let v = view.clone();
        ctx.listen(button, "click", move |_: web::MouseEvent| v.step(action));
    }
    for (i, dot) in view.dots.iter().enumerate() {
        let v = view.clone();
        ctx.listen(dot, "click", move |_: web::MouseEvent| v.go_to(i));
    }
    for action in [KeyAction::PrevSlide, KeyAction::NextSlide] {
        let v = view.clone();
        keyboard::on_key(ctx, &container, action, move || v.step(action));
    }

    if !ctx.reduced_motion && view.state.borrow().total_slides() > 1 {
        let v = view.clone();
        let slot: IntervalSlot = Rc::new(RefCell::new(Some(Interval::new(cfg.autoplay_ms, move || {
            v.step(KeyAction::NextSlide)
        }))));
        ctx.keep_interval(slot);
    }
    log::debug!(
        "[projects] carousel with {} items over {} slides",
        items.len(),
        view.state.borrow().total_slides()
    );
    Ok(Activation::Active)
}
