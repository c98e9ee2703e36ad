use crate::constants::{
    CONTACT_FORM_ID, INVALID_FORM_REASON, SUBMIT_BUTTON_SELECTOR, SUBMIT_LOADING_SELECTOR,
    SUBMIT_TEXT_SELECTOR, TOAST_CLOSE_SELECTOR,
};
use crate::context::{Activation, PageContext};
use crate::dom;
use crate::markup;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use site_core::toast::{SubmitOutcome, ToastKind};
use site_core::{FORM_SUBMIT_SIMULATED_MS, TOAST_SLIDE_MS, TOAST_VISIBLE_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn slide_out(toast: &web::Element) {
    dom::set_style(toast, "transform", "translateX(400px)");
    let toast = toast.clone();
    Timeout::new(TOAST_SLIDE_MS, move || toast.remove()).forget();
}

/// Slide-in notification that dismisses itself or on its close button.
pub fn show_toast(document: &web::Document, kind: ToastKind, message: &str) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(kind.class_name());
    toast.set_inner_html(&markup::toast_html(kind, message));
    _ = toast.set_attribute("style", &markup::toast_style(kind));
    if body.append_child(&toast).is_err() {
        return;
    }

    let slide_in = toast.clone();
    Timeout::new(10, move || dom::set_style(&slide_in, "transform", "translateX(0)")).forget();

    let auto = toast.clone();
    let dismiss: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(Some(Timeout::new(
        TOAST_VISIBLE_MS,
        move || slide_out(&auto),
    ))));
    if let Some(close) = toast.query_selector(TOAST_CLOSE_SELECTOR).ok().flatten() {
        let toast = toast.clone();
        dom::on_click(&close, move |_| {
            // dropping the pending timeout cancels it
            dismiss.borrow_mut().take();
            slide_out(&toast);
        });
    }
}

struct SubmitButton {
    button: Option<web::HtmlButtonElement>,
    text: Option<web::Element>,
    loading: Option<web::Element>,
}

impl SubmitButton {
    fn find(form: &web::HtmlFormElement) -> Self {
        let pick = |sel: &str| form.query_selector(sel).ok().flatten();
        Self {
            button: pick(SUBMIT_BUTTON_SELECTOR)
                .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok()),
            text: pick(SUBMIT_TEXT_SELECTOR),
            loading: pick(SUBMIT_LOADING_SELECTOR),
        }
    }

    fn busy(&self) -> bool {
        self.button.as_ref().map(|b| b.disabled()).unwrap_or(false)
    }

    fn set_loading(&self, loading: bool) {
        if let Some(b) = &self.button {
            b.set_disabled(loading);
        }
        if let Some(t) = &self.text {
            dom::set_style(t, "display", if loading { "none" } else { "inline" });
        }
        if let Some(l) = &self.loading {
            dom::set_style(l, "display", if loading { "inline" } else { "none" });
        }
    }
}

/// Stand-in for a backend: the site has none, so a valid form is always
/// delivered after a short delay.
async fn send(form: &web::HtmlFormElement) -> SubmitOutcome {
    if !form.check_validity() {
        return SubmitOutcome::Failed(INVALID_FORM_REASON.to_string());
    }
    TimeoutFuture::new(FORM_SUBMIT_SIMULATED_MS).await;
    SubmitOutcome::Sent
}

async fn submit(document: web::Document, form: web::HtmlFormElement) {
    let button = SubmitButton::find(&form);
    if button.busy() {
        return;
    }
    button.set_loading(true);
    let outcome = send(&form).await;
    match &outcome {
        SubmitOutcome::Sent => {
            log::info!("[contact] message sent");
            form.reset();
        }
        SubmitOutcome::Failed(reason) => log::warn!("[contact] send failed: {reason}"),
    }
    let (kind, message) = outcome.toast();
    show_toast(&document, kind, message);
    button.set_loading(false);
}

pub fn wire_contact_form(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(form) = ctx
        .document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return Ok(Activation::Skipped("no contact form"));
    };
    let document = ctx.document.clone();
    let target = form.clone();
    ctx.listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        spawn_local(submit(document.clone(), target.clone()));
    });
    Ok(Activation::Active)
}
