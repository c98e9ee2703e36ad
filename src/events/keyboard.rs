use crate::context::PageContext;
use crate::events::keys::{action_for_key, KeyAction};
use web_sys as web;

/// Run `handler` when a keydown on `target` maps to `action`.
pub fn on_key(
    ctx: &PageContext,
    target: &web::EventTarget,
    action: KeyAction,
    handler: impl Fn() + 'static,
) {
    ctx.listen(target, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if action_for_key(&ev.key()) == Some(action) {
            handler();
        }
    });
}

/// Dismiss handler bound to the whole document.
pub fn on_dismiss(ctx: &PageContext, handler: impl Fn() + 'static) {
    on_key(ctx, &ctx.document, KeyAction::Dismiss, handler);
}
