// HTML and inline-style strings built by the components. Kept free of web-sys
// so host tests can include it directly.

use site_core::interact::Ripple;
use site_core::toast::{escape_html, ToastKind};

pub const MODAL_SHELL_HTML: &str = "<div class=\"modal-content\">\
<button class=\"modal-close\" aria-label=\"Fermer\">&times;</button>\
<div class=\"modal-body\"></div></div>";

pub const MODAL_BODY_SELECTOR: &str = ".modal-body";

pub const RIPPLE_STYLE_ID: &str = "ripple-animation";

pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(2); opacity: 0; } }";

pub const CAROUSEL_CONTAINER_CLASS: &str = "carousel-container";

/// Children of the carousel container as `(tag, class)`, in document order:
/// track, previous, next, dots.
pub const CAROUSEL_PARTS: [(&str, &str); 4] = [
    ("div", "carousel-track"),
    ("button", "carousel-btn carousel-prev"),
    ("button", "carousel-btn carousel-next"),
    ("div", "carousel-dots"),
];

pub const SKIP_LINK_CLASS: &str = "skip-link";
pub const SKIP_LINK_HREF: &str = "#main";
pub const SKIP_LINK_TEXT: &str = "Aller au contenu principal";
pub const SKIP_LINK_STYLE: &str = "position:absolute;top:-40px;left:6px;\
background:var(--primary);color:white;padding:8px;text-decoration:none;\
border-radius:4px;z-index:1000;transition:top 0.3s;";

/// Skip link offset: shown while focused, parked above the viewport otherwise.
#[inline]
pub fn skip_link_top(focused: bool) -> &'static str {
    if focused {
        "6px"
    } else {
        "-40px"
    }
}

pub const MODAL_FALLBACK_DESCRIPTION: &str =
    "Découvrez les détails de ce projet et les solutions mises en œuvre.";

pub fn toast_html(kind: ToastKind, message: &str) -> String {
    format!(
        "<div class=\"notification-content\"><span class=\"notification-icon\">{}</span>\
<span class=\"notification-message\">{}</span>\
<button class=\"notification-close\" aria-label=\"Fermer\">&times;</button></div>",
        kind.icon(),
        escape_html(message)
    )
}

pub fn toast_style(kind: ToastKind) -> String {
    format!(
        "position:fixed;top:100px;right:20px;background:{};color:white;padding:1rem 1.5rem;\
border-radius:8px;box-shadow:0 10px 30px rgba(0,0,0,0.2);z-index:10000;\
transform:translateX(400px);transition:transform 0.3s ease;max-width:400px;",
        kind.background()
    )
}

/// Modal body for a project card. Tags come from a comma-separated
/// `data-tags` attribute.
pub fn modal_body_html(
    title: &str,
    image_src: Option<&str>,
    description: &str,
    tags: &str,
) -> String {
    let mut html = String::new();
    if let Some(src) = image_src.filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(src),
            escape_html(title)
        ));
    }
    html.push_str(&format!("<h2>{}</h2>", escape_html(title)));
    html.push_str(&format!("<p>{}</p>", escape_html(description)));
    let tags: Vec<&str> = tags.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
    if !tags.is_empty() {
        html.push_str("<div class=\"modal-tags\">");
        for tag in tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
        }
        html.push_str("</div>");
    }
    html
}

pub fn ripple_style(r: &Ripple) -> String {
    format!(
        "position:absolute;border-radius:50%;background:rgba(255,255,255,0.6);\
transform:scale(0);animation:ripple 0.6s linear;pointer-events:none;\
width:{0:.1}px;height:{0:.1}px;left:{1:.1}px;top:{2:.1}px;",
        r.size, r.left, r.top
    )
}

#[inline]
pub fn translate_x_percent(percent: f64) -> String {
    format!("translateX({:.3}%)", percent)
}

#[inline]
pub fn translate_y_px(px: f64) -> String {
    format!("translateY({:.1}px)", px)
}

/// Class name for a single-class selector such as `.scroll-progress`.
pub fn class_of_selector(selector: &str) -> Option<&str> {
    let class = selector.trim().strip_prefix('.')?;
    let simple = !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    simple.then_some(class)
}
