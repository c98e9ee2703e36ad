// DOM hooks shared by the page templates and the wiring in this crate.
//
// Selectors that vary between pages live in `site_core::SiteConfig`; these are
// the ids and classes both templates agree on.

// Element ids
pub const PRELOADER_ID: &str = "preloader";
pub const DARK_MODE_TOGGLE_ID: &str = "darkModeToggle";
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const COUNTDOWN_UNIT_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

// Classes toggled by the components
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const HIDE_CLASS: &str = "hide";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";
pub const CELEBRATION_CLASS: &str = "celebration";
pub const TIME_UNIT_SELECTOR: &str = ".time-unit";

// Project cards, filter and modal
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const FILTERABLE_CARD_SELECTOR: &str = ".project-card-large";
pub const MODAL_CARD_SELECTOR: &str = ".project-card";
pub const MODAL_CAPTION_SELECTOR: &str = ".project-caption";
pub const PROJECTS_GRID_SELECTOR: &str = ".projects-grid";
pub const MODAL_OVERLAY_CLASS: &str = "modal-overlay";
pub const MODAL_CLOSE_CLASS: &str = "modal-close";

// Contact form
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const SUBMIT_TEXT_SELECTOR: &str = ".btn-text";
pub const SUBMIT_LOADING_SELECTOR: &str = ".btn-loading";
pub const TOAST_CLOSE_SELECTOR: &str = ".notification-close";
pub const FORM_FIELD_SELECTOR: &str = "form input, form textarea, form select";
pub const FOCUSED_CLASS: &str = "focused";
pub const INVALID_FORM_REASON: &str = "form has invalid fields";

// Images
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SOURCE_ATTR: &str = "data-src";
pub const PRELOAD_IMAGE_SELECTOR: &str = "img[data-preload]";

// Anchors handled by smooth scrolling
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Progress bar inline style when the template does not provide one
pub const PROGRESS_BAR_STYLE: &str = "position:fixed;top:0;left:0;height:4px;width:0%;\
background:linear-gradient(90deg, var(--accent-orange), var(--main-color));\
z-index:10000;transition:width 0.1s ease;";

// Visual feedback timings (ms)
pub const TOGGLE_PRESS_MS: u32 = 150;
pub const FILTER_FADE_IN_MS: u32 = 10;
pub const FILTER_FADE_OUT_MS: u32 = 300;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const MOTION_CSS_VARS: [&str; 3] = ["--transition-fast", "--transition", "--transition-slow"];
