// Shared tuning defaults for both page presets.
//
// Values that differ between the business and concert pages live in the
// presets in `config.rs`; these are the fallbacks.

// Scroll telemetry
pub const DEFAULT_THROTTLE_MS: u64 = 50;

// Section tracking
pub const DEFAULT_LEAD_IN_PX: f64 = 120.0; // fixed header height
pub const DEFAULT_HOME_THRESHOLD_PX: f64 = 100.0;

// Reveal on scroll
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element visible
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = -50.0;

// Sticky header and back-to-top
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;
pub const HEADER_HIDE_AFTER_PX: f64 = 200.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;
pub const SMOOTH_SCROLL_GAP_PX: f64 = 20.0;

// Parallax
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

// Carousel
pub const CAROUSEL_ITEMS_PER_SLIDE: usize = 3;
pub const CAROUSEL_AUTOPLAY_MS: u32 = 5_000;

// Countdown
pub const COUNTDOWN_TICK_MS: u32 = 1_000;
pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

// Particles
pub const DEFAULT_PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity drawn from (-span/2, span/2)
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_REPEL_RADIUS: f32 = 100.0; // px around the pointer
pub const PARTICLE_REPEL_STRENGTH: f32 = 0.01; // fraction of the offset per frame
pub const PARTICLE_LINK_DISTANCE: f32 = 100.0;
pub const PARTICLE_LINK_MAX_ALPHA: f32 = 0.1;

// Micro-interactions
pub const TILT_DIVISOR: f32 = 10.0; // px of pointer travel per degree
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Toasts and form
pub const TOAST_VISIBLE_MS: u32 = 5_000;
pub const TOAST_SLIDE_MS: u32 = 300;
pub const FORM_SUBMIT_SIMULATED_MS: u32 = 2_000;

// Preloader
pub const PRELOADER_FADE_MS: u32 = 500;

// Persisted preference
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";
