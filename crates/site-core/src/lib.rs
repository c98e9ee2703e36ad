pub mod carousel;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod filter;
pub mod header;
pub mod interact;
pub mod particles;
pub mod progress;
pub mod reveal;
pub mod sections;
pub mod telemetry;
pub mod theme;
pub mod toast;

pub use carousel::*;
pub use config::*;
pub use constants::*;
pub use countdown::*;
pub use header::*;
pub use progress::*;
pub use reveal::*;
pub use sections::*;
pub use telemetry::*;
pub use theme::*;
