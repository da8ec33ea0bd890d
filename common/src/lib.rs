pub mod counter;
pub mod filter;
pub mod form;
pub mod header;
pub mod lightbox;
pub mod motion;
pub mod preference;
pub mod theme;
pub mod transition;
pub mod viewport;

// page interaction logic
//
// everything in this crate is plain data and arithmetic so that it can be exercised by native
// tests; the webapp owns the DOM and the timers and calls into these types from its handlers.
//
// timings are fixed, in milliseconds, and shared by every section that uses them
pub const FILTER_HIDE_SHOW_GAP_MS: u32 = 300;
pub const FILTER_STAGGER_MS: u32 = 50;

pub const LIGHTBOX_OPEN_DELAY_MS: u32 = 10;
pub const LIGHTBOX_FOCUS_DELAY_MS: u32 = 100;
pub const LIGHTBOX_CLOSE_DELAY_MS: u32 = 300;

pub const COUNTER_DURATION_MS: f64 = 2500.0;
pub const COUNTER_START_DELAY_MS: u32 = 300;
pub const COUNTER_HIGHLIGHT_MS: u32 = 1000;

pub const THEME_TRANSITION_MS: u32 = 500;
pub const RESET_TRANSITION_MS: u32 = 500;
pub const RIPPLE_MS: u32 = 600;
pub const ANNOUNCE_CLEAR_MS: u32 = 1000;

pub const SUBMIT_PENDING_MS: u32 = 1500;
pub const SUBMIT_SUCCESS_MS: u32 = 3000;
