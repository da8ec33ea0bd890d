pub mod dom;
pub mod lightbox;
pub mod listener;
pub mod reveal;
pub mod storage;
pub mod style;
pub mod theme;
