pub mod card;
pub mod filter;
pub mod lightbox;
pub mod navigation;
