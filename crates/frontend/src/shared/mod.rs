pub mod components;
pub mod format;
pub mod icons;
pub mod image_fallback;
pub mod reveal;
pub mod scroll_track;
