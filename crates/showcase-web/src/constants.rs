// DOM selectors and state class names consumed/written by the controllers.

// Carousel
pub const SLIDER_SELECTOR: &str = ".slider";
pub const SLIDE_SELECTOR: &str = ".slide";
pub const DOTS_SELECTOR: &str = ".slider__dots";
pub const SLIDE_BASE_CLASS: &str = "slide";
pub const POSITION_CLASS_PREFIX: &str = "pos";
pub const LOADED_CLASS: &str = "is-loaded";
pub const COLOR_ATTR: &str = "data-color";
pub const DEFAULT_DOT_COLOR: &str = "#ffffff";

// Reveal sections
pub const STEP_SECTION_SELECTOR: &str = ".step-reveal";
pub const AUTO_SECTION_SELECTOR: &str = ".auto-reveal";
pub const CARD_SELECTOR: &str = ".reveal-card";
pub const LAYER_SELECTOR: &str = ".parallax-layer";
pub const VISIBLE_CLASS: &str = "is-visible";
