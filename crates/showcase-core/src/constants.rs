// Interaction timing and threshold constants shared by the web frontend.

// Rate limiting
pub const ADVANCE_COOLDOWN_MS: i32 = 700; // carousel and step-reveal cooldown window
pub const IMAGE_LOAD_FALLBACK_MS: i32 = 2000; // loaded marker applied regardless after this

// Gesture thresholds
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // strict minimum swipe/drag distance
pub const WHEEL_NOISE_FLOOR: f64 = 10.0; // per-axis wheel delta noise floor

// Visibility ratios
pub const STEP_REVEAL_RATIO: f64 = 0.3; // section area ratio that starts the step sequence
pub const AUTO_REVEAL_RATIO: f64 = 0.25; // section area ratio that reveals all cards

// Central viewport band for step advances: section top above 75% of the
// viewport height and section bottom below 25% from the top.
pub const BAND_TOP_FRACTION: f64 = 0.75;
pub const BAND_BOTTOM_FRACTION: f64 = 0.25;

// Parallax
pub const PARALLAX_RANGE_PX: f64 = 16.0; // vertical translation per unit scroll factor
