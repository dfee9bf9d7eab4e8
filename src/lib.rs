//! Ray Folio - an interactive portfolio canvas
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ray casting, effects, navigation)
//! - `renderer`: WebGPU rendering pipeline
//! - `ui`: Text and image overlay derived from simulation state
//! - `settings`: Tunables loaded from the host page or a JSON file

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{QualityPreset, Settings};

use glam::Vec2;
use rand::Rng;

/// Site configuration constants
pub mod consts {
    /// Radius of the clickable hotspot at the canvas center (px)
    pub const CENTER_HOTSPOT_RADIUS: f32 = 80.0;

    /// Back control (bottom-left corner)
    pub const BACK_BUTTON_MARGIN: f32 = 10.0;
    pub const BACK_BUTTON_WIDTH: f32 = 100.0;
    pub const BACK_BUTTON_HEIGHT: f32 = 30.0;

    /// Landing menu metrics
    pub const MENU_FONT_SIZE: f32 = 32.0;
    pub const MENU_LINE_SPACING: f32 = 50.0;
    pub const MENU_HIT_HALF_HEIGHT: f32 = 20.0;
    pub const MENU_HOVER_RADIUS: f32 = 40.0;

    /// Section titles
    pub const TITLE_FONT_SIZE: f32 = 64.0;

    /// Average glyph advance as a fraction of font size (proportional face)
    pub const PROPORTIONAL_ADVANCE: f32 = 0.55;
    /// Glyph advance of the pixel face used for the game title
    pub const MONOSPACE_ADVANCE: f32 = 1.0;

    /// Default number of rotating walls
    pub const WALL_COUNT: usize = 5;
    /// Default wall angular velocity (radians/frame)
    pub const WALL_ROTATION_SPEED: f32 = 0.01;
    /// Default angular step between rays (degrees)
    pub const RAY_STEP_DEGREES: f32 = 1.0;
    /// Speed of a flash emitter (px/frame)
    pub const FLASH_SPEED: f32 = 3.0;

    /// Social icons
    pub const ICON_SIZE: f32 = 100.0;
    pub const ICON_SPACING: f32 = 150.0;

    pub const GAME_URL: &str = "https://www.youtube.com/watch?v=4RTZSV919Aw";
    pub const SOCIAL_URLS: [&str; 3] = [
        "https://instagram.com/cam__studio_",
        "https://www.behance.net/camilozuleta1",
        "https://www.tiktok.com/@cam__studio_?_t=ZS-8uS2qtImD0J&_r=1",
    ];

    /// Portfolio images shown on the projects cube, by image slot
    pub const CUBE_IMAGES: [&str; 3] = [
        "assets/portfolio-1.jpg",
        "assets/portfolio-2.png",
        "assets/portfolio-3.jpg",
    ];
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Re-map a value from one range to another (unclamped)
#[inline]
pub fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    to.0 + (value - from.0) / (from.1 - from.0) * (to.1 - to.0)
}

/// Linear interpolation between two RGBA colors
#[inline]
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}

/// Build an RGBA color from 0-255 channel values
#[inline]
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Uniformly random unit vector
#[inline]
pub fn random_unit(rng: &mut impl Rng) -> Vec2 {
    Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU))
}
