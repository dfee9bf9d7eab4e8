//! Text and image overlay
//!
//! Labels, paragraphs and pictures are host-page elements layered over the
//! canvas. Each frame this module decides, from the site state alone, which
//! of them are visible and where they sit. The web entry applies the result to
//! the DOM; tests inspect it directly.

use glam::Vec2;

use crate::consts::SOCIAL_URLS;
use crate::sim::{AppState, ContactForm, Section, View};

/// Menu label scale while hovered
pub const MENU_HOVER_SCALE: f32 = 1.2;
/// Section title scale while the pointer is on the center hotspot
pub const TITLE_HOVER_SCALE: f32 = 1.1;
/// Back control scale while hovered
pub const BACK_HOVER_SCALE: f32 = 1.1;
/// Social icon scale while hovered
pub const ICON_HOVER_SCALE: f32 = 1.2;

const WHITE: [u8; 3] = [255, 255, 255];
const RED: [u8; 3] = [255, 0, 0];
const YELLOW: [u8; 3] = [255, 255, 0];
const AMBER: [u8; 3] = [255, 200, 0];

pub fn menu_scale(hovered: bool) -> f32 {
    if hovered { MENU_HOVER_SCALE } else { 1.0 }
}

pub fn title_scale(hovered: bool) -> f32 {
    if hovered { TITLE_HOVER_SCALE } else { 1.0 }
}

pub fn back_scale(hovered: bool) -> f32 {
    if hovered { BACK_HOVER_SCALE } else { 1.0 }
}

/// Which point of the element `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
    /// Middle of the left edge
    LeftCenter,
}

impl Anchor {
    /// CSS translate that moves the anchor point onto `pos`
    pub fn css_translate(self) -> &'static str {
        match self {
            Anchor::TopLeft => "translate(0, 0)",
            Anchor::Center => "translate(-50%, -50%)",
            Anchor::LeftCenter => "translate(0, -50%)",
        }
    }
}

/// Placement of one host-page element for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayItem {
    /// Element id in the host page
    pub id: String,
    pub visible: bool,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub scale: f32,
    /// Text color, when the element is text
    pub color: Option<[u8; 3]>,
    /// Replacement text content
    pub text: Option<&'static str>,
    /// Layout width in px
    pub width: Option<f32>,
    /// Stacked under the canvas instead of over it
    pub below_canvas: bool,
}

impl OverlayItem {
    fn new(id: impl Into<String>, visible: bool, pos: Vec2, anchor: Anchor) -> Self {
        Self {
            id: id.into(),
            visible,
            pos,
            anchor,
            scale: 1.0,
            color: None,
            text: None,
            width: None,
            below_canvas: false,
        }
    }

    fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    fn color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }

    fn text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    fn below_canvas(mut self) -> Self {
        self.below_canvas = true;
        self
    }
}

/// The pointer emitter stands in for the system cursor in overviews
pub fn hides_cursor(view: View) -> bool {
    view.is_overview()
}

/// Every overlay element with its placement for this frame
pub fn overlay(state: &AppState) -> Vec<OverlayItem> {
    let layout = state.layout();
    let view = state.view;
    let (w, h) = (state.viewport.x, state.viewport.y);
    let center = layout.center();
    let pointer = state.pointer;
    let on_center = layout.near_center(pointer);
    let landing = view == View::Landing;

    let mut items = vec![
        OverlayItem::new("home", !landing, Vec2::splat(10.0), Anchor::TopLeft),
        OverlayItem::new("logo", landing, Vec2::new(w * 0.25, h / 2.0), Anchor::Center),
        OverlayItem::new("hint", true, Vec2::new(w / 2.0, h - 20.0), Anchor::Center)
            .text("Scroll to change section")
            .color(WHITE),
    ];

    for section in Section::ALL {
        let hovered = layout.menu_hovered(section, pointer);
        items.push(
            OverlayItem::new(
                format!("menu-{}", section.index()),
                landing,
                layout.menu_anchor(section),
                Anchor::LeftCenter,
            )
            .text(section.title())
            .scale(menu_scale(hovered))
            .color(if hovered { RED } else { WHITE }),
        );
    }

    // Overview headings
    let overview = match view {
        View::Overview(s) => Some(s),
        _ => None,
    };
    let title_color = if on_center { RED } else { WHITE };
    items.push(
        OverlayItem::new(
            "title",
            overview.is_some_and(|s| s != Section::Game),
            center,
            Anchor::Center,
        )
        .text(overview.unwrap_or(Section::About).title())
        .scale(title_scale(on_center))
        .color(title_color),
    );

    let game = overview == Some(Section::Game);
    // Seen through the translucent game background, under walls and ripples
    items.push(
        OverlayItem::new("game-cover", game, Vec2::ZERO, Anchor::TopLeft)
            .width(w)
            .below_canvas(),
    );
    items.push(
        OverlayItem::new("game-title", game, center, Anchor::Center)
            .text(Section::Game.title())
            .scale(title_scale(on_center))
            .color(title_color),
    );
    items.push(
        OverlayItem::new(
            "game-prompt",
            game && state.frame % 60 < 30,
            center + Vec2::new(0.0, 70.0),
            Anchor::Center,
        )
        .text("Press Game Section to start")
        .color(YELLOW),
    );

    // Detail pages
    let detail = match view {
        View::Detail(s) => Some(s),
        _ => None,
    };
    let about = detail == Some(Section::About);
    let text = layout.about_text();
    items.push(
        OverlayItem::new("about-text", about, text.center(), Anchor::Center)
            .width(text.size.x)
            .scale(state.text_scale)
            .color(WHITE),
    );
    let photo = layout.about_photo();
    items.push(
        OverlayItem::new("about-photo", about, photo.center(), Anchor::Center)
            .width(photo.size.x)
            .scale(state.photo_scale),
    );

    let contact = detail == Some(Section::Contact);
    items.push(
        OverlayItem::new("contact-text", contact, Vec2::splat(50.0), Anchor::TopLeft)
            .width(w - 100.0)
            .color(WHITE),
    );
    items.push(
        OverlayItem::new(
            "contact-sent",
            contact && state.contact_form == ContactForm::Sent,
            center,
            Anchor::Center,
        )
        .text(ContactForm::SENT_MESSAGE)
        .color(AMBER),
    );

    let social = detail == Some(Section::Social);
    items.push(
        OverlayItem::new("social-text", social, Vec2::splat(50.0), Anchor::TopLeft)
            .width(w - 100.0)
            .color(WHITE),
    );
    for i in 0..SOCIAL_URLS.len() {
        let c = layout.icon_center(i);
        let hovered = layout.icon_at(pointer) == Some(i);
        items.push(
            OverlayItem::new(format!("icon-{}", i), social, c, Anchor::Center)
                .width(crate::consts::ICON_SIZE)
                .scale(if hovered { ICON_HOVER_SCALE } else { 1.0 }),
        );
    }

    let back = layout.back_button();
    items.push(
        OverlayItem::new("back-label", detail.is_some(), back.center(), Anchor::Center)
            .text("Back")
            .scale(back_scale(back.contains_inclusive(pointer)))
            .color(WHITE),
    );

    items
}
