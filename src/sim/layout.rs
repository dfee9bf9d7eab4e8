//! Screen layout and hit testing
//!
//! Every clickable region is derived from the viewport size. Text extents are
//! estimated from the character count, font size and an average glyph
//! advance, since glyph metrics live in the host page.

use glam::Vec2;

use super::section::{Press, Section};
use super::thumbnail::Thumbnail;
use crate::consts::*;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Edges included
    pub fn contains_inclusive(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }

    /// Edges excluded
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.pos.x
            && p.x < self.pos.x + self.size.x
            && p.y > self.pos.y
            && p.y < self.pos.y + self.size.y
    }
}

/// Estimated rendered width of a single line of text
#[inline]
pub fn text_width(text: &str, font_size: f32, advance: f32) -> f32 {
    text.chars().count() as f32 * font_size * advance
}

/// Derived positions for the current viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub viewport: Vec2,
}

impl Layout {
    pub fn new(viewport: Vec2) -> Self {
        Self { viewport }
    }

    pub fn center(&self) -> Vec2 {
        self.viewport / 2.0
    }

    /// Left anchor of a landing menu entry (text is left-aligned, vertically centered)
    pub fn menu_anchor(&self, section: Section) -> Vec2 {
        Vec2::new(
            self.viewport.x * 0.55,
            self.viewport.y * 0.3 + (section.index() - 1) as f32 * MENU_LINE_SPACING,
        )
    }

    /// Dark panel behind the landing menu
    pub fn menu_backdrop(&self) -> Rect {
        Rect::new(
            self.viewport.x * 0.54,
            self.viewport.y * 0.28,
            self.viewport.x * 0.45,
            300.0,
        )
    }

    /// Menu entry whose text box contains `p`
    pub fn menu_entry_at(&self, p: Vec2) -> Option<Section> {
        Section::ALL.into_iter().find(|&s| {
            let anchor = self.menu_anchor(s);
            let w = text_width(s.title(), MENU_FONT_SIZE, PROPORTIONAL_ADVANCE);
            p.x > anchor.x && p.x < anchor.x + w && (p.y - anchor.y).abs() < MENU_HIT_HALF_HEIGHT
        })
    }

    /// Menu entry close enough to its anchor to highlight
    pub fn menu_hovered(&self, section: Section, p: Vec2) -> bool {
        p.distance(self.menu_anchor(section)) < MENU_HOVER_RADIUS
    }

    pub fn near_center(&self, p: Vec2) -> bool {
        p.distance(self.center()) < CENTER_HOTSPOT_RADIUS
    }

    /// Back control in the bottom-left corner
    pub fn back_button(&self) -> Rect {
        Rect::new(
            BACK_BUTTON_MARGIN,
            self.viewport.y - BACK_BUTTON_HEIGHT - BACK_BUTTON_MARGIN,
            BACK_BUTTON_WIDTH,
            BACK_BUTTON_HEIGHT,
        )
    }

    /// Padded box around the centered game title
    pub fn game_title_region(&self) -> Rect {
        let tw = text_width(
            Section::Game.title(),
            TITLE_FONT_SIZE,
            MONOSPACE_ADVANCE,
        );
        let c = self.center();
        Rect::new(
            c.x - tw / 2.0 - 10.0,
            c.y - TITLE_FONT_SIZE / 2.0 - 10.0,
            tw + 20.0,
            TITLE_FONT_SIZE + 20.0,
        )
    }

    /// Center of the i-th social icon
    pub fn icon_center(&self, i: usize) -> Vec2 {
        let c = self.center();
        Vec2::new(c.x - 200.0 + i as f32 * ICON_SPACING, c.y + 50.0)
    }

    pub fn icon_at(&self, p: Vec2) -> Option<usize> {
        (0..SOCIAL_URLS.len()).find(|&i| p.distance(self.icon_center(i)) < ICON_SIZE / 2.0)
    }

    /// About detail text panel (before hover scaling)
    pub fn about_text(&self) -> Rect {
        Rect::new(50.0, 50.0, self.viewport.x / 2.0, self.viewport.y - 100.0)
    }

    /// About detail photo frame, centered on the right side
    pub fn about_photo(&self) -> Rect {
        let w = self.viewport.x / 4.0;
        // Portrait frame; the host page crops the photo into it
        let h = w * 4.0 / 3.0;
        let cx = self.viewport.x - (w / 2.0 + 50.0);
        let cy = self.viewport.y / 2.0;
        Rect::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Run every hit test for a press at `p`
    pub fn hit_test(&self, p: Vec2, thumbnails: &[Thumbnail]) -> Press {
        Press {
            menu_entry: self.menu_entry_at(p),
            center: self.near_center(p),
            thumbnail: thumbnails.iter().position(|t| t.contains(p)),
            back: self.back_button().contains_inclusive(p),
            game_title: self.game_title_region().contains_strict(p),
            icon: self.icon_at(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(Vec2::new(1000.0, 800.0))
    }

    #[test]
    fn test_menu_hit() {
        let l = layout();
        // About anchor at (550, 240); "About me" is 8 chars
        let w = 8.0 * MENU_FONT_SIZE * PROPORTIONAL_ADVANCE;
        assert_eq!(l.menu_entry_at(Vec2::new(560.0, 240.0)), Some(Section::About));
        assert_eq!(l.menu_entry_at(Vec2::new(549.0 + w, 259.0)), Some(Section::About));
        assert_eq!(l.menu_entry_at(Vec2::new(550.0, 240.0)), None);
        assert_eq!(l.menu_entry_at(Vec2::new(560.0, 260.0)), None);
        // Social is the fifth line
        assert_eq!(l.menu_entry_at(Vec2::new(560.0, 440.0)), Some(Section::Social));
    }

    #[test]
    fn test_menu_hit_adjacent_lines() {
        let l = layout();
        // Lines sit 50 px apart with a 20 px half-height, leaving a gap
        assert_eq!(l.menu_entry_at(Vec2::new(560.0, 309.0)), Some(Section::Game));
        assert_eq!(l.menu_entry_at(Vec2::new(560.0, 315.0)), None);
        assert_eq!(l.menu_entry_at(Vec2::new(560.0, 321.0)), Some(Section::Projects));
    }

    #[test]
    fn test_back_button_inclusive() {
        let l = layout();
        let back = l.back_button();
        assert_eq!(back, Rect::new(10.0, 760.0, 100.0, 30.0));
        assert!(back.contains_inclusive(Vec2::new(10.0, 760.0)));
        assert!(back.contains_inclusive(Vec2::new(110.0, 790.0)));
        assert!(!back.contains_inclusive(Vec2::new(110.1, 790.0)));
    }

    #[test]
    fn test_center_hotspot() {
        let l = layout();
        assert!(l.near_center(Vec2::new(579.0, 400.0)));
        assert!(!l.near_center(Vec2::new(580.0, 400.0)));
    }

    #[test]
    fn test_game_region_strict() {
        let l = layout();
        let r = l.game_title_region();
        // 12 chars at 64 px
        assert_eq!(r.size, Vec2::new(12.0 * 64.0 + 20.0, 84.0));
        assert_eq!(r.pos.y, 400.0 - 42.0);
        assert!(r.contains_strict(Vec2::new(500.0, 400.0)));
        assert!(!r.contains_strict(r.pos));
    }

    #[test]
    fn test_icons() {
        let l = layout();
        assert_eq!(l.icon_center(0), Vec2::new(300.0, 450.0));
        assert_eq!(l.icon_center(2), Vec2::new(600.0, 450.0));
        assert_eq!(l.icon_at(Vec2::new(340.0, 450.0)), Some(0));
        assert_eq!(l.icon_at(Vec2::new(350.0, 450.0)), None);
        assert_eq!(l.icon_at(Vec2::new(450.0, 480.0)), Some(1));
    }

    #[test]
    fn test_hit_test_collects_everything() {
        let l = layout();
        let press = l.hit_test(Vec2::new(20.0, 770.0), &[]);
        assert!(press.back);
        assert!(!press.center);
        assert_eq!(press.menu_entry, None);
        assert_eq!(press.thumbnail, None);
    }
}
