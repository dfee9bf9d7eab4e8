//! Frame driver and input handling
//!
//! Input events are applied in arrival order between frames. `tick` then
//! advances exactly the systems the current view shows.

use glam::Vec2;

use super::effects::{NeonPulse, Ripple};
use super::section::{Command, Section, View};
use super::state::{AppState, HOVER_SCALE, HOVER_SMOOTHING, SOCIAL_ORBIT_SPEED};
use crate::lerp;

/// Input from the host page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SiteEvent {
    PointerMove(Vec2),
    PointerDown(Vec2),
    /// Wheel delta (negative scrolls up)
    Scroll(f32),
    Resize(Vec2),
    /// Send pressed on the contact form
    ContactSent,
}

/// Apply one input event, returning the commands the host must perform
pub fn handle_event(state: &mut AppState, event: SiteEvent) -> Vec<Command> {
    match event {
        SiteEvent::PointerMove(p) => {
            state.pointer = p;
            Vec::new()
        }
        SiteEvent::PointerDown(p) => {
            state.pointer = p;
            press(state, p)
        }
        SiteEvent::Scroll(delta) => {
            scroll(state, delta);
            Vec::new()
        }
        SiteEvent::Resize(viewport) => {
            log::info!("Canvas resized to {}x{}", viewport.x, viewport.y);
            state.resize(viewport);
            Vec::new()
        }
        SiteEvent::ContactSent => {
            if state.view == View::Detail(Section::Contact) {
                state.contact_form = state.contact_form.send();
                log::info!("Contact form sent");
            }
            Vec::new()
        }
    }
}

fn scroll(state: &mut AppState, delta: f32) {
    let View::Overview(before) = state.view else {
        return;
    };
    let view = state.view.on_scroll(delta);
    state.view = view;
    if let View::Overview(after) = view {
        if after != before {
            log::info!("Section {:?} -> {:?}", before, after);
        }
        state.respawn_flashes(after.index());
    }
}

fn press(state: &mut AppState, p: Vec2) -> Vec<Command> {
    let hit = state.layout().hit_test(p, &state.thumbnails);
    let before = state.view;
    let (view, commands) = before.on_press(&hit);

    // Sparks fly from the card that was clicked
    if before == View::Overview(Section::Projects) {
        if let Some(pos) = hit.thumbnail.map(|i| state.thumbnails[i].pos) {
            state.spawn_burst(pos);
        }
    }

    if view != before {
        log::info!("View {:?} -> {:?}", before, view);
    }
    state.view = view;

    for &command in &commands {
        state.contact_form = state.contact_form.apply(command);
        if let Command::OpenUrl(url) = command {
            log::info!("Opening {}", url);
        }
    }
    commands
}

/// Advance every system the current view shows by one frame
pub fn tick(state: &mut AppState) {
    state.frame += 1;
    let pointer = state.pointer;
    let layout = state.layout();

    match state.view {
        View::Landing => {}
        View::Overview(section) => {
            state.walls.tick();
            state.emitter.update(Some(pointer));
            for flash in &mut state.flashes {
                flash.update(None);
            }

            match section {
                Section::Game => {
                    if layout.game_title_region().contains_strict(pointer) {
                        if state.ripple_cooldown.tick() {
                            state.ripples.spawn(Ripple::new(pointer));
                        }
                    } else {
                        state.ripple_cooldown.reset();
                    }
                    state.ripples.step();
                }
                Section::Projects => {
                    for thumb in &mut state.thumbnails {
                        thumb.update(pointer);
                    }
                    state.bursts.step();
                }
                Section::Contact => {
                    if state.pulse_cooldown.tick() {
                        state.pulses.spawn(NeonPulse::new(pointer));
                    }
                    state.pulses.step();
                }
                Section::Social => {
                    state.swarm.update(state.viewport, pointer);
                }
                Section::About => {}
            }
        }
        View::Detail(section) => match section {
            Section::About => {
                let text = layout.about_text().contains_inclusive(pointer);
                let photo = layout.about_photo().contains_inclusive(pointer);
                state.text_scale = ease_hover(state.text_scale, text);
                state.photo_scale = ease_hover(state.photo_scale, photo);
            }
            Section::Projects => {
                state.cube.tick();
                state.bursts.step();
            }
            Section::Social => {
                state.social_orbit += SOCIAL_ORBIT_SPEED;
            }
            Section::Contact | Section::Game => {}
        },
    }

    log::trace!("Frame {} ({:?})", state.frame, state.view);
}

/// Ease a hover scale toward its target for this frame
fn ease_hover(scale: f32, hovered: bool) -> f32 {
    let target = if hovered { HOVER_SCALE } else { 1.0 };
    lerp(scale, target, HOVER_SMOOTHING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::consts::*;
    use crate::sim::section::ContactForm;

    fn state() -> AppState {
        AppState::new(Vec2::new(1000.0, 800.0), Settings::default(), 21)
    }

    fn overview(section: Section) -> AppState {
        let mut s = state();
        s.view = View::Overview(section);
        s
    }

    fn click(s: &mut AppState, x: f32, y: f32) -> Vec<Command> {
        handle_event(s, SiteEvent::PointerDown(Vec2::new(x, y)))
    }

    #[test]
    fn test_landing_click_enters_overview() {
        let mut s = state();
        // "Projects" anchor at (550, 340)
        let cmds = click(&mut s, 560.0, 340.0);
        assert!(cmds.is_empty());
        assert_eq!(s.view, View::Overview(Section::Projects));
        assert!(s.flashes.is_empty());
    }

    #[test]
    fn test_landing_click_elsewhere_stays() {
        let mut s = state();
        click(&mut s, 500.0, 400.0);
        assert_eq!(s.view, View::Landing);
    }

    #[test]
    fn test_scroll_replaces_flashes() {
        let mut s = overview(Section::About);
        handle_event(&mut s, SiteEvent::Scroll(-120.0));
        assert_eq!(s.view, View::Overview(Section::Game));
        assert_eq!(s.flashes.len(), 2);

        handle_event(&mut s, SiteEvent::Scroll(-120.0));
        handle_event(&mut s, SiteEvent::Scroll(-120.0));
        handle_event(&mut s, SiteEvent::Scroll(-120.0));
        assert_eq!(s.flashes.len(), 5);

        // Clamped at the end, flashes still replaced
        let old: Vec<Vec2> = s.flashes.iter().map(|f| f.pos).collect();
        handle_event(&mut s, SiteEvent::Scroll(-120.0));
        assert_eq!(s.view, View::Overview(Section::Social));
        assert_eq!(s.flashes.len(), 5);
        let new: Vec<Vec2> = s.flashes.iter().map(|f| f.pos).collect();
        assert_ne!(old, new);
    }

    #[test]
    fn test_scroll_ignored_on_landing_and_detail() {
        let mut s = state();
        handle_event(&mut s, SiteEvent::Scroll(-1.0));
        assert_eq!(s.view, View::Landing);
        assert!(s.flashes.is_empty());

        s.view = View::Detail(Section::About);
        handle_event(&mut s, SiteEvent::Scroll(-1.0));
        assert_eq!(s.view, View::Detail(Section::About));
        assert!(s.flashes.is_empty());
    }

    #[test]
    fn test_about_detail_and_back() {
        let mut s = overview(Section::About);
        click(&mut s, 500.0, 400.0);
        assert_eq!(s.view, View::Detail(Section::About));

        // Clicking elsewhere keeps the detail open
        click(&mut s, 700.0, 100.0);
        assert_eq!(s.view, View::Detail(Section::About));

        click(&mut s, 20.0, 775.0);
        assert_eq!(s.view, View::Overview(Section::About));
    }

    #[test]
    fn test_contact_form_flow() {
        let mut s = overview(Section::Contact);
        let cmds = click(&mut s, 500.0, 400.0);
        assert_eq!(cmds, vec![Command::ShowContactForm]);
        assert_eq!(s.contact_form, ContactForm::Editing);

        handle_event(&mut s, SiteEvent::ContactSent);
        assert_eq!(s.contact_form, ContactForm::Sent);

        let cmds = click(&mut s, 20.0, 775.0);
        assert_eq!(cmds, vec![Command::RemoveContactForm]);
        assert_eq!(s.view, View::Overview(Section::Contact));
        assert_eq!(s.contact_form, ContactForm::Hidden);
    }

    #[test]
    fn test_thumbnail_click_bursts_and_opens_detail() {
        let mut s = overview(Section::Projects);
        let target = s.thumbnails[0].pos;
        click(&mut s, target.x, target.y);
        assert_eq!(s.view, View::Detail(Section::Projects));
        assert_eq!(s.bursts.len(), 1);

        // Burst keeps animating in the detail view and eventually clears
        for _ in 0..64 {
            tick(&mut s);
        }
        assert!(s.bursts.is_empty());
    }

    #[test]
    fn test_game_title_click_opens_link() {
        let mut s = overview(Section::Game);
        let cmds = click(&mut s, 500.0, 400.0);
        assert_eq!(cmds, vec![Command::OpenUrl(GAME_URL)]);
        assert_eq!(s.view, View::Overview(Section::Game));
    }

    #[test]
    fn test_social_icon_click() {
        let mut s = state();
        s.view = View::Detail(Section::Social);
        let c = s.layout().icon_center(2);
        let cmds = click(&mut s, c.x, c.y);
        assert_eq!(cmds, vec![Command::OpenUrl(SOCIAL_URLS[2])]);
    }

    #[test]
    fn test_ripples_only_inside_game_title() {
        let mut s = overview(Section::Game);
        handle_event(&mut s, SiteEvent::PointerMove(Vec2::new(500.0, 400.0)));
        for _ in 0..30 {
            tick(&mut s);
        }
        // Fires on entry, then every 15 frames
        assert_eq!(s.ripples.len(), 2);

        handle_event(&mut s, SiteEvent::PointerMove(Vec2::new(10.0, 10.0)));
        for _ in 0..30 {
            tick(&mut s);
        }
        assert_eq!(s.ripples.len(), 2);
    }

    #[test]
    fn test_pulses_in_contact_overview() {
        let mut s = overview(Section::Contact);
        for _ in 0..10 {
            tick(&mut s);
        }
        assert_eq!(s.pulses.len(), 2);
        // Nothing spawns once the detail is open
        s.view = View::Detail(Section::Contact);
        for _ in 0..10 {
            tick(&mut s);
        }
        assert_eq!(s.pulses.len(), 2);
    }

    #[test]
    fn test_walls_frozen_outside_overview() {
        let mut s = state();
        let before = s.walls.current_segments().to_vec();
        tick(&mut s);
        assert_eq!(s.walls.current_segments(), &before[..]);

        s.view = View::Overview(Section::About);
        tick(&mut s);
        assert_ne!(s.walls.current_segments(), &before[..]);
    }

    #[test]
    fn test_emitter_follows_pointer() {
        let mut s = overview(Section::About);
        handle_event(&mut s, SiteEvent::PointerMove(Vec2::new(123.0, 456.0)));
        tick(&mut s);
        assert_eq!(s.emitter.pos, Vec2::new(123.0, 456.0));
    }

    #[test]
    fn test_about_hover_eases() {
        let mut s = state();
        s.view = View::Detail(Section::About);
        handle_event(&mut s, SiteEvent::PointerMove(Vec2::new(100.0, 100.0)));
        tick(&mut s);
        assert!((s.text_scale - 1.005).abs() < 1e-5);
        for _ in 0..200 {
            tick(&mut s);
        }
        assert!((s.text_scale - HOVER_SCALE).abs() < 1e-3);
        assert!((s.photo_scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_event() {
        let mut s = state();
        handle_event(&mut s, SiteEvent::Resize(Vec2::new(640.0, 480.0)));
        assert_eq!(s.viewport, Vec2::new(640.0, 480.0));
        assert_eq!(s.layout().back_button().pos.y, 440.0);
    }
}
