//! Scene assembly
//!
//! Turns the site state into triangle lists in pixel coordinates, drawn
//! back to front. Flat-colored triangles make up most of a frame; the
//! projects cube adds textured faces drawn between two runs of them. Text and
//! page images are not drawn here; see `ui`.

use glam::Vec2;

use super::shapes;
use super::vertex::{TexVertex, Vertex, colors};
use crate::sim::{AppState, CUBE_SIZE, FACE_UVS, Section, View};
use crate::{lerp_color, map_range, rgba};

/// Circle tessellation for small dots
const DOT_SEGMENTS: u32 = 12;
/// Circle tessellation for large discs
const DISC_SEGMENTS: u32 = 24;
/// Stroke width of every wall, rotating or boundary
const WALL_WIDTH: f32 = 2.0;

/// Top and bottom colors of an overview background
pub fn section_gradient(section: Section) -> ([f32; 4], [f32; 4]) {
    match section {
        Section::About => (rgba(10, 0, 30, 255), rgba(30, 0, 50, 255)),
        Section::Game => (rgba(0, 10, 0, 255), rgba(10, 30, 10, 255)),
        Section::Projects => (rgba(30, 0, 0, 255), rgba(50, 10, 10, 255)),
        Section::Contact => (rgba(10, 10, 40, 255), rgba(25, 25, 90, 255)),
        Section::Social => (rgba(40, 0, 20, 255), rgba(80, 0, 60, 255)),
    }
}

/// Opacity of the game cover image behind the game overview
pub const COVER_OPACITY: f32 = 200.0 / 255.0;

/// One frame of geometry
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    /// Textured faces are drawn after `vertices[..textured_at]`
    pub textured_at: usize,
    pub faces: Vec<TexturedFace>,
}

/// A cube face as two triangles sampling one image slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturedFace {
    pub texture: usize,
    pub vertices: [TexVertex; 6],
}

/// Tint of each cube face (front, right, back, left, top, bottom), shown
/// until the face images have loaded
const CUBE_TINTS: [[f32; 4]; 6] = [
    [0.85, 0.35, 0.35, 0.95],
    [0.35, 0.75, 0.45, 0.95],
    [0.35, 0.45, 0.85, 0.95],
    [0.85, 0.75, 0.3, 0.95],
    [0.7, 0.4, 0.85, 0.95],
    [0.3, 0.75, 0.8, 0.95],
];

/// Build the full frame
pub fn build(state: &AppState) -> Frame {
    let mut out = Vec::with_capacity(16 * 1024);
    let mut textured_at = None;
    let mut faces = Vec::new();
    match state.view {
        View::Landing => landing(state, &mut out),
        View::Overview(section) => {
            // The game cover sits behind the canvas and shows through
            let opacity = if section == Section::Game { 1.0 - COVER_OPACITY } else { 1.0 };
            background(state, section, opacity, &mut out);
            rays(state, &mut out);
            overview_effects(state, section, &mut out);
        }
        View::Detail(section) => {
            background(state, section, 1.0, &mut out);
            detail(state, section, &mut out);
            if section == Section::Projects {
                textured_at = Some(out.len());
                faces = cube_faces(state);
                bursts(state, &mut out);
            }
            back_button(state, &mut out);
        }
    }
    Frame {
        textured_at: textured_at.unwrap_or(out.len()),
        vertices: out,
        faces,
    }
}

fn background(state: &AppState, section: Section, opacity: f32, out: &mut Vec<Vertex>) {
    let (mut top, mut bottom) = section_gradient(section);
    top[3] = opacity;
    bottom[3] = opacity;
    out.extend(shapes::vertical_gradient(Vec2::ZERO, state.viewport, top, bottom));
}

/// Projected cube faces, far to near, each split into two textured triangles
fn cube_faces(state: &AppState) -> Vec<TexturedFace> {
    state
        .cube
        .faces(state.layout().center(), CUBE_SIZE)
        .into_iter()
        .map(|face| {
            let corner = |i: usize| {
                let p = face.corners[i];
                TexVertex::new(p.x, p.y, FACE_UVS[i].to_array(), face.w[i])
            };
            TexturedFace {
                texture: face.texture,
                vertices: [0, 1, 2, 0, 2, 3].map(corner),
            }
        })
        .collect()
}

/// Grid spacing scaled by the quality preset
fn grid_step(state: &AppState, base: f32) -> f32 {
    base * state.settings.quality.grid_factor()
}

/// Grid sample points covering the viewport
fn grid(viewport: Vec2, step: f32) -> impl Iterator<Item = Vec2> {
    let cols = (viewport.x / step).ceil().max(0.0) as u32;
    let rows = (viewport.y / step).ceil().max(0.0) as u32;
    (0..cols).flat_map(move |i| (0..rows).map(move |j| Vec2::new(i as f32 * step, j as f32 * step)))
}

fn landing(state: &AppState, out: &mut Vec<Vertex>) {
    out.extend(shapes::rect(Vec2::ZERO, state.viewport, colors::BACKGROUND));

    // Noise field of soft dots drifting with the pointer
    let t = state.frame as f32 * 0.005;
    let low = rgba(80, 0, 150, 255);
    let high = rgba(255, 100, 255, 255);
    let parallax = state.pointer * 0.002;
    for p in grid(state.viewport, grid_step(state, 50.0)) {
        let n = state.noise.sample(p.x * 0.01, p.y * 0.01, t);
        let mut color = lerp_color(low, high, n);
        color[3] = map_range(n, (0.0, 1.0), (50.0, 200.0)) / 255.0;
        let mut d = map_range(n, (0.0, 1.0), (8.0, 30.0));
        if state.pointer.distance(p) < 50.0 {
            d *= 1.3;
        }
        out.extend(shapes::circle(p + parallax, d / 2.0, color, DOT_SEGMENTS));
    }

    let layout = state.layout();
    let backdrop = layout.menu_backdrop();
    out.extend(shapes::rect(backdrop.pos, backdrop.size, colors::MENU_BACKDROP));

    // Bullet left of each entry, following the label's hover state
    for section in Section::ALL {
        let anchor = layout.menu_anchor(section);
        let hovered = layout.menu_hovered(section, state.pointer);
        let scale = crate::ui::menu_scale(hovered);
        let color = if hovered { colors::RED } else { colors::WHITE };
        out.extend(shapes::circle(
            anchor + Vec2::new(-40.0 * scale, 0.0),
            6.0 * scale,
            color,
            DOT_SEGMENTS,
        ));
    }
}

fn rays(state: &AppState, out: &mut Vec<Vertex>) {
    for wall in state.walls.current_segments() {
        out.extend(shapes::line(wall.a, wall.b, WALL_WIDTH, colors::WHITE));
    }

    for beam in state.cast_rays() {
        out.extend(shapes::line(beam.from, beam.to, 1.0, colors::RAY));
    }

    out.extend(shapes::circle(state.emitter.pos, 2.0, colors::WHITE, DOT_SEGMENTS));
    for flash in &state.flashes {
        out.extend(shapes::circle(flash.pos, 2.0, colors::WHITE, DOT_SEGMENTS));
    }
}

fn overview_effects(state: &AppState, section: Section, out: &mut Vec<Vertex>) {
    match section {
        Section::Game => {
            for ripple in state.ripples.iter() {
                let color = [1.0, 1.0, 1.0, ripple.alpha / 255.0];
                out.extend(shapes::circle_outline(ripple.pos, ripple.radius, 2.0, color));
            }
        }
        Section::Projects => {
            for thumb in state.thumbnails.iter() {
                if thumb.hovered(state.pointer) {
                    let [r, g, b] = thumb.color;
                    out.extend(shapes::rotated_rect(
                        thumb.pos,
                        thumb.size,
                        thumb.angle,
                        [r, g, b, 150.0 / 255.0],
                    ));
                }
                let corners = shapes::rect_corners(thumb.pos, thumb.size, thumb.angle);
                out.extend(shapes::polygon_outline(&corners, 1.0, colors::WHITE));
            }
            bursts(state, out);
        }
        Section::Contact => {
            for pulse in state.pulses.iter() {
                let color = [0.0, 1.0, 1.0, pulse.alpha / 255.0];
                out.extend(shapes::circle_outline(pulse.pos, pulse.radius, 3.0, color));
            }
        }
        Section::Social => {
            for link in state.swarm.links() {
                let color = [0.0, 1.0, 1.0, link.alpha / 255.0];
                out.extend(shapes::line(link.a, link.b, 2.0, color));
            }
            for p in &state.swarm.particles {
                out.extend(shapes::circle(p.pos, p.size / 2.0, colors::CYAN, DISC_SEGMENTS));
            }
        }
        Section::About => {}
    }
}

fn bursts(state: &AppState, out: &mut Vec<Vertex>) {
    for burst in state.bursts.iter() {
        for spark in burst.particles.iter() {
            let color = [1.0, 1.0, 1.0, spark.life.max(0.0) / 255.0];
            out.extend(shapes::circle(spark.pos, 2.0, color, DOT_SEGMENTS));
        }
    }
}

fn detail(state: &AppState, section: Section, out: &mut Vec<Vertex>) {
    let layout = state.layout();
    let frame = state.frame as f32;
    match section {
        Section::About => {
            let low = rgba(200, 50, 255, 255);
            let high = rgba(50, 255, 200, 255);
            for p in grid(state.viewport, grid_step(state, 60.0)) {
                let n = state.noise.sample(p.x * 0.005, p.y * 0.005, frame * 0.01);
                let mut color = lerp_color(low, high, n);
                color[3] = map_range(n, (0.0, 1.0), (80.0, 150.0)) / 255.0;
                let d = map_range(n, (0.0, 1.0), (20.0, 50.0));
                let wobble = Vec2::new(
                    10.0 * (frame * 0.02 + p.x).sin(),
                    10.0 * (frame * 0.02 + p.y).cos(),
                );
                out.extend(shapes::circle(p + wobble, d / 2.0, color, DISC_SEGMENTS));
            }

            // Text panel, padded 10 px and scaled about its center
            let text = layout.about_text();
            let size = (text.size + Vec2::splat(20.0)) * state.text_scale;
            out.extend(shapes::rect(text.center() - size / 2.0, size, colors::ABOUT_PANEL));

            // Frame behind the photo
            let photo = layout.about_photo();
            let size = (photo.size + Vec2::splat(8.0)) * state.photo_scale;
            out.extend(shapes::rect(
                photo.center() - size / 2.0,
                size,
                [1.0, 1.0, 1.0, 0.15],
            ));
        }
        Section::Projects => {
            let low = rgba(0, 100, 200, 255);
            let high = rgba(200, 100, 0, 255);
            for p in grid(state.viewport, grid_step(state, 80.0)) {
                let n = state.noise.sample(p.x * 0.01, p.y * 0.01, frame * 0.02);
                let mut color = lerp_color(low, high, n);
                color[3] = 150.0 / 255.0;
                out.extend(shapes::rect(p, Vec2::splat(60.0), color));
            }

            for face in state.cube.faces(layout.center(), CUBE_SIZE) {
                out.extend(shapes::quad(face.corners, CUBE_TINTS[face.index]));
            }
        }
        Section::Contact => {
            out.extend(shapes::rect(Vec2::ZERO, state.viewport, colors::CONTACT_BASE));
            let t = frame * 0.01;
            for i in 0..50 {
                let i = i as f32;
                let p = Vec2::new(
                    state.noise.sample(i, t, 0.0) * state.viewport.x,
                    state.noise.sample(i + 1000.0, t, 0.0) * state.viewport.y,
                );
                out.extend(shapes::rect(p, Vec2::splat(20.0), [1.0, 1.0, 1.0, 50.0 / 255.0]));
            }
        }
        Section::Social => {
            out.extend(shapes::rect(Vec2::ZERO, state.viewport, colors::SOCIAL_BASE));
            let from = rgba(255, 0, 150, 255);
            let to = rgba(0, 255, 200, 255);
            let center = layout.center();
            for i in 0..10 {
                let radius = 50.0 + i as f32 * 30.0;
                let start = state.social_orbit + i as f32 * 0.3;
                let color = lerp_color(from, to, i as f32 / 10.0);
                out.extend(shapes::arc_band(
                    center,
                    radius - 1.5,
                    radius + 1.5,
                    start,
                    1.2,
                    color,
                    24,
                ));
            }
        }
        Section::Game => {}
    }
}

fn back_button(state: &AppState, out: &mut Vec<Vertex>) {
    let rect = state.layout().back_button();
    let scale = crate::ui::back_scale(rect.contains_inclusive(state.pointer));
    let size = rect.size * scale;
    out.extend(shapes::rect(rect.center() - size / 2.0, size, colors::BACK_BUTTON));
}
