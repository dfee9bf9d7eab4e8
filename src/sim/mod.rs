//! Frame-stepped site simulation
//!
//! Everything the canvas shows is derived from state in this module:
//! - Seeded RNG only, so a fixed seed replays a session
//! - One frame per tick, no wall-clock time
//! - No rendering or platform dependencies

pub mod cube;
pub mod effects;
pub mod emitter;
pub mod layout;
pub mod noise;
pub mod ray;
pub mod section;
pub mod segment;
pub mod state;
pub mod swarm;
pub mod thumbnail;
pub mod tick;

pub use cube::{CUBE_SIZE, Cube, CubeFace, FACE_UVS, TEXTURE_COUNT};
pub use effects::{Burst, BurstParticle, Cooldown, Effects, NeonPulse, Ripple, Transient};
pub use emitter::{Beam, Emitter};
pub use layout::{Layout, Rect};
pub use noise::ValueNoise;
pub use ray::{Ray, ray_segment_intersection};
pub use section::{Command, ContactForm, Press, Section, View};
pub use segment::{Endpoints, Segment, SegmentStore};
pub use state::AppState;
pub use swarm::{Link, Swarm};
pub use thumbnail::Thumbnail;
pub use tick::{SiteEvent, handle_event, tick};
