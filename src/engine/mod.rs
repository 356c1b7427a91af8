mod angles;
mod projection;
mod raycast;
mod types;

pub use angles::{normalize_deg, to_rad};
pub use projection::{WallColumn, pixel_to_ndc, project_hit};
pub use raycast::{CastConfig, FAR, HitSide, RayHit, cast};
pub use types::{Screen, ViewConfig};
