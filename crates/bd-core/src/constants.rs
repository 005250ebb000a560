//! Global constants for bd-core
//!
//! All linear values are millimeters unless noted otherwise.

/// Radial segments for the barrel body (cylinder and lathe)
pub const BODY_SEGMENTS: u32 = 24;

/// Profile sample rings along the torpedo lathe
pub const PROFILE_SAMPLES: u32 = 32;

/// Relative bulge of the torpedo profile at its midpoint
pub const TORPEDO_BULGE: f32 = 0.3;

/// Number of grip rings, independent of grip type
pub const GRIP_RING_COUNT: u32 = 8;

/// Grip ring tube radius
pub const RING_TUBE_RADIUS: f32 = 0.15;

/// Grip ring stand-off from the body surface
pub const RING_RADIAL_OFFSET: f32 = 0.1;

/// Ring/tube segment counts for the grip-ring torus
pub const RING_SEGMENTS: u32 = 16;
pub const RING_TUBE_SEGMENTS: u32 = 8;

/// Number of scallop cut bars around the circumference
pub const SCALLOP_CUT_COUNT: u32 = 16;

/// Scallop cut bar cross-section
pub const CUT_THICKNESS: f32 = 0.3;

/// Scallop cut bar stand-off from the body surface
pub const CUT_RADIAL_OFFSET: f32 = 0.2;

/// Scallop cut bar length as a fraction of the barrel length
pub const CUT_LENGTH_FACTOR: f32 = 0.8;

/// Thread collar length and radius inset from the body radius
pub const COLLAR_LENGTH: f32 = 3.0;
pub const COLLAR_RADIUS_INSET: f32 = 0.2;
pub const COLLAR_SEGMENTS: u32 = 16;

/// Tip cone height and radius inset from the body radius
pub const TIP_HEIGHT: f32 = 2.0;
pub const TIP_RADIUS_INSET: f32 = 0.3;
pub const TIP_SEGMENTS: u32 = 8;

/// Nominal manufacturing tolerance quoted on the drawing
pub const TOLERANCE_MM: f32 = 0.1;
