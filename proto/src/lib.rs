//! Messages from the simulation core to presentation layers
//!
//! Renderers, audio and particle effects run outside the core and only ever
//! read what it publishes. Uses postcard for compact binary serialization;
//! the COBS helpers frame messages for byte streams such as pipes.

use postcard::{from_bytes, from_bytes_cobs, to_allocvec, to_allocvec_cobs};

// ============================================================================
// Shared encodings
// ============================================================================

/// 0 = left, 1 = right
pub type SideId = u8;

pub const SIDE_LEFT: SideId = 0;
pub const SIDE_RIGHT: SideId = 1;

/// Round phase as published to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}

/// Final result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Left,
    Right,
    Tie,
}

/// Everything a renderer needs to draw one tick
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub phase: Phase,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_dx: f32,
    pub ball_dy: f32,
    pub ball_radius: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub max_score: u8,
    /// Only present for timed rounds
    pub time_remaining_ms: Option<u64>,
}

// ============================================================================
// Core -> presentation
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CoreMsg {
    /// Per-tick state snapshot
    Frame(Frame),

    /// Ball bounced off a paddle (screen shake, particles, blip)
    PaddleHit { side: SideId },

    /// Ball bounced off the top or bottom wall
    WallHit,

    /// A side won a point
    Scored { side: SideId },

    /// Round finished
    GameOver { outcome: Outcome },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl CoreMsg {
    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    /// Serialize as a COBS frame terminated by a zero byte
    pub fn to_cobs(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec_cobs(self)
    }

    /// Deserialize one COBS frame. Decodes in place, so the buffer is clobbered.
    pub fn from_cobs(frame: &mut [u8]) -> Result<Self, postcard::Error> {
        from_bytes_cobs(frame)
    }
}

/// Split a byte stream of COBS frames and decode each one.
pub fn decode_stream(bytes: &[u8]) -> Result<Vec<CoreMsg>, postcard::Error> {
    bytes
        .split_inclusive(|b| *b == 0)
        .filter(|chunk| chunk.len() > 1)
        .map(|chunk| CoreMsg::from_cobs(&mut chunk.to_vec()))
        .collect()
}
