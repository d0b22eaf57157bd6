//! WebGPU client for Hoopshot
//!
//! Engine-free rendering using wgpu 24.0 with the "webgpu" feature. The
//! simulation lives in `game_core`; this crate adds input, drawing, the HUD
//! and the leaderboard calls.
//!
//! Note: the canvas surface, DOM and fetch code only exist on the wasm32
//! target. The rest builds (and is tested) on the host.

pub mod camera;
pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod input;
pub mod mesh;
pub mod network;
pub mod scene;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use client::{start, HoopClient};
