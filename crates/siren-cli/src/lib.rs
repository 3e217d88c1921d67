//! Siren CLI library.
//!
//! This crate provides the command implementations behind the `siren`
//! binary: preset listing and inspection, WAV writing, and playback.

pub mod commands;
pub mod input;
pub mod playback;
