//! Action handlers, grouped by menu family.
//!
//! Each submodule adds its handlers to `Router` in its own `impl` block.

mod filters;
mod folders;
mod links;
mod list;
mod misc;
mod playback;
mod season;
mod session;
mod windows;
