//! Backend selection for the grvk engine.
//!
//! This crate is what the rest of the engine depends on. It picks a backend type at compile-time
//! ([`Backend`]) depending on the features you enable, and exposes the backend-specific code only
//! when that backend is compiled in. The Vulkan declarations themselves come from
//! [grvk-defines](https://crates.io/crates/grvk-defines), re-exported here as [`gate`].
//!
//! The Vulkan part of this crate sits behind the very same flag as the declarations it uses: the
//! `"vulkan"` feature of this crate simply forwards to `grvk-defines/vulkan`. Without it, the
//! [`vulkan`] module does not exist:
//!
#![cfg_attr(feature = "vulkan", doc = "```")]
#![cfg_attr(not(feature = "vulkan"), doc = "```compile_fail")]
//! let _ = grvk::vulkan::header_version();
//! ```
//!
//! # Consistency with the gate
//!
//! The backend selected here and the state of the gate always agree. Enabling
//! `grvk-defines/vulkan` from another crate of the build without enabling `grvk/vulkan` would
//! leave this crate on the null backend while the Vulkan declarations are visible; such a build is
//! rejected at compile-time. [`BACKEND_ENABLED`] and [`gate::ENABLED`] can never differ:
//!
//! ```compile_fail
//! const _: () = assert!(grvk::BACKEND_ENABLED != grvk::gate::ENABLED);
//! ```
//!
//! ## List of features
//!
//! - _Default_: `[]`, which selects the null backend.
//! - `"vulkan"`: Vulkan backend.
//! - `"vulkan-linked"`: Vulkan backend, linked against the system Vulkan loader. Required to query
//!   the running instance (see `vulkan::instance_version`).

#![deny(missing_docs)]

pub mod backend;
pub mod query;
#[cfg(feature = "vulkan")]
pub mod vulkan;

pub use backend::{Backend, BackendKind, GraphicsBackend, Null};
pub use grvk_defines as gate;

/// Whether the Vulkan backend is compiled in.
///
/// Always equal to [`gate::ENABLED`].
pub const BACKEND_ENABLED: bool = cfg!(feature = "vulkan");

const _: () = assert!(
  BACKEND_ENABLED == grvk_defines::ENABLED,
  "grvk-defines/vulkan is enabled without grvk/vulkan: enable the vulkan feature of grvk"
);
