//! Vulkan declarations, exposed only when the build asks for them.
//!
//! This crate is the single point of the grvk workspace deciding whether the
//! [Vulkan](https://www.khronos.org/vulkan/) API is visible to the rest of the engine. It defines
//! no Vulkan symbol itself: when the `"vulkan"` feature is enabled, it re-exports the declaration
//! set of [ash] (the [`vk`] module and the [`ash`] crate itself); when the feature is disabled, it
//! contributes nothing but the few constants describing the gate.
//!
//! Backend-specific code in other crates is expected to sit behind the same feature (forwarded to
//! this crate), so that referencing a Vulkan symbol in a build without Vulkan support is a
//! compile error rather than a silent runtime no-op.
//!
//! # How to setup
//!
//! ```ignore
//! [dependencies]
//! grvk-defines = { version = "…", features = ["vulkan"] }
//! ```
//!
//! Because Cargo unifies features, a single build graph always sees one state of the gate: if any
//! crate enables `"vulkan"`, every crate depending on `grvk-defines` observes it enabled.
//!
//! ## List of features
//!
//! - _Default_: `[]`.
//! - `"vulkan"`: expose the Vulkan declarations ([`vk`], [`ash`]). Nothing is linked.
//! - `"vulkan-linked"`: `"vulkan"`, and link the final artifact against the system Vulkan loader
//!   so that entry-point functions can be called.
//!
//! [ash]: https://crates.io/crates/ash

#![deny(missing_docs)]

use std::fmt;

/// Name of the Cargo feature driving the gate.
///
/// That name is stable: every crate of a build forwarding the capability to this one must use it.
pub const FLAG: &str = "vulkan";

/// Whether the Vulkan declarations are visible.
///
/// When `false`, naming anything Vulkan-related through this crate does not compile:
///
#[cfg_attr(feature = "vulkan", doc = "```")]
#[cfg_attr(not(feature = "vulkan"), doc = "```compile_fail")]
/// let _ = grvk_defines::vk::Result::SUCCESS;
/// ```
pub const ENABLED: bool = cfg!(feature = "vulkan");

/// Whether the build links against the Vulkan loader.
///
/// Implies [`ENABLED`].
pub const LINKED: bool = cfg!(feature = "vulkan-linked");

/// State of the gate, fixed for the lifetime of the build artifact.
pub const STATE: GateState = if ENABLED {
  GateState::GatedOn
} else {
  GateState::GatedOff
};

/// The two possible states of the gate.
///
/// There is no transition between them: the state is resolved before compilation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GateState {
  /// The Vulkan declarations are not visible.
  GatedOff,
  /// The Vulkan declarations are visible.
  GatedOn,
}

impl GateState {
  /// Whether the declarations are visible in that state.
  pub const fn is_on(self) -> bool {
    matches!(self, GateState::GatedOn)
  }
}

impl fmt::Display for GateState {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      GateState::GatedOff => f.write_str("gated-off"),
      GateState::GatedOn => f.write_str("gated-on"),
    }
  }
}

// the declaration set; ash is a single crate instance per build, so every path below names the
// same items
#[cfg(feature = "vulkan")]
pub use ash;

#[cfg(feature = "vulkan")]
pub use ash::vk;
