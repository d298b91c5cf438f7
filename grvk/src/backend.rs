//! Backend type selection.
//!
//! [`Backend`] is resolved at compile-time: the Vulkan backend when the `"vulkan"` feature is
//! enabled, [`Null`] otherwise. Code generic over the backend should use [`GraphicsBackend`].

use std::fmt;

/// Backend types.
pub trait GraphicsBackend {
  /// Kind of backend.
  const KIND: BackendKind;

  /// Human-readable name of the backend.
  const NAME: &'static str;
}

/// The kinds of backends the engine knows about.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BackendKind {
  /// Vulkan.
  Vulkan,
  /// No graphics API.
  Null,
}

impl fmt::Display for BackendKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      BackendKind::Vulkan => f.write_str("Vulkan"),
      BackendKind::Null => f.write_str("null"),
    }
  }
}

/// Backend used when no graphics API is compiled in.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Null;

impl GraphicsBackend for Null {
  const KIND: BackendKind = BackendKind::Null;
  const NAME: &'static str = "null";
}

// select the backend type

/// The backend selected at compile-time: Vulkan.
#[cfg(feature = "vulkan")]
pub type Backend = crate::vulkan::Vulkan;

/// The backend selected at compile-time: no graphics API.
#[cfg(not(feature = "vulkan"))]
pub type Backend = Null;
