//! Vulkan backend.
//!
//! This module only exists when the `"vulkan"` feature is enabled. The backend type is [`Vulkan`].

mod error;
#[cfg(feature = "vulkan-linked")]
mod instance;
mod version;

pub use self::error::VulkanError;
#[cfg(feature = "vulkan-linked")]
pub use self::instance::instance_version;
pub use self::version::{header_version, ApiVersion};
pub use grvk_defines::vk;

use crate::backend::{BackendKind, GraphicsBackend};

/// The Vulkan backend.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Vulkan;

impl GraphicsBackend for Vulkan {
  const KIND: BackendKind = BackendKind::Vulkan;
  const NAME: &'static str = "vulkan";
}

/// Check that `found` is at least `required`.
pub fn require_version(found: ApiVersion, required: ApiVersion) -> Result<(), VulkanError> {
  if found >= required {
    Ok(())
  } else {
    Err(VulkanError::UnsupportedVersion { required, found })
  }
}
