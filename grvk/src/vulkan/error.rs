use crate::vulkan::ApiVersion;
use grvk_defines::vk;
use std::error;
use std::fmt;

/// Errors of the Vulkan backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VulkanError {
  /// A Vulkan command returned an error code.
  Vk(vk::Result),
  /// The available Vulkan version is older than the one required.
  UnsupportedVersion {
    /// Minimum version required.
    required: ApiVersion,
    /// Version available.
    found: ApiVersion,
  },
}

impl fmt::Display for VulkanError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      VulkanError::Vk(ref e) => write!(f, "Vulkan error: {}", e),
      VulkanError::UnsupportedVersion {
        ref required,
        ref found,
      } => write!(
        f,
        "unsupported Vulkan version: {} required, {} found",
        required, found
      ),
    }
  }
}

impl error::Error for VulkanError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      VulkanError::Vk(e) => Some(e),
      _ => None,
    }
  }
}

impl From<vk::Result> for VulkanError {
  fn from(e: vk::Result) -> Self {
    VulkanError::Vk(e)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error as _;

  #[test]
  fn from_vk_result() {
    let err = VulkanError::from(vk::Result::ERROR_INITIALIZATION_FAILED);

    assert_eq!(err, VulkanError::Vk(vk::Result::ERROR_INITIALIZATION_FAILED));
    assert!(err.source().is_some());
  }

  #[test]
  fn unsupported_version_display() {
    let err = VulkanError::UnsupportedVersion {
      required: ApiVersion::V1_2,
      found: ApiVersion::V1_0,
    };

    assert_eq!(
      err.to_string(),
      "unsupported Vulkan version: 1.2.0 required, 1.0.0 found"
    );
    assert!(err.source().is_none());
  }
}
