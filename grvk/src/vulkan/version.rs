//! Vulkan API versions.

use grvk_defines::vk;
use std::fmt;

/// A decoded Vulkan API version.
///
/// Versions compare field by field, variant first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ApiVersion {
  /// Variant of the API; `0` for Vulkan itself.
  pub variant: u32,
  /// Major version.
  pub major: u32,
  /// Minor version.
  pub minor: u32,
  /// Patch version.
  pub patch: u32,
}

impl ApiVersion {
  /// Vulkan 1.0.
  pub const V1_0: Self = ApiVersion::new(0, 1, 0, 0);
  /// Vulkan 1.1.
  pub const V1_1: Self = ApiVersion::new(0, 1, 1, 0);
  /// Vulkan 1.2.
  pub const V1_2: Self = ApiVersion::new(0, 1, 2, 0);
  /// Vulkan 1.3.
  pub const V1_3: Self = ApiVersion::new(0, 1, 3, 0);

  /// Create a new version.
  pub const fn new(variant: u32, major: u32, minor: u32, patch: u32) -> Self {
    ApiVersion {
      variant,
      major,
      minor,
      patch,
    }
  }

  /// Encode the version the way Vulkan packs it in a `u32`.
  pub const fn to_raw(self) -> u32 {
    vk::make_api_version(self.variant, self.major, self.minor, self.patch)
  }

  /// Decode a version packed the way Vulkan does.
  pub const fn from_raw(raw: u32) -> Self {
    ApiVersion::new(
      vk::api_version_variant(raw),
      vk::api_version_major(raw),
      vk::api_version_minor(raw),
      vk::api_version_patch(raw),
    )
  }
}

impl From<u32> for ApiVersion {
  fn from(raw: u32) -> Self {
    ApiVersion::from_raw(raw)
  }
}

impl From<ApiVersion> for u32 {
  fn from(version: ApiVersion) -> Self {
    version.to_raw()
  }
}

impl fmt::Display for ApiVersion {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.variant != 0 {
      write!(f, "v{}:", self.variant)?;
    }

    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
  }
}

/// Version of the Vulkan declarations compiled in.
pub fn header_version() -> ApiVersion {
  ApiVersion::from_raw(vk::HEADER_VERSION_COMPLETE)
}
