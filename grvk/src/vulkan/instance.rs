//! Instance-level queries, requiring the Vulkan loader to be linked.

use crate::vulkan::{ApiVersion, VulkanError};
use grvk_defines::ash::Entry;
use log::debug;

/// Version of the Vulkan instance-level API supported by the loader.
///
/// 1.0 loaders do not export `vkEnumerateInstanceVersion`; they report 1.0.0.
pub fn instance_version() -> Result<ApiVersion, VulkanError> {
  let entry = Entry::linked();
  let raw = unsafe { entry.try_enumerate_instance_version() }?;
  let version = raw.map_or(ApiVersion::V1_0, ApiVersion::from_raw);

  debug!("Vulkan instance version: {}", version);
  Ok(version)
}
