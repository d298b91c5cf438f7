use colored::Colorize as _;
use grvk::vulkan::{header_version, require_version, vk, ApiVersion};

pub fn fixture() {
  let version = header_version();
  log::info!("compiled against Vulkan headers {}", version);

  assert_eq!(version.patch, vk::HEADER_VERSION);
  require_version(version, ApiVersion::V1_3).unwrap();

  println!("headers: {}", version.to_string().green());
}
