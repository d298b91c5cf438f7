use colored::Colorize as _;
use grvk::vulkan::{instance_version, ApiVersion};

pub fn fixture() {
  match instance_version() {
    Ok(version) => {
      log::info!("Vulkan instance version: {}", version);
      assert!(version >= ApiVersion::V1_0);
      println!("instance: {}", version.to_string().green());
    }

    Err(e) => {
      eprintln!("{}", e.to_string().red());
      std::process::exit(1);
    }
  }
}
