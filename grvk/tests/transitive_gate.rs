#![cfg(feature = "vulkan")]

use std::any::TypeId;

fn same_type<A, B>() -> bool
where
  A: 'static,
  B: 'static,
{
  TypeId::of::<A>() == TypeId::of::<B>()
}

#[test]
fn declarations_through_every_path() {
  // directly, through the gate re-export and through the backend module
  assert!(same_type::<grvk_defines::vk::Instance, grvk::gate::vk::Instance>());
  assert!(same_type::<grvk_defines::vk::Instance, grvk::vulkan::vk::Instance>());
  assert!(same_type::<grvk::gate::ash::vk::PhysicalDevice, grvk::vulkan::vk::PhysicalDevice>());
}

#[test]
fn gate_state_is_shared() {
  assert_eq!(grvk::gate::STATE, grvk_defines::STATE);
  assert!(grvk::gate::STATE.is_on());
}

#[test]
fn backend_is_vulkan() {
  use grvk::GraphicsBackend as _;

  assert!(same_type::<grvk::Backend, grvk::vulkan::Vulkan>());
  assert_eq!(grvk::Backend::NAME, "vulkan");
}

#[test]
fn header_version_reported() {
  let info = grvk::query::backend_info();

  assert_eq!(
    info.header_version,
    Some(grvk::vulkan::header_version().to_string())
  );
}
