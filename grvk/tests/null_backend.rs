#![cfg(not(feature = "vulkan"))]

use grvk::{BackendKind, GraphicsBackend as _};

#[test]
fn null_backend_selected() {
  assert_eq!(grvk::Backend::KIND, BackendKind::Null);
  assert_eq!(grvk::Backend::default(), grvk::Null);
}

#[test]
fn no_headers_reported() {
  let info = grvk::query::backend_info();

  assert_eq!(info.kind, BackendKind::Null);
  assert_eq!(info.header_version, None);
}
