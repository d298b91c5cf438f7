//! Query API, giving information about the backend compiled in.

use crate::backend::{Backend, BackendKind, GraphicsBackend};
use grvk_defines::GateState;
use log::debug;
use std::fmt;

/// Information about the selected backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackendInfo {
  /// Kind of the selected backend.
  pub kind: BackendKind,
  /// Name of the selected backend.
  pub name: &'static str,
  /// State of the Vulkan capability gate.
  pub gate: GateState,
  /// Version of the Vulkan declarations, if compiled in.
  pub header_version: Option<String>,
}

impl fmt::Display for BackendInfo {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} backend ({})", self.name, self.gate)?;

    if let Some(ref version) = self.header_version {
      write!(f, ", headers {}", version)?;
    }

    Ok(())
  }
}

/// Information about the backend selected at compile-time.
pub fn backend_info() -> BackendInfo {
  let info = BackendInfo {
    kind: Backend::KIND,
    name: Backend::NAME,
    gate: grvk_defines::STATE,
    header_version: header_version(),
  };

  debug!("backend info: {}", info);
  info
}

#[cfg(feature = "vulkan")]
fn header_version() -> Option<String> {
  Some(crate::vulkan::header_version().to_string())
}

#[cfg(not(feature = "vulkan"))]
fn header_version() -> Option<String> {
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn info_is_consistent_with_gate() {
    let info = backend_info();

    assert_eq!(info.header_version.is_some(), cfg!(feature = "vulkan"));
    assert_eq!(info.kind == BackendKind::Vulkan, cfg!(feature = "vulkan"));

    if info.kind == BackendKind::Vulkan {
      assert!(info.gate.is_on());
    }
  }

  #[test]
  fn display_without_headers() {
    let info = BackendInfo {
      kind: BackendKind::Null,
      name: "null",
      gate: GateState::GatedOff,
      header_version: None,
    };

    assert_eq!(info.to_string(), "null backend (gated-off)");
  }

  #[test]
  fn display_with_headers() {
    let info = BackendInfo {
      kind: BackendKind::Vulkan,
      name: "vulkan",
      gate: GateState::GatedOn,
      header_version: Some("1.3.281".to_owned()),
    };

    assert_eq!(info.to_string(), "vulkan backend (gated-on), headers 1.3.281");
  }
}
