use colored::Colorize as _;
use grvk::gate::{GateState, STATE};
use grvk::query::backend_info;
use grvk::BackendKind;

pub fn fixture() {
  let info = backend_info();
  log::info!("{}", info);

  let expected = if cfg!(feature = "vulkan") {
    GateState::GatedOn
  } else {
    GateState::GatedOff
  };

  assert_eq!(STATE, expected);
  assert_eq!(info.gate, STATE);
  assert_eq!(info.kind == BackendKind::Vulkan, STATE.is_on());

  println!("gate: {}", STATE.to_string().green());
}
