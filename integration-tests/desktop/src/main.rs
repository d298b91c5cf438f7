use colored::Colorize as _;
use grvk::gate::{FLAG, LINKED, STATE};
use std::process;

mod gate_state;
#[cfg(feature = "vulkan")]
mod header_version;
#[cfg(feature = "vulkan-linked")]
mod instance_version;

/// A named check, runnable only when the feature it needs is compiled in.
struct Fixture {
  name: &'static str,
  requires: Option<&'static str>,
  run: Option<fn()>,
}

#[cfg(feature = "vulkan")]
const HEADER_VERSION: Option<fn()> = Some(header_version::fixture);
#[cfg(not(feature = "vulkan"))]
const HEADER_VERSION: Option<fn()> = None;

#[cfg(feature = "vulkan-linked")]
const INSTANCE_VERSION: Option<fn()> = Some(instance_version::fixture);
#[cfg(not(feature = "vulkan-linked"))]
const INSTANCE_VERSION: Option<fn()> = None;

const FIXTURES: &[Fixture] = &[
  Fixture {
    name: "gate-state",
    requires: None,
    run: Some(gate_state::fixture),
  },
  Fixture {
    name: "header-version",
    requires: Some("vulkan"),
    run: HEADER_VERSION,
  },
  Fixture {
    name: "instance-version",
    requires: Some("vulkan-linked"),
    run: INSTANCE_VERSION,
  },
];

fn print_fixtures() {
  for fixture in FIXTURES {
    match (fixture.run, fixture.requires) {
      (Some(_), _) => println!("  -> {}", fixture.name.blue()),
      (None, Some(feature)) => println!(
        "  -> {} {}",
        fixture.name.dimmed(),
        format!("(requires the {} feature)", feature).yellow()
      ),
      (None, None) => (),
    }
  }
}

fn main() {
  env_logger::init();

  let fixture_name = match std::env::args().nth(1) {
    Some(name) => name,
    None => {
      println!(
        "gate `{}`: {}{}",
        FLAG,
        STATE.to_string().green(),
        if LINKED { ", loader linked" } else { "" }
      );
      println!("Please provide a fixture name. Possible values");
      print_fixtures();
      return;
    }
  };

  let fixture = match FIXTURES.iter().find(|f| f.name == fixture_name) {
    Some(fixture) => fixture,
    None => {
      eprintln!("{} is not a valid fixture. Possible values", fixture_name.red());
      print_fixtures();
      process::exit(1);
    }
  };

  match (fixture.run, fixture.requires) {
    (Some(run), _) => {
      println!("fixture: {}", fixture.name.green());
      run();
    }

    (None, feature) => {
      eprintln!(
        "{} requires the {} feature, which is not enabled",
        fixture.name.yellow(),
        feature.unwrap_or(FLAG)
      );
      process::exit(2);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixture_names_are_unique() {
    for (i, a) in FIXTURES.iter().enumerate() {
      assert!(FIXTURES[i + 1..].iter().all(|b| b.name != a.name));
    }
  }

  #[test]
  fn availability_follows_features() {
    for fixture in FIXTURES {
      let enabled = match fixture.requires {
        None => true,
        Some("vulkan") => cfg!(feature = "vulkan"),
        Some("vulkan-linked") => cfg!(feature = "vulkan-linked"),
        Some(feature) => panic!("unknown feature {}", feature),
      };

      assert_eq!(fixture.run.is_some(), enabled, "{}", fixture.name);
    }
  }
}
