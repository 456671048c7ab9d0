//! Dumps the built-in extension registry, as a plain-text listing or (with
//! `--json`) in a machine-readable form. Useful for eyeballing descriptor
//! data before pointing a binding generator at it.

use glext_registry::{builtin_registry, Registry};
use prelude_plus::*;

fn main() -> AnyResult<()> {
  env_logger::init();

  let mut as_json = false;
  for arg in env::args().skip(1) {
    match arg.as_str() {
      "--json" => as_json = true,
      _ => bail!("unknown argument: {:?} (the only supported one is --json)", arg),
    }
  }

  let registry = builtin_registry().context("the built-in registry failed to load")?;
  info!("loaded {} extension descriptor(s)", registry.len());

  if as_json {
    dump_json(&registry)
  } else {
    dump_text(&registry)
  }
}

fn dump_json(registry: &Registry) -> AnyResult<()> {
  let descriptors: Vec<_> = registry.all().collect();
  let stdout = io::stdout();
  serde_json::to_writer_pretty(stdout.lock(), &descriptors)?;
  println!();
  Ok(())
}

fn dump_text(registry: &Registry) -> AnyResult<()> {
  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  for descriptor in registry.all() {
    writeln!(out, "{} [{}]", descriptor.name(), descriptor.api())?;
    writeln!(out, "  spec: {}", descriptor.registry_url())?;
    for constant in descriptor.constants() {
      writeln!(out, "  {} = 0x{:04X}", constant.name, constant.value)?;
    }
    writeln!(out)?;
  }
  out.flush()?;
  Ok(())
}
