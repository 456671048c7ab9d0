//! The built-in extension descriptors, one module per extension family.

mod ext_framebuffer_srgb;

use crate::registry::{Registry, RegistryError};

/// Builds the registry holding every built-in descriptor. This is the value
/// a binding generator iterates over.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
  let mut registry = Registry::new();
  ext_framebuffer_srgb::register(&mut registry)?;
  registry.validate_links()?;
  Ok(registry)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::descriptor::Api;

  #[test]
  fn gl_descriptor_constants() {
    let registry = builtin_registry().unwrap();
    let descriptor = registry.lookup("EXT_framebuffer_sRGB").unwrap();
    assert_eq!(descriptor.api(), Api::Gl);
    let constants: Vec<(&str, u32)> =
      descriptor.constants().iter().map(|c| (c.name.as_str(), c.value)).collect();
    assert_eq!(
      constants,
      [("FRAMEBUFFER_SRGB_EXT", 0x8DB9), ("FRAMEBUFFER_SRGB_CAPABLE_EXT", 0x8DBA)]
    );
  }

  #[test]
  fn glx_descriptor_constants() {
    let registry = builtin_registry().unwrap();
    let descriptor = registry.lookup("GLX_EXT_framebuffer_sRGB").unwrap();
    assert_eq!(descriptor.api(), Api::Glx);
    let constants: Vec<(&str, u32)> =
      descriptor.constants().iter().map(|c| (c.name.as_str(), c.value)).collect();
    assert_eq!(constants, [("FRAMEBUFFER_SRGB_CAPABLE_EXT", 0x20B2)]);
  }

  #[test]
  fn wgl_descriptor_constants() {
    let registry = builtin_registry().unwrap();
    let descriptor = registry.lookup("WGL_EXT_framebuffer_sRGB").unwrap();
    assert_eq!(descriptor.api(), Api::Wgl);
    let constants: Vec<(&str, u32)> =
      descriptor.constants().iter().map(|c| (c.name.as_str(), c.value)).collect();
    assert_eq!(constants, [("FRAMEBUFFER_SRGB_CAPABLE_EXT", 0x20A9)]);
  }

  #[test]
  fn same_constant_name_keeps_a_distinct_value_per_family() {
    let registry = builtin_registry().unwrap();
    let families =
      ["EXT_framebuffer_sRGB", "GLX_EXT_framebuffer_sRGB", "WGL_EXT_framebuffer_sRGB"];
    let values: Vec<u32> = families
      .iter()
      .map(|name| {
        registry.lookup(name).unwrap().constant("FRAMEBUFFER_SRGB_CAPABLE_EXT").unwrap().value
      })
      .collect();
    assert_eq!(values, [0x8DBA, 0x20B2, 0x20A9]);
  }

  #[test]
  fn platform_variants_link_back_to_the_core_extension() {
    let registry = builtin_registry().unwrap();
    for name in &["GLX_EXT_framebuffer_sRGB", "WGL_EXT_framebuffer_sRGB"] {
      let links: Vec<&str> = registry.lookup(name).unwrap().doc_links().collect();
      assert_eq!(links, ["EXT_framebuffer_sRGB"]);
    }
    assert!(registry.validate_links().is_ok());
  }

  #[test]
  fn registration_order_is_stable() {
    let registry = builtin_registry().unwrap();
    let names: Vec<&str> = registry.all().map(|d| d.name()).collect();
    assert_eq!(
      names,
      ["EXT_framebuffer_sRGB", "GLX_EXT_framebuffer_sRGB", "WGL_EXT_framebuffer_sRGB"]
    );
  }
}
