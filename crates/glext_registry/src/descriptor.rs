use prelude_plus::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registry::RegistryError;

/// The API family an extension's enumerants belong to. The same constant
/// name may carry a different value in each family (e.g.
/// `FRAMEBUFFER_SRGB_CAPABLE_EXT` is `0x8DBA` in core GL but `0x20B2` in
/// GLX), so the family tag is part of a descriptor's identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Api {
  Gl,
  Glx,
  Wgl,
}

impl Api {
  pub const VARIANTS: &'static [Self] = &[Self::Gl, Self::Glx, Self::Wgl];

  pub const fn name(self) -> &'static str {
    match self {
      Self::Gl => "GL",
      Self::Glx => "GLX",
      Self::Wgl => "WGL",
    }
  }
}

impl fmt::Display for Api {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// A single enumerant. The name string and the value are fixed by the
/// Khronos registries and must be carried through bit-exact.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ConstantDef {
  pub name: String,
  pub value: u32,
  pub doc: String,
}

/// An extension's metadata: registry name, API family, documentation and
/// the ordered list of enumerants it defines. Constructed once through
/// [`DescriptorBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtensionDescriptor {
  name: String,
  api: Api,
  doc: String,
  constants: Vec<ConstantDef>,
}

impl ExtensionDescriptor {
  pub fn builder(api: Api, name: impl Into<String>) -> DescriptorBuilder {
    DescriptorBuilder { name: name.into(), api, doc: String::new(), constants: Vec::new() }
  }

  #[inline(always)]
  pub fn name(&self) -> &str { &self.name }
  #[inline(always)]
  pub fn api(&self) -> Api { self.api }
  #[inline(always)]
  pub fn doc(&self) -> &str { &self.doc }
  #[inline(always)]
  pub fn constants(&self) -> &[ConstantDef] { &self.constants }

  pub fn constant(&self, name: &str) -> Option<&ConstantDef> {
    self.constants.iter().find(|c| c.name == name)
  }

  /// The extension's name without the API-family prefix GLX and WGL
  /// extension names carry, e.g. `EXT_framebuffer_sRGB` for
  /// `WGL_EXT_framebuffer_sRGB`.
  pub fn unprefixed_name(&self) -> &str {
    match self.api {
      Api::Gl => &self.name,
      Api::Glx => self.name.strip_prefix("GLX_").unwrap_or(&self.name),
      Api::Wgl => self.name.strip_prefix("WGL_").unwrap_or(&self.name),
    }
  }

  /// The vendor tag the name starts with (`EXT`, `ARB`, `NV`, ...).
  pub fn vendor(&self) -> &str {
    let name = self.unprefixed_name();
    name.split('_').next().unwrap_or(name)
  }

  /// URL of the extension's specification in the Khronos registry.
  pub fn registry_url(&self) -> String {
    format!(
      "https://registry.khronos.org/OpenGL/extensions/{}/{}.txt",
      self.vendor(),
      self.unprefixed_name(),
    )
  }

  /// Names of other extensions referenced from this descriptor's
  /// documentation (the descriptor's own text and every constant's text).
  /// These are weak references, resolved by name against a
  /// [`Registry`](crate::registry::Registry), never owned.
  pub fn doc_links(&self) -> impl Iterator<Item = &str> {
    iter::once(self.doc.as_str())
      .chain(self.constants.iter().map(|c| c.doc.as_str()))
      .flat_map(doc_links_in)
  }
}

/// Extracts the targets of `{@link Name}` markers embedded in doc text.
pub fn doc_links_in(text: &str) -> impl Iterator<Item = &str> {
  const OPEN: &str = "{@link ";
  let mut rest = text;
  iter::from_fn(move || {
    let start = rest.find(OPEN)?;
    let after = &rest[start + OPEN.len()..];
    let end = after.find('}')?;
    let name = after[..end].trim();
    rest = &after[end + 1..];
    Some(name)
  })
}

/// Builds an [`ExtensionDescriptor`]: append documentation and constants,
/// finalize once with [`build`](Self::build).
#[derive(Debug)]
pub struct DescriptorBuilder {
  name: String,
  api: Api,
  doc: String,
  constants: Vec<ConstantDef>,
}

impl DescriptorBuilder {
  pub fn doc(mut self, text: impl Into<String>) -> Self {
    self.doc = text.into();
    self
  }

  pub fn constant(self, doc: &str, name: &str, value: u32) -> Self {
    self.constants(doc, &[(name, value)])
  }

  /// Appends a group of constants sharing one documentation block, the way
  /// extension specifications list them ("Accepted by the <pname> parameter
  /// of ...").
  pub fn constants(mut self, doc: &str, defs: &[(&str, u32)]) -> Self {
    for &(name, value) in defs {
      self.constants.push(ConstantDef {
        name: name.to_owned(),
        value,
        doc: doc.to_owned(),
      });
    }
    self
  }

  /// Finalizes the descriptor. Constant names must be unique within one
  /// descriptor, a repeated name is a data-authoring mistake.
  pub fn build(self) -> Result<ExtensionDescriptor, RegistryError> {
    {
      let mut seen: HashSet<&str> = HashSet::with_capacity(self.constants.len());
      for constant in &self.constants {
        if !seen.insert(&constant.name) {
          return Err(RegistryError::DuplicateConstant {
            extension: self.name.clone(),
            constant: constant.name.clone(),
          });
        }
      }
    }
    Ok(ExtensionDescriptor {
      name: self.name,
      api: self.api,
      doc: self.doc,
      constants: self.constants,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_preserves_declaration_order() {
    let descriptor = ExtensionDescriptor::builder(Api::Gl, "EXT_test")
      .constant("first", "ALPHA_EXT", 0x0001)
      .constants("rest", &[("BRAVO_EXT", 0x0002), ("CHARLIE_EXT", 0x0003)])
      .build()
      .unwrap();
    let names: Vec<&str> = descriptor.constants().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["ALPHA_EXT", "BRAVO_EXT", "CHARLIE_EXT"]);
    assert_eq!(descriptor.constants()[1].doc, "rest");
    assert_eq!(descriptor.constants()[2].doc, "rest");
  }

  #[test]
  fn builder_rejects_duplicate_constant_names() {
    let result = ExtensionDescriptor::builder(Api::Gl, "EXT_test")
      .constant("", "ALPHA_EXT", 0x0001)
      .constant("", "ALPHA_EXT", 0x0002)
      .build();
    assert_eq!(
      result.unwrap_err(),
      RegistryError::DuplicateConstant {
        extension: "EXT_test".to_owned(),
        constant: "ALPHA_EXT".to_owned(),
      }
    );
  }

  #[test]
  fn doc_link_extraction() {
    let links: Vec<&str> =
      doc_links_in("GLX functionality for {@link EXT_framebuffer_sRGB}. See also {@link EXT_srgb}.")
        .collect();
    assert_eq!(links, ["EXT_framebuffer_sRGB", "EXT_srgb"]);

    assert_eq!(doc_links_in("no links here").count(), 0);
    // An unterminated marker is ignored rather than scanned to the end.
    assert_eq!(doc_links_in("{@link EXT_unclosed").count(), 0);
  }

  #[test]
  fn vendor_and_registry_url() {
    let gl = ExtensionDescriptor::builder(Api::Gl, "EXT_framebuffer_sRGB").build().unwrap();
    assert_eq!(gl.vendor(), "EXT");
    assert_eq!(
      gl.registry_url(),
      "https://registry.khronos.org/OpenGL/extensions/EXT/EXT_framebuffer_sRGB.txt"
    );

    let wgl = ExtensionDescriptor::builder(Api::Wgl, "WGL_EXT_framebuffer_sRGB").build().unwrap();
    assert_eq!(wgl.unprefixed_name(), "EXT_framebuffer_sRGB");
    assert_eq!(wgl.vendor(), "EXT");
    assert_eq!(
      wgl.registry_url(),
      "https://registry.khronos.org/OpenGL/extensions/EXT/EXT_framebuffer_sRGB.txt"
    );
  }
}
