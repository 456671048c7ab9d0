use prelude_plus::*;

use crate::descriptor::ExtensionDescriptor;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RegistryError {
  /// An extension with this name has already been registered.
  DuplicateName(String),
  /// A descriptor defines the same constant name twice.
  DuplicateConstant { extension: String, constant: String },
  /// No extension with this name is registered.
  NotFound(String),
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DuplicateName(name) => write!(f, "extension {:?} is already registered", name),
      Self::DuplicateConstant { extension, constant } => {
        write!(f, "extension {:?} defines the constant {:?} more than once", extension, constant)
      }
      Self::NotFound(name) => write!(f, "extension {:?} is not registered", name),
    }
  }
}

impl StdError for RegistryError {}

/// An ordered table of [`ExtensionDescriptor`]s, unique by name. Populated
/// once during an initialization phase, read-only afterwards, so sharing it
/// between generator runs needs no locking.
#[derive(Debug, Default)]
pub struct Registry {
  descriptors: Vec<ExtensionDescriptor>,
  index: HashMap<String, usize>,
}

impl Registry {
  pub fn new() -> Self { Self::default() }

  #[inline(always)]
  pub fn len(&self) -> usize { self.descriptors.len() }
  #[inline(always)]
  pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }

  /// Adds a descriptor. A name collision leaves the registry untouched: it
  /// means two template files claim the same extension, which must halt
  /// generation rather than silently shadow one of them.
  pub fn register(&mut self, descriptor: ExtensionDescriptor) -> Result<(), RegistryError> {
    if self.index.contains_key(descriptor.name()) {
      return Err(RegistryError::DuplicateName(descriptor.name().to_owned()));
    }
    debug!(
      "registering {} [{}] with {} constant(s)",
      descriptor.name(),
      descriptor.api(),
      descriptor.constants().len(),
    );
    self.index.insert(descriptor.name().to_owned(), self.descriptors.len());
    self.descriptors.push(descriptor);
    Ok(())
  }

  pub fn lookup(&self, name: &str) -> Result<&ExtensionDescriptor, RegistryError> {
    match self.index.get(name) {
      Some(&i) => Ok(&self.descriptors[i]),
      None => Err(RegistryError::NotFound(name.to_owned())),
    }
  }

  /// All descriptors in registration order. The iterator is restartable,
  /// call `all()` again for another pass.
  pub fn all(&self) -> slice::Iter<'_, ExtensionDescriptor> { self.descriptors.iter() }

  /// Checks that every `{@link ...}` reference in every descriptor's
  /// documentation resolves to a registered extension.
  pub fn validate_links(&self) -> Result<(), RegistryError> {
    for descriptor in &self.descriptors {
      for link in descriptor.doc_links() {
        if !self.index.contains_key(link) {
          return Err(RegistryError::NotFound(link.to_owned()));
        }
      }
    }
    Ok(())
  }
}
