//! Type-keyed factory registry with lifecycle scopes.
//!
//! Each registry maps a type to one factory. Lookups that miss locally walk
//! the parent chain one level at a time, so a child registry sees everything
//! its ancestors bind while its own bindings shadow theirs.
//!
//! ```text
//! root        [Config: Cached]  [Clock: Transient]
//!   └─ child  [Clock: Cached]                      resolve::<Config>() -> root's cached Config
//!                                                  resolve::<Clock>()  -> child's cached Clock
//! ```
//!
//! Registries borrow their parent, so a parent always outlives its children
//! and a child never controls its parent's lifetime.

use std::any::{Any, TypeId, type_name};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, trace};

/// Lifecycle policy for a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Invoke the factory on first resolution, then hand out the same value forever.
    Cached,
    /// Invoke the factory on every resolution.
    Transient,
}

impl Scope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Cached => "cached",
            Scope::Transient => "transient",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("type {type_name} is already registered")]
    AlreadyBound { type_name: &'static str },
    #[error("type {type_name} is not registered")]
    NotBound { type_name: &'static str },
    /// A stored value disagreed with its key.
    ///
    /// `bind` keys every factory by the type it produces, so this cannot occur
    /// through the public API. It exists so `resolve` has no panic path.
    #[error("binding for {type_name} produced a value of a different type")]
    TypeMismatch { type_name: &'static str },
}

type Factory = Box<dyn Fn() -> Rc<dyn Any>>;

struct Binding {
    type_name: &'static str,
    scope: Scope,
    factory: Factory,
    cached: OnceCell<Rc<dyn Any>>,
}

impl Binding {
    fn instance(&self) -> Rc<dyn Any> {
        match self.scope {
            Scope::Transient => (self.factory)(),
            Scope::Cached => {
                if let Some(value) = self.cached.get() {
                    trace!(type_name = self.type_name, "cache hit");
                    return Rc::clone(value);
                }
                // Run the factory outside the cell so a factory that resolves
                // other types from this registry cannot trip the cell's guard.
                let value = (self.factory)();
                debug!(type_name = self.type_name, "cached binding filled");
                Rc::clone(self.cached.get_or_init(|| value))
            }
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("type_name", &self.type_name)
            .field("scope", &self.scope)
            .field("cached", &self.cached.get().is_some())
            .finish_non_exhaustive()
    }
}

/// A map from types to factories, optionally delegating to a parent.
///
/// # Invariants
///
/// - A type bound in this instance can never be rebound in this instance
/// - Bindings are never removed
/// - A `Cached` binding invokes its factory at most once per successful fill
///
/// Not thread-safe: values are shared through [`Rc`].
#[derive(Default)]
pub struct TypeRegistry<'p> {
    bindings: HashMap<TypeId, Binding>,
    parent: Option<&'p TypeRegistry<'p>>,
}

impl<'p> TypeRegistry<'p> {
    /// A root registry with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that falls back to `parent` on lookup misses.
    #[must_use]
    pub fn with_parent(parent: &'p TypeRegistry<'p>) -> Self {
        Self {
            bindings: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// A new registry whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> TypeRegistry<'_> {
        TypeRegistry::with_parent(self)
    }

    /// Bind `T` to `factory` under `scope`.
    ///
    /// Fails with [`RegistryError::AlreadyBound`] if `T` is already bound in
    /// *this* registry. Ancestor bindings never block a local one.
    pub fn bind<T, F>(&mut self, scope: Scope, factory: F) -> Result<(), RegistryError>
    where
        T: 'static,
        F: Fn() -> T + 'static,
    {
        let type_name = type_name::<T>();
        match self.bindings.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyBound { type_name }),
            Entry::Vacant(slot) => {
                slot.insert(Binding {
                    type_name,
                    scope,
                    factory: Box::new(move || Rc::new(factory()) as Rc<dyn Any>),
                    cached: OnceCell::new(),
                });
                debug!(type_name, %scope, "type bound");
                Ok(())
            }
        }
    }

    /// Resolve `T` from this registry or the nearest ancestor that binds it.
    ///
    /// `Cached` bindings return clones of one shared [`Rc`]; `Transient`
    /// bindings return a fresh value each call.
    pub fn resolve<T: 'static>(&self) -> Result<Rc<T>, RegistryError> {
        let binding = self
            .lookup(TypeId::of::<T>())
            .ok_or(RegistryError::NotBound {
                type_name: type_name::<T>(),
            })?;
        binding
            .instance()
            .downcast::<T>()
            .map_err(|_| RegistryError::TypeMismatch {
                type_name: binding.type_name,
            })
    }

    /// Whether `T` is bound here or in any ancestor.
    #[must_use]
    pub fn is_bound<T: 'static>(&self) -> bool {
        self.lookup(TypeId::of::<T>()).is_some()
    }

    #[must_use]
    pub fn is_bound_locally<T: 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    #[must_use]
    pub fn parent(&self) -> Option<&'p TypeRegistry<'p>> {
        self.parent
    }

    /// Number of ancestors above this registry. Zero for a root.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent;
        while let Some(registry) = current {
            depth += 1;
            current = registry.parent;
        }
        depth
    }

    /// Number of local bindings. Ancestor bindings are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn lookup(&self, key: TypeId) -> Option<&Binding> {
        let mut registry = self;
        let mut hops = 0usize;
        loop {
            if let Some(binding) = registry.bindings.get(&key) {
                if hops > 0 {
                    trace!(
                        type_name = binding.type_name,
                        hops,
                        "resolved from ancestor"
                    );
                }
                return Some(binding);
            }
            registry = registry.parent?;
            hops += 1;
        }
    }
}

impl fmt::Debug for TypeRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("bindings", &self.bindings.values().collect::<Vec<_>>())
            .field("depth", &self.depth())
            .finish()
    }
}
