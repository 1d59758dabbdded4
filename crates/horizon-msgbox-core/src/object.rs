//! Object model for Horizon MsgBox.
//!
//! Every widget owns an [`ObjectBase`] that registers it in a process-wide
//! [`SharedObjectRegistry`]. The registry tracks identity, parent-child
//! ownership and sibling (z-) order. Child order is paint order: index 0 is
//! the back, the last child is the front.
//!
//! # Example
//!
//! ```
//! use horizon_msgbox_core::{init_global_registry, Object, ObjectBase, ObjectId};
//!
//! init_global_registry();
//!
//! struct Panel {
//!     base: ObjectBase,
//! }
//!
//! impl Panel {
//!     fn new() -> Self {
//!         Self { base: ObjectBase::new::<Self>() }
//!     }
//! }
//!
//! impl Object for Panel {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//! ```

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a registered object.
    ///
    /// IDs are never reused within the lifetime of a registry generation:
    /// destroying an object invalidates its ID.
    pub struct ObjectId;
}

/// Errors from object registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is not (or no longer) registered.
    NotFound(ObjectId),
    /// The requested parent ID is not registered.
    ParentNotFound(ObjectId),
    /// Re-parenting would create a cycle in the object tree.
    CycleDetected,
    /// The global registry has not been initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Object {id:?} is not registered"),
            Self::ParentNotFound(id) => write!(f, "Parent object {id:?} is not registered"),
            Self::CycleDetected => write!(f, "Re-parenting would create an ownership cycle"),
            Self::RegistryNotInitialized => {
                write!(f, "Object registry not initialized. Call init_global_registry() first")
            }
        }
    }
}

impl std::error::Error for ObjectError {}

/// A specialized Result type for object operations.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Per-object bookkeeping.
struct ObjectEntry {
    name: String,
    type_id: TypeId,
    type_name: &'static str,
    parent: Option<ObjectId>,
    /// Children in z-order: index 0 is the back, last is the front.
    children: Vec<ObjectId>,
}

/// The object registry: identity, ownership and sibling order.
///
/// Most callers use the process-wide [`SharedObjectRegistry`] via
/// [`global_registry`]; this type is the single-threaded core.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectEntry>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object of type `T` and return its ID.
    pub fn register<T: 'static>(&mut self) -> ObjectId {
        let id = self.objects.insert(ObjectEntry {
            name: String::new(),
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            parent: None,
            children: Vec::new(),
        });
        tracing::trace!(target: targets::OBJECT, ?id, ty = type_name::<T>(), "object registered");
        id
    }

    /// Destroy an object and its whole subtree.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let entry = self.objects.remove(id).ok_or(ObjectError::NotFound(id))?;

        if let Some(parent) = entry.parent {
            if let Some(parent_entry) = self.objects.get_mut(parent) {
                parent_entry.children.retain(|&c| c != id);
            }
        }

        // Children are owned: destroy the subtree depth-first.
        for child in entry.children {
            let _ = self.destroy(child);
        }

        tracing::trace!(target: targets::OBJECT, ?id, "object destroyed");
        Ok(())
    }

    /// Check whether an ID is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Re-parent an object. A new child is appended at the front of the
    /// sibling order.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::NotFound(id));
        }
        if let Some(parent) = new_parent {
            if !self.objects.contains_key(parent) {
                return Err(ObjectError::ParentNotFound(parent));
            }
            // Walk up from the new parent; finding `id` means a cycle.
            let mut current = Some(parent);
            while let Some(ancestor) = current {
                if ancestor == id {
                    return Err(ObjectError::CycleDetected);
                }
                current = self.objects[ancestor].parent;
            }
        }

        let old_parent = self.objects[id].parent;
        if old_parent == new_parent {
            return Ok(());
        }

        if let Some(old) = old_parent {
            if let Some(entry) = self.objects.get_mut(old) {
                entry.children.retain(|&c| c != id);
            }
        }
        if let Some(parent) = new_parent {
            self.objects[parent].children.push(id);
        }
        self.objects[id].parent = new_parent;
        Ok(())
    }

    /// Get an object's parent.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|e| e.parent)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's children in z-order (back to front).
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|e| e.children.as_slice())
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|e| e.name.as_str())
            .ok_or(ObjectError::NotFound(id))
    }

    /// Set an object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.objects
            .get_mut(id)
            .map(|e| e.name = name)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's type ID.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        self.objects
            .get(id)
            .map(|e| e.type_id)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's type name (for diagnostics).
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|e| e.type_name)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get this object's index among its siblings, if it has a parent.
    pub fn sibling_index(&self, id: ObjectId) -> ObjectResult<Option<usize>> {
        let entry = self.objects.get(id).ok_or(ObjectError::NotFound(id))?;
        let Some(parent) = entry.parent else {
            return Ok(None);
        };
        Ok(self.objects[parent].children.iter().position(|&c| c == id))
    }

    /// Raise an object to the front of its siblings.
    pub fn raise(&mut self, id: ObjectId) -> ObjectResult<()> {
        let entry = self.objects.get(id).ok_or(ObjectError::NotFound(id))?;
        if let Some(parent) = entry.parent {
            let children = &mut self.objects[parent].children;
            children.retain(|&c| c != id);
            children.push(id);
        }
        Ok(())
    }

    /// Lower an object to the back of its siblings.
    pub fn lower(&mut self, id: ObjectId) -> ObjectResult<()> {
        let entry = self.objects.get(id).ok_or(ObjectError::NotFound(id))?;
        if let Some(parent) = entry.parent {
            let children = &mut self.objects[parent].children;
            children.retain(|&c| c != id);
            children.insert(0, id);
        }
        Ok(())
    }

    /// Total number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around [`ObjectRegistry`].
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object of type `T`.
    pub fn register<T: 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Destroy an object and its subtree.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check whether an ID is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Re-parent an object.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get an object's parent.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get an object's children in z-order (back to front).
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(str::to_owned)
    }

    /// Set an object's name.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get an object's type name (for diagnostics).
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Get this object's index among its siblings.
    pub fn sibling_index(&self, id: ObjectId) -> ObjectResult<Option<usize>> {
        self.inner.read().sibling_index(id)
    }

    /// Raise an object to the front of its siblings.
    pub fn raise(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().raise(id)
    }

    /// Lower an object to the back of its siblings.
    pub fn lower(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().lower(id)
    }

    /// Total number of registered objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<SharedObjectRegistry> = OnceLock::new();

/// Initialize the process-wide object registry.
///
/// Idempotent: calling more than once keeps the first registry.
pub fn init_global_registry() {
    let _ = GLOBAL_REGISTRY.get_or_init(SharedObjectRegistry::new);
}

/// Get the process-wide object registry.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// The base trait for all registered objects.
pub trait Object {
    /// Get the object's unique ID.
    fn object_id(&self) -> ObjectId;
}

/// Helper for implementing [`Object`].
///
/// Registers the owning object on construction and unregisters it (with its
/// subtree) on drop.
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new `ObjectBase`, registering the object in the global
    /// registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("Object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get the object's ID.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object ID.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get child object IDs in z-order (back to front).
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Get this object's index among its siblings.
    pub fn sibling_index(&self) -> Option<usize> {
        global_registry()
            .and_then(|r| r.sibling_index(self.id))
            .ok()
            .flatten()
    }

    /// Raise this object to the front of its siblings.
    pub fn raise(&self) -> ObjectResult<()> {
        global_registry()?.raise(self.id)
    }

    /// Lower this object to the back of its siblings.
    pub fn lower(&self) -> ObjectResult<()> {
        global_registry()?.lower(self.id)
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

static_assertions::assert_impl_all!(SharedObjectRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        base: ObjectBase,
    }

    impl Dummy {
        fn new() -> Self {
            Self {
                base: ObjectBase::new::<Self>(),
            }
        }
    }

    impl Object for Dummy {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_register_and_contains() {
        setup();
        let obj = Dummy::new();
        let registry = global_registry().unwrap();
        assert!(registry.contains(obj.object_id()));
    }

    #[test]
    fn test_destroy_on_drop() {
        setup();
        let registry = global_registry().unwrap();
        let id = {
            let obj = Dummy::new();
            obj.object_id()
        };
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_parent_child() {
        setup();
        let parent = Dummy::new();
        let child = Dummy::new();
        child.base.set_parent(Some(parent.object_id())).unwrap();

        assert_eq!(child.base.parent(), Some(parent.object_id()));
        assert_eq!(parent.base.children(), vec![child.object_id()]);
    }

    #[test]
    fn test_cycle_rejected() {
        setup();
        let a = Dummy::new();
        let b = Dummy::new();
        b.base.set_parent(Some(a.object_id())).unwrap();

        let result = a.base.set_parent(Some(b.object_id()));
        assert_eq!(result, Err(ObjectError::CycleDetected));
    }

    #[test]
    fn test_z_order_raise_lower() {
        setup();
        let parent = Dummy::new();
        let first = Dummy::new();
        let second = Dummy::new();
        let third = Dummy::new();
        for child in [&first, &second, &third] {
            child.base.set_parent(Some(parent.object_id())).unwrap();
        }

        // New children append at the front.
        assert_eq!(
            parent.base.children(),
            vec![first.object_id(), second.object_id(), third.object_id()]
        );

        third.base.lower().unwrap();
        assert_eq!(
            parent.base.children(),
            vec![third.object_id(), first.object_id(), second.object_id()]
        );
        assert_eq!(third.base.sibling_index(), Some(0));

        third.base.raise().unwrap();
        assert_eq!(third.base.sibling_index(), Some(2));
    }

    #[test]
    fn test_destroy_subtree() {
        setup();
        let registry = global_registry().unwrap();
        let parent = Dummy::new();
        let child = Dummy::new();
        child.base.set_parent(Some(parent.object_id())).unwrap();

        registry.destroy(parent.object_id()).unwrap();
        assert!(!registry.contains(child.object_id()));
        // The child's own Drop is a no-op for an already-destroyed ID.
    }

    #[test]
    fn test_names() {
        setup();
        let obj = Dummy::new();
        obj.base.set_name("toggle");
        assert_eq!(obj.base.name(), "toggle");
    }
}
