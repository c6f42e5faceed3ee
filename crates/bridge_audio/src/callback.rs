//! Exporting a module's update routine as a host-callable function pointer.
//!
//! The exported value is a fixed-signature trampoline plus a context pointer.
//! The context points at an [`UpdateSlot`] that holds the bound module; the
//! trampoline recovers the slot from the context and runs the module's
//! [`on_update`]. There is one trampoline for every module type.
//!
//! [`ModuleInstance`] owns the module and its slot. The exported callback is
//! valid exactly as long as the instance is alive.
//!
//! [`on_update`]: crate::module::Tickable::on_update

use std::ffi::c_void;
use std::fmt;
use std::ptr::{self, NonNull};

use crate::module::{Module, ModuleId};

/// C-ABI signature of an exported update routine.
pub type UpdateFn = unsafe extern "C" fn(context: *mut c_void);

/// A host-callable update routine bound to one module instance.
///
/// A null callback means the module does no per-tick work; the host must
/// skip it rather than call through it.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ExportedCallback {
    pub function: Option<UpdateFn>,
    pub context: *mut c_void,
}

impl ExportedCallback {
    pub const NULL: Self = Self {
        function: None,
        context: ptr::null_mut(),
    };

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.function.is_none()
    }

    /// Call the routine once. Does nothing for a null callback.
    ///
    /// # Safety
    ///
    /// The owning [`ModuleInstance`] must still be alive, and no other
    /// reference into its module may be in use for the duration of the call.
    pub unsafe fn invoke(&self) {
        if let Some(function) = self.function {
            // SAFETY: upheld by the caller.
            unsafe { function(self.context) }
        }
    }
}

impl fmt::Debug for ExportedCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportedCallback")
            .field("function", &self.function.map(|function| function as *const ()))
            .field("context", &self.context)
            .finish()
    }
}

/// The receiver an exported callback is permanently bound to.
///
/// Holds a copy of the instance's raw module pointer. No reference into the
/// module outlives a single call.
pub struct UpdateSlot {
    module: *mut dyn Module,
}

unsafe extern "C" fn invoke_update(context: *mut c_void) {
    // SAFETY: `context` was produced by `ModuleInstance::new` from a boxed
    // `UpdateSlot` that lives until the instance is dropped.
    let module = unsafe { (*context.cast::<UpdateSlot>()).module };
    // SAFETY: the module is alive while the slot is, and the caller holds
    // the instance exclusively for the duration of the call.
    if let Some(target) = unsafe { (*module).as_tickable() } {
        target.on_update();
    }
}

/// A constructed module together with its exported callback.
pub struct ModuleInstance {
    id: ModuleId,
    module: *mut dyn Module,
    slot: NonNull<UpdateSlot>,
    callback: ExportedCallback,
}

// SAFETY: the module is `Send` and the instance has sole ownership of it and
// of the slot; the raw pointers never escape except through the callback,
// whose use is bounded by the instance's lifetime.
unsafe impl Send for ModuleInstance {}

impl ModuleInstance {
    /// Take ownership of `module` and export its update routine.
    #[must_use]
    pub fn new(id: ModuleId, module: Box<dyn Module>) -> Self {
        let module = Box::into_raw(module);

        // SAFETY: just released from its box, nothing else refers to it.
        let tickable = unsafe { (*module).as_tickable().is_some() };

        let slot = NonNull::from(Box::leak(Box::new(UpdateSlot { module })));

        let callback = if tickable {
            ExportedCallback {
                function: Some(invoke_update as UpdateFn),
                context: slot.as_ptr().cast(),
            }
        } else {
            ExportedCallback::NULL
        };

        Self {
            id,
            module,
            slot,
            callback,
        }
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// The exported update routine; null when the module has none.
    #[must_use]
    pub fn callback(&self) -> ExportedCallback {
        self.callback
    }

    #[must_use]
    pub fn module(&self) -> &dyn Module {
        // SAFETY: owned by `self` until drop.
        unsafe { &*self.module }
    }

    pub fn module_mut(&mut self) -> &mut dyn Module {
        // SAFETY: owned by `self` until drop; `&mut self` excludes a
        // concurrent callback through the same instance.
        unsafe { &mut *self.module }
    }

    /// Run the update routine once, if there is one.
    pub fn tick(&mut self) {
        // SAFETY: the instance is alive and exclusively borrowed.
        unsafe { self.callback.invoke() }
    }
}

impl Drop for ModuleInstance {
    fn drop(&mut self) {
        self.callback = ExportedCallback::NULL;
        // SAFETY: both were boxed in `new` and are freed exactly once here,
        // the slot first since it points at the module.
        unsafe {
            drop(Box::from_raw(self.slot.as_ptr()));
            drop(Box::from_raw(self.module));
        }
    }
}

impl fmt::Debug for ModuleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleInstance")
            .field("id", &self.id)
            .field("type_name", &self.module().type_name())
            .field("callback", &self.callback)
            .finish()
    }
}
