//! Mounted instances and their lifecycle hooks.
//!
//! A component that owns state across frames asks for it with
//! [`use_instance`]. The instance lives as long as the component keeps being
//! rendered under the same key:
//!
//! - first frame rendered: [`Lifecycle::on_mount`] after the host presented it
//! - later frames: [`Lifecycle::on_update`] after each present
//! - first frame *not* rendered: [`Lifecycle::on_unmount`], then the instance's
//!   scope is disposed and the state dropped
//!
//! Rendering it again afterwards creates a fresh instance.

use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use slotmap::SlotMap;

use crate::host::Host;
use crate::scope::Scope;

pub trait Lifecycle: 'static {
    fn on_mount(&self, host: &dyn Host) {
        let _ = host;
    }
    fn on_update(&self, host: &dyn Host) {
        let _ = host;
    }
    fn on_unmount(&self) {}
}

slotmap::new_key_type! {
    struct InstanceKey;
}

struct Instance {
    key: String,
    value: Rc<dyn Any>,
    hooks: Rc<dyn Lifecycle>,
    scope: Scope,
    mounted: bool,
}

#[derive(Default)]
struct Registry {
    by_key: HashMap<String, InstanceKey>,
    instances: SlotMap<InstanceKey, Instance>,
    // render order of the current frame
    rendered: Vec<InstanceKey>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

pub(crate) fn begin_frame() {
    REGISTRY.with(|r| r.borrow_mut().rendered.clear());
}

/// Returns the instance stored under `key`, creating it with `init` (inside a
/// fresh scope) if it does not exist yet.
pub fn use_instance<T: Lifecycle>(key: &str, init: impl FnOnce() -> T) -> Rc<T> {
    let existing = REGISTRY.with(|r| {
        let r = r.borrow();
        r.by_key
            .get(key)
            .and_then(|ik| r.instances.get(*ik).map(|inst| (*ik, inst.value.clone())))
    });

    if let Some((ik, value)) = existing {
        match value.downcast::<T>() {
            Ok(rc) => {
                REGISTRY.with(|r| {
                    let mut r = r.borrow_mut();
                    if r.rendered.contains(&ik) {
                        log::warn!("use_instance: key '{key}' rendered twice in one frame");
                    } else {
                        r.rendered.push(ik);
                    }
                });
                return rc;
            }
            Err(_) => {
                log::warn!("use_instance: key '{key}' reused with a different type; replacing.");
                let stale = REGISTRY.with(|r| {
                    let mut r = r.borrow_mut();
                    r.by_key.remove(key);
                    r.instances.remove(ik)
                });
                if let Some(stale) = stale {
                    unmount(stale);
                }
            }
        }
    }

    let scope = Scope::new();
    let rc = Rc::new(scope.run(init));
    let value: Rc<dyn Any> = rc.clone();
    let hooks: Rc<dyn Lifecycle> = rc.clone();

    REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        let ik = r.instances.insert(Instance {
            key: key.to_string(),
            value,
            hooks,
            scope,
            mounted: false,
        });
        r.by_key.insert(key.to_string(), ik);
        r.rendered.push(ik);
    });
    rc
}

/// Runs the hooks for the frame that was just presented.
pub fn commit(host: &dyn Host) {
    let (stale, live) = REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        let rendered: HashSet<InstanceKey> = r.rendered.iter().copied().collect();
        let stale_keys: Vec<InstanceKey> = r
            .instances
            .keys()
            .filter(|k| !rendered.contains(k))
            .collect();

        let mut stale = Vec::with_capacity(stale_keys.len());
        for k in stale_keys {
            if let Some(inst) = r.instances.remove(k) {
                r.by_key.remove(&inst.key);
                stale.push(inst);
            }
        }

        let order = r.rendered.clone();
        let mut live = Vec::with_capacity(order.len());
        for k in order {
            if let Some(inst) = r.instances.get_mut(k) {
                let first = !inst.mounted;
                inst.mounted = true;
                live.push((inst.key.clone(), inst.hooks.clone(), first));
            }
        }
        (stale, live)
    });

    for inst in stale {
        unmount(inst);
    }
    for (key, hooks, first) in live {
        if first {
            log::debug!("mount {key}");
            hooks.on_mount(host);
        } else {
            hooks.on_update(host);
        }
    }
}

fn unmount(inst: Instance) {
    log::debug!("unmount {}", inst.key);
    inst.hooks.on_unmount();
    inst.scope.dispose();
}

/// Unmounts every instance.
pub fn unmount_all() {
    let all: Vec<Instance> = REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        r.by_key.clear();
        r.rendered.clear();
        r.instances.drain().map(|(_, inst)| inst).collect()
    });
    for inst in all {
        unmount(inst);
    }
}

pub fn is_mounted(key: &str) -> bool {
    REGISTRY.with(|r| {
        let r = r.borrow();
        r.by_key
            .get(key)
            .and_then(|ik| r.instances.get(*ik))
            .is_some_and(|inst| inst.mounted)
    })
}

pub fn instance_count() -> usize {
    REGISTRY.with(|r| r.borrow().instances.len())
}
