//! Window entity store
//!
//! Owns every open window by value. Stacking ranks are kept dense over the
//! live set by `create` and `focus`; `close` leaves gaps, which is harmless
//! because the view layer only relies on relative order.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Window, WindowConfig, WindowId, WindowRegion, ZOrder};
use crate::error::Change;
use crate::math::Vec2;

/// Window entity store
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    windows: BTreeMap<WindowId, Window>,
    next_id: WindowId,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a window on top of the stack and return its id.
    ///
    /// Existing ranks are untouched. The new rank is `count + 1`, or one past
    /// the current maximum if earlier closes left a rank above `count`.
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let count = self.windows.len() as ZOrder;
        let z_order = count.max(self.max_z()) + 1;

        debug!(id, tool = %config.tool, z_order, "window created");
        self.windows.insert(
            id,
            Window {
                id,
                tool: config.tool,
                title: config.title,
                position: config.position,
                size: config.size,
                z_order,
            },
        );
        id
    }

    /// Remove a window. Remaining ranks are not renumbered.
    pub fn close(&mut self, id: WindowId) -> Change {
        let removed = self.windows.remove(&id).is_some();
        if removed {
            debug!(id, "window closed");
        }
        Change::from(removed)
    }

    /// Raise a window to the top of the stack.
    ///
    /// The target takes the current maximum rank and every window ranked
    /// above its old slot drops by one.
    pub fn focus(&mut self, id: WindowId) -> Change {
        let max_z = self.max_z();
        let old_z = match self.windows.get(&id) {
            Some(window) if window.z_order != max_z => window.z_order,
            _ => return Change::Unchanged,
        };

        for window in self.windows.values_mut() {
            if window.id == id {
                window.z_order = max_z;
            } else if window.z_order > old_z {
                window.z_order -= 1;
            }
        }

        debug!(id, old_z, new_z = max_z, "window focused");
        Change::Applied
    }

    /// Overwrite a window's position. No clamping to the viewport.
    pub fn move_window(&mut self, id: WindowId, position: Vec2) -> Change {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.position = position;
                Change::Applied
            }
            None => Change::Unchanged,
        }
    }

    /// Drop every window. The id counter keeps counting.
    pub fn clear(&mut self) {
        debug!(count = self.windows.len(), "clearing windows");
        self.windows.clear();
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Id the next `create` will assign
    pub fn next_id(&self) -> WindowId {
        self.next_id
    }

    /// All windows in id (creation) order
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Windows sorted by ascending rank: paint order, topmost last
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Topmost window, if any
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .values()
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    /// Topmost window under `point` and the region hit
    pub fn region_at(&self, point: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .find_map(|w| w.region_at(point).map(|region| (w.id, region)))
    }

    fn max_z(&self) -> ZOrder {
        self.windows.values().map(|w| w.z_order).max().unwrap_or(0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::math::Size;
    use crate::registry::Tool;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Open,
        Focus(usize),
        Close(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Open), (0usize..16).prop_map(Op::Focus)]
    }

    fn op_with_close_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => Just(Op::Open),
            2 => (0usize..16).prop_map(Op::Focus),
            1 => (0usize..16).prop_map(Op::Close),
        ]
    }

    fn open(wm: &mut WindowManager) -> WindowId {
        wm.create(WindowConfig::for_tool(
            Tool::CommandPrompt,
            Vec2::ZERO,
            Size::new(640.0, 480.0),
        ))
    }

    proptest! {
        /// Without closes, ranks are always exactly 1..=N
        #[test]
        fn ranks_stay_dense(ops in prop::collection::vec(op_strategy(), 1..64)) {
            let mut wm = WindowManager::new();
            let mut ids = Vec::new();
            for op in ops {
                match op {
                    Op::Open => ids.push(open(&mut wm)),
                    Op::Focus(i) if !ids.is_empty() => {
                        wm.focus(ids[i % ids.len()]);
                    }
                    Op::Focus(_) | Op::Close(_) => {}
                }
                let mut z: Vec<ZOrder> = wm.all_windows().map(|w| w.z_order).collect();
                z.sort_unstable();
                let expected: Vec<ZOrder> = (1..=wm.count() as ZOrder).collect();
                prop_assert_eq!(z, expected);
            }
        }

        /// With closes mixed in, live ranks stay distinct and paint order
        /// matches a stack where open pushes, focus moves to the end and
        /// close removes
        #[test]
        fn stacking_matches_model(ops in prop::collection::vec(op_with_close_strategy(), 1..64)) {
            let mut wm = WindowManager::new();
            let mut stack: Vec<WindowId> = Vec::new();
            for op in ops {
                match op {
                    Op::Open => stack.push(open(&mut wm)),
                    Op::Focus(i) if !stack.is_empty() => {
                        let id = stack.remove(i % stack.len());
                        wm.focus(id);
                        stack.push(id);
                    }
                    Op::Close(i) if !stack.is_empty() => {
                        let id = stack.remove(i % stack.len());
                        prop_assert_eq!(wm.close(id), Change::Applied);
                    }
                    Op::Focus(_) | Op::Close(_) => {}
                }

                let mut z: Vec<ZOrder> = wm.all_windows().map(|w| w.z_order).collect();
                z.sort_unstable();
                z.dedup();
                prop_assert_eq!(z.len(), wm.count());

                let order: Vec<WindowId> = wm.windows_by_z().iter().map(|w| w.id).collect();
                prop_assert_eq!(&order, &stack);
                prop_assert_eq!(wm.focused(), stack.last().copied());
            }
        }

        /// A second focus on the same window changes nothing
        #[test]
        fn focus_is_idempotent(n in 1usize..12, pick in 0usize..12) {
            let mut wm = WindowManager::new();
            let ids: Vec<WindowId> = (0..n).map(|_| open(&mut wm)).collect();
            let target = ids[pick % n];

            wm.focus(target);
            let before: Vec<_> = wm.all_windows().cloned().collect();
            prop_assert_eq!(wm.focus(target), Change::Unchanged);
            let after: Vec<_> = wm.all_windows().cloned().collect();
            prop_assert_eq!(before, after);
        }

        /// focus(A) then focus(B) leaves B above A
        #[test]
        fn later_focus_wins(n in 2usize..12, a in 0usize..12, b in 0usize..12) {
            let mut wm = WindowManager::new();
            let ids: Vec<WindowId> = (0..n).map(|_| open(&mut wm)).collect();
            let (a, b) = (ids[a % n], ids[b % n]);
            prop_assume!(a != b);

            wm.focus(a);
            wm.focus(b);
            prop_assert!(wm.get(b).unwrap().z_order > wm.get(a).unwrap().z_order);
        }

        /// Ids strictly increase even across closes
        #[test]
        fn ids_never_reused(closes in prop::collection::vec(any::<bool>(), 1..32)) {
            let mut wm = WindowManager::new();
            let mut last: Option<WindowId> = None;
            for close in closes {
                let id = open(&mut wm);
                if let Some(prev) = last {
                    prop_assert!(id > prev);
                }
                last = Some(id);
                if close {
                    wm.close(id);
                }
            }
        }
    }
}
