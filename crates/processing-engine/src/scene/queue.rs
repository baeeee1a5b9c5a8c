use super::DrawCmd;

/// A single queued command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Persistent items survive [`DrawQueue::clear_transient`] and are replayed
    /// every frame (commands recorded during `setup`).
    pub persistent: bool,
}

/// Ordered draw stream for the canvas.
///
/// Items are replayed strictly in insertion order; there is no z-sorting.
/// Persistent items always precede transient ones because they are only
/// created by [`set_all_persistent`](Self::set_all_persistent) before any
/// frame has run.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - clearing keeps allocated capacity for the next frame
#[derive(Debug, Default, Clone)]
pub struct DrawQueue {
    items: Vec<DrawItem>,
}

impl DrawQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transient command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, persistent: false });
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Iterates commands in replay order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn persistent_len(&self) -> usize {
        self.items.iter().filter(|item| item.persistent).count()
    }

    /// Marks every queued item persistent.
    pub fn set_all_persistent(&mut self) {
        for item in &mut self.items {
            item.persistent = true;
        }
    }

    /// Appends clones of `other`'s items as transient commands.
    ///
    /// Used when a canvas is replaced (e.g. after `size()` picks a renderer),
    /// so whatever `setup` recorded carries over to the new canvas.
    pub fn copy_from(&mut self, other: &DrawQueue) {
        self.items.reserve(other.items.len());
        self.items
            .extend(other.items.iter().map(|item| DrawItem { cmd: item.cmd.clone(), persistent: false }));
    }

    /// Drops transient items, keeping persistent ones in their original order.
    pub fn clear_transient(&mut self) {
        self.items.retain(|item| item.persistent);
    }

    /// Drops items past `len`, never cutting into the persistent prefix.
    pub fn truncate(&mut self, len: usize) {
        let keep = len.max(self.persistent_len());
        self.items.truncate(keep);
    }

    /// Drops everything, persistent items included.
    #[inline]
    pub fn clear_all(&mut self) {
        self.items.clear();
    }
}
