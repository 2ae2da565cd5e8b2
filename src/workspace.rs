//! Reusable scratch memory for distance computations and trie searches.
//!
//! A [`Workspace`] owns every buffer a query needs: the dynamic-programming
//! table of the exact distance, the per-depth frame stack of the fuzzy search,
//! and character buffers for the typed string and the current trie path.
//! Buffers only ever grow, so after warm-up a query allocates nothing but its
//! results. A workspace carries no state from one query to the next.
//!
//! Callers that drive many queries from one place can own a workspace and pass
//! it explicitly. Everything else goes through [`with_workspace`], which lends
//! out one workspace per thread.

use std::cell::RefCell;

use crate::search::frame::SearchFrame;

/// Grow-only scratch buffers for one thread of lookups.
#[derive(Debug, Default)]
pub struct Workspace {
    pub(crate) table: Vec<f32>,
    pub(crate) frames: Vec<SearchFrame>,
    pub(crate) prefix: Vec<char>,
    pub(crate) typed: Vec<char>,
    pub(crate) meant: Vec<char>,
}

impl Workspace {
    /// Create an empty workspace; buffers are allocated on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `f32` cells currently reserved for the distance table.
    pub fn table_capacity(&self) -> usize {
        self.table.len()
    }

    /// Number of search frames allocated so far (deepest search + 1).
    pub fn frame_capacity(&self) -> usize {
        self.frames.len()
    }
}

thread_local! {
    static WORKSPACE: RefCell<Workspace> = RefCell::new(Workspace::new());
}

/// Run `f` with this thread's workspace.
///
/// A nested call on the same thread (a generator that performs its own lookup,
/// say) gets a fresh temporary workspace instead of the shared one.
pub fn with_workspace<R>(f: impl FnOnce(&mut Workspace) -> R) -> R {
    WORKSPACE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut workspace) => f(&mut workspace),
        Err(_) => f(&mut Workspace::new()),
    })
}
