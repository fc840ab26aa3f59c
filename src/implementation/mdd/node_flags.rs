// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the compact set of flags attached to each node of a
//! decision diagram.

/// This structure stores a compact set of flags relating to a given node.
/// So far, it maintains the following:
/// - Relaxed       true iff the node is inexact (merged, or reached through a merged node)
/// - Merged        true iff the node was produced by a merge operation
/// - Cutset        true iff the node belongs to the cutset of the diagram
/// - AboveCutset   true iff the node lies strictly above the cutset
/// - Deleted       true iff the node was removed from its layer (filter or shrink)
///
/// # Remark
/// A merged node is always relaxed, but a relaxed node needs not be merged:
/// this happens when one of its ancestors is the result of a merge.
///
/// # Default
/// By default, a node is exact and carries no other flag.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct NodeFlags(u8);
impl NodeFlags {
    /// The position of the relaxed flag
    pub const F_RELAXED: u8 = 1;
    /// The position of the merged flag.
    pub const F_MERGED: u8 = 2;
    /// The position of the cut-set flag.
    pub const F_CUTSET: u8 = 4;
    /// The position of the above cut-set flag.
    pub const F_ABOVE_CUTSET: u8 = 8;
    /// The position of the deleted flag.
    pub const F_DELETED: u8 = 16;

    /// Creates a new set of flags, either initialized with relaxed on or off
    #[inline]
    pub fn new(relaxed: bool) -> Self {
        if relaxed {
            Self::new_relaxed()
        } else {
            Self::new_exact()
        }
    }
    /// Creates a new set of flags where no flag is turned on.
    #[inline]
    pub fn new_exact() -> Self {
        NodeFlags(0)
    }
    /// Creates a new set of flags having only the relaxed flag turned on.
    #[inline]
    pub fn new_relaxed() -> Self {
        NodeFlags(NodeFlags::F_RELAXED)
    }
    /// Returns true iff the relaxed flag is off
    #[inline]
    pub fn is_exact(self) -> bool {
        !self.is_relaxed()
    }
    /// Returns true iff the relaxed flag is turned on
    #[inline]
    pub fn is_relaxed(self) -> bool {
        self.test(NodeFlags::F_RELAXED)
    }
    /// Returns true iff the merged flag is turned on
    #[inline]
    pub fn is_merged(self) -> bool {
        self.test(NodeFlags::F_MERGED)
    }
    /// Returns true iff the cut-set flag is turned on
    #[inline]
    pub fn is_cutset(self) -> bool {
        self.test(NodeFlags::F_CUTSET)
    }
    /// Returns true iff the above cut-set flag is turned on
    #[inline]
    pub fn is_above_cutset(self) -> bool {
        self.test(NodeFlags::F_ABOVE_CUTSET)
    }
    /// Returns true iff the deleted flag is turned on
    #[inline]
    pub fn is_deleted(self) -> bool {
        self.test(NodeFlags::F_DELETED)
    }
    /// Sets the relaxed flag to the given value
    #[inline]
    pub fn set_relaxed(&mut self, relaxed: bool) {
        self.set(NodeFlags::F_RELAXED, relaxed)
    }
    /// Turns the node into a merged node. A merged node is relaxed too.
    #[inline]
    pub fn set_merged(&mut self, merged: bool) {
        self.set(NodeFlags::F_MERGED, merged);
        if merged {
            self.add(NodeFlags::F_RELAXED);
        }
    }
    #[inline]
    pub fn set_cutset(&mut self, cutset: bool) {
        self.set(NodeFlags::F_CUTSET, cutset)
    }
    #[inline]
    pub fn set_above_cutset(&mut self, above: bool) {
        self.set(NodeFlags::F_ABOVE_CUTSET, above)
    }
    /// Sets the deleted flag to the given value
    #[inline]
    pub fn set_deleted(&mut self, deleted: bool) {
        self.set(NodeFlags::F_DELETED, deleted)
    }
    /// Checks whether all the flags encoded in the given mask are turned on.
    /// Otherwise, it returns false
    #[inline]
    pub fn test(self, mask: u8) -> bool {
        self.0 & mask == mask
    }
    /// Sets the value of a given flag to the selected polarity
    #[inline]
    pub fn set(&mut self, flag: u8, value: bool) {
        if value {
            self.add(flag)
        } else {
            self.remove(flag)
        }
    }
    /// Turns the given flag(s) on.
    #[inline]
    pub fn add(&mut self, flags: u8) {
        self.0 |= flags;
    }
    /// Turns the given flag(s) off.
    #[inline]
    pub fn remove(&mut self, flags: u8) {
        self.0 &= !flags;
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
