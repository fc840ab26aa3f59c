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

use std::sync::Arc;

use crate::Threshold;

/// This trait abstracts away the implementation details of the threshold cache.
/// That is, the data structure that stores thresholds conditioning the
/// re-exploration of nodes whose state has already been reached previously.
pub trait Cache {
    type State;

    /// Prepare the cache to be used with a problem having `nb_variables`
    /// variables.
    fn initialize(&mut self, nb_variables: usize);

    /// Returns the threshold currently associated with the given state, if any.
    fn get_threshold(&self, state: &Self::State, depth: usize) -> Option<Threshold>;

    /// Updates the threshold associated with the given state, only if it is increased.
    fn update_threshold(&mut self, state: Arc<Self::State>, depth: usize, threshold: Threshold);

    /// Total number of thresholds stored in the cache
    fn len(&self) -> usize;

    /// Returns true iff the cache holds no threshold
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the data structure.
    fn clear(&mut self);
}
