// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Ordscan Select
//!
//! **Selection primitives over ordered slices.**
//!
//! This crate implements the two selection operations of the ordscan
//! workspace: locating the first occurrence of the minimum element in a
//! slice (or a sub-span of one), and sorting a slice in place by repeated
//! minimum selection.
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation between the checked
//! public boundary and the unchecked inner scan:
//!
//! * **`error`**: The single invalid-input error kind, raised when a
//!   selection is attempted on an empty slice or span.
//! * **`min`**: The minimum finder. Validates its input once, then runs a
//!   single bounds-free pass with a strict `<` comparison so that ties
//!   resolve to the earliest index.
//! * **`sort`**: In-place selection sort. Never constructs an empty scan
//!   span, so it cannot fail; slices of length zero or one are returned
//!   unchanged.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: The public entry points validate eagerly and return
//!     a typed error; the inner scan documents its preconditions with
//!     debug assertions instead of re-checking per element.
//! 2.  **Exclusive Ownership**: Sorting borrows the slice mutably for the
//!     duration of the call, so the in-place permutation can never be
//!     observed half-finished through an alias.

pub mod error;
pub mod min;
pub mod sort;
