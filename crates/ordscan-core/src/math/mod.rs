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

//! # Math Primitives
//!
//! Foundational structures for index arithmetic over slices. This module
//! currently focuses on half-open span math, designed to integrate cleanly
//! with Rust's range and iterator ecosystem.
//!
//! ## Submodules
//!
//! - `span`: A generic `[start, end)` span type with validation,
//!   measurements, containment queries, and iteration support
//!   (`Iterator`, `ExactSizeIterator`, `FusedIterator`). Includes
//!   conversions to/from `std::ops::Range`.
//!
//! ## Motivation
//!
//! Scan algorithms routinely restrict themselves to a sub-range of a
//! sequence. Half-open spans are robust against off-by-one mistakes and
//! make the empty case explicit (`start == end`) instead of a sentinel.

pub mod span;
