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

//! # Ordscan Core
//!
//! Foundational primitives for the ordscan algorithm crates. This crate
//! consolidates the reusable building blocks that the selection and
//! search routines are written against: validated index spans and
//! single-pass scans over sorted slices.
//!
//! ## Modules
//!
//! - `math`: Half-open span `[start, end)` primitives with validation,
//!   measurements, containment queries, iteration (`Iterator`,
//!   `ExactSizeIterator`, `FusedIterator`), and conversions to/from
//!   `std::ops::Range`.
//! - `algorithm`: Scans over sorted slices: an ascending-order check, a
//!   lower-bound search for the first admissible position, and an
//!   exact-match binary search built on top of it.
//!
//! ## Purpose
//!
//! These primitives keep the higher-level selection crate free of ad hoc
//! bounds bookkeeping: a `Span` cannot be constructed inverted, and the
//! sorted-slice scans document and check their preconditions in debug
//! builds.
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod math;
