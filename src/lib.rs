//! # Dynamic Succinct Bit Vectors
//!
//! *Random-position insertion without giving up word-packed storage.*
//!
//! ## Intuition First
//!
//! Picture a bookshelf where every book is shrink-wrapped against its
//! neighbors. Reading any page is instant, but sliding a new book into the
//! middle means shoving everything after it. The structures in this crate
//! keep the shelf packed while leaving a few deliberate finger-widths of
//! slack in each section, so an insertion only shuffles one small section —
//! and a ledger at the end of each aisle always knows how many books (and
//! how many red books) sit to its left.
//!
//! ## The Problem
//!
//! Succinct structures are almost always *static*: rank/select indexes are
//! built once over a frozen bit array. Dynamic sequence problems (wavelet
//! trees over growing texts, online FM-index construction, dynamic graph
//! adjacency) need the opposite: a bit vector where `insert(i, b)` at an
//! arbitrary position is cheap and `access(i)` stays cheap, while the bits
//! remain packed in machine words.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Jacobson     Succinct paradigm: rank/select over static bits
//! 1999  Munro et al. Balanced-parentheses and early dynamic proposals
//! 2006  Blandford    Compact dynamic sequences via chunked storage
//! 2010  Navarro      Dynamic rank/select in O(log n / log log n) per op
//! 2014  Gigante      Packed B-tree engineering: SWAR counters in nodes
//! ```
//!
//! ## Mathematical Formulation
//!
//! For word width $W$ and capacity $N$, counters of width
//! $c = \lceil \log_2 N \rceil + 1$ pack $d = \lfloor W/c \rfloor$ per
//! word. The tree keeps fan-out $d + 1$, so its height is
//! $O(\log N / \log d)$, and buffered redistribution over windows of
//! $b = \lceil \sqrt{W} \rceil - 1$ leaves (resp. $b' = \lceil \sqrt{d}
//! \rceil - 1$ nodes) amortizes structural work down to $O(1)$ word
//! operations per level of descent.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(\log N / \log d)$ per `access`; the same amortized per
//!   `insert`.
//! - **Space**: $N + o(N)$ bits for the leaves plus three packed words per
//!   internal node, all pre-reserved at construction.
//!
//! ## What Could Go Wrong
//!
//! 1. **SWAR guard bits**: the packed counter comparison borrows through
//!    the high bit of each field; a counter that reaches it silently
//!    corrupts the search. Field widths here always leave one spare bit.
//! 2. **Amortized is not worst case**: an insert that triggers a
//!    redistribution touches $O(b)$ siblings; latency-sensitive callers
//!    should expect occasional heavier operations.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`DynamicBitVector`]**: the packed B-tree with `access`/`insert`.
//! - **[`PackedArray`]**: fixed-width fields with SWAR broadcast, add and
//!   parallel search.
//! - **[`BitView`]**: bit-addressed storage straddling word boundaries.
//! - **[`NaiveBitVector`]**: the linear-time baseline and test oracle.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Succinct Static Data Structures."
//! - Navarro, G., & Sadakane, K. (2014). "Fully Functional Static and
//!   Dynamic Succinct Trees."
//! - Prezza, N. (2017). "A Framework of Dynamic Data Structures for
//!   String Processing."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitview;
pub mod dynamic;
pub mod error;
pub mod naive;
pub mod packed;

pub use bitview::BitView;
pub use dynamic::DynamicBitVector;
pub use error::Error;
pub use naive::NaiveBitVector;
pub use packed::PackedArray;
