//! Layout engines for Trellis.
//!
//! Two independent engines share the same axis math and sizing vocabulary:
//!
//! ```text
//! axis -> length -> element -> arrange -> stack   (1D flow, fillers)
//!                           \-----------> boxed   (9-point placement)
//! ```
//!
//! Both are stateless: every pass is a pure recomputation from the current
//! elements and parent frame. [`containers`] wraps them with an explicit
//! `relayout()` step for callers that keep configuration around.

pub mod axis;
pub mod length;
pub mod element;
pub mod arrange;
pub mod stack;
pub mod boxed;
pub mod containers;

// Re-export core types
pub use axis::Direction;
pub use length::{
    AxisReference, BoxAlignment, BoxRelativeSide, BoxSize, RelativeAxis, StackAlignment,
    StackArrangement, StackSize,
};
pub use element::{BoxElement, ElementKind, StackElement};
pub use arrange::ArrangedSlot;
pub use stack::{Placement, StackLayout, StackPass, fitting_size};
pub use boxed::{BoxLayout, BoxPass};
pub use containers::{BoxView, StackView};
