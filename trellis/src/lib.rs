//! Trellis - stack and box frame layout.
//!
//! Trellis computes frames for opaque content inside a parent rectangle.
//! It knows nothing about rendering; content only has to implement
//! [`LayoutContent`] (read a frame, write a frame, toggle visibility).
//!
//! - **Stack layout**: elements flow along a main axis. Each axis is sized
//!   fixed, weighted, relative to a parent axis, or copied from the content.
//!   Arrangements (start, center, space-between, ...) are realized with
//!   synthetic weighted fillers that never touch the caller's list.
//! - **Box layout**: each element is sized on its own and placed on a
//!   9-point grid.
//!
//! # Example
//!
//! ```
//! use trellis::{Rect, StackElement, StackLayout, StackSize, Surface};
//!
//! let mut elements = vec![
//!     StackElement::new(Surface::default()).main_size(StackSize::Fixed(40.0)),
//!     StackElement::new(Surface::default()),
//! ];
//! StackLayout::horizontal().apply(&mut elements, Rect::new(0.0, 0.0, 100.0, 20.0));
//! assert_eq!(elements[1].content.frame, Rect::new(40.0, 0.0, 60.0, 20.0));
//! ```

pub mod content;
pub mod document;
pub mod error;
pub mod layout;
pub mod primitives;

pub use content::{LayoutContent, Surface};
pub use document::{LayoutDocument, LayoutReport};
pub use error::{LayoutError, Result};
pub use layout::{
    ArrangedSlot, BoxAlignment, BoxElement, BoxLayout, BoxPass, BoxRelativeSide, BoxSize, BoxView,
    Direction, ElementKind, RelativeAxis, StackAlignment, StackArrangement, StackElement,
    StackLayout, StackPass, StackSize, StackView,
};
pub use primitives::{Color, Point, Rect, Size};
