//! Stateful containers.
//!
//! [`StackView`] and [`BoxView`] own a frame, a layout configuration and the
//! caller's elements. Changing any of them only records the change; nothing
//! moves until [`StackView::relayout`] / [`BoxView::relayout`] is called.
//!
//! ```ignore
//! let mut stack = StackView::new(Direction::Vertical)
//!     .frame(Rect::new(0.0, 0.0, 320.0, 480.0))
//!     .push(StackElement::new(header).main_size(StackSize::Fixed(44.0)))
//!     .push(StackElement::new(body));
//! stack.relayout();
//!
//! stack.set_arrangement(StackArrangement::Center);
//! stack.relayout();
//! ```

use crate::content::LayoutContent;
use crate::primitives::{Rect, Size};

use super::arrange::ArrangedSlot;
use super::axis::Direction;
use super::boxed::{BoxLayout, BoxPass};
use super::element::{BoxElement, StackElement};
use super::length::{BoxAlignment, StackAlignment, StackArrangement};
use super::stack::{StackLayout, StackPass};

// =========================================================================
// StackView
// =========================================================================

/// A stack container with an explicit relayout step.
#[derive(Debug, Clone)]
pub struct StackView<C> {
    frame: Rect,
    layout: StackLayout,
    elements: Vec<StackElement<C>>,
    /// Result of the last relayout; replaced on every pass.
    last_pass: Option<StackPass>,
}

impl<C: LayoutContent> StackView<C> {
    /// Empty stack with a zero frame, `SpaceBetween` arrangement and centered
    /// cross alignment.
    pub fn new(direction: Direction) -> Self {
        Self::with_layout(StackLayout::new(direction))
    }

    pub fn with_layout(layout: StackLayout) -> Self {
        Self {
            frame: Rect::ZERO,
            layout,
            elements: Vec::new(),
            last_pass: None,
        }
    }

    /// Set the container frame.
    pub fn frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    /// Append an element.
    pub fn push(mut self, element: StackElement<C>) -> Self {
        self.elements.push(element);
        self
    }

    /// Replace all elements.
    pub fn with_elements(mut self, elements: Vec<StackElement<C>>) -> Self {
        self.elements = elements;
        self
    }

    pub fn arrangement(mut self, arrangement: StackArrangement) -> Self {
        self.layout.arrangement = arrangement;
        self
    }

    pub fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    pub fn current_frame(&self) -> Rect {
        self.frame
    }

    pub fn layout(&self) -> StackLayout {
        self.layout
    }

    pub fn elements(&self) -> &[StackElement<C>] {
        &self.elements
    }

    /// Mutable access to the elements. Call [`relayout`](Self::relayout) afterwards.
    pub fn elements_mut(&mut self) -> &mut Vec<StackElement<C>> {
        &mut self.elements
    }

    /// Take the elements back, leaving the container empty.
    pub fn into_elements(self) -> Vec<StackElement<C>> {
        self.elements
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn set_elements(&mut self, elements: Vec<StackElement<C>>) {
        self.elements = elements;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.layout.direction = direction;
    }

    pub fn set_arrangement(&mut self, arrangement: StackArrangement) {
        self.layout.arrangement = arrangement;
    }

    pub fn set_alignment(&mut self, alignment: StackAlignment) {
        self.layout.alignment = alignment;
    }

    /// Recompute and apply the layout from the current configuration.
    pub fn relayout(&mut self) -> &StackPass {
        let pass = self.layout.apply(&mut self.elements, self.frame);
        self.last_pass.insert(pass)
    }

    /// Result of the last relayout, if any.
    pub fn last_pass(&self) -> Option<&StackPass> {
        self.last_pass.as_ref()
    }

    /// Arranged list of the last relayout (empty before the first one).
    pub fn arranged(&self) -> Vec<ArrangedSlot> {
        self.last_pass.as_ref().map(StackPass::arranged).unwrap_or_default()
    }

    /// Size that hugs the visible elements.
    pub fn fitting_size(&self) -> Size {
        self.layout.fitting_size(&self.elements, self.frame)
    }

    /// Resize the frame to [`fitting_size`](Self::fitting_size), keeping its
    /// origin, and relayout.
    pub fn size_to_fit(&mut self) -> &StackPass {
        let size = self.fitting_size();
        self.frame = Rect::from_origin_size(self.frame.origin(), size);
        self.relayout()
    }
}

// =========================================================================
// BoxView
// =========================================================================

/// A box container with an explicit relayout step.
#[derive(Debug, Clone)]
pub struct BoxView<C> {
    frame: Rect,
    layout: BoxLayout,
    elements: Vec<BoxElement<C>>,
}

impl<C: LayoutContent> Default for BoxView<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: LayoutContent> BoxView<C> {
    /// Empty box with a zero frame, centered elements.
    pub fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            layout: BoxLayout::default(),
            elements: Vec::new(),
        }
    }

    pub fn frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn push(mut self, element: BoxElement<C>) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_elements(mut self, elements: Vec<BoxElement<C>>) -> Self {
        self.elements = elements;
        self
    }

    pub fn alignment(mut self, alignment: BoxAlignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    pub fn current_frame(&self) -> Rect {
        self.frame
    }

    pub fn layout(&self) -> BoxLayout {
        self.layout
    }

    pub fn elements(&self) -> &[BoxElement<C>] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<BoxElement<C>> {
        &mut self.elements
    }

    pub fn into_elements(self) -> Vec<BoxElement<C>> {
        self.elements
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn set_elements(&mut self, elements: Vec<BoxElement<C>>) {
        self.elements = elements;
    }

    pub fn set_alignment(&mut self, alignment: BoxAlignment) {
        self.layout.alignment = alignment;
    }

    /// Recompute and apply the layout from the current configuration.
    pub fn relayout(&mut self) -> BoxPass {
        self.layout.apply(&mut self.elements, self.frame)
    }
}
