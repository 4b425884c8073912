//! Box layout - independent 9-point placement inside a parent box.
//!
//! Each visible element is sized and aligned on its own. There is no flow,
//! no weighting and no filler; elements may overlap.

use serde::{Deserialize, Serialize};

use crate::content::LayoutContent;
use crate::primitives::Rect;

use super::element::BoxElement;
use super::length::{AxisReference, BoxAlignment};

/// Box layout configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxLayout {
    /// Used by elements without their own alignment.
    #[serde(default)]
    pub alignment: BoxAlignment,
}

/// Output of a box pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxPass {
    /// `(index, frame)` for every visible element, in input order.
    pub frames: Vec<(usize, Rect)>,
    /// Indices of hidden elements.
    pub hidden: Vec<usize>,
}

impl BoxPass {
    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.frames.iter().find(|(i, _)| *i == index).map(|(_, frame)| *frame)
    }
}

impl BoxLayout {
    pub fn new(alignment: BoxAlignment) -> Self {
        Self { alignment }
    }

    /// Compute frames without touching the content.
    ///
    /// Frames are in the parent's local coordinate space.
    pub fn compute<C: LayoutContent>(&self, elements: &[BoxElement<C>], parent: Rect) -> BoxPass {
        let mut pass = BoxPass::default();

        for (i, element) in elements.iter().enumerate() {
            if element.hidden {
                pass.hidden.push(i);
                continue;
            }
            let frame = self.place(element, parent);
            tracing::trace!(index = i, ?frame, "box placement");
            pass.frames.push((i, frame));
        }

        tracing::debug!(
            elements = elements.len(),
            placed = pass.frames.len(),
            "box pass"
        );
        pass
    }

    /// Run a pass and write frames and visibility to the content.
    pub fn apply<C: LayoutContent>(&self, elements: &mut [BoxElement<C>], parent: Rect) -> BoxPass {
        for element in elements.iter_mut() {
            element.content.set_hidden(element.hidden);
        }

        let pass = self.compute(elements, parent);
        for &(i, frame) in &pass.frames {
            elements[i].content.set_frame(frame);
        }
        pass
    }

    /// Frame of a single element inside `parent`.
    ///
    /// A relative width measures against the parent width (current side) or
    /// height (opposite side); a relative height against the parent height
    /// (current) or width (opposite).
    pub fn place<C: LayoutContent>(&self, element: &BoxElement<C>, parent: Rect) -> Rect {
        let content = element.content.frame();

        let width = element
            .width
            .resolve(AxisReference::new(parent.width, parent.height), content.width);
        let height = element
            .height
            .resolve(AxisReference::new(parent.height, parent.width), content.height);

        let alignment = element.alignment.unwrap_or(self.alignment);
        let x = alignment.horizontal().offset(parent.width, width);
        let y = alignment.vertical().offset(parent.height, height);

        Rect::new(x, y, width, height)
    }
}
