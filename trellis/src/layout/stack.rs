//! Stack layout - one-dimensional flow along a main axis.
//!
//! A pass runs in a fixed order:
//!
//! ```text
//! visibility -> filler synthesis -> definite lengths -> weighted shares
//!            -> sequential offsets -> cross alignment -> frames
//! ```
//!
//! [`StackLayout::compute`] is pure and returns the frames.
//! [`StackLayout::apply`] also writes frames and visibility to the content.

use serde::{Deserialize, Serialize};

use crate::content::LayoutContent;
use crate::primitives::{Rect, Size};

use super::arrange::{ArrangedSlot, arrange, visible_indices};
use super::axis::Direction;
use super::element::StackElement;
use super::length::{AxisReference, StackAlignment, StackArrangement, StackSize};

/// Frame computed for one entry of the arranged list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub slot: ArrangedSlot,
    pub frame: Rect,
}

/// Output of a stack pass.
///
/// `placements` follows arranged order and includes engine fillers; use
/// [`StackPass::element_frames`] for caller elements only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackPass {
    pub placements: Vec<Placement>,
    /// Indices of elements excluded because they are hidden.
    pub hidden: Vec<usize>,
    /// Parent main length minus every definite main length. May be negative.
    pub remaining: f32,
    /// Sum of the weights in the arranged list.
    pub total_weight: f32,
}

impl StackPass {
    /// `(index, frame)` for every visible caller element, in arranged order.
    pub fn element_frames(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.placements.iter().filter_map(|p| match p.slot {
            ArrangedSlot::Element(i) => Some((i, p.frame)),
            ArrangedSlot::Filler => None,
        })
    }

    /// Frames of the engine fillers, in arranged order.
    pub fn filler_frames(&self) -> impl Iterator<Item = Rect> + '_ {
        self.placements
            .iter()
            .filter(|p| p.slot.is_filler())
            .map(|p| p.frame)
    }

    /// Frame of the caller element at `index`, if it was placed.
    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.element_frames().find(|(i, _)| *i == index).map(|(_, frame)| frame)
    }

    /// The arranged list this pass was computed from.
    pub fn arranged(&self) -> Vec<ArrangedSlot> {
        self.placements.iter().map(|p| p.slot).collect()
    }
}

/// Stack layout configuration.
///
/// Defaults: horizontal, `SpaceBetween`, centered on the cross axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackLayout {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub arrangement: StackArrangement,
    #[serde(default)]
    pub alignment: StackAlignment,
}

impl StackLayout {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    /// Set the main-axis arrangement.
    pub fn arrangement(mut self, arrangement: StackArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Set the default cross-axis alignment.
    pub fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Compute frames without touching the content.
    ///
    /// Only the size of `parent` is used; frames are in the parent's local
    /// coordinate space, starting at 0 on both axes.
    pub fn compute<C: LayoutContent>(&self, elements: &[StackElement<C>], parent: Rect) -> StackPass {
        let direction = self.direction;
        let (parent_main, parent_cross) = direction.split(parent.size());
        let main_ref = AxisReference::new(parent_main, parent_cross);
        let cross_ref = main_ref.swapped();

        let visible = visible_indices(elements);
        let hidden = (0..elements.len()).filter(|i| elements[*i].hidden).collect();
        let arranged = arrange(elements, &visible, self.arrangement);

        let content_size = |slot: ArrangedSlot| match slot {
            ArrangedSlot::Element(i) => elements[i].content.frame().size(),
            ArrangedSlot::Filler => Size::ZERO,
        };

        let total_fixed: f32 = arranged
            .iter()
            .filter_map(|&slot| {
                let content_main = direction.main_length(content_size(slot));
                slot.main_size(elements).definite_length(main_ref, content_main)
            })
            .sum();
        let remaining = parent_main - total_fixed;
        let total_weight: f32 = arranged.iter().map(|slot| slot.main_size(elements).weight()).sum();
        let has_weighted = arranged.iter().any(|slot| slot.main_size(elements).is_weighted());

        let per_weight = if total_weight != 0.0 {
            remaining / total_weight
        } else {
            if has_weighted {
                tracing::warn!("weighted stack elements with zero total weight; sizing them to 0");
            }
            0.0
        };

        tracing::debug!(
            ?direction,
            elements = elements.len(),
            arranged = arranged.len(),
            remaining,
            total_weight,
            "stack pass"
        );

        let mut placements = Vec::with_capacity(arranged.len());
        let mut offset = 0.0f32;

        for slot in arranged {
            let (content_main, content_cross) = direction.split(content_size(slot));

            let main_length = match slot.main_size(elements) {
                StackSize::Weighted(weight) => weight * per_weight,
                size => size.definite_length(main_ref, content_main).unwrap_or(0.0),
            };
            let cross_length = resolve_cross(slot.cross_size(elements), cross_ref, content_cross);

            let alignment = match slot {
                ArrangedSlot::Element(i) => elements[i].alignment.unwrap_or(self.alignment),
                ArrangedSlot::Filler => self.alignment,
            };
            let cross_coordinate = alignment.offset(parent_cross, cross_length);

            let frame = direction.make_rect(offset, cross_coordinate, main_length, cross_length);
            tracing::trace!(?slot, ?frame, "stack placement");
            placements.push(Placement { slot, frame });

            offset += main_length;
        }

        StackPass {
            placements,
            hidden,
            remaining,
            total_weight,
        }
    }

    /// Run a pass and write the results to the content.
    ///
    /// Every hidden element's content is hidden and every other element's
    /// content is shown; visible elements receive their frames. Hidden
    /// elements keep their previous frame.
    pub fn apply<C: LayoutContent>(&self, elements: &mut [StackElement<C>], parent: Rect) -> StackPass {
        for element in elements.iter_mut() {
            element.content.set_hidden(element.hidden);
        }

        let pass = self.compute(elements, parent);
        for (i, frame) in pass.element_frames() {
            elements[i].content.set_frame(frame);
        }
        pass
    }

    /// Smallest size that fits the visible elements along this direction.
    pub fn fitting_size<C: LayoutContent>(&self, elements: &[StackElement<C>], parent: Rect) -> Size {
        fitting_size(elements, parent, self.direction)
    }
}

/// Cross lengths: a weighted policy has no share to take, so it fills.
fn resolve_cross(size: StackSize, cross_ref: AxisReference, content_cross: f32) -> f32 {
    size.definite_length(cross_ref, content_cross).unwrap_or(cross_ref.current)
}

/// Bounding size of the visible elements laid out along `direction`.
///
/// Sums main lengths and takes the largest cross length. Weighted sizes
/// count as 0 on both axes, since they only have meaning relative to a
/// parent that is being measured. No fillers, no side effects.
pub fn fitting_size<C: LayoutContent>(
    elements: &[StackElement<C>],
    parent: Rect,
    direction: Direction,
) -> Size {
    let (parent_main, parent_cross) = direction.split(parent.size());
    let main_ref = AxisReference::new(parent_main, parent_cross);
    let cross_ref = main_ref.swapped();

    let mut total_main = 0.0f32;
    let mut max_cross = 0.0f32;

    for element in elements.iter().filter(|el| !el.hidden) {
        let (content_main, content_cross) = direction.split(element.content.frame().size());
        let main = element.main_size.definite_length(main_ref, content_main).unwrap_or(0.0);
        let cross = element.cross_size.definite_length(cross_ref, content_cross).unwrap_or(0.0);

        total_main += main;
        max_cross = max_cross.max(cross);
    }

    direction.make_size(total_main, max_cross)
}
