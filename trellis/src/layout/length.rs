//! Sizing policies and alignment types.
//!
//! A sizing policy says how one dimension of an element is derived. Stack
//! elements use [`StackSize`] on their main and cross axes; box elements use
//! [`BoxSize`] for width and height.

use serde::{Deserialize, Serialize};

/// Which parent length a relative size is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeAxis {
    /// The axis the policy is assigned to.
    #[default]
    Current,
    /// The perpendicular axis.
    Opposite,
}

/// Parent lengths as seen from the axis a policy is assigned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisReference {
    pub current: f32,
    pub opposite: f32,
}

impl AxisReference {
    #[inline]
    pub fn new(current: f32, opposite: f32) -> Self {
        Self { current, opposite }
    }

    /// The same two lengths seen from the perpendicular axis.
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            current: self.opposite,
            opposite: self.current,
        }
    }

    #[inline]
    pub fn pick(self, axis: RelativeAxis) -> f32 {
        match axis {
            RelativeAxis::Current => self.current,
            RelativeAxis::Opposite => self.opposite,
        }
    }
}

/// Sizing mode for one axis of a stack element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackSize {
    /// Exact length, independent of parent and siblings.
    Fixed(f32),
    /// Share of the main-axis space left after every definite length is
    /// subtracted, proportional to `weight / total_weight`.
    ///
    /// On the cross axis this always fills the parent's cross length.
    Weighted(f32),
    /// `ratio` times the parent length on the chosen axis.
    Relative {
        ratio: f32,
        #[serde(default)]
        axis: RelativeAxis,
    },
    /// The content's existing length on this axis.
    Copy,
}

impl StackSize {
    /// Relative to the parent length on the same axis.
    pub fn relative(ratio: f32) -> Self {
        StackSize::Relative {
            ratio,
            axis: RelativeAxis::Current,
        }
    }

    pub fn relative_to(ratio: f32, axis: RelativeAxis) -> Self {
        StackSize::Relative { ratio, axis }
    }

    /// Full parent length on the same axis.
    pub fn fill() -> Self {
        Self::relative(1.0)
    }

    /// Weight of this policy, or 0 if it is not weighted.
    pub fn weight(&self) -> f32 {
        match self {
            StackSize::Weighted(weight) => *weight,
            _ => 0.0,
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, StackSize::Weighted(_))
    }

    /// Length this policy resolves to without knowing the weighted share.
    ///
    /// `None` for `Weighted`; callers decide what a weight means on their axis.
    pub fn definite_length(&self, reference: AxisReference, content: f32) -> Option<f32> {
        match *self {
            StackSize::Fixed(size) => Some(size),
            StackSize::Weighted(_) => None,
            StackSize::Relative { ratio, axis } => Some(ratio * reference.pick(axis)),
            StackSize::Copy => Some(content),
        }
    }
}

/// Which side of the parent box a relative box size is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxRelativeSide {
    /// Same side as the one being set (width for width).
    #[default]
    Current,
    /// The other side (height when setting width).
    Opposite,
}

/// Sizing mode for the width or height of a box element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxSize {
    /// The content's existing length on this side.
    Copy,
    /// Exact length.
    Fixed(f32),
    /// `multiplier` times the chosen side of the parent box.
    Relative {
        multiplier: f32,
        #[serde(default)]
        side: BoxRelativeSide,
    },
}

impl BoxSize {
    pub fn relative(multiplier: f32) -> Self {
        BoxSize::Relative {
            multiplier,
            side: BoxRelativeSide::Current,
        }
    }

    pub fn relative_to(multiplier: f32, side: BoxRelativeSide) -> Self {
        BoxSize::Relative { multiplier, side }
    }

    /// Resolve against the parent box.
    ///
    /// `reference.current` is the parent side matching the one being set.
    pub fn resolve(&self, reference: AxisReference, content: f32) -> f32 {
        match *self {
            BoxSize::Copy => content,
            BoxSize::Fixed(size) => size,
            BoxSize::Relative { multiplier, side } => {
                let side_length = match side {
                    BoxRelativeSide::Current => reference.current,
                    BoxRelativeSide::Opposite => reference.opposite,
                };
                side_length * multiplier
            }
        }
    }
}

/// Cross-axis alignment of a stack element.
///
/// In a vertical stack `Start` is the left edge; in a horizontal stack it is
/// the top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackAlignment {
    Start,
    #[default]
    Center,
    End,
}

impl StackAlignment {
    /// Offset of a child of length `child` inside a parent of length `parent`.
    #[inline]
    pub fn offset(self, parent: f32, child: f32) -> f32 {
        match self {
            StackAlignment::Start => 0.0,
            StackAlignment::Center => (parent - child) / 2.0,
            StackAlignment::End => parent - child,
        }
    }
}

/// Main-axis arrangement strategy of a stack.
///
/// Realized by inserting weighted fillers, so it only has an effect when no
/// visible element is weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackArrangement {
    /// Pack elements at the start.
    Start,
    /// Center elements.
    Center,
    /// Pack elements at the end.
    End,
    /// Equal space between elements, none at the edges.
    #[default]
    SpaceBetween,
    /// Equal space on both sides of every element.
    SpaceAround,
    /// Equal space between elements and at both edges.
    SpaceEvenly,
}

/// 9-point alignment inside a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxAlignment {
    TopStart,
    TopCenter,
    TopEnd,
    MiddleStart,
    #[default]
    MiddleCenter,
    MiddleEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl BoxAlignment {
    pub const ALL: [BoxAlignment; 9] = [
        BoxAlignment::TopStart,
        BoxAlignment::TopCenter,
        BoxAlignment::TopEnd,
        BoxAlignment::MiddleStart,
        BoxAlignment::MiddleCenter,
        BoxAlignment::MiddleEnd,
        BoxAlignment::BottomStart,
        BoxAlignment::BottomCenter,
        BoxAlignment::BottomEnd,
    ];

    /// Horizontal component (start = left edge).
    pub fn horizontal(self) -> StackAlignment {
        match self {
            BoxAlignment::TopStart | BoxAlignment::MiddleStart | BoxAlignment::BottomStart => {
                StackAlignment::Start
            }
            BoxAlignment::TopCenter | BoxAlignment::MiddleCenter | BoxAlignment::BottomCenter => {
                StackAlignment::Center
            }
            BoxAlignment::TopEnd | BoxAlignment::MiddleEnd | BoxAlignment::BottomEnd => {
                StackAlignment::End
            }
        }
    }

    /// Vertical component (start = top edge).
    pub fn vertical(self) -> StackAlignment {
        match self {
            BoxAlignment::TopStart | BoxAlignment::TopCenter | BoxAlignment::TopEnd => {
                StackAlignment::Start
            }
            BoxAlignment::MiddleStart | BoxAlignment::MiddleCenter | BoxAlignment::MiddleEnd => {
                StackAlignment::Center
            }
            BoxAlignment::BottomStart | BoxAlignment::BottomCenter | BoxAlignment::BottomEnd => {
                StackAlignment::End
            }
        }
    }
}
