//! Content handles.
//!
//! The engines never own or inspect real content. They only need to read a
//! frame, write a frame, and toggle visibility, which is what
//! [`LayoutContent`] captures. Host toolkits implement it for their view type;
//! [`Surface`] is a headless implementation for tests and documents.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

/// Capability contract a layoutable leaf must provide.
pub trait LayoutContent {
    /// Current frame in the parent's coordinate space.
    fn frame(&self) -> Rect;

    /// Replace the frame.
    fn set_frame(&mut self, frame: Rect);

    /// Show or hide the content.
    fn set_hidden(&mut self, hidden: bool);
}

impl<T: LayoutContent + ?Sized> LayoutContent for &mut T {
    fn frame(&self) -> Rect {
        (**self).frame()
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }

    fn set_hidden(&mut self, hidden: bool) {
        (**self).set_hidden(hidden);
    }
}

impl<T: LayoutContent + ?Sized> LayoutContent for Box<T> {
    fn frame(&self) -> Rect {
        (**self).frame()
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }

    fn set_hidden(&mut self, hidden: bool) {
        (**self).set_hidden(hidden);
    }
}

/// Shared handles, for hosts where the view is also referenced elsewhere.
///
/// Must not be borrowed mutably elsewhere while a layout pass runs.
impl<T: LayoutContent + ?Sized> LayoutContent for Rc<RefCell<T>> {
    fn frame(&self) -> Rect {
        self.borrow().frame()
    }

    fn set_frame(&mut self, frame: Rect) {
        self.borrow_mut().set_frame(frame);
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.borrow_mut().set_hidden(hidden);
    }
}

/// Headless content: a frame and a visibility flag, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Surface {
    #[serde(default)]
    pub frame: Rect,
    #[serde(default)]
    pub hidden: bool,
}

impl Surface {
    /// Create visible content with the given frame.
    pub fn new(frame: Rect) -> Self {
        Self { frame, hidden: false }
    }

    /// Create visible content at the origin with the given size.
    ///
    /// Useful for `Copy` sizing, which reads the existing size.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    pub fn size(&self) -> Size {
        self.frame.size()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl LayoutContent for Surface {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
