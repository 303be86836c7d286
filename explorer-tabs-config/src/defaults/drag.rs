//! Default values for pointer drag behaviour.

/// Horizontal drag-start distance in pixels (the Windows `SM_CXDRAG` default).
pub fn drag_threshold_x() -> u32 {
    4
}

/// Vertical drag-start distance in pixels (the Windows `SM_CYDRAG` default).
pub fn drag_threshold_y() -> u32 {
    4
}

/// How far outside the bar's vertical bounds a dragged tab must travel before
/// releasing it opens the tab in a new window.
pub fn detach_threshold() -> u32 {
    40
}
