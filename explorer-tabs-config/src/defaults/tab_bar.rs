//! Default values for tab sizing and tab bar style settings.

pub fn tab_auto_size() -> bool {
    true
}

pub fn tab_fixed_width() -> u32 {
    180
}

pub fn tab_fixed_height() -> u32 {
    32
}

pub fn tab_padding_x() -> u32 {
    14
}

pub fn tab_padding_y() -> u32 {
    6
}

pub fn tab_spacing() -> u32 {
    6
}

pub fn group_spacing() -> u32 {
    14
}

pub fn group_handle_width() -> u32 {
    8
}

pub fn tab_margin() -> u32 {
    6
}

pub fn row_spacing() -> u32 {
    6
}

pub fn min_tab_width() -> u32 {
    120
}

pub fn max_tab_width() -> u32 {
    280
}

pub fn max_rows() -> u32 {
    10
}
