//! Named view over a positional computed-style row.
//!
//! Snapshot rows are plain index arrays whose meaning depends on the order
//! of `TRACKED_PROPERTIES`. Everything downstream reads `ComputedStyle`
//! fields instead of positions.

use super::snapshot::{StringIndex, StringTable};
use crate::utils::config::{ABSENT_INDEX, TRACKED_PROPERTIES};

/// Border side and its (width, color) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSide<'a> {
    pub width: Option<&'a str>,
    pub color: Option<&'a str>,
}

/// Resolved computed style of one laid-out element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedStyle<'a> {
    pub background_color: Option<&'a str>,
    pub color: Option<&'a str>,
    pub fill: Option<&'a str>,
    pub border_top_width: Option<&'a str>,
    pub border_top_color: Option<&'a str>,
    pub border_bottom_width: Option<&'a str>,
    pub border_bottom_color: Option<&'a str>,
    pub border_left_width: Option<&'a str>,
    pub border_left_color: Option<&'a str>,
    pub border_right_width: Option<&'a str>,
    pub border_right_color: Option<&'a str>,
    pub font_family: Option<&'a str>,
    pub font_size: Option<&'a str>,
    pub font_weight: Option<&'a str>,
    pub line_height: Option<&'a str>,
    pub position: Option<&'a str>,
    pub top: Option<&'a str>,
    pub right: Option<&'a str>,
    pub bottom: Option<&'a str>,
    pub left: Option<&'a str>,
    pub display: Option<&'a str>,
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
    pub vertical_align: Option<&'a str>,
}

impl<'a> ComputedStyle<'a> {
    /// Resolve a style row against the string table
    ///
    /// Short rows are padded with "absent"; extra trailing indices are ignored.
    pub fn from_row(row: &[StringIndex], strings: &'a StringTable) -> Self {
        let mut values = [None; TRACKED_PROPERTIES.len()];
        for (slot, &index) in values.iter_mut().zip(row.iter()) {
            if index != ABSENT_INDEX {
                *slot = strings.get(index);
            }
        }

        let [background_color, color, fill, border_top_width, border_top_color, border_bottom_width, border_bottom_color, border_left_width, border_left_color, border_right_width, border_right_color, font_family, font_size, font_weight, line_height, position, top, right, bottom, left, display, width, height, vertical_align] =
            values;

        Self {
            background_color,
            color,
            fill,
            border_top_width,
            border_top_color,
            border_bottom_width,
            border_bottom_color,
            border_left_width,
            border_left_color,
            border_right_width,
            border_right_color,
            font_family,
            font_size,
            font_weight,
            line_height,
            position,
            top,
            right,
            bottom,
            left,
            display,
            width,
            height,
            vertical_align,
        }
    }

    /// Top, bottom, left, right borders in that order
    pub fn borders(&self) -> [BorderSide<'a>; 4] {
        [
            BorderSide {
                width: self.border_top_width,
                color: self.border_top_color,
            },
            BorderSide {
                width: self.border_bottom_width,
                color: self.border_bottom_color,
            },
            BorderSide {
                width: self.border_left_width,
                color: self.border_left_color,
            },
            BorderSide {
                width: self.border_right_width,
                color: self.border_right_color,
            },
        ]
    }

    /// Values in `TRACKED_PROPERTIES` order
    fn values(&self) -> [Option<&'a str>; 24] {
        [
            self.background_color,
            self.color,
            self.fill,
            self.border_top_width,
            self.border_top_color,
            self.border_bottom_width,
            self.border_bottom_color,
            self.border_left_width,
            self.border_left_color,
            self.border_right_width,
            self.border_right_color,
            self.font_family,
            self.font_size,
            self.font_weight,
            self.line_height,
            self.position,
            self.top,
            self.right,
            self.bottom,
            self.left,
            self.display,
            self.width,
            self.height,
            self.vertical_align,
        ]
    }

    /// Present `(property, value)` pairs
    pub fn declarations(&self) -> Vec<(&'static str, &'a str)> {
        TRACKED_PROPERTIES
            .iter()
            .zip(self.values())
            .filter_map(|(&name, value)| value.map(|v| (name, v)))
            .collect()
    }
}
