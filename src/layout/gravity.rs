use tracing::warn;

use crate::foundation::core::Point;

/// Parsed gravity keyword: an optional anchor per axis.
///
/// An unset axis centers along that axis, so the default value is
/// centered-on-both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gravity {
    vertical: Option<VerticalAnchor>,
    horizontal: Option<HorizontalAnchor>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerticalAnchor {
    North,
    South,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HorizontalAnchor {
    East,
    West,
}

impl Gravity {
    /// Parse a gravity keyword; `None` when the input is unparseable.
    ///
    /// Case-insensitive, whitespace-separated tokens. A vertical token
    /// (`n`/`north`/`s`/`south`) and a horizontal token
    /// (`e`/`east`/`w`/`west`) may appear in either order; alternatively a
    /// single `m`/`middle`/`c`/`center` token selects centered-on-both.
    pub fn parse(input: &str) -> Option<Self> {
        let lower = input.trim().to_ascii_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        if tokens.len() == 1 && matches!(tokens[0], "m" | "middle" | "c" | "center") {
            return Some(Self::default());
        }

        let mut gravity = Self::default();
        for token in tokens {
            match token {
                "n" | "north" => set_once(&mut gravity.vertical, VerticalAnchor::North)?,
                "s" | "south" => set_once(&mut gravity.vertical, VerticalAnchor::South)?,
                "e" | "east" => set_once(&mut gravity.horizontal, HorizontalAnchor::East)?,
                "w" | "west" => set_once(&mut gravity.horizontal, HorizontalAnchor::West)?,
                _ => return None,
            }
        }
        Some(gravity)
    }

    /// Top-left offset for content with the given slack on each axis.
    ///
    /// The mapping is fixed: north puts content at y = 0, south at
    /// y = slack; east puts content at x = 0, west at x = slack (the canvas
    /// left-origin convention, not geographic translation).
    pub fn offset(self, slack_x: f64, slack_y: f64) -> Point {
        let x = match self.horizontal {
            None => slack_x / 2.0,
            Some(HorizontalAnchor::East) => 0.0,
            Some(HorizontalAnchor::West) => slack_x,
        };
        let y = match self.vertical {
            None => slack_y / 2.0,
            Some(VerticalAnchor::North) => 0.0,
            Some(VerticalAnchor::South) => slack_y,
        };
        Point::new(x, y)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Option<()> {
    if slot.is_some() {
        return None;
    }
    *slot = Some(value);
    Some(())
}

/// Resolve a gravity keyword to a placement offset.
///
/// Absent input centers on both axes; unparseable input warns and falls back
/// to centered placement.
pub fn resolve_gravity(slack_x: f64, slack_y: f64, gravity: Option<&str>) -> Point {
    let parsed = match gravity {
        None => Gravity::default(),
        Some(raw) => Gravity::parse(raw).unwrap_or_else(|| {
            warn!(gravity = raw, "invalid gravity specified, using centered placement");
            Gravity::default()
        }),
    };
    parsed.offset(slack_x, slack_y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/gravity.rs"]
mod tests;
