use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.bottom();

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(bounds.bottom().saturating_sub(popup_y)),
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Place a popup below the anchor, flipping above when it only fits there
pub fn dropdown_popup(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let room_below = bounds.bottom().saturating_sub(anchor.bottom());
    let room_above = anchor.y.saturating_sub(bounds.y);

    if room_below >= height || room_below >= room_above {
        popup_below_anchor(anchor, bounds, width, height, x_offset)
    } else {
        popup_above_anchor(anchor, width, height, x_offset)
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
