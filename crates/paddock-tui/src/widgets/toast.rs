//! Toast rendering for the shared alert queue.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use paddock_core::{Alert, AlertKind};

use crate::theme;

/// Stack the currently visible alerts in the top-right corner.
///
/// Alerts display in arrival order, newest at the bottom; eviction is
/// handled by the queue itself.
pub fn render_toasts(frame: &mut Frame, area: Rect, alerts: &[Alert]) {
    let width = 46u16.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }
    let x = area.x + area.width.saturating_sub(width + 1);

    let mut y = area.y + 1;
    for alert in alerts {
        if y + 3 > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(x, y, width, 3);
        let style = match alert.kind {
            AlertKind::Success => theme::alert_success(),
            AlertKind::Error => theme::alert_error(),
            AlertKind::Warning => theme::alert_warning(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(ratatui::style::Style::default().bg(theme::BG_DARK));
        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);
        frame.render_widget(
            Paragraph::new(Line::styled(truncated(&alert.message, inner.width), style)),
            inner,
        );
        y += 3;
    }
}

fn truncated(message: &str, width: u16) -> String {
    let width = usize::from(width);
    if message.chars().count() <= width {
        message.to_owned()
    } else {
        let cut: String = message.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_preserves_short_messages() {
        assert_eq!(truncated("saved", 10), "saved");
        assert_eq!(truncated("a very long message indeed", 10), "a very lo…");
    }
}
