use ratatui::style::{Color, Modifier, Style};

use paydeck_common::PaymentStatus;

use crate::config::{Rgb, ThemeColors};

/// Theme colors resolved to ratatui styles.
pub struct TuiTheme {
    pub header: Style,
    pub muted: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl From<&ThemeColors> for TuiTheme {
    fn from(colors: &ThemeColors) -> Self {
        Self {
            header: Style::default()
                .fg(color(colors.header))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(color(colors.muted)),
            success: Style::default().fg(color(colors.success)),
            warning: Style::default().fg(color(colors.warning)),
            error: Style::default().fg(color(colors.error)),
            info: Style::default().fg(color(colors.info)),
        }
    }
}

impl TuiTheme {
    pub fn status_style(&self, status: PaymentStatus) -> Style {
        match status {
            PaymentStatus::Completed => self.success,
            PaymentStatus::Pending => self.warning,
            PaymentStatus::Failed => self.error,
            PaymentStatus::Scheduled => self.info,
            PaymentStatus::Cancelled => self.muted,
        }
    }
}
