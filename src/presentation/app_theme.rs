use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::{PixelColor, ThemeMode};

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.09),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn to_iced_color(color: PixelColor) -> Color {
    Color::from_rgb8(color.red, color.green, color.blue)
}

fn filled_style(fill: Color, text_color: Color, border_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_style(
            Color::from_rgb(0.098, 0.529, 0.329),
            Color::WHITE,
            Color::from_rgb(0.098, 0.529, 0.329),
            false,
        ),
        button::Status::Hovered => filled_style(
            Color::from_rgb(0.122, 0.655, 0.408),
            Color::WHITE,
            Color::from_rgb(0.122, 0.655, 0.408),
            false,
        ),
        button::Status::Pressed => filled_style(
            Color::from_rgb(0.078, 0.420, 0.263),
            Color::WHITE,
            Color::from_rgb(0.078, 0.420, 0.263),
            true,
        ),
        button::Status::Disabled => filled_style(
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.5, 0.5, 0.5),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_style(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.7, 0.7, 0.7),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
        button::Status::Hovered => filled_style(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.9, 0.9, 0.9),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
        button::Status::Pressed => filled_style(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.35, 0.35, 0.35),
            true,
        ),
        button::Status::Disabled => filled_style(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.4, 0.4, 0.4),
            Color::from_rgb(0.3, 0.3, 0.3),
            false,
        ),
    }
}

/// Palette swatch: the color itself, outlined brighter on hover.
pub fn swatch_button_style(
    color: PixelColor,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => Color::WHITE,
            _ => Color::from_rgb(0.4, 0.4, 0.4),
        };

        button::Style {
            background: Some(Background::Color(to_iced_color(color))),
            text_color: Color::TRANSPARENT,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 2.0.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
