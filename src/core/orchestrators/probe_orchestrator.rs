use std::sync::Arc;

use iced::widget::{button, canvas, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Task};

use crate::core::interfaces::adapters::ClipboardWriter;
use crate::core::interfaces::ports::{GlobalInputEvent, MousePositionProvider};
use crate::core::models::{CursorSample, Palette, PixelColor, ProbeSettings, ScreenPoint};
use crate::core::services::{
    ActivationOutcome, CopyLabelResets, CopyTarget, ProbeUpdate, SelectionController,
    SelectionStep, SessionOutcome, ViewportFrame,
};
use crate::global_constants::{
    APPLICATION_TITLE, HOTKEY_ACTIVATE, LOG_TAG_ORCHESTRATOR, PALETTE_SWATCH_SIZE,
    PALETTE_SWATCH_SPACING, USER_MESSAGE_PICKED, USER_MESSAGE_READY, USER_MESSAGE_SELECTING,
};
use crate::presentation::app_theme;
use crate::presentation::ViewportCanvas;

#[derive(Debug, Clone)]
pub enum ProbeMessage {
    StartSelection,
    GlobalInput(GlobalInputEvent),
    CopyRequested(CopyTarget),
    ResetCopyLabel(CopyTarget, u64),
    PaletteSwatchSelected(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

pub struct ProbeOrchestrator {
    controller: SelectionController,
    mouse_provider: Arc<dyn MousePositionProvider>,
    clipboard: Arc<dyn ClipboardWriter>,
    settings: ProbeSettings,
    palette: Palette,
    current_color: PixelColor,
    probe_position: Option<CursorSample>,
    viewport_frame: Option<ViewportFrame>,
    copy_labels: CopyLabelResets,
    status: String,
    status_kind: StatusKind,
}

impl ProbeOrchestrator {
    pub fn build(
        controller: SelectionController,
        mouse_provider: Arc<dyn MousePositionProvider>,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: ProbeSettings,
    ) -> Self {
        Self {
            controller,
            mouse_provider,
            clipboard,
            settings,
            palette: Palette::default(),
            current_color: PixelColor::SENTINEL,
            probe_position: None,
            viewport_frame: None,
            copy_labels: CopyLabelResets::default(),
            status: USER_MESSAGE_READY.to_string(),
            status_kind: StatusKind::Info,
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.controller.is_selecting()
    }

    pub fn current_color(&self) -> PixelColor {
        self.current_color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_kind(&self) -> StatusKind {
        self.status_kind
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status_kind = kind;
        self.status = text.into();
    }

    pub fn copy_label(&self, target: CopyTarget) -> &'static str {
        self.copy_labels.label(target)
    }

    pub fn viewport_frame(&self) -> Option<&ViewportFrame> {
        self.viewport_frame.as_ref()
    }

    pub fn update(&mut self, message: ProbeMessage) -> Task<ProbeMessage> {
        match &message {
            ProbeMessage::GlobalInput(GlobalInputEvent::PointerMoved { .. }) => {
                log::trace!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message)
            }
            _ => log::debug!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message),
        }

        match message {
            ProbeMessage::StartSelection => self.handle_start_selection(),
            ProbeMessage::GlobalInput(event) => self.handle_global_input(event),
            ProbeMessage::CopyRequested(target) => self.handle_copy_requested(target),
            ProbeMessage::ResetCopyLabel(target, generation) => {
                self.handle_reset_copy_label(target, generation)
            }
            ProbeMessage::PaletteSwatchSelected(index) => self.handle_palette_swatch_selected(index),
        }
    }

    fn handle_start_selection(&mut self) -> Task<ProbeMessage> {
        if self.controller.is_selecting() {
            log::debug!("{} Selection already running", LOG_TAG_ORCHESTRATOR);
            return Task::none();
        }

        let start_point = self
            .mouse_provider
            .get_current_mouse_position()
            .unwrap_or_else(|error| {
                log::warn!(
                    "{} {}, starting at the origin",
                    LOG_TAG_ORCHESTRATOR,
                    error
                );
                ScreenPoint::default_origin()
            });

        match self.controller.activate(start_point) {
            Ok(ActivationOutcome::Started(update)) => {
                log::info!("{} Selection started", LOG_TAG_ORCHESTRATOR);
                self.apply_probe_update(update);
                self.set_status(StatusKind::Info, USER_MESSAGE_SELECTING);
            }
            Ok(ActivationOutcome::AlreadySelecting) => {}
            Err(error) => {
                log::error!("{} Failed to start selection: {}", LOG_TAG_ORCHESTRATOR, error);
                self.set_status(StatusKind::Error, error.to_string());
            }
        }

        Task::none()
    }

    fn handle_global_input(&mut self, event: GlobalInputEvent) -> Task<ProbeMessage> {
        match self.controller.handle_input(event) {
            SelectionStep::Ignored => {}
            SelectionStep::Updated(update) => self.apply_probe_update(update),
            SelectionStep::Finished(outcome) => self.commit_outcome(outcome),
        }

        Task::none()
    }

    fn apply_probe_update(&mut self, update: ProbeUpdate) {
        self.current_color = update.color();
        self.probe_position = Some(update.cursor);
        self.viewport_frame = Some(update.frame);
    }

    fn commit_outcome(&mut self, outcome: SessionOutcome) {
        log::info!(
            "{} Selection finished by {:?}, committing {}",
            LOG_TAG_ORCHESTRATOR,
            outcome.reason,
            outcome.color.to_hex()
        );

        self.current_color = outcome.color;
        self.palette.append(outcome.color);
        self.set_status(StatusKind::Info, USER_MESSAGE_PICKED);
    }

    fn formatted_color(&self, target: CopyTarget) -> String {
        match target {
            CopyTarget::Hex => self.current_color.to_hex(),
            CopyTarget::Rgb => self.current_color.to_rgb_string(),
            CopyTarget::Hsl => self.current_color.to_hsl_string(),
        }
    }

    fn handle_copy_requested(&mut self, target: CopyTarget) -> Task<ProbeMessage> {
        let formatted = self.formatted_color(target);

        if let Err(error) = self.clipboard.write_text(&formatted) {
            log::error!("{} Failed to copy {}: {:#}", LOG_TAG_ORCHESTRATOR, formatted, error);
            self.set_status(StatusKind::Error, format!("{:#}", error));
            return Task::none();
        }

        let generation = self.copy_labels.schedule(target);
        let reset_delay = self.settings.copy_label_reset();

        Task::future(async move {
            tokio::time::sleep(reset_delay).await;
            ProbeMessage::ResetCopyLabel(target, generation)
        })
    }

    fn handle_reset_copy_label(&mut self, target: CopyTarget, generation: u64) -> Task<ProbeMessage> {
        if !self.copy_labels.expire(target, generation) {
            log::debug!(
                "{} Ignoring superseded label reset for {:?}",
                LOG_TAG_ORCHESTRATOR,
                target
            );
        }

        Task::none()
    }

    fn handle_palette_swatch_selected(&mut self, index: usize) -> Task<ProbeMessage> {
        match self.palette.get(index) {
            Some(color) => {
                log::debug!("{} Reselected {}", LOG_TAG_ORCHESTRATOR, color.to_hex());
                self.current_color = color;
            }
            None => log::warn!("{} No palette entry at {}", LOG_TAG_ORCHESTRATOR, index),
        }

        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, ProbeMessage> {
        let zoom = self.controller.zoom();

        let magnifier = canvas(ViewportCanvas::new(self.viewport_frame.as_ref()))
            .width(Length::Fixed(zoom.viewport_width() as f32))
            .height(Length::Fixed(zoom.viewport_height() as f32));

        let content = column![
            text(APPLICATION_TITLE).size(24),
            row![magnifier, self.render_color_readout()]
                .spacing(20)
                .align_y(Alignment::Start),
            self.render_start_button(),
            self.render_palette(),
            self.render_status_line(),
        ]
        .spacing(16)
        .padding(24);

        let theme = app_theme::get_theme(&self.settings.theme_mode);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_color_readout(&self) -> Element<'_, ProbeMessage> {
        let swatch_color = app_theme::to_iced_color(self.current_color);
        let swatch = container(Space::new())
            .width(Length::Fixed(96.0))
            .height(Length::Fixed(48.0))
            .style(move |_theme| iced::widget::container::Style {
                background: Some(Background::Color(swatch_color)),
                border: Border {
                    color: Color::from_rgb(0.4, 0.4, 0.4),
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        let position = match &self.probe_position {
            Some(cursor) => format!(
                "{} ({}, {})",
                cursor.surface.name, cursor.local_x, cursor.local_y
            ),
            None => String::new(),
        };

        column![
            swatch,
            self.render_copy_row(CopyTarget::Hex),
            self.render_copy_row(CopyTarget::Rgb),
            self.render_copy_row(CopyTarget::Hsl),
            text(position)
                .size(12)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
                }),
        ]
        .spacing(8)
        .into()
    }

    fn render_copy_row(&self, target: CopyTarget) -> Element<'_, ProbeMessage> {
        row![
            text(self.formatted_color(target))
                .size(14)
                .width(Length::Fixed(150.0)),
            button(text(self.copy_labels.label(target)).size(12))
                .padding([4, 12])
                .style(app_theme::secondary_button_style)
                .on_press(ProbeMessage::CopyRequested(target)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }

    fn render_start_button(&self) -> Element<'_, ProbeMessage> {
        let enabled = self.controller.is_activation_enabled();

        column![
            button(text("get a color").size(16))
                .padding([10, 32])
                .style(app_theme::primary_button_style)
                .on_press_maybe(enabled.then_some(ProbeMessage::StartSelection)),
            text(format!("or press {} while this window is focused", HOTKEY_ACTIVATE))
                .size(12)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                }),
        ]
        .spacing(6)
        .into()
    }

    fn render_palette(&self) -> Element<'_, ProbeMessage> {
        let rows = self
            .palette
            .rows(self.settings.palette_columns)
            .into_iter()
            .map(|swatches| {
                row(swatches.into_iter().map(|(index, color)| {
                    button(Space::new())
                        .width(Length::Fixed(PALETTE_SWATCH_SIZE))
                        .height(Length::Fixed(PALETTE_SWATCH_SIZE))
                        .style(app_theme::swatch_button_style(color))
                        .on_press(ProbeMessage::PaletteSwatchSelected(index))
                        .into()
                }))
                .spacing(PALETTE_SWATCH_SPACING)
                .into()
            });

        column(rows).spacing(PALETTE_SWATCH_SPACING).into()
    }

    fn render_status_line(&self) -> Element<'_, ProbeMessage> {
        let status_color = match self.status_kind {
            StatusKind::Error => Color::from_rgb(1.0, 0.3, 0.3),
            StatusKind::Info => Color::from_rgba(0.6, 0.6, 0.6, 1.0),
        };

        text(&self.status)
            .size(13)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(status_color),
            })
            .into()
    }
}
