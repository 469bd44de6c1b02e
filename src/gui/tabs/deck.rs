use crate::content::{CaseMode, NumberRange, Rgb};
use crate::gui::{IndigoApp, Message, Tab};
use crate::navigator::OrderMode;
use iced::widget::{button, checkbox, column, container, pick_list, row, text, Space, Text};
use iced::{Alignment, Border, Color, Element, Length};

const CARD_BLUE: Color = Color {
    r: 0.0,
    g: 0.478,
    b: 1.0,
    a: 0.3,
};

pub fn view(app: &IndigoApp) -> Element<'_, Message> {
    let tab = app.current_tab;
    let controls = app.controls(tab);
    let snap = controls.snapshot();

    let (background, ink) = match tab {
        Tab::Colors => app
            .colors
            .current()
            .map(|swatch| swatch_colors(swatch.color))
            .unwrap_or((CARD_BLUE, Color::BLACK)),
        Tab::Alphabets | Tab::Numbers => (CARD_BLUE, Color::BLACK),
    };
    // Fade the face while the card is turning over
    let ink = if snap.flipping {
        Color { a: 0.25, ..ink }
    } else {
        ink
    };
    let size: f32 = if tab == Tab::Colors { 96.0 } else { 240.0 };
    let glyph = move |label: String, size: f32| -> Text<'static> {
        text(label)
            .size(size)
            .style(move |_| text::Style { color: Some(ink) })
    };

    // Spelled numbers show the digits with the word underneath
    let spelled = match tab {
        Tab::Numbers => app
            .numbers
            .current()
            .filter(|number| !number.spelling.is_empty()),
        Tab::Alphabets | Tab::Colors => None,
    };
    let face: Element<'_, Message> = match spelled {
        Some(number) => column![
            glyph(number.digits.clone(), 200.0),
            glyph(number.spelling.clone(), 72.0)
        ]
        .align_x(Alignment::Center)
        .into(),
        None => glyph(snap.label.clone(), size).into(),
    };

    let card = container(face)
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: Border {
            radius: 25.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    // Manual stepping is locked while auto-advance runs or a flip animates
    let can_step = !snap.playing && !snap.flipping;
    let transport = row![
        button(text("⏮").size(24))
            .padding(12)
            .on_press_maybe(can_step.then_some(Message::Previous)),
        button(text(if snap.playing { "⏸" } else { "▶" }).size(24))
            .padding(12)
            .style(button::primary)
            .on_press(Message::TogglePlay),
        button(text("⏭").size(24))
            .padding(12)
            .on_press_maybe(can_step.then_some(Message::Next)),
    ]
    .spacing(30)
    .align_y(Alignment::Center);

    let mut settings = column![
        pick_list(
            controls.languages(),
            Some(snap.language.clone()),
            Message::LanguageSelected
        )
        .width(Length::Fill),
        pick_list(OrderMode::ALL, Some(snap.order), Message::OrderSelected).width(Length::Fill),
        checkbox("Audio", snap.audio_enabled).on_toggle(Message::AudioToggled),
    ]
    .spacing(10);

    settings = match tab {
        Tab::Alphabets => settings.push(
            pick_list(
                CaseMode::ALL,
                Some(app.alphabets.case_mode()),
                Message::CaseSelected,
            )
            .width(Length::Fill),
        ),
        Tab::Numbers => settings.push(
            pick_list(
                NumberRange::ALL,
                Some(app.numbers.range()),
                Message::RangeSelected,
            )
            .width(Length::Fill),
        ),
        Tab::Colors => settings,
    };

    let progress = text(format!("{} / {}", snap.position + 1, snap.count)).style(text::secondary);

    let panel = column![transport, progress, Space::with_height(20), settings]
        .spacing(15)
        .width(Length::Fixed(250.0))
        .align_x(Alignment::Center);

    row![
        column![text(tab.to_string()).size(40), card]
            .spacing(20)
            .width(Length::FillPortion(3)),
        panel,
    ]
    .spacing(20)
    .into()
}

fn swatch_colors(rgb: Rgb) -> (Color, Color) {
    let fill = Color::from_rgb8(rgb.r, rgb.g, rgb.b);
    let ink = if rgb.is_light() {
        Color::BLACK
    } else {
        Color::WHITE
    };
    (fill, ink)
}
