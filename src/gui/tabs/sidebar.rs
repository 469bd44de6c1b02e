use crate::gui::{IndigoApp, Message, Tab};
use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length};

pub fn view(app: &IndigoApp) -> Element<'static, Message> {
    let mut tabs = column![text("Indigo").size(28), Space::with_height(10)]
        .spacing(5)
        .padding(10);

    for tab in Tab::ALL {
        tabs = tabs.push(tab_button(app, tab));
    }

    tabs = tabs.push(Space::with_height(Length::Fill)).push(
        text(concat!("v", env!("CARGO_PKG_VERSION")))
            .size(12)
            .style(text::secondary),
    );

    container(tabs)
        .width(Length::Fixed(180.0))
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn tab_button(app: &IndigoApp, tab: Tab) -> Element<'static, Message> {
    let is_selected = app.current_tab == tab;

    button(text(format!("{} {}", tab.icon(), tab)))
        .width(Length::Fill)
        .padding(10)
        .style(if is_selected {
            button::primary
        } else {
            button::secondary
        })
        .on_press(Message::TabSelected(tab))
        .into()
}
