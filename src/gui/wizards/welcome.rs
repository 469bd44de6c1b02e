use crate::gui::Message;
use iced::widget::{button, column, container, text, Row, Space};
use iced::{Alignment, Color, Element, Length};

/// One page of the first-run tour
struct WelcomePage {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PAGES: &[WelcomePage] = &[
    WelcomePage {
        icon: "🎓",
        title: "Welcome to Indigo!",
        description: "Your fun learning companion",
    },
    WelcomePage {
        icon: "🔤",
        title: "Alphabets",
        description: "Master letters in multiple languages",
    },
    WelcomePage {
        icon: "🔢",
        title: "Numbers",
        description: "Count and spell numbers easily",
    },
    WelcomePage {
        icon: "🎨",
        title: "Colors",
        description: "Explore a world of colors",
    },
];

const INDIGO: Color = Color::from_rgb(0.294, 0.0, 0.51);

#[derive(Debug, Clone, Default)]
pub struct WelcomeWizard {
    pub page: usize,
}

#[derive(Debug, Clone)]
pub enum WelcomeMessage {
    NextPage,
    GetStarted,
}

impl WelcomeWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= PAGES.len()
    }

    /// Advance one page; stays on the last page
    pub fn next_page(&mut self) {
        if !self.is_last_page() {
            self.page += 1;
        }
    }

    pub fn view<'a>(&self) -> Element<'a, Message> {
        let page = &PAGES[self.page.min(PAGES.len() - 1)];
        let white = |_: &iced::Theme| text::Style {
            color: Some(Color::WHITE),
        };

        let dots: Vec<Element<Message>> = (0..PAGES.len())
            .map(|i| {
                let dot = if i == self.page { "●" } else { "○" };
                text(dot).size(14).style(white).into()
            })
            .collect();

        let action_button = if self.is_last_page() {
            button(text("Get Started").size(20))
                .padding(14)
                .on_press(Message::Welcome(WelcomeMessage::GetStarted))
        } else {
            button(text("Next").size(20))
                .padding(14)
                .on_press(Message::Welcome(WelcomeMessage::NextPage))
        };

        let content = column![
            text(page.icon).size(80),
            text(page.title).size(40).style(white),
            text(page.description).size(22).style(white),
            Space::with_height(20),
            Row::with_children(dots).spacing(8),
            action_button,
        ]
        .align_x(Alignment::Center)
        .spacing(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_| container::Style {
                background: Some(INDIGO.into()),
                ..Default::default()
            })
            .into()
    }
}
