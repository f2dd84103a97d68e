pub mod dashboard;
pub mod loading;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Loading(loading::LoadingScreen),
    Dashboard(dashboard::DashboardScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Loading(screen) => screen.view().map(Message::Loading),
            ScreenData::Dashboard(screen) => screen.view().map(Message::Dashboard),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (screen, Message::Loaded(result)) => {
                *screen =
                    ScreenData::Dashboard(dashboard::DashboardScreen::from_initial(state, result));
                Task::none()
            }
            (ScreenData::Dashboard(screen), Message::Dashboard(message)) => match message {
                ScreenMessage::ScreenMessage(message) => screen
                    .update(message, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(message) => match message {},
            },
            _ => Task::none(),
        }
    }
}
