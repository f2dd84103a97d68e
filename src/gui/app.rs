use std::sync::Arc;

use iced::{Element, Task, Theme, widget::column};
use tracing::warn;

use crate::config::{Config, REPOSITORY_URL};
use crate::core::api::HttpQuantityStore;
use crate::core::auth::AuthStore;
use crate::core::{countries, model::CountryRef, view};
use crate::gui::Message;
use crate::gui::screens::{Screen, ScreenData, ScreenMessage, loading::LoadingScreen};
use crate::gui::state::AppState;
use crate::gui::widgets::header::{self, HeaderEvent, NavTarget};

pub struct TallymapApp {
    state: AppState,
    screen: ScreenData,
}

/// Opens the dashboard window and runs until the user closes it.
pub fn run(config: Config, auth: Box<dyn AuthStore>) -> anyhow::Result<()> {
    let catalog = Arc::new(countries::load_catalog()?);
    // `iced::application` requires a `Fn` boot closure, but the app's initial
    // state (notably the non-`Clone` `auth`) can only be built once. Stash the
    // inputs in a cell and take them on the single boot call iced performs.
    let boot = std::cell::RefCell::new(Some((config, auth, catalog)));
    iced::application(
        move || {
            let (config, auth, catalog) =
                boot.borrow_mut().take().expect("boot called more than once");
            TallymapApp::new(config, auth, catalog)
        },
        TallymapApp::update,
        TallymapApp::view,
    )
    .title(TallymapApp::title)
    .theme(TallymapApp::theme)
    .run()?;
    Ok(())
}

impl TallymapApp {
    fn new(
        config: Config,
        auth: Box<dyn AuthStore>,
        catalog: Arc<Vec<CountryRef>>,
    ) -> (Self, Task<Message>) {
        let store = HttpQuantityStore::new(config.api_url.clone());
        let state = AppState {
            config,
            store: store.clone(),
            catalog: catalog.clone(),
            auth,
            menu_open: false,
        };
        let app = Self {
            state,
            screen: ScreenData::Loading(LoadingScreen),
        };
        let initial_fetch = Task::perform(
            async move {
                view::refresh(&store, &catalog)
                    .await
                    .map_err(|error| error.to_string())
            },
            Message::Loaded,
        );
        (app, initial_fetch)
    }

    fn title(&self) -> String {
        "Tallymap - Country Quantity Tracker".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(event) => self.on_header_event(event),
            message => self
                .screen
                .update(message, &mut self.state)
                .map(unwrap_screen),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header =
            header::header(&self.state.auth.snapshot(), self.state.menu_open).map(Message::Header);
        let content = self.screen.view().map(unwrap_screen);
        column![header, content].into()
    }

    fn on_header_event(&mut self, event: HeaderEvent) -> Task<Message> {
        match event {
            HeaderEvent::MenuToggled => {
                self.state.menu_open = !self.state.menu_open;
            }
            HeaderEvent::LogoutPressed => {
                self.state.auth.logout();
                self.state.menu_open = false;
            }
            HeaderEvent::LinkPressed(target) => {
                let url = match target {
                    NavTarget::Home => self.state.config.site_url.clone(),
                    NavTarget::Login => self.state.config.site_page("login"),
                    NavTarget::Register => self.state.config.site_page("register"),
                    NavTarget::Repository => REPOSITORY_URL.to_string(),
                };
                if let Err(error) = open::that_detached(&url) {
                    warn!(url = %url, error = %error, "failed to open link in browser");
                }
                self.state.menu_open = false;
            }
        }
        Task::none()
    }
}

fn unwrap_screen(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
