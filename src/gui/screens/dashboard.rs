use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, space, text, text_input},
};
use tracing::error;

use crate::core::api::QuantityStore;
use crate::core::model::ViewCountry;
use crate::core::{countries, view};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// The country quantity view: merged list, search box, aggregates, and an
/// increment button per row.
#[derive(Debug, Clone)]
pub struct DashboardScreen {
    countries: Vec<ViewCountry>,
    search_query: String,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    SearchChanged(String),
    IncrementPressed(String),
    Submitted(Result<(), String>),
    Refreshed(Result<Vec<ViewCountry>, String>),
}

#[derive(Debug, Clone)]
pub enum DashboardParentMessage {}

impl DashboardScreen {
    /// Builds the screen from the initial fetch result. A failed fetch still
    /// shows the full catalog (all quantities zero) behind an error banner.
    pub fn from_initial(state: &AppState, result: Result<Vec<ViewCountry>, String>) -> Self {
        match result {
            Ok(countries) => Self {
                countries,
                search_query: String::new(),
                error: None,
            },
            Err(message) => {
                error!(error = %message, "initial quantity fetch failed");
                Self {
                    countries: view::merge_quantities(&state.catalog, &[]),
                    search_query: String::new(),
                    error: Some(message),
                }
            }
        }
    }

    fn start_refresh(&self, state: &AppState) -> Task<ScreenMessage<Self>> {
        let store = state.store.clone();
        let catalog = state.catalog.clone();
        Task::perform(
            async move {
                view::refresh(&store, &catalog)
                    .await
                    .map_err(|error| error.to_string())
            },
            |result| ScreenMessage::ScreenMessage(DashboardMessage::Refreshed(result)),
        )
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = DashboardParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let search = text_input("Search for a country", &self.search_query)
            .on_input(|query| ScreenMessage::ScreenMessage(DashboardMessage::SearchChanged(query)))
            .padding(10);

        let total = view::total_quantity(&self.countries);
        let mut summary = column![text(format!("Total quantity: {total}")).size(18)].spacing(5);
        if let Some(leader) = view::max_quantity_country(&self.countries) {
            summary = summary.push(text(format!(
                "Top country: {} ({})",
                leader.name, leader.quantity
            )));
        }

        let rows = column(
            view::filter_countries(&self.countries, &self.search_query)
                .into_iter()
                .map(country_row),
        )
        .spacing(2);

        let mut content = column![search].spacing(15).padding(20);
        if let Some(message) = &self.error {
            content = content.push(
                container(text(message.clone()).style(text::danger))
                    .padding(10)
                    .width(Length::Fill)
                    .style(container::bordered_box),
            );
        }
        content = content
            .push(summary)
            .push(scrollable(rows).height(Length::Fill));

        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DashboardMessage::SearchChanged(query) => {
                self.search_query = query;
                Task::none()
            }
            DashboardMessage::IncrementPressed(name) => {
                let store = state.store.clone();
                Task::perform(
                    async move {
                        store
                            .add_or_update(&name)
                            .await
                            .map(drop)
                            .map_err(|error| error.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(DashboardMessage::Submitted(result)),
                )
            }
            DashboardMessage::Submitted(Ok(())) => self.start_refresh(state),
            DashboardMessage::Submitted(Err(message)) => {
                error!(error = %message, "quantity update failed");
                self.error = Some(message);
                Task::none()
            }
            DashboardMessage::Refreshed(Ok(countries)) => {
                self.countries = countries;
                self.error = None;
                Task::none()
            }
            DashboardMessage::Refreshed(Err(message)) => {
                // The previously displayed list stays; only the banner changes.
                error!(error = %message, "quantity fetch failed");
                self.error = Some(message);
                Task::none()
            }
        }
    }
}

fn country_row(country: &ViewCountry) -> Element<'_, ScreenMessage<DashboardScreen>> {
    let flag = countries::flag(&country.alpha2).unwrap_or_default();
    row![
        text(flag).size(20),
        column![
            text(country.name.as_str()),
            text(format!("Quantity: {}", country.quantity))
                .size(12)
                .style(text::secondary),
        ],
        space::horizontal(),
        button(text("+")).on_press(ScreenMessage::ScreenMessage(
            DashboardMessage::IncrementPressed(country.name.clone()),
        )),
    ]
    .spacing(10)
    .padding(5)
    .align_y(Center)
    .into()
}
