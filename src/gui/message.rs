use crate::core::model::ViewCountry;
use crate::gui::screens::{ScreenMessage, dashboard::DashboardScreen, loading::LoadingScreen};
use crate::gui::widgets::header::HeaderEvent;

#[derive(Debug, Clone)]
pub enum Message {
    /// The initial fetch finished; carries the merged list or the error text.
    Loaded(Result<Vec<ViewCountry>, String>),
    Loading(ScreenMessage<LoadingScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    Header(HeaderEvent),
}
