use iced::{
    Alignment::Center,
    Element, Length,
    widget::{Button, button, column, container, row, space, text},
};

use crate::core::auth::AuthSnapshot;

/// Navigation targets the header can open in the system browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Login,
    Register,
    Repository,
}

/// Events emitted by the navigation header, handled at the app level.
#[derive(Debug, Clone)]
pub enum HeaderEvent {
    MenuToggled,
    LogoutPressed,
    LinkPressed(NavTarget),
}

/// Renders the navigation bar: brand, auth-dependent links, and the menu
/// toggle. When the menu is open, the same link set repeats in a dropdown
/// below the bar.
pub fn header(auth: &AuthSnapshot, menu_open: bool) -> Element<'static, HeaderEvent> {
    let brand = button(text("Tallymap").size(20))
        .style(button::text)
        .on_press(HeaderEvent::LinkPressed(NavTarget::Home));

    let account: Element<'static, HeaderEvent> = match &auth.user {
        Some(user) => text(user.name.clone()).into(),
        None => row![
            link_button("Register", NavTarget::Register),
            link_button("Login", NavTarget::Login),
        ]
        .spacing(10)
        .into(),
    };

    let bar = row![
        brand,
        space::horizontal(),
        account,
        button(text("☰"))
            .style(button::text)
            .on_press(HeaderEvent::MenuToggled),
    ]
    .spacing(15)
    .align_y(Center);

    let mut content = column![bar];
    if menu_open {
        content = content.push(menu(auth));
    }

    container(content)
        .padding(10)
        .width(Length::Fill)
        .style(container::dark)
        .into()
}

fn link_button(label: &'static str, target: NavTarget) -> Button<'static, HeaderEvent> {
    button(text(label))
        .style(button::text)
        .on_press(HeaderEvent::LinkPressed(target))
}

/// The dropdown: logout and an inert settings entry when signed in, the
/// guest links otherwise.
fn menu(auth: &AuthSnapshot) -> Element<'static, HeaderEvent> {
    let entries = if auth.is_authenticated() {
        column![
            button(text("Logout"))
                .style(button::danger)
                .on_press(HeaderEvent::LogoutPressed),
            button(text("Settings")).style(button::secondary),
        ]
    } else {
        column![
            link_button("Register", NavTarget::Register),
            link_button("Login", NavTarget::Login),
            link_button("GitHub", NavTarget::Repository),
        ]
    };

    container(entries.spacing(5)).padding(10).into()
}
