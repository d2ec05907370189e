use yew::prelude::*;
use web_sys::MouseEvent;
use crate::models::ViewToken;
use crate::viewmodels::{select_logo, select_navigation, MenuState, NavLayout};

#[derive(Clone)]
pub struct UseMobileMenuHandle {
    pub state: UseStateHandle<MenuState>,
    pub toggle: Callback<MouseEvent>,
}

#[hook]
pub fn use_mobile_menu() -> UseMobileMenuHandle {
    let state = use_state(MenuState::default);

    // Toggle menú
    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*state).toggled();
            log::debug!("📱 [HEADER] Menú móvil -> {}", next.to_str());
            state.set(next);
        })
    };

    UseMobileMenuHandle {
        state,
        toggle,
    }
}

impl UseMobileMenuHandle {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Avisar al padre de la navegación y cerrar el menú si estamos en móvil
    pub fn select(&self, view: ViewToken, layout: NavLayout, on_view_change: &Callback<ViewToken>) {
        let next = select_navigation(view, layout, on_view_change, *self.state);
        if next != *self.state {
            self.state.set(next);
        }
    }

    /// Click en el logo: Home, sin tocar el menú
    pub fn go_home(&self, on_view_change: &Callback<ViewToken>) {
        let next = select_logo(on_view_change, *self.state);
        if next != *self.state {
            self.state.set(next);
        }
    }
}
