// ============================================================================
// HEADER VIEWMODEL - Navegación, estado activo y badge de tiendas
// ============================================================================
// Lógica de presentación del header, sin componentes: la vista solo pinta lo que
// devuelve este módulo.
// ============================================================================

use yew::Callback;
use crate::models::{Icon, SelectedStore, ViewToken};

const NAV_ACTIVE_CLASS: &str = "bg-green-100 text-green-700";
const NAV_INACTIVE_CLASS: &str = "text-gray-600 hover:text-gray-900 hover:bg-gray-50";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub icon: Icon,
    pub view: ViewToken,
}

impl NavigationItem {
    pub fn is_active(&self, current_view: ViewToken) -> bool {
        self.view == current_view
    }

    pub fn class_for(&self, current_view: ViewToken, layout: NavLayout) -> String {
        let state = if self.is_active(current_view) {
            NAV_ACTIVE_CLASS
        } else {
            NAV_INACTIVE_CLASS
        };
        format!("{} {}", layout.base_class(), state)
    }
}

/// Entradas fijas del menú. Comparison no tiene entrada propia.
pub static NAVIGATION: [NavigationItem; 3] = [
    NavigationItem { label: "Home", icon: Icon::Home, view: ViewToken::Home },
    NavigationItem { label: "Stores", icon: Icon::Store, view: ViewToken::Stores },
    NavigationItem { label: "Products", icon: Icon::Search, view: ViewToken::Products },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    Desktop,
    Mobile,
}

impl NavLayout {
    fn base_class(&self) -> &'static str {
        match self {
            NavLayout::Desktop => "flex items-center space-x-2 px-3 py-2 rounded-lg transition-colors",
            NavLayout::Mobile => "flex items-center space-x-2 w-full px-3 py-2 rounded-lg transition-colors",
        }
    }
}

/// Estado del menú móvil. Vive solo mientras el header está montado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Glifo del botón: X con el menú abierto, hamburguesa cerrado
    pub fn toggle_icon(self) -> Icon {
        match self {
            MenuState::Closed => Icon::Menu,
            MenuState::Open => Icon::Close,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

/// Navegar a `view`. En móvil el menú queda cerrado después de avisar al padre;
/// en escritorio no hay nada abierto que cerrar.
pub fn select_navigation(
    view: ViewToken,
    layout: NavLayout,
    on_view_change: &Callback<ViewToken>,
    menu: MenuState,
) -> MenuState {
    on_view_change.emit(view);
    match layout {
        NavLayout::Mobile => MenuState::Closed,
        NavLayout::Desktop => menu,
    }
}

/// Click en el logo: siempre Home. El menú móvil se queda como estaba.
pub fn select_logo(on_view_change: &Callback<ViewToken>, menu: MenuState) -> MenuState {
    on_view_change.emit(ViewToken::Home);
    menu
}

/// ViewModel del header - SOLO lógica de presentación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderViewModel {
    current_view: ViewToken,
    store_count: usize,
}

impl HeaderViewModel {
    pub fn new(current_view: ViewToken, selected_stores: &[SelectedStore]) -> Self {
        Self {
            current_view,
            store_count: selected_stores.len(),
        }
    }

    pub fn navigation(&self) -> &'static [NavigationItem] {
        &NAVIGATION
    }

    pub fn is_active(&self, item: &NavigationItem) -> bool {
        item.is_active(self.current_view)
    }

    pub fn current_view(&self) -> ViewToken {
        self.current_view
    }

    pub fn nav_class(&self, item: &NavigationItem, layout: NavLayout) -> String {
        item.class_for(self.current_view, layout)
    }

    /// Texto del badge de escritorio: "1 store" / "N stores"
    pub fn store_badge(&self) -> Option<String> {
        store_count_label(self.store_count)
    }

    /// Texto del resumen dentro del menú móvil
    pub fn mobile_store_badge(&self) -> Option<String> {
        store_count_label(self.store_count).map(|label| format!("{} selected", label))
    }
}

/// "1 store", "N stores"; nada si no hay tiendas
pub fn store_count_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 store".to_string()),
        n => Some(format!("{} stores", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn stores(n: usize) -> Vec<SelectedStore> {
        (0..n)
            .map(|i| SelectedStore::new(&format!("store-{}", i), &format!("Store {}", i)))
            .collect()
    }

    fn recorder() -> (Callback<ViewToken>, Rc<RefCell<Vec<ViewToken>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |view: ViewToken| seen.borrow_mut().push(view))
        };
        (callback, seen)
    }

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_even_toggles_close_odd_toggles_open() {
        for n in 0..8 {
            let state = (0..n).fold(MenuState::default(), |state, _| state.toggled());
            assert_eq!(state.is_open(), n % 2 == 1, "toggles: {}", n);
        }
    }

    #[test]
    fn test_toggle_icon_reflects_state() {
        assert_eq!(MenuState::Closed.toggle_icon(), Icon::Menu);
        assert_eq!(MenuState::Open.toggle_icon(), Icon::Close);
    }

    #[test]
    fn test_mobile_selection_emits_then_closes() {
        let (callback, seen) = recorder();
        let next = select_navigation(ViewToken::Products, NavLayout::Mobile, &callback, MenuState::Open);
        assert_eq!(*seen.borrow(), vec![ViewToken::Products]);
        assert_eq!(next, MenuState::Closed);
    }

    #[test]
    fn test_logo_always_selects_home() {
        let (callback, seen) = recorder();
        assert_eq!(select_logo(&callback, MenuState::Open), MenuState::Open);
        assert_eq!(select_logo(&callback, MenuState::Closed), MenuState::Closed);
        assert_eq!(*seen.borrow(), vec![ViewToken::Home, ViewToken::Home]);
    }

    #[test]
    fn test_desktop_selection_leaves_menu_untouched() {
        let (callback, seen) = recorder();
        let next = select_navigation(ViewToken::Stores, NavLayout::Desktop, &callback, MenuState::Open);
        assert_eq!(*seen.borrow(), vec![ViewToken::Stores]);
        assert_eq!(next, MenuState::Open);

        let next = select_navigation(ViewToken::Home, NavLayout::Desktop, &callback, MenuState::Closed);
        assert_eq!(next, MenuState::Closed);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_exactly_one_item_active_for_nav_views() {
        for item in NAVIGATION.iter() {
            let vm = HeaderViewModel::new(item.view, &[]);
            let active: Vec<_> = vm.navigation().iter().filter(|i| vm.is_active(i)).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].view, item.view);
        }
    }

    #[test]
    fn test_comparison_has_no_active_item() {
        let vm = HeaderViewModel::new(ViewToken::Comparison, &[]);
        assert!(vm.navigation().iter().all(|i| !vm.is_active(i)));
    }

    #[test]
    fn test_navigation_order_and_icons() {
        let labels: Vec<_> = NAVIGATION.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "Stores", "Products"]);
        assert_eq!(NAVIGATION[1].icon, Icon::Store);
        assert_eq!(NAVIGATION[2].icon, Icon::Search);
    }

    #[test]
    fn test_nav_class_marks_active_entry() {
        let vm = HeaderViewModel::new(ViewToken::Stores, &[]);
        let stores_class = vm.nav_class(&NAVIGATION[1], NavLayout::Desktop);
        let home_class = vm.nav_class(&NAVIGATION[0], NavLayout::Mobile);

        assert!(stores_class.ends_with(NAV_ACTIVE_CLASS));
        assert!(!stores_class.contains("w-full"));
        assert!(home_class.ends_with(NAV_INACTIVE_CLASS));
        assert!(home_class.contains("w-full"));
    }

    #[test]
    fn test_store_count_label_pluralization() {
        assert_eq!(store_count_label(0), None);
        assert_eq!(store_count_label(1).as_deref(), Some("1 store"));
        assert_eq!(store_count_label(2).as_deref(), Some("2 stores"));
        assert_eq!(store_count_label(12).as_deref(), Some("12 stores"));
    }

    #[test]
    fn test_badges_for_three_stores() {
        let vm = HeaderViewModel::new(ViewToken::Home, &stores(3));
        assert_eq!(vm.store_badge().as_deref(), Some("3 stores"));
        assert_eq!(vm.mobile_store_badge().as_deref(), Some("3 stores selected"));
    }

    #[test]
    fn test_initial_home_render_without_stores() {
        let vm = HeaderViewModel::new(ViewToken::Home, &[]);
        let active: Vec<_> = vm.navigation().iter().filter(|i| vm.is_active(i)).map(|i| i.label).collect();
        assert_eq!(active, vec!["Home"]);
        assert!(vm.store_badge().is_none());
        assert!(vm.mobile_store_badge().is_none());
    }
}
