// ============================================================================
// HEADER - Logo, navegación (escritorio + móvil), ubicación y tiendas
// ============================================================================
// El header no guarda estado de negocio: recibe vista actual, ubicación y
// tiendas del padre y le avisa por callbacks. Solo el menú móvil es local.
// La visibilidad escritorio/móvil la resuelven los breakpoints CSS.
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::hooks::use_mobile_menu;
use crate::models::{Icon, SelectedStore, ViewToken};
use crate::viewmodels::{HeaderViewModel, NavLayout};
use super::{IconSvg, LocationSelector};

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub selected_stores: Vec<SelectedStore>,
    pub on_view_change: Callback<ViewToken>,
    pub current_view: ViewToken,
    pub user_location: String,
    pub on_location_change: Callback<String>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavListProps {
    pub current_view: ViewToken,
    pub layout: NavLayout,
    pub on_navigate: Callback<ViewToken>,
}

/// Botones de navegación para un layout
#[function_component(NavList)]
pub fn nav_list(props: &NavListProps) -> Html {
    let layout = props.layout;
    let vm = HeaderViewModel::new(props.current_view, &[]);

    html! {
        <>
            {
                for vm.navigation().iter().map(|item| {
                    let onclick = {
                        let cb = props.on_navigate.clone();
                        let view = item.view;
                        Callback::from(move |_: MouseEvent| {
                            log::info!("🧭 [HEADER] Navegando a {}", view);
                            cb.emit(view);
                        })
                    };

                    html! {
                        <button
                            key={item.view.as_str()}
                            class={vm.nav_class(item, layout)}
                            aria-current={vm.is_active(item).then(|| AttrValue::from("page"))}
                            onclick={onclick}
                        >
                            <IconSvg icon={item.icon} class={classes!("h-4", "w-4")} />
                            <span class="font-medium">{item.label}</span>
                        </button>
                    }
                })
            }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub selected_stores: Vec<SelectedStore>,
    pub current_view: ViewToken,
    pub user_location: String,
    pub on_location_change: Callback<String>,
    pub on_navigate: Callback<ViewToken>,
}

/// Panel desplegable del menú móvil (solo se monta con el menú abierto)
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let vm = HeaderViewModel::new(props.current_view, &props.selected_stores);

    let mobile_badge = match vm.mobile_store_badge() {
        Some(label) => html! {
            <div class="mt-4 pt-4 border-t border-gray-200 md:hidden">
                <div class="flex items-center space-x-2 text-yellow-800 px-3 py-2">
                    <IconSvg icon={Icon::Store} class={classes!("h-4", "w-4")} />
                    <span class="text-sm font-medium">{label}</span>
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="lg:hidden border-t border-gray-200 py-4">
            <nav class="space-y-2">
                <NavList
                    current_view={vm.current_view()}
                    layout={NavLayout::Mobile}
                    on_navigate={props.on_navigate.clone()}
                />
            </nav>

            <div class="mt-4 pt-4 border-t border-gray-200 sm:hidden">
                <LocationSelector
                    user_location={props.user_location.clone()}
                    on_location_change={props.on_location_change.clone()}
                />
            </div>

            { mobile_badge }
        </div>
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_mobile_menu();
    let vm = HeaderViewModel::new(props.current_view, &props.selected_stores);

    // El logo siempre lleva a Home, esté como esté el menú
    let on_logo_click = {
        let menu = menu.clone();
        let cb = props.on_view_change.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("🏠 [HEADER] Click en logo");
            menu.go_home(&cb);
        })
    };

    let on_navigate = |layout: NavLayout| {
        let menu = menu.clone();
        let cb = props.on_view_change.clone();
        Callback::from(move |view: ViewToken| menu.select(view, layout, &cb))
    };

    let desktop_badge = match vm.store_badge() {
        Some(label) => html! {
            <div class="hidden md:flex items-center space-x-2 bg-yellow-100 text-yellow-800 px-2 lg:px-3 py-1.5 lg:py-2 rounded-lg">
                <IconSvg icon={Icon::Store} class={classes!("h-3", "w-3", "lg:h-4", "lg:w-4")} />
                <span class="text-xs lg:text-sm font-medium">{label}</span>
            </div>
        },
        None => html! {},
    };

    let mobile_menu = if menu.is_open() {
        html! {
            <MobileMenu
                selected_stores={props.selected_stores.clone()}
                current_view={vm.current_view()}
                user_location={props.user_location.clone()}
                on_location_change={props.on_location_change.clone()}
                on_navigate={on_navigate(NavLayout::Mobile)}
            />
        }
    } else {
        html! {}
    };

    let toggle_label = if menu.is_open() { "Close menu" } else { "Open menu" };

    html! {
        <header class="border-b border-green-200 sticky top-0 z-50 shadow-lg shadow-green-200 bg-white">
            <div class="max-w-8xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20 lg:h-22">
                    <div class="flex items-center space-x-2 lg:space-x-3">
                        <button
                            class="flex items-center space-x-2 lg:space-x-3 hover:opacity-90 transition-opacity"
                            onclick={on_logo_click}
                        >
                            <div class="h-14 lg:h-16 flex items-center justify-center py-2">
                                <img
                                    src={CONFIG.logo_src.clone()}
                                    alt={CONFIG.logo_alt.clone()}
                                    class="h-full w-auto max-w-[240px] lg:max-w-[280px] object-contain"
                                    style="max-height: 56px;"
                                />
                            </div>
                        </button>
                    </div>

                    <div class="w-auto flex flex-row justify-items-end">
                        <nav class="hidden lg:flex items-center space-x-6 xl:space-x-8">
                            <NavList
                                current_view={vm.current_view()}
                                layout={NavLayout::Desktop}
                                on_navigate={on_navigate(NavLayout::Desktop)}
                            />
                        </nav>

                        <div class="flex items-center space-x-2 lg:space-x-4">
                            <div class="hidden sm:block">
                                <LocationSelector
                                    user_location={props.user_location.clone()}
                                    on_location_change={props.on_location_change.clone()}
                                />
                            </div>

                            { desktop_badge }

                            <button
                                class="lg:hidden p-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-50"
                                aria-label={toggle_label}
                                aria-expanded={menu.is_open().to_string()}
                                onclick={menu.toggle.clone()}
                            >
                                <IconSvg icon={menu.state.toggle_icon()} class={classes!("h-5", "w-5")} />
                            </button>
                        </div>
                    </div>
                </div>

                { mobile_menu }
            </div>
        </header>
    }
}
