// ============================================================================
// APP - Raíz de la aplicación
// ============================================================================
// Dueña de la vista actual, la ubicación y las tiendas seleccionadas.
// Las guarda en localStorage y se las pasa al Header.
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::{SelectedStore, ViewToken};
use crate::utils::{load_from_storage, save_to_storage, storage_key};
use super::Header;

const VIEW_KEY: &str = "currentView";
const LOCATION_KEY: &str = "userLocation";
const STORES_KEY: &str = "selectedStores";

fn load_view() -> ViewToken {
    load_from_storage::<String>(&storage_key(VIEW_KEY))
        .and_then(|raw| {
            let parsed = ViewToken::parse(&raw);
            if parsed.is_none() {
                log::warn!("⚠️ [APP] Vista guardada desconocida '{}', usando home", raw);
            }
            parsed
        })
        .unwrap_or_default()
}

fn load_location() -> String {
    load_from_storage::<String>(&storage_key(LOCATION_KEY))
        .filter(|loc| !loc.trim().is_empty())
        .unwrap_or_else(|| CONFIG.default_location.clone())
}

fn persist<T: serde::Serialize>(name: &str, value: &T) {
    if let Err(e) = save_to_storage(&storage_key(name), value) {
        log::warn!("⚠️ [APP] {}", e);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let current_view = use_state(load_view);
    let user_location = use_state(load_location);
    let selected_stores = use_state(|| {
        load_from_storage::<Vec<SelectedStore>>(&storage_key(STORES_KEY)).unwrap_or_default()
    });

    let on_view_change = {
        let current_view = current_view.clone();
        Callback::from(move |view: ViewToken| {
            log::info!("🔄 [APP] Vista -> {}", view);
            persist(VIEW_KEY, &view.as_str());
            current_view.set(view);
        })
    };

    let on_location_change = {
        let user_location = user_location.clone();
        Callback::from(move |location: String| {
            log::info!("📍 [APP] Ubicación -> {}", location);
            persist(LOCATION_KEY, &location);
            user_location.set(location);
        })
    };

    let on_clear_stores = {
        let selected_stores = selected_stores.clone();
        Callback::from(move |_: MouseEvent| {
            persist(STORES_KEY, &Vec::<SelectedStore>::new());
            selected_stores.set(Vec::new());
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <Header
                selected_stores={(*selected_stores).clone()}
                on_view_change={on_view_change}
                current_view={*current_view}
                user_location={(*user_location).clone()}
                on_location_change={on_location_change}
            />
            <main class="max-w-8xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <h1 class="text-2xl font-semibold text-gray-900">{current_view.title()}</h1>
                <p class="mt-2 text-gray-600">
                    {format!("Showing prices near {}", *user_location)}
                </p>
                if !selected_stores.is_empty() {
                    <ul class="mt-6 space-y-2">
                        { for selected_stores.iter().map(|store| html! {
                            <li key={store.id.clone()} class="text-gray-800">{store.name.clone()}</li>
                        }) }
                    </ul>
                    <button class="mt-4 text-sm text-green-700 hover:underline" onclick={on_clear_stores}>
                        {"Clear selected stores"}
                    </button>
                }
            </main>
        </div>
    }
}
