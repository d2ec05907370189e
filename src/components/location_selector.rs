use yew::prelude::*;
use web_sys::HtmlSelectElement;
use crate::models::{location_options, Icon};
use super::IconSvg;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationSelectorProps {
    pub user_location: String,
    pub on_location_change: Callback<String>,
}

#[function_component(LocationSelector)]
pub fn location_selector(props: &LocationSelectorProps) -> Html {
    let onchange = {
        let cb = props.on_location_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let location = select.value();
                log::info!("📍 [LOCATION] Ubicación seleccionada: {}", location);
                cb.emit(location);
            }
        })
    };

    let current = props.user_location.trim().to_string();
    let options = location_options(&current);

    html! {
        <label class="flex items-center space-x-2 text-sm text-gray-700">
            <IconSvg icon={Icon::MapPin} class={classes!("h-4", "w-4", "text-green-600")} />
            <select
                class="bg-white border border-gray-200 rounded-lg px-2 py-1.5 text-sm font-medium focus:outline-none focus:ring-2 focus:ring-green-500"
                aria-label="Location"
                onchange={onchange}
            >
                {
                    for options.into_iter().map(|location| {
                        let selected = location == current;
                        html! {
                            <option key={location.clone()} value={location.clone()} selected={selected}>
                                {location}
                            </option>
                        }
                    })
                }
            </select>
        </label>
    }
}
