use tradie_materials_web::config::CONFIG;
use tradie_materials_web::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} starting ({})...", CONFIG.brand_name, CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
