pub mod app;
pub mod header;
pub mod icon;
pub mod location_selector;

pub use app::App;
pub use header::{Header, HeaderProps};
pub use icon::IconSvg;
pub use location_selector::{LocationSelector, LocationSelectorProps};
