pub mod view;
pub mod store;
pub mod location;
pub mod icon;

pub use view::ViewToken;
pub use store::SelectedStore;
pub use location::{location_options, NZ_LOCATIONS};
pub use icon::Icon;
