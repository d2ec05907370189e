pub mod header_viewmodel;

pub use header_viewmodel::{
    select_logo, select_navigation, store_count_label, HeaderViewModel, MenuState, NavLayout, NavigationItem,
    NAVIGATION,
};
