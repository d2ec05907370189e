// ============================================================================
// TRADIE MATERIALS LIVE NZ - FRONTEND (RUST PURO + YEW)
// ============================================================================
// - Components: vistas Yew (Header, LocationSelector, App)
// - ViewModels: lógica de presentación sin Yew (testeable en nativo)
// - Hooks: estado local de componentes
// - Models: tipos compartidos
// ============================================================================

pub mod config;
pub mod models;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod utils;

pub use components::{App, Header, HeaderProps};
pub use models::{SelectedStore, ViewToken};
