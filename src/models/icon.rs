// ============================================================================
// ICONOS - Glifos simbólicos (geometría de lucide), resueltos por la vista
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Store,
    Search,
    Menu,
    Close,
    MapPin,
}

impl Icon {
    /// Trazos SVG sobre un viewBox de 24x24
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Home => &[
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            Icon::Store => &[
                "m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7",
                "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8",
                "M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4",
                "M2 7h20",
                "M22 7v3a2 2 0 0 1-2 2a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 16 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 12 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 8 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 4 12a2 2 0 0 1-2-2V7",
            ],
            Icon::Search => &[
                "M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0",
                "m21 21-4.3-4.3",
            ],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Store => "store",
            Icon::Search => "search",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::MapPin => "map-pin",
        }
    }
}
