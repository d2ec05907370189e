// ============================================================================
// UBICACIONES - Regiones ofrecidas por el LocationSelector
// ============================================================================

pub const NZ_LOCATIONS: [&str; 14] = [
    "Auckland",
    "Wellington",
    "Christchurch",
    "Hamilton",
    "Tauranga",
    "Dunedin",
    "Palmerston North",
    "Napier",
    "Nelson",
    "Rotorua",
    "New Plymouth",
    "Whangārei",
    "Invercargill",
    "Queenstown",
];

/// Opciones del selector. Si la ubicación actual no está tal cual en la lista
/// (p.ej. viene de otra fuente) se añade al principio sin tocarla.
pub fn location_options(current: &str) -> Vec<String> {
    let current = current.trim();
    let mut options: Vec<String> = NZ_LOCATIONS.iter().map(|loc| loc.to_string()).collect();
    if !current.is_empty() && !NZ_LOCATIONS.iter().any(|loc| *loc == current) {
        options.insert(0, current.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_location_keeps_fixed_list() {
        let options = location_options("Wellington");
        assert_eq!(options.len(), NZ_LOCATIONS.len());
        assert_eq!(options[0], "Auckland");
    }

    #[test]
    fn test_unknown_location_is_prepended() {
        let options = location_options("Gisborne");
        assert_eq!(options.len(), NZ_LOCATIONS.len() + 1);
        assert_eq!(options[0], "Gisborne");
    }

    #[test]
    fn test_location_match_is_exact() {
        let options = location_options("auckland");
        assert_eq!(options.len(), NZ_LOCATIONS.len() + 1);
        assert_eq!(options[0], "auckland");
        assert_eq!(options[1], "Auckland");
    }

    #[test]
    fn test_blank_location_adds_nothing() {
        assert_eq!(location_options("  ").len(), NZ_LOCATIONS.len());
    }
}
