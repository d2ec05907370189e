use serde::{Deserialize, Serialize};

/// Pantalla de primer nivel que muestra la app (la decide el componente padre)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewToken {
    #[default]
    Home,
    Stores,
    Products,
    Comparison,
}

impl ViewToken {
    pub const ALL: [ViewToken; 4] = [
        ViewToken::Home,
        ViewToken::Stores,
        ViewToken::Products,
        ViewToken::Comparison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewToken::Home => "home",
            ViewToken::Stores => "stores",
            ViewToken::Products => "products",
            ViewToken::Comparison => "comparison",
        }
    }

    /// Parsear un token guardado. Valores desconocidos devuelven None.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewToken::Home => "Home",
            ViewToken::Stores => "Stores",
            ViewToken::Products => "Products",
            ViewToken::Comparison => "Comparison",
        }
    }
}

impl std::fmt::Display for ViewToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        for token in ViewToken::ALL {
            assert_eq!(ViewToken::parse(token.as_str()), Some(token));
        }
        assert_eq!(ViewToken::parse(" Stores "), Some(ViewToken::Stores));
    }

    #[test]
    fn test_parse_unknown_token_is_none() {
        assert_eq!(ViewToken::parse("checkout"), None);
        assert_eq!(ViewToken::parse(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&ViewToken::Comparison).unwrap();
        assert_eq!(json, "\"comparison\"");
        let token: ViewToken = serde_json::from_str("\"products\"").unwrap();
        assert_eq!(token, ViewToken::Products);
    }
}
