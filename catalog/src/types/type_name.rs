//! The closed set of elemental pokemon types

use serde::{Deserialize, Serialize};

/// Pokemon types (18 types as of Gen 6+)
///
/// Wire names are lowercase, matching PokeAPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl TypeName {
    /// All 18 pokemon types
    pub const ALL: [TypeName; 18] = [
        TypeName::Normal,
        TypeName::Fire,
        TypeName::Water,
        TypeName::Electric,
        TypeName::Grass,
        TypeName::Ice,
        TypeName::Fighting,
        TypeName::Poison,
        TypeName::Ground,
        TypeName::Flying,
        TypeName::Psychic,
        TypeName::Bug,
        TypeName::Rock,
        TypeName::Ghost,
        TypeName::Dragon,
        TypeName::Dark,
        TypeName::Steel,
        TypeName::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [TypeName] {
        &Self::ALL
    }

    /// Parse from an API type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(TypeName::Normal),
            "fire" => Some(TypeName::Fire),
            "water" => Some(TypeName::Water),
            "electric" => Some(TypeName::Electric),
            "grass" => Some(TypeName::Grass),
            "ice" => Some(TypeName::Ice),
            "fighting" => Some(TypeName::Fighting),
            "poison" => Some(TypeName::Poison),
            "ground" => Some(TypeName::Ground),
            "flying" => Some(TypeName::Flying),
            "psychic" => Some(TypeName::Psychic),
            "bug" => Some(TypeName::Bug),
            "rock" => Some(TypeName::Rock),
            "ghost" => Some(TypeName::Ghost),
            "dragon" => Some(TypeName::Dragon),
            "dark" => Some(TypeName::Dark),
            "steel" => Some(TypeName::Steel),
            "fairy" => Some(TypeName::Fairy),
            _ => None,
        }
    }

    /// Canonical lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Normal => "normal",
            TypeName::Fire => "fire",
            TypeName::Water => "water",
            TypeName::Electric => "electric",
            TypeName::Grass => "grass",
            TypeName::Ice => "ice",
            TypeName::Fighting => "fighting",
            TypeName::Poison => "poison",
            TypeName::Ground => "ground",
            TypeName::Flying => "flying",
            TypeName::Psychic => "psychic",
            TypeName::Bug => "bug",
            TypeName::Rock => "rock",
            TypeName::Ghost => "ghost",
            TypeName::Dragon => "dragon",
            TypeName::Dark => "dark",
            TypeName::Steel => "steel",
            TypeName::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(TypeName::from_name("fire"), Some(TypeName::Fire));
        assert_eq!(TypeName::from_name("Fire"), Some(TypeName::Fire));
        assert_eq!(TypeName::from_name("FIRE"), Some(TypeName::Fire));
        assert_eq!(TypeName::from_name("shadow"), None);
    }

    #[test]
    fn test_as_str_round_trip() {
        for ty in TypeName::all() {
            assert_eq!(TypeName::from_name(ty.as_str()), Some(*ty));
        }
    }

    #[test]
    fn test_all_types() {
        assert_eq!(TypeName::all().len(), 18);
        assert_eq!(TypeName::all()[0], TypeName::Normal);
        assert_eq!(TypeName::all()[17], TypeName::Fairy);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TypeName::Electric).unwrap();
        assert_eq!(json, "\"electric\"");
        let back: TypeName = serde_json::from_str("\"electric\"").unwrap();
        assert_eq!(back, TypeName::Electric);
    }
}
