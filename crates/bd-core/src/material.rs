//! Material catalog for barrel finishes

use serde::{Deserialize, Serialize};

/// Barrel material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Material {
    #[default]
    Tungsten,
    Brass,
    Titanium,
}

/// Visual properties of a finish
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Base color (sRGB)
    pub base_color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Tungsten => "Tungsten",
            Material::Brass => "Brass",
            Material::Titanium => "Titanium",
        }
    }

    /// All materials for UI
    pub fn all() -> &'static [Material] {
        &[Material::Tungsten, Material::Brass, Material::Titanium]
    }

    /// Catalog lookup
    pub fn properties(&self) -> MaterialProperties {
        match self {
            Material::Tungsten => MaterialProperties {
                base_color: [0.549, 0.471, 0.325],
                metalness: 0.9,
                roughness: 0.1,
            },
            Material::Brass => MaterialProperties {
                base_color: [0.710, 0.651, 0.259],
                metalness: 0.8,
                roughness: 0.2,
            },
            Material::Titanium => MaterialProperties {
                base_color: [0.753, 0.753, 0.753],
                metalness: 0.7,
                roughness: 0.3,
            },
        }
    }
}

/// Fixed finish for the grip rings
pub const RING_FINISH: MaterialProperties = MaterialProperties {
    base_color: [0.267, 0.267, 0.267],
    metalness: 0.9,
    roughness: 0.3,
};

/// Fixed finish for the scallop cut bars
pub const CUT_FINISH: MaterialProperties = MaterialProperties {
    base_color: [0.4, 0.4, 0.4],
    metalness: 0.5,
    roughness: 0.5,
};

/// Fixed finish for the thread collar, distinct from every body material
pub const COLLAR_FINISH: MaterialProperties = MaterialProperties {
    base_color: [0.2, 0.2, 0.2],
    metalness: 0.8,
    roughness: 0.4,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed_and_distinct() {
        assert_eq!(Material::all().len(), 3);
        let colors: Vec<_> = Material::all()
            .iter()
            .map(|m| m.properties().base_color)
            .collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        for m in Material::all() {
            assert_ne!(m.properties().base_color, COLLAR_FINISH.base_color);
        }
    }
}
