//! Empirical formulas in Hill order.
//!
//! [`hill_formula`] writes carbon first, hydrogen second, and every other element
//! in ascending order of its symbol. Unlike the full Hill convention, hydrogen keeps
//! its second place even when no carbon is present; each clause is simply skipped
//! when its element is absent.

use crate::core::models::atom::{Atom, AtomType};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Counts atoms per element. Absent elements have no entry.
pub fn element_counts(atoms: &[Atom]) -> BTreeMap<AtomType, usize> {
    let mut counts = BTreeMap::new();
    for atom in atoms {
        *counts.entry(atom.atom_type).or_default() += 1;
    }
    counts
}

/// Computes the empirical formula of an atom list.
///
/// The result only depends on the multiset of element types, never on atom order.
/// An empty list yields an empty string.
pub fn hill_formula(atoms: &[Atom]) -> String {
    format_counts(&element_counts(atoms))
}

/// Renders per-element counts in Hill order.
pub fn format_counts(counts: &BTreeMap<AtomType, usize>) -> String {
    let mut result = String::new();

    for leading in [AtomType::Carbon, AtomType::Hydrogen] {
        if let Some(&count) = counts.get(&leading) {
            append_element(&mut result, leading.symbol(), count);
        }
    }

    let mut others: Vec<(&'static str, usize)> = counts
        .iter()
        .filter(|(atom_type, _)| !matches!(atom_type, AtomType::Carbon | AtomType::Hydrogen))
        .map(|(atom_type, &count)| (atom_type.symbol(), count))
        .collect();
    others.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (symbol, count) in others {
        append_element(&mut result, symbol, count);
    }

    result
}

fn append_element(buf: &mut String, symbol: &str, count: usize) {
    if count == 0 {
        return;
    }
    buf.push_str(symbol);
    if count > 1 {
        // Writing into a String cannot fail.
        let _ = write!(buf, "{count}");
    }
}

/// Replaces ASCII digits with Unicode subscript digits (`CH3Cl` -> `CH₃Cl`).
pub fn to_subscript(formula: &str) -> String {
    formula
        .chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32(0x2080 + (c as u32 - '0' as u32)).unwrap_or(c),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atoms_of(types: &[AtomType]) -> Vec<Atom> {
        types
            .iter()
            .enumerate()
            .map(|(i, &t)| Atom::new(&format!("a{i}"), t, Point3::origin(), Vec::<&str>::new()))
            .collect()
    }

    fn symbol_positions(formula: &str) -> Vec<String> {
        let mut symbols = Vec::new();
        let mut current = String::new();
        for c in formula.chars() {
            if c.is_ascii_uppercase() {
                if !current.is_empty() {
                    symbols.push(std::mem::take(&mut current));
                }
                current.push(c);
            } else if c.is_ascii_lowercase() {
                current.push(c);
            }
        }
        if !current.is_empty() {
            symbols.push(current);
        }
        symbols
    }

    use crate::core::models::atom::AtomType::{
        Bromine as Br, Carbon as C, Chlorine as Cl, Hydrogen as H,
    };

    #[test]
    fn methane_formula() {
        assert_eq!(hill_formula(&atoms_of(&[C, H, H, H, H])), "CH4");
    }

    #[test]
    fn single_atoms_have_no_count() {
        assert_eq!(hill_formula(&atoms_of(&[C, H, H, H, Cl])), "CH3Cl");
        assert_eq!(hill_formula(&atoms_of(&[Br])), "Br");
    }

    #[test]
    fn halogens_follow_in_symbol_order() {
        let atoms = atoms_of(&[C, C, H, H, H, H, Cl, Br, Cl]);
        assert_eq!(hill_formula(&atoms), "C2H4BrCl2");
    }

    #[test]
    fn missing_carbon_keeps_hydrogen_second_clause() {
        assert_eq!(hill_formula(&atoms_of(&[Cl, H, Br])), "HBrCl");
        assert_eq!(hill_formula(&atoms_of(&[H, H])), "H2");
    }

    #[test]
    fn missing_hydrogen_goes_straight_to_others() {
        assert_eq!(hill_formula(&atoms_of(&[C, Cl, Cl, Cl, Cl])), "CCl4");
    }

    #[test]
    fn empty_list_has_empty_formula() {
        assert_eq!(hill_formula(&[]), "");
    }

    #[test]
    fn formula_is_independent_of_atom_order() {
        let types = [C, C, H, H, H, H, H, Br, Cl];
        let expected = hill_formula(&atoms_of(&types));
        let mut rotated = types.to_vec();
        for _ in 0..types.len() {
            rotated.rotate_left(1);
            assert_eq!(hill_formula(&atoms_of(&rotated)), expected);
            let mut reversed = rotated.clone();
            reversed.reverse();
            assert_eq!(hill_formula(&atoms_of(&reversed)), expected);
        }
    }

    #[test]
    fn ordering_rules_hold_for_mixed_lists() {
        let lists: [&[AtomType]; 5] = [
            &[Br, H, C, Cl],
            &[Cl, Cl, Br],
            &[H, Br, H, C, C],
            &[Cl, C],
            &[Br, Cl, H],
        ];
        for types in lists {
            let symbols = symbol_positions(&hill_formula(&atoms_of(types)));
            let pos = |s: &str| symbols.iter().position(|x| x == s);
            if let (Some(c), Some(h)) = (pos("C"), pos("H")) {
                assert!(c < h);
            }
            let others: Vec<&String> = symbols.iter().filter(|s| *s != "C" && *s != "H").collect();
            if let Some(h) = pos("H") {
                assert!(symbols.iter().skip(h + 1).all(|s| s != "C"));
                assert!(others.iter().all(|s| pos(s.as_str()).unwrap() > h));
            }
            assert!(others.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn element_counts_counts_each_type() {
        let counts = element_counts(&atoms_of(&[C, H, H, Cl]));
        assert_eq!(counts.get(&C), Some(&1));
        assert_eq!(counts.get(&H), Some(&2));
        assert_eq!(counts.get(&Cl), Some(&1));
        assert_eq!(counts.get(&Br), None);
    }

    #[test]
    fn subscripts_replace_digits_only() {
        assert_eq!(to_subscript("CH3Cl"), "CH₃Cl");
        assert_eq!(to_subscript("C10H22"), "C₁₀H₂₂");
        assert_eq!(to_subscript("Br"), "Br");
    }
}
