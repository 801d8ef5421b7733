use chemlab::core::elements::{hex_to_rgb, style_for};
use chemlab::core::formula::to_subscript;
use chemlab::core::models::atom::{Atom, AtomType};
use chemlab::core::models::molecule::Molecule;
use chemlab::core::scene::Scene;
use chemlab::workflows::inspect::MoleculeReport;
use std::fmt::Write;

/// A coloured ball for `atom_type` using 24-bit ANSI colour.
pub fn element_swatch(atom_type: AtomType) -> String {
    let style = style_for(atom_type);
    match hex_to_rgb(style.color) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m●\x1b[0m"),
        None => "●".to_string(),
    }
}

pub fn molecule_row(molecule: &Molecule) -> String {
    format!(
        "{:<16} {:<20} {:<10} {}",
        molecule.id.as_str(),
        molecule.name,
        to_subscript(&molecule.formula),
        molecule.category
    )
}

pub fn molecule_table(molecules: &[&Molecule]) -> String {
    let mut out = format!("{:<16} {:<20} {:<10} {}\n", "ID", "NAME", "FORMULA", "CATEGORY");
    for molecule in molecules {
        out.push_str(&molecule_row(molecule));
        out.push('\n');
    }
    out
}

/// One line per atom: id, element, position and bonded neighbours.
pub fn atom_lines(atoms: &[Atom]) -> String {
    let mut out = String::new();
    for atom in atoms {
        let neighbours: Vec<&str> = atom.connected_to.iter().map(|id| id.as_str()).collect();
        let _ = writeln!(
            out,
            "  {} {:<6} {:<2} ({:>5.2}, {:>5.2}, {:>5.2})  bonds: {}",
            element_swatch(atom.atom_type),
            atom.id.as_str(),
            atom.atom_type.symbol(),
            atom.position.x,
            atom.position.y,
            atom.position.z,
            neighbours.join(", ")
        );
    }
    out
}

/// Bond lengths and midpoints of a scene, followed by its extent.
pub fn scene_lines(scene: &Scene) -> String {
    let mut out = String::new();
    for cylinder in &scene.bonds {
        let midpoint = cylinder.midpoint();
        let _ = writeln!(
            out,
            "  {}-{} {:.2} Å at ({:.2}, {:.2}, {:.2})",
            cylinder.bond.first,
            cylinder.bond.second,
            cylinder.length(),
            midpoint.x,
            midpoint.y,
            midpoint.z
        );
    }
    if let Some((min, max)) = scene.bounds() {
        let _ = writeln!(
            out,
            "  Extent: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    out
}

pub fn molecule_details(report: &MoleculeReport) -> String {
    let molecule = report.molecule;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {})",
        molecule.name,
        to_subscript(&molecule.formula),
        molecule.category
    );
    let _ = writeln!(out, "{}", molecule.description);
    let composition: Vec<String> = report
        .element_counts
        .iter()
        .map(|(atom_type, count)| format!("{} {} x{}", element_swatch(*atom_type), atom_type.name(), count))
        .collect();
    let _ = writeln!(out, "Atoms: {}  |  Bonds: {}", composition.join("  "), report.bond_count);
    let targets: Vec<&str> = report.substitutable.iter().map(|id| id.as_str()).collect();
    let _ = writeln!(out, "Substitutable hydrogens: {}", targets.join(" "));
    out.push_str(&atom_lines(&molecule.atoms));
    out
}

/// Indents an explanation block under a heading.
pub fn explanation_block(text: &str) -> String {
    let mut out = String::from("Explanation:\n");
    for line in text.lines() {
        let _ = writeln!(out, "  {}", line);
    }
    out
}
