//! The compiled-in molecule fixture.
//!
//! Coordinates are in scene units (roughly Angstroms) and every bond is listed on
//! both of its atoms. [`super::Catalog::builtin`] validates the whole table.

use crate::core::models::atom::AtomType::{self, Carbon as C, Hydrogen as H};
use crate::core::models::molecule::MoleculeCategory::{self, Alkane, Alkene, Alkyne};

pub(super) struct AtomSpec {
    pub id: &'static str,
    pub atom_type: AtomType,
    pub position: [f64; 3],
    pub bonds: &'static [&'static str],
}

pub(super) struct MoleculeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub formula: &'static str,
    pub category: MoleculeCategory,
    pub description: &'static str,
    pub atoms: &'static [AtomSpec],
}

const fn atom(
    id: &'static str,
    atom_type: AtomType,
    position: [f64; 3],
    bonds: &'static [&'static str],
) -> AtomSpec {
    AtomSpec {
        id,
        atom_type,
        position,
        bonds,
    }
}

pub(super) static MOLECULES: &[MoleculeSpec] = &[
    MoleculeSpec {
        id: "methane",
        name: "Methane",
        formula: "CH4",
        category: Alkane,
        description: "The simplest hydrocarbon and the main component of natural gas.",
        atoms: &[
            atom("c1", C, [0.0, 0.0, 0.0], &["h1", "h2", "h3", "h4"]),
            atom("h1", H, [0.9, 0.9, 0.9], &["c1"]),
            atom("h2", H, [0.9, -0.9, -0.9], &["c1"]),
            atom("h3", H, [-0.9, 0.9, -0.9], &["c1"]),
            atom("h4", H, [-0.9, -0.9, 0.9], &["c1"]),
        ],
    },
    MoleculeSpec {
        id: "ethane",
        name: "Ethane",
        formula: "C2H6",
        category: Alkane,
        description: "A straight-chain alkane; colourless and odourless.",
        atoms: &[
            atom("c1", C, [-0.7, 0.0, 0.0], &["c2", "h1", "h2", "h3"]),
            atom("c2", C, [0.7, 0.0, 0.0], &["c1", "h4", "h5", "h6"]),
            atom("h1", H, [-1.2, 0.9, 0.0], &["c1"]),
            atom("h2", H, [-1.2, -0.45, 0.8], &["c1"]),
            atom("h3", H, [-1.2, -0.45, -0.8], &["c1"]),
            atom("h4", H, [1.2, -0.9, 0.0], &["c2"]),
            atom("h5", H, [1.2, 0.45, -0.8], &["c2"]),
            atom("h6", H, [1.2, 0.45, 0.8], &["c2"]),
        ],
    },
    MoleculeSpec {
        id: "propane",
        name: "Propane",
        formula: "C3H8",
        category: Alkane,
        description: "A common fuel for engines and barbecue grills.",
        atoms: &[
            atom("c1", C, [-1.5, -0.5, 0.0], &["c2", "h1", "h2", "h3"]),
            atom("c2", C, [0.0, 0.5, 0.0], &["c1", "c3", "h4", "h5"]),
            atom("c3", C, [1.5, -0.5, 0.0], &["c2", "h6", "h7", "h8"]),
            atom("h1", H, [-1.5, -1.5, 0.0], &["c1"]),
            atom("h2", H, [-2.0, -0.2, 0.9], &["c1"]),
            atom("h3", H, [-2.0, -0.2, -0.9], &["c1"]),
            atom("h4", H, [0.0, 1.0, 0.9], &["c2"]),
            atom("h5", H, [0.0, 1.0, -0.9], &["c2"]),
            atom("h6", H, [1.5, -1.5, 0.0], &["c3"]),
            atom("h7", H, [2.0, -0.2, 0.9], &["c3"]),
            atom("h8", H, [2.0, -0.2, -0.9], &["c3"]),
        ],
    },
    MoleculeSpec {
        id: "n-butane",
        name: "n-Butane",
        formula: "C4H10",
        category: Alkane,
        description: "The straight-chain isomer of butane.",
        atoms: &[
            atom("c1", C, [-2.2, -0.5, 0.0], &["c2", "h1-1", "h1-2", "h1-3"]),
            atom("c2", C, [-0.7, 0.5, 0.0], &["c1", "c3", "h2-1", "h2-2"]),
            atom("c3", C, [0.7, -0.5, 0.0], &["c2", "c4", "h3-1", "h3-2"]),
            atom("c4", C, [2.2, 0.5, 0.0], &["c3", "h4-1", "h4-2", "h4-3"]),
            atom("h1-1", H, [-2.2, -1.6, 0.0], &["c1"]),
            atom("h1-2", H, [-2.9, -0.2, 0.9], &["c1"]),
            atom("h1-3", H, [-2.9, -0.2, -0.9], &["c1"]),
            atom("h2-1", H, [-0.7, 0.5, 1.1], &["c2"]),
            atom("h2-2", H, [-0.7, 1.6, -0.5], &["c2"]),
            atom("h3-1", H, [0.7, -0.5, 1.1], &["c3"]),
            atom("h3-2", H, [0.7, -1.6, -0.5], &["c3"]),
            atom("h4-1", H, [2.2, 1.6, 0.0], &["c4"]),
            atom("h4-2", H, [2.9, 0.2, 0.9], &["c4"]),
            atom("h4-3", H, [2.9, 0.2, -0.9], &["c4"]),
        ],
    },
    MoleculeSpec {
        id: "isobutane",
        name: "Isobutane",
        formula: "C4H10",
        category: Alkane,
        description: "The branched isomer of butane (2-methylpropane).",
        atoms: &[
            atom("c1", C, [0.0, 0.2, 0.0], &["c2", "c3", "c4", "h1"]),
            atom("c2", C, [0.0, 1.7, 0.0], &["c1", "h2-1", "h2-2", "h2-3"]),
            atom("c3", C, [-1.3, -0.7, 0.8], &["c1", "h3-1", "h3-2", "h3-3"]),
            atom("c4", C, [1.3, -0.7, -0.8], &["c1", "h4-1", "h4-2", "h4-3"]),
            atom("h1", H, [0.0, 0.2, -1.1], &["c1"]),
            atom("h2-1", H, [0.0, 2.0, 1.1], &["c2"]),
            atom("h2-2", H, [-0.9, 2.0, -0.5], &["c2"]),
            atom("h2-3", H, [0.9, 2.0, -0.5], &["c2"]),
            atom("h3-1", H, [-1.3, -0.5, 1.9], &["c3"]),
            atom("h3-2", H, [-2.2, -0.3, 0.4], &["c3"]),
            atom("h3-3", H, [-1.3, -1.8, 0.8], &["c3"]),
            atom("h4-1", H, [1.3, -0.5, -1.9], &["c4"]),
            atom("h4-2", H, [2.2, -0.3, -0.4], &["c4"]),
            atom("h4-3", H, [1.3, -1.8, -0.8], &["c4"]),
        ],
    },
    MoleculeSpec {
        id: "n-pentane",
        name: "n-Pentane",
        formula: "C5H12",
        category: Alkane,
        description: "A straight-chain alkane with five carbon atoms; a volatile liquid.",
        atoms: &[
            atom("c1", C, [-3.0, -0.5, 0.0], &["c2", "h1-1", "h1-2", "h1-3"]),
            atom("c2", C, [-1.5, 0.5, 0.0], &["c1", "c3", "h2-1", "h2-2"]),
            atom("c3", C, [0.0, -0.5, 0.0], &["c2", "c4", "h3-1", "h3-2"]),
            atom("c4", C, [1.5, 0.5, 0.0], &["c3", "c5", "h4-1", "h4-2"]),
            atom("c5", C, [3.0, -0.5, 0.0], &["c4", "h5-1", "h5-2", "h5-3"]),
            atom("h1-1", H, [-3.0, -1.6, 0.0], &["c1"]),
            atom("h1-2", H, [-3.7, -0.2, 0.9], &["c1"]),
            atom("h1-3", H, [-3.7, -0.2, -0.9], &["c1"]),
            atom("h2-1", H, [-1.5, 0.5, 1.1], &["c2"]),
            atom("h2-2", H, [-1.5, 1.6, -0.5], &["c2"]),
            atom("h3-1", H, [0.0, -0.5, 1.1], &["c3"]),
            atom("h3-2", H, [0.0, -1.6, -0.5], &["c3"]),
            atom("h4-1", H, [1.5, 0.5, 1.1], &["c4"]),
            atom("h4-2", H, [1.5, 1.6, -0.5], &["c4"]),
            atom("h5-1", H, [3.0, -1.6, 0.0], &["c5"]),
            atom("h5-2", H, [3.7, -0.2, 0.9], &["c5"]),
            atom("h5-3", H, [3.7, -0.2, -0.9], &["c5"]),
        ],
    },
    MoleculeSpec {
        id: "neopentane",
        name: "Neopentane",
        formula: "C5H12",
        category: Alkane,
        description: "The 2,2-dimethylpropane isomer, with a highly symmetric tetrahedral structure.",
        atoms: &[
            atom("c0", C, [0.0, 0.0, 0.0], &["c1", "c2", "c3", "c4"]),
            atom("c1", C, [0.0, 1.5, 0.0], &["c0", "h1-1", "h1-2", "h1-3"]),
            atom("c2", C, [1.4, -0.5, 0.0], &["c0", "h2-1", "h2-2", "h2-3"]),
            atom("c3", C, [-0.7, -0.5, 1.2], &["c0", "h3-1", "h3-2", "h3-3"]),
            atom("c4", C, [-0.7, -0.5, -1.2], &["c0", "h4-1", "h4-2", "h4-3"]),
            atom("h1-1", H, [0.0, 1.8, 1.1], &["c1"]),
            atom("h1-2", H, [-0.9, 1.8, -0.5], &["c1"]),
            atom("h1-3", H, [0.9, 1.8, -0.5], &["c1"]),
            atom("h2-1", H, [1.7, -0.2, 1.0], &["c2"]),
            atom("h2-2", H, [1.7, -0.2, -1.0], &["c2"]),
            atom("h2-3", H, [1.9, -1.5, 0.0], &["c2"]),
            atom("h3-1", H, [-0.4, -0.2, 2.2], &["c3"]),
            atom("h3-2", H, [-1.8, -0.2, 1.2], &["c3"]),
            atom("h3-3", H, [-0.7, -1.6, 1.2], &["c3"]),
            atom("h4-1", H, [-0.4, -0.2, -2.2], &["c4"]),
            atom("h4-2", H, [-1.8, -0.2, -1.2], &["c4"]),
            atom("h4-3", H, [-0.7, -1.6, -1.2], &["c4"]),
        ],
    },
    MoleculeSpec {
        id: "ethene",
        name: "Ethene (Ethylene)",
        formula: "C2H4",
        category: Alkene,
        description: "The simplest hydrocarbon with a double bond; a plant hormone that ripens fruit.",
        atoms: &[
            atom("c1", C, [-0.6, 0.0, 0.0], &["c2", "h1", "h2"]),
            atom("c2", C, [0.6, 0.0, 0.0], &["c1", "h3", "h4"]),
            atom("h1", H, [-1.2, 0.9, 0.0], &["c1"]),
            atom("h2", H, [-1.2, -0.9, 0.0], &["c1"]),
            atom("h3", H, [1.2, 0.9, 0.0], &["c2"]),
            atom("h4", H, [1.2, -0.9, 0.0], &["c2"]),
        ],
    },
    MoleculeSpec {
        id: "propene",
        name: "Propene",
        formula: "C3H6",
        category: Alkene,
        description: "The second most important alkene, used to make polypropylene (PP).",
        atoms: &[
            atom("c1", C, [-1.2, -0.5, 0.0], &["c2", "h1-1", "h1-2"]),
            atom("c2", C, [0.0, 0.0, 0.0], &["c1", "c3", "h2"]),
            atom("c3", C, [1.2, 0.7, 0.0], &["c2", "h3-1", "h3-2", "h3-3"]),
            atom("h1-1", H, [-1.2, -1.6, 0.0], &["c1"]),
            atom("h1-2", H, [-2.1, 0.0, 0.0], &["c1"]),
            atom("h2", H, [0.0, -1.1, 0.0], &["c2"]),
            atom("h3-1", H, [1.2, 1.3, 0.9], &["c3"]),
            atom("h3-2", H, [1.2, 1.3, -0.9], &["c3"]),
            atom("h3-3", H, [2.1, 0.1, 0.0], &["c3"]),
        ],
    },
    MoleculeSpec {
        id: "cis-2-butene",
        name: "cis-2-Butene",
        formula: "C4H8",
        category: Alkene,
        description: "The (Z) geometric isomer of 2-butene; both methyl groups sit on the same side.",
        atoms: &[
            atom("c2", C, [-0.6, 0.0, 0.0], &["c3", "c1", "h2"]),
            atom("c3", C, [0.6, 0.0, 0.0], &["c2", "c4", "h3"]),
            atom("c1", C, [-1.6, 1.0, 0.0], &["c2", "h1-1", "h1-2", "h1-3"]),
            atom("c4", C, [1.6, 1.0, 0.0], &["c3", "h4-1", "h4-2", "h4-3"]),
            atom("h2", H, [-0.6, -1.1, 0.0], &["c2"]),
            atom("h3", H, [0.6, -1.1, 0.0], &["c3"]),
            atom("h1-1", H, [-1.6, 1.5, 1.0], &["c1"]),
            atom("h1-2", H, [-1.6, 1.5, -1.0], &["c1"]),
            atom("h1-3", H, [-2.5, 0.5, 0.0], &["c1"]),
            atom("h4-1", H, [1.6, 1.5, 1.0], &["c4"]),
            atom("h4-2", H, [1.6, 1.5, -1.0], &["c4"]),
            atom("h4-3", H, [2.5, 0.5, 0.0], &["c4"]),
        ],
    },
    MoleculeSpec {
        id: "trans-2-butene",
        name: "trans-2-Butene",
        formula: "C4H8",
        category: Alkene,
        description: "The (E) geometric isomer of 2-butene; the methyl groups sit on opposite sides.",
        atoms: &[
            atom("c2", C, [-0.6, 0.0, 0.0], &["c3", "c1", "h2"]),
            atom("c3", C, [0.6, 0.0, 0.0], &["c2", "c4", "h3"]),
            atom("c1", C, [-1.6, 1.0, 0.0], &["c2", "h1-1", "h1-2", "h1-3"]),
            atom("c4", C, [1.6, -1.0, 0.0], &["c3", "h4-1", "h4-2", "h4-3"]),
            atom("h2", H, [-0.6, -1.1, 0.0], &["c2"]),
            atom("h3", H, [0.6, 1.1, 0.0], &["c3"]),
            atom("h1-1", H, [-1.6, 1.5, 1.0], &["c1"]),
            atom("h1-2", H, [-1.6, 1.5, -1.0], &["c1"]),
            atom("h1-3", H, [-2.5, 0.5, 0.0], &["c1"]),
            atom("h4-1", H, [1.6, -1.5, 1.0], &["c4"]),
            atom("h4-2", H, [1.6, -1.5, -1.0], &["c4"]),
            atom("h4-3", H, [2.5, -0.5, 0.0], &["c4"]),
        ],
    },
    MoleculeSpec {
        id: "ethyne",
        name: "Ethyne (Acetylene)",
        formula: "C2H2",
        category: Alkyne,
        description: "A hydrocarbon with a triple bond, burned in welding torches.",
        atoms: &[
            atom("c1", C, [-0.6, 0.0, 0.0], &["c2", "h1"]),
            atom("c2", C, [0.6, 0.0, 0.0], &["c1", "h2"]),
            atom("h1", H, [-1.7, 0.0, 0.0], &["c1"]),
            atom("h2", H, [1.7, 0.0, 0.0], &["c2"]),
        ],
    },
    MoleculeSpec {
        id: "propyne",
        name: "Propyne",
        formula: "C3H4",
        category: Alkyne,
        description: "Also called methylacetylene; used as a rocket fuel.",
        atoms: &[
            atom("c3", C, [-1.5, 0.0, 0.0], &["c2", "h3-1", "h3-2", "h3-3"]),
            atom("c2", C, [0.0, 0.0, 0.0], &["c3", "c1"]),
            atom("c1", C, [1.2, 0.0, 0.0], &["c2", "h1"]),
            atom("h1", H, [2.2, 0.0, 0.0], &["c1"]),
            atom("h3-1", H, [-1.8, 0.9, 0.0], &["c3"]),
            atom("h3-2", H, [-1.8, -0.45, 0.8], &["c3"]),
            atom("h3-3", H, [-1.8, -0.45, -0.8], &["c3"]),
        ],
    },
];
