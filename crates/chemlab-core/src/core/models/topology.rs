use super::atom::Atom;
use super::ids::AtomId;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

/// One undirected bond, with endpoints stored in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    pub first: AtomId,
    pub second: AtomId,
}

impl Bond {
    pub fn new(a: &AtomId, b: &AtomId) -> Self {
        if a <= b {
            Self {
                first: a.clone(),
                second: b.clone(),
            }
        } else {
            Self {
                first: b.clone(),
                second: a.clone(),
            }
        }
    }

    pub fn involves(&self, id: &str) -> bool {
        self.first == id || self.second == id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("Molecule has no atoms")]
    Empty,

    #[error("Atom id '{0}' is used more than once")]
    DuplicateAtomId(AtomId),

    #[error("Atom '{0}' is bonded to itself")]
    SelfBond(AtomId),

    #[error("Atom '{from}' lists a bond to unknown atom '{to}'")]
    DanglingBond { from: AtomId, to: AtomId },

    #[error("Atom '{from}' lists its bond to '{to}' more than once")]
    DuplicateBond { from: AtomId, to: AtomId },

    #[error("Bond '{from}' -> '{to}' is not mirrored by '{to}' -> '{from}'")]
    AsymmetricBond { from: AtomId, to: AtomId },

    #[error("Atoms {unreachable:?} are not connected to atom '{root}'")]
    Disconnected {
        root: AtomId,
        unreachable: Vec<AtomId>,
    },
}

/// Checks that an atom list forms one well-formed, connected, undirected bond graph.
///
/// Every `connected_to` entry must name another atom of the same list, appear only
/// once, and be mirrored on the other end. Renderers draw one bond per unordered
/// pair, so an unmirrored edge would silently disappear from the scene.
pub fn validate_bond_graph(atoms: &[Atom]) -> Result<(), TopologyError> {
    let Some(root) = atoms.first() else {
        return Err(TopologyError::Empty);
    };

    let mut index: HashMap<&str, &Atom> = HashMap::with_capacity(atoms.len());
    for atom in atoms {
        if index.insert(atom.id.as_str(), atom).is_some() {
            return Err(TopologyError::DuplicateAtomId(atom.id.clone()));
        }
    }

    for atom in atoms {
        let mut seen = HashSet::with_capacity(atom.connected_to.len());
        for neighbor_id in &atom.connected_to {
            if *neighbor_id == atom.id {
                return Err(TopologyError::SelfBond(atom.id.clone()));
            }
            if !seen.insert(neighbor_id) {
                return Err(TopologyError::DuplicateBond {
                    from: atom.id.clone(),
                    to: neighbor_id.clone(),
                });
            }
            let Some(neighbor) = index.get(neighbor_id.as_str()) else {
                return Err(TopologyError::DanglingBond {
                    from: atom.id.clone(),
                    to: neighbor_id.clone(),
                });
            };
            if !neighbor.is_bonded_to(atom.id.as_str()) {
                return Err(TopologyError::AsymmetricBond {
                    from: atom.id.clone(),
                    to: neighbor_id.clone(),
                });
            }
        }
    }

    let mut visited: HashSet<&str> = HashSet::with_capacity(atoms.len());
    let mut queue = VecDeque::from([root]);
    visited.insert(root.id.as_str());
    while let Some(atom) = queue.pop_front() {
        for neighbor_id in &atom.connected_to {
            if visited.insert(neighbor_id.as_str()) {
                queue.push_back(index[neighbor_id.as_str()]);
            }
        }
    }

    if visited.len() != atoms.len() {
        let unreachable = atoms
            .iter()
            .filter(|atom| !visited.contains(atom.id.as_str()))
            .map(|atom| atom.id.clone())
            .collect();
        return Err(TopologyError::Disconnected {
            root: root.id.clone(),
            unreachable,
        });
    }

    Ok(())
}

/// Returns each bond exactly once, in the order its lower-id endpoint appears.
///
/// Edges that point at atoms missing from the list are skipped.
pub fn unique_bonds(atoms: &[Atom]) -> Vec<Bond> {
    let known: HashSet<&str> = atoms.iter().map(|atom| atom.id.as_str()).collect();
    let mut seen = HashSet::new();
    let mut bonds = Vec::new();

    for atom in atoms {
        for neighbor_id in &atom.connected_to {
            if !known.contains(neighbor_id.as_str()) {
                continue;
            }
            let bond = Bond::new(&atom.id, neighbor_id);
            if seen.insert(bond.clone()) {
                bonds.push(bond);
            }
        }
    }

    bonds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomType;
    use nalgebra::Point3;

    fn atom(id: &str, atom_type: AtomType, bonds: &[&str]) -> Atom {
        Atom::new(id, atom_type, Point3::origin(), bonds.iter().copied())
    }

    fn methane() -> Vec<Atom> {
        vec![
            atom("c1", AtomType::Carbon, &["h1", "h2", "h3", "h4"]),
            atom("h1", AtomType::Hydrogen, &["c1"]),
            atom("h2", AtomType::Hydrogen, &["c1"]),
            atom("h3", AtomType::Hydrogen, &["c1"]),
            atom("h4", AtomType::Hydrogen, &["c1"]),
        ]
    }

    #[test]
    fn well_formed_graph_validates() {
        assert_eq!(validate_bond_graph(&methane()), Ok(()));
    }

    #[test]
    fn empty_atom_list_is_rejected() {
        assert_eq!(validate_bond_graph(&[]), Err(TopologyError::Empty));
    }

    #[test]
    fn asymmetric_bond_is_rejected() {
        let mut atoms = methane();
        atoms[4].connected_to.clear();
        assert_eq!(
            validate_bond_graph(&atoms),
            Err(TopologyError::AsymmetricBond {
                from: AtomId::from("c1"),
                to: AtomId::from("h4"),
            })
        );
    }

    #[test]
    fn dangling_bond_is_rejected() {
        let mut atoms = methane();
        atoms[1].connected_to.push(AtomId::from("x9"));
        assert!(matches!(
            validate_bond_graph(&atoms),
            Err(TopologyError::DanglingBond { ref to, .. }) if to == "x9"
        ));
    }

    #[test]
    fn duplicate_ids_and_self_bonds_are_rejected() {
        let mut duplicated = methane();
        duplicated[2].id = AtomId::from("h1");
        assert_eq!(
            validate_bond_graph(&duplicated),
            Err(TopologyError::DuplicateAtomId(AtomId::from("h1")))
        );

        let mut self_bonded = methane();
        self_bonded[1].connected_to.push(AtomId::from("h1"));
        assert_eq!(
            validate_bond_graph(&self_bonded),
            Err(TopologyError::SelfBond(AtomId::from("h1")))
        );
    }

    #[test]
    fn repeated_neighbor_entry_is_rejected() {
        let mut atoms = methane();
        atoms[1].connected_to.push(AtomId::from("c1"));
        assert!(matches!(
            validate_bond_graph(&atoms),
            Err(TopologyError::DuplicateBond { .. })
        ));
    }

    #[test]
    fn disconnected_fragment_is_rejected() {
        let mut atoms = methane();
        atoms.push(atom("h5", AtomType::Hydrogen, &["h6"]));
        atoms.push(atom("h6", AtomType::Hydrogen, &["h5"]));
        assert_eq!(
            validate_bond_graph(&atoms),
            Err(TopologyError::Disconnected {
                root: AtomId::from("c1"),
                unreachable: vec![AtomId::from("h5"), AtomId::from("h6")],
            })
        );
    }

    #[test]
    fn unique_bonds_collapses_both_directions() {
        let bonds = unique_bonds(&methane());
        assert_eq!(bonds.len(), 4);
        assert!(bonds.iter().all(|bond| bond.first == "c1"));
        assert_eq!(bonds[0], Bond::new(&AtomId::from("h1"), &AtomId::from("c1")));
    }

    #[test]
    fn unique_bonds_skips_unknown_neighbors() {
        let atoms = vec![atom("c1", AtomType::Carbon, &["h1", "ghost"]), atom("h1", AtomType::Hydrogen, &["c1"])];
        let bonds = unique_bonds(&atoms);
        assert_eq!(bonds.len(), 1);
        assert!(bonds[0].involves("h1"));
    }
}
