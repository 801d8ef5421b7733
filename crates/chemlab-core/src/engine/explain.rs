//! Requests for natural-language explanations of what the user is looking at.
//!
//! The engine only describes *what* should be explained. Turning a request into text is
//! the job of an external collaborator (a language model behind an HTTP API, or nothing
//! at all), which is free to fail: every request therefore carries its own fallback texts.

use crate::core::models::atom::ParseError;
use crate::core::models::molecule::MoleculeCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Refinery processes the lab can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    Cracking,
    Reforming,
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 2] = [ProcessKind::Cracking, ProcessKind::Reforming];

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessKind::Cracking => "Cracking",
            ProcessKind::Reforming => "Reforming",
        }
    }

    /// The textbook definition the explanation is anchored on.
    pub fn definition(self) -> &'static str {
        match self {
            ProcessKind::Cracking => {
                "breaking C-C bonds of long-chain hydrocarbons into shorter ones, \
                 usually a shorter alkane plus an alkene"
            }
            ProcessKind::Reforming => {
                "rearranging the carbon skeleton (straight chain to branched chain, or ring \
                 closure to aromatics) without changing the number of carbon atoms, often \
                 releasing hydrogen"
            }
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cracking" | "crack" => Ok(ProcessKind::Cracking),
            "reforming" | "reform" => Ok(ProcessKind::Reforming),
            _ => Err(ParseError::UnknownProcess(s.to_string())),
        }
    }
}

/// Why an explanation could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No credential was configured for the explanation service.
    NotConfigured,
    /// The service answered without any text.
    EmptyResponse,
    /// The request failed in transport or was rejected.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ExplanationRequest {
    Molecule {
        name: String,
        formula: String,
        category: MoleculeCategory,
    },
    Reaction {
        substrate_name: String,
        reactant_name: String,
        product_formula: String,
    },
    Industrial {
        substrate_name: String,
        process: ProcessKind,
    },
}

impl ExplanationRequest {
    /// Short label for progress messages and logs.
    pub fn subject(&self) -> String {
        match self {
            ExplanationRequest::Molecule { name, .. } => name.clone(),
            ExplanationRequest::Reaction {
                substrate_name,
                reactant_name,
                ..
            } => format!("{substrate_name} + {reactant_name}"),
            ExplanationRequest::Industrial {
                substrate_name,
                process,
            } => format!("{process} of {substrate_name}"),
        }
    }

    /// Builds the prompt sent to the language model, asking for an answer in `language`.
    pub fn prompt(&self, language: &str) -> String {
        let body = match self {
            ExplanationRequest::Molecule {
                name,
                formula,
                category,
            } => format!(
                "You are a smart assistant in a virtual chemistry lab.\n\
                 The user is looking at a 3D model of **{name}** (formula: {formula}, group: {category}).\n\
                 \n\
                 Give a short summary (about 80-100 words) covering:\n\
                 1. Its physical state at room conditions.\n\
                 2. Its most common real-world use.\n\
                 3. One characteristic chemical property (for example combustion or addition).\n"
            ),
            ExplanationRequest::Reaction {
                substrate_name,
                reactant_name,
                product_formula,
            } => format!(
                "The user just performed a 1:1 substitution reaction in a virtual lab.\n\
                 - Starting compound: {substrate_name}\n\
                 - Reagent: {reactant_name}\n\
                 - Product formula: {product_formula} (one H atom was replaced by one halogen atom).\n\
                 \n\
                 Act as a chemistry teacher:\n\
                 1. Predict the name of the main product (prefer substitution on the most substituted carbon when there is one).\n\
                 2. Write the equation in words or simple formulas.\n\
                 3. State the reaction conditions (for example light).\n\
                 \n\
                 Keep it under 100 words.\n"
            ),
            ExplanationRequest::Industrial {
                substrate_name,
                process,
            } => format!(
                "The user wants to learn about **{process}** of **{substrate_name}**.\n\
                 \n\
                 Base the explanation on this definition: {process} is {definition}.\n\
                 \n\
                 Cover:\n\
                 1. Feasibility: can {substrate_name} undergo this process? (Methane and ethane are \
                 usually too short to crack into a standard alkane and alkene, or to reform into \
                 branches or rings.)\n\
                 2. Expected products, if it reacts.\n\
                 3. One representative equation.\n\
                 4. Conditions: temperature and catalyst.\n\
                 \n\
                 Keep it short and easy for students to follow.\n",
                definition = process.definition()
            ),
        };

        format!(
            "{body}\n\
             Do not use LaTeX ($) for chemical formulas. Use Unicode subscripts (H₂, CO₂) \
             and the arrow → in equations.\n\
             Answer in {language}, formatted as Markdown."
        )
    }

    /// Text to show when the collaborator cannot provide an explanation.
    pub fn fallback(&self, reason: UnavailableReason) -> &'static str {
        use UnavailableReason::*;
        match (self, reason) {
            (ExplanationRequest::Molecule { .. }, NotConfigured) => {
                "Please configure an API key to see detailed information."
            }
            (ExplanationRequest::Molecule { .. }, EmptyResponse) => "No information available.",
            (ExplanationRequest::Molecule { .. }, Failed) => {
                "Could not reach the explanation service."
            }
            (ExplanationRequest::Reaction { .. }, NotConfigured) => {
                "An API key is required to analyse the reaction."
            }
            (ExplanationRequest::Reaction { .. }, EmptyResponse) => {
                "The reaction could not be analysed."
            }
            (ExplanationRequest::Reaction { .. }, Failed) => "Reaction analysis failed.",
            (ExplanationRequest::Industrial { .. }, NotConfigured) => {
                "An API key is required to analyse the process."
            }
            (ExplanationRequest::Industrial { .. }, EmptyResponse) => {
                "The process could not be analysed."
            }
            (ExplanationRequest::Industrial { .. }, Failed) => "Process analysis failed.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn molecule() -> ExplanationRequest {
        ExplanationRequest::Molecule {
            name: "Methane".into(),
            formula: "CH4".into(),
            category: MoleculeCategory::Alkane,
        }
    }

    fn reaction() -> ExplanationRequest {
        ExplanationRequest::Reaction {
            substrate_name: "Ethane".into(),
            reactant_name: "Bromine".into(),
            product_formula: "C2H5Br".into(),
        }
    }

    fn industrial() -> ExplanationRequest {
        ExplanationRequest::Industrial {
            substrate_name: "n-Butane".into(),
            process: ProcessKind::Cracking,
        }
    }

    #[test]
    fn process_kind_parses_case_insensitively() {
        assert_eq!("CRACKING".parse::<ProcessKind>(), Ok(ProcessKind::Cracking));
        assert_eq!(" reform ".parse::<ProcessKind>(), Ok(ProcessKind::Reforming));
        assert_eq!(
            "pyrolysis".parse::<ProcessKind>(),
            Err(ParseError::UnknownProcess("pyrolysis".into()))
        );
    }

    #[test]
    fn prompts_mention_their_inputs_and_language() {
        let prompt = molecule().prompt("English");
        assert!(prompt.contains("Methane"));
        assert!(prompt.contains("CH4"));
        assert!(prompt.contains("Alkane"));
        assert!(prompt.ends_with("Answer in English, formatted as Markdown."));

        let prompt = reaction().prompt("Vietnamese");
        assert!(prompt.contains("Ethane"));
        assert!(prompt.contains("Bromine"));
        assert!(prompt.contains("C2H5Br"));
        assert!(prompt.contains("Answer in Vietnamese"));

        let prompt = industrial().prompt("English");
        assert!(prompt.contains("**Cracking** of **n-Butane**"));
        assert!(prompt.contains(ProcessKind::Cracking.definition()));
    }

    #[test]
    fn every_request_has_three_distinct_fallbacks() {
        let reasons = [
            UnavailableReason::NotConfigured,
            UnavailableReason::EmptyResponse,
            UnavailableReason::Failed,
        ];
        for request in [molecule(), reaction(), industrial()] {
            let texts: Vec<&str> = reasons.iter().map(|&r| request.fallback(r)).collect();
            assert!(texts.iter().all(|t| !t.is_empty()));
            assert_ne!(texts[0], texts[1]);
            assert_ne!(texts[1], texts[2]);
            assert_ne!(texts[0], texts[2]);
        }
    }

    #[test]
    fn subjects_are_human_readable() {
        assert_eq!(molecule().subject(), "Methane");
        assert_eq!(reaction().subject(), "Ethane + Bromine");
        assert_eq!(industrial().subject(), "Cracking of n-Butane");
    }

    #[test]
    fn requests_serialize_with_a_kind_tag() {
        let json = serde_json::to_value(industrial()).unwrap();
        assert_eq!(json["kind"], "industrial");
        assert_eq!(json["process"], "Cracking");
    }
}
