//! Reference constant tables.
//!
//! These are the application's extended scientific constants. They are
//! deliberately *not* part of the evaluator's symbol table: expressions
//! using them must bind the numeric value in explicitly (see
//! [`crate::bind`]). Only `pi` and `e` live in the evaluator itself.

/// A named physical constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScientificConstant {
    /// Identifier used in formula templates, e.g. `G`.
    pub symbol: &'static str,
    /// Numeric value in SI units.
    pub value: f64,
    /// Human-readable name.
    pub name: &'static str,
    /// Unit string, where one applies.
    pub unit: Option<&'static str>,
}

/// Scientific constants available for explicit binding.
pub const SCIENTIFIC_CONSTANTS: &[ScientificConstant] = &[
    ScientificConstant {
        symbol: "g",
        value: 9.80665,
        name: "Standard gravity",
        unit: Some("m/s²"),
    },
    ScientificConstant {
        symbol: "G",
        value: 6.674e-11,
        name: "Gravitational constant",
        unit: Some("N·m²/kg²"),
    },
    ScientificConstant {
        symbol: "c",
        value: 299_792_458.0,
        name: "Speed of light",
        unit: Some("m/s"),
    },
    ScientificConstant {
        symbol: "h",
        value: 6.626_070_15e-34,
        name: "Planck constant",
        unit: Some("J·s"),
    },
    ScientificConstant {
        symbol: "R",
        value: 8.314_462_618,
        name: "Gas constant",
        unit: Some("J/(mol·K)"),
    },
    ScientificConstant {
        symbol: "NA",
        value: 6.022_140_76e23,
        name: "Avogadro number",
        unit: Some("1/mol"),
    },
    ScientificConstant {
        symbol: "k",
        value: 1.380_649e-23,
        name: "Boltzmann constant",
        unit: Some("J/K"),
    },
    ScientificConstant {
        symbol: "ke",
        value: 8.987_551_792_3e9,
        name: "Coulomb constant",
        unit: Some("N·m²/C²"),
    },
];

/// Standard atomic masses of common elements, in g/mol.
pub const MOLECULAR_MASSES: &[(&str, f64)] = &[
    ("H", 1.008),
    ("He", 4.0026),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("Na", 22.990),
    ("Cl", 35.45),
    ("K", 39.098),
    ("Ca", 40.078),
    ("Fe", 55.845),
];

/// Looks up a scientific constant by its symbol.
#[must_use]
pub fn constant(symbol: &str) -> Option<&'static ScientificConstant> {
    SCIENTIFIC_CONSTANTS.iter().find(|c| c.symbol == symbol)
}

/// Looks up the molar mass of an element symbol.
#[must_use]
pub fn molecular_mass(element: &str) -> Option<f64> {
    MOLECULAR_MASSES
        .iter()
        .find(|(symbol, _)| *symbol == element)
        .map(|&(_, mass)| mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_symbol() {
        assert_eq!(constant("c").unwrap().value, 299_792_458.0);
        assert!(constant("Q").is_none());
        assert_eq!(molecular_mass("O"), Some(15.999));
        assert_eq!(molecular_mass("Xx"), None);
    }

    #[test]
    fn constants_bind_into_formulas() {
        use sextant_eval::EvalContext;

        let g = constant("g").unwrap().value.to_string();
        let weight = crate::solve("m * g", &[("m", "10"), ("g", &g)], &EvalContext::new());
        assert_eq!(weight.unwrap(), "98.0665");
    }
}
