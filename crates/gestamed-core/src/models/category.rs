//! FDA pregnancy-risk categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// FDA pregnancy-risk category.
///
/// The letter grades run from A (safest) to X (contraindicated).
/// `NotAssigned` covers medications the FDA never classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FdaCategory {
    A,
    B,
    C,
    D,
    X,
    NotAssigned,
}

impl FdaCategory {
    /// Numeric severity rank: X > D > C > B > A > NotAssigned.
    ///
    /// Used only for comparisons; never exposed on the wire.
    pub fn severity_rank(&self) -> u8 {
        match self {
            FdaCategory::NotAssigned => 0,
            FdaCategory::A => 1,
            FdaCategory::B => 2,
            FdaCategory::C => 3,
            FdaCategory::D => 4,
            FdaCategory::X => 5,
        }
    }

    /// Parse a raw category label as it appears in the knowledge tables or
    /// upstream responses.
    ///
    /// Accepts bare letters ("B"), prefixed labels ("Categoría B"), and
    /// composite labels ("C/D", "Categoría C/D"). Composites reduce to their
    /// most severe letter. Anything unrecognized is `NotAssigned`.
    pub fn from_label(label: &str) -> FdaCategory {
        let mut worst = FdaCategory::NotAssigned;
        for token in label.split(|c: char| !c.is_alphabetic()) {
            let candidate = match token {
                "A" | "a" => FdaCategory::A,
                "B" | "b" => FdaCategory::B,
                "C" | "c" => FdaCategory::C,
                "D" | "d" => FdaCategory::D,
                "X" | "x" => FdaCategory::X,
                _ => continue,
            };
            if candidate.severity_rank() > worst.severity_rank() {
                worst = candidate;
            }
        }
        worst
    }

    /// Clinical description of the category, as shown to clinicians.
    pub fn description(&self) -> &'static str {
        match self {
            FdaCategory::A => {
                "Estudios adecuados y bien controlados no han demostrado un riesgo \
                 para el feto en el primer trimestre del embarazo."
            }
            FdaCategory::B => {
                "Estudios en animales no han demostrado un riesgo para el feto, pero \
                 no hay estudios adecuados y bien controlados en mujeres embarazadas."
            }
            FdaCategory::C => {
                "Estudios en animales han mostrado un efecto adverso en el feto, pero \
                 no hay estudios adecuados en humanos. El beneficio potencial puede \
                 justificar el riesgo potencial."
            }
            FdaCategory::D => {
                "Hay evidencia positiva de riesgo fetal humano, pero los beneficios \
                 potenciales pueden justificar el uso en mujeres embarazadas a pesar \
                 de los riesgos."
            }
            FdaCategory::X => {
                "Estudios han demostrado anormalidades fetales. Los riesgos superan \
                 claramente cualquier posible beneficio. Contraindicado en mujeres \
                 que están o pueden quedar embarazadas."
            }
            FdaCategory::NotAssigned => {
                "La FDA no ha asignado una categoría de embarazo específica para este \
                 medicamento. Se recomienda consultar con un profesional de la salud."
            }
        }
    }
}

impl fmt::Display for FdaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FdaCategory::A => "A",
            FdaCategory::B => "B",
            FdaCategory::C => "C",
            FdaCategory::D => "D",
            FdaCategory::X => "X",
            FdaCategory::NotAssigned => "No asignada",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        let ordered = [
            FdaCategory::NotAssigned,
            FdaCategory::A,
            FdaCategory::B,
            FdaCategory::C,
            FdaCategory::D,
            FdaCategory::X,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0].severity_rank() < pair[1].severity_rank());
        }
    }

    #[test]
    fn test_from_label_bare_letters() {
        assert_eq!(FdaCategory::from_label("A"), FdaCategory::A);
        assert_eq!(FdaCategory::from_label("B"), FdaCategory::B);
        assert_eq!(FdaCategory::from_label("x"), FdaCategory::X);
    }

    #[test]
    fn test_from_label_prefixed() {
        assert_eq!(FdaCategory::from_label("Categoría B"), FdaCategory::B);
        assert_eq!(FdaCategory::from_label("Categoría X"), FdaCategory::X);
        // The accented prefix itself must not register as a letter hit
        assert_eq!(
            FdaCategory::from_label("Categoría"),
            FdaCategory::NotAssigned
        );
    }

    #[test]
    fn test_from_label_composite_reduces_to_worst() {
        assert_eq!(FdaCategory::from_label("C/D"), FdaCategory::D);
        assert_eq!(FdaCategory::from_label("Categoría C/D"), FdaCategory::D);
        assert_eq!(FdaCategory::from_label("B/C"), FdaCategory::C);
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(
            FdaCategory::from_label("No asignada"),
            FdaCategory::NotAssigned
        );
        assert_eq!(FdaCategory::from_label(""), FdaCategory::NotAssigned);
        assert_eq!(
            FdaCategory::from_label("No disponible"),
            FdaCategory::NotAssigned
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FdaCategory::D.to_string(), "D");
        assert_eq!(FdaCategory::NotAssigned.to_string(), "No asignada");
    }
}
