//! Essential medications table.
//!
//! Short curated list of the medications most commonly asked about during
//! pregnancy. First table consulted by the lookup pipeline; entry order is
//! observable through the resolver and must stay stable.

use crate::models::{DrugRecord, FdaCategory, RecordSource};

/// One entry of the essential table.
#[derive(Debug, Clone, Copy)]
pub struct EssentialEntry {
    pub name: &'static str,
    pub categoria: &'static str,
    pub descripcion: &'static str,
    pub riesgos: &'static str,
    pub recomendaciones: &'static str,
}

impl EssentialEntry {
    /// Normalize into the pipeline's canonical record shape.
    pub fn to_record(&self) -> DrugRecord {
        DrugRecord {
            name: self.name.to_string(),
            category: self.categoria.to_string(),
            description: self.descripcion.to_string(),
            risks: self.riesgos.to_string(),
            recommendations: self.recomendaciones.to_string(),
            alternatives: Vec::new(),
            source: RecordSource::Essential,
        }
    }
}

/// Exact-key lookup. Alias and substring handling live in the resolver.
pub fn lookup(key: &str) -> Option<&'static EssentialEntry> {
    ESSENTIAL_MEDICATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, entry)| entry)
}

/// All entries in table order.
pub fn all() -> impl Iterator<Item = &'static EssentialEntry> {
    ESSENTIAL_MEDICATIONS.iter().map(|(_, entry)| entry)
}

/// Entries whose label reduces to the given category.
pub fn by_category(category: FdaCategory) -> Vec<&'static EssentialEntry> {
    all()
        .filter(|entry| FdaCategory::from_label(entry.categoria) == category)
        .collect()
}

/// Canonical keys in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ESSENTIAL_MEDICATIONS.iter().map(|(k, _)| *k)
}

pub const ESSENTIAL_MEDICATIONS: &[(&str, EssentialEntry)] = &[
    // Antifúngicos
    (
        "clotrimazol",
        EssentialEntry {
            name: "Clotrimazol",
            categoria: "Categoría B",
            descripcion: "Antifúngico tópico seguro para candidiasis vaginal durante el embarazo",
            riesgos: "Mínimos cuando se usa tópicamente. Sin absorción sistémica significativa.",
            recomendaciones: "Antifúngico de primera línea para candidiasis vaginal. Aplicar según indicaciones médicas.",
        },
    ),
    (
        "miconazol",
        EssentialEntry {
            name: "Miconazol",
            categoria: "Categoría C",
            descripcion: "Antifúngico imidazólico para uso tópico",
            riesgos: "Seguro en aplicación tópica. Evitar uso sistémico durante embarazo.",
            recomendaciones: "Preferir uso tópico. Alternativa segura para infecciones fúngicas locales.",
        },
    ),
    (
        "nistatina",
        EssentialEntry {
            name: "Nistatina",
            categoria: "Categoría B",
            descripcion: "Antifúngico poliénico, el más seguro durante embarazo",
            riesgos: "Prácticamente nulos. Mínima absorción sistémica.",
            recomendaciones: "Antifúngico más seguro durante embarazo. Primera opción para candidiasis oral.",
        },
    ),
    (
        "fluconazol",
        EssentialEntry {
            name: "Fluconazol",
            categoria: "Categoría C",
            descripcion: "Antifúngico sistémico con uso cauteloso en embarazo",
            riesgos: "Riesgo de malformaciones con dosis altas o uso prolongado.",
            recomendaciones: "Evitar en primer trimestre. Usar solo si es esencial.",
        },
    ),
    // Antibióticos básicos
    (
        "amoxicilina",
        EssentialEntry {
            name: "Amoxicilina",
            categoria: "Categoría B",
            descripcion: "Antibiótico betalactámico seguro durante todo el embarazo",
            riesgos: "Muy bajos. Antibiótico de primera línea en embarazo.",
            recomendaciones: "Antibiótico preferido durante embarazo. Seguro en todos los trimestres.",
        },
    ),
    (
        "ampicilina",
        EssentialEntry {
            name: "Ampicilina",
            categoria: "Categoría B",
            descripcion: "Penicilina de amplio espectro segura en embarazo",
            riesgos: "Mínimos. Perfil de seguridad excelente.",
            recomendaciones: "Alternativa segura a amoxicilina. Usar según cultivos de sensibilidad.",
        },
    ),
    (
        "cefalexina",
        EssentialEntry {
            name: "Cefalexina",
            categoria: "Categoría B",
            descripcion: "Cefalosporina de primera generación segura",
            riesgos: "Bajos. Alternativa segura para alérgicas a penicilinas.",
            recomendaciones: "Cefalosporina de elección durante embarazo.",
        },
    ),
    (
        "azitromicina",
        EssentialEntry {
            name: "Azitromicina",
            categoria: "Categoría B",
            descripcion: "Macrólido seguro para infecciones respiratorias",
            riesgos: "Mínimos. Buena penetración tisular.",
            recomendaciones: "Alternativa segura para pacientes alérgicas a betalactámicos.",
        },
    ),
    (
        "eritromicina",
        EssentialEntry {
            name: "Eritromicina",
            categoria: "Categoría B",
            descripcion: "Macrólido clásico seguro durante embarazo",
            riesgos: "Bajos. Puede causar molestias gastrointestinales.",
            recomendaciones: "Alternativa histórica segura. Preferir azitromicina por mejor tolerancia.",
        },
    ),
    (
        "clindamicina",
        EssentialEntry {
            name: "Clindamicina",
            categoria: "Categoría B",
            descripcion: "Antibiótico lincosamida con excelente actividad contra bacterias anaerobias gram-positivas y muchas bacterias aerobias gram-positivas. Inhibe la síntesis proteica bacteriana uniéndose a la subunidad 50S del ribosoma. Tiene excelente penetración tisular, especialmente en hueso, articulaciones y abscesos.",
            riesgos: "Estudios en animales no han mostrado efectos teratogénicos. Riesgo de colitis pseudomembranosa (Clostridium difficile) en la madre. Cruza la placenta pero no se han reportado efectos adversos fetales. Compatible con lactancia materna.",
            recomendaciones: "Antibiótico seguro durante embarazo para infecciones por anaerobios. Útil en vaginosis bacteriana, infecciones dentales, osteomielitis y infecciones de tejidos blandos. Monitorear síntomas gastrointestinales. Preferir vía oral cuando sea posible.",
        },
    ),
    // Analgésicos y antiinflamatorios
    (
        "paracetamol",
        EssentialEntry {
            name: "Paracetamol",
            categoria: "Categoría B",
            descripcion: "Analgésico y antipirético de primera línea en embarazo",
            riesgos: "Muy bajos cuando se usa según indicaciones.",
            recomendaciones: "Analgésico de elección durante todo el embarazo.",
        },
    ),
    (
        "acetaminofén",
        EssentialEntry {
            name: "Acetaminofén",
            categoria: "Categoría B",
            descripcion: "Sinónimo de paracetamol, seguro durante embarazo",
            riesgos: "Mínimos en dosis terapéuticas normales.",
            recomendaciones: "Analgésico preferido durante embarazo.",
        },
    ),
    (
        "ibuprofeno",
        EssentialEntry {
            name: "Ibuprofeno",
            categoria: "Categoría C/D",
            descripcion: "AINE con restricciones durante embarazo",
            riesgos: "Cierre prematuro ductus arterioso en tercer trimestre.",
            recomendaciones: "Evitar en tercer trimestre. Usar paracetamol como alternativa.",
        },
    ),
    (
        "aspirina",
        EssentialEntry {
            name: "Aspirina",
            categoria: "Categoría C/D",
            descripcion: "Salicilato con dosis-dependiente durante embarazo",
            riesgos: "Sangrado, cierre ductus arterioso en dosis altas.",
            recomendaciones: "Solo dosis bajas (81mg) si está indicado médicamente.",
        },
    ),
    (
        "naproxeno",
        EssentialEntry {
            name: "Naproxeno",
            categoria: "Categoría C/D",
            descripcion: "AINE de larga duración con restricciones",
            riesgos: "Similares a ibuprofeno, mayor duración de acción.",
            recomendaciones: "Evitar durante embarazo. Usar paracetamol.",
        },
    ),
    (
        "diclofenaco",
        EssentialEntry {
            name: "Diclofenaco",
            categoria: "Categoría C/D",
            descripcion: "AINE tópico y sistémico con precauciones",
            riesgos: "Efectos similares a otros AINEs.",
            recomendaciones: "Evitar sistémico. Tópico con precaución.",
        },
    ),
    // Vitaminas y suplementos
    (
        "ácido fólico",
        EssentialEntry {
            name: "Ácido Fólico",
            categoria: "Categoría A",
            descripcion: "Vitamina B9 esencial para prevenir defectos del tubo neural",
            riesgos: "Ninguno. Esencial durante embarazo.",
            recomendaciones: "Suplemento obligatorio 400-800 mcg diarios antes y durante embarazo.",
        },
    ),
    (
        "hierro",
        EssentialEntry {
            name: "Sulfato Ferroso",
            categoria: "Categoría A",
            descripcion: "Suplemento de hierro para prevenir anemia",
            riesgos: "Molestias gastrointestinales leves.",
            recomendaciones: "Suplemento esencial, especialmente en segundo y tercer trimestre.",
        },
    ),
    (
        "calcio",
        EssentialEntry {
            name: "Carbonato de Calcio",
            categoria: "Categoría A",
            descripcion: "Suplemento mineral para desarrollo óseo fetal",
            riesgos: "Mínimos. Puede causar estreñimiento.",
            recomendaciones: "1000-1300 mg diarios. Importante para prevenir preeclampsia.",
        },
    ),
    (
        "vitamina d",
        EssentialEntry {
            name: "Vitamina D",
            categoria: "Categoría A",
            descripcion: "Vitamina liposoluble esencial para absorción de calcio",
            riesgos: "Bajos en dosis fisiológicas.",
            recomendaciones: "600-800 UI diarias. Importante para desarrollo óseo fetal.",
        },
    ),
    // Antiácidos y digestivos
    (
        "omeprazol",
        EssentialEntry {
            name: "Omeprazol",
            categoria: "Categoría C",
            descripcion: "Inhibidor de bomba de protones para acidez",
            riesgos: "Datos limitados pero generalmente seguro.",
            recomendaciones: "Segunda línea después de antiácidos y modificaciones dietéticas.",
        },
    ),
    (
        "ranitidina",
        EssentialEntry {
            name: "Ranitidina",
            categoria: "Categoría B",
            descripcion: "Antagonista H2 (retirado del mercado por impurezas)",
            riesgos: "Anteriormente seguro, retirado por contaminación NDMA.",
            recomendaciones: "Usar famotidina como alternativa segura.",
        },
    ),
    (
        "famotidina",
        EssentialEntry {
            name: "Famotidina",
            categoria: "Categoría B",
            descripcion: "Antagonista H2 seguro para acidez",
            riesgos: "Muy bajos. Alternativa segura a ranitidina.",
            recomendaciones: "Antiácido de segunda línea seguro durante embarazo.",
        },
    ),
    (
        "antiácido",
        EssentialEntry {
            name: "Hidróxido de Aluminio/Magnesio",
            categoria: "Categoría A",
            descripcion: "Antiácidos de primera línea para acidez",
            riesgos: "Mínimos. Pueden afectar absorción de otros medicamentos.",
            recomendaciones: "Primera línea para acidez. Tomar separado de otros medicamentos.",
        },
    ),
    // Antialérgicos
    (
        "loratadina",
        EssentialEntry {
            name: "Loratadina",
            categoria: "Categoría B",
            descripcion: "Antihistamínico de segunda generación",
            riesgos: "Bajos. Mínima sedación.",
            recomendaciones: "Antihistamínico preferido durante embarazo.",
        },
    ),
    (
        "cetirizina",
        EssentialEntry {
            name: "Cetirizina",
            categoria: "Categoría B",
            descripcion: "Antihistamínico seguro con mínima sedación",
            riesgos: "Muy bajos. Alternativa segura a loratadina.",
            recomendaciones: "Antihistamínico de elección para alergias durante embarazo.",
        },
    ),
    (
        "difenhidramina",
        EssentialEntry {
            name: "Difenhidramina",
            categoria: "Categoría B",
            descripcion: "Antihistamínico de primera generación",
            riesgos: "Sedación. Seguro en dosis ocasionales.",
            recomendaciones: "Útil para insomnio ocasional además de alergias.",
        },
    ),
    // Relajantes musculares
    (
        "ciclobenzaprina",
        EssentialEntry {
            name: "Ciclobenzaprina",
            categoria: "Categoría B",
            descripcion: "Relajante muscular de acción central",
            riesgos: "Datos limitados en embarazo. Sedación posible.",
            recomendaciones: "Usar solo si es esencial. Preferir fisioterapia y medidas no farmacológicas.",
        },
    ),
    // Alternate spelling kept from the source data
    (
        "ciclobenzaprida",
        EssentialEntry {
            name: "Ciclobenzaprina",
            categoria: "Categoría B",
            descripcion: "Relajante muscular de acción central (nombre alternativo)",
            riesgos: "Datos limitados en embarazo. Sedación posible.",
            recomendaciones: "Usar solo si es esencial. Preferir fisioterapia y medidas no farmacológicas.",
        },
    ),
    // Medicamentos para gota
    (
        "alopurinol",
        EssentialEntry {
            name: "Alopurinol",
            categoria: "Categoría C",
            descripcion: "Inhibidor de xantina oxidasa para el tratamiento de la gota",
            riesgos: "Datos limitados en embarazo. Posibles efectos teratogénicos.",
            recomendaciones: "Evitar durante embarazo salvo casos graves. Considerar medidas dietéticas.",
        },
    ),
    // Antivirales
    (
        "aciclovir",
        EssentialEntry {
            name: "Aciclovir",
            categoria: "Categoría B",
            descripcion: "Antiviral para herpes simple y varicela zoster",
            riesgos: "Seguro durante embarazo. Datos extensos disponibles.",
            recomendaciones: "Antiviral de elección para infecciones herpéticas durante embarazo.",
        },
    ),
    // Antihipertensivos seguros
    (
        "metildopa",
        EssentialEntry {
            name: "Metildopa",
            categoria: "Categoría B",
            descripcion: "Antihipertensivo de primera línea en embarazo",
            riesgos: "Muy seguros. Amplia experiencia en embarazo.",
            recomendaciones: "Antihipertensivo preferido durante embarazo.",
        },
    ),
    (
        "nifedipino",
        EssentialEntry {
            name: "Nifedipino",
            categoria: "Categoría C",
            descripcion: "Bloqueador de canales de calcio para hipertensión",
            riesgos: "Generalmente seguro. Monitoreo de presión arterial necesario.",
            recomendaciones: "Alternativa a metildopa. Útil también para amenaza de parto prematuro.",
        },
    ),
    (
        "fluoxetina",
        EssentialEntry {
            name: "Fluoxetina",
            categoria: "Categoría B",
            descripcion: "Inhibidor selectivo de la recaptación de serotonina (ISRS). Antidepresivo considerado relativamente seguro durante el embarazo según estudios epidemiológicos.",
            riesgos: "Riesgo bajo de malformaciones congénitas. Posible síndrome de abstinencia neonatal transitorio si se usa cerca del parto.",
            recomendaciones: "ISRS de elección durante embarazo si se requiere tratamiento antidepresivo. Los beneficios generalmente superan los riesgos cuando la depresión materna es significativa.",
        },
    ),
    (
        "gentamicina",
        EssentialEntry {
            name: "Gentamicina",
            categoria: "Categoría C",
            descripcion: "Antibiótico aminoglucósido de uso parenteral para infecciones graves. Actúa inhibiendo la síntesis proteica bacteriana uniéndose a la subunidad 30S del ribosoma.",
            riesgos: "Riesgo de ototoxicidad y nefrotoxicidad materna. Cruza la placenta pero riesgo fetal bajo con uso corto. Evitar uso prolongado.",
            recomendaciones: "Reservar para infecciones graves cuando beneficios superen riesgos. Monitoreo de función renal y auditiva. Preferir cursos cortos.",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_key() {
        let entry = lookup("paracetamol").unwrap();
        assert_eq!(entry.name, "Paracetamol");
        assert_eq!(FdaCategory::from_label(entry.categoria), FdaCategory::B);
    }

    #[test]
    fn test_lookup_is_exact_only() {
        // Synonym and substring handling belong to the resolver.
        assert!(lookup("tylenol").is_none());
        assert!(lookup("paraceta").is_none());
    }

    #[test]
    fn test_to_record() {
        let record = lookup("ibuprofeno").unwrap().to_record();
        assert_eq!(record.source, RecordSource::Essential);
        assert_eq!(record.category, "Categoría C/D");
        assert_eq!(record.resolved_category(), FdaCategory::D);
        assert!(!record.risks.is_empty());
    }

    #[test]
    fn test_by_category() {
        let safe = by_category(FdaCategory::A);
        assert!(safe.iter().any(|e| e.name == "Ácido Fólico"));
        assert!(safe.iter().all(|e| FdaCategory::from_label(e.categoria) == FdaCategory::A));
    }

    #[test]
    fn test_keys_are_lowercase() {
        for key in keys() {
            assert_eq!(key, key.to_lowercase());
        }
    }
}
