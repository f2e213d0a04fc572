//! Comprehensive classified drug table.
//!
//! Larger curated table organized by therapeutic class, with per-drug
//! mechanism, monitoring advice and alias lists. Grew in two generations:
//! older entries carry the therapeutic class in `category` and the FDA
//! letter inside `pregnancy_risks`; newer entries carry the bare letter in
//! `category`. Both shapes are kept as-is; nothing is reconciled on load.

use crate::models::{DrugRecord, FdaCategory, RecordSource};

/// One entry of the comprehensive table.
#[derive(Debug, Clone, Copy)]
pub struct DrugClassification {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub category: &'static str,
    pub class: &'static str,
    pub mechanism: &'static str,
    pub pregnancy_risks: &'static str,
    pub recommendations: &'static str,
    pub monitoring: &'static str,
    pub alternatives: &'static [&'static str],
}

impl DrugClassification {
    /// FDA label for display: the `category` field when it carries a
    /// letter, otherwise the letter embedded in `pregnancy_risks`.
    pub fn category_label(&self) -> String {
        match FdaCategory::from_label(self.category) {
            FdaCategory::NotAssigned => {
                FdaCategory::from_label(self.pregnancy_risks).to_string()
            }
            _ => self.category.to_string(),
        }
    }

    /// Normalize into the pipeline's canonical record shape.
    pub fn to_record(&self) -> DrugRecord {
        DrugRecord {
            name: self.name.to_string(),
            category: self.category_label(),
            description: format!("{}. {}", self.class, self.mechanism),
            risks: self.pregnancy_risks.to_string(),
            recommendations: format!("{} Monitoreo: {}", self.recommendations, self.monitoring),
            alternatives: self.alternatives.iter().map(|a| a.to_string()).collect(),
            source: RecordSource::Comprehensive,
        }
    }
}

/// Exact-key lookup.
pub fn lookup(key: &str) -> Option<&'static DrugClassification> {
    COMPREHENSIVE_DRUGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, entry)| entry)
}

/// Table-specific search: exact key, then alias match (exact or substring
/// in either direction), then key substring in either direction. First
/// match in table order wins.
pub fn find(term: &str) -> Option<&'static DrugClassification> {
    let term = term.to_lowercase();
    let term = term.trim();

    if let Some(entry) = lookup(term) {
        return Some(entry);
    }

    for (_, entry) in COMPREHENSIVE_DRUGS {
        if entry.aliases.iter().any(|alias| {
            let alias = alias.to_lowercase();
            alias == term || alias.contains(term) || term.contains(alias.as_str())
        }) {
            return Some(entry);
        }
    }

    for (key, entry) in COMPREHENSIVE_DRUGS {
        if key.contains(term) || term.contains(key) {
            return Some(entry);
        }
    }

    None
}

/// All entries in table order.
pub fn all() -> impl Iterator<Item = &'static DrugClassification> {
    COMPREHENSIVE_DRUGS.iter().map(|(_, entry)| entry)
}

/// Entries whose `category` field equals the given label, case-insensitive.
/// Older entries carrying a therapeutic class there never match a letter,
/// a data-shape quirk of the source tables that is kept as-is.
pub fn by_category(label: &str) -> Vec<&'static DrugClassification> {
    all()
        .filter(|entry| entry.category.eq_ignore_ascii_case(label))
        .collect()
}

/// Entries whose therapeutic class contains the given term.
pub fn by_class(class: &str) -> Vec<&'static DrugClassification> {
    let class = class.to_lowercase();
    all()
        .filter(|entry| entry.class.to_lowercase().contains(&class))
        .collect()
}

/// Canonical keys in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    COMPREHENSIVE_DRUGS.iter().map(|(k, _)| *k)
}

pub const COMPREHENSIVE_DRUGS: &[(&str, DrugClassification)] = &[
    // Analgésicos y antiinflamatorios
    (
        "metamizol",
        DrugClassification {
            name: "Metamizol (Dipirona)",
            aliases: &["dipirona", "novalgina", "metamizole", "dipyrone"],
            category: "Analgésico antipirético",
            class: "Pirazolona",
            mechanism: "Inhibición de la ciclooxigenasa y bloqueo de canales de sodio",
            pregnancy_risks: "Categoría C - Evitar en tercer trimestre por riesgo de cierre prematuro del ductus arterioso",
            recommendations: "Usar con precaución. Evitar en tercer trimestre. Considerar alternativas como paracetamol.",
            monitoring: "Función renal, presión arterial, signos de sangrado",
            alternatives: &["paracetamol", "acetaminofén"],
        },
    ),
    // Antifúngicos tópicos y sistémicos
    (
        "clotrimazol",
        DrugClassification {
            name: "Clotrimazol",
            aliases: &["canesten", "lotrimin", "mycelex"],
            category: "Antifúngico tópico",
            class: "Derivado imidazólico",
            mechanism: "Inhibición de la síntesis de ergosterol en la membrana fúngica",
            pregnancy_risks: "Categoría B - Seguro para uso tópico durante el embarazo",
            recommendations: "Antifúngico de primera línea para candidiasis vaginal durante el embarazo. Preferir aplicación tópica.",
            monitoring: "Irritación local, respuesta clínica",
            alternatives: &["nistatina tópica", "miconazol tópico"],
        },
    ),
    (
        "miconazol",
        DrugClassification {
            name: "Miconazol",
            aliases: &["monistat", "daktarin", "micatin"],
            category: "Antifúngico tópico",
            class: "Derivado imidazólico",
            mechanism: "Inhibición de la síntesis de ergosterol",
            pregnancy_risks: "Categoría C - Usar solo si es necesario. Seguro en aplicación tópica.",
            recommendations: "Seguro para uso tópico. Evitar uso sistémico durante embarazo.",
            monitoring: "Irritación local, absorción sistémica mínima",
            alternatives: &["clotrimazol", "nistatina"],
        },
    ),
    (
        "nistatina",
        DrugClassification {
            name: "Nistatina",
            aliases: &["nystatin", "mycostatin"],
            category: "Antifúngico tópico",
            class: "Antibiótico poliénico",
            mechanism: "Unión al ergosterol y formación de poros en membrana fúngica",
            pregnancy_risks: "Categoría B - Seguro durante todo el embarazo",
            recommendations: "Antifúngico más seguro durante embarazo. Mínima absorción sistémica.",
            monitoring: "Irritación local mínima",
            alternatives: &["clotrimazol"],
        },
    ),
    (
        "terbinafina",
        DrugClassification {
            name: "Terbinafina",
            aliases: &["lamisil", "terbisil"],
            category: "Antifúngico sistémico",
            class: "Alilamina",
            mechanism: "Inhibición de la escualeno epoxidasa",
            pregnancy_risks: "Categoría B - Datos limitados, usar solo si es esencial",
            recommendations: "Evitar durante embarazo salvo infecciones graves. Preferir tratamiento tópico.",
            monitoring: "Función hepática, efectos sistémicos",
            alternatives: &["antifúngicos tópicos", "diferir tratamiento"],
        },
    ),
    (
        "ketoconazol",
        DrugClassification {
            name: "Ketoconazol",
            aliases: &["nizoral", "extina"],
            category: "Antifúngico sistémico",
            class: "Derivado imidazólico",
            mechanism: "Inhibición de la síntesis de ergosterol",
            pregnancy_risks: "Categoría C - Evitar uso sistémico. Tópico con precaución.",
            recommendations: "Contraindicado vía oral. Uso tópico solo si es necesario.",
            monitoring: "Función hepática, interacciones medicamentosas",
            alternatives: &["fluconazol en dosis bajas", "antifúngicos tópicos"],
        },
    ),
    // Antibióticos básicos
    (
        "ampicilina",
        DrugClassification {
            name: "Ampicilina",
            aliases: &["ampicillin", "principen"],
            category: "Antibiótico betalactámico",
            class: "Penicilina de amplio espectro",
            mechanism: "Inhibición de la síntesis de pared celular bacteriana",
            pregnancy_risks: "Categoría B - Seguro durante el embarazo",
            recommendations: "Antibiótico de primera línea durante embarazo. Seguro en todos los trimestres.",
            monitoring: "Reacciones alérgicas, función renal",
            alternatives: &["amoxicilina", "cefalexina"],
        },
    ),
    (
        "eritromicina",
        DrugClassification {
            name: "Eritromicina",
            aliases: &["erythromycin", "e-mycin"],
            category: "Antibiótico macrólido",
            class: "Macrólido",
            mechanism: "Inhibición de la síntesis proteica bacteriana",
            pregnancy_risks: "Categoría B - Seguro durante el embarazo",
            recommendations: "Alternativa segura para pacientes alérgicas a penicilinas.",
            monitoring: "Síntomas gastrointestinales, función hepática",
            alternatives: &["azitromicina", "amoxicilina"],
        },
    ),
    (
        "sulfametoxazol",
        DrugClassification {
            name: "Sulfametoxazol + Trimetoprima",
            aliases: &["bactrim", "septra", "cotrimoxazol"],
            category: "Antibiótico",
            class: "Sulfonamida + Inhibidor de folato",
            mechanism: "Inhibición secuencial de la síntesis de folato",
            pregnancy_risks: "Categoría C - Evitar en primer y tercer trimestre",
            recommendations: "Evitar en primer trimestre (defectos del tubo neural) y tercer trimestre (kernicterus).",
            monitoring: "Función renal, niveles de folato",
            alternatives: &["amoxicilina", "cefalexina", "eritromicina"],
        },
    ),
    // Antiácidos y protectores gástricos
    (
        "ranitidina",
        DrugClassification {
            name: "Ranitidina",
            aliases: &["zantac", "ranitidine"],
            category: "Antagonista H2",
            class: "Bloqueador H2",
            mechanism: "Inhibición de receptores H2 en células parietales",
            pregnancy_risks: "Categoría B - Generalmente seguro",
            recommendations: "Seguro para acidez durante embarazo. Retirado del mercado por impurezas NDMA.",
            monitoring: "Función renal, síntomas gastrointestinales",
            alternatives: &["omeprazol", "famotidina"],
        },
    ),
    (
        "famotidina",
        DrugClassification {
            name: "Famotidina",
            aliases: &["pepcid", "famotidine"],
            category: "Antagonista H2",
            class: "Bloqueador H2",
            mechanism: "Inhibición selectiva de receptores H2",
            pregnancy_risks: "Categoría B - Seguro durante el embarazo",
            recommendations: "Alternativa segura a ranitidina para acidez durante embarazo.",
            monitoring: "Función renal, respuesta clínica",
            alternatives: &["omeprazol", "antiácidos"],
        },
    ),
    (
        "hidróxido de aluminio",
        DrugClassification {
            name: "Hidróxido de Aluminio",
            aliases: &["maalox", "mylanta", "antiácido"],
            category: "Antiácido",
            class: "Antiácido no sistémico",
            mechanism: "Neutralización directa del ácido gástrico",
            pregnancy_risks: "Categoría A - Seguro en dosis normales",
            recommendations: "Antiácido seguro durante embarazo. Evitar uso excesivo prolongado.",
            monitoring: "Estreñimiento, absorción de otros medicamentos",
            alternatives: &["carbonato de calcio", "famotidina"],
        },
    ),
    // Vitaminas y suplementos
    (
        "ácido fólico",
        DrugClassification {
            name: "Ácido Fólico",
            aliases: &["folate", "folacin", "vitamina b9"],
            category: "Vitamina hidrosoluble",
            class: "Vitamina B",
            mechanism: "Cofactor en síntesis de ADN y metabolismo",
            pregnancy_risks: "Categoría A - Esencial durante el embarazo",
            recommendations: "Suplemento obligatorio antes y durante embarazo. Previene defectos del tubo neural.",
            monitoring: "Niveles séricos, desarrollo fetal",
            alternatives: &["multivitamínicos prenatales"],
        },
    ),
    (
        "sulfato ferroso",
        DrugClassification {
            name: "Sulfato Ferroso",
            aliases: &["hierro", "iron sulfate", "fer-in-sol"],
            category: "Suplemento mineral",
            class: "Sales de hierro",
            mechanism: "Suplementación de hierro para síntesis de hemoglobina",
            pregnancy_risks: "Categoría A - Seguro y necesario",
            recommendations: "Suplemento esencial para prevenir anemia durante embarazo.",
            monitoring: "Hemoglobina, hematocrito, síntomas gastrointestinales",
            alternatives: &["fumarato ferroso", "hierro polimaltosado"],
        },
    ),
    (
        "calcio",
        DrugClassification {
            name: "Carbonato de Calcio",
            aliases: &["calcium carbonate", "tums", "caltrate"],
            category: "Suplemento mineral",
            class: "Sales de calcio",
            mechanism: "Suplementación de calcio para desarrollo óseo",
            pregnancy_risks: "Categoría A - Seguro y beneficioso",
            recommendations: "Importante para desarrollo óseo fetal y prevención de preeclampsia.",
            monitoring: "Niveles séricos de calcio, función renal",
            alternatives: &["citrato de calcio", "lácteos fortificados"],
        },
    ),
    // Analgésicos tópicos
    (
        "diclofenaco tópico",
        DrugClassification {
            name: "Diclofenaco Tópico",
            aliases: &["voltaren gel", "diclofenac gel"],
            category: "AINE tópico",
            class: "Derivado del ácido acético",
            mechanism: "Inhibición local de ciclooxigenasa",
            pregnancy_risks: "Categoría C - Uso tópico con precaución",
            recommendations: "Minimizar absorción sistémica. Evitar en tercer trimestre.",
            monitoring: "Irritación local, absorción sistémica",
            alternatives: &["paracetamol", "compresas frías"],
        },
    ),
    // Categoría A - seguros
    (
        "levotiroxina",
        DrugClassification {
            name: "Levotiroxina",
            aliases: &["levothyroxine", "synthroid", "eutirox", "euthyrox"],
            category: "A",
            class: "Hormona tiroidea",
            mechanism: "Reemplazo hormonal tiroideo",
            pregnancy_risks: "Sin riesgos conocidos. Esencial para desarrollo fetal.",
            recommendations: "Continuar tratamiento. Ajustar dosis según TSH.",
            monitoring: "TSH cada 4-6 semanas",
            alternatives: &[],
        },
    ),
    // Categoría B - probablemente seguros
    (
        "acetaminofén",
        DrugClassification {
            name: "Acetaminofén (Paracetamol)",
            aliases: &["acetaminophen", "paracetamol", "tylenol", "tempra"],
            category: "B",
            class: "Analgésico antipirético",
            mechanism: "Inhibición de síntesis de prostaglandinas en SNC",
            pregnancy_risks: "Riesgo muy bajo. Analgésico preferido.",
            recommendations: "Primera línea para dolor y fiebre.",
            monitoring: "Dosis máxima 3g/día",
            alternatives: &[],
        },
    ),
    (
        "amoxicilina",
        DrugClassification {
            name: "Amoxicilina",
            aliases: &["amoxicillin", "amoxil", "trimox"],
            category: "B",
            class: "Antibiótico betalactámico",
            mechanism: "Inhibición síntesis pared celular bacteriana",
            pregnancy_risks: "Riesgo bajo. Antibiótico de primera línea.",
            recommendations: "Seguro durante todo el embarazo.",
            monitoring: "Función renal si uso prolongado",
            alternatives: &[],
        },
    ),
    (
        "azitromicina",
        DrugClassification {
            name: "Azitromicina",
            aliases: &["azithromycin", "zithromax", "z-pak"],
            category: "B",
            class: "Antibiótico macrólido",
            mechanism: "Inhibición síntesis proteica bacteriana",
            pregnancy_risks: "Riesgo bajo. Alternativa a eritromicina.",
            recommendations: "Seguro para infecciones respiratorias.",
            monitoring: "Función hepática si uso prolongado",
            alternatives: &[],
        },
    ),
    (
        "cefalexina",
        DrugClassification {
            name: "Cefalexina",
            aliases: &["cephalexin", "keflex"],
            category: "B",
            class: "Antibiótico cefalosporina",
            mechanism: "Inhibición síntesis pared celular",
            pregnancy_risks: "Riesgo bajo. Alternativa a penicilinas.",
            recommendations: "Seguro para ITU y infecciones de piel.",
            monitoring: "Función renal",
            alternatives: &[],
        },
    ),
    (
        "metformina",
        DrugClassification {
            name: "Metformina",
            aliases: &["metformin", "glucophage"],
            category: "B",
            class: "Antidiabético biguanida",
            mechanism: "Reducción gluconeogénesis hepática",
            pregnancy_risks: "Riesgo bajo. Reduce resistencia insulina.",
            recommendations: "Continuar en diabetes gestacional.",
            monitoring: "Glucosa, función renal",
            alternatives: &[],
        },
    ),
    (
        "insulina",
        DrugClassification {
            name: "Insulina",
            aliases: &["insulin", "humalog", "novolog", "lantus"],
            category: "B",
            class: "Hormona hipoglucemiante",
            mechanism: "Facilita captación celular de glucosa",
            pregnancy_risks: "Sin riesgos. No cruza placenta.",
            recommendations: "Tratamiento preferido diabetes gestacional.",
            monitoring: "Glucosa capilar frecuente",
            alternatives: &[],
        },
    ),
    (
        "heparina",
        DrugClassification {
            name: "Heparina",
            aliases: &["heparin", "lovenox", "enoxaparin"],
            category: "B",
            class: "Anticoagulante",
            mechanism: "Activación antitrombina III",
            pregnancy_risks: "Sin riesgos. No cruza placenta.",
            recommendations: "Anticoagulante de elección.",
            monitoring: "PTT, plaquetas",
            alternatives: &[],
        },
    ),
    (
        "metildopa",
        DrugClassification {
            name: "Metildopa",
            aliases: &["methyldopa", "aldomet"],
            category: "B",
            class: "Antihipertensivo central",
            mechanism: "Agonista alfa-2 central",
            pregnancy_risks: "Riesgo bajo. Antihipertensivo preferido.",
            recommendations: "Primera línea para hipertensión gestacional.",
            monitoring: "Presión arterial, función hepática",
            alternatives: &[],
        },
    ),
    (
        "esomeprazol",
        DrugClassification {
            name: "Esomeprazol",
            aliases: &["esomeprazole", "nexium"],
            category: "B",
            class: "Inhibidor bomba protones",
            mechanism: "Inhibición H+/K+-ATPase gástrica",
            pregnancy_risks: "Riesgo bajo para reflujo severo.",
            recommendations: "Seguro para ERGE sintomática.",
            monitoring: "Síntomas, magnesio sérico",
            alternatives: &[],
        },
    ),
    // Categoría C - usar con precaución
    (
        "omeprazol",
        DrugClassification {
            name: "Omeprazol",
            aliases: &["omeprazole", "prilosec"],
            category: "C",
            class: "Inhibidor bomba protones",
            mechanism: "Inhibición H+/K+-ATPase",
            pregnancy_risks: "Riesgo moderado. Usar si beneficio supera riesgo.",
            recommendations: "Esomeprazol preferido.",
            monitoring: "Función renal, magnesio",
            alternatives: &[],
        },
    ),
    (
        "ibuprofeno",
        DrugClassification {
            name: "Ibuprofeno",
            aliases: &["ibuprofen", "advil", "motrin"],
            category: "C",
            class: "AINE",
            mechanism: "Inhibición COX no selectiva",
            pregnancy_risks: "Riesgo cierre ductus arteriosus >30 sem.",
            recommendations: "Evitar tercer trimestre.",
            monitoring: "Función renal fetal",
            alternatives: &["acetaminofén"],
        },
    ),
    (
        "prednisona",
        DrugClassification {
            name: "Prednisona",
            aliases: &["prednisone", "deltasone"],
            category: "C",
            class: "Corticosteroide",
            mechanism: "Agonista receptor glucocorticoide",
            pregnancy_risks: "Riesgo paladar hendido primer trimestre.",
            recommendations: "Dosis mínima efectiva.",
            monitoring: "Glucosa, presión arterial",
            alternatives: &[],
        },
    ),
    (
        "fluoxetina",
        DrugClassification {
            name: "Fluoxetina",
            aliases: &["fluoxetine", "prozac"],
            category: "C",
            class: "ISRS",
            mechanism: "Inhibición recaptación serotonina",
            pregnancy_risks: "Riesgo hipertensión pulmonar persistente.",
            recommendations: "Evaluar beneficio-riesgo.",
            monitoring: "Estado mental, síntomas neonatales",
            alternatives: &[],
        },
    ),
    (
        "sertralina",
        DrugClassification {
            name: "Sertralina",
            aliases: &["sertraline", "zoloft"],
            category: "C",
            class: "ISRS",
            mechanism: "Inhibición selectiva recaptación serotonina",
            pregnancy_risks: "ISRS con menor riesgo.",
            recommendations: "ISRS preferido si es necesario.",
            monitoring: "Síntomas depresivos, ansiedad",
            alternatives: &[],
        },
    ),
    (
        "ciprofloxacina",
        DrugClassification {
            name: "Ciprofloxacina",
            aliases: &["ciprofloxacin", "cipro"],
            category: "C",
            class: "Fluoroquinolona",
            mechanism: "Inhibición DNA girasa bacteriana",
            pregnancy_risks: "Posibles efectos en cartílago fetal.",
            recommendations: "Solo si otros antibióticos inefectivos.",
            monitoring: "Función renal",
            alternatives: &[],
        },
    ),
    (
        "salbutamol",
        DrugClassification {
            name: "Salbutamol",
            aliases: &["albuterol", "ventolin", "proair"],
            category: "C",
            class: "Beta-2 agonista",
            mechanism: "Agonismo receptor beta-2 adrenérgico",
            pregnancy_risks: "Riesgo bajo para control asma.",
            recommendations: "Continuar para control asma.",
            monitoring: "Función pulmonar, frecuencia cardíaca",
            alternatives: &[],
        },
    ),
    // Categoría D - riesgo documentado
    (
        "clonazepam",
        DrugClassification {
            name: "Clonazepam",
            aliases: &["clonazepam", "klonopin", "rivotril"],
            category: "D",
            class: "Benzodiacepina",
            mechanism: "Modulación positiva GABA-A",
            pregnancy_risks: "Riesgo labio leporino, síndrome abstinencia.",
            recommendations: "Reducir gradualmente o sustituir.",
            monitoring: "Síntomas abstinencia neonatal",
            alternatives: &["psicoterapia", "antidepresivos seguros"],
        },
    ),
    (
        "diazepam",
        DrugClassification {
            name: "Diazepam",
            aliases: &["diazepam", "valium"],
            category: "D",
            class: "Benzodiacepina",
            mechanism: "Modulación GABA-A",
            pregnancy_risks: "Malformaciones, síndrome abstinencia neonatal.",
            recommendations: "Evitar o reducir gradualmente.",
            monitoring: "Síntomas abstinencia",
            alternatives: &["técnicas relajación"],
        },
    ),
    (
        "atenolol",
        DrugClassification {
            name: "Atenolol",
            aliases: &["atenolol", "tenormin"],
            category: "D",
            class: "Beta-bloqueador cardioselectivo",
            mechanism: "Antagonismo receptor beta-1",
            pregnancy_risks: "RCIU, bradicardia fetal.",
            recommendations: "Cambiar a metildopa.",
            monitoring: "Crecimiento fetal, FCF",
            alternatives: &["metildopa", "nifedipino"],
        },
    ),
    (
        "enalapril",
        DrugClassification {
            name: "Enalapril",
            aliases: &["enalapril", "vasotec"],
            category: "D",
            class: "IECA",
            mechanism: "Inhibición enzima convertidora angiotensina",
            pregnancy_risks: "Oligohidramnios, IR fetal, muerte fetal.",
            recommendations: "Discontinuar inmediatamente.",
            monitoring: "Líquido amniótico, función renal fetal",
            alternatives: &["metildopa", "nifedipino"],
        },
    ),
    (
        "losartan",
        DrugClassification {
            name: "Losartán",
            aliases: &["losartan", "cozaar"],
            category: "D",
            class: "ARA II",
            mechanism: "Antagonismo receptor angiotensina II",
            pregnancy_risks: "Oligohidramnios, IR fetal.",
            recommendations: "Discontinuar inmediatamente.",
            monitoring: "Función renal fetal",
            alternatives: &["metildopa"],
        },
    ),
    // Categoría X - contraindicados
    (
        "warfarina",
        DrugClassification {
            name: "Warfarina",
            aliases: &["warfarin", "coumadin"],
            category: "X",
            class: "Anticoagulante cumarínico",
            mechanism: "Inhibición síntesis factores coagulación",
            pregnancy_risks: "Embriopatía, hemorragias fetales.",
            recommendations: "Cambiar a heparina inmediatamente.",
            monitoring: "INR hasta cambio",
            alternatives: &["heparina", "enoxaparina"],
        },
    ),
    (
        "atorvastatina",
        DrugClassification {
            name: "Atorvastatina",
            aliases: &["atorvastatin", "lipitor"],
            category: "X",
            class: "Estatina",
            mechanism: "Inhibición HMG-CoA reductasa",
            pregnancy_risks: "Defectos congénitos, malformaciones SNC.",
            recommendations: "Discontinuar antes concepción.",
            monitoring: "Suspender hasta postparto",
            alternatives: &["dieta", "ejercicio"],
        },
    ),
    (
        "simvastatina",
        DrugClassification {
            name: "Simvastatina",
            aliases: &["simvastatin", "zocor"],
            category: "X",
            class: "Estatina",
            mechanism: "Inhibición HMG-CoA reductasa",
            pregnancy_risks: "Malformaciones congénitas.",
            recommendations: "Suspender inmediatamente.",
            monitoring: "Perfil lipídico postparto",
            alternatives: &["modificación estilo vida"],
        },
    ),
    (
        "isotretinoína",
        DrugClassification {
            name: "Isotretinoína",
            aliases: &["isotretinoin", "accutane", "roaccutan"],
            category: "X",
            class: "Retinoide sistémico",
            mechanism: "Modulación diferenciación celular",
            pregnancy_risks: "Teratógeno mayor. Malformaciones múltiples.",
            recommendations: "Contraindicado absoluto.",
            monitoring: "Test embarazo antes/durante tratamiento",
            alternatives: &["tratamientos tópicos"],
        },
    ),
    (
        "metotrexato",
        DrugClassification {
            name: "Metotrexato",
            aliases: &["methotrexate", "rheumatrex"],
            category: "X",
            class: "Antimetabolito",
            mechanism: "Inhibición dihidrofolato reductasa",
            pregnancy_risks: "Aborto, malformaciones múltiples.",
            recommendations: "Discontinuar 3 meses antes concepción.",
            monitoring: "Test embarazo",
            alternatives: &["sulfasalazina", "biologicos seguros"],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_exact_key() {
        assert_eq!(find("warfarina").unwrap().name, "Warfarina");
    }

    #[test]
    fn test_find_by_alias() {
        assert_eq!(find("coumadin").unwrap().name, "Warfarina");
        assert_eq!(find("prozac").unwrap().name, "Fluoxetina");
    }

    #[test]
    fn test_find_by_key_substring() {
        // Query longer than the key still matches
        assert_eq!(find("warfarina sódica").unwrap().name, "Warfarina");
    }

    #[test]
    fn test_category_label_older_entries() {
        // Older entries carry the class in `category` and the letter in the
        // risk text
        let entry = lookup("metamizol").unwrap();
        assert_eq!(entry.category_label(), "C");

        let entry = lookup("ácido fólico").unwrap();
        assert_eq!(entry.category_label(), "A");
    }

    #[test]
    fn test_category_label_newer_entries() {
        assert_eq!(lookup("warfarina").unwrap().category_label(), "X");
        assert_eq!(lookup("metformina").unwrap().category_label(), "B");
    }

    #[test]
    fn test_by_category_letter_only() {
        let contraindicated = by_category("X");
        assert!(contraindicated.iter().any(|e| e.name == "Warfarina"));
        // Older class-labeled entries never show up under a letter
        assert!(by_category("Antifúngico tópico")
            .iter()
            .any(|e| e.name == "Clotrimazol"));
    }

    #[test]
    fn test_by_class() {
        let statins = by_class("estatina");
        assert_eq!(statins.len(), 2);
    }

    #[test]
    fn test_to_record() {
        let record = lookup("enalapril").unwrap().to_record();
        assert_eq!(record.source, RecordSource::Comprehensive);
        assert_eq!(record.resolved_category(), FdaCategory::D);
        assert!(record.alternatives.contains(&"metildopa".to_string()));
    }
}
