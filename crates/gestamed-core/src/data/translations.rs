//! Spanish → English/brand name-variation table.
//!
//! The official label database indexes only English and brand names, so
//! every outbound search expands the Spanish query through this table.
//! The same variants feed the local-fallback stage of the pipeline.

/// Name variants per Spanish generic name, in search-preference order.
pub const MEDICATION_TRANSLATIONS: &[(&str, &[&str])] = &[
    // AINEs
    ("naproxeno", &["naproxen", "naprosyn", "aleve"]),
    ("ibuprofeno", &["ibuprofen", "advil", "motrin"]),
    ("diclofenaco", &["diclofenac", "voltaren"]),
    ("celecoxib", &["celecoxib", "celebrex"]),
    ("indometacina", &["indomethacin", "indocin"]),
    // Cardiovasculares
    ("losartan", &["losartan", "cozaar"]),
    ("enalapril", &["enalapril", "vasotec"]),
    ("lisinopril", &["lisinopril", "prinivil", "zestril"]),
    ("amlodipino", &["amlodipine", "norvasc"]),
    ("metoprolol", &["metoprolol", "lopressor", "toprol"]),
    ("atenolol", &["atenolol", "tenormin"]),
    ("propranolol", &["propranolol", "inderal"]),
    ("nifedipino", &["nifedipine", "adalat", "procardia"]),
    ("hidroclorotiazida", &["hydrochlorothiazide", "microzide"]),
    ("furosemida", &["furosemide", "lasix"]),
    // Antidepresivos
    ("fluoxetina", &["fluoxetine", "prozac"]),
    ("sertralina", &["sertraline", "zoloft"]),
    ("paroxetina", &["paroxetine", "paxil"]),
    ("escitalopram", &["escitalopram", "lexapro"]),
    ("venlafaxina", &["venlafaxine", "effexor"]),
    ("bupropion", &["bupropion", "wellbutrin"]),
    ("amitriptilina", &["amitriptyline", "elavil"]),
    // Antibióticos
    ("amoxicilina", &["amoxicillin", "amoxil"]),
    ("azitromicina", &["azithromycin", "zithromax"]),
    ("claritromicina", &["clarithromycin", "biaxin"]),
    ("cefalexina", &["cephalexin", "keflex"]),
    ("clindamicina", &["clindamycin", "cleocin"]),
    ("eritromicina", &["erythromycin", "ery-tab"]),
    ("gentamicina", &["gentamicin", "garamycin"]),
    ("penicilina", &["penicillin", "pen-vk"]),
    ("ciprofloxacino", &["ciprofloxacin", "cipro"]),
    ("levofloxacino", &["levofloxacin", "levaquin"]),
    // Diabetes
    ("metformina", &["metformin", "glucophage"]),
    ("glibenclamida", &["glyburide", "diabeta"]),
    ("glimepirida", &["glimepiride", "amaryl"]),
    ("insulina", &["insulin", "humulin", "novolin"]),
    ("sitagliptina", &["sitagliptin", "januvia"]),
    // Antihistamínicos
    ("loratadina", &["loratadine", "claritin"]),
    ("cetirizina", &["cetirizine", "zyrtec"]),
    ("difenhidramina", &["diphenhydramine", "benadryl"]),
    ("clorfenamina", &["chlorpheniramine", "chlor-trimeton"]),
    // Analgésicos
    ("paracetamol", &["acetaminophen", "tylenol"]),
    ("acetaminofen", &["acetaminophen", "tylenol"]),
    ("tramadol", &["tramadol", "ultram"]),
    ("codeina", &["codeine"]),
    ("morfina", &["morphine"]),
    // Corticosteroides
    ("prednisona", &["prednisone", "deltasone"]),
    ("prednisolona", &["prednisolone", "prelone"]),
    ("betametasona", &["betamethasone", "celestone"]),
    ("dexametasona", &["dexamethasone", "decadron"]),
    ("hidrocortisona", &["hydrocortisone", "cortef"]),
    // Gastrointestinales
    ("omeprazol", &["omeprazole", "prilosec"]),
    ("lansoprazol", &["lansoprazole", "prevacid"]),
    ("ranitidina", &["ranitidine", "zantac"]),
    ("metoclopramida", &["metoclopramide", "reglan"]),
    ("loperamida", &["loperamide", "imodium"]),
    ("simeticona", &["simethicone", "gas-x"]),
    // Antiepilépticos
    ("fenitoina", &["phenytoin", "dilantin"]),
    ("carbamazepina", &["carbamazepine", "tegretol"]),
    ("valproato", &["valproic acid", "depakote"]),
    ("lamotrigina", &["lamotrigine", "lamictal"]),
    // Vitaminas
    ("acido folico", &["folic acid", "folate"]),
    ("vitamina d", &["vitamin d", "cholecalciferol"]),
    ("vitamina b12", &["vitamin b12", "cyanocobalamin"]),
    ("hierro", &["iron", "ferrous sulfate"]),
    ("calcio", &["calcium", "calcium carbonate"]),
    // Hormonales
    ("levotiroxina", &["levothyroxine", "synthroid"]),
    ("metimazol", &["methimazole", "tapazole"]),
    ("estradiol", &["estradiol"]),
    ("progesterona", &["progesterone"]),
    // Anticoagulantes
    ("warfarina", &["warfarin", "coumadin"]),
    ("heparina", &["heparin"]),
    ("enoxaparina", &["enoxaparin", "lovenox"]),
    // Otros comunes
    ("albuterol", &["albuterol", "proventil"]),
    ("salbutamol", &["albuterol", "proventil"]),
    ("digoxina", &["digoxin", "lanoxin"]),
    ("clonazepam", &["clonazepam", "klonopin"]),
    ("lorazepam", &["lorazepam", "ativan"]),
    ("alprazolam", &["alprazolam", "xanax"]),
];

/// English/brand variants for a Spanish term, empty when the term is not
/// in the table. Callers always search the original term first, so an
/// empty result just means no extra candidates.
pub fn english_names(spanish_term: &str) -> Vec<&'static str> {
    let normalized = spanish_term.to_lowercase();
    let normalized = normalized.trim();
    MEDICATION_TRANSLATIONS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, names)| names.to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_translation() {
        assert_eq!(
            english_names("furosemida"),
            vec!["furosemide", "lasix"]
        );
        assert_eq!(english_names("  Paracetamol "), vec!["acetaminophen", "tylenol"]);
    }

    #[test]
    fn test_unknown_term_has_no_variants() {
        assert!(english_names("xyznonexistent").is_empty());
    }

    #[test]
    fn test_keys_are_lowercase() {
        for (key, _) in MEDICATION_TRANSLATIONS {
            assert_eq!(*key, key.to_lowercase());
        }
    }
}
