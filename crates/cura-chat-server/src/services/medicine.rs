//! Static over-the-counter medicine reference.
//!
//! The table is compiled into the binary and rendered in full into the
//! model's system instruction. `lookup` offers keyword search over the
//! same records.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicineRecord {
    pub condition: &'static str,
    pub medicine: &'static str,
    pub form: &'static str,
    pub age_group: &'static str,
    pub dosage: &'static str,
    pub examples: &'static str,
    pub notes: &'static str,
}

#[derive(Debug)]
pub struct MedicineCategory {
    pub name: &'static str,
    pub entries: &'static [MedicineRecord],
}

/// A record together with the category it was declared under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicineMatch {
    pub category: &'static str,
    pub record: &'static MedicineRecord,
}

#[derive(Debug, Clone, Copy)]
pub struct MedicineTable {
    categories: &'static [MedicineCategory],
}

impl MedicineTable {
    pub fn builtin() -> Self {
        Self { categories: MEDICINE_DATA }
    }

    pub fn categories(&self) -> &'static [MedicineCategory] {
        self.categories
    }

    /// Records whose condition, medicine or examples contain `keyword`
    /// (case-insensitive), in declaration order.
    pub fn lookup(&self, keyword: &str) -> impl Iterator<Item = MedicineMatch> + 'static {
        let needle = keyword.to_lowercase();
        self.categories.iter().flat_map(move |category| {
            let needle = needle.clone();
            category
                .entries
                .iter()
                .filter(move |entry| entry.matches(&needle))
                .map(move |record| MedicineMatch { category: category.name, record })
        })
    }

    /// Plain-text rendering used inside the system instruction
    pub fn render(&self) -> String {
        let mut out = String::new();
        for category in self.categories {
            let _ = writeln!(out, "Category: {}", category.name);
            for e in category.entries {
                let _ = writeln!(
                    out,
                    "- {}: {} ({}, {}) - Dosage: {}. Examples: {}. Notes: {}",
                    e.condition, e.medicine, e.form, e.age_group, e.dosage, e.examples, e.notes
                );
            }
            out.push('\n');
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl Default for MedicineTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MedicineRecord {
    fn matches(&self, needle_lower: &str) -> bool {
        self.condition.to_lowercase().contains(needle_lower)
            || self.medicine.to_lowercase().contains(needle_lower)
            || self.examples.to_lowercase().contains(needle_lower)
    }
}

static MEDICINE_DATA: &[MedicineCategory] = &[
    MedicineCategory {
        name: "Pain Relief / Muscle Sprain / Backache",
        entries: &[
            MedicineRecord {
                condition: "Muscle Pain, Sprain",
                medicine: "Diclofenac Spray",
                form: "Spray",
                age_group: "Adults",
                dosage: "Spray 3-4 times daily",
                examples: "Volini, Moov, Dynapar QPS",
                notes: "Avoid overuse",
            },
            MedicineRecord {
                condition: "Muscle Pain, Sprain",
                medicine: "Methyl Salicylate + Menthol Gel",
                form: "Gel",
                age_group: "Adults",
                dosage: "Apply thin layer 3-4 times daily",
                examples: "Iodex, Tiger Balm",
                notes: "Warming effect",
            },
            MedicineRecord {
                condition: "Joint & Back Pain",
                medicine: "Capsaicin Cream",
                form: "Cream",
                age_group: "Adults",
                dosage: "Apply small amount 3-4 times daily",
                examples: "Tufgear, Qutenza",
                notes: "Burning sensation on application",
            },
            MedicineRecord {
                condition: "Muscle Cramps",
                medicine: "Magnesium Oil Spray",
                form: "Spray",
                age_group: "Adults",
                dosage: "Spray and massage affected area",
                examples: "MgSport, Life-flo",
                notes: "Muscle relaxant",
            },
            MedicineRecord {
                condition: "Physical Pain Relief",
                medicine: "Hot/Cold Gel Packs",
                form: "Physical Aid",
                age_group: "All Ages",
                dosage: "Apply 15-20 mins as needed",
                examples: "Generic Ice/Heat Packs",
                notes: "Non-medicated option",
            },
        ],
    },
    MedicineCategory {
        name: "Travel Essentials",
        entries: &[
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "ORS Sachets",
                form: "Sachet",
                age_group: "All Ages",
                dosage: "1 sachet in 1L water, drink frequently",
                examples: "Electral, Pedialyte",
                notes: "For dehydration, food poisoning",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Paracetamol Tablets",
                form: "Tablet",
                age_group: "All Ages",
                dosage: "500-1000mg every 4-6 hours",
                examples: "Crocin, Dolo",
                notes: "Fever, headache, body pain",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Loperamide Tablets",
                form: "Tablet",
                age_group: "Adults",
                dosage: "4mg initially, then 2mg after each loose stool",
                examples: "Imodium",
                notes: "Traveler's diarrhea",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Cetirizine Tablets",
                form: "Tablet",
                age_group: "Adults",
                dosage: "10mg once daily",
                examples: "Zyrtec, Cetzine",
                notes: "Allergies, hay fever",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Domperidone Tablets",
                form: "Tablet",
                age_group: "Adults",
                dosage: "10mg 3 times daily before meals",
                examples: "Motilium",
                notes: "Nausea, motion sickness",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Neosporin Ointment",
                form: "Ointment",
                age_group: "All Ages",
                dosage: "Apply 2-3 times daily",
                examples: "Neosporin",
                notes: "Minor cuts, scrapes",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Adhesive Bandages",
                form: "Bandages",
                age_group: "All Ages",
                dosage: "Apply as needed",
                examples: "Band-Aid, Johnson & Johnson",
                notes: "Various sizes for cuts",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Antiseptic Wipes",
                form: "Wipes",
                age_group: "All Ages",
                dosage: "Clean wound before bandaging",
                examples: "Betadine Wipes",
                notes: "Portable wound cleaning",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Sunscreen SPF 30+",
                form: "Lotion",
                age_group: "All Ages",
                dosage: "Apply 15-30 mins before sun exposure",
                examples: "Neutrogena, Banana Boat",
                notes: "Reapply every 2 hours",
            },
            MedicineRecord {
                condition: "Travel Kit - Essential Bundle",
                medicine: "Insect Repellent",
                form: "Spray/Lotion",
                age_group: "All Ages",
                dosage: "Apply to exposed skin",
                examples: "OFF!, Repel",
                notes: "DEET-based for effectiveness",
            },
        ],
    },
    MedicineCategory {
        name: "Women's Health / Menstrual Care",
        entries: &[
            MedicineRecord {
                condition: "Period Pain / Dysmenorrhea",
                medicine: "Mefenamic Acid",
                form: "Tablet",
                age_group: "Adults",
                dosage: "500mg 3 times daily with meals",
                examples: "Meftal Spas, Ponstan",
                notes: "Take with food to avoid stomach upset",
            },
            MedicineRecord {
                condition: "Period Pain / Dysmenorrhea",
                medicine: "Ibuprofen",
                form: "Tablet",
                age_group: "Adults",
                dosage: "400-600mg every 4-6 hours",
                examples: "Brufen, Advil",
                notes: "Anti-inflammatory, reduces prostaglandins",
            },
            MedicineRecord {
                condition: "Period Pain / Dysmenorrhea",
                medicine: "Paracetamol",
                form: "Tablet",
                age_group: "All Ages",
                dosage: "500-1000mg every 4-6 hours",
                examples: "Crocin, Dolo",
                notes: "Gentler on stomach than NSAIDs",
            },
            MedicineRecord {
                condition: "Hormonal Sinus Issues",
                medicine: "Levocetirizine + Montelukast",
                form: "Tablet",
                age_group: "Adults",
                dosage: "5mg + 10mg once daily",
                examples: "Xyzal + Singulair",
                notes: "For hormonal sinus flareups",
            },
            MedicineRecord {
                condition: "Hormonal Sinus Issues",
                medicine: "Cetirizine",
                form: "Tablet",
                age_group: "Adults",
                dosage: "10mg once daily",
                examples: "Zyrtec, Cetzine",
                notes: "Non-drowsy antihistamine",
            },
            MedicineRecord {
                condition: "Menstrual Bloating",
                medicine: "Simethicone",
                form: "Tablet",
                age_group: "Adults",
                dosage: "125mg after meals",
                examples: "Gas-X, Colicaid",
                notes: "Reduces gas and bloating",
            },
            MedicineRecord {
                condition: "Menstrual Bloating",
                medicine: "Dicyclomine",
                form: "Tablet",
                age_group: "Adults",
                dosage: "20mg 4 times daily",
                examples: "Buscopan",
                notes: "Antispasmodic for cramps",
            },
            MedicineRecord {
                condition: "Iron Deficiency (Heavy Periods)",
                medicine: "Ferrous Sulfate",
                form: "Tablet",
                age_group: "Adults",
                dosage: "325mg 1-3 times daily",
                examples: "Feronia-XT, Fefol",
                notes: "Take with vitamin C for absorption",
            },
            MedicineRecord {
                condition: "Yeast Infection",
                medicine: "Clotrimazole Cream",
                form: "Cream",
                age_group: "Adults",
                dosage: "Apply twice daily for 7 days",
                examples: "Canesten, Candid",
                notes: "For vaginal yeast infections",
            },
            MedicineRecord {
                condition: "Urinary Tract Infection",
                medicine: "Cranberry Supplements",
                form: "Capsule",
                age_group: "Adults",
                dosage: "500mg twice daily",
                examples: "Cranberry Extract",
                notes: "Preventive, not treatment",
            },
        ],
    },
    MedicineCategory {
        name: "First Aid Kit Recommendations",
        entries: &[
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Adhesive Bandages (Various Sizes)",
                form: "Bandages",
                age_group: "All Ages",
                dosage: "Apply as needed",
                examples: "Band-Aid, Johnson & Johnson",
                notes: "Small, medium, large sizes",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Sterile Gauze Pads",
                form: "Gauze",
                age_group: "All Ages",
                dosage: "Apply to larger wounds",
                examples: "Generic Sterile Gauze",
                notes: "2x2 and 4x4 inch pads",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Medical Tape",
                form: "Tape",
                age_group: "All Ages",
                dosage: "Secure bandages and gauze",
                examples: "Micropore, Transpore",
                notes: "Hypoallergenic tape",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Antiseptic Solution",
                form: "Liquid",
                age_group: "All Ages",
                dosage: "Clean wounds before bandaging",
                examples: "Betadine, Hydrogen Peroxide",
                notes: "Prevents infection",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Antibiotic Ointment",
                form: "Ointment",
                age_group: "All Ages",
                dosage: "Apply to minor cuts after cleaning",
                examples: "Neosporin, Bacitracin",
                notes: "Prevents bacterial infection",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Hydrocortisone Cream 1%",
                form: "Cream",
                age_group: "All Ages",
                dosage: "Apply to rashes, insect bites",
                examples: "Cortizone-10",
                notes: "Reduces itching and inflammation",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Pain Relief Tablets",
                form: "Tablet",
                age_group: "All Ages",
                dosage: "As needed for pain",
                examples: "Paracetamol, Ibuprofen",
                notes: "Fever and pain relief",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Antihistamine Tablets",
                form: "Tablet",
                age_group: "All Ages",
                dosage: "As needed for allergies",
                examples: "Cetirizine, Diphenhydramine",
                notes: "Allergic reactions, insect bites",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Scissors & Tweezers",
                form: "Tools",
                age_group: "All Ages",
                dosage: "As needed",
                examples: "Medical Scissors, Splinter Tweezers",
                notes: "Cut bandages, remove splinters",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Instant Cold Pack",
                form: "Cold Pack",
                age_group: "All Ages",
                dosage: "Apply 15-20 minutes",
                examples: "Instant Ice Pack",
                notes: "Sprains, bruises, swelling",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Thermometer",
                form: "Device",
                age_group: "All Ages",
                dosage: "As needed",
                examples: "Digital Thermometer",
                notes: "Monitor fever",
            },
            MedicineRecord {
                condition: "First Aid Kit - Complete Bundle",
                medicine: "Emergency Contact List",
                form: "Document",
                age_group: "All Ages",
                dosage: "Keep updated",
                examples: "Local emergency numbers",
                notes: "Poison control, nearest hospital",
            },
        ],
    },
    MedicineCategory {
        name: "Skin Infections / Fungal / Rashes / Prickly Heat",
        entries: &[
            MedicineRecord {
                condition: "Fungal Infection",
                medicine: "Clotrimazole Powder/Cream",
                form: "Powder/Cream",
                age_group: "All Ages",
                dosage: "Apply twice daily on clean, dry area",
                examples: "Candid, Canesten",
                notes: "Powder for sweat-prone areas",
            },
            MedicineRecord {
                condition: "Fungal Infection",
                medicine: "Terbinafine Cream/Tablet",
                form: "Cream/Tablet",
                age_group: "Adults",
                dosage: "Cream: Apply twice daily / Tablet: 250 mg daily (Rx)",
                examples: "Lamisil",
                notes: "Stronger antifungal",
            },
            MedicineRecord {
                condition: "Yeast Infections",
                medicine: "Miconazole Cream/Powder",
                form: "Cream/Powder",
                age_group: "Adults",
                dosage: "Apply twice daily",
                examples: "Daktarin, Monistat",
                notes: "Effective against Candida",
            },
            MedicineRecord {
                condition: "Prickly Heat / Sweat",
                medicine: "Talcum Powder (Cooling/Antifungal)",
                form: "Powder",
                age_group: "All Ages",
                dosage: "Apply on affected areas once or twice daily",
                examples: "Nycil, DermiCool",
                notes: "Cooling effect",
            },
            MedicineRecord {
                condition: "Skin Itching / Allergy",
                medicine: "Calamine Lotion",
                form: "Lotion",
                age_group: "All Ages",
                dosage: "Apply 2-3 times daily",
                examples: "Lacto Calamine",
                notes: "Soothing skin protectant",
            },
            MedicineRecord {
                condition: "Allergic Rash",
                medicine: "Hydrocortisone 1% Cream",
                form: "Cream",
                age_group: "Adults, >2 yrs",
                dosage: "Apply thin layer twice daily",
                examples: "Cortizone-10, Locoid",
                notes: "Short-term use only",
            },
            MedicineRecord {
                condition: "Diaper Rash",
                medicine: "Zinc Oxide Cream",
                form: "Cream",
                age_group: "Infants, Children",
                dosage: "Apply after every diaper change",
                examples: "Desitin, Himalaya Diaper Rash",
                notes: "Protective barrier",
            },
            MedicineRecord {
                condition: "Eczema/Dermatitis",
                medicine: "Emollient Moisturizers (Non-Rx)",
                form: "Lotion/Cream",
                age_group: "All Ages",
                dosage: "Apply generously 2-3 times daily",
                examples: "Cetaphil, Aveeno",
                notes: "Maintains skin hydration",
            },
        ],
    },
    MedicineCategory {
        name: "Cough, Cold, Nasal Congestion, Allergies",
        entries: &[
            MedicineRecord {
                condition: "Dry Cough",
                medicine: "Dextromethorphan Syrup",
                form: "Syrup",
                age_group: "Adults",
                dosage: "10 ml every 6-8 hours",
                examples: "Benadryl Cough Syrup",
                notes: "Cough suppressant",
            },
            MedicineRecord {
                condition: "Wet Cough",
                medicine: "Ambroxol + Guaifenesin Syrup",
                form: "Syrup",
                age_group: "Adults",
                dosage: "10 ml 3 times daily",
                examples: "Mucosolvan, Alex Syrup",
                notes: "Expectorant",
            },
            MedicineRecord {
                condition: "Nasal Congestion",
                medicine: "Oxymetazoline Nasal Spray",
                form: "Nasal Spray",
                age_group: "Adults, >6 yrs",
                dosage: "2 sprays per nostril twice daily (max 3 days)",
                examples: "Otrivin, Nasivion",
                notes: "Risk of rebound congestion",
            },
            MedicineRecord {
                condition: "Allergic Rhinitis",
                medicine: "Cetirizine / Loratadine Tablet",
                form: "Tablet",
                age_group: "Adults, >6 yrs",
                dosage: "10 mg once daily",
                examples: "Zyrtec, Cetzine, Claritin",
                notes: "Non-drowsy antihistamine",
            },
            MedicineRecord {
                condition: "Throat Pain",
                medicine: "Benzocaine Lozenges",
                form: "Lozenges",
                age_group: "Adults",
                dosage: "Dissolve in mouth every 2-3 hrs",
                examples: "Strepsils, Cepacol",
                notes: "Local anesthetic",
            },
            MedicineRecord {
                condition: "Cough (Severe)",
                medicine: "Levocloperastine Syrup",
                form: "Syrup",
                age_group: "Adults",
                dosage: "5-10 ml thrice daily",
                examples: "Lupituss, TusQ",
                notes: "Centrally acting suppressant",
            },
            MedicineRecord {
                condition: "Blocked Nose",
                medicine: "Saline Nasal Drops",
                form: "Drops",
                age_group: "Infants/Children",
                dosage: "2-3 drops per nostril as needed",
                examples: "Nasoclear, Little Remedies",
                notes: "Safe for babies",
            },
        ],
    },
    MedicineCategory {
        name: "Gastric Issues (Acidity, Gas, Constipation, Diarrhea)",
        entries: &[
            MedicineRecord {
                condition: "Acidity, GERD",
                medicine: "Omeprazole / Pantoprazole Tablet",
                form: "Tablet",
                age_group: "Adults",
                dosage: "20-40 mg once daily before meals",
                examples: "Omez, Pan 40",
                notes: "PPI, first line for GERD",
            },
            MedicineRecord {
                condition: "Heartburn",
                medicine: "Antacid Liquid Suspension",
                form: "Liquid",
                age_group: "Adults",
                dosage: "10-15 ml after meals",
                examples: "Gelusil, Digene",
                notes: "Neutralizes stomach acid",
            },
            MedicineRecord {
                condition: "Bloating, Gas Relief",
                medicine: "Simethicone Tablets/Drops",
                form: "Tablet/Drops",
                age_group: "All Ages",
                dosage: "Adults: 125 mg / Infants: 0.5 ml (20 mg) after meals",
                examples: "Gas-X, Colicaid",
                notes: "Safe and fast relief",
            },
            MedicineRecord {
                condition: "Diarrhea (Mild)",
                medicine: "Loperamide Tablet",
                form: "Tablet",
                age_group: "Adults",
                dosage: "4 mg initially, then 2 mg after each loose stool",
                examples: "Imodium",
                notes: "Avoid in bloody diarrhea",
            },
            MedicineRecord {
                condition: "Dehydration",
                medicine: "Oral Rehydration Salts (ORS)",
                form: "Sachet",
                age_group: "All Ages",
                dosage: "1 sachet dissolved in 1L water, drink frequently",
                examples: "Electral, Pedialyte",
                notes: "Rehydration essential",
            },
            MedicineRecord {
                condition: "Constipation (Adults)",
                medicine: "Polyethylene Glycol (PEG) Powder",
                form: "Powder",
                age_group: "Adults",
                dosage: "17g in water once daily",
                examples: "Miralax",
                notes: "Gentle osmotic laxative",
            },
            MedicineRecord {
                condition: "Constipation (Infants)",
                medicine: "Glycerin Suppository",
                form: "Suppository",
                age_group: "Infants/Children",
                dosage: "1 suppository rectally as needed",
                examples: "Generic",
                notes: "Mild stool softener",
            },
        ],
    },
    MedicineCategory {
        name: "Wounds, Burns, Cuts",
        entries: &[
            MedicineRecord {
                condition: "Minor Cuts, Burns",
                medicine: "Povidone Iodine Ointment",
                form: "Ointment",
                age_group: "All Ages",
                dosage: "Apply to clean wound 2-3 times daily",
                examples: "Betadine",
                notes: "Antiseptic",
            },
            MedicineRecord {
                condition: "Wound Infection",
                medicine: "Mupirocin Ointment",
                form: "Ointment",
                age_group: "All Ages",
                dosage: "Apply 2-3 times daily",
                examples: "Bactroban",
                notes: "Antibiotic ointment (Rx)",
            },
            MedicineRecord {
                condition: "Burn Wounds",
                medicine: "Silver Sulfadiazine Cream",
                form: "Cream",
                age_group: "All Ages",
                dosage: "Apply thick layer once/twice daily",
                examples: "Silvadene",
                notes: "For minor burns",
            },
            MedicineRecord {
                condition: "Skin Abrasions",
                medicine: "Antibiotic Cream (Neomycin)",
                form: "Cream",
                age_group: "Adults, Children",
                dosage: "Apply 2-3 times daily",
                examples: "Neosporin",
                notes: "For minor superficial wounds",
            },
        ],
    },
    MedicineCategory {
        name: "Eye / Ear Problems",
        entries: &[
            MedicineRecord {
                condition: "Dry Eyes",
                medicine: "Artificial Tears (Lubricating Drops)",
                form: "Eye Drops",
                age_group: "All Ages",
                dosage: "1-2 drops in each eye 3-4 times daily",
                examples: "Refresh Tears, Tearfree",
                notes: "Moisturizes eyes",
            },
            MedicineRecord {
                condition: "Eye Allergies",
                medicine: "Ketotifen Eye Drops",
                form: "Eye Drops",
                age_group: "Adults",
                dosage: "1 drop in affected eye twice daily",
                examples: "Zaditor",
                notes: "Antihistamine drops",
            },
            MedicineRecord {
                condition: "Ear Wax Removal",
                medicine: "Carbamide Peroxide Ear Drops",
                form: "Ear Drops",
                age_group: "Adults, Children >3",
                dosage: "5-10 drops in ear canal, tilt head for few mins",
                examples: "Debrox",
                notes: "Softens and removes earwax",
            },
        ],
    },
    MedicineCategory {
        name: "Chronic Conditions (Rx Only)",
        entries: &[
            MedicineRecord {
                condition: "Hypertension",
                medicine: "Amlodipine / Losartan Tablets",
                form: "Tablet",
                age_group: "Adults",
                dosage: "Amlodipine: 5-10 mg daily / Losartan: 50-100 mg daily",
                examples: "Norvasc, Cozaar",
                notes: "First-line antihypertensives",
            },
            MedicineRecord {
                condition: "Type 2 Diabetes",
                medicine: "Metformin Tablet",
                form: "Tablet",
                age_group: "Adults",
                dosage: "500-1000 mg twice daily with meals",
                examples: "Glucophage, Glyciphage",
                notes: "First-line for diabetes",
            },
            MedicineRecord {
                condition: "Asthma (Acute Relief)",
                medicine: "Salbutamol Inhaler",
                form: "Inhaler",
                age_group: "Adults/Children",
                dosage: "2 puffs (100 mcg) every 4-6 hours as needed",
                examples: "Ventolin, Asthalin",
                notes: "Rescue inhaler",
            },
            MedicineRecord {
                condition: "Asthma (Maintenance)",
                medicine: "Budesonide Inhaler",
                form: "Inhaler",
                age_group: "Adults/Children",
                dosage: "200-400 mcg twice daily",
                examples: "Pulmicort",
                notes: "Maintenance steroid inhaler",
            },
        ],
    },
];
