//! Static educational content for the dashboard and result views

use serde::Serialize;
use wastesort_core::WasteLabel;

pub const APP_TITLE: &str = "Recyclable and Non-Recyclable Waste Classification";

pub const APP_TAGLINE: &str =
    "Smart waste sorting: identifying recycling potential through digital image processing";

/// Dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub intro: Section,
    pub key_fact: &'static str,
    pub hero_image: HeroImage,
    pub material_groups: Vec<MaterialGroup>,
    pub principles: Principles,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroImage {
    pub url: &'static str,
    pub caption: &'static str,
}

/// One column of material facts
#[derive(Debug, Clone, Serialize)]
pub struct MaterialGroup {
    pub heading: &'static str,
    pub facts: Vec<MaterialFact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialFact {
    pub material: &'static str,
    pub fact: &'static str,
    /// Whether the fact is expanded when the page first renders
    pub expanded: bool,
}

/// Waste hierarchy in priority order
#[derive(Debug, Clone, Serialize)]
pub struct Principles {
    pub heading: &'static str,
    pub intro: &'static str,
    pub steps: Vec<Section>,
}

/// Advisory block shown under a classification result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub heading: &'static str,
    pub tips: Vec<&'static str>,
}

pub fn dashboard() -> DashboardContent {
    DashboardContent {
        title: APP_TITLE,
        tagline: APP_TAGLINE,
        intro: Section {
            heading: "Why should we sort our waste?",
            body: "Global waste production is expected to reach 3.4 billion tonnes by 2050. \
                   Without proper sorting, most of it ends up polluting oceans and soil. \
                   Sorting waste at the source can cut landfill load by up to 80% and makes \
                   recycling far more efficient.",
        },
        key_fact: "Plastic takes up to 450 years to decompose naturally.",
        hero_image: HeroImage {
            url: "https://blogger.googleusercontent.com/img/b/R29vZ2xl/AVvXsEhaKxiRDPyTgzrB1Kgof3gTxPCA3KlB6id79GIzsSti2nqTAXuB9Ja5YMwyP5QLJCHLEolRotiFtzaFHnwmaiCu6PrWf5r5GXYwbDrlmhyphenhyphenvdk_cgX3VT-jcMiFIB7Hv0quZSM_mTEeJG4o/s1600/foto+ilustrasi.jpg",
            caption: "Unmanaged piles of waste pollute the surrounding ecosystem.",
        },
        material_groups: vec![
            MaterialGroup {
                heading: "Recyclable",
                facts: vec![
                    MaterialFact {
                        material: "Paper & Cardboard",
                        fact: "Recycling 1 tonne of paper saves 17 mature trees, 7,000 gallons of \
                               water, and enough energy to power an average home for 6 months.",
                        expanded: true,
                    },
                    MaterialFact {
                        material: "Metal & Aluminium",
                        fact: "Recycling aluminium saves 95% of the energy needed to produce it \
                               from raw material. A can recycled today can be back on the shelf \
                               within 60 days.",
                        expanded: false,
                    },
                ],
            },
            MaterialGroup {
                heading: "Non-Recyclable",
                facts: vec![
                    MaterialFact {
                        material: "Organic Waste",
                        fact: "Organic waste piling up in landfills without oxygen produces \
                               methane, a greenhouse gas 25 times more potent than CO2.",
                        expanded: true,
                    },
                    MaterialFact {
                        material: "Textile Waste",
                        fact: "The fashion industry is responsible for 10% of global carbon \
                               emissions. Synthetic fabrics shed microplastics that poison the \
                               marine food chain.",
                        expanded: false,
                    },
                ],
            },
            MaterialGroup {
                heading: "Hazardous Waste",
                facts: vec![
                    MaterialFact {
                        material: "Batteries & Electronics",
                        fact: "A single small battery can contaminate 400,000 litres of water \
                               with heavy metals such as mercury, lead and cadmium.",
                        expanded: true,
                    },
                    MaterialFact {
                        material: "Glass",
                        fact: "Glass can be recycled endlessly without losing quality, yet a \
                               discarded bottle takes a million years to break down.",
                        expanded: false,
                    },
                ],
            },
        ],
        principles: Principles {
            heading: "Waste management principles (5R)",
            intro: "This classifier helps with the Recycle step. Always keep the order of \
                    priority in mind:",
            steps: vec![
                Section {
                    heading: "Refuse",
                    body: "Decline single-use plastics.",
                },
                Section {
                    heading: "Reduce",
                    body: "Cut down the waste you produce every day.",
                },
                Section {
                    heading: "Reuse",
                    body: "Use containers again while they are still fit for purpose.",
                },
                Section {
                    heading: "Recycle",
                    body: "Sort your waste (use this app!).",
                },
                Section {
                    heading: "Rot",
                    body: "Compost organic waste.",
                },
            ],
        },
    }
}

/// Advisory block for a label
pub fn advice(label: WasteLabel) -> Advice {
    match label {
        WasteLabel::Recyclable => Advice {
            heading: "Recycling tips",
            tips: vec![
                "Plastic bottles can become plant pots or craft projects.",
                "Collect paper and cardboard for a scrap collector, or make paper pulp for art.",
                "Clean metal items and take them to the nearest waste bank so they can be smelted again.",
            ],
        },
        WasteLabel::NonRecyclable => Advice {
            heading: "Handling tips",
            tips: vec![
                "Turn organic waste into compost at home.",
                "Never put hazardous waste (batteries, electronics) in the regular bin; find a dedicated e-waste collection point.",
                "Donate used clothing that is still wearable, or cut it into cleaning rags.",
            ],
        },
    }
}

/// Headline shown above the confidence metric
pub fn headline(label: WasteLabel) -> &'static str {
    match label {
        WasteLabel::Recyclable => "RESULT: RECYCLABLE",
        WasteLabel::NonRecyclable => "RESULT: NON-RECYCLABLE",
    }
}

/// Warning for results below the confidence threshold
pub fn low_confidence_warning(confidence_text: &str) -> String {
    format!("Inconclusive result ({confidence_text}). Try taking a clearer photo.")
}

pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Model is not available.";

pub const NO_IMAGE_MESSAGE: &str = "Upload an image or take a photo first.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_has_three_material_columns() {
        let content = dashboard();
        assert_eq!(content.material_groups.len(), 3);
        assert!(content
            .material_groups
            .iter()
            .all(|group| group.facts.iter().filter(|f| f.expanded).count() == 1));
    }

    #[test]
    fn test_five_principles_in_order() {
        let steps: Vec<_> = dashboard()
            .principles
            .steps
            .iter()
            .map(|s| s.heading)
            .collect();
        assert_eq!(steps, ["Refuse", "Reduce", "Reuse", "Recycle", "Rot"]);
    }

    #[test]
    fn test_advice_differs_per_label() {
        assert_ne!(
            advice(WasteLabel::Recyclable),
            advice(WasteLabel::NonRecyclable)
        );
        assert_eq!(advice(WasteLabel::Recyclable).tips.len(), 3);
    }

    #[test]
    fn test_warning_mentions_confidence() {
        assert_eq!(
            low_confidence_warning("50.00%"),
            "Inconclusive result (50.00%). Try taking a clearer photo."
        );
    }
}
