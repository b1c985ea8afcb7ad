//! Dataset statistics for the information page
//!
//! Image counts per category of the public "Garbage Classification"
//! dataset the classifier was trained on, grouped into the two classes the
//! model predicts.

use serde::Serialize;
use wastesort_core::WasteLabel;

pub const DATASET_SOURCE_NAME: &str = "Kaggle - Garbage Classification";

pub const DATASET_SOURCE_URL: &str =
    "https://www.kaggle.com/datasets/mostafaabla/garbage-classification";

const BAR_COLOR: &str = "#87CEEB";
const RECYCLABLE_COLOR: &str = "#4CAF50";
const NON_RECYCLABLE_COLOR: &str = "#FF9999";

/// (category, image count, binary class)
const CATEGORIES: [(&str, u32, WasteLabel); 12] = [
    ("paper", 1050, WasteLabel::Recyclable),
    ("plastic", 865, WasteLabel::Recyclable),
    ("metal", 769, WasteLabel::Recyclable),
    ("cardboard", 891, WasteLabel::Recyclable),
    ("brown-glass", 607, WasteLabel::Recyclable),
    ("green-glass", 629, WasteLabel::Recyclable),
    ("white-glass", 775, WasteLabel::Recyclable),
    ("biological", 985, WasteLabel::NonRecyclable),
    ("clothes", 5325, WasteLabel::NonRecyclable),
    ("shoes", 1977, WasteLabel::NonRecyclable),
    ("trash", 697, WasteLabel::NonRecyclable),
    ("battery", 945, WasteLabel::NonRecyclable),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub images: u32,
    pub group: WasteLabel,
}

/// Fixed per-category image counts
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    categories: Vec<CategoryCount>,
}

/// One slice of the binary proportion chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: WasteLabel,
    pub name: &'static str,
    pub images: u32,
    pub fraction: f64,
    /// `%.1f%%` of the fraction, e.g. `36.0%`
    pub percent_text: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub color: &'static str,
    pub bars: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

/// Everything the dataset page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetView {
    pub source_name: &'static str,
    pub source_url: &'static str,
    pub total_images: u32,
    pub bar_chart: BarChart,
    pub pie_chart: PieChart,
}

impl DatasetSummary {
    pub fn new() -> Self {
        Self {
            categories: CATEGORIES
                .iter()
                .map(|&(category, images, group)| CategoryCount {
                    category,
                    images,
                    group,
                })
                .collect(),
        }
    }

    pub fn categories(&self) -> &[CategoryCount] {
        &self.categories
    }

    /// Image count for a category
    pub fn count(&self, category: &str) -> Option<u32> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.images)
    }

    pub fn total(&self) -> u32 {
        self.categories.iter().map(|c| c.images).sum()
    }

    /// Total images in one binary class
    pub fn group_total(&self, group: WasteLabel) -> u32 {
        self.categories
            .iter()
            .filter(|c| c.group == group)
            .map(|c| c.images)
            .sum()
    }

    pub fn bar_chart(&self) -> BarChart {
        BarChart {
            title: "Distribution per class (sub-category)",
            color: BAR_COLOR,
            bars: self.categories.clone(),
        }
    }

    pub fn pie_chart(&self) -> PieChart {
        let total = self.total();
        let slices = [
            (WasteLabel::Recyclable, "Recyclable", RECYCLABLE_COLOR),
            (WasteLabel::NonRecyclable, "Non Recyclable", NON_RECYCLABLE_COLOR),
        ]
        .into_iter()
        .map(|(label, name, color)| {
            let images = self.group_total(label);
            let fraction = if total > 0 {
                images as f64 / total as f64
            } else {
                0.0
            };
            PieSlice {
                label,
                name,
                images,
                fraction,
                percent_text: format!("{:.1}%", fraction * 100.0),
                color,
            }
        })
        .collect();

        PieChart {
            title: "Binary class proportion",
            slices,
        }
    }

    pub fn view(&self) -> DatasetView {
        DatasetView {
            source_name: DATASET_SOURCE_NAME,
            source_url: DATASET_SOURCE_URL,
            total_images: self.total(),
            bar_chart: self.bar_chart(),
            pie_chart: self.pie_chart(),
        }
    }
}

impl Default for DatasetSummary {
    fn default() -> Self {
        Self::new()
    }
}
