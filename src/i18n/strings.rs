use crate::state::TAB_COUNT;

/// All localized user-facing strings for a language
///
/// Every field is mandatory: a bundle that leaves one out does not compile.
/// Emptiness is checked separately when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    // ==================== Header ====================
    /// Page title shown above the tab strip (e.g., "Oxygen Therapy")
    pub title: &'static str,

    /// Placeholder of the clinical-term search box
    pub search_placeholder: &'static str,

    /// Label of the view toggle while the learning view is active
    pub view_dashboard_label: &'static str,

    /// Label of the view toggle while the dashboard is active
    pub back_label: &'static str,

    // ==================== Learning Tabs ====================
    /// Tab labels in display order: Introduction, Definition, Purpose, Study Material
    pub tab_labels: [&'static str; TAB_COUNT],

    /// Body of the Introduction tab
    pub intro_text: &'static str,

    /// Term on the front face of the definition card
    pub definition_front: &'static str,

    /// Explanation on the back face of the definition card
    pub definition_back: &'static str,

    /// Hint shown on the front face only
    pub flip_prompt: &'static str,

    /// Quotation shown on the Purpose tab
    pub purpose_text: &'static str,

    // ==================== Study Material ====================
    /// Heading above the bilingual checklist
    pub checklist_title: &'static str,

    /// Label of the download trigger
    pub download_label: &'static str,

    /// Language tag displayed next to the asset size (e.g., "Bilingual")
    pub asset_language_tag: &'static str,

    // ==================== Dashboard ====================
    pub dashboard_title: &'static str,
    pub learners_label: &'static str,
    pub mastery_label: &'static str,
}

const FIELD_NAMES: [&str; 19] = [
    "title",
    "search_placeholder",
    "view_dashboard_label",
    "back_label",
    "tab_labels[0]",
    "tab_labels[1]",
    "tab_labels[2]",
    "tab_labels[3]",
    "intro_text",
    "definition_front",
    "definition_back",
    "flip_prompt",
    "purpose_text",
    "checklist_title",
    "download_label",
    "asset_language_tag",
    "dashboard_title",
    "learners_label",
    "mastery_label",
];

impl LocaleBundle {
    /// Every field as `(name, value)`, tab labels flattened in order.
    pub fn fields(&self) -> Vec<(&'static str, &'static str)> {
        let values = [
            self.title,
            self.search_placeholder,
            self.view_dashboard_label,
            self.back_label,
            self.tab_labels[0],
            self.tab_labels[1],
            self.tab_labels[2],
            self.tab_labels[3],
            self.intro_text,
            self.definition_front,
            self.definition_back,
            self.flip_prompt,
            self.purpose_text,
            self.checklist_title,
            self.download_label,
            self.asset_language_tag,
            self.dashboard_title,
            self.learners_label,
            self.mastery_label,
        ];

        FIELD_NAMES.iter().copied().zip(values).collect()
    }
}

// ==================== English Strings ====================

/// English bundle (default language)
pub const ENGLISH_BUNDLE: LocaleBundle = LocaleBundle {
    // Header
    title: "Oxygen Therapy",
    search_placeholder: "Search clinical terms...",
    view_dashboard_label: "View Dashboard",
    back_label: "Back to Learning",

    // Tabs
    tab_labels: ["Introduction", "Definition", "Purpose", "Study Material"],
    intro_text: "Oxygen therapy is a medical intervention that provides supplemental oxygen to patients with respiratory distress or chronic conditions.",
    definition_front: "Hypoxia",
    definition_back: "A state where the body is deprived of adequate oxygen supply at the tissue level.",
    flip_prompt: "Click for clinical application",
    purpose_text: "To maintain adequate tissue oxygenation while minimizing cardiopulmonary work.",

    // Study material
    checklist_title: "Safety Checklist Preview",
    download_label: "DOWNLOAD PDF",
    asset_language_tag: "Bilingual",

    // Dashboard
    dashboard_title: "Institutional Overview",
    learners_label: "Total Active Learners",
    mastery_label: "Average Module Mastery",
};

// ==================== Hindi Strings ====================

/// Hindi bundle
///
/// The definition term stays in English: clinicians use "Hypoxia" as-is.
pub const HINDI_BUNDLE: LocaleBundle = LocaleBundle {
    // Header
    title: "ऑक्सीजन थेरेपी",
    search_placeholder: "नैदानिक शब्द खोजें...",
    view_dashboard_label: "डैशबोर्ड देखें",
    back_label: "सीखने पर वापस जाएं",

    // Tabs
    tab_labels: ["परिचय", "परिभाषा", "उद्देश्य", "अध्ययन सामग्री"],
    intro_text: "ऑक्सीजन थेरेपी एक चिकित्सा हस्तक्षेप है जो श्वसन संकट या पुरानी स्थितियों वाले रोगियों को पूरक ऑक्सीजन प्रदान करता है।",
    definition_front: "Hypoxia",
    definition_back: "ऐसी स्थिति जिसमें शरीर के ऊतकों को पर्याप्त ऑक्सीजन की आपूर्ति नहीं मिल पाती है।",
    flip_prompt: "नैदानिक उपयोग के लिए क्लिक करें",
    purpose_text: "कार्डियोपल्मोनरी कार्य को कम करते हुए पर्याप्त ऊतक ऑक्सीजन बनाए रखना।",

    // Study material
    checklist_title: "सुरक्षा चेकलिस्ट पूर्वावलोकन",
    download_label: "पीडीएफ डाउनलोड करें",
    asset_language_tag: "द्विभाषी",

    // Dashboard
    dashboard_title: "संस्थान का अवलोकन",
    learners_label: "कुल सक्रिय शिक्षार्थी",
    mastery_label: "औसत मॉड्यूल महारत",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_fields_not_empty() {
        for (name, value) in ENGLISH_BUNDLE.fields() {
            assert!(!value.trim().is_empty(), "English field {} is empty", name);
        }
    }

    #[test]
    fn test_english_tab_labels_order() {
        assert_eq!(
            ENGLISH_BUNDLE.tab_labels,
            ["Introduction", "Definition", "Purpose", "Study Material"]
        );
    }

    #[test]
    fn test_english_flip_prompt() {
        assert_eq!(ENGLISH_BUNDLE.flip_prompt, "Click for clinical application");
    }

    // ==================== Hindi Strings Tests ====================

    #[test]
    fn test_hindi_fields_not_empty() {
        for (name, value) in HINDI_BUNDLE.fields() {
            assert!(!value.trim().is_empty(), "Hindi field {} is empty", name);
        }
    }

    #[test]
    fn test_hindi_tab_labels_order() {
        assert_eq!(
            HINDI_BUNDLE.tab_labels,
            ["परिचय", "परिभाषा", "उद्देश्य", "अध्ययन सामग्री"]
        );
    }

    #[test]
    fn test_hindi_definition_back_differs_from_english() {
        assert_ne!(HINDI_BUNDLE.definition_back, ENGLISH_BUNDLE.definition_back);
    }

    // ==================== Field Listing Tests ====================

    #[test]
    fn test_fields_covers_every_member() {
        let fields = ENGLISH_BUNDLE.fields();
        assert_eq!(fields.len(), FIELD_NAMES.len());
        assert_eq!(fields[0], ("title", "Oxygen Therapy"));
        assert_eq!(fields[7], ("tab_labels[3]", "Study Material"));
        assert_eq!(fields[18], ("mastery_label", "Average Module Mastery"));
    }
}
