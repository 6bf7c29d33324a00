use serde::Serialize;

/// One safety instruction, shown in both languages at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// English rendering
    pub primary_text: &'static str,

    /// Hindi rendering
    pub secondary_text: &'static str,
}

/// Oxygen therapy safety checklist. Order is display order.
pub const SAFETY_CHECKLIST: [ChecklistItem; 4] = [
    ChecklistItem {
        primary_text: "Verify physician's order for flow rate",
        secondary_text: "प्रवाह दर के लिए चिकित्सक के आदेश की पुष्टि करें",
    },
    ChecklistItem {
        primary_text: "Check for 'No Smoking' signs",
        secondary_text: "धूम्रपान निषेध संकेतों की जाँच करें",
    },
    ChecklistItem {
        primary_text: "Ensure sterile water in humidifier",
        secondary_text: "ह्यूमिडिफ़ायर में स्टेरिल पानी सुनिश्चित करें",
    },
    ChecklistItem {
        primary_text: "Monitor skin for pressure sores",
        secondary_text: "दबाव के घावों के लिए त्वचा की निगरानी करें",
    },
];
