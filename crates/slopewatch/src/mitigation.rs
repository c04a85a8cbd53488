//! Landslide mitigation checklist.
//!
//! The checklist is static demo data; completion state lives only in memory.

use serde::Serialize;

/// How urgent a mitigation action is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Do first.
    High,
    /// Do soon.
    Medium,
    /// Do when possible.
    Low,
}

impl Priority {
    /// Display colour as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#FF4444",
            Self::Medium => "#FFA500",
            Self::Low => "#4CAF50",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// What kind of measure an action is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Reduces the chance of a slide.
    Preventive,
    /// Prepares the response to a slide.
    Emergency,
    /// Watches for warning signs.
    Monitoring,
}

impl Category {
    /// Display colour as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Preventive => "#2196F3",
            Self::Emergency => "#FF5722",
            Self::Monitoring => "#9C27B0",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preventive => write!(f, "preventive"),
            Self::Emergency => write!(f, "emergency"),
            Self::Monitoring => write!(f, "monitoring"),
        }
    }
}

/// One entry of the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MitigationAction {
    /// Identifier within the checklist.
    pub id: u32,
    /// Short title.
    pub title: String,
    /// What the action involves.
    pub description: String,
    /// Urgency.
    pub priority: Priority,
    /// Kind of measure.
    pub category: Category,
    /// Whether the action has been carried out.
    pub completed: bool,
}

impl MitigationAction {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        priority: Priority,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            category,
            completed: false,
        }
    }

    /// Multi-line summary shown when an action is opened.
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "{}\n\nPriority: {}\nCategory: {}",
            self.description,
            self.priority.to_string().to_uppercase(),
            self.category
        )
    }
}

/// The mitigation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    actions: Vec<MitigationAction>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(default_actions())
    }
}

impl Checklist {
    /// Create a checklist from the given actions.
    #[must_use]
    pub fn new(actions: Vec<MitigationAction>) -> Self {
        Self { actions }
    }

    /// All actions, in checklist order.
    #[must_use]
    pub fn actions(&self) -> &[MitigationAction] {
        &self.actions
    }

    /// Look up an action by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&MitigationAction> {
        self.actions.iter().find(|action| action.id == id)
    }

    /// Flip the completion state of an action.
    ///
    /// Returns `false` if no action has that id.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.actions.iter_mut().find(|action| action.id == id) {
            Some(action) => {
                action.completed = !action.completed;
                true
            }
            None => false,
        }
    }

    /// Mark an action as completed. Completing it again changes nothing.
    ///
    /// Returns `false` if no action has that id.
    pub fn complete(&mut self, id: u32) -> bool {
        match self.actions.iter_mut().find(|action| action.id == id) {
            Some(action) => {
                action.completed = true;
                true
            }
            None => false,
        }
    }

    /// Number of completed actions.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.actions.iter().filter(|action| action.completed).count()
    }

    /// Completed share of the checklist as a whole percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.actions.is_empty() {
            return 0;
        }
        let total = self.actions.len();
        // round half up without going through floats
        let percent = (self.completed_count() * 200 + total) / (total * 2);
        u8::try_from(percent).unwrap_or(100)
    }
}

fn default_actions() -> Vec<MitigationAction> {
    use Category::{Emergency, Monitoring, Preventive};
    use Priority::{High, Medium};

    vec![
        MitigationAction::new(
            1,
            "Surface drainage",
            "Install drainage systems to stop water pooling on the ground",
            High,
            Preventive,
        ),
        MitigationAction::new(
            2,
            "Rainfall monitoring",
            "Track rainfall levels and weather warnings",
            High,
            Monitoring,
        ),
        MitigationAction::new(
            3,
            "Slope containment",
            "Build retaining walls and containment structures",
            High,
            Preventive,
        ),
        MitigationAction::new(
            4,
            "Revegetation",
            "Plant suitable vegetation to stabilise the soil",
            Medium,
            Preventive,
        ),
        MitigationAction::new(
            5,
            "Evacuation plan",
            "Set escape routes and safe meeting points",
            High,
            Emergency,
        ),
        MitigationAction::new(
            6,
            "Emergency kit",
            "Prepare a kit with essentials for emergencies",
            Medium,
            Emergency,
        ),
        MitigationAction::new(
            7,
            "Regular inspection",
            "Carry out periodic surveys of risk areas",
            Medium,
            Monitoring,
        ),
        MitigationAction::new(
            8,
            "Community training",
            "Train residents in landslide prevention and response",
            Medium,
            Preventive,
        ),
    ]
}
