use crate::resource::Tone;

use super::report::Slice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Total Students",
        value: "1,234",
        icon: "◉",
        tone: Tone::Primary,
    },
    StatCard {
        title: "Active Internships",
        value: "156",
        icon: "▣",
        tone: Tone::Success,
    },
    StatCard {
        title: "Completed Internships",
        value: "89",
        icon: "▤",
        tone: Tone::Info,
    },
    StatCard {
        title: "Success Rate",
        value: "92%",
        icon: "↗",
        tone: Tone::Warning,
    },
];

pub const INTERNSHIPS_BY_DEPARTMENT: &[Slice] = &[
    Slice::new("Computer Science", 45),
    Slice::new("Mechanical", 30),
    Slice::new("Electrical", 25),
    Slice::new("Civil", 20),
];

pub const SDG_DISTRIBUTION: &[Slice] = &[
    Slice::new("SDG 4", 35),
    Slice::new("SDG 8", 25),
    Slice::new("SDG 9", 20),
    Slice::new("SDG 11", 15),
    Slice::new("Others", 5),
];
