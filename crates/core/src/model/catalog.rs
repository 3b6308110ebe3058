use crate::model::ids::{CourseId, OlympiadId, TeacherId};

/// A course card with optional syllabus and learning outcomes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    pub image: String,
    pub syllabus: Vec<String>,
    pub outcomes: Option<String>,
}

/// A teacher in the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub subject: String,
    pub bio: String,
    pub image: String,
    pub quote: Option<String>,
}

/// An olympiad listing with its stage roadmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Olympiad {
    pub id: OlympiadId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub details: String,
    pub roadmap: Vec<String>,
}
