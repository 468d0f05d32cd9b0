//! Immutable course catalog: semesters → chapters → units.
//!
//! The catalog is a read-only reference dataset injected into the service at
//! startup (held behind an `Arc` in app state). Ids are stable strings that
//! progress rows key against.

/// Number of quiz questions a unit carries unless the outline says otherwise.
pub const DEFAULT_TOTAL_QUESTIONS: u32 = 5;

/// Smallest content granule: one video plus one quiz.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: String,
    pub title: String,
    pub video_id: String,
    pub total_questions: u32,
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone)]
pub struct Semester {
    pub id: String,
    pub title: String,
    pub chapters: Vec<Chapter>,
}

/// The full course outline.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub semesters: Vec<Semester>,
}

impl Catalog {
    pub fn new(semesters: Vec<Semester>) -> Self {
        Self { semesters }
    }

    /// The course outline shipped with the service.
    pub fn builtin() -> Self {
        let unit = |id: &str, title: &str, video: &str| Unit {
            id: id.to_owned(),
            title: title.to_owned(),
            video_id: video.to_owned(),
            total_questions: DEFAULT_TOTAL_QUESTIONS,
        };
        Self::new(vec![
            Semester {
                id: "semester-1".to_owned(),
                title: "Foundations".to_owned(),
                chapters: vec![
                    Chapter {
                        id: "ch-1".to_owned(),
                        title: "Creation and Covenant".to_owned(),
                        units: vec![
                            unit("u-1-1", "In the Beginning", "vid-101"),
                            unit("u-1-2", "The Promise", "vid-102"),
                            unit("u-1-3", "Exodus", "vid-103"),
                        ],
                    },
                    Chapter {
                        id: "ch-2".to_owned(),
                        title: "Kings and Prophets".to_owned(),
                        units: vec![
                            unit("u-2-1", "The Kingdom", "vid-104"),
                            unit("u-2-2", "Voices in Exile", "vid-105"),
                        ],
                    },
                ],
            },
            Semester {
                id: "semester-2".to_owned(),
                title: "Fulfillment".to_owned(),
                chapters: vec![
                    Chapter {
                        id: "ch-3".to_owned(),
                        title: "The Gospels".to_owned(),
                        units: vec![
                            unit("u-3-1", "Incarnation", "vid-201"),
                            unit("u-3-2", "Public Ministry", "vid-202"),
                            unit("u-3-3", "Passion and Resurrection", "vid-203"),
                        ],
                    },
                    Chapter {
                        id: "ch-4".to_owned(),
                        title: "The Early Church".to_owned(),
                        units: vec![
                            unit("u-4-1", "Pentecost", "vid-204"),
                            unit("u-4-2", "Mission to the Nations", "vid-205"),
                        ],
                    },
                ],
            },
        ])
    }

    pub fn find_chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.semesters
            .iter()
            .flat_map(|s| s.chapters.iter())
            .find(|c| c.id == chapter_id)
    }

    pub fn find_unit(&self, chapter_id: &str, unit_id: &str) -> Option<&Unit> {
        self.find_chapter(chapter_id)?
            .units
            .iter()
            .find(|u| u.id == unit_id)
    }

    /// Quiz size for a unit, if the unit exists in the outline.
    pub fn total_questions(&self, chapter_id: &str, unit_id: &str) -> Option<u32> {
        self.find_unit(chapter_id, unit_id)
            .map(|u| u.total_questions)
    }

    /// Total number of units across the whole outline.
    pub fn unit_count(&self) -> usize {
        self.semesters
            .iter()
            .flat_map(|s| s.chapters.iter())
            .map(|c| c.units.len())
            .sum()
    }
}
