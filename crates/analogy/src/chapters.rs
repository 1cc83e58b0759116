#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn estimated_minutes(&self) -> u32 {
        match self {
            Difficulty::Beginner => 15,
            Difficulty::Intermediate => 25,
            Difficulty::Advanced => 35,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub order: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CourseOutline {
    pub id: String,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub analogy_style: String,
    pub chapters: Vec<Chapter>,
    pub estimated_minutes: u32,
}

const CHAPTER_TEMPLATES: &[(&str, Difficulty)] = &[
    ("Introduction to", Difficulty::Beginner),
    ("Fundamentals of", Difficulty::Beginner),
    ("Practical Applications of", Difficulty::Intermediate),
    ("Advanced Concepts in", Difficulty::Advanced),
    ("Mastering", Difficulty::Advanced),
];

/// Fixed five-chapter progression from beginner to advanced.
pub fn course_outline(topic: &str, style: &str) -> CourseOutline {
    let chapters: Vec<Chapter> = CHAPTER_TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, (prefix, difficulty))| Chapter {
            id: uuid::Uuid::new_v4().to_string(),
            title: format!("{prefix} {topic}"),
            description: format!("Learn {topic} through {style} perspectives"),
            difficulty: *difficulty,
            estimated_minutes: difficulty.estimated_minutes(),
            order: (i + 1) as u32,
        })
        .collect();

    let estimated_minutes = chapters.iter().map(|c| c.estimated_minutes).sum();

    CourseOutline {
        id: uuid::Uuid::new_v4().to_string(),
        title: format!("Mastering {topic}"),
        description: format!("A comprehensive course on {topic} explained through {style} analogies"),
        topic: topic.to_string(),
        analogy_style: style.to_string(),
        chapters,
        estimated_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_outline_has_five_ordered_chapters() {
        let outline = course_outline("photosynthesis", "gardener");

        assert_eq!(outline.title, "Mastering photosynthesis");
        assert_eq!(outline.chapters.len(), 5);
        assert_eq!(outline.chapters[0].title, "Introduction to photosynthesis");
        assert_eq!(outline.chapters[4].title, "Mastering photosynthesis");
        for (i, chapter) in outline.chapters.iter().enumerate() {
            assert_eq!(chapter.order, (i + 1) as u32);
        }
    }

    #[test]
    fn test_course_outline_sums_durations() {
        let outline = course_outline("atoms", "chef");
        // 15 + 15 + 25 + 35 + 35
        assert_eq!(outline.estimated_minutes, 125);
        assert_eq!(
            outline.chapters[2].estimated_minutes,
            Difficulty::Intermediate.estimated_minutes()
        );
    }
}
