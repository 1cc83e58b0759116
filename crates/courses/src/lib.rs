use std::path::{Path, PathBuf};

mod error;
pub use error::*;

const SAVED_COURSES_DIR: &str = "saved_courses";

/// A finished explanation the learner chose to keep. Stored as one JSON
/// file per course, keyed by id.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCourse {
    pub id: String,
    pub topic: String,
    pub analogy_style: String,
    pub content: String,
    pub saved_timestamp: i64,
    #[serde(default = "default_true")]
    pub is_complete: bool,
    #[serde(default)]
    pub word_count: usize,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct CourseStore {
    dir: PathBuf,
}

impl CourseStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: data_dir.as_ref().join(SAVED_COURSES_DIR),
        }
    }

    pub fn save(&self, topic: &str, style: &str, content: &str) -> Result<SavedCourse, Error> {
        std::fs::create_dir_all(&self.dir)?;

        let course = SavedCourse {
            id: uuid::Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            analogy_style: style.to_string(),
            content: content.to_string(),
            saved_timestamp: chrono::Utc::now().timestamp_millis(),
            is_complete: true,
            word_count: content.split_whitespace().count(),
        };

        let path = self.course_path(&course.id);
        std::fs::write(&path, serde_json::to_string_pretty(&course)?)?;
        tracing::debug!("course saved: {}", path.display());

        Ok(course)
    }

    /// Newest first. Unreadable or malformed files are skipped rather
    /// than failing the whole listing.
    pub fn list(&self) -> Result<Vec<SavedCourse>, Error> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut courses = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            match std::fs::read_to_string(&path)
                .map_err(Error::from)
                .and_then(|s| serde_json::from_str::<SavedCourse>(&s).map_err(Error::from))
            {
                Ok(course) => courses.push(course),
                Err(e) => {
                    tracing::warn!("skipping unreadable course file {}: {}", path.display(), e);
                }
            }
        }

        courses.sort_by(|a, b| b.saved_timestamp.cmp(&a.saved_timestamp));
        Ok(courses)
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedCourse>, Error> {
        let path = self.course_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let course = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        Ok(Some(course))
    }

    /// True when a file was actually removed.
    pub fn delete(&self, id: &str) -> Result<bool, Error> {
        let path = self.course_path(id);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }

    fn course_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}
