/// A fully formed offline explanation, used whenever the on-device model
/// is unavailable or fails mid-generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LearningExplanation {
    pub id: String,
    pub topic: String,
    pub explanation: String,
    pub analogy_style: String,
    pub word_count: usize,
    pub key_points: Vec<String>,
}

pub fn generate_explanation(topic: &str, style: &str) -> LearningExplanation {
    let explanation = explanation(topic, style);
    LearningExplanation {
        id: uuid::Uuid::new_v4().to_string(),
        topic: topic.to_string(),
        analogy_style: style.to_string(),
        word_count: explanation.split_whitespace().count(),
        key_points: key_points(&explanation),
        explanation,
    }
}

pub fn explanation(topic: &str, style: &str) -> String {
    match style.to_lowercase().as_str() {
        "chef" => chef(topic),
        "mechanic" => mechanic(topic),
        "musician" => musician(topic),
        "gardener" => gardener(topic),
        "builder" => builder(topic),
        "artist" => artist(topic),
        "athlete" => athlete(topic),
        "teacher" => teacher(topic),
        other => generic(topic, other),
    }
}

/// First two sentences of the full explanation, for inline concept cards.
pub fn brief(topic: &str, style: &str) -> String {
    let full = explanation(topic, style);
    let short = full.split(". ").take(2).collect::<Vec<_>>().join(". ");
    if short.ends_with('.') {
        short
    } else {
        format!("{short}.")
    }
}

/// First three sentences, stripped of punctuation.
pub fn key_points(explanation: &str) -> Vec<String> {
    explanation
        .split(". ")
        .take(3)
        .map(|s| {
            s.chars()
                .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .collect()
}

fn chef(topic: &str) -> String {
    format!("Think of {topic} like preparing a complex dish. Just as a chef needs to understand ingredients, timing, and technique, mastering {topic} requires understanding its core components and how they work together. The process is like following a recipe - you need the right ingredients (knowledge), proper preparation (study), and careful execution (practice). Each element must be balanced perfectly, just like seasoning a dish. When you rush the process, like overcooking, you might miss crucial details that make the difference between good and exceptional results.")
}

fn mechanic(topic: &str) -> String {
    format!("Understanding {topic} is like diagnosing and fixing an engine. You need to know how all the parts work together - each component has a specific function, and when one fails, it affects the whole system. Just like a mechanic uses diagnostic tools to identify problems, learning {topic} requires breaking it down into manageable parts. You start with the basics (like checking fluid levels), then move to more complex systems. Regular maintenance and understanding prevents major breakdowns, just like consistent study prevents knowledge gaps.")
}

fn musician(topic: &str) -> String {
    format!("Learning {topic} is like mastering a musical composition. Each concept is like a note that must harmonize with others to create beautiful music. Just as musicians practice scales before performing symphonies, you need to master the fundamentals before tackling complex pieces. The rhythm of learning requires consistent practice, and like a conductor coordinates an orchestra, you must coordinate different aspects of {topic}. Each practice session builds muscle memory, making complex performances feel natural over time.")
}

fn gardener(topic: &str) -> String {
    format!("Growing your understanding of {topic} is like cultivating a garden. You start by preparing the soil (foundation knowledge), plant seeds (new concepts), and nurture them with regular care (practice). Some ideas bloom quickly like annuals, while others take time to develop like perennial plants. Just as gardens need different nutrients, learning {topic} requires diverse approaches. Patience is essential - forcing growth leads to weak plants, but steady cultivation creates robust, deep-rooted understanding that flourishes season after season.")
}

fn builder(topic: &str) -> String {
    format!("Mastering {topic} is like constructing a solid building. You begin with a strong foundation of basic principles, then frame the structure with core concepts. Each new piece of knowledge is like adding another component - walls, electrical, plumbing - all interconnected and supporting the whole. Just as builders follow blueprints and building codes, learning {topic} requires following proven methods and best practices. Rushing construction leads to structural problems, but taking time to build properly creates something that stands the test of time.")
}

fn artist(topic: &str) -> String {
    format!("Understanding {topic} is like creating a masterpiece painting. You start with a blank canvas (your current knowledge) and begin with basic sketches (fundamental concepts). Each new layer of understanding adds depth and richness, like building up colors and textures. Different techniques serve different purposes - some broad strokes establish the overall composition, while fine details bring the work to life. Mistakes aren't failures but opportunities to learn new techniques. The creative process requires both technical skill and intuitive understanding.")
}

fn athlete(topic: &str) -> String {
    format!("Training to understand {topic} is like preparing for athletic competition. You need a structured training regimen, starting with basic conditioning (fundamentals) and progressing to sport-specific skills (advanced concepts). Consistent practice builds muscle memory and confidence. Just as athletes study game film, you must review and analyze your understanding regularly. Some days training feels harder than others, but persistence and proper technique lead to breakthrough performances. Mental preparation is as important as physical training.")
}

fn teacher(topic: &str) -> String {
    format!("Learning {topic} follows the same principles as effective teaching. You begin with clear learning objectives and assess prior knowledge. Break complex ideas into digestible lessons, using various methods to accommodate different learning styles. Regular assessment helps identify areas needing reinforcement. Just as teachers adapt their approach based on student needs, your learning strategy should evolve. Connecting new information to existing knowledge creates stronger neural pathways. Teaching others what you've learned is the ultimate test of understanding.")
}

fn generic(topic: &str, style: &str) -> String {
    format!("Understanding {topic} through the lens of {style} provides a unique perspective that makes complex concepts more relatable. By connecting abstract ideas to familiar {style} experiences, you create mental bridges that enhance comprehension and retention. This approach transforms intimidating subjects into manageable, engaging learning experiences. Just as professionals in {style} develop expertise through practice and experience, mastering {topic} requires dedication, patience, and the right approach to break down complexity into understandable components.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_picks_style_paragraph() {
        let chef = explanation("recursion", "chef");
        assert!(chef.starts_with("Think of recursion like preparing a complex dish."));

        let chef_upper = explanation("recursion", "Chef");
        assert_eq!(chef, chef_upper);

        let generic = explanation("recursion", "astronaut");
        assert!(generic.contains("through the lens of astronaut"));
    }

    #[test]
    fn test_brief_is_two_sentences_with_terminal_period() {
        let brief = brief("gravity", "mechanic");
        assert!(brief.ends_with('.'));
        assert_eq!(brief.matches(". ").count(), 1);
        assert!(brief.starts_with("Understanding gravity is like diagnosing and fixing an engine."));
    }

    #[test]
    fn test_key_points_strips_punctuation() {
        let points = key_points("First point, with commas. Second point! Third? Fourth.");
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], "First point with commas");
        for point in &points {
            assert!(!point.contains(['.', ',', '!', '?']));
        }
    }

    #[test]
    fn test_generate_explanation_populates_metadata() {
        let result = generate_explanation("atoms", "builder");
        assert_eq!(result.topic, "atoms");
        assert_eq!(result.analogy_style, "builder");
        assert_eq!(result.word_count, result.explanation.split_whitespace().count());
        assert!(!result.key_points.is_empty());
        assert!(!result.id.is_empty());
    }
}
