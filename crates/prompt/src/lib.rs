use std::sync::OnceLock;

mod error;
pub use error::*;

pub use minijinja;

#[derive(Debug, strum::AsRefStr, strum::Display, serde::Serialize, serde::Deserialize)]
pub enum Template {
    #[strum(serialize = "explain.user")]
    #[serde(rename = "explain.user")]
    ExplainUser,
    #[strum(serialize = "concept.user")]
    #[serde(rename = "concept.user")]
    ConceptUser,
    #[strum(serialize = "image.user")]
    #[serde(rename = "image.user")]
    ImageUser,
}

pub const EXPLAIN_USER_TPL: &str = include_str!("../assets/explain.user.jinja");
pub const CONCEPT_USER_TPL: &str = include_str!("../assets/concept.user.jinja");
pub const IMAGE_USER_TPL: &str = include_str!("../assets/image.user.jinja");

pub fn init(env: &mut minijinja::Environment<'static>) {
    env.add_template(Template::ExplainUser.as_ref(), EXPLAIN_USER_TPL)
        .unwrap();
    env.add_template(Template::ConceptUser.as_ref(), CONCEPT_USER_TPL)
        .unwrap();
    env.add_template(Template::ImageUser.as_ref(), IMAGE_USER_TPL)
        .unwrap();
}

static ENV: OnceLock<minijinja::Environment<'static>> = OnceLock::new();

fn env() -> &'static minijinja::Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = minijinja::Environment::new();
        init(&mut env);
        env
    })
}

pub fn render(
    env: &minijinja::Environment<'static>,
    template: Template,
    ctx: &serde_json::Map<String, serde_json::Value>,
) -> Result<String, crate::Error> {
    let tpl = env.get_template(template.as_ref())?;
    tpl.render(ctx).map_err(Into::into)
}

/// Blog-style learning guide prompt for a topic.
pub fn explanation_prompt(topic: &str, style: &str) -> Result<String, Error> {
    let tpl = env().get_template(Template::ExplainUser.as_ref())?;
    tpl.render(minijinja::context! {
        topic => topic,
        style => style.to_lowercase(),
    })
    .map_err(Into::into)
}

/// Short 1-2 sentence explanation prompt. Unrecognized styles fall
/// through to a generic phrasing rather than failing.
pub fn concept_prompt(concept: &str, style: &str) -> Result<String, Error> {
    let tpl = env().get_template(Template::ConceptUser.as_ref())?;
    tpl.render(minijinja::context! {
        concept => concept,
        style => style.to_lowercase(),
    })
    .map_err(Into::into)
}

/// A course page is a concept prompt over "<page type> about <topic>".
pub fn page_prompt(topic: &str, style: &str, page_type: &str) -> Result<String, Error> {
    concept_prompt(&format!("{page_type} about {topic}"), style)
}

pub fn image_prompt(description: &str, style: &str) -> Result<String, Error> {
    let tpl = env().get_template(Template::ImageUser.as_ref())?;
    tpl.render(minijinja::context! {
        description => description,
        style => style.to_lowercase(),
    })
    .map_err(Into::into)
}
