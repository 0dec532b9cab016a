//! Public project listing page.

use crate::pages::layout::{escape_html, page};
use crate::state::AppState;

use folio_core::Project;
use folio_db::ProjectRepository;

use axum::{extract::State, response::Html};

const MAX_SKILLS_SHOWN: usize = 5;

/// GET /projects
///
/// Lists all projects, most recent first. A store failure renders an
/// inline error banner; zero rows render the empty-state message.
pub async fn projects_page(State(state): State<AppState>) -> Html<String> {
    let repo = ProjectRepository::new(state.pool.clone());

    let content = match repo.find_all().await {
        Err(e) => {
            log::error!("Error fetching projects: {}", e);
            r#"<div class="banner-error" style="text-align: center;">Unable to load projects. Please try again later.</div>"#
                .to_string()
        }
        Ok(projects) if projects.is_empty() => r#"<div class="empty-state">
<h3>No projects found</h3>
<p>Check back soon for new additions to our portfolio.</p>
</div>"#
            .to_string(),
        Ok(projects) => projects.iter().map(project_card).collect(),
    };

    let body = format!(
        r#"<div style="text-align: center; margin-bottom: 2rem;">
<h1>Our Projects</h1>
<p class="muted">Explore our portfolio of work showcasing our expertise and creative solutions</p>
</div>
{content}"#
    );

    page("Our Projects", &body)
}

fn project_card(project: &Project) -> String {
    let mut skills_html = String::new();
    for skill in project.data.skills.iter().take(MAX_SKILLS_SHOWN) {
        skills_html.push_str(&format!(
            r#"<span class="skill">{}</span>"#,
            escape_html(skill)
        ));
    }
    if project.data.skills.len() > MAX_SKILLS_SHOWN {
        skills_html.push_str(&format!(
            r#"<span class="skill">+{} more</span>"#,
            project.data.skills.len() - MAX_SKILLS_SHOWN
        ));
    }

    let testimonial = &project.data.testimonial;
    let role_html = match &testimonial.role {
        Some(role) => format!(r#"<span class="muted">, {}</span>"#, escape_html(role)),
        None => String::new(),
    };

    format!(
        r#"<div class="card">
<h2>{title}</h2>
<p class="muted" style="font-size: 0.8rem;">{date}</p>
<p>{description}</p>
<div>{skills_html}</div>
<div class="testimonial">
<p>{testimonial_content}</p>
<p style="text-align: right; font-style: normal; font-size: 0.8rem;">&mdash; {testimonial_author}{role_html}</p>
</div>
</div>"#,
        title = escape_html(&project.data.title),
        date = project.created_at.format("%b %-d, %Y"),
        description = escape_html(&project.data.description),
        skills_html = skills_html,
        testimonial_content = escape_html(&testimonial.content),
        testimonial_author = escape_html(&testimonial.author),
        role_html = role_html,
    )
}
