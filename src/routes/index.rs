use axum::response::IntoResponse;
use strum::VariantArray;
use valdeci_contact::{ContactRequest, ServiceType};

use crate::content::{self, ContactInfo, Highlight, Project, Service, Stat, Testimonial};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub company: &'static str,
    pub hero_image: &'static str,
    pub about_image: &'static str,
    pub services: &'static [Service],
    pub stats: &'static [Stat],
    pub projects: &'static [Project],
    pub highlights: &'static [Highlight],
    pub testimonials: &'static [Testimonial],
    pub contact: ContactInfo,
    pub draft: ContactRequest,
    pub service_types: &'static [ServiceType],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            company: content::COMPANY,
            hero_image: content::HERO_IMAGE,
            about_image: content::ABOUT_IMAGE,
            services: content::SERVICES,
            stats: content::STATS,
            projects: content::PROJECTS,
            highlights: content::HIGHLIGHTS,
            testimonials: content::TESTIMONIALS,
            contact: content::CONTACT,
            draft: ContactRequest::default(),
            service_types: ServiceType::VARIANTS,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::default())
}
