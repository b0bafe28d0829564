//! Fixed default dataset used to populate a fresh backend instance.

use models::icon::Icon;
use models::{project, service, team_member, testimonial};

pub struct SeedData {
    pub services: Vec<service::NewService>,
    pub team_members: Vec<team_member::NewTeamMember>,
    pub projects: Vec<project::NewProject>,
    pub testimonials: Vec<testimonial::NewTestimonial>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The site's launch content. Deterministic: seeding any backend with this
/// dataset yields the same records in the same order.
pub fn default_dataset() -> SeedData {
    SeedData {
        services: vec![
            service::NewService {
                title: "Web Development".into(),
                description: "Custom websites and web applications built with modern technologies and best practices.".into(),
                features: strings(&["React & Next.js", "Node.js & Express", "Database Design", "API Development"]),
                gradient: "from-blue-500 to-indigo-600".into(),
                bg_pattern: "from-blue-50 to-indigo-100 dark:from-blue-900/20 dark:to-indigo-900/20".into(),
                icon: Icon::Code.name().into(),
            },
            service::NewService {
                title: "Video Editing".into(),
                description: "Professional video editing services for marketing, social media, and corporate content.".into(),
                features: strings(&["Motion Graphics", "Color Grading", "Audio Enhancement", "Social Media Formats"]),
                gradient: "from-purple-500 to-pink-600".into(),
                bg_pattern: "from-purple-50 to-pink-100 dark:from-purple-900/20 dark:to-pink-900/20".into(),
                icon: Icon::Video.name().into(),
            },
            service::NewService {
                title: "Image Editing".into(),
                description: "High-quality photo editing and graphic design for all your visual content needs.".into(),
                features: strings(&["Photo Retouching", "Background Removal", "Brand Graphics", "Social Media Assets"]),
                gradient: "from-orange-500 to-red-600".into(),
                bg_pattern: "from-orange-50 to-red-100 dark:from-orange-900/20 dark:to-red-900/20".into(),
                icon: Icon::Image.name().into(),
            },
            service::NewService {
                title: "Personal Branding".into(),
                description: "Complete branding solutions to help you stand out and build a strong digital presence.".into(),
                features: strings(&["Logo Design", "Brand Guidelines", "Social Media Strategy", "Content Planning"]),
                gradient: "from-green-500 to-teal-600".into(),
                bg_pattern: "from-green-50 to-teal-100 dark:from-green-900/20 dark:to-teal-900/20".into(),
                icon: Icon::Sparkles.name().into(),
            },
        ],
        team_members: vec![
            team_member::NewTeamMember {
                name: "Prince Mehta".into(),
                role: "Founder & Lead Developer".into(),
                bio: "Computer Science student at NIT JSR with a passion for creating innovative web solutions. Specializes in full-stack development and system architecture.".into(),
                image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                skills: strings(&["React", "Node.js", "Python", "System Design"]),
                linkedin_url: Some("#".into()),
                github_url: Some("#".into()),
                twitter_url: Some("#".into()),
            },
            team_member::NewTeamMember {
                name: "Shoumyadeep Ray".into(),
                role: "Creative Director".into(),
                bio: "Visionary designer and video editor who brings brands to life through compelling visual storytelling and innovative design solutions.".into(),
                image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                skills: strings(&["UI/UX Design", "Video Editing", "Motion Graphics", "Branding"]),
                linkedin_url: Some("#".into()),
                github_url: Some("#".into()),
                twitter_url: Some("#".into()),
            },
            team_member::NewTeamMember {
                name: "Rahul Kumar".into(),
                role: "Digital Strategy Specialist".into(),
                bio: "Strategic thinker who helps businesses navigate the digital landscape and develop comprehensive growth strategies that deliver results.".into(),
                image: "https://images.pexels.com/photos/1310522/pexels-photo-1310522.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                skills: strings(&["Digital Marketing", "SEO", "Content Strategy", "Analytics"]),
                linkedin_url: Some("#".into()),
                github_url: Some("#".into()),
                twitter_url: Some("#".into()),
            },
        ],
        projects: vec![
            project::NewProject {
                title: "E-Commerce Platform".into(),
                description: "Modern, responsive e-commerce website with advanced filtering, payment integration, and admin dashboard.".into(),
                image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
                category: "Web Development".into(),
                technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
                live_url: Some("#".into()),
                github_url: Some("#".into()),
                color: "from-blue-500 to-indigo-600".into(),
            },
            project::NewProject {
                title: "Brand Identity Package".into(),
                description: "Complete visual identity redesign including logo, color palette, typography, and brand guidelines.".into(),
                image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
                category: "Branding".into(),
                technologies: strings(&["Figma", "Illustrator", "Photoshop"]),
                live_url: Some("#".into()),
                github_url: Some("#".into()),
                color: "from-purple-500 to-pink-600".into(),
            },
            project::NewProject {
                title: "Marketing Video Campaign".into(),
                description: "High-impact promotional videos with motion graphics, professional editing, and compelling storytelling.".into(),
                image: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
                category: "Video Production".into(),
                technologies: strings(&["After Effects", "Premiere Pro", "Cinema 4D"]),
                live_url: Some("#".into()),
                github_url: Some("#".into()),
                color: "from-orange-500 to-red-600".into(),
            },
            project::NewProject {
                title: "SaaS Dashboard".into(),
                description: "Intuitive dashboard design with data visualization, user management, and real-time analytics.".into(),
                image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
                category: "Web Development".into(),
                technologies: strings(&["Vue.js", "D3.js", "Firebase", "Tailwind"]),
                live_url: Some("#".into()),
                github_url: Some("#".into()),
                color: "from-green-500 to-teal-600".into(),
            },
        ],
        testimonials: vec![
            testimonial::NewTestimonial {
                name: "Sarah Johnson".into(),
                role: "CEO, TechStart Inc.".into(),
                content: "DigitalTeam transformed our online presence completely. Their attention to detail and creative approach exceeded all our expectations. The website they built for us has increased our conversions by 150%.".into(),
                rating: 5,
                image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
            },
            testimonial::NewTestimonial {
                name: "Michael Chen".into(),
                role: "Marketing Director, GrowthCo".into(),
                content: "The video content DigitalTeam created for our campaign was absolutely phenomenal. Their storytelling ability and technical expertise helped us achieve 300% more engagement than our previous campaigns.".into(),
                rating: 5,
                image: "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_counts_match_launch_content() {
        let data = default_dataset();
        assert_eq!(data.services.len(), 4);
        assert_eq!(data.team_members.len(), 3);
        assert_eq!(data.projects.len(), 4);
        assert_eq!(data.testimonials.len(), 2);
    }

    #[test]
    fn testimonial_ratings_are_in_range() {
        let data = default_dataset();
        assert!(data.testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn exactly_one_branding_project() {
        let data = default_dataset();
        let branding: Vec<_> = data.projects.iter().filter(|p| p.category == "Branding").collect();
        assert_eq!(branding.len(), 1);
        assert_eq!(branding[0].title, "Brand Identity Package");
    }
}
