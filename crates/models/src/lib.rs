pub mod db;
pub mod icon;
pub mod service;
pub mod team_member;
pub mod project;
pub mod testimonial;

#[cfg(test)]
mod tests {
    use crate::{project, service, team_member};

    // The marketing client consumes camelCase field names; keep the wire
    // shape stable even though columns are snake_case.
    #[test]
    fn service_serializes_camel_case() {
        let m = service::Model {
            id: 1,
            title: "Web Development".into(),
            description: "Custom websites".into(),
            features: vec!["React & Next.js".into()],
            gradient: "from-blue-500 to-indigo-600".into(),
            bg_pattern: "from-blue-50 to-indigo-100".into(),
            icon: "Code".into(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("bgPattern").is_some());
        assert!(v.get("bg_pattern").is_none());
    }

    #[test]
    fn optional_urls_serialize_as_null() {
        let m = team_member::Model {
            id: 1,
            name: "Prince Mehta".into(),
            role: "Founder & Lead Developer".into(),
            bio: "".into(),
            image: "".into(),
            skills: vec![],
            linkedin_url: None,
            github_url: None,
            twitter_url: None,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["linkedinUrl"], serde_json::Value::Null);
        assert_eq!(v["githubUrl"], serde_json::Value::Null);
        assert_eq!(v["twitterUrl"], serde_json::Value::Null);
    }

    #[test]
    fn new_project_deserializes_from_client_shape() {
        let input: project::NewProject = serde_json::from_value(serde_json::json!({
            "title": "E-Commerce Platform",
            "description": "Modern storefront",
            "image": "https://example.com/p.jpg",
            "category": "Web Development",
            "technologies": ["React", "Node.js"],
            "liveUrl": null,
            "githubUrl": null,
            "color": "from-blue-500 to-indigo-600"
        }))
        .unwrap();
        assert_eq!(input.category, "Web Development");
        assert!(input.live_url.is_none());
    }
}
