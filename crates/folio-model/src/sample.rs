//! The sample portfolio a new session starts with.

use crate::record::{
    BlogPost, Certification, ContactConfig, Education, Experience, Language,
    PortfolioRecord, Project, SocialLink, Testimonial,
};
use crate::social::SocialIcon;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the seed record shown before the user has entered anything.
pub fn sample_record() -> PortfolioRecord {
    PortfolioRecord {
        name: "John Doe".to_string(),
        title: "Full-Stack Developer".to_string(),
        bio: "Full-stack developer passionate about creating beautiful and functional web \
              applications. I love turning ideas into reality through code."
            .to_string(),
        location: "San Francisco, CA".to_string(),
        email: "john@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        profile_image: None,
        hero_title: "Hi, I'm John Doe".to_string(),
        hero_subtitle: "Full-Stack Developer".to_string(),
        hero_description: "I build fast, accessible web applications.".to_string(),
        social_links: vec![
            SocialLink {
                id: "sample-github".to_string(),
                platform: "GitHub".to_string(),
                url: "https://github.com/johndoe".to_string(),
                icon: SocialIcon::Github,
            },
            SocialLink {
                id: "sample-linkedin".to_string(),
                platform: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/johndoe".to_string(),
                icon: SocialIcon::Linkedin,
            },
        ],
        projects: vec![
            Project {
                id: "sample-ecommerce".to_string(),
                title: "E-Commerce Platform".to_string(),
                description: "A full-featured online store with payments and inventory \
                              management."
                    .to_string(),
                technologies: strings(&["React", "Node.js", "PostgreSQL"]),
                live_url: "https://shop.example.com".to_string(),
                github_url: "https://github.com/johndoe/shop".to_string(),
                images: Vec::new(),
                featured: true,
            },
            Project {
                id: "sample-task-manager".to_string(),
                title: "Task Manager".to_string(),
                description: "Collaborative task tracking with real-time updates.".to_string(),
                technologies: strings(&["TypeScript", "WebSockets"]),
                live_url: String::new(),
                github_url: "https://github.com/johndoe/tasks".to_string(),
                images: Vec::new(),
                featured: true,
            },
        ],
        experience: vec![Experience {
            id: "sample-experience".to_string(),
            company: "Tech Corp".to_string(),
            position: "Senior Developer".to_string(),
            start_date: "2021-01".to_string(),
            end_date: String::new(),
            current: true,
            location: "Remote".to_string(),
            description: "Leading the frontend platform team.".to_string(),
        }],
        education: vec![Education {
            id: "sample-education".to_string(),
            institution: "State University".to_string(),
            degree: "B.Sc.".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2013".to_string(),
            end_date: "2017".to_string(),
            description: String::new(),
        }],
        certifications: vec![Certification {
            id: "sample-certification".to_string(),
            name: "Cloud Practitioner".to_string(),
            issuer: "AWS".to_string(),
            date: "2022".to_string(),
            url: String::new(),
        }],
        testimonials: vec![Testimonial {
            id: "sample-testimonial".to_string(),
            name: "Jane Smith".to_string(),
            role: "Product Manager".to_string(),
            company: "Tech Corp".to_string(),
            content: "John consistently delivers high quality work.".to_string(),
            rating: 5,
        }],
        blog_posts: vec![BlogPost {
            id: "sample-blog-post".to_string(),
            title: "Building Accessible Forms".to_string(),
            excerpt: "Practical tips for forms everyone can use.".to_string(),
            url: "https://blog.example.com/accessible-forms".to_string(),
            date: "2024-03-01".to_string(),
        }],
        skills: strings(&["React", "TypeScript", "Node.js", "Python", "UI/UX Design"]),
        languages: vec![Language {
            id: "sample-english".to_string(),
            name: "English".to_string(),
            proficiency: "Native".to_string(),
        }],
        interests: strings(&["Open Source", "Photography"]),
        contact: ContactConfig {
            enabled: false,
            endpoint: String::new(),
        },
    }
}
