//! Static site configuration.
//!
//! Everything the page displays (biography, projects, skills,
//! certificates, navigation labels, delivery parameters) is read-only
//! data. The built-in content ships with the binary; a JSON file with the
//! same shape can replace it wholesale. Nothing in the interaction layer
//! mutates this structure.

use crate::mail::EmailJsConfig;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewport width below which the mobile menu layout is used and the menu
/// auto-closes on selection.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Fixed navigation-bar height allowance used by the scroll-spy.
pub const NAV_OFFSET: f32 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub bio: String,
    pub goal: String,
    pub location: String,
    pub resume_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub github: String,
    #[serde(default)]
    pub demo: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}

/// One navigation entry: display label plus the section it targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

/// Numeric parameters of the project gallery widget.
///
/// The gallery itself is a plain paging cursor; these numbers are its
/// entire configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Seconds between automatic page advances.
    pub autoplay_delay: f64,
    /// (min viewport width, slides shown) pairs in ascending width order.
    pub slides_by_breakpoint: Vec<(f32, usize)>,
    /// Wrap from the last page back to the first.
    pub looping: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: 2.5,
            slides_by_breakpoint: vec![(0.0, 1), (768.0, 2), (1024.0, 3), (1440.0, 4)],
            looping: true,
        }
    }
}

impl GalleryConfig {
    /// Returns how many slides fit at the given viewport width.
    pub fn slides_for_width(&self, width: f32) -> usize {
        self.slides_by_breakpoint
            .iter()
            .rev()
            .find(|(min_width, _)| width >= *min_width)
            .map(|(_, slides)| *slides)
            .unwrap_or(1)
    }
}

/// Complete page content plus external-service parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub personal: PersonalInfo,
    pub social: SocialLinks,
    pub education: Education,
    pub nav_entries: Vec<NavEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub certificates: Vec<Certificate>,
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl SiteContent {
    /// Returns the built-in content.
    pub fn builtin() -> &'static SiteContent {
        &BUILTIN_CONTENT
    }

    /// Loads content from a JSON file with the same shape as the built-in
    /// structure. Used to re-skin the site without a rebuild.
    pub fn load_from_json(path: &Path) -> Result<SiteContent> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing content file {}", path.display()))
    }
}

static BUILTIN_CONTENT: Lazy<SiteContent> = Lazy::new(|| SiteContent {
    personal: PersonalInfo {
        name: "Suryansh Tyagi".to_string(),
        initials: "ST".to_string(),
        tagline: "AI/ML Engineer | Data Scientist | Generative AI & Deep Learning Practitioner"
            .to_string(),
        bio: "AI/ML Engineer and Data Scientist with hands-on experience in Machine Learning, \
              Deep Learning, NLP, and Generative AI. I build intelligent systems such as OCR \
              models, RAG pipelines, LLM-powered applications, and data-driven analytical \
              solutions. Skilled in transforming raw data into actionable insights and \
              deploying scalable AI products."
            .to_string(),
        goal: "To grow as a high-impact AI/ML and Data Science Engineer, building intelligent \
               systems using Machine Learning, Deep Learning, and Generative AI while \
               contributing to real-world AI innovation."
            .to_string(),
        location: "Punjab, India".to_string(),
        resume_link: "https://drive.google.com/file/d/1b0Nk6eZrVpsY13DTyjM_qVj3oN_8-q8E/view?usp=sharing"
            .to_string(),
    },
    social: SocialLinks {
        github: "https://github.com/Suryanshtyagi12".to_string(),
        linkedin: "https://www.linkedin.com/in/tyagi9/".to_string(),
        email: "tyagisurya.04@gmail.com".to_string(),
    },
    education: Education {
        degree: "B.Tech in Computer Science".to_string(),
        university: "Lovely Professional University".to_string(),
        year: "2022 - 2026".to_string(),
    },
    nav_entries: vec![
        nav("Home", "home"),
        nav("About", "about"),
        nav("Skills", "skills"),
        nav("Projects", "projects"),
        nav("Certificates", "certificates"),
        nav("Resume", "resume"),
        nav("Contact", "contact"),
    ],
    projects: vec![
        Project {
            title: "Multi-Agent Multimodal AI Assistant".to_string(),
            description: "A multimodal AI assistant capable of extracting information from PDFs \
                          and images, and interacting through a chatbot interface. Built using \
                          LLMs, document parsers, and Streamlit."
                .to_string(),
            github: "https://github.com/Suryanshtyagi12/multi-agent-multimodal-assistant"
                .to_string(),
            demo: String::new(),
            tags: tags(&["LLM", "LangChain", "Agents", "Streamlit", "OCR", "PDF Parsing"]),
        },
        Project {
            title: "Kasparro Agentic FB Analyst".to_string(),
            description: "An agentic AI system that automates Facebook competitor analysis, \
                          content extraction, insights generation, and reporting for Kasparro. \
                          Uses LLM agents and automation pipelines."
                .to_string(),
            github: "https://github.com/Suryanshtyagi12/kasparro-agentic-fb-analyst-suryansh-tyagi"
                .to_string(),
            demo: String::new(),
            tags: tags(&["Agentic AI", "LLM", "Automation", "Data Extraction", "NLP"]),
        },
        Project {
            title: "Customer Churn Prediction Using Deep Learning".to_string(),
            description: "An end-to-end deep learning pipeline using ANN for churn prediction. \
                          Includes preprocessing, EDA, feature engineering, hyperparameter \
                          tuning, TensorBoard monitoring, and Streamlit deployment."
                .to_string(),
            github: "https://github.com/Suryanshtyagi12/customer-churn-prediction".to_string(),
            demo: String::new(),
            tags: tags(&["Deep Learning", "TensorFlow", "EDA", "ANN", "Streamlit"]),
        },
        Project {
            title: "Heart Disease Prediction App".to_string(),
            description: "A Machine Learning web-app that predicts heart disease risk using \
                          medical parameters. Includes preprocessing, model training, \
                          evaluation, and Streamlit deployment."
                .to_string(),
            github: "https://github.com/Suryanshtyagi12/Heart-Disease-Prediction".to_string(),
            demo: "https://huggingface.co/spaces/tyagisurya001/Heart_disease_preccdictor"
                .to_string(),
            tags: tags(&["Machine Learning", "Streamlit", "HuggingFace", "Data Science"]),
        },
        Project {
            title: "Vision Transformer (ViT) Built From Scratch".to_string(),
            description: "Implemented a Vision Transformer architecture from scratch using \
                          PyTorch, including patch embeddings, attention, positional encodings, \
                          and classification pipeline."
                .to_string(),
            github: "https://github.com/Suryanshtyagi12/Coding-VIT-From-Scratch".to_string(),
            demo: String::new(),
            tags: tags(&["Deep Learning", "PyTorch", "ViT", "Computer Vision"]),
        },
    ],
    skills: vec![
        SkillCategory {
            title: "Languages".to_string(),
            skills: tags(&["Python", "C++", "SQL", "Java"]),
        },
        SkillCategory {
            title: "Frameworks & Libraries".to_string(),
            skills: tags(&[
                "PyTorch",
                "TensorFlow",
                "Keras",
                "Scikit-learn",
                "HuggingFace Transformers",
                "LangChain",
            ]),
        },
        SkillCategory {
            title: "Tools & Technologies".to_string(),
            skills: tags(&[
                "Docker",
                "Git",
                "Linux / Bash",
                "FastAPI",
                "Streamlit",
                "HuggingFace Deployment",
            ]),
        },
        SkillCategory {
            title: "Concepts & Domains".to_string(),
            skills: tags(&[
                "Data Structures & Algorithms",
                "OOP",
                "Operating Systems",
                "REST APIs",
                "RAG Pipelines",
                "Prompt Engineering",
            ]),
        },
    ],
    certificates: vec![
        Certificate {
            title: "TensorFlow for AI/ML/DL".to_string(),
            issuer: "DeepLearning.ai / Coursera".to_string(),
            date: "2025".to_string(),
            link: "https://drive.google.com/file/d/1ArqbzSfd3gn4Ii92XZkTv6pqEORKj9iP/view?usp=sharing"
                .to_string(),
        },
        Certificate {
            title: "Cloud Computing".to_string(),
            issuer: "NPTEL".to_string(),
            date: "2025".to_string(),
            link: "https://drive.google.com/file/d/1DzAU09AmJSuOwR26gcQ-QvJCl1-3zfpB/view?usp=sharing"
                .to_string(),
        },
        Certificate {
            title: "Tableau Data Visualization".to_string(),
            issuer: "Salesforce / Coursera".to_string(),
            date: "2024".to_string(),
            link: "https://drive.google.com/file/d/1DzAU09AmJSuOwR26gcQ-QvJCl1-3zfpB/view?usp=sharing"
                .to_string(),
        },
    ],
    emailjs: EmailJsConfig {
        service_id: "service_hg06vch".to_string(),
        template_id: "template_bg3w8hs".to_string(),
        public_key: "louttENHUEfGnBowJ".to_string(),
    },
    gallery: GalleryConfig::default(),
});

fn nav(label: &str, target: &str) -> NavEntry {
    NavEntry {
        label: label.to_string(),
        target: target.to_string(),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_nav_matches_reference_content() {
        let content = SiteContent::builtin();
        let labels: Vec<&str> = content.nav_entries.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Home", "About", "Skills", "Projects", "Certificates", "Resume", "Contact"]
        );
    }

    #[test]
    fn test_nav_targets_are_unique() {
        let content = SiteContent::builtin();
        let mut targets: Vec<&str> = content.nav_entries.iter().map(|n| n.target.as_str()).collect();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), content.nav_entries.len());
    }

    #[test]
    fn test_builtin_content_round_trips_through_json() {
        let content = SiteContent::builtin();
        let json = serde_json::to_string(content).unwrap();
        let restored: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.projects.len(), content.projects.len());
        assert_eq!(restored.social.email, content.social.email);
    }

    #[test]
    fn test_gallery_breakpoints() {
        let gallery = GalleryConfig::default();
        assert_eq!(gallery.slides_for_width(320.0), 1);
        assert_eq!(gallery.slides_for_width(768.0), 2);
        assert_eq!(gallery.slides_for_width(1024.0), 3);
        assert_eq!(gallery.slides_for_width(1920.0), 4);
    }
}
