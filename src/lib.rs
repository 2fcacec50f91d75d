pub mod content;
pub mod contact;
pub mod mail;
pub mod reveal;
pub mod scrollspy;
pub mod theme;

// Export content configuration
pub use content::{
    SiteContent, PersonalInfo, SocialLinks, Education, Project, SkillCategory,
    Certificate, NavEntry, GalleryConfig, MOBILE_BREAKPOINT, NAV_OFFSET,
};

// Export contact form state machine
pub use contact::{ContactForm, FormStatus, ValidationError, is_valid_email};

// Export mail delivery collaborator
pub use mail::{MailDelivery, MailPayload, MailError, EmailJsConfig, EmailJsDelivery};

// Export reveal scheduling
pub use reveal::{RevealScheduler, RevealTrigger, is_intersecting};

// Export scroll-spy
pub use scrollspy::{
    SectionDescriptor, SectionRegistry, NavLinkDescriptor, SectionId, apply_active,
};

// Export theme support
pub use theme::{ThemeMode, ThemeColors, adjust_brightness, with_alpha};
