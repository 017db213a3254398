//! Phrase and qualifier tables used by the intent rules.
//!
//! All entries are lowercase with straight apostrophes, matching the form
//! produced by [`Utterance::new`](super::rules::Utterance::new).

// --- Experience ---

pub const EXPERIENCE_PHRASES: &[&str] = &[
    "work experience",
    "work history",
    "what experience does",
    "what jobs have you",
    "give me an overview of your work background",
    "can you explain your professional background",
    "how much experience does",
    "tell me about the jobs you",
    "can you talk about your past roles",
    "what experience do you bring",
    "what is your background in the tech industry",
    "what professional journey",
    "professional journey",
    "what companies have you worked for",
    "how experienced are you",
    "what roles has",
    "what positions has",
    "where have you worked",
    "tell me about your experience",
];

pub const EXPERIENCE: &[&str] = &["experience"];

pub const EXPERIENCE_QUALIFIERS: &[&str] = &[
    "ai",
    "software",
    "tech",
    "industry",
    "professional",
    "career",
    "job",
    "worked",
    "background",
    "field",
    "companies",
    "positions",
    "roles",
    "past",
    "previous",
    "journey",
];

// --- Skills ---

pub const SKILLS_PHRASES: &[&str] = &[
    "technical skills",
    "what skills",
    "what are your skills",
    "your skills",
    "skills does ahib have",
    "tell me about your skills",
    "technical abilities",
    "what can you do in terms of skills",
    "what programming skills",
    "what development skills",
    "what coding skills",
    "software skills",
    "ai/ml skills",
    "technical areas are you skilled",
    "technical expertise",
    "skills have you developed",
    "skills make you stand out",
    "strongest technical abilities",
    "skills do you bring",
    "technical competencies",
    "skill set do you offer",
    "technologies are you skilled",
    "practical skills",
    "advanced skills",
    "areas are you highly skilled",
    "list your skills",
    "specialized skills",
    "what are your main skills",
    "what skills are you good at",
    "what tools and technologies",
    "what are your core skills",
    "what skills is ahib known for",
    "strengths in tech",
];

pub const SKILLS: &[&str] = &["skills"];

pub const SKILLS_QUALIFIERS: &[&str] = &[
    "ahib",
    "technical",
    "programming",
    "development",
    "coding",
    "software",
    "ai",
    "ml",
    "machine learning",
    "expertise",
    "abilities",
    "competencies",
    "strengths",
    "tools",
    "technologies",
    "practical",
    "advanced",
    "specialized",
    "core",
    "main",
];

pub const EXPERTISE: &[&str] = &["expertise"];

pub const EXPERTISE_QUALIFIERS: &[&str] = &["ahib", "technical", "domain", "area"];

pub const SKILLS_OPENERS: &[&str] = &["tell me about", "what are"];

// --- Research and blogs ---

pub const RESEARCH_PHRASES: &[&str] = &[
    "research work",
    "research papers",
    "academic research",
    "blogs",
    "blog posts",
    "blog articles",
    "publications",
    "papers",
    "research",
    "academic work",
];

pub const RESEARCH: &[&str] = &["research"];
pub const WORK: &[&str] = &["work"];
pub const BLOG: &[&str] = &["blog"];
pub const WRITING: &[&str] = &["writing"];
pub const RESEARCH_TOPICS: &[&str] = &["research", "blogs"];
pub const RESEARCH_OPENERS: &[&str] = &["tell me about", "show me", "what"];

// --- Identity ---

/// Exact (trimmed, case-sensitive) text sent by the "Me" quick action.
pub const IDENTITY_TRIGGER: &str = "Me😄";

pub const IDENTITY_KEYWORDS: &[&str] = &["ahib", "afnan", "siam", "ahib afnan", "ahib afnan siam"];

pub const QUESTION_PATTERNS: &[&str] = &[
    "who is",
    "tell me about",
    "what can you tell me about",
    "give me a",
    "describe",
    "introduce",
    "identify",
    "explain",
    "who exactly is",
    "what is the story",
    "short intro",
    "quick summary",
    "basic information",
    "know about",
];

/// Note that "me" is matched as a substring, so it fires on any text containing it.
pub const DIRECT_QUESTIONS: &[&str] = &["me", "about me", "about ahib", "who is this", "tell me who"];

pub const SPECIAL_CASE_PHRASES: &[&str] = &["should i know", "kind of person", "sentence", "identity"];

pub const COMPACT_NAME: &[&str] = &["ahib"];

pub const COMPACT_NAME_QUALIFIERS: &[&str] = &["who", "about", "intro", "summary"];

pub const TELL_ME_ABOUT: &[&str] = &["tell me about"];

pub const YOU: &[&str] = &["you", "yourself"];

pub const SELF_INTRODUCTION: &[&str] = &["who are you", "introduce yourself"];

// --- Projects ---

pub const PROJECT: &[&str] = &["projects", "project"];

pub const PROJECT_PHRASES: &[&str] = &[
    "what projects have you worked on",
    "can you show me your projects",
    "tell me about your projects",
    "what major projects have you done",
    "what kind of projects have you worked on",
    "can you list your past projects",
    "what are your main projects",
    "which projects have you completed",
    "what projects are you working on now",
    "what notable projects have you done",
    "show me a list of your projects",
    "show me your projects",
    "describe your projects",
    "what types of projects have you built",
    "what programming projects have you done",
    "what ai projects have you completed",
    "what web development projects have you done",
    "what are your ongoing projects",
    "what important projects have you worked on",
    "which of your projects are relevant to ai",
    "give me a summary of your projects",
    "can you share details about your projects",
    "what are the notable features of your projects",
    "which projects have you done during your studies",
    "what personal projects have you built",
    "which projects have you done professionally",
    "what side-projects do you have",
    "what portfolio projects have you built",
    "what are your favorite projects you worked on",
    "show me your best projects",
];

pub const PROJECTS_DEMONSTRATING_SKILLS: &[&str] = &["which of your projects demonstrate your skills"];

pub const PROJECT_QUALIFIERS: &[&str] = &[
    "ahib",
    "major",
    "notable",
    "important",
    "significant",
    "key",
    "main",
    "favorite",
    "best",
    "personal",
    "professional",
    "portfolio",
    "side",
    "web",
    "ai",
    "machine learning",
    "programming",
    "built",
    "completed",
    "done",
    "working on",
    "developed",
];

pub const PROJECT_OPENERS: &[&str] = &["tell me about", "show me"];

// --- Contact ---

pub const CONTACT_PHRASES: &[&str] = &[
    "how can i contact you",
    "what's the best way to reach you",
    "how do i get in touch with you",
    "what is your contact information",
    "how can someone contact ahib",
    "do you have an email i can use to reach you",
    "how can i message you",
    "what's your email address",
    "what is the best way to contact ahib",
    "how can i communicate with you",
    "how do i reach out to you",
    "what contact options do you offer",
    "what's the easiest way to contact you",
    "how can i send you a message",
    "how do i get in touch with ahib",
    "can you share your contact details",
    "how can i talk to you directly",
    "how can someone connect with you",
    "what's your preferred contact method",
    "do you have social media for contact",
    "where can i contact you online",
    "is there any way to reach you professionally",
    "how can i contact you for work",
    "how can i contact you for collaboration",
    "how can a client reach you",
    "what's your official contact info",
    "where should i send inquiries",
    "how can i get your contact",
    "how can i contact you personally",
    "what is ahib's contact info",
];

pub const CONTACT: &[&str] = &["contact"];

pub const CONTACT_QUALIFIERS: &[&str] = &[
    "ahib",
    "reach",
    "touch",
    "information",
    "email",
    "message",
    "communicate",
    "connect",
    "options",
    "social",
    "online",
    "professionally",
    "work",
    "collaboration",
    "client",
    "official",
    "inquiries",
    "personally",
];

pub const HOW_CAN_I: &[&str] = &["how can i"];

pub const CONTACT_VERBS: &[&str] = &["contact", "reach", "message", "communicate", "talk", "send", "get"];

pub const HOW: &[&str] = &["how"];

pub const CONTACT_DETAILS: &[&str] = &["info", "details"];
