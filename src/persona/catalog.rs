use serde::{Deserialize, Serialize};

/// A static audience profile used to theme simulated feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub interests: Vec<String>,
    pub tone: String,
    pub engagement: u8,
}

impl Persona {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .interests
                .iter()
                .any(|interest| interest.to_lowercase().contains(&query))
            || self.description.to_lowercase().contains(&query)
    }
}

struct PersonaSeed {
    id: &'static str,
    name: &'static str,
    avatar: &'static str,
    description: &'static str,
    interests: &'static [&'static str],
    tone: &'static str,
    engagement: u8,
}

impl PersonaSeed {
    fn build(&self) -> Persona {
        Persona {
            id: self.id.to_string(),
            name: self.name.to_string(),
            avatar: self.avatar.to_string(),
            description: self.description.to_string(),
            interests: self.interests.iter().map(|s| s.to_string()).collect(),
            tone: self.tone.to_string(),
            engagement: self.engagement,
        }
    }
}

const FEATURED: &[PersonaSeed] = &[
    PersonaSeed {
        id: "1",
        name: "Tech-Savvy Millennial",
        avatar: "https://randomuser.me/api/portraits/men/32.jpg",
        description: "Early adopter, startup enthusiast, works in tech, values innovation and authenticity.",
        interests: &["Technology", "Startups", "Productivity", "Travel", "Finance"],
        tone: "Casual & Informative",
        engagement: 85,
    },
    PersonaSeed {
        id: "2",
        name: "Eco-Conscious Parent",
        avatar: "https://randomuser.me/api/portraits/women/44.jpg",
        description: "Suburban parent focused on sustainability, health-conscious, and concerned about the future.",
        interests: &["Sustainability", "Parenting", "Organic", "Education", "Health"],
        tone: "Caring & Educational",
        engagement: 72,
    },
    PersonaSeed {
        id: "3",
        name: "Creative Professional",
        avatar: "https://randomuser.me/api/portraits/women/63.jpg",
        description: "Freelance designer, values aesthetics and work-life balance, seeks inspiration.",
        interests: &["Design", "Art", "Freelancing", "Culture", "Photography"],
        tone: "Inspirational & Visual",
        engagement: 78,
    },
    PersonaSeed {
        id: "4",
        name: "Executive Decision Maker",
        avatar: "https://randomuser.me/api/portraits/men/54.jpg",
        description: "Corporate leader focused on ROI, efficiency, and strategic growth opportunities.",
        interests: &["Leadership", "Business Strategy", "Analytics", "Investment", "Innovation"],
        tone: "Professional & Direct",
        engagement: 65,
    },
    PersonaSeed {
        id: "5",
        name: "Gen Z Social Media Native",
        avatar: "https://randomuser.me/api/portraits/women/23.jpg",
        description: "Digital native who values authenticity, social causes, and entertaining content.",
        interests: &["Social Media", "Entertainment", "Social Justice", "Memes", "Fashion"],
        tone: "Informal & Bold",
        engagement: 90,
    },
    PersonaSeed {
        id: "6",
        name: "Retired Explorer",
        avatar: "https://randomuser.me/api/portraits/men/76.jpg",
        description: "Retired professional with time for hobbies, travel, and learning new skills.",
        interests: &["Travel", "History", "Gardening", "Reading", "Cooking"],
        tone: "Thoughtful & Detailed",
        engagement: 58,
    },
];

const DISCOVERY: &[PersonaSeed] = &[
    PersonaSeed {
        id: "pd1",
        name: "Tech Enthusiast",
        avatar: "https://i.pravatar.cc/150?img=1",
        description: "Loves new technology and innovation, early adopter of digital products.",
        interests: &["Technology", "Gadgets", "AI", "Startups", "Innovation"],
        tone: "Excited",
        engagement: 85,
    },
    PersonaSeed {
        id: "pd2",
        name: "Business Professional",
        avatar: "https://i.pravatar.cc/150?img=2",
        description: "Career-focused individual looking to optimize productivity and business outcomes.",
        interests: &["Business", "Productivity", "Leadership", "Finance"],
        tone: "Professional",
        engagement: 72,
    },
    PersonaSeed {
        id: "pd3",
        name: "Creative Designer",
        avatar: "https://i.pravatar.cc/150?img=3",
        description: "Visually-oriented creative always seeking inspiration for projects.",
        interests: &["Design", "Art", "Photography", "UX/UI", "Creativity"],
        tone: "Expressive",
        engagement: 78,
    },
    PersonaSeed {
        id: "pd4",
        name: "Health & Wellness",
        avatar: "https://i.pravatar.cc/150?img=4",
        description: "Focused on sustainable wellness practices and holistic health solutions.",
        interests: &["Wellness", "Fitness", "Nutrition", "Mindfulness", "Yoga"],
        tone: "Encouraging",
        engagement: 65,
    },
    PersonaSeed {
        id: "pd5",
        name: "Student Learner",
        avatar: "https://i.pravatar.cc/150?img=5",
        description: "Always seeking to expand knowledge and grow intellectually.",
        interests: &["Education", "Books", "Learning", "Self-improvement"],
        tone: "Curious",
        engagement: 70,
    },
    PersonaSeed {
        id: "pd6",
        name: "Social Media Influencer",
        avatar: "https://i.pravatar.cc/150?img=6",
        description: "Highly engaged with social platforms and online communities.",
        interests: &["Social Media", "Trends", "Marketing", "Content Creation"],
        tone: "Trendy",
        engagement: 90,
    },
    PersonaSeed {
        id: "pd7",
        name: "Financial Advisor",
        avatar: "https://i.pravatar.cc/150?img=7",
        description: "Focuses on financial planning, investment strategies, and economic trends.",
        interests: &["Finance", "Investment", "Economics", "Wealth Management"],
        tone: "Authoritative",
        engagement: 75,
    },
    PersonaSeed {
        id: "pd8",
        name: "Healthcare Professional",
        avatar: "https://i.pravatar.cc/150?img=8",
        description: "Dedicated to health education and medical advances.",
        interests: &["Healthcare", "Medicine", "Research", "Patient Care"],
        tone: "Informative",
        engagement: 82,
    },
];

/// The personas page lists the first six discovery profiles under its own ids.
const BROWSE: &[PersonaSeed] = &[
    PersonaSeed {
        id: "p1",
        name: "Tech Enthusiast",
        avatar: "https://i.pravatar.cc/150?img=1",
        description: "Loves new technology and innovation, early adopter of digital products.",
        interests: &["Technology", "Gadgets", "AI", "Startups", "Innovation"],
        tone: "Excited",
        engagement: 85,
    },
    PersonaSeed {
        id: "p2",
        name: "Business Professional",
        avatar: "https://i.pravatar.cc/150?img=2",
        description: "Career-focused individual looking to optimize productivity and business outcomes.",
        interests: &["Business", "Productivity", "Leadership", "Finance"],
        tone: "Professional",
        engagement: 72,
    },
    PersonaSeed {
        id: "p3",
        name: "Creative Designer",
        avatar: "https://i.pravatar.cc/150?img=3",
        description: "Visually-oriented creative always seeking inspiration for projects.",
        interests: &["Design", "Art", "Photography", "UX/UI", "Creativity"],
        tone: "Expressive",
        engagement: 78,
    },
    PersonaSeed {
        id: "p4",
        name: "Health & Wellness",
        avatar: "https://i.pravatar.cc/150?img=4",
        description: "Focused on sustainable wellness practices and holistic health solutions.",
        interests: &["Wellness", "Fitness", "Nutrition", "Mindfulness", "Yoga"],
        tone: "Encouraging",
        engagement: 65,
    },
    PersonaSeed {
        id: "p5",
        name: "Student Learner",
        avatar: "https://i.pravatar.cc/150?img=5",
        description: "Always seeking to expand knowledge and grow intellectually.",
        interests: &["Education", "Books", "Learning", "Self-improvement"],
        tone: "Curious",
        engagement: 70,
    },
    PersonaSeed {
        id: "p6",
        name: "Social Media Influencer",
        avatar: "https://i.pravatar.cc/150?img=6",
        description: "Highly engaged with social platforms and online communities.",
        interests: &["Social Media", "Trends", "Marketing", "Content Creation"],
        tone: "Trendy",
        engagement: 90,
    },
];

/// Personas offered on the main preview screen.
pub fn featured_personas() -> Vec<Persona> {
    FEATURED.iter().map(PersonaSeed::build).collect()
}

/// The wider set browsed through persona discovery.
pub fn discovery_personas() -> Vec<Persona> {
    DISCOVERY.iter().map(PersonaSeed::build).collect()
}

pub fn browse_personas() -> Vec<Persona> {
    BROWSE.iter().map(PersonaSeed::build).collect()
}

/// Featured and discovery personas; the browse set is left out so searches
/// do not return the same profile twice.
pub fn all_personas() -> Vec<Persona> {
    FEATURED
        .iter()
        .chain(DISCOVERY.iter())
        .map(PersonaSeed::build)
        .collect()
}

pub fn find_persona(id: &str) -> Option<Persona> {
    FEATURED
        .iter()
        .chain(DISCOVERY.iter())
        .chain(BROWSE.iter())
        .find(|seed| seed.id == id)
        .map(PersonaSeed::build)
}

pub fn search_personas(personas: &[Persona], query: &str) -> Vec<Persona> {
    personas
        .iter()
        .filter(|persona| persona.matches(query))
        .cloned()
        .collect()
}
