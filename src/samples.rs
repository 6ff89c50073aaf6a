use serde::{Deserialize, Serialize};

use crate::scoring::ScoreSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Blog,
    Social,
    Email,
}

const BLOG_SAMPLES: [&str; 3] = [
    "Discover how AI is revolutionizing content creation for digital marketers. Our latest research shows a 45% increase in engagement when using AI-assisted tools.",
    "5 ways to improve your social media strategy in 2025. Number 3 will surprise even seasoned marketers!",
    "The future of remote work is hybrid: How companies are balancing in-office collaboration with work-from-home flexibility.",
];

const SOCIAL_SAMPLES: [&str; 3] = [
    "Just launched our new AI tool! 🚀 Who's ready to transform their content strategy? #AImarketing #ContentCreation",
    "Monday motivation: The best time to start was yesterday. The second best time is now. What are you starting today? ✨",
    "Hot take: Quality engagement is more important than follower count. Agree or disagree? 👇",
];

const EMAIL_SAMPLES: [&str; 3] = [
    "Subject: Don't Miss Our Exclusive Webinar\n\nDear [Name],\n\nWe're excited to invite you to our upcoming webinar on 'Future-Proofing Your Digital Marketing Strategy' happening this Thursday.",
    "Subject: Your May Newsletter Is Here\n\nHello from the team!\n\nSpring is here and so are new opportunities to grow your business. Check out this month's tips and tricks...",
    "Subject: Special Offer Just For You\n\nHi there,\n\nAs a valued customer, we're giving you early access to our new premium features at a special 30% discount.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleContent {
    pub platform: Platform,
    pub title: Option<String>,
    pub content: String,
}

impl Platform {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "blog" => Some(Platform::Blog),
            "social" => Some(Platform::Social),
            "email" | "mail" => Some(Platform::Email),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Blog => "blog",
            Platform::Social => "social",
            Platform::Email => "email",
        }
    }

    pub fn default_title(self) -> Option<&'static str> {
        match self {
            Platform::Blog => Some("The Ultimate Guide to AI-Powered Marketing"),
            Platform::Social => None,
            Platform::Email => Some("Your Exclusive Invitation Inside"),
        }
    }

    pub fn samples(self) -> &'static [&'static str; 3] {
        match self {
            Platform::Blog => &BLOG_SAMPLES,
            Platform::Social => &SOCIAL_SAMPLES,
            Platform::Email => &EMAIL_SAMPLES,
        }
    }

    pub fn sample(self, source: &mut dyn ScoreSource) -> SampleContent {
        let samples = self.samples();
        let index = source.draw(samples.len() as u32) as usize;
        SampleContent {
            platform: self,
            title: self.default_title().map(str::to_string),
            content: samples[index].to_string(),
        }
    }
}
