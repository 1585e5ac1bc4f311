//! Placeholder analytics and hashtag suggestions attached to answer turns.
//!
//! Every value here is a constant. Nothing is derived from the generated
//! text, and callers must not treat these numbers as measurements.

use serde::Serialize;

/// Content analytics snapshot shown under an answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub sentiment: Sentiment,
    pub engagement: Engagement,
    pub audience: Audience,
    pub seo: Seo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentiment {
    pub score: f64,
    pub label: &'static str,
    pub breakdown: SentimentBreakdown,
}

/// Sentiment split in whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

impl SentimentBreakdown {
    /// Named percentages in display order.
    pub fn entries(&self) -> [(&'static str, u8); 3] {
        [
            ("positive", self.positive),
            ("neutral", self.neutral),
            ("negative", self.negative),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engagement {
    pub score: f64,
    pub potential: &'static str,
    pub metrics: EngagementMetrics,
}

/// Engagement metrics in whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementMetrics {
    pub readability: u8,
    pub uniqueness: u8,
    pub relevance: u8,
}

impl EngagementMetrics {
    /// Named percentages in display order.
    pub fn entries(&self) -> [(&'static str, u8); 3] {
        [
            ("readability", self.readability),
            ("uniqueness", self.uniqueness),
            ("relevance", self.relevance),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Audience {
    pub primary: &'static str,
    pub age: &'static str,
    pub interests: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seo {
    pub score: u8,
    pub keywords: Vec<&'static str>,
    pub readability: &'static str,
}

impl Analytics {
    /// The fixed analytics snapshot.
    pub fn placeholder() -> Self {
        Self {
            sentiment: Sentiment {
                score: 0.85,
                label: "Positive",
                breakdown: SentimentBreakdown {
                    positive: 75,
                    neutral: 20,
                    negative: 5,
                },
            },
            engagement: Engagement {
                score: 8.5,
                potential: "High",
                metrics: EngagementMetrics {
                    readability: 92,
                    uniqueness: 88,
                    relevance: 95,
                },
            },
            audience: Audience {
                primary: "Tech enthusiasts",
                age: "25-34",
                interests: vec!["Technology", "Innovation", "Digital Culture"],
            },
            seo: Seo {
                score: 89,
                keywords: vec!["content creation", "digital marketing", "social media"],
                readability: "Advanced",
            },
        }
    }
}

/// Hashtag suggestions grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hashtags {
    pub trending: Vec<&'static str>,
    pub niche: Vec<&'static str>,
    pub engagement: Vec<&'static str>,
    pub industry: Vec<&'static str>,
}

impl Hashtags {
    /// The fixed hashtag set.
    pub fn placeholder() -> Self {
        Self {
            trending: vec!["#ContentCreator", "#DigitalMarketing"],
            niche: vec!["#TechInfluencer", "#ContentStrategy"],
            engagement: vec!["#CreatorEconomy", "#SocialMediaTips"],
            industry: vec!["#MarketingTips", "#ContentMarketing"],
        }
    }

    /// Categories in display order.
    pub fn categories(&self) -> [(&'static str, &[&'static str]); 4] {
        [
            ("trending", self.trending.as_slice()),
            ("niche", self.niche.as_slice()),
            ("engagement", self.engagement.as_slice()),
            ("industry", self.industry.as_slice()),
        ]
    }
}
