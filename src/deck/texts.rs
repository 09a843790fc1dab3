// Official card texts. Embedded '\n' marks an intentional line break on the
// printed card; renderers must respect it.

/// Work pursuits (30 cards).
pub const WORK_TEXTS: [&str; 30] = [
    "Having partners to strive with",
    "Solving others' problems\nhelping others grow",
    "Influence on others and society",
    "Responsibility\nwillingness to take on duty",
    "Assets and money",
    "Opportunity and speed of promotion",
    "Owning my own business",
    "Authority\nholding a position of power",
    "Social recognition\nbeing respected",
    "Efficiency\neffectiveness",
    "Leading a team",
    "Pragmatism\nvaluing feasibility",
    "Being seen\nhaving a stage to shine on",
    "Clear processes and rules",
    "Going with the flow\ntaking things as they come",
    "Job stability",
    "Work-life balance",
    "Using my natural talents",
    "Pursuing beauty or art",
    "Professionalism",
    "Innovation and creativity",
    "Pursuing quality in my work",
    "Independence and autonomy",
    "Clear logic",
    "Continuous self-growth",
    "Security\nwork that feels predictable",
    "Adventure and challenge",
    "Clear goals or direction",
    "A sense of achievement",
    "An orderly, stable environment",
];

/// Self & life (19 cards).
pub const SELF_TEXTS: [&str; 19] = [
    "Enjoying life, food and leisure",
    "Interesting people and things",
    "Being true to myself",
    "Freedom, without constraint",
    "Inner peace",
    "Insight into life and human nature",
    "Staying clean\nin body, mind or surroundings",
    "A healthy body and mind",
    "Keeping my privacy, undisturbed",
    "Pursuing truth and knowledge",
    "Self-acceptance, liking who I am",
    "Self-expression",
    "A comfortable environment",
    "Faith, religion\nor a spiritual life",
    "An ordinary life",
    "Being close to nature",
    "A regular routine",
    "Having space to be alone",
    "Keeping a low profile",
];

/// Virtues (11 cards).
pub const VIRTUE_TEXTS: [&str; 11] = [
    "Loyalty",
    "National sovereignty and identity",
    "Honesty, never lying",
    "Doing no harm to others",
    "Gratitude, repaying kindness",
    "Sincerity and integrity",
    "The wellbeing of all humanity",
    "Respecting tradition and history",
    "Fairness and justice",
    "Protecting nature and animals",
    "Public good, caring for the weak",
];

/// Relationships (10 cards).
pub const RELATIONSHIP_TEXTS: [&str; 10] = [
    "A wide circle of friends",
    "Loving and being loved",
    "Belonging and identity\nbeing part of a group",
    "Mutual respect",
    "My parents' approval",
    "A safe and settled home",
    "Deep friendship",
    "Harmony with others",
    "Having children",
    "Taking good care of my family",
];
