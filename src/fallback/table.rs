use super::Category;

/// Trigger substrings in priority order. The first matching row wins.
pub const TRIGGER_RULES: [(&[&str], Category); 7] = [
    (&["sad", "down", "depressed"], Category::Sad),
    (&["stress", "overwhelm", "pressure"], Category::Stressed),
    (
        &["anxious", "anxiety", "worried", "nervous"],
        Category::Anxious,
    ),
    (&["motivat", "inspire", "goal"], Category::Motivation),
    (&["happy", "great", "amazing", "wonderful"], Category::Happy),
    (&["grateful", "thankful", "blessed"], Category::Grateful),
    (&["lonely", "alone", "isolated"], Category::Lonely),
];

const SAD: &[&str] = &[
    "I hear you, and I want you to know that it's okay to feel sad. 💙 Your feelings are valid. Remember, even the darkest nights end with a beautiful sunrise. What's weighing on your heart right now?",
    "I'm here with you. 🌟 Sadness is a natural part of being human, and it shows that you care deeply. Would you like to talk about what's making you feel this way?",
    "Thank you for sharing how you're feeling. 💜 It takes courage to acknowledge sadness. Remember, this feeling is temporary, and brighter days are ahead. How can I support you right now?",
];

const STRESSED: &[&str] = &[
    "I can sense you're feeling overwhelmed. 🌊 Let's take a deep breath together. Remember: you don't have to carry everything at once. What's the biggest source of stress for you right now?",
    "Stress can feel heavy, but you're stronger than you know. 💪 Let's break things down into smaller, manageable pieces. What's one thing we can tackle together?",
    "I'm here to help you find calm in the chaos. 🧘 Sometimes, the best thing we can do is pause and breathe. What would help you feel more at ease right now?",
];

const ANXIOUS: &[&str] = &[
    "Anxiety can feel overwhelming, but you're not alone in this. 🤝 Let's ground ourselves in the present moment. Can you name 5 things you can see around you right now?",
    "I understand that anxiety can make everything feel uncertain. 🌈 But remember: you've overcome challenges before, and you can do it again. What's making you feel anxious?",
    "Your feelings are valid, and it's okay to feel anxious. 💚 Let's work through this together. What would help you feel more secure right now?",
];

const MOTIVATION: &[&str] = &[
    "You've got this! 🚀 Every great achievement starts with the decision to try. What goal are you working towards? Let's break it down together!",
    "I believe in you! 💫 Remember, progress isn't always linear, but every step forward counts. What's one small action you can take today?",
    "Your potential is limitless! 🌟 The fact that you're here seeking motivation shows your commitment to growth. What dream are you chasing?",
];

const HAPPY: &[&str] = &[
    "That's wonderful! 🎉 Your joy is contagious! What's bringing you happiness today? I'd love to celebrate with you!",
    "I'm so glad to hear that! 😊 Happiness looks beautiful on you. What's making your day special?",
    "Amazing! 🌈 Keep riding that positive wave! What's putting that smile on your face?",
];

const GRATEFUL: &[&str] = &[
    "Gratitude is such a powerful emotion! 🙏 It's beautiful that you're taking time to appreciate the good things. What are you grateful for today?",
    "That's wonderful! 💖 Practicing gratitude can transform our perspective. What blessings are you counting today?",
    "I love your positive mindset! ✨ Gratitude opens the door to more abundance. What's filling your heart with thankfulness?",
];

const LONELY: &[&str] = &[
    "I'm here with you, and you're not alone. 🤗 Loneliness can be difficult, but remember that connection is always possible. Would you like to talk about what you're feeling?",
    "Thank you for reaching out. 💙 Even in moments of loneliness, you have the strength within you. I'm here to listen and support you.",
    "You're never truly alone. 🌟 I'm here, and there are people who care about you. What would help you feel more connected right now?",
];

const DEFAULT: &[&str] = &[
    "I'm here to listen and support you. 💜 Tell me more about what's on your mind. Your thoughts and feelings matter.",
    "Thank you for sharing with me. 🌟 I'm here to help you navigate whatever you're going through. What would be most helpful for you right now?",
    "I appreciate you opening up. 💙 Remember, every challenge is an opportunity for growth. How can I best support you today?",
    "You're taking a positive step by reaching out. ✨ I'm here to walk alongside you. What's the most important thing you'd like to talk about?",
];

/// Reply pools per category. Static data; every pool is non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTable;

impl CategoryTable {
    pub fn builtin() -> Self {
        Self
    }

    pub fn replies(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Sad => SAD,
            Category::Stressed => STRESSED,
            Category::Anxious => ANXIOUS,
            Category::Motivation => MOTIVATION,
            Category::Happy => HAPPY,
            Category::Grateful => GRATEFUL,
            Category::Lonely => LONELY,
            Category::Default => DEFAULT,
        }
    }
}
